//! # 문자열 유틸리티
//!
//! 로그에 개인정보를 남기지 않기 위한 마스킹 함수입니다.

/// 로그 출력용 이메일 마스킹
///
/// 로컬 파트의 앞 두 글자만 남기고 나머지는 `***`로 가립니다.
/// 도메인은 그대로 둡니다. `@`가 없으면 전체를 가립니다.
///
/// ```rust,ignore
/// assert_eq!(mask_email("user@example.com"), "us***@example.com");
/// assert_eq!(mask_email("a@b.c"), "a***@b.c");
/// ```
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let visible: String = local.chars().take(2).collect();
            format!("{}***@{}", visible, domain)
        }
        None if email.is_empty() => String::new(),
        None => "***".to_string(),
    }
}
