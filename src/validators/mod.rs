//! 입력값 검증 모듈
//!
//! 신청서 필드별 검증 규칙([`field_rules`])과, `validator` derive 검증 결과에서
//! 사용자용 메시지를 꺼내는 도우미를 제공합니다.

pub mod field_rules;

pub use field_rules::{FieldError, FieldErrorKind, validate_field};

use validator::ValidationErrors;

/// `#[validate(...)]`에 지정한 메시지 중 첫 번째를 돌려줍니다.
///
/// 메시지가 지정되지 않은 규칙만 실패했다면 `validator`의 기본 표현을 사용합니다.
pub fn first_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|field_errors| field_errors.iter())
        .find_map(|error| error.message.as_ref().map(|message| message.to_string()))
        .unwrap_or_else(|| errors.to_string())
}
