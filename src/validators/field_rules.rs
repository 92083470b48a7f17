//! # 신청서 필드 검증 규칙
//!
//! 필드 이름과 입력값을 받아 통과 여부와 사용자용 메시지를 돌려주는 순수 함수들입니다.
//! 각 규칙은 다른 필드와 독립적으로 동작합니다.
//!
//! | 필드 | 규칙 |
//! |------|------|
//! | `id` | `local@domain.tld` 형태의 이메일 |
//! | `legalName` | 한글 음절 2-10자 |
//! | `phoneNo` | `010`으로 시작하는 11자리 숫자 |
//! | `birthdate` | 8자리 숫자, 연도 1900-올해, 월 1-12, 일 1-31 |
//!
//! 생년월일의 일(day) 상한은 월과 무관하게 31로 고정입니다.
//! 달력상 정확한 검증이 아닌 의도된 단순화입니다.

use chrono::Datelike;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::domain::models::FormField;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("hardcoded email regex is invalid")
});

static KOREAN_NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[가-힣]{2,10}$").expect("hardcoded name regex is invalid"));

static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^010[0-9]{8}$").expect("hardcoded phone regex is invalid"));

static BIRTHDATE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{8}$").expect("hardcoded birthdate regex is invalid"));

/// 생년월일 연도 하한
pub const MIN_BIRTH_YEAR: i32 = 1900;

/// 검증 실패 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldErrorKind {
    /// 빈 입력
    Required,
    /// 형식 불일치
    InvalidFormat,
    /// 형식은 맞지만 값의 범위를 벗어남
    OutOfRange,
}

/// 필드 검증 실패
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FieldError {
    pub kind: FieldErrorKind,
    pub message: String,
}

impl FieldError {
    fn new(kind: FieldErrorKind, message: &str) -> Self {
        Self {
            kind,
            message: message.to_string(),
        }
    }

    fn required(message: &str) -> Self {
        Self::new(FieldErrorKind::Required, message)
    }

    fn format(message: &str) -> Self {
        Self::new(FieldErrorKind::InvalidFormat, message)
    }

    fn range(message: &str) -> Self {
        Self::new(FieldErrorKind::OutOfRange, message)
    }
}

/// 필드 하나를 검증합니다.
///
/// 검증 규칙이 없는 필드(통신사, 인증 수단, 조회 기간)는 항상 통과합니다.
pub fn validate_field(field: FormField, value: &str) -> Result<(), FieldError> {
    match field {
        FormField::Id => validate_email(value),
        FormField::LegalName => validate_legal_name(value),
        FormField::PhoneNo => validate_phone_no(value),
        FormField::Birthdate => validate_birthdate(value),
        FormField::LoginType
        | FormField::LoginTypeLevel
        | FormField::Telecom
        | FormField::StartDate
        | FormField::EndDate => Ok(()),
    }
}

pub fn validate_email(value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        return Err(FieldError::required("이메일을 입력해주세요."));
    }
    if !EMAIL_REGEX.is_match(value) {
        return Err(FieldError::format("올바른 이메일 형식이 아닙니다."));
    }
    Ok(())
}

pub fn validate_legal_name(value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        return Err(FieldError::required("이름을 입력해주세요."));
    }
    if !KOREAN_NAME_REGEX.is_match(value) {
        return Err(FieldError::format("2-10자의 한글 이름을 입력해주세요."));
    }
    Ok(())
}

pub fn validate_phone_no(value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        return Err(FieldError::required("전화번호를 입력해주세요."));
    }
    if !PHONE_REGEX.is_match(value) {
        return Err(FieldError::format(
            "010으로 시작하는 11자리 숫자를 입력해주세요.",
        ));
    }
    Ok(())
}

/// 올해를 기준으로 생년월일을 검증합니다.
pub fn validate_birthdate(value: &str) -> Result<(), FieldError> {
    validate_birthdate_in(value, chrono::Local::now().year())
}

/// 주어진 연도를 상한으로 생년월일을 검증합니다.
pub fn validate_birthdate_in(value: &str, current_year: i32) -> Result<(), FieldError> {
    if value.is_empty() {
        return Err(FieldError::required("생년월일을 입력해주세요."));
    }
    if !BIRTHDATE_REGEX.is_match(value) {
        return Err(FieldError::format(
            "8자리 숫자로 입력해주세요. (예: 19801212)",
        ));
    }

    // 정규식으로 ASCII 숫자 8자리가 보장됨
    let year: i32 = value[0..4].parse().unwrap_or_default();
    let month: u32 = value[4..6].parse().unwrap_or_default();
    let day: u32 = value[6..8].parse().unwrap_or_default();

    if !(MIN_BIRTH_YEAR..=current_year).contains(&year) {
        return Err(FieldError::range("올바른 연도를 입력해주세요."));
    }
    if !(1..=12).contains(&month) {
        return Err(FieldError::range("올바른 월을 입력해주세요."));
    }
    if !(1..=31).contains(&day) {
        return Err(FieldError::range("올바른 일을 입력해주세요."));
    }
    Ok(())
}
