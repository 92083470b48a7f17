//! # 요청/응답 기록 DTO
//!
//! `POST /api/v1/archive` 요청과 응답, 그리고 기록 결과(저장된 객체 키)를 정의합니다.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

/// 기록 요청 본문
///
/// ```json
/// {
///   "requestData": { "...": "2단계 요청 본문" },
///   "responseData": { "...": "2단계 응답 본문" },
///   "email": "user@example.com"
/// }
/// ```
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveRequest {
    pub request_data: Value,
    pub response_data: Value,
    /// 객체 키에 사용되는 사용자 식별자
    #[validate(email(message = "올바른 이메일 형식이 아닙니다."))]
    pub email: String,
}

/// 기록 결과
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveReceipt {
    pub request_key: String,
    pub response_key: String,
}

/// 기록 응답 본문
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ArchiveResponse {
    pub fn saved(email: &str, receipt: ArchiveReceipt) -> Self {
        Self {
            success: true,
            message: Some(format!(
                "데이터가 S3에 {email}-request.json, {email}-response.json으로 저장되었습니다."
            )),
            request_key: Some(receipt.request_key),
            response_key: Some(receipt.response_key),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: None,
            request_key: None,
            response_key: None,
            error: Some(error.into()),
        }
    }
}
