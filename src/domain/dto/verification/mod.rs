//! # 건강검진 조회 API 요청/응답 DTO
//!
//! 외부 API는 모든 응답을 공통 봉투(envelope)로 감쌉니다.
//!
//! ```json
//! {
//!   "status": "success",
//!   "code": "SE-001",
//!   "message": "...",
//!   "data": { "transactionId": "...", "jobIndex": 0, "threadIndex": 0, "multiFactorTimestamp": 1690000000 }
//! }
//! ```
//!
//! `status`가 정확히 `"success"`인 경우만 성공으로 취급합니다.
//! `code`는 숫자로 오는 경우도 있어 문자열로 바꿔 보관합니다.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::domain::models::{MultiFactorSession, PendingVerification, SubmissionForm};

/// 성공을 나타내는 봉투 판별값
pub const SUCCESS_STATUS: &str = "success";

/// 2단계 요청임을 나타내는 `isContinue` 값
pub const CONTINUE_FLAG: &str = "1";

/// 외부 API 응답 봉투
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VerificationEnvelope {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "deserialize_code")]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<Value>,
}

impl VerificationEnvelope {
    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some(SUCCESS_STATUS)
    }
}

/// 문자열이 아닌 에러 코드는 JSON 표기를 그대로 문자열로 씁니다.
fn deserialize_code<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(code)) => Some(code),
        Some(other) => Some(other.to_string()),
    })
}

/// 2단계(인증 확인) 요청 본문
///
/// 신청서 필드 위에 `isContinue`와 `multiFactorInfo`를 덧붙인 형태입니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmRequest {
    #[serde(flatten)]
    pub form: SubmissionForm,
    pub is_continue: String,
    pub multi_factor_info: MultiFactorSession,
}

impl ConfirmRequest {
    pub fn from_pending(pending: &PendingVerification) -> Self {
        Self {
            form: pending.form.clone(),
            is_continue: CONTINUE_FLAG.to_string(),
            multi_factor_info: pending.session.clone(),
        }
    }
}

/// 중계 가능한 조회 상품
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NhisProduct {
    /// 건강검진 결과
    Checkup,
    /// 진료 및 투약 내역
    TreatmentRecord,
}

impl NhisProduct {
    /// 서비스 라우트의 경로 조각에서 상품을 찾습니다.
    pub fn from_path(segment: &str) -> Option<Self> {
        match segment {
            "checkup" => Some(NhisProduct::Checkup),
            "treatment-record" | "treatment_record" => Some(NhisProduct::TreatmentRecord),
            _ => None,
        }
    }

    /// 외부 API의 경로 조각
    pub fn upstream_path(&self) -> &'static str {
        match self {
            NhisProduct::Checkup => "checkup",
            NhisProduct::TreatmentRecord => "treatment_record",
        }
    }
}
