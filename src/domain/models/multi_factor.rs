//! 간편인증 세션 토큰 모델
//!
//! 1단계 응답으로 받은 토큰은 해석하지 않고 2단계 요청에 그대로 되돌려 보냅니다.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::models::SubmissionForm;

/// 외부 API가 발급한 간편인증 세션 토큰
///
/// 네 값의 JSON 타입은 외부 API가 정하므로 받은 값을 그대로 보관했다가
/// 2단계 요청의 `multiFactorInfo`로 돌려보냅니다. 그 밖의 키는 버립니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiFactorSession {
    pub transaction_id: Value,
    pub job_index: Value,
    pub thread_index: Value,
    pub multi_factor_timestamp: Value,
}

/// 2단계 확인을 기다리는 인증 건
///
/// 1단계에 보낸 신청서 스냅샷과 발급된 토큰을 함께 보관합니다.
/// 2단계는 항상 이 스냅샷으로 요청하므로 그 사이의 입력 수정은 반영되지 않습니다.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingVerification {
    pub form: SubmissionForm,
    pub session: MultiFactorSession,
}
