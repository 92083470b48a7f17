//! # 폼 세션 요청/응답 DTO
//!
//! 프론트엔드가 폼 세션을 조작할 때 사용하는 요청 본문과,
//! 화면 렌더링에 필요한 상태를 담은 세션 뷰를 정의합니다.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::dto::archive::ArchiveReceipt;
use crate::domain::models::{FlowState, FormField, SubmissionForm};

/// 필드 수정 요청
///
/// ```json
/// { "field": "phoneNo", "value": "01012345678" }
/// ```
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct FieldEditRequest {
    pub field: FormField,
    #[validate(length(max = 254, message = "입력값이 너무 깁니다."))]
    pub value: String,
}

/// 개인정보 수집·이용 동의 요청
#[derive(Debug, Clone, Deserialize)]
pub struct ConsentRequest {
    pub agreed: bool,
}

/// 폼 세션 뷰
///
/// 에러/성공 팝업에 필요한 메시지(`lastError`, `message`)와
/// 버튼 표시 여부를 결정하는 `multiFactorPending`, `loading`을 포함합니다.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSessionView {
    pub session_id: Uuid,
    pub state: FlowState,
    pub form: SubmissionForm,
    pub validation_errors: BTreeMap<FormField, String>,
    pub consent_agreed: bool,
    pub multi_factor_pending: bool,
    pub loading: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archive: Option<ArchiveReceipt>,
    pub updated_at: DateTime<Utc>,
}
