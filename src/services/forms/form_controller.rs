//! # 폼 상태 컨트롤러
//!
//! 한 사용자의 신청서 입력, 필드 검증, 2단계 간편인증 흐름을 관리합니다.
//!
//! ## 흐름
//!
//! ```text
//! edit_field / set_consent          (Editing)
//!        │
//! submit_phase1 ──► initiate ──► AwaitingUserConfirmation   (사용자가 휴대폰에서 인증)
//!        │                              │
//!        │                       submit_phase2 ──► confirm ──► archive ──► Completed
//!        ▼                              ▼
//!   실패: lastError 기록, Editing 복귀, 세션 토큰 폐기
//! ```
//!
//! 외부 호출 중에는 `loading`이 켜지며 성공/실패와 관계없이 호출이 끝나면 꺼집니다.
//! 세션마다 마지막 뷰를 [`ViewCell`]에 게시하므로 호출이 진행 중일 때도
//! 잠금 없이 현재 상태를 조회할 수 있습니다.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use chrono::Utc;
use uuid::Uuid;

use crate::core::errors::{AppError, AppResult, ErrorContext};
use crate::domain::dto::archive::ArchiveReceipt;
use crate::domain::dto::forms::FormSessionView;
use crate::domain::dto::verification::ConfirmRequest;
use crate::domain::models::{FlowState, FormField, PendingVerification, SubmissionForm};
use crate::services::archive::RecordArchiver;
use crate::services::verification::VerificationGateway;
use crate::utils::string_utils::mask_email;
use crate::validators::validate_field;

/// 입력 정보 재확인이 필요한 외부 API 에러 코드
pub const RECHECK_INPUT_CODE: &str = "SE-001";

pub const INCOMPLETE_FORM_MESSAGE: &str = "모든 필드를 올바르게 입력해주세요.";
pub const CONSENT_REQUIRED_MESSAGE: &str = "개인정보 수집·이용에 동의해주세요.";
pub const RECHECK_INPUT_MESSAGE: &str = "입력 정보를 다시 한번 확인해주세요.";
pub const PHASE1_REQUIRED_MESSAGE: &str = "먼저 인증 요청을 진행해주세요.";
pub const ARCHIVE_FAILED_MESSAGE: &str = "파일 저장에 실패했습니다.";
pub const INVALID_CHOICE_MESSAGE: &str = "목록에 있는 값을 선택해주세요.";
pub const COMPLETED_MESSAGE: &str = "데이터가 성공적으로 수집되었습니다!\n참여해주셔서 감사합니다.";

/// 세션의 마지막 뷰를 담는 공유 셀
pub type ViewCell = Arc<RwLock<FormSessionView>>;

/// 한 사용자의 폼 세션
pub struct FormSession {
    id: Uuid,
    form: SubmissionForm,
    errors: BTreeMap<FormField, String>,
    consent_agreed: bool,
    state: FlowState,
    pending: Option<PendingVerification>,
    loading: bool,
    last_error: Option<String>,
    message: Option<String>,
    archive: Option<ArchiveReceipt>,
    published: ViewCell,
}

impl FormSession {
    pub fn new(id: Uuid) -> Self {
        let form = SubmissionForm::default();
        let published = Arc::new(RwLock::new(FormSessionView {
            session_id: id,
            state: FlowState::Editing,
            form: form.clone(),
            validation_errors: BTreeMap::new(),
            consent_agreed: false,
            multi_factor_pending: false,
            loading: false,
            last_error: None,
            message: None,
            archive: None,
            updated_at: Utc::now(),
        }));

        Self {
            id,
            form,
            errors: BTreeMap::new(),
            consent_agreed: false,
            state: FlowState::Editing,
            pending: None,
            loading: false,
            last_error: None,
            message: None,
            archive: None,
            published,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    pub fn form(&self) -> &SubmissionForm {
        &self.form
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn pending(&self) -> Option<&PendingVerification> {
        self.pending.as_ref()
    }

    /// 게시된 뷰 셀. 세션 잠금 없이 읽을 수 있습니다.
    pub fn view_cell(&self) -> ViewCell {
        Arc::clone(&self.published)
    }

    /// 현재 상태의 뷰를 만듭니다.
    pub fn view(&self) -> FormSessionView {
        FormSessionView {
            session_id: self.id,
            state: self.state,
            form: self.form.clone(),
            validation_errors: self.errors.clone(),
            consent_agreed: self.consent_agreed,
            multi_factor_pending: self.pending.is_some(),
            loading: self.loading,
            last_error: self.last_error.clone(),
            message: self.message.clone(),
            archive: self.archive.clone(),
            updated_at: Utc::now(),
        }
    }

    fn publish(&self) {
        let view = self.view();
        let mut slot = self
            .published
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *slot = view;
    }

    /// 필드 하나를 수정하고 그 필드의 검증 결과만 갱신합니다.
    ///
    /// 완료된 세션은 첫 수정에서 다시 `Editing`으로 돌아갑니다.
    /// 인증 확인을 기다리는 중의 수정은 2단계 요청에 반영되지 않습니다.
    pub fn edit_field(&mut self, field: FormField, value: String) -> AppResult<()> {
        if !self.form.set_value(field, value) {
            return Err(AppError::ValidationError(INVALID_CHOICE_MESSAGE.to_string()));
        }

        if self.state == FlowState::Completed {
            self.state = FlowState::Editing;
            self.message = None;
            self.archive = None;
        }
        self.last_error = None;

        if field.is_validated() {
            match validate_field(field, self.form.value_of(field)) {
                Ok(()) => {
                    self.errors.remove(&field);
                }
                Err(err) => {
                    self.errors.insert(field, err.message);
                }
            }
        }

        self.publish();
        Ok(())
    }

    pub fn set_consent(&mut self, agreed: bool) {
        self.consent_agreed = agreed;
        self.publish();
    }

    /// 1단계: 입력값을 다시 검증한 뒤 간편인증을 요청합니다.
    ///
    /// 검증 실패나 동의 누락은 외부 호출 없이 `ValidationError`로 끝납니다.
    /// 확인 대기 중에 다시 요청하면 기존 세션 토큰은 새 토큰으로 교체됩니다.
    pub async fn submit_phase1(&mut self, gateway: &dyn VerificationGateway) -> AppResult<()> {
        self.message = None;

        if !self.revalidate_all() {
            return Err(self.fail(AppError::ValidationError(
                INCOMPLETE_FORM_MESSAGE.to_string(),
            )));
        }
        if !self.consent_agreed {
            return Err(self.fail(AppError::ValidationError(
                CONSENT_REQUIRED_MESSAGE.to_string(),
            )));
        }

        self.pending = None;
        self.begin_call(FlowState::AwaitingPhase1);
        log::info!("[{}] 1단계 인증 요청: {}", self.id, mask_email(&self.form.id));

        let result = gateway.initiate(&self.form).await;
        self.loading = false;

        match result {
            Ok(session) => {
                self.pending = Some(PendingVerification {
                    form: self.form.clone(),
                    session,
                });
                self.state = FlowState::AwaitingUserConfirmation;
                self.last_error = None;
                self.publish();
                log::info!("[{}] 1단계 인증 요청 성공, 사용자 확인 대기", self.id);
                Ok(())
            }
            Err(err) => {
                log::warn!("[{}] 1단계 인증 요청 실패: {}", self.id, err);
                Err(self.fail(remap_phase1_error(err)))
            }
        }
    }

    /// 2단계: 인증 결과를 조회하고 요청/응답을 기록합니다.
    ///
    /// 요청 본문은 1단계에 보낸 신청서 스냅샷으로 만듭니다.
    /// 세션 토큰은 성공/실패와 관계없이 한 번 사용하면 폐기됩니다.
    pub async fn submit_phase2(
        &mut self,
        gateway: &dyn VerificationGateway,
        archiver: &dyn RecordArchiver,
    ) -> AppResult<ArchiveReceipt> {
        self.message = None;

        let Some(pending) = self.pending.take() else {
            return Err(self.fail(AppError::SequenceError(
                PHASE1_REQUIRED_MESSAGE.to_string(),
            )));
        };

        let request = ConfirmRequest::from_pending(&pending);
        let request_body = match serde_json::to_value(&request).context("2단계 요청 직렬화 실패") {
            Ok(body) => body,
            Err(err) => return Err(self.fail(err)),
        };

        self.begin_call(FlowState::AwaitingPhase2);
        log::info!("[{}] 2단계 인증 확인 요청", self.id);

        let response_body = match gateway.confirm(&request).await {
            Ok(body) => body,
            Err(err) => {
                log::warn!("[{}] 2단계 인증 확인 실패: {}", self.id, err);
                return Err(self.fail(err));
            }
        };

        let user_id = pending.form.id.as_str();
        let receipt = match archiver.archive(&request_body, &response_body, user_id).await {
            Ok(receipt) => receipt,
            Err(err) => {
                log::error!("[{}] 인증 결과 기록 실패: {}", self.id, err);
                return Err(self.fail(AppError::ArchiveError(
                    ARCHIVE_FAILED_MESSAGE.to_string(),
                )));
            }
        };

        self.loading = false;
        self.form = SubmissionForm::default();
        self.errors.clear();
        self.state = FlowState::Completed;
        self.last_error = None;
        self.message = Some(COMPLETED_MESSAGE.to_string());
        self.archive = Some(receipt.clone());
        self.publish();

        log::info!("[{}] 수집 완료: {}", self.id, mask_email(user_id));
        Ok(receipt)
    }

    /// 검증 대상 필드를 모두 다시 검사하고 에러 맵을 갱신합니다.
    fn revalidate_all(&mut self) -> bool {
        let mut all_valid = true;
        for field in FormField::VALIDATED {
            match validate_field(field, self.form.value_of(field)) {
                Ok(()) => {
                    self.errors.remove(&field);
                }
                Err(err) => {
                    self.errors.insert(field, err.message);
                    all_valid = false;
                }
            }
        }
        all_valid
    }

    fn begin_call(&mut self, state: FlowState) {
        self.state = state;
        self.loading = true;
        self.last_error = None;
        self.publish();
    }

    /// 실패를 기록하고 `Editing`으로 되돌린 뒤 에러를 그대로 돌려줍니다.
    fn fail(&mut self, err: AppError) -> AppError {
        self.state = FlowState::Editing;
        self.pending = None;
        self.loading = false;
        self.last_error = Some(err.user_message().to_string());
        self.publish();
        err
    }
}

/// 1단계 실패 중 입력 재확인 코드는 고정 문구로 바꿉니다.
fn remap_phase1_error(err: AppError) -> AppError {
    match err {
        AppError::BusinessError { code, .. } if code.as_deref() == Some(RECHECK_INPUT_CODE) => {
            AppError::BusinessError {
                code,
                message: RECHECK_INPUT_MESSAGE.to_string(),
            }
        }
        other => other,
    }
}
