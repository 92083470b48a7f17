//! # Application Error Handling System
//!
//! 수집 서비스 전역에서 사용하는 통합 에러 타입입니다.
//! `thiserror`로 `Error` trait을 구현하고 `actix_web::ResponseError`를 구현하여
//! 핸들러에서 `?` 연산자만으로 일관된 JSON 에러 응답을 돌려줍니다.
//!
//! ## 에러 분류
//!
//! | AppError | HTTP Status | 발생 위치 |
//! |----------|-------------|-----------|
//! | `ValidationError` | 400 Bad Request | 필드 검증 실패, 동의 누락 (네트워크 호출 없음) |
//! | `NotFound` | 404 Not Found | 존재하지 않거나 만료된 폼 세션 |
//! | `SequenceError` | 409 Conflict | 1단계 인증 없이 2단계 요청 |
//! | `BusinessError` | 422 Unprocessable Entity | 외부 API가 2xx로 응답했지만 `status != "success"` |
//! | `TransportError` | 502 Bad Gateway | 외부 API 연결 실패 또는 non-2xx 응답 |
//! | `ArchiveError` | 500 Internal Server Error | 인증은 성공했지만 저장소 기록 실패 |
//! | `InternalError` | 500 Internal Server Error | 예상하지 못한 오류 |
//!
//! ## 응답 형식
//!
//! ```json
//! {
//!   "error": "business_error",
//!   "message": "입력 정보를 다시 한번 확인해주세요."
//! }
//! ```
//!
//! `message`는 사용자에게 그대로 노출되는 문구이며, `Display` 구현은
//! 로그용으로 에러 분류 접두어를 포함합니다.

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 모든 에러는 현재 시도에 대해서만 치명적입니다. 프로세스는 계속 동작하며
/// 사용자는 입력을 수정한 뒤 다시 제출할 수 있습니다.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    /// 입력값 검증 에러
    ///
    /// 필수 필드 누락, 형식 오류, 개인정보 수집 동의 누락 등
    /// 네트워크 호출 전에 로컬에서 판별되는 오류입니다.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 순서 위반 에러
    ///
    /// 1단계(인증 요청)가 성공하지 않은 상태에서 2단계(인증 확인)를
    /// 요청한 경우입니다.
    #[error("Sequence error: {0}")]
    SequenceError(String),

    /// 외부 서비스 통신 에러
    ///
    /// 연결 실패, 타임아웃, non-2xx 상태 코드, 응답 본문 파싱 실패를
    /// 포함합니다. 메시지는 전송 계층의 상태 텍스트에서 만들어집니다.
    #[error("Transport error: {0}")]
    TransportError(String),

    /// 외부 API 비즈니스 에러
    ///
    /// 2xx 응답이지만 응답 봉투의 `status`가 `"success"`가 아닌 경우입니다.
    /// `code`와 `message`는 봉투에서 그대로 가져옵니다.
    #[error("Business error [{}]: {message}", .code.as_deref().unwrap_or("-"))]
    BusinessError {
        code: Option<String>,
        message: String,
    },

    /// 저장소 기록 에러
    ///
    /// 인증 자체는 성공했더라도 요청/응답 기록이 실패하면 전체 흐름은
    /// 실패로 보고됩니다.
    #[error("Archive error: {0}")]
    ArchiveError(String),

    /// 리소스 찾을 수 없음 에러
    #[error("Not found: {0}")]
    NotFound(String),

    /// 내부 서버 에러
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 응답 본문의 `error` 필드에 들어가는 에러 분류 코드
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "validation_error",
            AppError::SequenceError(_) => "sequence_error",
            AppError::TransportError(_) => "transport_error",
            AppError::BusinessError { .. } => "business_error",
            AppError::ArchiveError(_) => "archive_error",
            AppError::NotFound(_) => "not_found",
            AppError::InternalError(_) => "internal_error",
        }
    }

    /// 사용자에게 보여줄 메시지 (분류 접두어 없음)
    pub fn user_message(&self) -> &str {
        match self {
            AppError::ValidationError(msg)
            | AppError::SequenceError(msg)
            | AppError::TransportError(msg)
            | AppError::ArchiveError(msg)
            | AppError::NotFound(msg)
            | AppError::InternalError(msg) => msg,
            AppError::BusinessError { message, .. } => message,
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::SequenceError(_) => StatusCode::CONFLICT,
            AppError::BusinessError { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::TransportError(_) => StatusCode::BAD_GATEWAY,
            AppError::ArchiveError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 5xx 에러는 서버 로그에 상세 내용을 남기고, 클라이언트에는
    /// 사용자용 메시지만 전달합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("{}", self);
        }

        actix_web::HttpResponse::build(status).json(serde_json::json!({
            "error": self.kind(),
            "message": self.user_message(),
        }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// ```rust,ignore
/// let body = serde_json::to_vec_pretty(&payload)
///     .context("요청 데이터 직렬화 실패")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
