//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 받아 서비스 계층에 위임하고 응답을 만드는 핸들러 함수들입니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 폼 흐름, 외부 API, 기록              ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Domain - 신청서 모델, DTO                      ← Domain Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 핸들러 구성
//!
//! - [`forms`] - 폼 세션 생성/조회/수정과 2단계 인증 흐름
//! - [`verification`] - 외부 조회 API 중계
//! - [`archive`] - 요청/응답 기록
//!
//! 모든 핸들러는 `web::Data<ServiceRegistry>`로 서비스에 접근하고,
//! 실패는 `AppError`로 돌려주어 `ResponseError` 구현이 JSON 응답을 만듭니다.
//!
//! ```rust,ignore
//! #[post("/{session_id}/initiate")]
//! pub async fn initiate(
//!     registry: web::Data<ServiceRegistry>,
//!     session_id: web::Path<Uuid>,
//! ) -> Result<HttpResponse, AppError> {
//!     let slot = registry.sessions().get(session_id.into_inner()).await?;
//!     let mut session = slot.session().lock().await;
//!     session.submit_phase1(registry.gateway()).await?;
//!     Ok(HttpResponse::Ok().json(session.view()))
//! }
//! ```

pub mod archive;
pub mod forms;
pub mod verification;
