//! # Core Module
//!
//! 서비스 전역에서 쓰이는 기반 요소를 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현으로 상태 코드와 JSON 본문 매핑
//! - **ErrorContext**: 외부 라이브러리 에러를 `AppError`로 변환하는 확장 trait
//!
//! ### [`registry`] - 서비스 컨테이너
//! - **ServiceRegistry**: 게이트웨이, 기록기, 세션 저장소를 묶어 `web::Data`로 공유
//!
//! ## 에러 처리 예시
//!
//! ```rust,ignore
//! use crate::core::errors::AppError;
//!
//! #[post("/{id}/confirm")]
//! async fn confirm(
//!     registry: web::Data<ServiceRegistry>,
//!     path: web::Path<Uuid>,
//! ) -> Result<HttpResponse, AppError> {
//!     let slot = registry.sessions().get(path.into_inner()).await?; // 404로 자동 변환
//!     // ...
//! }
//! ```

pub mod errors;
pub mod registry;

pub use errors::*;
pub use registry::*;
