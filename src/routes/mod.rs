//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 제공합니다.
//! 폼 세션, 외부 조회 API 중계, 기록 라우트와 헬스체크 엔드포인트를 포함합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let app = App::new()
//!     .app_data(web::Data::new(registry))
//!     .configure(configure_all_routes);
//! ```

use actix_web::web;
use serde_json::json;

use crate::core::errors::AppError;
use crate::handlers;

/// 모든 라우트를 설정합니다
///
/// 기능별로 분할된 라우트들을 통합하여 애플리케이션에 등록합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config());

    // Health check endpoint
    cfg.service(health_check);

    configure_form_routes(cfg);
    configure_nhis_routes(cfg);
    configure_archive_routes(cfg);
}

/// JSON 본문 추출 설정
///
/// 본문을 해석하지 못하면 다른 검증 실패와 같은 형식(`validation_error`, 400)으로 응답합니다.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::debug!("JSON 본문 해석 실패: {}", err);
        AppError::ValidationError(format!("요청 본문을 해석할 수 없습니다: {}", err)).into()
    })
}

/// 폼 세션 라우트를 설정합니다
///
/// # Available Routes
///
/// - `POST /api/v1/forms` - 폼 세션 생성
/// - `GET /api/v1/forms/{id}` - 세션 뷰 조회
/// - `DELETE /api/v1/forms/{id}` - 세션 삭제
/// - `PATCH /api/v1/forms/{id}/fields` - 필드 수정
/// - `PUT /api/v1/forms/{id}/consent` - 개인정보 수집 동의
/// - `POST /api/v1/forms/{id}/initiate` - 1단계 간편인증 요청
/// - `POST /api/v1/forms/{id}/confirm` - 2단계 인증 확인 및 기록
///
/// # Examples
///
/// ```bash
/// ID=$(curl -s -X POST http://localhost:8080/api/v1/forms | jq -r .sessionId)
///
/// curl -X PUT http://localhost:8080/api/v1/forms/$ID/consent \
///   -H "Content-Type: application/json" \
///   -d '{"agreed":true}'
///
/// curl -X POST http://localhost:8080/api/v1/forms/$ID/initiate
/// ```
fn configure_form_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/forms")
            .service(handlers::forms::create_form)
            .service(handlers::forms::get_form)
            .service(handlers::forms::delete_form)
            .service(handlers::forms::edit_field)
            .service(handlers::forms::set_consent)
            .service(handlers::forms::initiate)
            .service(handlers::forms::confirm),
    );
}

/// 외부 조회 API 중계 라우트를 설정합니다
///
/// - `POST /api/v1/nhis/checkup`
/// - `POST /api/v1/nhis/treatment-record`
fn configure_nhis_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api/v1/nhis").service(handlers::verification::relay));
}

/// 기록 라우트를 설정합니다
///
/// - `POST /api/v1/archive` - 요청/응답 쌍 저장
fn configure_archive_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api/v1/archive").service(handlers::archive::save_records));
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "health_record_collector",
///   "version": "0.1.0",
///   "timestamp": "2025-01-01T00:00:00Z",
///   "features": {
///     "verification": "NHIS simple authentication (2-phase)",
///     "archive": "S3"
///   }
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "verification": "NHIS simple authentication (2-phase)",
            "archive": "S3"
        }
    }))
}
