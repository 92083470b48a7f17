//! # 신청서 폼 세션 HTTP 핸들러
//!
//! 프론트엔드 화면 하나에 대응하는 폼 세션을 만들고 조작합니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/api/v1/forms` | 새 폼 세션 | 201 Created |
//! | `GET` | `/api/v1/forms/{id}` | 세션 뷰 조회 | 200 OK |
//! | `DELETE` | `/api/v1/forms/{id}` | 세션 삭제 | 204 No Content |
//! | `PATCH` | `/api/v1/forms/{id}/fields` | 필드 하나 수정 | 200 OK |
//! | `PUT` | `/api/v1/forms/{id}/consent` | 개인정보 수집 동의 | 200 OK |
//! | `POST` | `/api/v1/forms/{id}/initiate` | 1단계 간편인증 요청 | 200 OK |
//! | `POST` | `/api/v1/forms/{id}/confirm` | 2단계 인증 확인 및 기록 | 200 OK |
//!
//! 성공 응답은 모두 세션 뷰(`FormSessionView`)입니다. 실패 시에는 `AppError` JSON을 돌려주며,
//! 같은 메시지가 세션 뷰의 `lastError`에도 남습니다.
//!
//! ```bash
//! curl -X PATCH http://localhost:8080/api/v1/forms/$ID/fields \
//!   -H "Content-Type: application/json" \
//!   -d '{"field":"phoneNo","value":"01012345678"}'
//! ```

use actix_web::{HttpResponse, delete, get, patch, post, put, web};
use uuid::Uuid;
use validator::Validate;

use crate::core::errors::AppError;
use crate::core::registry::ServiceRegistry;
use crate::domain::dto::forms::{ConsentRequest, FieldEditRequest};
use crate::validators::first_message;

#[post("")]
pub async fn create_form(registry: web::Data<ServiceRegistry>) -> HttpResponse {
    HttpResponse::Created().json(registry.sessions().create().await)
}

/// 세션 뷰 조회
///
/// 외부 호출이 진행 중이어도 기다리지 않고 `loading: true`인 마지막 뷰를 돌려줍니다.
#[get("/{session_id}")]
pub async fn get_form(
    registry: web::Data<ServiceRegistry>,
    session_id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let slot = registry.sessions().get(session_id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(slot.snapshot()))
}

#[delete("/{session_id}")]
pub async fn delete_form(
    registry: web::Data<ServiceRegistry>,
    session_id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    registry.sessions().remove(session_id.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// 필드 수정
///
/// 수정한 필드의 검증 결과만 `validationErrors`에 반영됩니다.
#[patch("/{session_id}/fields")]
pub async fn edit_field(
    registry: web::Data<ServiceRegistry>,
    session_id: web::Path<Uuid>,
    payload: web::Json<FieldEditRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(first_message(&e)))?;

    let slot = registry.sessions().get(session_id.into_inner()).await?;
    let mut session = slot.session().lock().await;

    let FieldEditRequest { field, value } = payload.into_inner();
    session.edit_field(field, value)?;

    Ok(HttpResponse::Ok().json(session.view()))
}

#[put("/{session_id}/consent")]
pub async fn set_consent(
    registry: web::Data<ServiceRegistry>,
    session_id: web::Path<Uuid>,
    payload: web::Json<ConsentRequest>,
) -> Result<HttpResponse, AppError> {
    let slot = registry.sessions().get(session_id.into_inner()).await?;
    let mut session = slot.session().lock().await;

    session.set_consent(payload.agreed);

    Ok(HttpResponse::Ok().json(session.view()))
}

/// 1단계: 간편인증 요청
///
/// 성공하면 사용자는 휴대폰에서 인증을 마친 뒤 `confirm`을 호출합니다.
#[post("/{session_id}/initiate")]
pub async fn initiate(
    registry: web::Data<ServiceRegistry>,
    session_id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let slot = registry.sessions().get(session_id.into_inner()).await?;
    let mut session = slot.session().lock().await;

    session.submit_phase1(registry.gateway()).await?;

    Ok(HttpResponse::Ok().json(session.view()))
}

/// 2단계: 인증 확인 후 요청/응답 기록
///
/// 성공 시 뷰의 `archive`에 저장된 객체 키가 담기고 폼은 초기값으로 돌아갑니다.
#[post("/{session_id}/confirm")]
pub async fn confirm(
    registry: web::Data<ServiceRegistry>,
    session_id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let slot = registry.sessions().get(session_id.into_inner()).await?;
    let mut session = slot.session().lock().await;

    session
        .submit_phase2(registry.gateway(), registry.archiver())
        .await?;

    Ok(HttpResponse::Ok().json(session.view()))
}
