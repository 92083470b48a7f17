//! # 건강검진 조회 API 중계 핸들러
//!
//! 브라우저가 API 키 없이 외부 조회 API를 호출할 수 있도록 요청 본문을 그대로 전달하고
//! 응답 본문을 그대로 돌려줍니다.
//!
//! | 메서드 | 경로 | 외부 경로 |
//! |--------|------|-----------|
//! | `POST` | `/api/v1/nhis/checkup` | `{base}/checkup` |
//! | `POST` | `/api/v1/nhis/treatment-record` | `{base}/treatment_record` |

use actix_web::{HttpResponse, post, web};
use serde_json::Value;

use crate::core::errors::AppError;
use crate::core::registry::ServiceRegistry;
use crate::domain::dto::verification::NhisProduct;

#[post("/{product}")]
pub async fn relay(
    registry: web::Data<ServiceRegistry>,
    segment: web::Path<String>,
    payload: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    let product = NhisProduct::from_path(segment.as_str()).ok_or_else(|| {
        AppError::NotFound(format!("지원하지 않는 조회 상품입니다: {}", segment.as_str()))
    })?;

    log::debug!("외부 조회 API 중계: {}", product.upstream_path());
    let body = registry.gateway().relay(product, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(body))
}
