//! # 요청/응답 기록 핸들러
//!
//! 2단계 요청/응답 쌍을 직접 저장소에 기록합니다. 응답 본문은 성공/실패 모두
//! `{ success, ... }` 형태를 유지합니다.
//!
//! ```json
//! // 200 OK
//! {
//!   "success": true,
//!   "message": "데이터가 S3에 user@example.com-request.json, user@example.com-response.json으로 저장되었습니다.",
//!   "requestKey": "temp/user-data/user@example.com-request.json",
//!   "responseKey": "temp/user-data/user@example.com-response.json"
//! }
//!
//! // 500 Internal Server Error
//! { "success": false, "error": "S3 파일 저장 중 오류가 발생했습니다." }
//! ```

use actix_web::{HttpResponse, post, web};
use validator::Validate;

use crate::core::registry::ServiceRegistry;
use crate::domain::dto::archive::{ArchiveRequest, ArchiveResponse};
use crate::utils::string_utils::mask_email;
use crate::validators::first_message;

#[post("")]
pub async fn save_records(
    registry: web::Data<ServiceRegistry>,
    payload: web::Json<ArchiveRequest>,
) -> HttpResponse {
    if let Err(e) = payload.validate() {
        return HttpResponse::BadRequest().json(ArchiveResponse::failed(first_message(&e)));
    }

    let request = payload.into_inner();
    match registry
        .archiver()
        .archive(&request.request_data, &request.response_data, &request.email)
        .await
    {
        Ok(receipt) => {
            log::info!("기록 요청 처리 완료: {}", mask_email(&request.email));
            HttpResponse::Ok().json(ArchiveResponse::saved(&request.email, receipt))
        }
        Err(err) => {
            HttpResponse::InternalServerError().json(ArchiveResponse::failed(err.user_message()))
        }
    }
}
