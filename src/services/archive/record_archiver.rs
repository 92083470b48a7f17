//! # 요청/응답 기록기
//!
//! 2단계 인증이 성공하면 요청 본문과 응답 본문을 사용자 식별자 기반 키로 저장합니다.
//!
//! ```text
//! {prefix}/{user_id}-request.json   ← 먼저 기록
//! {prefix}/{user_id}-response.json  ← 이어서 기록
//! ```
//!
//! 두 쓰기는 서로 독립적입니다. 두 번째 쓰기가 실패해도 첫 번째 객체는 지우지 않으며,
//! 호출자에게는 하나의 `ArchiveError`로 보고합니다.
//! 같은 사용자가 다시 제출하면 같은 키를 덮어씁니다.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::core::errors::{AppError, AppResult, ErrorContext};
use crate::domain::dto::archive::ArchiveReceipt;
use crate::services::archive::object_store::ObjectStore;

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// 저장 실패 시 클라이언트에 전달되는 문구
pub const ARCHIVE_FAILURE_MESSAGE: &str = "S3 파일 저장 중 오류가 발생했습니다.";

/// 요청/응답 쌍 기록기
#[async_trait]
pub trait RecordArchiver: Send + Sync {
    async fn archive(
        &self,
        request: &Value,
        response: &Value,
        user_id: &str,
    ) -> AppResult<ArchiveReceipt>;
}

/// [`ObjectStore`] 위에서 동작하는 기록기
#[derive(Clone)]
pub struct ObjectStoreArchiver {
    store: Arc<dyn ObjectStore>,
    key_prefix: String,
}

impl ObjectStoreArchiver {
    pub fn new(store: Arc<dyn ObjectStore>, key_prefix: impl Into<String>) -> Self {
        Self {
            store,
            key_prefix: key_prefix.into().trim_matches('/').to_string(),
        }
    }

    /// 사용자 식별자로 요청/응답 객체 키를 만듭니다.
    pub fn keys_for(&self, user_id: &str) -> ArchiveReceipt {
        let base = if self.key_prefix.is_empty() {
            user_id.to_string()
        } else {
            format!("{}/{}", self.key_prefix, user_id)
        };

        ArchiveReceipt {
            request_key: format!("{base}-request.json"),
            response_key: format!("{base}-response.json"),
        }
    }

    async fn put_json(&self, key: &str, value: &Value) -> AppResult<()> {
        let body = serde_json::to_vec_pretty(value).context("JSON 직렬화 실패")?;

        self.store.put_object(key, body, JSON_CONTENT_TYPE).await
    }
}

#[async_trait]
impl RecordArchiver for ObjectStoreArchiver {
    async fn archive(
        &self,
        request: &Value,
        response: &Value,
        user_id: &str,
    ) -> AppResult<ArchiveReceipt> {
        let receipt = self.keys_for(user_id);

        self.put_json(&receipt.request_key, request)
            .await
            .map_err(log_and_wrap)?;
        self.put_json(&receipt.response_key, response)
            .await
            .map_err(log_and_wrap)?;

        log::info!(
            "기록 저장 완료: {}, {}",
            receipt.request_key,
            receipt.response_key
        );
        Ok(receipt)
    }
}

fn log_and_wrap(err: AppError) -> AppError {
    log::error!("기록 저장 실패: {}", err);
    AppError::ArchiveError(ARCHIVE_FAILURE_MESSAGE.to_string())
}
