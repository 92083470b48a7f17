//! # 객체 저장소 추상화
//!
//! 기록기는 [`ObjectStore`] trait을 통해서만 저장소에 씁니다.
//! 운영 환경에서는 [`S3ObjectStore`]를, 테스트에서는 메모리 구현을 사용합니다.

use async_trait::async_trait;
use aws_sdk_s3::Client;
use aws_sdk_s3::config::{Credentials, Region};
use aws_sdk_s3::primitives::ByteStream;

use crate::config::StorageConfig;
use crate::core::errors::{AppError, AppResult};

/// 키 하나에 바이트 열을 쓰는 객체 저장소
#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn put_object(&self, key: &str, body: Vec<u8>, content_type: &str) -> AppResult<()>;
}

/// S3 객체 저장소
///
/// 클라이언트는 프로세스 시작 시 한 번 만들어 모든 요청이 공유합니다.
#[derive(Debug, Clone)]
pub struct S3ObjectStore {
    client: Client,
    bucket: String,
}

impl S3ObjectStore {
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }

    /// 설정값으로 S3 클라이언트를 만들고 저장소를 구성합니다.
    ///
    /// 정적 자격 증명이 없으면 AWS 기본 자격 증명 체인(환경, 프로필, 인스턴스 역할)을 사용합니다.
    pub async fn connect(config: &StorageConfig) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(Region::new(config.region.clone()));

        if config.has_credentials() {
            let credentials = Credentials::new(
                &config.access_key_id,
                &config.secret_access_key,
                None,
                None,
                "health-record-collector",
            );
            loader = loader.credentials_provider(credentials);
        } else {
            log::warn!("S3 access key not set, falling back to default credential chain");
        }

        let shared_config = loader.load().await;

        let mut builder = aws_sdk_s3::config::Builder::from(&shared_config);
        if let Some(endpoint) = &config.endpoint {
            builder = builder.endpoint_url(endpoint).force_path_style(true);
        }

        Self::new(Client::from_conf(builder.build()), config.bucket_name.clone())
    }

}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn put_object(&self, key: &str, body: Vec<u8>, content_type: &str) -> AppResult<()> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(body))
            .send()
            .await
            .map_err(|e| {
                AppError::ArchiveError(format!(
                    "S3 put_object 실패 (bucket={}, key={}): {}",
                    self.bucket, key, e
                ))
            })?;

        Ok(())
    }
}
