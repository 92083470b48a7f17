//! 외부 연동 설정 관리 모듈
//!
//! 건강검진 조회 API(간편인증 게이트웨이)와 S3 저장소 설정을 관리합니다.
//! 자격 증명이 누락되어도 기동을 막지 않고 빈 문자열로 동작합니다.
//! 대신 시작 시점에 경고 로그를 남깁니다.

use std::env;

/// 외부 건강검진 조회 API 설정
pub struct VerificationApiConfig;

impl VerificationApiConfig {
    /// API 기본 URL. 기본값: `https://api.candiy.io/v1/nhis`
    pub fn base_url() -> String {
        env::var("VERIFICATION_API_BASE_URL")
            .unwrap_or_else(|_| "https://api.candiy.io/v1/nhis".to_string())
            .trim_end_matches('/')
            .to_string()
    }

    /// 2단계 인증 흐름이 호출하는 상품 경로. 기본값: `checkup`
    pub fn product() -> String {
        env::var("VERIFICATION_PRODUCT").unwrap_or_else(|_| "checkup".to_string())
    }

    /// `x-api-key` 헤더로 전달되는 API 키
    pub fn api_key() -> String {
        env::var("CANDIY_API_KEY").unwrap_or_else(|_| {
            log::warn!("CANDIY_API_KEY not set, using empty api key");
            String::new()
        })
    }
}

/// S3 저장소 설정
///
/// 환경 변수 이름은 `S3_*` 계열로 통일합니다.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub region: String,
    pub bucket_name: String,
    pub access_key_id: String,
    pub secret_access_key: String,
    /// S3 호환 저장소(MinIO 등) 엔드포인트
    pub endpoint: Option<String>,
    /// 기록 객체 키 접두어. 기본값: `temp/user-data`
    pub key_prefix: String,
}

impl StorageConfig {
    pub fn from_env() -> Self {
        let bucket_name = env::var("S3_BUCKET_NAME").unwrap_or_else(|_| {
            log::warn!("S3_BUCKET_NAME not set, using empty bucket name");
            String::new()
        });

        Self {
            region: env::var("S3_REGION").unwrap_or_else(|_| "ap-northeast-2".to_string()),
            bucket_name,
            access_key_id: env::var("S3_ACCESS_KEY_ID").unwrap_or_default(),
            secret_access_key: env::var("S3_SECRET_ACCESS_KEY").unwrap_or_default(),
            endpoint: env::var("S3_ENDPOINT")
                .ok()
                .filter(|endpoint| !endpoint.trim().is_empty()),
            key_prefix: env::var("ARCHIVE_KEY_PREFIX")
                .map(|prefix| prefix.trim_matches('/').to_string())
                .unwrap_or_else(|_| "temp/user-data".to_string()),
        }
    }

    pub fn has_credentials(&self) -> bool {
        !self.access_key_id.is_empty() && !self.secret_access_key.is_empty()
    }
}
