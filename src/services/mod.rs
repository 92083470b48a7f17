//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 외부 연동(조회 API, 객체 저장소)은 trait 뒤에 두고, 폼 흐름은 그 trait에만 의존합니다.
//!
//! # Modules
//!
//! - [`forms`] - 폼 세션 상태 관리와 2단계 인증 흐름
//! - [`verification`] - 건강검진 조회 API 게이트웨이
//! - [`archive`] - 요청/응답 기록
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::verification::HttpVerificationGateway;
//! use crate::services::archive::{ObjectStoreArchiver, S3ObjectStore};
//!
//! let gateway = HttpVerificationGateway::from_config(reqwest::Client::new());
//! let store = S3ObjectStore::connect(&StorageConfig::from_env()).await;
//! let archiver = ObjectStoreArchiver::new(Arc::new(store), "temp/user-data");
//! ```

pub mod archive;
pub mod forms;
pub mod verification;
