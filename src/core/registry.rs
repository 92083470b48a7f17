//! # Service Registry
//!
//! 프로세스 시작 시 한 번 만든 장수명 컴포넌트들을 묶어 핸들러에 전달하는 컨테이너입니다.
//! `actix_web::web::Data<ServiceRegistry>`로 등록되어 모든 워커가 같은 인스턴스를 공유합니다.
//!
//! ```text
//! main
//!  ├─ reqwest::Client ──► HttpVerificationGateway ─┐
//!  ├─ aws_sdk_s3::Client ─► S3ObjectStore ──► ObjectStoreArchiver ─┤
//!  └─ FormSessionStore ────────────────────────────┴─► ServiceRegistry ─► web::Data
//! ```
//!
//! 구성 요소는 trait 객체로 보관하므로 테스트에서는 가짜 구현을 넣어
//! 실제 외부 호출 없이 HTTP 계층 전체를 검증할 수 있습니다.
//!
//! ```rust,ignore
//! let registry = ServiceRegistry::new(gateway, archiver, sessions);
//!
//! HttpServer::new(move || {
//!     App::new()
//!         .app_data(web::Data::new(registry.clone()))
//!         .configure(configure_all_routes)
//! })
//! ```

use std::sync::Arc;

use crate::services::archive::RecordArchiver;
use crate::services::forms::FormSessionStore;
use crate::services::verification::VerificationGateway;

/// 핸들러가 사용하는 서비스 묶음
#[derive(Clone)]
pub struct ServiceRegistry {
    gateway: Arc<dyn VerificationGateway>,
    archiver: Arc<dyn RecordArchiver>,
    sessions: Arc<FormSessionStore>,
}

impl ServiceRegistry {
    pub fn new(
        gateway: Arc<dyn VerificationGateway>,
        archiver: Arc<dyn RecordArchiver>,
        sessions: Arc<FormSessionStore>,
    ) -> Self {
        Self {
            gateway,
            archiver,
            sessions,
        }
    }

    pub fn gateway(&self) -> &dyn VerificationGateway {
        self.gateway.as_ref()
    }

    pub fn archiver(&self) -> &dyn RecordArchiver {
        self.archiver.as_ref()
    }

    pub fn sessions(&self) -> &FormSessionStore {
        &self.sessions
    }
}
