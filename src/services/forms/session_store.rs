//! # 폼 세션 저장소
//!
//! 세션 ID별 [`FormSession`]을 메모리에 보관합니다.
//!
//! - 세션 하나는 비동기 잠금(`futures_util::lock::Mutex`)으로 보호되어 같은 세션에 대한
//!   조작은 순서대로 처리됩니다. 외부 호출이 끝날 때까지 잠금을 유지합니다.
//! - 조회는 세션이 게시한 뷰를 읽으므로 진행 중인 호출을 기다리지 않습니다.
//! - 서로 다른 세션은 상태를 공유하지 않습니다.
//! - 마지막 접근 후 유휴 시간이 지난 세션은 `moka` 캐시가 만료시키며,
//!   만료된 세션은 조회 즉시 `NotFound`가 됩니다.
//! - 핸들러가 이미 꺼낸 세션은 `Arc`로 붙잡고 있으므로 진행 중인 호출은 만료와 관계없이 끝까지 실행됩니다.

use std::sync::Arc;
use std::time::Duration;

use futures_util::lock::Mutex;
use moka::future::Cache;
use uuid::Uuid;

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::forms::FormSessionView;
use crate::services::forms::form_controller::{FormSession, ViewCell};

pub const SESSION_NOT_FOUND_MESSAGE: &str = "폼 세션을 찾을 수 없습니다. 새로 시작해주세요.";

/// 저장소에 보관되는 세션 항목
pub struct SessionSlot {
    session: Mutex<FormSession>,
    view: ViewCell,
}

impl SessionSlot {
    fn new(session: FormSession) -> Self {
        let view = session.view_cell();
        Self {
            session: Mutex::new(session),
            view,
        }
    }

    /// 세션 잠금. 진행 중인 호출이 있으면 끝날 때까지 기다립니다.
    pub fn session(&self) -> &Mutex<FormSession> {
        &self.session
    }

    /// 마지막으로 게시된 뷰
    pub fn snapshot(&self) -> FormSessionView {
        self.view
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

/// 메모리 폼 세션 저장소
pub struct FormSessionStore {
    slots: Cache<Uuid, Arc<SessionSlot>>,
}

impl FormSessionStore {
    pub fn new(ttl_minutes: u64) -> Self {
        Self::with_idle_timeout(Duration::from_secs(ttl_minutes * 60))
    }

    /// 마지막 접근 후 `idle` 동안 쓰이지 않은 세션을 만료시키는 저장소
    pub fn with_idle_timeout(idle: Duration) -> Self {
        Self {
            slots: Cache::builder().time_to_idle(idle).build(),
        }
    }

    /// 새 세션을 만들고 첫 뷰를 돌려줍니다.
    pub async fn create(&self) -> FormSessionView {
        let slot = Arc::new(SessionSlot::new(FormSession::new(Uuid::new_v4())));
        let view = slot.snapshot();
        self.slots.insert(view.session_id, slot).await;

        log::debug!("폼 세션 생성: {}", view.session_id);
        view
    }

    pub async fn get(&self, id: Uuid) -> AppResult<Arc<SessionSlot>> {
        self.slots
            .get(&id)
            .await
            .ok_or_else(|| AppError::NotFound(SESSION_NOT_FOUND_MESSAGE.to_string()))
    }

    pub async fn remove(&self, id: Uuid) -> AppResult<()> {
        self.slots
            .remove(&id)
            .await
            .map(|_| log::debug!("폼 세션 삭제: {}", id))
            .ok_or_else(|| AppError::NotFound(SESSION_NOT_FOUND_MESSAGE.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::FormField;

    #[tokio::test]
    async fn test_create_and_get() {
        let store = FormSessionStore::new(30);

        let view = store.create().await;
        let slot = store.get(view.session_id).await.unwrap();

        assert_eq!(slot.snapshot().session_id, view.session_id);
    }

    #[tokio::test]
    async fn test_unknown_session_is_not_found() {
        let store = FormSessionStore::new(30);

        assert!(matches!(
            store.get(Uuid::new_v4()).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            store.remove(Uuid::new_v4()).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let store = FormSessionStore::new(30);
        let a = store.create().await.session_id;
        let b = store.create().await.session_id;

        {
            let slot = store.get(a).await.unwrap();
            let mut session = slot.session().lock().await;
            session.edit_field(FormField::LegalName, "홍길동".into()).unwrap();
        }

        assert_eq!(store.get(a).await.unwrap().snapshot().form.legal_name, "홍길동");
        assert_eq!(store.get(b).await.unwrap().snapshot().form.legal_name, "");
    }

    #[tokio::test]
    async fn test_idle_session_expires_on_access() {
        let store = FormSessionStore::with_idle_timeout(Duration::from_millis(20));
        let id = store.create().await.session_id;
        let held = store.get(id).await.unwrap();

        std::thread::sleep(Duration::from_millis(60));

        assert!(matches!(store.get(id).await, Err(AppError::NotFound(_))));
        // 이미 꺼낸 세션은 만료 후에도 계속 쓸 수 있음
        let mut session = held.session().lock().await;
        session.edit_field(FormField::PhoneNo, "01012345678".into()).unwrap();
        assert_eq!(held.snapshot().form.phone_no, "01012345678");
    }

    #[tokio::test]
    async fn test_snapshot_does_not_wait_for_session_lock() {
        let store = FormSessionStore::new(30);
        let id = store.create().await.session_id;
        let slot = store.get(id).await.unwrap();

        let mut session = slot.session().lock().await;
        session.set_consent(true);

        let view = store.get(id).await.unwrap().snapshot();
        assert!(view.consent_agreed);
        drop(session);
    }

    #[tokio::test]
    async fn test_remove_drops_session() {
        let store = FormSessionStore::new(30);
        let id = store.create().await.session_id;

        store.remove(id).await.unwrap();

        assert!(store.get(id).await.is_err());
    }
}
