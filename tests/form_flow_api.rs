use std::sync::{Arc, Mutex};

use actix_web::{App, http::StatusCode, test, web};
use async_trait::async_trait;
use serde_json::{Value, json};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use health_record_collector::core::errors::{AppError, AppResult};
use health_record_collector::core::registry::ServiceRegistry;
use health_record_collector::routes::configure_all_routes;
use health_record_collector::services::archive::{ObjectStore, ObjectStoreArchiver};
use health_record_collector::services::forms::FormSessionStore;
use health_record_collector::services::verification::HttpVerificationGateway;

/// 쓰기 내용을 메모리에 남기는 객체 저장소
#[derive(Default)]
struct MemoryStore {
    objects: Mutex<Vec<(String, Value)>>,
    fail: bool,
}

impl MemoryStore {
    fn keys(&self) -> Vec<String> {
        self.objects
            .lock()
            .unwrap()
            .iter()
            .map(|(key, _)| key.clone())
            .collect()
    }
}

#[async_trait]
impl ObjectStore for MemoryStore {
    async fn put_object(&self, key: &str, body: Vec<u8>, _content_type: &str) -> AppResult<()> {
        if self.fail {
            return Err(AppError::ArchiveError("bucket unavailable".to_string()));
        }
        let value: Value = serde_json::from_slice(&body).unwrap();
        self.objects.lock().unwrap().push((key.to_string(), value));
        Ok(())
    }
}

fn registry(server: &MockServer, store: Arc<MemoryStore>) -> ServiceRegistry {
    let gateway =
        HttpVerificationGateway::new(reqwest::Client::new(), server.uri(), "checkup", "test-key");
    let archiver = ObjectStoreArchiver::new(store, "temp/user-data");
    ServiceRegistry::new(
        Arc::new(gateway),
        Arc::new(archiver),
        Arc::new(FormSessionStore::new(30)),
    )
}

fn session_token() -> Value {
    json!({
        "transactionId": "T1",
        "jobIndex": 0,
        "threadIndex": 0,
        "multiFactorTimestamp": 1690000000
    })
}

async fn mount_initiate(server: &MockServer, response: Value, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path("/checkup"))
        .and(header("x-api-key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .expect(expected_calls)
        .mount(server)
        .await;
}

async fn mount_confirm(server: &MockServer, response: Value, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path("/checkup"))
        .and(body_partial_json(json!({ "isContinue": "1" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .with_priority(1)
        .expect(expected_calls)
        .mount(server)
        .await;
}

macro_rules! init_app {
    ($registry:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($registry))
                .configure(configure_all_routes),
        )
        .await
    };
}

macro_rules! create_session {
    ($app:expr) => {{
        let req = test::TestRequest::post().uri("/api/v1/forms").to_request();
        let resp = test::call_service(&$app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let view: Value = test::read_body_json(resp).await;
        view["sessionId"].as_str().unwrap().to_string()
    }};
}

macro_rules! fill_form {
    ($app:expr, $id:expr) => {{
        for (field, value) in [
            ("id", "user@example.com"),
            ("legalName", "홍길동"),
            ("birthdate", "19801212"),
            ("phoneNo", "01012345678"),
        ] {
            let req = test::TestRequest::patch()
                .uri(&format!("/api/v1/forms/{}/fields", $id))
                .set_json(json!({ "field": field, "value": value }))
                .to_request();
            let resp = test::call_service(&$app, req).await;
            assert_eq!(resp.status(), StatusCode::OK);
        }
    }};
}

macro_rules! agree {
    ($app:expr, $id:expr) => {{
        let req = test::TestRequest::put()
            .uri(&format!("/api/v1/forms/{}/consent", $id))
            .set_json(json!({ "agreed": true }))
            .to_request();
        let resp = test::call_service(&$app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }};
}

#[actix_web::test]
async fn test_health_check() {
    let server = MockServer::start().await;
    let app = init_app!(registry(&server, Arc::new(MemoryStore::default())));

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "healthy");
}

#[actix_web::test]
async fn test_full_flow_archives_request_and_response() {
    let server = MockServer::start().await;
    mount_initiate(&server, json!({ "status": "success", "data": session_token() }), 1).await;
    mount_confirm(
        &server,
        json!({ "status": "success", "data": { "checkupList": [] } }),
        1,
    )
    .await;

    let store = Arc::new(MemoryStore::default());
    let app = init_app!(registry(&server, store.clone()));
    let id = create_session!(app);
    fill_form!(app, id);
    agree!(app, id);

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/forms/{}/initiate", id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let view: Value = test::read_body_json(resp).await;
    assert_eq!(view["state"], "awaiting_user_confirmation");
    assert_eq!(view["multiFactorPending"], true);
    assert_eq!(view["loading"], false);

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/forms/{}/confirm", id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let view: Value = test::read_body_json(resp).await;

    assert_eq!(view["state"], "completed");
    assert_eq!(view["form"]["legalName"], "");
    assert_eq!(
        view["archive"]["requestKey"],
        "temp/user-data/user@example.com-request.json"
    );
    assert_eq!(
        view["message"],
        "데이터가 성공적으로 수집되었습니다!\n참여해주셔서 감사합니다."
    );

    assert_eq!(
        store.keys(),
        vec![
            "temp/user-data/user@example.com-request.json".to_string(),
            "temp/user-data/user@example.com-response.json".to_string(),
        ]
    );
    let objects = store.objects.lock().unwrap();
    assert_eq!(objects[0].1["multiFactorInfo"]["transactionId"], "T1");
    assert_eq!(objects[0].1["isContinue"], "1");
    assert_eq!(objects[1].1["status"], "success");
}

#[actix_web::test]
async fn test_confirm_before_initiate_is_conflict_without_calls() {
    let server = MockServer::start().await;
    mount_initiate(&server, json!({ "status": "success" }), 0).await;

    let store = Arc::new(MemoryStore::default());
    let app = init_app!(registry(&server, store.clone()));
    let id = create_session!(app);
    fill_form!(app, id);

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/forms/{}/confirm", id))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "sequence_error");
    assert_eq!(body["message"], "먼저 인증 요청을 진행해주세요.");
    assert!(store.keys().is_empty());
}

#[actix_web::test]
async fn test_initiate_without_consent_is_rejected_locally() {
    let server = MockServer::start().await;
    mount_initiate(&server, json!({ "status": "success" }), 0).await;

    let app = init_app!(registry(&server, Arc::new(MemoryStore::default())));
    let id = create_session!(app);
    fill_form!(app, id);

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/forms/{}/initiate", id))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "개인정보 수집·이용에 동의해주세요.");
}

#[actix_web::test]
async fn test_se001_surfaces_recheck_message() {
    let server = MockServer::start().await;
    mount_initiate(
        &server,
        json!({ "status": "error", "code": "SE-001", "message": "upstream text" }),
        1,
    )
    .await;

    let app = init_app!(registry(&server, Arc::new(MemoryStore::default())));
    let id = create_session!(app);
    fill_form!(app, id);
    agree!(app, id);

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/forms/{}/initiate", id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "입력 정보를 다시 한번 확인해주세요.");

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/forms/{}", id))
        .to_request();
    let view: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(view["state"], "editing");
    assert_eq!(view["lastError"], "입력 정보를 다시 한번 확인해주세요.");
    assert_eq!(view["loading"], false);
}

#[actix_web::test]
async fn test_archive_failure_after_confirm_is_reported() {
    let server = MockServer::start().await;
    mount_initiate(&server, json!({ "status": "success", "data": session_token() }), 1).await;
    mount_confirm(&server, json!({ "status": "success" }), 1).await;

    let store = Arc::new(MemoryStore {
        fail: true,
        ..MemoryStore::default()
    });
    let app = init_app!(registry(&server, store));
    let id = create_session!(app);
    fill_form!(app, id);
    agree!(app, id);

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/forms/{}/initiate", id))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/forms/{}/confirm", id))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "archive_error");
    assert_eq!(body["message"], "파일 저장에 실패했습니다.");
}

#[actix_web::test]
async fn test_field_edit_reports_only_that_field() {
    let server = MockServer::start().await;
    let app = init_app!(registry(&server, Arc::new(MemoryStore::default())));
    let id = create_session!(app);

    let req = test::TestRequest::patch()
        .uri(&format!("/api/v1/forms/{}/fields", id))
        .set_json(json!({ "field": "birthdate", "value": "19801301" }))
        .to_request();
    let view: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(view["validationErrors"]["birthdate"], "올바른 월을 입력해주세요.");
    assert_eq!(view["validationErrors"].as_object().unwrap().len(), 1);
}

#[actix_web::test]
async fn test_unknown_session_and_bad_body() {
    let server = MockServer::start().await;
    let app = init_app!(registry(&server, Arc::new(MemoryStore::default())));

    let req = test::TestRequest::get()
        .uri("/api/v1/forms/6f1c2f4e-8d3a-4b8e-9a55-2f0d9c1b7e10")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let id = create_session!(app);
    let req = test::TestRequest::patch()
        .uri(&format!("/api/v1/forms/{}/fields", id))
        .set_json(json!({ "field": "ssn", "value": "x" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "validation_error");

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/forms/{}", id))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NO_CONTENT);
}

#[actix_web::test]
async fn test_archive_endpoint() {
    let server = MockServer::start().await;
    let store = Arc::new(MemoryStore::default());
    let app = init_app!(registry(&server, store.clone()));

    let req = test::TestRequest::post()
        .uri("/api/v1/archive")
        .set_json(json!({
            "requestData": { "id": "user@example.com" },
            "responseData": { "status": "success" },
            "email": "user@example.com"
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["success"], true);
    assert_eq!(body["requestKey"], "temp/user-data/user@example.com-request.json");
    assert_eq!(body["responseKey"], "temp/user-data/user@example.com-response.json");
    assert_eq!(store.keys().len(), 2);
}

#[actix_web::test]
async fn test_archive_endpoint_failure_body() {
    let server = MockServer::start().await;
    let store = Arc::new(MemoryStore {
        fail: true,
        ..MemoryStore::default()
    });
    let app = init_app!(registry(&server, store));

    let req = test::TestRequest::post()
        .uri("/api/v1/archive")
        .set_json(json!({
            "requestData": {},
            "responseData": {},
            "email": "user@example.com"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({ "success": false, "error": "S3 파일 저장 중 오류가 발생했습니다." })
    );
}

#[actix_web::test]
async fn test_relay_routes() {
    let server = MockServer::start().await;
    let upstream = json!({ "status": "success", "data": { "records": [] } });
    Mock::given(method("POST"))
        .and(path("/treatment_record"))
        .and(header("x-api-key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(upstream.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let app = init_app!(registry(&server, Arc::new(MemoryStore::default())));

    let req = test::TestRequest::post()
        .uri("/api/v1/nhis/treatment-record")
        .set_json(json!({ "id": "user@example.com" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, upstream);

    let req = test::TestRequest::post()
        .uri("/api/v1/nhis/admin")
        .set_json(json!({}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}
