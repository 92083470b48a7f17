//! # 건강검진 조회 API 게이트웨이
//!
//! 외부 조회 API의 1단계(인증 요청), 2단계(인증 확인) 호출을 감싸는 얇은 HTTP 클라이언트입니다.
//!
//! ## 결과 매핑
//!
//! ```text
//! 연결 실패 / 타임아웃         → AppError::TransportError
//! non-2xx 응답                → AppError::TransportError ("502 Bad Gateway" 등 상태 텍스트)
//! 2xx + 본문 파싱 실패          → AppError::TransportError
//! 2xx + status != "success"   → AppError::BusinessError { code, message }
//! 2xx + status == "success"   → Ok
//! ```
//!
//! 재시도는 하지 않으며 타임아웃은 `reqwest` 기본값을 따릅니다.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use crate::config::VerificationApiConfig;
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::verification::{ConfirmRequest, NhisProduct, VerificationEnvelope};
use crate::domain::models::{MultiFactorSession, SubmissionForm};

/// API 키 헤더 이름
pub const API_KEY_HEADER: &str = "x-api-key";

/// 외부 API가 메시지 없이 실패를 알렸을 때의 기본 문구
pub const UNKNOWN_ERROR_MESSAGE: &str = "알 수 없는 오류가 발생했습니다.";

/// 건강검진 조회 API 게이트웨이
///
/// 폼 컨트롤러는 이 trait에만 의존하므로 테스트에서는 호출 횟수를 세는
/// 가짜 구현으로 교체할 수 있습니다.
#[async_trait]
pub trait VerificationGateway: Send + Sync {
    /// 1단계: 간편인증 요청을 보내고 세션 토큰을 받습니다.
    async fn initiate(&self, form: &SubmissionForm) -> AppResult<MultiFactorSession>;

    /// 2단계: 사용자가 인증을 마친 뒤 결과를 조회합니다.
    ///
    /// 성공 시 응답 봉투 전체를 기록용으로 그대로 돌려줍니다.
    async fn confirm(&self, request: &ConfirmRequest) -> AppResult<Value>;

    /// 임의의 요청 본문을 지정한 상품 엔드포인트로 중계합니다.
    async fn relay(&self, product: NhisProduct, body: Value) -> AppResult<Value>;
}

/// `reqwest` 기반 게이트웨이 구현
///
/// `Client`는 내부적으로 커넥션 풀을 가지므로 프로세스 시작 시 한 번 만들어 공유합니다.
#[derive(Debug, Clone)]
pub struct HttpVerificationGateway {
    client: Client,
    base_url: String,
    product: String,
    api_key: String,
}

impl HttpVerificationGateway {
    pub fn new(
        client: Client,
        base_url: impl Into<String>,
        product: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            product: product.into(),
            api_key: api_key.into(),
        }
    }

    /// 환경변수 설정으로 게이트웨이를 만듭니다.
    pub fn from_config(client: Client) -> Self {
        Self::new(
            client,
            VerificationApiConfig::base_url(),
            VerificationApiConfig::product(),
            VerificationApiConfig::api_key(),
        )
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// 요청을 보내고 2xx 응답 본문을 JSON으로 읽습니다.
    async fn post_json<B: Serialize + ?Sized>(&self, url: &str, body: &B) -> AppResult<Value> {
        let response = self
            .client
            .post(url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| AppError::TransportError(format!("외부 API 요청 실패: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("외부 API 비정상 응답: {} {}", url, status);
            return Err(AppError::TransportError(status.to_string()));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| AppError::TransportError(format!("외부 API 응답 파싱 실패: {}", e)))
    }

    /// 제품 엔드포인트를 호출하고 봉투의 성공 여부까지 확인합니다.
    async fn call_product<B: Serialize + ?Sized>(
        &self,
        body: &B,
    ) -> AppResult<(VerificationEnvelope, Value)> {
        let raw = self.post_json(&self.endpoint(&self.product), body).await?;

        let envelope: VerificationEnvelope = serde_json::from_value(raw.clone())
            .map_err(|e| AppError::TransportError(format!("외부 API 응답 파싱 실패: {}", e)))?;

        if !envelope.is_success() {
            return Err(AppError::BusinessError {
                code: envelope.code.clone(),
                message: envelope
                    .message
                    .clone()
                    .unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_string()),
            });
        }

        Ok((envelope, raw))
    }
}

#[async_trait]
impl VerificationGateway for HttpVerificationGateway {
    async fn initiate(&self, form: &SubmissionForm) -> AppResult<MultiFactorSession> {
        let (envelope, _) = self.call_product(form).await?;

        let data = envelope.data.ok_or_else(|| {
            AppError::TransportError("외부 API 응답에 인증 세션 정보가 없습니다.".to_string())
        })?;

        serde_json::from_value(data)
            .map_err(|e| AppError::TransportError(format!("인증 세션 정보 파싱 실패: {}", e)))
    }

    async fn confirm(&self, request: &ConfirmRequest) -> AppResult<Value> {
        let (_, raw) = self.call_product(request).await?;
        Ok(raw)
    }

    async fn relay(&self, product: NhisProduct, body: Value) -> AppResult<Value> {
        self.post_json(&self.endpoint(product.upstream_path()), &body)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn gateway(server: &MockServer) -> HttpVerificationGateway {
        HttpVerificationGateway::new(Client::new(), server.uri(), "checkup", "test-key")
    }

    fn filled_form() -> SubmissionForm {
        SubmissionForm {
            id: "user@example.com".to_string(),
            legal_name: "홍길동".to_string(),
            birthdate: "19801212".to_string(),
            phone_no: "01012345678".to_string(),
            ..SubmissionForm::default()
        }
    }

    fn session_data() -> Value {
        json!({
            "transactionId": "T1",
            "jobIndex": 0,
            "threadIndex": 0,
            "multiFactorTimestamp": 1690000000
        })
    }

    #[tokio::test]
    async fn test_initiate_returns_session_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/checkup"))
            .and(header(API_KEY_HEADER, "test-key"))
            .and(body_partial_json(json!({ "phoneNo": "01012345678" })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "status": "success", "data": session_data() })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let session = gateway(&server).initiate(&filled_form()).await.unwrap();

        assert_eq!(session.transaction_id, json!("T1"));
        assert_eq!(session.multi_factor_timestamp, json!(1690000000));
    }

    #[tokio::test]
    async fn test_token_with_string_values_is_echoed_verbatim() {
        let server = MockServer::start().await;
        let data = json!({
            "transactionId": "T1",
            "jobIndex": "0",
            "threadIndex": 0,
            "multiFactorTimestamp": "1690000000"
        });
        Mock::given(method("POST"))
            .and(body_partial_json(json!({ "isContinue": "1", "multiFactorInfo": data.clone() })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "success" })))
            .expect(1)
            .with_priority(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "status": "success", "data": data.clone() })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let gateway = gateway(&server);
        let session = gateway.initiate(&filled_form()).await.unwrap();
        let request = ConfirmRequest::from_pending(&crate::domain::models::PendingVerification {
            form: filled_form(),
            session,
        });
        gateway.confirm(&request).await.unwrap();

        assert_eq!(
            serde_json::to_value(&request).unwrap()["multiFactorInfo"],
            data
        );
    }

    #[tokio::test]
    async fn test_numeric_error_code_is_business_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "fail",
                "code": 1001,
                "message": "점검 중"
            })))
            .mount(&server)
            .await;

        let err = gateway(&server).initiate(&filled_form()).await.unwrap_err();

        assert_eq!(
            err,
            AppError::BusinessError {
                code: Some("1001".to_string()),
                message: "점검 중".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_non_success_envelope_is_business_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "error",
                "code": "SE-001",
                "message": "입력값 오류"
            })))
            .mount(&server)
            .await;

        let err = gateway(&server).initiate(&filled_form()).await.unwrap_err();

        assert_eq!(
            err,
            AppError::BusinessError {
                code: Some("SE-001".to_string()),
                message: "입력값 오류".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_missing_message_uses_default_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "fail" })))
            .mount(&server)
            .await;

        let err = gateway(&server).initiate(&filled_form()).await.unwrap_err();

        assert_eq!(err.user_message(), UNKNOWN_ERROR_MESSAGE);
    }

    #[tokio::test]
    async fn test_non_2xx_is_transport_error_with_status_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = gateway(&server).initiate(&filled_form()).await.unwrap_err();

        assert_eq!(
            err,
            AppError::TransportError("503 Service Unavailable".to_string())
        );
    }

    #[tokio::test]
    async fn test_unparseable_body_is_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = gateway(&server).initiate(&filled_form()).await.unwrap_err();

        assert!(matches!(err, AppError::TransportError(_)));
    }

    #[tokio::test]
    async fn test_confirm_sends_continue_flag_and_returns_envelope() {
        let server = MockServer::start().await;
        let response = json!({ "status": "success", "data": { "checkupList": [] } });
        Mock::given(method("POST"))
            .and(path("/checkup"))
            .and(body_partial_json(json!({
                "isContinue": "1",
                "multiFactorInfo": { "transactionId": "T1" }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(response.clone()))
            .expect(1)
            .mount(&server)
            .await;

        let request = ConfirmRequest::from_pending(&crate::domain::models::PendingVerification {
            form: filled_form(),
            session: serde_json::from_value(session_data()).unwrap(),
        });

        let body = gateway(&server).confirm(&request).await.unwrap();

        assert_eq!(body, response);
    }

    #[tokio::test]
    async fn test_relay_returns_upstream_body_verbatim() {
        let server = MockServer::start().await;
        let upstream = json!({ "status": "error", "message": "원본 그대로" });
        Mock::given(method("POST"))
            .and(path("/treatment_record"))
            .and(header(API_KEY_HEADER, "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(upstream.clone()))
            .expect(1)
            .mount(&server)
            .await;

        let body = gateway(&server)
            .relay(NhisProduct::TreatmentRecord, json!({ "id": "a" }))
            .await
            .unwrap();

        assert_eq!(body, upstream);
    }
}
