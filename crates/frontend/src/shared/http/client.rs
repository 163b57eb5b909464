use serde_json::Value;

use super::error::ApiError;
use super::transport::{ApiRequest, ApiResponse, HttpTransport, Method};

/// Source of the bearer token attached to every call
pub type TokenSource = fn() -> Option<String>;

/// Bearer-token wrappers around a transport.
///
/// The wrappers only attach the token and turn transport failures into
/// [`ApiError`]; checking the status is left to the caller through
/// [`expect_status`].
pub struct ApiClient<T> {
    transport: T,
    token: TokenSource,
}

impl<T: HttpTransport> ApiClient<T> {
    pub fn new(transport: T, token: TokenSource) -> Self {
        Self { transport, token }
    }

    pub async fn get_resource(&self, url: &str) -> Result<ApiResponse, ApiError> {
        self.send(ApiRequest::new(Method::Get, url)).await
    }

    pub async fn create_resource(&self, url: &str, body: Value) -> Result<ApiResponse, ApiError> {
        self.send(ApiRequest::new(Method::Post, url).json(body)).await
    }

    pub async fn update_resource(&self, url: &str, body: Value) -> Result<ApiResponse, ApiError> {
        self.send(ApiRequest::new(Method::Put, url).json(body)).await
    }

    pub async fn delete_resource(&self, url: &str) -> Result<ApiResponse, ApiError> {
        self.send(ApiRequest::new(Method::Delete, url)).await
    }

    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let request = request.bearer((self.token)());
        log::debug!("{:?} {}", request.method, request.url);
        self.transport
            .send(request)
            .await
            .map_err(ApiError::Network)
    }
}

/// Body of a response that carries exactly `status`
pub fn expect_status(response: ApiResponse, status: u16) -> Result<Option<Value>, ApiError> {
    if response.status == status {
        Ok(response.body)
    } else {
        Err(ApiError::from_response(&response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::http::mock::MockTransport;
    use futures::executor::block_on;
    use serde_json::json;
    use std::rc::Rc;

    fn token() -> Option<String> {
        Some("secret".to_string())
    }

    fn no_token() -> Option<String> {
        None
    }

    #[test]
    fn attaches_bearer_token() {
        let transport = Rc::new(MockTransport::new());
        transport.respond(200, json!([]));
        let client = ApiClient::new(transport.clone(), token);

        block_on(client.get_resource("http://h/api/vendors")).unwrap();

        let sent = transport.requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method, Method::Get);
        assert_eq!(sent[0].bearer.as_deref(), Some("secret"));
    }

    #[test]
    fn sends_json_body_on_create_and_update() {
        let transport = Rc::new(MockTransport::new());
        transport.respond(201, json!({}));
        transport.respond(200, json!({}));
        let client = ApiClient::new(transport.clone(), no_token);

        block_on(client.create_resource("http://h/a", json!({"name": "x"}))).unwrap();
        block_on(client.update_resource("http://h/a/x", json!({"name": "y"}))).unwrap();

        let sent = transport.requests();
        assert_eq!(sent[0].method, Method::Post);
        assert_eq!(sent[0].body, Some(json!({"name": "x"})));
        assert_eq!(sent[1].method, Method::Put);
        assert!(sent[1].bearer.is_none());
    }

    #[test]
    fn transport_failure_becomes_network_error() {
        let transport = Rc::new(MockTransport::new());
        transport.fail("Failed to send request: refused");
        let client = ApiClient::new(transport, token);

        let err = block_on(client.delete_resource("http://h/a/x")).unwrap_err();
        assert_eq!(err, ApiError::Network("Failed to send request: refused".into()));
    }

    #[test]
    fn expect_status_is_exact() {
        assert_eq!(
            expect_status(ApiResponse::new(201, Some(json!(1))), 201).unwrap(),
            Some(json!(1))
        );
        let err = expect_status(ApiResponse::new(200, None), 201).unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 200, .. }));
    }
}
