use contracts::system::auth::{LoginRequest, LoginResponse};
use serde_json::Value;

use crate::shared::api_utils::api_url;
use crate::shared::config::config;
use crate::shared::http::{ApiClient, ApiError, GlooTransport, HttpTransport};

/// Login with email and password
pub async fn login(email: String, password: String) -> Result<LoginResponse, String> {
    let api = ApiClient::new(GlooTransport, no_token);
    login_with(&api, &api_url(&config().api.login_path), email, password).await
}

pub async fn login_with<T: HttpTransport>(
    api: &ApiClient<T>,
    url: &str,
    email: String,
    password: String,
) -> Result<LoginResponse, String> {
    let request = LoginRequest { email, password };

    let result: Result<LoginResponse, ApiError> = async {
        let body = serde_json::to_value(&request).map_err(|e| ApiError::Encode(e.to_string()))?;
        let response = api.create_resource(url, body).await?;
        if !(200..300).contains(&response.status) {
            return Err(ApiError::from_response(&response));
        }
        serde_json::from_value(response.body.unwrap_or(Value::Null))
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    .await;

    result.map_err(|e| e.message_or("Login failed"))
}

fn no_token() -> Option<String> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::http::mock::MockTransport;
    use crate::shared::http::Method;
    use futures::executor::block_on;
    use serde_json::json;
    use std::rc::Rc;

    #[test]
    fn posts_credentials_without_bearer() {
        let transport = Rc::new(MockTransport::new());
        transport.respond(200, json!({"token": "abc.def.ghi"}));
        let api = ApiClient::new(transport.clone(), no_token);

        let resp = block_on(login_with(&api, "http://h/api/auth/login", "ann@example.com".into(), "pw".into()))
            .unwrap();
        assert_eq!(resp.token, "abc.def.ghi");

        let sent = &transport.requests()[0];
        assert_eq!(sent.method, Method::Post);
        assert_eq!(sent.bearer, None);
        assert_eq!(sent.body.as_ref().unwrap()["email"], "ann@example.com");
    }

    #[test]
    fn rejected_login_carries_server_message() {
        let transport = Rc::new(MockTransport::new());
        transport.respond(401, json!({"message": "Invalid credentials"}));
        let api = ApiClient::new(transport, no_token);

        let err = block_on(login_with(&api, "http://h/login", "a".into(), "b".into())).unwrap_err();
        assert_eq!(err, "Invalid credentials");
    }

    #[test]
    fn rejected_login_without_message_uses_status() {
        let transport = Rc::new(MockTransport::new());
        transport.respond_empty(500);
        let api = ApiClient::new(transport, no_token);

        let err = block_on(login_with(&api, "http://h/login", "a".into(), "b".into())).unwrap_err();
        assert_eq!(err, "Login failed (500)");
    }
}
