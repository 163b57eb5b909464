use contracts::domain::common::Resource;
use serde_json::Value;
use std::marker::PhantomData;

use super::envelope::{decode_list, decode_one};
use crate::shared::api_utils::item_url;
use crate::shared::http::client::expect_status;
use crate::shared::http::{ApiClient, ApiError, HttpTransport};
use crate::shared::toast::Notifier;

/// CRUD calls for one collection.
///
/// Every failure ends in exactly one error notification and an empty
/// result; the caller never sees the error itself. Successful mutations
/// emit one success notification.
pub struct ResourceClient<R, T, N> {
    api: ApiClient<T>,
    notifier: N,
    endpoint: String,
    _marker: PhantomData<fn() -> R>,
}

impl<R, T, N> ResourceClient<R, T, N>
where
    R: Resource,
    T: HttpTransport,
    N: Notifier,
{
    pub fn new(api: ApiClient<T>, notifier: N, endpoint: impl Into<String>) -> Self {
        Self {
            api,
            notifier,
            endpoint: endpoint.into(),
            _marker: PhantomData,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// GET collection, expects 200
    pub async fn fetch_all(&self) -> Option<Vec<R>> {
        let result: Result<Vec<R>, ApiError> = async {
            let response = self.api.get_resource(&self.endpoint).await?;
            let body = expect_status(response, 200)?;
            decode_list(R::KIND, body.unwrap_or(Value::Null))
        }
        .await;

        self.report(result, || format!("Failed to load {}", R::KIND.list_name().to_lowercase()))
    }

    /// GET one by key, expects 200
    pub async fn fetch_one(&self, key: &str) -> Option<R> {
        let result: Result<R, ApiError> = async {
            let response = self.api.get_resource(&self.item(key)?).await?;
            let body = expect_status(response, 200)?;
            decode_one(R::KIND, body.unwrap_or(Value::Null))
        }
        .await;

        self.report(result, || format!("Failed to load {}", self.label(key)))
    }

    /// POST, expects 201
    pub async fn create(&self, data: &R) -> Option<R> {
        let result: Result<R, ApiError> = async {
            let payload = encode(data)?;
            let response = self.api.create_resource(&self.endpoint, payload).await?;
            let body = expect_status(response, 201)?;
            with_key(echo_or_decode(data, body)?)
        }
        .await;

        let created = self.report(result, || format!("Failed to create {}", self.element()))?;
        self.notifier
            .success(format!("{} {} created", R::KIND.element_name(), created.key()));
        Some(created)
    }

    /// PUT by key, expects 200
    pub async fn update(&self, key: &str, data: &R) -> Option<R> {
        let result: Result<R, ApiError> = async {
            let url = self.item(key)?;
            let payload = encode(data)?;
            let response = self.api.update_resource(&url, payload).await?;
            let body = expect_status(response, 200)?;
            with_key(echo_or_decode(data, body)?)
        }
        .await;

        let updated = self.report(result, || format!("Failed to update {}", self.label(key)))?;
        self.notifier
            .success(format!("{} {} updated", R::KIND.element_name(), updated.key()));
        Some(updated)
    }

    /// DELETE by key, expects 200
    pub async fn delete(&self, key: &str) -> bool {
        let result: Result<(), ApiError> = async {
            let response = self.api.delete_resource(&self.item(key)?).await?;
            expect_status(response, 200).map(|_| ())
        }
        .await;

        if self
            .report(result, || format!("Failed to delete {}", self.label(key)))
            .is_none()
        {
            return false;
        }
        self.notifier
            .success(format!("{} {} deleted", R::KIND.element_name(), key));
        true
    }

    /// Item URL; a blank key would address the collection itself
    fn item(&self, key: &str) -> Result<String, ApiError> {
        if key.trim().is_empty() {
            return Err(ApiError::MissingKey(R::KIND.element_name()));
        }
        Ok(item_url(&self.endpoint, key))
    }

    fn element(&self) -> String {
        R::KIND.element_name().to_lowercase()
    }

    /// "customer 42", or just "customer" for a blank key
    fn label(&self, key: &str) -> String {
        match key.trim() {
            "" => self.element(),
            key => format!("{} {}", self.element(), key),
        }
    }

    fn report<V>(&self, result: Result<V, ApiError>, fallback: impl FnOnce() -> String) -> Option<V> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                let message = e.message_or(&fallback());
                log::warn!("{} [{}]: {:?}", message, self.endpoint, e);
                self.notifier.error(message);
                None
            }
        }
    }
}

fn encode<R: Resource>(data: &R) -> Result<Value, ApiError> {
    serde_json::to_value(data).map_err(|e| ApiError::Encode(e.to_string()))
}

/// A saved entity must carry its key, including a server-assigned id
fn with_key<R: Resource>(entity: R) -> Result<R, ApiError> {
    if entity.key().trim().is_empty() {
        return Err(ApiError::MissingKey(R::KIND.element_name()));
    }
    Ok(entity)
}

/// Entity from the response body; an empty body echoes what was sent
fn echo_or_decode<R: Resource>(sent: &R, body: Option<Value>) -> Result<R, ApiError> {
    match body {
        Some(body) => decode_one(R::KIND, body),
        None => Ok(sent.clone()),
    }
}
