//! Authenticated JSON client for the shop API
//!
//! One thin adapter issues every GET/POST/PATCH/DELETE against
//! `/online-shop/<collection>`, attaching the session's bearer token. Each
//! operation checks for the exact status the contract promises (200 on
//! reads and updates, 201 on create, 204 on delete); anything else is
//! surfaced as an [`ApiError`] carrying whatever error body the server
//! reported.

use contracts::domain::common::EntityId;
use contracts::shared::api::ErrorBody;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};

use super::api_utils::api_base;

/// Fallback shown when the server reports no usable message.
pub const GENERIC_ERROR: &str = "Something went wrong";

/// Authentication state handed to the client at construction.
///
/// Created at login (or restored from storage at startup) and cleared at
/// logout; the client itself never reads persisted storage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiSession {
    access_token: Option<String>,
}

impl ApiSession {
    /// Session backed by a bearer token obtained from `/auth/login`.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            access_token: Some(token.into()),
        }
    }

    /// Tokenless session (the client-side bypass login).
    pub fn anonymous() -> Self {
        Self { access_token: None }
    }

    pub fn token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    base: String,
    session: ApiSession,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ApiError {
    /// Transport failure; the request never produced a response
    #[error("network error: {0}")]
    Network(String),
    /// Response arrived with a status other than the expected one
    #[error("HTTP {status}")]
    Status { status: u16, body: ErrorBody },
    /// Expected-status response whose body did not match the contract
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// First server-reported message verbatim, generic fallback otherwise.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status { body, .. } => body
                .first_message()
                .map(str::to_string)
                .unwrap_or_else(|| GENERIC_ERROR.to_string()),
            _ => GENERIC_ERROR.to_string(),
        }
    }

    /// Build the error for a response with the wrong status, keeping the
    /// parsed error body when the server sent one.
    pub(crate) async fn from_response(response: Response) -> Self {
        let status = response.status();
        let body = match response.text().await {
            Ok(text) => serde_json::from_str::<ErrorBody>(&text).unwrap_or_default(),
            Err(_) => ErrorBody::default(),
        };
        ApiError::Status { status, body }
    }
}

impl ApiClient {
    pub fn new(session: ApiSession) -> Self {
        Self {
            base: api_base(),
            session,
        }
    }

    /// `GET /online-shop/{collection}`: the whole collection.
    pub async fn fetch_collection<T>(&self, collection: &str) -> Result<Vec<T>, ApiError>
    where
        T: DeserializeOwned,
    {
        let response = self
            .send(Request::get(&self.collection_url(collection)))
            .await?;
        Self::expect_json(response, 200).await
    }

    /// `GET /online-shop/{collection}/{id}`: one record.
    pub async fn fetch_one<T>(&self, collection: &str, id: EntityId) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let response = self
            .send(Request::get(&self.record_url(collection, id)))
            .await?;
        Self::expect_json(response, 200).await
    }

    /// `POST /online-shop/{collection}`: expects 201 plus the created
    /// record (which may differ from the draft; the id is server-assigned).
    pub async fn create<B, T>(&self, collection: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let response = self
            .send_json(Request::post(&self.collection_url(collection)), body)
            .await?;
        Self::expect_json(response, 201).await
    }

    /// `PATCH /online-shop/{collection}/{id}`: expects 200 plus the
    /// server's representation of the updated record.
    pub async fn update<B, T>(&self, collection: &str, id: EntityId, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let response = self
            .send_json(Request::patch(&self.record_url(collection, id)), body)
            .await?;
        Self::expect_json(response, 200).await
    }

    /// `DELETE /online-shop/{collection}/{id}`: expects 204, no body.
    pub async fn delete(&self, collection: &str, id: EntityId) -> Result<(), ApiError> {
        let response = self
            .send(Request::delete(&self.record_url(collection, id)))
            .await?;
        if response.status() != 204 {
            return Err(ApiError::from_response(response).await);
        }
        Ok(())
    }

    fn collection_url(&self, collection: &str) -> String {
        format!("{}/online-shop/{}", self.base, collection)
    }

    fn record_url(&self, collection: &str, id: EntityId) -> String {
        format!("{}/online-shop/{}/{}", self.base, collection, id)
    }

    fn with_auth(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => request.header("Authorization", &format!("Bearer {}", token)),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        self.with_auth(request)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }

    async fn send_json<B: Serialize>(
        &self,
        request: RequestBuilder,
        body: &B,
    ) -> Result<Response, ApiError> {
        self.with_auth(request)
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }

    async fn expect_json<T: DeserializeOwned>(
        response: Response,
        expected: u16,
    ) -> Result<T, ApiError> {
        if response.status() != expected {
            return Err(ApiError::from_response(response).await);
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        ApiClient {
            base: "http://localhost:3000".into(),
            session: ApiSession::anonymous(),
        }
    }

    #[test]
    fn urls_follow_the_rest_contract() {
        let client = client();
        assert_eq!(
            client.collection_url("categories"),
            "http://localhost:3000/online-shop/categories"
        );
        assert_eq!(
            client.record_url("suppliers", 3),
            "http://localhost:3000/online-shop/suppliers/3"
        );
    }

    #[test]
    fn user_message_prefers_the_first_server_message() {
        let body: ErrorBody = serde_json::from_str(r#"{"message":["Not found"]}"#).unwrap();
        let err = ApiError::Status { status: 404, body };
        assert_eq!(err.user_message(), "Not found");
    }

    #[test]
    fn user_message_falls_back_when_the_body_shape_is_absent() {
        let err = ApiError::Status {
            status: 500,
            body: ErrorBody::default(),
        };
        assert_eq!(err.user_message(), GENERIC_ERROR);

        let err = ApiError::Network("connection refused".into());
        assert_eq!(err.user_message(), GENERIC_ERROR);
    }

    #[test]
    fn session_token_presence() {
        assert_eq!(ApiSession::anonymous().token(), None);
        assert_eq!(ApiSession::with_token("jwt").token(), Some("jwt"));
        assert_eq!(ApiSession::default(), ApiSession::anonymous());
    }
}
