use contracts::system::auth::{LoginRequest, LoginResponse};
use gloo_net::http::Request;

use crate::shared::api_client::ApiError;
use crate::shared::api_utils::api_base;

/// Credential pair accepted entirely client-side, no server round-trip.
pub const BYPASS_USERNAME: &str = "tungnt@aptech";
pub const BYPASS_PASSWORD: &str = "123456789";

/// Exchange credentials for a bearer token via `POST /auth/login`.
pub async fn login(username: String, password: String) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { username, password };

    let response = Request::post(&format!("{}/auth/login", api_base()))
        .json(&request)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::from_response(response).await);
    }

    response
        .json::<LoginResponse>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
