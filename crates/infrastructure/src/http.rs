use common::NetworkError;
use reqwest::{Client, Response};
use std::time::Duration;

pub(crate) fn build_client(timeout_secs: u64) -> Result<Client, NetworkError> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .map_err(|e| NetworkError::Transport(format!("Failed to create HTTP client: {e}")))
}

pub(crate) fn from_reqwest_error(error: reqwest::Error, timeout_secs: u64) -> NetworkError {
    if error.is_timeout() {
        NetworkError::Timeout(timeout_secs)
    } else if error.is_decode() {
        NetworkError::InvalidBody(error.to_string())
    } else {
        NetworkError::Transport(error.to_string())
    }
}

/// Неуспешный статус превращается в ошибку вместе с телом ответа
pub(crate) async fn ensure_success(response: Response) -> Result<Response, NetworkError> {
    if response.status().is_success() {
        return Ok(response);
    }
    let code = response.status().as_u16();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Failed to read error response".to_string());
    Err(NetworkError::Status { code, body })
}
