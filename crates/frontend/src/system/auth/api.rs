use contracts::shared::api::{normalize_error_body, ApiResult};
use contracts::system::auth::{AuthorizedUser, DeviceInfo, LoginRequest};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Collect device info from the browser for the login audit trail.
fn device_info() -> DeviceInfo {
    let navigator = web_sys::window().map(|w| w.navigator());
    let user_agent = navigator
        .as_ref()
        .and_then(|n| n.user_agent().ok())
        .unwrap_or_else(|| "unknown".to_string());
    let platform = navigator
        .as_ref()
        .and_then(|n| n.platform().ok())
        .unwrap_or_else(|| "unknown".to_string());

    DeviceInfo {
        device_name: user_agent,
        device_type: "web".to_string(),
        device_os: platform,
    }
}

/// Login with email and password
pub async fn login(email: String, password: String) -> Result<AuthorizedUser, String> {
    let request = LoginRequest {
        email,
        password,
        device_info: device_info(),
    };

    let response = Request::post(&api_url("/auth/user/login"))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(normalize_error_body(status, &body));
    }

    let result = response
        .json::<ApiResult<AuthorizedUser>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(result.data)
}
