use serde::{Deserialize, Serialize};

/// Client device descriptor sent with the login request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceInfo {
    pub device_name: String,
    pub device_type: String,
    pub device_os: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub device_info: DeviceInfo,
}

/// Authenticated user as issued by `POST /auth/user/login`.
///
/// The session token is opaque; the client only stores and replays it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorizedUser {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub image: Option<String>,
    pub token: String,
}
