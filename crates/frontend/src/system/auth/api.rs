use contracts::system::auth::{AdminProfile, AuthSession, LoginRequest, SignupRequest};

use crate::shared::api::{ApiClient, ApiError};

/// Login with email and password
pub async fn login(client: &ApiClient, request: &LoginRequest) -> Result<AuthSession, ApiError> {
    client.post_json("/admin/login", request).await
}

/// Create an admin account; the backend signs it in right away
pub async fn signup(client: &ApiClient, request: &SignupRequest) -> Result<AuthSession, ApiError> {
    client.post_json("/admin/signup", request).await
}

/// Profile of the token holder
pub async fn get_profile(client: &ApiClient) -> Result<AdminProfile, ApiError> {
    client.get("/admin/profile").await
}
