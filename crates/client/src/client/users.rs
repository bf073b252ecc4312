//! User API operations.

use super::ExertrackClient;
use crate::error::Result;
use exertrack_core::tracker::UserResponse;

impl ExertrackClient {
    /// List all users.
    pub async fn list_users(&self) -> Result<Vec<UserResponse>> {
        let response = self.client.get(self.url("/api/users")).send().await?;
        self.handle_response(response).await
    }

    /// Create a new user.
    pub async fn create_user(&self, username: &str) -> Result<UserResponse> {
        let response = self
            .client
            .post(self.url("/api/users"))
            .form(&[("username", username)])
            .send()
            .await?;
        self.handle_response(response).await
    }
}
