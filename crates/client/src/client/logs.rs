//! Log API operations.

use uuid::Uuid;

use super::ExertrackClient;
use crate::error::Result;
use exertrack_core::tracker::{LogQuery, LogResponse};

impl ExertrackClient {
    /// Fetch a user's exercise log, optionally filtered.
    pub async fn get_log(&self, user_id: Uuid, query: &LogQuery) -> Result<LogResponse> {
        let response = self.log_request(user_id, query).send().await?;
        self.handle_response(response).await
    }

    fn log_request(&self, user_id: Uuid, query: &LogQuery) -> reqwest::RequestBuilder {
        self.client
            .get(self.url(&format!("/api/users/{user_id}/logs")))
            .query(query)
    }
}
