//! Health check operations.

use super::ExertrackClient;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Readiness check body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ReadyStatus {
    pub status: String,
}

impl ExertrackClient {
    /// Liveness check. Succeeds when the server accepts connections.
    pub async fn livez(&self) -> Result<()> {
        let response = self.client.get(self.url("/livez")).send().await?;
        self.check_status(response).await?;
        Ok(())
    }

    /// Readiness check. Fails with a server error when storage is unavailable.
    pub async fn readyz(&self) -> Result<ReadyStatus> {
        let response = self.client.get(self.url("/readyz")).send().await?;
        self.handle_response(response).await
    }
}
