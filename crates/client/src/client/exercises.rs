//! Exercise API operations.

use uuid::Uuid;

use super::ExertrackClient;
use crate::error::{ClientError, Result};
use exertrack_core::tracker::{parse_date, CreateExerciseRequest, ExerciseResponse};

impl ExertrackClient {
    /// Add an exercise to a user's log.
    ///
    /// A `date` the server would reject is caught before the request is sent.
    pub async fn add_exercise(
        &self,
        user_id: Uuid,
        request: &CreateExerciseRequest,
    ) -> Result<ExerciseResponse> {
        if let Some(date) = request.date.as_deref() {
            if parse_date(date).is_none() {
                return Err(ClientError::InvalidInput(format!(
                    "invalid date '{date}', expected YYYY-MM-DD, YYYY/MM/DD or an RFC 3339 timestamp"
                )));
            }
        }

        let response = self
            .client
            .post(self.url(&format!("/api/users/{user_id}/exercises")))
            .form(request)
            .send()
            .await?;
        self.handle_response(response).await
    }
}
