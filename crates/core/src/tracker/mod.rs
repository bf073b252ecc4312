mod dates;
mod error;
mod query;
mod requests;
mod responses;
mod types;

pub use dates::{format_display_date, parse_date, DISPLAY_DATE_FORMAT};
pub use error::ValidationError;
pub use query::{LogQuery, LogSlice};
pub use requests::{CreateExerciseRequest, CreateUserRequest, MAX_DURATION};
pub use responses::{ExerciseResponse, LogEntryResponse, LogResponse, UserResponse};
pub use types::{Exercise, ExerciseLog, User};
