pub mod submission;
pub mod export;

pub use submission::{PlayerSubmission, capitalize_name, validate_submission};
pub use export::export_schedule_to_csv;
