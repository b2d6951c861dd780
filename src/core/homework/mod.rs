mod types;
mod validate;
mod verdict;

pub use types::{HomeworkRecord, HomeworkStatus};
pub use validate::validate_response;
pub use verdict::current_message;
#[cfg(test)]
pub use verdict::NOT_REVIEWED_MESSAGE;
