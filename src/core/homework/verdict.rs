use crate::core::error::FormatError;
use crate::core::homework::{HomeworkRecord, HomeworkStatus};

/// Sent when the review window contains no homework at all.
pub const NOT_REVIEWED_MESSAGE: &str = "Домашка ещё не сдана";

/// Render the notification for a single homework record.
pub fn parse_status(record: &HomeworkRecord) -> Result<String, FormatError> {
    let name = record
        .name
        .as_deref()
        .ok_or(FormatError::MissingField("homework_name"))?;
    let raw_status = record
        .status
        .as_deref()
        .ok_or(FormatError::MissingField("status"))?;
    let status = HomeworkStatus::from_status(raw_status)
        .ok_or_else(|| FormatError::UnknownStatus(raw_status.to_string()))?;

    Ok(format!(
        "Изменился статус проверки работы \"{}\". {}",
        name,
        status.verdict()
    ))
}

/// The message describing the current state of the review queue, given its
/// most recent record.
pub fn current_message(latest: Option<&HomeworkRecord>) -> Result<String, FormatError> {
    match latest {
        Some(latest) => parse_status(latest),
        None => Ok(NOT_REVIEWED_MESSAGE.to_string()),
    }
}
