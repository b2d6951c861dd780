use thiserror::Error;

/// The review API request could not be completed.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Ошибка ресурса: {0}")]
    Request(String),
    #[error("Ошибка ресурса: API вернул статус {status}")]
    Status { status: u16 },
    #[error("Ошибка ресурса: ответ не является JSON ({0})")]
    Decode(String),
}

impl TransportError {
    pub fn status_code(&self) -> Option<u16> {
        match self {
            TransportError::Status { status } => Some(*status),
            _ => None,
        }
    }
}

/// The decoded payload does not have the expected shape.
#[derive(Debug, Error, PartialEq)]
pub enum SchemaError {
    #[error("ответ API не является словарём (получено: {0})")]
    NotAnObject(&'static str),
    #[error("в ответе API нет ключа homeworks")]
    MissingHomeworks,
    #[error("перечень домашних работ не является списком (получено: {0})")]
    HomeworksNotASequence(&'static str),
    #[error("некорректная последняя запись о домашней работе: {0}")]
    MalformedRecord(String),
    #[error("current_date не является целым числом (получено: {0})")]
    InvalidCursor(&'static str),
}

#[derive(Debug, Error, PartialEq)]
pub enum FormatError {
    #[error("в записи о домашней работе не найдено поле {0}")]
    MissingField(&'static str),
    #[error("ошибка статуса сервера: неизвестный статус «{0}»")]
    UnknownStatus(String),
}

/// Anything that ends a tick early. The poll loop reports these and carries on.
#[derive(Debug, Error)]
pub enum TickError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error(transparent)]
    Format(#[from] FormatError),
}

impl TickError {
    pub fn kind(&self) -> &'static str {
        match self {
            TickError::Transport(_) => "transport",
            TickError::Schema(_) => "schema",
            TickError::Format(_) => "format",
        }
    }

    /// HTTP status of a rejected request, if that is what failed.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            TickError::Transport(err) => err.status_code(),
            _ => None,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("missing required credentials: {}", .0.join(", "))]
    MissingCredentials(Vec<&'static str>),
    #[error("{name} must be a positive integer, got {value:?}")]
    InvalidNumber { name: &'static str, value: String },
}

/// Short name of a JSON value's type, used in schema error messages.
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "list",
        serde_json::Value::Object(_) => "object",
    }
}
