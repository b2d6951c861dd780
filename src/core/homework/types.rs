use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeworkStatus {
    Reviewing,
    Approved,
    Rejected,
}

impl HomeworkStatus {
    #[cfg(test)]
    pub fn as_str(self) -> &'static str {
        match self {
            HomeworkStatus::Reviewing => "reviewing",
            HomeworkStatus::Approved => "approved",
            HomeworkStatus::Rejected => "rejected",
        }
    }

    pub fn from_status(value: &str) -> Option<Self> {
        match value {
            "reviewing" => Some(HomeworkStatus::Reviewing),
            "approved" => Some(HomeworkStatus::Approved),
            "rejected" => Some(HomeworkStatus::Rejected),
            _ => None,
        }
    }

    pub fn verdict(self) -> &'static str {
        match self {
            HomeworkStatus::Reviewing => "Работа взята на проверку ревьюером.",
            HomeworkStatus::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            HomeworkStatus::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

/// One entry of the `homeworks` list.
///
/// Both fields stay optional here: a record missing either one still decodes,
/// and the formatter reports which field was absent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct HomeworkRecord {
    #[serde(rename = "homework_name", default)]
    pub name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[cfg(test)]
impl HomeworkRecord {
    pub fn new(name: &str, status: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            status: Some(status.to_string()),
        }
    }
}
