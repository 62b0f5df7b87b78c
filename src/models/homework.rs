use serde_json::Value;

use crate::error::AppError;

/// A classified submission. Only the fields the bot reads are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Homework {
    pub homework_name: String,
    pub status: HomeworkStatus,
}

impl Homework {
    /// Reads a submission off a raw API record, ignoring unknown fields.
    pub fn from_value(record: &Value) -> Result<Self, AppError> {
        let Some(fields) = record.as_object() else {
            return Err(AppError::UnexpectedType {
                field: "homework",
                expected: "object",
            });
        };

        let homework_name = match fields.get("homework_name") {
            None | Some(Value::Null) => return Err(AppError::MissingField("homework_name")),
            Some(Value::String(name)) => name.clone(),
            Some(_) => return Err(AppError::InvalidField("homework_name")),
        };
        let status = match fields.get("status") {
            None | Some(Value::Null) => return Err(AppError::MissingField("status")),
            Some(Value::String(raw)) => HomeworkStatus::parse(raw)?,
            Some(other) => return Err(AppError::UnknownStatus(other.to_string())),
        };

        Ok(Self {
            homework_name,
            status,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        match raw {
            "approved" => Ok(HomeworkStatus::Approved),
            "reviewing" => Ok(HomeworkStatus::Reviewing),
            "rejected" => Ok(HomeworkStatus::Rejected),
            other => Err(AppError::UnknownStatus(other.to_string())),
        }
    }

    /// Human-readable verdict sent to the chat.
    pub fn verdict(&self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            HomeworkStatus::Reviewing => "Работа взята на проверку ревьюером.",
            HomeworkStatus::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}
