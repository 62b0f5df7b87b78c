use serde::Deserialize;
use serde_json::Value;

/// Body of `GET homework_statuses/`. Homeworks are kept raw so that a
/// malformed submission surfaces as a classification error, not a decode error.
#[derive(Debug, Deserialize)]
pub struct HomeworkStatuses {
    pub homeworks: Vec<Value>,
    pub current_date: i64,
}
