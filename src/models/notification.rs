use crate::models::Homework;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub homework_name: String,
    pub text: String,
}

impl Notification {
    pub fn status_changed(homework: &Homework) -> Self {
        Self {
            homework_name: homework.homework_name.clone(),
            text: format!(
                "Изменился статус проверки работы \"{}\". {}",
                homework.homework_name,
                homework.status.verdict()
            ),
        }
    }
}
