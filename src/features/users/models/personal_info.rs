use serde::{Deserialize, Serialize};

/// How the citizen prefers to be contacted about their reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactPreference {
    Email,
    Phone,
    Sms,
}

impl std::fmt::Display for ContactPreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContactPreference::Email => write!(f, "email"),
            ContactPreference::Phone => write!(f, "phone"),
            ContactPreference::Sms => write!(f, "sms"),
        }
    }
}

/// Preferred window for callback when the contact preference is phone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallbackWindow {
    Morning,
    Afternoon,
    Evening,
}

impl std::fmt::Display for CallbackWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CallbackWindow::Morning => write!(f, "morning"),
            CallbackWindow::Afternoon => write!(f, "afternoon"),
            CallbackWindow::Evening => write!(f, "evening"),
        }
    }
}

/// The single per-device personal-info record.
///
/// Its presence in the secure store is what "logged in" means; there is no
/// credential beyond it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub surname: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub contact_preference: ContactPreference,
    pub callback_window: Option<CallbackWindow>,
}
