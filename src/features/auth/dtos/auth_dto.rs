use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::features::users::models::{CallbackWindow, ContactPreference};

/// Request DTO for first login, which doubles as profile capture.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginDto {
    #[validate(length(min = 1, max = 128, message = "Name is required"))]
    pub name: String,

    #[validate(length(min = 1, max = 128, message = "Surname is required"))]
    pub surname: String,

    #[validate(email(message = "Email must be a valid address"))]
    pub email: Option<String>,

    #[validate(regex(
        path = "*crate::shared::validation::PHONE_REGEX",
        message = "Phone must be 10-15 digits, optionally prefixed with +"
    ))]
    pub phone: Option<String>,

    pub contact_preference: ContactPreference,

    pub callback_window: Option<CallbackWindow>,
}
