mod personal_info;

pub use personal_info::{CallbackWindow, ContactPreference, PersonalInfo};
