#[cfg(test)]
use chrono::{DateTime, TimeZone, Utc};

#[cfg(test)]
use fake::faker::lorem::en::Sentence;
#[cfg(test)]
use fake::faker::name::en::{FirstName, LastName};
#[cfg(test)]
use fake::Fake;

#[cfg(test)]
use uuid::Uuid;

#[cfg(test)]
use crate::features::reports::models::{Report, ReportCategory, ReportStatus, UserSnapshot};
#[cfg(test)]
use crate::features::users::models::{ContactPreference, PersonalInfo};

#[cfg(test)]
pub fn sample_profile() -> PersonalInfo {
    PersonalInfo {
        name: FirstName().fake(),
        surname: LastName().fake(),
        email: Some("citizen@example.com".to_string()),
        phone: Some("5551234567".to_string()),
        contact_preference: ContactPreference::Phone,
        callback_window: None,
    }
}

#[cfg(test)]
pub fn sample_report(category: ReportCategory, status: ReportStatus) -> Report {
    sample_report_created_at(
        category,
        status,
        Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap(),
    )
}

#[cfg(test)]
pub fn sample_report_created_at(
    category: ReportCategory,
    status: ReportStatus,
    created_at: DateTime<Utc>,
) -> Report {
    Report {
        id: Uuid::new_v4(),
        query: Sentence(3..8).fake(),
        category,
        category_detail: None,
        status,
        images: Vec::new(),
        location: None,
        user_info: UserSnapshot {
            name: FirstName().fake(),
            surname: LastName().fake(),
            contact_preference: ContactPreference::Email,
        },
        created_at,
        updated_at: created_at,
    }
}
