/// Secure-store key for the persisted report collection
pub const REPORTS_STORAGE_KEY: &str = "user_reports";

/// Secure-store key for the persisted personal-info record
pub const PROFILE_STORAGE_KEY: &str = "personal_info";

/// Upper bound for a single decoded image payload
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024; // 5MB
