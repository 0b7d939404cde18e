use std::sync::Arc;

use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::auth::dtos::LoginDto;
use crate::features::auth::model::SessionState;
use crate::features::users::models::PersonalInfo;
use crate::features::users::services::ProfileRepository;

/// The session gate over the stored profile record.
pub struct SessionService {
    profiles: Arc<ProfileRepository>,
}

impl SessionService {
    pub fn new(profiles: Arc<ProfileRepository>) -> Self {
        Self { profiles }
    }

    /// Resolve the gate from the store: stored profile means `LoggedIn`.
    pub async fn state(&self) -> Result<SessionState> {
        Ok(match self.profiles.load().await? {
            Some(profile) => SessionState::LoggedIn(profile),
            None => SessionState::LoggedOut,
        })
    }

    /// Validate and persist the captured profile. The gate reads `LoggedIn`
    /// afterwards; nothing is written when validation fails.
    pub async fn login(&self, dto: LoginDto) -> Result<PersonalInfo> {
        dto.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let profile = PersonalInfo {
            name: dto.name,
            surname: dto.surname,
            email: dto.email,
            phone: dto.phone,
            contact_preference: dto.contact_preference,
            callback_window: dto.callback_window,
        };
        self.profiles.save(&profile).await?;
        tracing::info!("profile stored, session is logged in");

        Ok(profile)
    }

    /// Delete the profile record. Historical reports are retained.
    pub async fn logout(&self) -> Result<()> {
        self.profiles.delete().await?;
        tracing::info!("profile deleted, session is logged out");

        Ok(())
    }
}
