use std::sync::Arc;

use validator::Validate;

use super::ProfileRepository;
use crate::core::error::{AppError, Result};
use crate::features::users::dtos::UpdateProfileDto;
use crate::features::users::models::PersonalInfo;

/// Service for reading and editing the stored profile.
pub struct ProfileService {
    repo: Arc<ProfileRepository>,
}

impl ProfileService {
    pub fn new(repo: Arc<ProfileRepository>) -> Self {
        Self { repo }
    }

    /// Current profile; `NotFound` while logged out.
    pub async fn profile(&self) -> Result<PersonalInfo> {
        self.repo.load().await?.ok_or_else(|| {
            AppError::NotFound("No profile is stored on this device".to_string())
        })
    }

    /// Validate the edited fields and replace the stored record.
    pub async fn update(&self, dto: UpdateProfileDto) -> Result<PersonalInfo> {
        dto.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        // Edits only make sense while a profile exists
        self.profile().await?;

        let profile = PersonalInfo {
            name: dto.name,
            surname: dto.surname,
            email: dto.email,
            phone: dto.phone,
            contact_preference: dto.contact_preference,
            callback_window: dto.callback_window,
        };
        self.repo.save(&profile).await?;

        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::users::models::ContactPreference;
    use crate::modules::storage::MemoryStore;
    use crate::shared::test_helpers::sample_profile;

    fn service_with_repo() -> (ProfileService, Arc<ProfileRepository>) {
        let repo = Arc::new(ProfileRepository::new(Arc::new(MemoryStore::new())));
        (ProfileService::new(repo.clone()), repo)
    }

    fn update_dto() -> UpdateProfileDto {
        UpdateProfileDto {
            name: "Ayşe".to_string(),
            surname: "Yılmaz".to_string(),
            email: Some("ayse@example.com".to_string()),
            phone: Some("5551234567".to_string()),
            contact_preference: ContactPreference::Email,
            callback_window: None,
        }
    }

    #[tokio::test]
    async fn update_while_logged_out_is_not_found() {
        let (service, _) = service_with_repo();

        assert!(matches!(
            service.update(update_dto()).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn update_with_malformed_email_is_rejected() {
        let (service, repo) = service_with_repo();
        repo.save(&sample_profile()).await.unwrap();

        let dto = UpdateProfileDto {
            email: Some("not-an-email".to_string()),
            ..update_dto()
        };

        assert!(matches!(
            service.update(dto).await,
            Err(AppError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn update_replaces_the_stored_record() {
        let (service, repo) = service_with_repo();
        repo.save(&sample_profile()).await.unwrap();

        let updated = service.update(update_dto()).await.unwrap();

        assert_eq!(updated.name, "Ayşe");
        assert_eq!(repo.load().await.unwrap(), Some(updated));
    }
}
