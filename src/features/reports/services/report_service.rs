use std::sync::Arc;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use super::ReportRepository;
use crate::core::config::Config;
use crate::core::error::{AppError, Result};
use crate::features::reports::dtos::{NewReportDto, SubmissionPayload};
use crate::features::reports::models::{
    ImageMetadata, Report, ReportCategory, ReportImage, ReportLocation, ReportStatus, UserSnapshot,
};
use crate::features::users::services::ProfileRepository;
use crate::shared::constants::MAX_IMAGE_BYTES;

/// Service for creating and reading the citizen's own reports.
pub struct ReportService {
    repo: Arc<ReportRepository>,
    profiles: Arc<ProfileRepository>,
    config: Config,
}

impl ReportService {
    pub fn new(
        repo: Arc<ReportRepository>,
        profiles: Arc<ProfileRepository>,
        config: Config,
    ) -> Self {
        Self {
            repo,
            profiles,
            config,
        }
    }

    /// Validate and persist a new submission, then log the payload a future
    /// server integration would receive.
    ///
    /// Nothing is persisted when validation fails.
    pub async fn submit(&self, dto: NewReportDto) -> Result<Report> {
        dto.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        Self::check_image_payloads(&dto)?;

        let profile = self.profiles.load().await?.ok_or_else(|| {
            AppError::NotFound("No profile is stored on this device".to_string())
        })?;

        let now = Utc::now();
        let report = Report {
            id: Uuid::new_v4(),
            query: dto.query.trim().to_string(),
            category: dto.category,
            // The explanatory text only accompanies the catch-all category
            category_detail: match dto.category {
                ReportCategory::Other => dto.category_detail,
                _ => None,
            },
            status: ReportStatus::Pending,
            images: dto
                .images
                .into_iter()
                .map(|img| ReportImage {
                    id: Uuid::new_v4(),
                    filename: img.filename,
                    data: img.data,
                    uri: img.uri,
                    metadata: ImageMetadata {
                        latitude: img.latitude,
                        longitude: img.longitude,
                        captured_at: img.captured_at,
                        device_model: img.device_model,
                        os_version: img.os_version,
                        address: img.address,
                    },
                })
                .collect(),
            location: dto.location.map(|loc| ReportLocation {
                latitude: loc.latitude,
                longitude: loc.longitude,
                address: loc.address,
            }),
            user_info: UserSnapshot {
                name: profile.name.clone(),
                surname: profile.surname.clone(),
                contact_preference: profile.contact_preference,
            },
            created_at: now,
            updated_at: now,
        };

        // Read-modify-write of the full collection. An unreadable collection
        // is treated as empty so the submission itself still goes through;
        // the save below then replaces the unreadable blob.
        let mut reports = match self.repo.load().await {
            Ok(reports) => reports,
            Err(e) => {
                tracing::warn!("discarding unreadable report history: {}", e);
                Vec::new()
            }
        };
        reports.push(report.clone());
        self.repo.save(&reports).await?;

        let payload = SubmissionPayload::from_report(
            &report,
            &profile,
            &self.config.app.version,
            &self.config.device.device_id,
        );
        tracing::info!(
            payload = %serde_json::to_string(&payload)?,
            "submission stored; no server integration yet"
        );

        Ok(report)
    }

    /// The citizen's full report history, in submission order.
    pub async fn list(&self) -> Result<Vec<Report>> {
        self.repo.load().await
    }

    /// Single report lookup for the detail view.
    pub async fn get(&self, id: Uuid) -> Result<Report> {
        self.repo
            .load()
            .await?
            .into_iter()
            .find(|r| r.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Report {} not found", id)))
    }

    fn check_image_payloads(dto: &NewReportDto) -> Result<()> {
        for image in &dto.images {
            let bytes = BASE64.decode(&image.data).map_err(|_| {
                AppError::Validation(format!("Image {} is not valid base64", image.filename))
            })?;
            if bytes.len() > MAX_IMAGE_BYTES {
                return Err(AppError::Validation(format!(
                    "Image {} exceeds the {} byte limit",
                    image.filename, MAX_IMAGE_BYTES
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::path::PathBuf;

    use crate::core::config::{AppConfig, DeviceConfig, StorageConfig};
    use crate::features::reports::dtos::NewImageDto;
    use crate::modules::storage::{MemoryStore, SecureStore};
    use crate::shared::constants::REPORTS_STORAGE_KEY;
    use crate::shared::test_helpers::sample_profile;

    fn test_config() -> Config {
        Config {
            app: AppConfig {
                version: "1.0.0".to_string(),
            },
            storage: StorageConfig {
                data_dir: PathBuf::from("./data"),
            },
            device: DeviceConfig {
                model: "test-device".to_string(),
                os_version: "0.0".to_string(),
                device_id: "test-device-id".to_string(),
            },
        }
    }

    async fn service_with_profile() -> (ReportService, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        let profiles = Arc::new(ProfileRepository::new(store.clone()));
        profiles.save(&sample_profile()).await.unwrap();
        let repo = Arc::new(ReportRepository::new(store.clone()));
        (ReportService::new(repo, profiles, test_config()), store)
    }

    fn new_report_dto() -> NewReportDto {
        NewReportDto {
            query: "Sokak lambası arızalı".to_string(),
            category: ReportCategory::Infrastructure,
            category_detail: None,
            images: Vec::new(),
            location: None,
        }
    }

    #[tokio::test]
    async fn submit_appends_a_pending_report() {
        let (service, _) = service_with_profile().await;

        let report = service.submit(new_report_dto()).await.unwrap();

        assert_eq!(report.status, ReportStatus::Pending);
        assert_eq!(report.created_at, report.updated_at);
        let listed = service.list().await.unwrap();
        assert_eq!(listed, vec![report]);
    }

    #[tokio::test]
    async fn submit_with_blank_query_persists_nothing() {
        let (service, _) = service_with_profile().await;

        let dto = NewReportDto {
            query: "   ".to_string(),
            ..new_report_dto()
        };

        assert!(matches!(
            service.submit(dto).await,
            Err(AppError::Validation(_))
        ));
        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn submit_without_profile_is_not_found() {
        let store = Arc::new(MemoryStore::new());
        let service = ReportService::new(
            Arc::new(ReportRepository::new(store.clone())),
            Arc::new(ProfileRepository::new(store)),
            test_config(),
        );

        assert!(matches!(
            service.submit(new_report_dto()).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn submit_snapshots_the_profile() {
        let (service, _) = service_with_profile().await;

        let report = service.submit(new_report_dto()).await.unwrap();

        assert!(!report.user_info.name.is_empty());
        assert_eq!(
            report.user_info.contact_preference,
            sample_profile().contact_preference
        );
    }

    #[tokio::test]
    async fn detail_is_dropped_for_non_other_categories() {
        let (service, _) = service_with_profile().await;

        let dto = NewReportDto {
            category: ReportCategory::Traffic,
            category_detail: Some("should vanish".to_string()),
            ..new_report_dto()
        };

        let report = service.submit(dto).await.unwrap();
        assert_eq!(report.category_detail, None);
    }

    #[tokio::test]
    async fn other_category_without_detail_is_accepted() {
        let (service, _) = service_with_profile().await;

        let dto = NewReportDto {
            category: ReportCategory::Other,
            category_detail: None,
            ..new_report_dto()
        };

        let report = service.submit(dto).await.unwrap();
        assert_eq!(report.category, ReportCategory::Other);
        assert_eq!(report.category_detail, None);
    }

    #[tokio::test]
    async fn malformed_image_payload_is_rejected() {
        let (service, _) = service_with_profile().await;

        let dto = NewReportDto {
            images: vec![NewImageDto {
                filename: "photo.jpg".to_string(),
                data: "not base64!!!".to_string(),
                uri: "file:///tmp/photo.jpg".to_string(),
                latitude: None,
                longitude: None,
                captured_at: Utc::now(),
                device_model: "test-device".to_string(),
                os_version: "0.0".to_string(),
                address: None,
            }],
            ..new_report_dto()
        };

        assert!(matches!(
            service.submit(dto).await,
            Err(AppError::Validation(_))
        ));
        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn submit_keeps_earlier_reports() {
        let (service, _) = service_with_profile().await;

        service.submit(new_report_dto()).await.unwrap();
        let dto = NewReportDto {
            query: "Çöp konteyneri taşmış".to_string(),
            category: ReportCategory::Waste,
            ..new_report_dto()
        };
        service.submit(dto).await.unwrap();

        let listed = service.list().await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[1].category, ReportCategory::Waste);
    }

    #[tokio::test]
    async fn unreadable_history_is_replaced_by_the_new_submission() {
        let (service, store) = service_with_profile().await;
        store.set(REPORTS_STORAGE_KEY, "{broken").await.unwrap();

        let report = service.submit(new_report_dto()).await.unwrap();

        assert_eq!(service.list().await.unwrap(), vec![report]);
    }

    #[tokio::test]
    async fn get_finds_a_report_by_id() {
        let (service, _) = service_with_profile().await;

        let report = service.submit(new_report_dto()).await.unwrap();

        assert_eq!(service.get(report.id).await.unwrap(), report);
        assert!(matches!(
            service.get(Uuid::new_v4()).await,
            Err(AppError::NotFound(_))
        ));
    }
}
