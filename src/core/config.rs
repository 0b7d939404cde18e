use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub storage: StorageConfig,
    pub device: DeviceConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Version string stamped into submission payloads.
    pub version: String,
}

#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Directory the file-backed store keeps its entries in.
    pub data_dir: PathBuf,
}

/// Device identity for submission metadata. The shell injects real values;
/// everything defaults to "unknown" elsewhere (tests, desktop previews).
#[derive(Debug, Clone)]
pub struct DeviceConfig {
    pub model: String,
    pub os_version: String,
    pub device_id: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            // Only error if it's not "file not found" - that's acceptable
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            storage: StorageConfig::from_env()?,
            device: DeviceConfig::from_env()?,
        })
    }
}

impl AppConfig {
    const DEFAULT_VERSION: &'static str = "1.0.0";

    pub fn from_env() -> Result<Self, String> {
        let version = env::var("APP_VERSION").unwrap_or_else(|_| Self::DEFAULT_VERSION.to_string());

        Ok(Self { version })
    }
}

impl StorageConfig {
    const DEFAULT_DATA_DIR: &'static str = "./data";

    pub fn from_env() -> Result<Self, String> {
        let data_dir = env::var("DATA_DIR")
            .unwrap_or_else(|_| Self::DEFAULT_DATA_DIR.to_string())
            .into();

        Ok(Self { data_dir })
    }
}

impl DeviceConfig {
    const DEFAULT_VALUE: &'static str = "unknown";

    pub fn from_env() -> Result<Self, String> {
        let model = env::var("DEVICE_MODEL").unwrap_or_else(|_| Self::DEFAULT_VALUE.to_string());

        let os_version =
            env::var("DEVICE_OS_VERSION").unwrap_or_else(|_| Self::DEFAULT_VALUE.to_string());

        let device_id = env::var("DEVICE_ID").unwrap_or_else(|_| Self::DEFAULT_VALUE.to_string());

        Ok(Self {
            model,
            os_version,
            device_id,
        })
    }
}
