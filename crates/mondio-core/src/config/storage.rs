//! Media storage configuration.

use serde::{Deserialize, Serialize};

/// Media upload storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Root directory for all runtime data.
    #[serde(default = "default_data_root")]
    pub data_root: String,
    /// Directory for uploaded media, relative to `data_root`.
    #[serde(default = "default_uploads_dir")]
    pub uploads_dir: String,
    /// Maximum photo upload size in bytes (default 10 MB).
    #[serde(default = "default_max_photo")]
    pub max_photo_size_bytes: u64,
    /// Maximum video upload size in bytes (default 200 MB).
    #[serde(default = "default_max_video")]
    pub max_video_size_bytes: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_root: default_data_root(),
            uploads_dir: default_uploads_dir(),
            max_photo_size_bytes: default_max_photo(),
            max_video_size_bytes: default_max_video(),
        }
    }
}

impl StorageConfig {
    /// Absolute root path for uploaded media.
    pub fn uploads_root(&self) -> String {
        format!("{}/{}", self.data_root, self.uploads_dir)
    }
}

fn default_data_root() -> String {
    "./data".to_string()
}

fn default_uploads_dir() -> String {
    "uploads".to_string()
}

fn default_max_photo() -> u64 {
    10_485_760 // 10 MB
}

fn default_max_video() -> u64 {
    209_715_200 // 200 MB
}
