//! # Admin panel configuration
//!
//! Where the outbound calls go: the application backend and the image host.
//!
//! ```toml
//! backend_url = "https://shop.example.com"
//!
//! [image_host]
//! cloud_name = "dtr4nxsdu"
//! upload_preset = "ztqnpcmt"
//! # upload_url = "https://..."   # overrides the URL derived from cloud_name
//! ```
//!
//! [`AdminConfig::load`] starts from the defaults and overlays environment
//! values. Native builds read a `.env` file (via `dotenvy`) and the process
//! environment; wasm builds have no runtime environment, so the same variable
//! names are captured at build time.
//!
//! | Variable | Field |
//! |----------|-------|
//! | `ADMIN_BACKEND_URL` | `backend_url` |
//! | `IMAGE_HOST_CLOUD_NAME` | `image_host.cloud_name` |
//! | `IMAGE_HOST_UPLOAD_PRESET` | `image_host.upload_preset` |
//! | `IMAGE_HOST_UPLOAD_URL` | `image_host.upload_url` |

use serde::{Deserialize, Serialize};

const CLOUDINARY_API: &str = "https://api.cloudinary.com/v1_1";

/// Top-level admin panel configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AdminConfig {
    /// Base URL of the application backend, without trailing slash.
    #[serde(default = "default_backend_url")]
    pub backend_url: String,
    #[serde(default)]
    pub image_host: ImageHostConfig,
}

/// Image host (Cloudinary unsigned upload) configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageHostConfig {
    #[serde(default = "default_cloud_name")]
    pub cloud_name: String,
    /// Server-side upload configuration applied to every upload.
    #[serde(default = "default_upload_preset")]
    pub upload_preset: String,
    /// Full upload endpoint. Derived from `cloud_name` when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upload_url: Option<String>,
}

fn default_backend_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_cloud_name() -> String {
    "dtr4nxsdu".to_string()
}

fn default_upload_preset() -> String {
    "ztqnpcmt".to_string()
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            backend_url: default_backend_url(),
            image_host: ImageHostConfig::default(),
        }
    }
}

impl Default for ImageHostConfig {
    fn default() -> Self {
        Self {
            cloud_name: default_cloud_name(),
            upload_preset: default_upload_preset(),
            upload_url: None,
        }
    }
}

impl ImageHostConfig {
    /// The endpoint uploads are posted to.
    pub fn upload_url(&self) -> String {
        match &self.upload_url {
            Some(url) => url.clone(),
            None => format!("{CLOUDINARY_API}/{}/image/upload", self.cloud_name),
        }
    }
}

impl AdminConfig {
    /// Defaults overlaid with the platform's environment.
    pub fn load() -> Self {
        Self::default().with_overrides(env_lookup)
    }

    /// Builder method to set the backend base URL.
    pub fn with_backend_url(mut self, url: impl Into<String>) -> Self {
        self.backend_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Builder method to set an explicit upload endpoint.
    pub fn with_upload_url(mut self, url: impl Into<String>) -> Self {
        self.image_host.upload_url = Some(url.into());
        self
    }

    /// Overlay values from a variable lookup (see the module table for names).
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup("ADMIN_BACKEND_URL") {
            self = self.with_backend_url(url);
        }
        if let Some(name) = lookup("IMAGE_HOST_CLOUD_NAME") {
            self.image_host.cloud_name = name;
        }
        if let Some(preset) = lookup("IMAGE_HOST_UPLOAD_PRESET") {
            self.image_host.upload_preset = preset;
        }
        if let Some(url) = lookup("IMAGE_HOST_UPLOAD_URL") {
            self = self.with_upload_url(url);
        }
        self
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn env_lookup(key: &str) -> Option<String> {
    dotenvy::dotenv().ok();
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

#[cfg(target_arch = "wasm32")]
fn env_lookup(key: &str) -> Option<String> {
    let value = match key {
        "ADMIN_BACKEND_URL" => option_env!("ADMIN_BACKEND_URL"),
        "IMAGE_HOST_CLOUD_NAME" => option_env!("IMAGE_HOST_CLOUD_NAME"),
        "IMAGE_HOST_UPLOAD_PRESET" => option_env!("IMAGE_HOST_UPLOAD_PRESET"),
        "IMAGE_HOST_UPLOAD_URL" => option_env!("IMAGE_HOST_UPLOAD_URL"),
        _ => None,
    };
    value.filter(|v| !v.is_empty()).map(str::to_string)
}
