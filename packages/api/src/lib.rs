//! # API crate — outbound calls of the admin panel
//!
//! Every network call the admin pages make goes through this crate. The UI
//! depends on the two traits defined here, never on `reqwest` directly, so the
//! submission workflow can be exercised against in-memory fakes.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`backend`] | [`CategoryBackend`] trait and [`BackendClient`], the bearer-authenticated client of the application backend |
//! | [`image_host`] | [`ImageHost`] trait and [`CloudinaryClient`], multipart unsigned uploads |
//! | [`config`] | [`AdminConfig`]: backend URL and image host settings, TOML + environment overrides |
//! | [`models`] | Wire types (`NewCategory`, `ApiResponse`) and the in-memory [`ImageFile`] |
//! | [`error`] | [`ApiError`], returned by every client call |

pub mod backend;
pub mod config;
pub mod error;
pub mod image_host;
pub mod models;

pub use backend::{add_new_category, BackendClient, CategoryBackend};
pub use config::{AdminConfig, ImageHostConfig};
pub use error::ApiError;
pub use image_host::{CloudinaryClient, ImageHost};
pub use models::{ApiResponse, ImageFile, NewCategory, UploadedImage, MAX_IMAGE_BYTES};
