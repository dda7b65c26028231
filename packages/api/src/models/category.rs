//! # Category creation wire types
//!
//! ## [`NewCategory`]
//!
//! The JSON body of the category-creation request. Field names follow the
//! backend contract (`categoryName`, `categoryDescription`, `categoryImage`,
//! `categorySlug`). It can only be built from an [`UploadedImage`], so a
//! payload never exists without a hosted image URL.
//!
//! ## [`ApiResponse`]
//!
//! The backend's reply: a `success` flag, a human-readable `message`, and an
//! optional `data` payload. Missing fields decode as `false` / empty so a
//! terse error body still yields a usable rejection.

use serde::{Deserialize, Serialize};

use super::image::UploadedImage;

/// Request body for creating a category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    pub category_name: String,
    pub category_description: String,
    pub category_image: String,
    pub category_slug: String,
}

impl NewCategory {
    pub fn new(name: String, slug: String, description: String, image: UploadedImage) -> Self {
        Self {
            category_name: name,
            category_description: description,
            category_image: image.url,
            category_slug: slug,
        }
    }
}

/// Generic backend response envelope.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl ApiResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }
}
