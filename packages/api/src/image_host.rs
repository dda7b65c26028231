//! # Image host client
//!
//! Category images are not sent to the backend; they are uploaded first to an
//! external image host and only the resulting URL travels in the category
//! payload.
//!
//! [`ImageHost`] is the seam the submission workflow depends on.
//! [`CloudinaryClient`] implements it against Cloudinary's unsigned upload API:
//! a multipart `POST` carrying the file and an `upload_preset`, answered with
//! JSON whose `secure_url` is the hosted image. Any non-2xx status is an
//! [`ApiError::Upload`].

use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use crate::config::ImageHostConfig;
use crate::error::ApiError;
use crate::models::{ImageFile, UploadedImage};

/// Async trait for hosting an image and getting its public URL back.
pub trait ImageHost {
    fn upload(
        &self,
        image: &ImageFile,
    ) -> impl std::future::Future<Output = Result<UploadedImage, ApiError>>;
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
}

/// Cloudinary unsigned-upload client.
#[derive(Clone, Debug)]
pub struct CloudinaryClient {
    client: reqwest::Client,
    upload_url: String,
    upload_preset: String,
}

impl CloudinaryClient {
    pub fn new(config: &ImageHostConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            upload_url: config.upload_url(),
            upload_preset: config.upload_preset.clone(),
        }
    }
}

impl ImageHost for CloudinaryClient {
    async fn upload(&self, image: &ImageFile) -> Result<UploadedImage, ApiError> {
        let mut part = Part::bytes(image.bytes.clone()).file_name(image.file_name.clone());
        if let Some(content_type) = &image.content_type {
            part = part.mime_str(content_type)?;
        }

        let form = Form::new()
            .part("file", part)
            .text("upload_preset", self.upload_preset.clone());

        tracing::debug!("Uploading {:?} to {}", image, self.upload_url);
        let response = self
            .client
            .post(&self.upload_url)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Upload {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }

        let body: UploadResponse = response.json().await?;
        Ok(UploadedImage {
            url: body.secure_url,
        })
    }
}
