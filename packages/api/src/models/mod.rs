//! Data models exchanged with the backend and the image host.

mod category;
mod image;

pub use category::{ApiResponse, NewCategory};
pub use image::{ImageFile, UploadedImage, MAX_IMAGE_BYTES};
