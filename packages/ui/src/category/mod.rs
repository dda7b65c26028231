//! Category creation: form model and submission workflow.

pub mod form;
pub mod workflow;

pub use form::{CategoryForm, Field, FieldErrors, ValidCategoryForm};
pub use workflow::{schedule_redirect, submit, PageEffects, SubmitOutcome, REDIRECT_DELAY};
