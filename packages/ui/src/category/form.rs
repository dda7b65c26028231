//! Category form model and presence validation.

use api::{ImageFile, NewCategory, UploadedImage};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Slug,
    Description,
    Image,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Slug, Field::Description, Field::Image];

    /// Inline message shown under the field when it is missing.
    pub fn error_message(self) -> &'static str {
        match self {
            Field::Image => {
                "This field is required and the image must be less than or equal to 1MB."
            }
            _ => "This field is required",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Category Name",
            Field::Slug => "Category Slug",
            Field::Description => "Category Description",
            Field::Image => "Add Category Image",
        }
    }
}

/// Raw form state as typed by the user.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CategoryForm {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub image: Option<ImageFile>,
}

/// Which fields failed validation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    name: bool,
    slug: bool,
    description: bool,
    image: bool,
}

impl FieldErrors {
    pub fn has(&self, field: Field) -> bool {
        match field {
            Field::Name => self.name,
            Field::Slug => self.slug,
            Field::Description => self.description,
            Field::Image => self.image,
        }
    }

    pub fn set(&mut self, field: Field, missing: bool) {
        match field {
            Field::Name => self.name = missing,
            Field::Slug => self.slug = missing,
            Field::Description => self.description = missing,
            Field::Image => self.image = missing,
        }
    }

    pub fn clear(&mut self, field: Field) {
        self.set(field, false);
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| !self.has(*f))
    }

    /// Message to render for `field`, if it has an error.
    pub fn message(&self, field: Field) -> Option<&'static str> {
        self.has(field).then(|| field.error_message())
    }
}

/// A form with every required field present.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidCategoryForm {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub image: ImageFile,
}

impl ValidCategoryForm {
    /// Build the creation payload once the image is hosted.
    pub fn into_payload(self, image: UploadedImage) -> NewCategory {
        NewCategory::new(self.name, self.slug, self.description, image)
    }
}

impl CategoryForm {
    /// Check that every field is present. Empty strings count as missing;
    /// no other rule applies.
    pub fn validate(&self) -> Result<ValidCategoryForm, FieldErrors> {
        let mut errors = FieldErrors::default();
        errors.set(Field::Name, self.name.is_empty());
        errors.set(Field::Slug, self.slug.is_empty());
        errors.set(Field::Description, self.description.is_empty());
        errors.set(Field::Image, self.image.is_none());

        match &self.image {
            Some(image) if errors.is_empty() => Ok(ValidCategoryForm {
                name: self.name.clone(),
                slug: self.slug.clone(),
                description: self.description.clone(),
                image: image.clone(),
            }),
            _ => Err(errors),
        }
    }

    pub fn set_text(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Slug => self.slug = value,
            Field::Description => self.description = value,
            Field::Image => {}
        }
    }
}
