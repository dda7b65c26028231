mod add_category;
pub use add_category::AddCategoryView;
