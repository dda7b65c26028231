mod home;
pub use home::Home;

mod dashboard;
pub use dashboard::Dashboard;

mod add_category;
pub use add_category::AddCategory;
