pub mod create_category;
pub mod delete_category;
pub mod list_categories;
