pub mod categories;
pub mod get;
pub mod list;
