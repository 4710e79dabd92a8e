pub mod handled;
pub mod list;
