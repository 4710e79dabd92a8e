pub mod quick;
pub mod submit;
