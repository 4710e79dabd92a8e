pub mod current;
pub mod logout;
