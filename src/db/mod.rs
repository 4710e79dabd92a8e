pub mod consultation;
pub mod db_service;
pub mod notice;
pub mod session;
pub mod user;
