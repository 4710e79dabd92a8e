pub mod consult;
pub mod error;
pub mod mail;
pub mod notice;
pub mod response;
pub mod session;
pub mod user;
