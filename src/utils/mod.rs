pub mod mail;
pub mod throttle;
pub mod token;
pub mod validate;
pub mod webutils;
