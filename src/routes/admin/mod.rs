pub mod consult;
pub mod notice;
pub mod users;
