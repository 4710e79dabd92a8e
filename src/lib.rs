pub mod config;
pub mod db;
pub mod routes;
pub mod site;
pub mod types;
pub mod utils;
