pub mod api;
pub mod auth;
pub mod config;
pub mod dashboard;
pub mod directory;
pub mod http;

pub use self::{config::Config, dashboard::Resolution, directory::Directory};
