pub mod app;
pub mod config;
pub mod effects;
pub mod logging;
pub mod persistence;
pub mod routes;
pub mod session;
pub mod ui;

pub use app::run_app;
