mod app;
mod document;
mod effects;
mod logging;
mod ui;

pub use app::run_app;
