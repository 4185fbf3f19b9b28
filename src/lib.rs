pub mod cli;
pub mod config;
pub mod logging;
pub mod preferences;
pub mod profile;
pub mod shutdown;
pub mod ui;
