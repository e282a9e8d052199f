pub mod app;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod import;
pub mod logging;
pub mod session;
pub mod storage;
pub mod ui;
pub mod utils;
