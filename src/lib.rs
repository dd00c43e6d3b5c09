pub mod backend;
pub mod commands;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod fixtures;
pub mod formatting;
pub mod layout_constants;
pub mod model;
pub mod store;
pub mod tui;
pub mod view;
