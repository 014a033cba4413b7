pub mod api;
pub mod config;
pub mod observability;
pub mod printer;
pub mod render;
pub mod sequence;
pub mod templates;
pub mod ticket_log;
pub mod wrap;
