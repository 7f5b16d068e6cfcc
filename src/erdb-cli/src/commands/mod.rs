//! Command handlers for erdb CLI

pub mod configure;
pub mod generate;
pub mod import;
pub mod list;
pub mod validate;
