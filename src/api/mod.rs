//! Sheetpack API Server module
//!
//! HTTP upload/download boundary for the batch renamer.
//! Run with `sheetpack-server`.

pub mod handlers;
pub mod server;

pub use server::run_api_server;
