//! System-level modules
//!
//! This module contains system-level functionality:
//! - Logging initialization
//! - Process panic hook

pub mod logging;
pub mod panic_handler;
