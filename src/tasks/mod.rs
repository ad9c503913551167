//! Background tasks module
//!
//! This module contains background tasks that run alongside the HTTP server.

pub mod refresh_loop;

// Re-export main functions
pub use refresh_loop::{refresh_task, spawn_refresh_task};
