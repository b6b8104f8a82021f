// src/server/mod.rs

//! Server layer root module.
//!
//! This module organizes the HTTP side of the backend, including:
//! - Application state management
//! - HTTP routing and request handlers
//! - Status page rendering
//! - Infrastructure error responses

pub mod state;
pub mod router;
pub mod handlers;
pub mod status_page;
pub mod http_error;
