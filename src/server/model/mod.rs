//! Server application models and type definitions.
//!
//! Contains the shared application state handed to every handler and type aliases for the
//! database models used throughout the server.

pub mod app;
pub mod db;
