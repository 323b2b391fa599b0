//! Server application core modules.
//!
//! This module contains all server-side functionality: configuration, HTTP routing and
//! controllers, the service and repository layers over the database, and the error types
//! that turn failures into JSON responses.

#![warn(missing_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
