//! Civica - Municipal Services Reporting and Event Recommendations
//!
//! Residents report service issues and browse or search community events;
//! a lightweight recommendation engine biases event suggestions toward each
//! user's past search categories, with a platform-wide popularity fallback.

pub mod cli;
pub mod models;
pub mod server;
pub mod services;
pub mod store;
pub mod validation;

pub use store::Store;
