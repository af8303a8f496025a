//! Plain HTTP routes
//!
//! Everything except `/graphql`: currently just the health check.

pub mod health;
