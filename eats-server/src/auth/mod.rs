//! Authentication
//!
//! JWT issue/validate plus the request middleware that attaches the decoded
//! identity to request context.

pub mod jwt;
pub mod middleware;

pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};
