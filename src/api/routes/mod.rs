//! API Routes
//!
//! Route handlers organized by functionality.

pub mod applications;
pub mod health;
pub mod session;
pub mod stats;
