//! Business logic services for Launchkit.
//!
//! # Services
//!
//! - `pages` - Landing page creation (slug allocation), lookup, and email signups

pub mod pages;

pub use pages::{LandingPageService, PageServiceError};
