//! Domain models for Launchkit.
//!
//! These types represent validated domain objects separate from database row
//! types. Pure input types (drafts, calculator requests) live in
//! `launchkit_core`.

pub mod landing_page;

pub use landing_page::{EmailSignup, LandingPage, LandingPageSummary};
