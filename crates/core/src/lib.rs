//! Launchkit Core - Shared types and pure business logic.
//!
//! This crate provides the pieces of Launchkit that need no I/O:
//! - `web` - The HTTP application persisting landing pages and signups
//! - `cli` - Command-line access to migrations and the calculators
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no database access,
//! no HTTP. This keeps it lightweight and trivially testable.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, and slugs
//! - [`page`] - Landing page input validation
//! - [`ideas`] - Business idea generator
//! - [`pricing`] - Price tier calculator

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod ideas;
pub mod page;
pub mod pricing;
pub mod types;

pub use ideas::{IdeaRequest, IdeaSuggestion, generate_ideas};
pub use page::{DraftError, LandingPageDraft, LandingPageInput};
pub use pricing::{PricingError, PricingInput, PricingQuote, PricingRequest};
pub use types::*;
