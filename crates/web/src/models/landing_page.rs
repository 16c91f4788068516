//! Landing page domain types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use launchkit_core::{Email, EmailSignupId, LandingPageId, Slug};

/// A published landing page.
///
/// Pages are immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LandingPage {
    /// Unique page ID.
    pub id: LandingPageId,
    /// Page title.
    pub title: String,
    /// Public lookup key, unique across all pages.
    pub slug: Slug,
    /// Headline shown at the top of the page.
    pub hero_text: String,
    /// Value proposition body text.
    pub value_prop: String,
    /// Call-to-action button label.
    pub cta_text: String,
    /// Free-form price label (e.g. "$19/mo").
    pub price: Option<String>,
    /// External checkout link for the call to action.
    pub stripe_url: Option<String>,
    /// When the page was created.
    pub created_at: DateTime<Utc>,
}

/// A landing page together with its current number of signups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LandingPageSummary {
    pub page: LandingPage,
    pub signup_count: i64,
}

/// An email address collected by a landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailSignup {
    /// Unique signup ID.
    pub id: EmailSignupId,
    /// Page the visitor signed up on.
    pub landing_page_id: LandingPageId,
    /// Address as submitted (trimmed, otherwise unmodified).
    pub email: Email,
    /// When the signup was recorded.
    pub created_at: DateTime<Utc>,
}
