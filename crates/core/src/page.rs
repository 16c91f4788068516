//! Validation of landing page creation input.

use serde::Serialize;

use crate::Slug;

/// Raw landing page fields as submitted by a user.
#[derive(Debug, Clone, Default)]
pub struct LandingPageInput<'a> {
    pub title: &'a str,
    pub hero_text: &'a str,
    pub value_prop: &'a str,
    pub cta_text: &'a str,
    pub price: &'a str,
    pub stripe_url: &'a str,
}

/// A required field was blank.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("missing required fields: {}", .missing.join(", "))]
pub struct DraftError {
    /// Names of the blank required fields, in form order.
    pub missing: Vec<&'static str>,
}

/// A validated, not yet persisted landing page.
///
/// All text is trimmed. Optional fields that were blank are `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LandingPageDraft {
    pub title: String,
    pub hero_text: String,
    pub value_prop: String,
    pub cta_text: String,
    pub price: Option<String>,
    pub stripe_url: Option<String>,
}

impl LandingPageDraft {
    /// Validate raw input.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError`] listing every required field (title, hero text,
    /// value proposition, call to action) that is blank after trimming.
    pub fn parse(input: &LandingPageInput<'_>) -> Result<Self, DraftError> {
        let required = [
            ("title", input.title.trim()),
            ("hero_text", input.hero_text.trim()),
            ("value_prop", input.value_prop.trim()),
            ("cta_text", input.cta_text.trim()),
        ];

        let missing: Vec<&'static str> = required
            .iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(name, _)| *name)
            .collect();
        if !missing.is_empty() {
            return Err(DraftError { missing });
        }

        let [title, hero_text, value_prop, cta_text] = required.map(|(_, v)| v.to_owned());

        Ok(Self {
            title,
            hero_text,
            value_prop,
            cta_text,
            price: non_blank(input.price),
            stripe_url: non_blank(input.stripe_url),
        })
    }

    /// The slug this page gets when nothing else claims it first.
    #[must_use]
    pub fn base_slug(&self) -> Slug {
        Slug::derive(&self.title, &self.hero_text)
    }
}

fn non_blank(s: &str) -> Option<String> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
