//! URL slugs for landing pages.
//!
//! A slug is the public lookup key of a landing page (`/p/{slug}`). It is
//! derived from the page title, falling back to the hero text and finally to
//! [`Slug::FALLBACK`] when neither yields any usable characters.

use core::fmt;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Slug`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SlugError {
    /// The input string is empty.
    #[error("slug cannot be empty")]
    Empty,
    /// The input contains something other than `a-z`, `0-9` and `-`.
    #[error("slug contains invalid character {0:?}")]
    InvalidCharacter(char),
    /// The input starts or ends with `-`, or contains `--`.
    #[error("slug has a misplaced separator")]
    MisplacedSeparator,
}

/// A lowercase, hyphen-separated ASCII identifier.
///
/// ## Examples
///
/// ```
/// use launchkit_core::Slug;
///
/// let slug = Slug::derive("Hello, World!", "ignored");
/// assert_eq!(slug.as_str(), "hello-world");
/// assert_eq!(slug.with_suffix(2).as_str(), "hello-world-2");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    /// Used when neither the title nor the hero text produce a slug.
    pub const FALLBACK: &'static str = "page";

    /// Number of hero text characters considered for the fallback slug.
    pub const HERO_PREFIX_CHARS: usize = 30;

    /// Derive the base slug for a new page.
    ///
    /// Tries the title, then the first [`Self::HERO_PREFIX_CHARS`] characters
    /// of the hero text, then [`Self::FALLBACK`].
    #[must_use]
    pub fn derive(title: &str, hero_text: &str) -> Self {
        let from_title = slugify(title);
        if !from_title.is_empty() {
            return Self(from_title);
        }

        let hero_prefix: String = hero_text.chars().take(Self::HERO_PREFIX_CHARS).collect();
        let from_hero = slugify(&hero_prefix);
        if !from_hero.is_empty() {
            return Self(from_hero);
        }

        Self(Self::FALLBACK.to_owned())
    }

    /// Parse an already-normalized slug (e.g. one read back from storage).
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, contains characters outside
    /// `a-z0-9-`, or has leading, trailing, or doubled separators.
    pub fn parse(s: &str) -> Result<Self, SlugError> {
        if s.is_empty() {
            return Err(SlugError::Empty);
        }
        if let Some(c) = s
            .chars()
            .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-'))
        {
            return Err(SlugError::InvalidCharacter(c));
        }
        if s.starts_with('-') || s.ends_with('-') || s.contains("--") {
            return Err(SlugError::MisplacedSeparator);
        }
        Ok(Self(s.to_owned()))
    }

    /// Returns this slug with `-{n}` appended.
    #[must_use]
    pub fn with_suffix(&self, n: u64) -> Self {
        Self(format!("{}-{n}", self.0))
    }

    /// Returns the first of `self`, `self-2`, `self-3`, … not present in `taken`.
    #[must_use]
    pub fn first_available<'a, I>(&self, taken: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let taken: HashSet<&str> = taken.into_iter().collect();
        if !taken.contains(self.as_str()) {
            return self.clone();
        }

        // Terminates: `taken` is finite.
        let mut n: u64 = 2;
        loop {
            let candidate = self.with_suffix(n);
            if !taken.contains(candidate.as_str()) {
                return candidate;
            }
            n += 1;
        }
    }

    /// Returns the slug as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Slug` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Normalize arbitrary text into a slug string.
///
/// Transliterates every script to ASCII (`Привет` → `privet`), lowercases,
/// drops commas used as thousands separators (`1,000` → `1000`), and collapses
/// every run of other characters into a single `-`. Leading and trailing
/// separators are never emitted. Returns an empty string if nothing survives.
#[must_use]
pub fn slugify(input: &str) -> String {
    // Characters without a transliteration are dropped.
    let ascii = deunicode::deunicode_with_tofu(input, "");

    let mut slug = String::with_capacity(ascii.len());
    let mut pending_separator = false;
    let mut prev: Option<char> = None;
    let mut chars = ascii.chars().peekable();

    while let Some(c) = chars.next() {
        let thousands_comma = c == ','
            && prev.is_some_and(|p| p.is_ascii_digit())
            && chars.peek().is_some_and(char::is_ascii_digit);
        prev = Some(c);
        if thousands_comma {
            continue;
        }

        if !c.is_ascii_alphanumeric() {
            pending_separator = true;
            continue;
        }

        if pending_separator && !slug.is_empty() {
            slug.push('-');
        }
        pending_separator = false;
        slug.push(c.to_ascii_lowercase());
    }

    slug
}
