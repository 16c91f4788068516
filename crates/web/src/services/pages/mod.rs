//! Landing page service.
//!
//! Validates submissions, allocates unique slugs, and records email signups.

mod error;

pub use error::PageServiceError;

use sqlx::SqlitePool;
use tracing::instrument;

use launchkit_core::{Email, LandingPageDraft, LandingPageInput};

use crate::db::{LandingPageRepository, RepositoryError, SignupRepository};
use crate::models::{EmailSignup, LandingPage, LandingPageSummary};

/// Upper bound on insert attempts when concurrent creators race for a slug.
pub const MAX_SLUG_ATTEMPTS: u32 = 16;

/// Landing page service.
pub struct LandingPageService<'a> {
    pages: LandingPageRepository<'a>,
    signups: SignupRepository<'a>,
}

impl<'a> LandingPageService<'a> {
    /// Create a new landing page service.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self {
            pages: LandingPageRepository::new(pool),
            signups: SignupRepository::new(pool),
        }
    }

    /// Validate and store a new page under a fresh slug.
    ///
    /// The slug is derived from the title (falling back to the hero text,
    /// then `page`). If it is taken, the lowest free `-N` suffix (N >= 2) is
    /// used. The unique index on `slug` arbitrates between concurrent
    /// creators; a lost race re-reads the taken slugs and tries again.
    ///
    /// # Errors
    ///
    /// Returns `PageServiceError::Validation` if a required field is blank.
    /// Returns `PageServiceError::Repository` with `RepositoryError::Conflict`
    /// if no slug could be claimed within [`MAX_SLUG_ATTEMPTS`] attempts.
    #[instrument(skip(self, input), fields(title = %input.title))]
    pub async fn create_page(
        &self,
        input: &LandingPageInput<'_>,
    ) -> Result<LandingPage, PageServiceError> {
        let draft = LandingPageDraft::parse(input)?;
        let base = draft.base_slug();

        for attempt in 1..=MAX_SLUG_ATTEMPTS {
            let taken = self.pages.slugs_with_base(&base).await?;
            let slug = base.first_available(taken.iter().map(String::as_str));

            match self.pages.create(&draft, &slug).await {
                Ok(page) => {
                    tracing::info!(slug = %page.slug, id = %page.id, "Landing page created");
                    return Ok(page);
                }
                Err(RepositoryError::Conflict(_)) => {
                    tracing::debug!(%slug, attempt, "Slug claimed concurrently, retrying");
                }
                Err(e) => return Err(e.into()),
            }
        }

        tracing::warn!(%base, "Gave up allocating a slug");
        Err(RepositoryError::Conflict(format!("no free slug for {base}")).into())
    }

    /// All pages, newest first, with their signup counts.
    ///
    /// # Errors
    ///
    /// Returns `PageServiceError::Repository` if the query fails.
    #[instrument(skip(self))]
    pub async fn list_pages(&self) -> Result<Vec<LandingPageSummary>, PageServiceError> {
        Ok(self.pages.list_with_signup_counts().await?)
    }

    /// Fetch a page by its slug.
    ///
    /// # Errors
    ///
    /// Returns `PageServiceError::NotFound` if no page has this slug.
    #[instrument(skip(self))]
    pub async fn get_page(&self, slug: &str) -> Result<LandingPage, PageServiceError> {
        self.pages
            .get_by_slug(slug)
            .await?
            .ok_or_else(|| PageServiceError::NotFound(slug.to_owned()))
    }

    /// Record an email signup on the page with this slug.
    ///
    /// The page is checked before the email, so an unknown slug is reported
    /// as not found even when the email is blank.
    ///
    /// # Errors
    ///
    /// Returns `PageServiceError::NotFound` if no page has this slug.
    /// Returns `PageServiceError::Validation` if the email is blank.
    #[instrument(skip(self, raw_email))]
    pub async fn submit_signup(
        &self,
        slug: &str,
        raw_email: &str,
    ) -> Result<EmailSignup, PageServiceError> {
        let page = self.get_page(slug).await?;
        let email = Email::parse(raw_email)?;

        let signup = self
            .signups
            .create(page.id, &email)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => PageServiceError::NotFound(slug.to_owned()),
                other => PageServiceError::Repository(other),
            })?;

        tracing::info!(page_id = %page.id, signup_id = %signup.id, "Email signup recorded");
        Ok(signup)
    }

    /// Number of signups collected by a page.
    ///
    /// # Errors
    ///
    /// Returns `PageServiceError::Repository` if the query fails.
    #[instrument(skip(self, page), fields(slug = %page.slug))]
    pub async fn signup_count(&self, page: &LandingPage) -> Result<i64, PageServiceError> {
        Ok(self.signups.count_for_page(page.id).await?)
    }

    /// The page with this slug and its signups, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `PageServiceError::NotFound` if no page has this slug.
    #[instrument(skip(self))]
    pub async fn list_signups(
        &self,
        slug: &str,
    ) -> Result<(LandingPage, Vec<EmailSignup>), PageServiceError> {
        let page = self.get_page(slug).await?;
        let signups = self.signups.list_for_page(page.id).await?;
        Ok((page, signups))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::db::test_support;

    fn input(title: &str) -> LandingPageInput<'_> {
        LandingPageInput {
            title,
            hero_text: "Ship your next product this weekend",
            value_prop: "Everything you need to validate demand",
            cta_text: "Get access",
            price: "$19",
            stripe_url: "https://buy.stripe.com/test_123",
        }
    }

    #[tokio::test]
    async fn test_slug_is_normalized_title() {
        let pool = test_support::pool().await;
        let service = LandingPageService::new(&pool);

        let page = service.create_page(&input("My Great Product!")).await.unwrap();
        assert_eq!(page.slug.as_str(), "my-great-product");
        assert_eq!(page.title, "My Great Product!");
        assert_eq!(page.price.as_deref(), Some("$19"));
    }

    #[tokio::test]
    async fn test_collisions_get_lowest_free_suffix() {
        let pool = test_support::pool().await;
        let service = LandingPageService::new(&pool);

        let slugs = [
            service.create_page(&input("Launch")).await.unwrap().slug,
            service.create_page(&input("launch")).await.unwrap().slug,
            service.create_page(&input("LAUNCH!!")).await.unwrap().slug,
        ];
        assert_eq!(
            slugs.iter().map(|s| s.as_str()).collect::<Vec<_>>(),
            vec!["launch", "launch-2", "launch-3"]
        );
    }

    #[tokio::test]
    async fn test_gap_in_suffixes_is_reused() {
        let pool = test_support::pool().await;
        let service = LandingPageService::new(&pool);

        service.create_page(&input("Gap")).await.unwrap();
        service.create_page(&input("Gap")).await.unwrap();
        service.create_page(&input("Gap")).await.unwrap();
        sqlx::query("DELETE FROM landing_pages WHERE slug = 'gap-2'")
            .execute(&pool)
            .await
            .unwrap();

        let page = service.create_page(&input("Gap")).await.unwrap();
        assert_eq!(page.slug.as_str(), "gap-2");
    }

    #[tokio::test]
    async fn test_unrelated_suffix_does_not_count() {
        let pool = test_support::pool().await;
        let service = LandingPageService::new(&pool);

        service.create_page(&input("Deal Breaker")).await.unwrap();
        let page = service.create_page(&input("Deal")).await.unwrap();
        assert_eq!(page.slug.as_str(), "deal");
    }

    #[tokio::test]
    async fn test_symbol_title_falls_back_to_hero_then_page() {
        let pool = test_support::pool().await;
        let service = LandingPageService::new(&pool);

        let page = service.create_page(&input("!!!")).await.unwrap();
        assert_eq!(page.slug.as_str(), "ship-your-next-product-this-we");

        let page = service
            .create_page(&LandingPageInput {
                hero_text: "???",
                ..input("***")
            })
            .await
            .unwrap();
        assert_eq!(page.slug.as_str(), "page");
    }

    #[tokio::test]
    async fn test_concurrent_creates_get_distinct_slugs() {
        let pool = test_support::pool().await;
        let service = LandingPageService::new(&pool);

        let (in_a, in_b, in_c, in_d) = (
            input("Race"),
            input("Race"),
            input("Race"),
            input("Race"),
        );
        let (a, b, c, d) = tokio::join!(
            service.create_page(&in_a),
            service.create_page(&in_b),
            service.create_page(&in_c),
            service.create_page(&in_d),
        );

        let slugs: HashSet<String> = [a, b, c, d]
            .into_iter()
            .map(|r| r.unwrap().slug.into_inner())
            .collect();
        let expected: HashSet<String> = ["race", "race-2", "race-3", "race-4"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(slugs, expected);
    }

    #[tokio::test]
    async fn test_blank_required_field_creates_nothing() {
        let pool = test_support::pool().await;
        let service = LandingPageService::new(&pool);

        let err = service.create_page(&input("   ")).await.unwrap_err();
        assert!(matches!(err, PageServiceError::Validation(ref msg) if msg.contains("title")));
        assert!(service.list_pages().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_page_not_found() {
        let pool = test_support::pool().await;
        let err = LandingPageService::new(&pool)
            .get_page("nope")
            .await
            .unwrap_err();
        assert!(matches!(err, PageServiceError::NotFound(ref slug) if slug == "nope"));
    }

    #[tokio::test]
    async fn test_signup_counts_in_listing() {
        let pool = test_support::pool().await;
        let service = LandingPageService::new(&pool);
        let page = service.create_page(&input("Counted")).await.unwrap();
        let quiet = service.create_page(&input("Quiet")).await.unwrap();

        for email in ["a@example.com", "b@example.com", "a@example.com"] {
            service.submit_signup(page.slug.as_str(), email).await.unwrap();
        }

        let list = service.list_pages().await.unwrap();
        let counted = list.iter().find(|s| s.page.id == page.id).unwrap();
        assert_eq!(counted.signup_count, 3);
        assert_eq!(service.signup_count(&page).await.unwrap(), 3);
        assert_eq!(service.signup_count(&quiet).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_list_signups_oldest_first() {
        let pool = test_support::pool().await;
        let service = LandingPageService::new(&pool);
        service.create_page(&input("Listed")).await.unwrap();
        service.create_page(&input("Other")).await.unwrap();
        service.submit_signup("listed", "first@example.com").await.unwrap();
        service.submit_signup("other", "elsewhere@example.com").await.unwrap();
        service.submit_signup("listed", "second@example.com").await.unwrap();

        let (page, signups) = service.list_signups("listed").await.unwrap();
        assert_eq!(page.slug.as_str(), "listed");
        let emails: Vec<&str> = signups.iter().map(|s| s.email.as_str()).collect();
        assert_eq!(emails, vec!["first@example.com", "second@example.com"]);

        let err = service.list_signups("missing").await.unwrap_err();
        assert!(matches!(err, PageServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_signup_email_is_trimmed() {
        let pool = test_support::pool().await;
        let service = LandingPageService::new(&pool);
        service.create_page(&input("Trim")).await.unwrap();

        let signup = service
            .submit_signup("trim", "  someone@example.com \n")
            .await
            .unwrap();
        assert_eq!(signup.email.as_str(), "someone@example.com");
    }

    #[tokio::test]
    async fn test_signup_blank_email_is_validation_error() {
        let pool = test_support::pool().await;
        let service = LandingPageService::new(&pool);
        let page = service.create_page(&input("Blank")).await.unwrap();

        let err = service.submit_signup("blank", "   ").await.unwrap_err();
        assert!(matches!(err, PageServiceError::Validation(_)));
        assert_eq!(service.signup_count(&page).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_signup_unknown_slug_is_not_found() {
        let pool = test_support::pool().await;
        let service = LandingPageService::new(&pool);

        let err = service
            .submit_signup("missing", "x@example.com")
            .await
            .unwrap_err();
        assert!(matches!(err, PageServiceError::NotFound(_)));

        // Not-found wins over a blank email
        let err = service.submit_signup("missing", "").await.unwrap_err();
        assert!(matches!(err, PageServiceError::NotFound(_)));

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM email_signups")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(total, 0);
    }
}
