//! Landing page repository for database operations.
//!
//! Queries are checked at runtime (`query_as` + `FromRow`), so building the
//! crate does not require a live database.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use launchkit_core::{LandingPageDraft, LandingPageId, Slug};

use super::RepositoryError;
use crate::models::{LandingPage, LandingPageSummary};

const PAGE_COLUMNS: &str = "id, title, slug, hero_text, value_prop, cta_text, price, stripe_url, created_at";

#[derive(Debug, sqlx::FromRow)]
struct LandingPageRow {
    id: i64,
    title: String,
    slug: String,
    hero_text: String,
    value_prop: String,
    cta_text: String,
    price: Option<String>,
    stripe_url: Option<String>,
    created_at: DateTime<Utc>,
}

#[derive(Debug, sqlx::FromRow)]
struct LandingPageSummaryRow {
    #[sqlx(flatten)]
    page: LandingPageRow,
    signup_count: i64,
}

impl TryFrom<LandingPageRow> for LandingPage {
    type Error = RepositoryError;

    fn try_from(row: LandingPageRow) -> Result<Self, Self::Error> {
        let slug = Slug::parse(&row.slug).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid slug in database: {e}"))
        })?;

        Ok(Self {
            id: LandingPageId::new(row.id),
            title: row.title,
            slug,
            hero_text: row.hero_text,
            value_prop: row.value_prop,
            cta_text: row.cta_text,
            price: row.price,
            stripe_url: row.stripe_url,
            created_at: row.created_at,
        })
    }
}

/// Repository for landing page database operations.
pub struct LandingPageRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> LandingPageRepository<'a> {
    /// Create a new landing page repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a page under the given slug.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the slug is already taken.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(
        &self,
        draft: &LandingPageDraft,
        slug: &Slug,
    ) -> Result<LandingPage, RepositoryError> {
        let row = sqlx::query_as::<_, LandingPageRow>(&format!(
            r"
            INSERT INTO landing_pages
                (title, slug, hero_text, value_prop, cta_text, price, stripe_url, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            RETURNING {PAGE_COLUMNS}
            "
        ))
        .bind(&draft.title)
        .bind(slug.as_str())
        .bind(&draft.hero_text)
        .bind(&draft.value_prop)
        .bind(&draft.cta_text)
        .bind(draft.price.as_deref())
        .bind(draft.stripe_url.as_deref())
        .bind(Utc::now())
        .fetch_one(self.pool)
        .await
        .map_err(|e| RepositoryError::from_insert(e, "slug"))?;

        row.try_into()
    }

    /// Get a page by its slug.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored slug is invalid.
    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<LandingPage>, RepositoryError> {
        let row = sqlx::query_as::<_, LandingPageRow>(&format!(
            "SELECT {PAGE_COLUMNS} FROM landing_pages WHERE slug = ?1"
        ))
        .bind(slug)
        .fetch_optional(self.pool)
        .await?;

        row.map(LandingPage::try_from).transpose()
    }

    /// Get every stored slug that is `base` or `base-<anything>`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn slugs_with_base(&self, base: &Slug) -> Result<Vec<String>, RepositoryError> {
        // Slugs only contain [a-z0-9-], so the base needs no LIKE escaping.
        let slugs = sqlx::query_scalar::<_, String>(
            "SELECT slug FROM landing_pages WHERE slug = ?1 OR slug LIKE ?2",
        )
        .bind(base.as_str())
        .bind(format!("{base}-%"))
        .fetch_all(self.pool)
        .await?;

        Ok(slugs)
    }

    /// List all pages, newest first, each with its current signup count.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a stored slug is invalid.
    pub async fn list_with_signup_counts(&self) -> Result<Vec<LandingPageSummary>, RepositoryError> {
        let rows = sqlx::query_as::<_, LandingPageSummaryRow>(
            r"
            SELECT p.id AS id, p.title AS title, p.slug AS slug,
                   p.hero_text AS hero_text, p.value_prop AS value_prop,
                   p.cta_text AS cta_text, p.price AS price,
                   p.stripe_url AS stripe_url, p.created_at AS created_at,
                   COUNT(s.id) AS signup_count
            FROM landing_pages p
            LEFT JOIN email_signups s ON s.landing_page_id = p.id
            GROUP BY p.id
            ORDER BY p.created_at DESC, p.id DESC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        rows.into_iter()
            .map(|row| -> Result<LandingPageSummary, RepositoryError> {
                Ok(LandingPageSummary {
                    page: row.page.try_into()?,
                    signup_count: row.signup_count,
                })
            })
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use launchkit_core::LandingPageInput;

    use super::*;
    use crate::db::test_support;

    fn draft(title: &str) -> LandingPageDraft {
        LandingPageDraft::parse(&LandingPageInput {
            title,
            hero_text: "Hero",
            value_prop: "Value",
            cta_text: "Go",
            price: "$9",
            stripe_url: "",
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_create_and_get_by_slug() {
        let pool = test_support::pool().await;
        let repo = LandingPageRepository::new(&pool);

        let created = repo
            .create(&draft("Hello"), &Slug::parse("hello").unwrap())
            .await
            .unwrap();
        assert_eq!(created.slug.as_str(), "hello");
        assert_eq!(created.price.as_deref(), Some("$9"));
        assert_eq!(created.stripe_url, None);

        let fetched = repo.get_by_slug("hello").await.unwrap().unwrap();
        assert_eq!(fetched, created);
        assert!(repo.get_by_slug("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_slug_is_conflict() {
        let pool = test_support::pool().await;
        let repo = LandingPageRepository::new(&pool);
        let slug = Slug::parse("dup").unwrap();

        repo.create(&draft("Dup"), &slug).await.unwrap();
        let err = repo.create(&draft("Dup"), &slug).await.unwrap_err();

        assert!(matches!(err, RepositoryError::Conflict(_)));
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM landing_pages")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(total, 1);
    }

    #[tokio::test]
    async fn test_slugs_with_base() {
        let pool = test_support::pool().await;
        let repo = LandingPageRepository::new(&pool);
        for slug in ["deal", "deal-2", "dealer", "deal-breaker", "ideal"] {
            repo.create(&draft("x"), &Slug::parse(slug).unwrap())
                .await
                .unwrap();
        }

        let mut slugs = repo
            .slugs_with_base(&Slug::parse("deal").unwrap())
            .await
            .unwrap();
        slugs.sort();
        assert_eq!(slugs, vec!["deal", "deal-2", "deal-breaker"]);
    }

    #[tokio::test]
    async fn test_list_is_newest_first_with_counts() {
        let pool = test_support::pool().await;
        let repo = LandingPageRepository::new(&pool);
        let first = repo
            .create(&draft("First"), &Slug::parse("first").unwrap())
            .await
            .unwrap();
        let second = repo
            .create(&draft("Second"), &Slug::parse("second").unwrap())
            .await
            .unwrap();

        sqlx::query("INSERT INTO email_signups (landing_page_id, email, created_at) VALUES (?1, 'a@b.c', ?2)")
            .bind(first.id.as_i64())
            .bind(Utc::now())
            .execute(&pool)
            .await
            .unwrap();

        let list = repo.list_with_signup_counts().await.unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].page.id, second.id);
        assert_eq!(list[0].signup_count, 0);
        assert_eq!(list[1].page.id, first.id);
        assert_eq!(list[1].signup_count, 1);
    }

    #[tokio::test]
    async fn test_corrupt_slug_is_reported() {
        let pool = test_support::pool().await;
        sqlx::query(
            "INSERT INTO landing_pages (title, slug, hero_text, value_prop, cta_text, created_at) VALUES ('t', 'Bad Slug', 'h', 'v', 'c', ?1)",
        )
        .bind(Utc::now())
        .execute(&pool)
        .await
        .unwrap();

        let err = LandingPageRepository::new(&pool)
            .get_by_slug("Bad Slug")
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::DataCorruption(_)));
    }
}
