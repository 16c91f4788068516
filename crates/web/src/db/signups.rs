//! Email signup repository.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use launchkit_core::{Email, EmailSignupId, LandingPageId};

use super::RepositoryError;
use crate::models::EmailSignup;

#[derive(Debug, sqlx::FromRow)]
struct EmailSignupRow {
    id: i64,
    landing_page_id: i64,
    email: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<EmailSignupRow> for EmailSignup {
    type Error = RepositoryError;

    fn try_from(row: EmailSignupRow) -> Result<Self, Self::Error> {
        let email = Email::parse(&row.email).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
        })?;

        Ok(Self {
            id: EmailSignupId::new(row.id),
            landing_page_id: LandingPageId::new(row.landing_page_id),
            email,
            created_at: row.created_at,
        })
    }
}

/// Repository for email signup database operations.
pub struct SignupRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> SignupRepository<'a> {
    /// Create a new signup repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Record a signup for a page.
    ///
    /// Duplicate addresses are stored as separate rows.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the page does not exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(
        &self,
        landing_page_id: LandingPageId,
        email: &Email,
    ) -> Result<EmailSignup, RepositoryError> {
        let row = sqlx::query_as::<_, EmailSignupRow>(
            r"
            INSERT INTO email_signups (landing_page_id, email, created_at)
            VALUES (?1, ?2, ?3)
            RETURNING id, landing_page_id, email, created_at
            ",
        )
        .bind(landing_page_id.as_i64())
        .bind(email.as_str())
        .bind(Utc::now())
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_foreign_key_violation()
            {
                return RepositoryError::NotFound;
            }
            RepositoryError::Database(e)
        })?;

        row.try_into()
    }

    /// Count the signups collected by a page.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn count_for_page(&self, landing_page_id: LandingPageId) -> Result<i64, RepositoryError> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM email_signups WHERE landing_page_id = ?1",
        )
        .bind(landing_page_id.as_i64())
        .fetch_one(self.pool)
        .await?;
        Ok(count)
    }

    /// List a page's signups, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a stored email is blank.
    pub async fn list_for_page(
        &self,
        landing_page_id: LandingPageId,
    ) -> Result<Vec<EmailSignup>, RepositoryError> {
        let rows = sqlx::query_as::<_, EmailSignupRow>(
            r"
            SELECT id, landing_page_id, email, created_at
            FROM email_signups
            WHERE landing_page_id = ?1
            ORDER BY id
            ",
        )
        .bind(landing_page_id.as_i64())
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(EmailSignup::try_from).collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use launchkit_core::{LandingPageDraft, LandingPageInput, Slug};

    use super::*;
    use crate::db::{LandingPageRepository, test_support};

    async fn page(pool: &SqlitePool, slug: &str) -> LandingPageId {
        let draft = LandingPageDraft::parse(&LandingPageInput {
            title: "T",
            hero_text: "H",
            value_prop: "V",
            cta_text: "C",
            ..Default::default()
        })
        .unwrap();
        LandingPageRepository::new(pool)
            .create(&draft, &Slug::parse(slug).unwrap())
            .await
            .unwrap()
            .id
    }

    #[tokio::test]
    async fn test_create_and_count() {
        let pool = test_support::pool().await;
        let page_id = page(&pool, "p").await;
        let repo = SignupRepository::new(&pool);
        let email = Email::parse("a@example.com").unwrap();

        let signup = repo.create(page_id, &email).await.unwrap();
        assert_eq!(signup.landing_page_id, page_id);
        assert_eq!(signup.email, email);

        // Duplicates are allowed
        repo.create(page_id, &email).await.unwrap();
        assert_eq!(repo.count_for_page(page_id).await.unwrap(), 2);

        let listed = repo.list_for_page(page_id).await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0], signup);
    }

    #[tokio::test]
    async fn test_counts_are_per_page() {
        let pool = test_support::pool().await;
        let a = page(&pool, "a").await;
        let b = page(&pool, "b").await;
        let repo = SignupRepository::new(&pool);
        let email = Email::parse("x@example.com").unwrap();

        repo.create(a, &email).await.unwrap();
        assert_eq!(repo.count_for_page(a).await.unwrap(), 1);
        assert_eq!(repo.count_for_page(b).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_unknown_page_is_not_found() {
        let pool = test_support::pool().await;
        let err = SignupRepository::new(&pool)
            .create(LandingPageId::new(999), &Email::parse("x@y.z").unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound));
    }

    #[tokio::test]
    async fn test_deleting_page_cascades() {
        let pool = test_support::pool().await;
        let page_id = page(&pool, "gone").await;
        let repo = SignupRepository::new(&pool);
        repo.create(page_id, &Email::parse("x@y.z").unwrap())
            .await
            .unwrap();

        sqlx::query("DELETE FROM landing_pages WHERE id = ?1")
            .bind(page_id.as_i64())
            .execute(&pool)
            .await
            .unwrap();

        assert_eq!(repo.count_for_page(page_id).await.unwrap(), 0);
    }
}
