//! Signup export command.
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` - SQLite connection string (default: `sqlite://app.db`)

use launchkit_web::models::{EmailSignup, LandingPage};
use launchkit_web::services::LandingPageService;

/// Print the signups collected by one landing page, oldest first.
///
/// # Errors
///
/// Returns an error if the database does not exist, cannot be queried, or
/// has no page with this slug.
pub async fn run(slug: &str, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let pool = super::open_database().await?;

    let (page, signups) = LandingPageService::new(&pool).list_signups(slug).await?;

    let out = if json {
        serde_json::to_string_pretty(&serde_json::json!({
            "page": page,
            "signups": signups,
        }))? + "\n"
    } else {
        render(&page, &signups)
    };

    #[allow(clippy::print_stdout)]
    {
        print!("{out}");
    }
    Ok(())
}

fn render(page: &LandingPage, signups: &[EmailSignup]) -> String {
    use std::fmt::Write;

    let mut out = format!("{} ({} signups)\n", page.slug, signups.len());
    for signup in signups {
        let _ = writeln!(
            out,
            "{}  {}",
            signup.created_at.format("%Y-%m-%d %H:%M"),
            signup.email
        );
    }
    out
}
