//! Landing page report command.
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` - SQLite connection string (default: `sqlite://app.db`)

use launchkit_web::models::LandingPageSummary;
use launchkit_web::services::LandingPageService;

/// Print every landing page with its signup count, newest first.
///
/// # Errors
///
/// Returns an error if the database does not exist or cannot be queried.
pub async fn run(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let pool = super::open_database().await?;

    let pages = LandingPageService::new(&pool).list_pages().await?;

    let out = if json {
        serde_json::to_string_pretty(&pages)? + "\n"
    } else {
        render(&pages)
    };

    #[allow(clippy::print_stdout)]
    {
        print!("{out}");
    }
    Ok(())
}

fn render(pages: &[LandingPageSummary]) -> String {
    use std::fmt::Write;

    if pages.is_empty() {
        return "No landing pages yet.\n".to_string();
    }

    let mut out = String::new();
    for summary in pages {
        let _ = writeln!(
            out,
            "{:<32} {:>6} signups  {}",
            summary.page.slug.as_str(),
            summary.signup_count,
            summary.page.created_at.format("%Y-%m-%d")
        );
    }
    out
}
