//! Landing page route handlers.
//!
//! Outcomes of form posts are carried across redirects as `notice` / `error`
//! query codes and rendered on the destination page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::instrument;

use launchkit_core::LandingPageInput;

use crate::error::AppError;
use crate::models::{LandingPage, LandingPageSummary};
use crate::services::{LandingPageService, PageServiceError};
use crate::state::AppState;

/// Message shown when a required page field is blank.
pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all required fields.";

/// Query codes set by redirects.
pub const NOTICE_CREATED: &str = "created";
pub const NOTICE_SUBSCRIBED: &str = "subscribed";
pub const ERROR_EMAIL_REQUIRED: &str = "email_required";

/// Form input for creating a landing page. Missing fields are blank.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct NewPageFormInput {
    pub title: String,
    pub hero_text: String,
    pub value_prop: String,
    pub cta_text: String,
    pub price: String,
    pub stripe_url: String,
}

impl NewPageFormInput {
    fn as_input(&self) -> LandingPageInput<'_> {
        LandingPageInput {
            title: &self.title,
            hero_text: &self.hero_text,
            value_prop: &self.value_prop,
            cta_text: &self.cta_text,
            price: &self.price,
            stripe_url: &self.stripe_url,
        }
    }
}

/// Form input for an email signup.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SignupFormInput {
    pub email: String,
}

/// Outcome codes carried in the query string.
#[derive(Debug, Default, Deserialize)]
pub struct FlashQuery {
    pub notice: Option<String>,
    pub error: Option<String>,
}

/// A one-off message rendered above the page content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashView {
    /// `success` or `error`, used as a CSS class.
    pub kind: &'static str,
    pub message: &'static str,
}

impl FlashQuery {
    /// Translate known codes into messages. Unknown codes are ignored.
    fn messages(&self) -> Vec<FlashView> {
        let notice = self.notice.as_deref().and_then(|code| match code {
            NOTICE_CREATED => Some("Landing page created!"),
            NOTICE_SUBSCRIBED => Some("Thanks! We will be in touch."),
            _ => None,
        });
        let error = self.error.as_deref().and_then(|code| match code {
            ERROR_EMAIL_REQUIRED => Some("Please provide an email."),
            _ => None,
        });

        notice
            .map(|message| FlashView {
                kind: "success",
                message,
            })
            .into_iter()
            .chain(error.map(|message| FlashView {
                kind: "error",
                message,
            }))
            .collect()
    }
}

/// Landing page view for templates.
#[derive(Debug, Clone)]
pub struct PageView {
    pub title: String,
    pub slug: String,
    pub hero_text: String,
    pub value_prop: String,
    pub cta_text: String,
    pub price: Option<String>,
    /// Checkout link, only when it is an http(s) URL.
    pub checkout_url: Option<String>,
    pub created_at: String,
}

impl From<&LandingPage> for PageView {
    fn from(page: &LandingPage) -> Self {
        Self {
            title: page.title.clone(),
            slug: page.slug.to_string(),
            hero_text: page.hero_text.clone(),
            value_prop: page.value_prop.clone(),
            cta_text: page.cta_text.clone(),
            price: page.price.clone(),
            checkout_url: page
                .stripe_url
                .as_deref()
                .filter(|url| is_web_url(url))
                .map(String::from),
            created_at: page.created_at.format("%Y-%m-%d %H:%M UTC").to_string(),
        }
    }
}

/// Row in the page list.
#[derive(Debug, Clone)]
pub struct PageSummaryView {
    pub page: PageView,
    pub signup_count: i64,
}

impl From<&LandingPageSummary> for PageSummaryView {
    fn from(summary: &LandingPageSummary) -> Self {
        Self {
            page: PageView::from(&summary.page),
            signup_count: summary.signup_count,
        }
    }
}

fn is_web_url(url: &str) -> bool {
    let lower = url.to_ascii_lowercase();
    lower.starts_with("https://") || lower.starts_with("http://")
}

/// Page list template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/index.html")]
pub struct PagesIndexTemplate {
    pub pages: Vec<PageSummaryView>,
}

/// Page creation form template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/new.html")]
pub struct NewPageTemplate {
    pub form: NewPageFormInput,
    pub error: Option<String>,
}

/// Public landing page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/show.html")]
pub struct ShowPageTemplate {
    pub page: PageView,
    pub signup_count: i64,
    pub flashes: Vec<FlashView>,
}

/// List all pages with their signup counts.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<PagesIndexTemplate, AppError> {
    let pages = LandingPageService::new(state.pool())
        .list_pages()
        .await?
        .iter()
        .map(PageSummaryView::from)
        .collect();

    Ok(PagesIndexTemplate { pages })
}

/// Display the empty creation form.
pub async fn new_form() -> NewPageTemplate {
    NewPageTemplate {
        form: NewPageFormInput::default(),
        error: None,
    }
}

/// Create a page and redirect to it.
///
/// A blank required field re-renders the form with the submitted values and
/// a 422 status.
#[instrument(skip(state, form))]
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<NewPageFormInput>,
) -> Result<Response, AppError> {
    let service = LandingPageService::new(state.pool());

    let result = service.create_page(&form.as_input()).await;
    match result {
        Ok(page) => Ok(Redirect::to(&format!("/p/{}?notice={NOTICE_CREATED}", page.slug))
            .into_response()),
        Err(PageServiceError::Validation(reason)) => {
            tracing::debug!("Rejected page submission: {reason}");
            Ok((
                StatusCode::UNPROCESSABLE_ENTITY,
                NewPageTemplate {
                    form,
                    error: Some(MISSING_FIELDS_MESSAGE.to_string()),
                },
            )
                .into_response())
        }
        Err(e) => Err(e.into()),
    }
}

/// Display a landing page with its signup count.
///
/// # Errors
///
/// Returns 404 if no page has this slug.
#[instrument(skip(state, flash))]
pub async fn show(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(flash): Query<FlashQuery>,
) -> Result<ShowPageTemplate, AppError> {
    let service = LandingPageService::new(state.pool());
    let page = service.get_page(&slug).await?;
    let signup_count = service.signup_count(&page).await?;

    Ok(ShowPageTemplate {
        page: PageView::from(&page),
        signup_count,
        flashes: flash.messages(),
    })
}

/// Record an email signup and redirect back to the page.
///
/// # Errors
///
/// Returns 404 if no page has this slug.
#[instrument(skip(state, form))]
pub async fn signup(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Form(form): Form<SignupFormInput>,
) -> Result<Redirect, AppError> {
    let service = LandingPageService::new(state.pool());

    match service.submit_signup(&slug, &form.email).await {
        Ok(_) => Ok(Redirect::to(&format!("/p/{slug}?notice={NOTICE_SUBSCRIBED}"))),
        Err(PageServiceError::Validation(_)) => Ok(Redirect::to(&format!(
            "/p/{slug}?error={ERROR_EMAIL_REQUIRED}"
        ))),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
#[allow(clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_flash_codes() {
        let flash = FlashQuery {
            notice: Some(NOTICE_CREATED.to_string()),
            error: None,
        };
        assert_eq!(
            flash.messages(),
            vec![FlashView {
                kind: "success",
                message: "Landing page created!",
            }]
        );

        let flash = FlashQuery {
            notice: None,
            error: Some(ERROR_EMAIL_REQUIRED.to_string()),
        };
        assert_eq!(flash.messages()[0].kind, "error");
    }

    #[test]
    fn test_unknown_flash_codes_are_ignored() {
        let flash = FlashQuery {
            notice: Some("<script>".to_string()),
            error: Some("nope".to_string()),
        };
        assert!(flash.messages().is_empty());
    }

    #[test]
    fn test_only_web_urls_become_checkout_links() {
        assert!(is_web_url("https://buy.stripe.com/abc"));
        assert!(is_web_url("HTTP://example.com"));
        assert!(!is_web_url("javascript:alert(1)"));
        assert!(!is_web_url("buy.stripe.com/abc"));
    }
}
