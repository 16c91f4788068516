//! Pricing calculator route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, http::StatusCode};
use serde::Deserialize;
use tracing::instrument;

use launchkit_core::{PricingInput, PricingQuote, pricing};

/// Message shown when any field is not a number.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input. Please enter numeric values.";

/// Form input for the pricing calculator. Missing fields are blank.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PricingFormInput {
    pub target_mrr: String,
    pub conversion_rate: String,
    pub monthly_visitors: String,
    pub cost_per_unit: String,
}

/// Pricing calculator template.
#[derive(Template, WebTemplate)]
#[template(path = "pricing.html")]
pub struct PricingTemplate {
    pub form: PricingFormInput,
    pub quote: Option<PricingQuote>,
    pub error: Option<String>,
}

/// Display the empty calculator form.
pub async fn show() -> PricingTemplate {
    PricingTemplate {
        form: PricingFormInput::default(),
        quote: None,
        error: None,
    }
}

/// Calculate price tiers.
///
/// Unparseable input re-renders the form with the submitted values and a
/// 422 status.
#[instrument(skip_all)]
pub async fn calculate(Form(form): Form<PricingFormInput>) -> (StatusCode, PricingTemplate) {
    let result = pricing::calculate(&PricingInput {
        target_mrr: &form.target_mrr,
        conversion_rate: &form.conversion_rate,
        monthly_visitors: &form.monthly_visitors,
        cost_per_unit: &form.cost_per_unit,
    });

    match result {
        Ok(quote) => (
            StatusCode::OK,
            PricingTemplate {
                form,
                quote: Some(quote),
                error: None,
            },
        ),
        Err(e) => {
            tracing::debug!("Rejected pricing input: {e}");
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                PricingTemplate {
                    form,
                    quote: None,
                    error: Some(INVALID_INPUT_MESSAGE.to_string()),
                },
            )
        }
    }
}
