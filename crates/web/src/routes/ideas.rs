//! Idea generator route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::Form;
use serde::Deserialize;
use tracing::instrument;

use launchkit_core::{IdeaRequest, IdeaSuggestion, generate_ideas};

/// Form input for the idea generator. Missing fields are blank.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct IdeasFormInput {
    pub industry: String,
    pub audience: String,
    pub skills: String,
}

/// Idea generator template.
#[derive(Template, WebTemplate)]
#[template(path = "ideas.html")]
pub struct IdeasTemplate {
    pub form: IdeasFormInput,
    pub ideas: Vec<IdeaSuggestion>,
}

/// Display the empty idea generator form.
pub async fn show() -> IdeasTemplate {
    IdeasTemplate {
        form: IdeasFormInput::default(),
        ideas: Vec::new(),
    }
}

/// Generate suggestions from the submitted keywords.
#[instrument(skip_all)]
pub async fn generate(Form(form): Form<IdeasFormInput>) -> IdeasTemplate {
    let ideas = generate_ideas(&IdeaRequest {
        industry: &form.industry,
        audience: &form.audience,
        skills: &form.skills,
    });
    tracing::debug!(count = ideas.len(), "Generated ideas");

    IdeasTemplate { form, ideas }
}
