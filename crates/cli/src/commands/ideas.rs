//! Idea generator command.

use launchkit_core::{IdeaRequest, IdeaSuggestion, generate_ideas};

/// Print one suggestion per monetization pattern.
///
/// # Errors
///
/// Returns `serde_json::Error` if JSON output cannot be serialized.
pub fn run(industry: &str, audience: &str, skills: &str, json: bool) -> Result<(), serde_json::Error> {
    let ideas = generate_ideas(&IdeaRequest {
        industry,
        audience,
        skills,
    });

    let out = if json {
        serde_json::to_string_pretty(&ideas)? + "\n"
    } else {
        render(&ideas)
    };

    #[allow(clippy::print_stdout)]
    {
        print!("{out}");
    }
    Ok(())
}

fn render(ideas: &[IdeaSuggestion]) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    for (n, idea) in ideas.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", n + 1, idea.name);
        let _ = writeln!(out, "   {}", idea.description);
        let _ = writeln!(out, "   Monetization: {}", idea.monetization);
    }
    out
}
