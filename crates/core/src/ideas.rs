//! Business idea generator.
//!
//! Combines three keywords (industry, audience, skills) with a fixed list of
//! monetization patterns. The output is fully determined by the input.

use serde::Serialize;

/// A business model template used to synthesize suggestions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonetizationPattern {
    pub name: &'static str,
    pub monetization: &'static str,
}

/// Every suggestion list has exactly one entry per pattern, in this order.
pub const MONETIZATION_PATTERNS: [MonetizationPattern; 7] = [
    MonetizationPattern {
        name: "Paid newsletter",
        monetization: "Weekly deep-dives, benchmarks, and templates; upsell cohort courses",
    },
    MonetizationPattern {
        name: "Niche job board",
        monetization: "Charge companies per post; add subscriptions for candidates",
    },
    MonetizationPattern {
        name: "Directory/marketplace",
        monetization: "Listing fees + featured placements; take a % fee on transactions",
    },
    MonetizationPattern {
        name: "Micro-SaaS tool",
        monetization: "Subscription with 2-3 tiers; add onboarding service for $$$",
    },
    MonetizationPattern {
        name: "Template pack",
        monetization: "One-time purchase + extended license upsell; affiliate bundles",
    },
    MonetizationPattern {
        name: "Cohort course",
        monetization: "High-ticket with alumni community; offer corporate packages",
    },
    MonetizationPattern {
        name: "Automation service",
        monetization: "Done-for-you monthly retainer; productize common workflows",
    },
];

const DEFAULT_INDUSTRY: &str = "niche";
const DEFAULT_AUDIENCE: &str = "buyers";
const DEFAULT_SKILLS: &str = "skills";
const DEFAULT_DESCRIPTION_AUDIENCE: &str = "your niche";

/// Keywords describing the user's situation. Blank fields fall back to
/// placeholder words.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdeaRequest<'a> {
    pub industry: &'a str,
    pub audience: &'a str,
    pub skills: &'a str,
}

/// A single generated business idea.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdeaSuggestion {
    pub name: String,
    pub description: String,
    pub monetization: &'static str,
}

/// Generate one suggestion per [`MONETIZATION_PATTERNS`] entry.
#[must_use]
pub fn generate_ideas(request: &IdeaRequest<'_>) -> Vec<IdeaSuggestion> {
    let industry = request.industry.trim();
    let audience = request.audience.trim();
    let skills = request.skills.trim();

    let industry_title = title_case(or_default(industry, DEFAULT_INDUSTRY));
    let audience_title = title_case(or_default(audience, DEFAULT_AUDIENCE));
    let description = format!(
        "Leverage {} to deliver outcomes for {}",
        or_default(skills, DEFAULT_SKILLS),
        or_default(audience, DEFAULT_DESCRIPTION_AUDIENCE),
    );

    MONETIZATION_PATTERNS
        .iter()
        .map(|pattern| IdeaSuggestion {
            name: format!("{industry_title} {} for {audience_title}", pattern.name),
            description: description.clone(),
            monetization: pattern.monetization,
        })
        .collect()
}

const fn or_default<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.is_empty() { default } else { value }
}

/// Uppercase the first letter of each alphabetic run and lowercase the rest.
///
/// `"e-commerce"` becomes `"E-Commerce"` and `"3d printing"` becomes
/// `"3D Printing"`.
#[must_use]
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

#[cfg(test)]
#[allow(clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_one_suggestion_per_pattern() {
        let ideas = generate_ideas(&IdeaRequest::default());
        assert_eq!(ideas.len(), MONETIZATION_PATTERNS.len());
        for (idea, pattern) in ideas.iter().zip(MONETIZATION_PATTERNS.iter()) {
            assert!(idea.name.contains(pattern.name));
            assert_eq!(idea.monetization, pattern.monetization);
        }
    }

    #[test]
    fn test_defaults_for_blank_input() {
        let ideas = generate_ideas(&IdeaRequest {
            industry: "  ",
            audience: "",
            skills: "",
        });
        assert_eq!(ideas[0].name, "Niche Paid newsletter for Buyers");
        assert_eq!(
            ideas[0].description,
            "Leverage skills to deliver outcomes for your niche"
        );
    }

    #[test]
    fn test_keywords_are_interpolated() {
        let ideas = generate_ideas(&IdeaRequest {
            industry: "fitness",
            audience: "busy PARENTS",
            skills: "video editing",
        });
        assert_eq!(ideas[3].name, "Fitness Micro-SaaS tool for Busy Parents");
        // Description keeps the raw audience, not the title-cased one
        assert_eq!(
            ideas[3].description,
            "Leverage video editing to deliver outcomes for busy PARENTS"
        );
    }

    #[test]
    fn test_deterministic() {
        let request = IdeaRequest {
            industry: "pets",
            audience: "dog owners",
            skills: "copywriting",
        };
        assert_eq!(generate_ideas(&request), generate_ideas(&request));
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("hello world"), "Hello World");
        assert_eq!(title_case("e-commerce"), "E-Commerce");
        assert_eq!(title_case("3d printing"), "3D Printing");
        assert_eq!(title_case("SaaS"), "Saas");
        assert_eq!(title_case(""), "");
    }
}
