//! Launchkit CLI - Database migrations, calculators, and reports.
//!
//! # Usage
//!
//! ```bash
//! # Apply database migrations
//! lk-cli migrate
//!
//! # Generate business ideas
//! lk-cli ideas --industry fitness --audience "busy parents" --skills coaching
//!
//! # Calculate price tiers
//! lk-cli pricing --target-mrr 1000 --conversion-rate 2 --monthly-visitors 10000
//!
//! # List landing pages with signup counts
//! lk-cli pages
//!
//! # Export the signups collected by one page
//! lk-cli signups my-product
//! ```
//!
//! Every command except `migrate` accepts `--json` for machine-readable
//! output. `pages` and `signups` only read an existing database; run
//! `migrate` first.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use launchkit_core::PricingInput;

mod commands;

#[derive(Parser)]
#[command(name = "lk-cli")]
#[command(author, version, about = "Launchkit CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply database migrations to `DATABASE_URL`
    Migrate,
    /// Generate business idea suggestions
    Ideas {
        /// Industry or niche (e.g. "fitness")
        #[arg(short, long, default_value = "")]
        industry: String,

        /// Target audience (e.g. "busy parents")
        #[arg(short, long, default_value = "")]
        audience: String,

        /// Your skills (e.g. "coaching")
        #[arg(short, long, default_value = "")]
        skills: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Calculate suggested price tiers
    Pricing {
        /// Monthly revenue target
        #[arg(long, allow_hyphen_values = true)]
        target_mrr: String,

        /// Visitor-to-buyer conversion rate, in percent
        #[arg(long, allow_hyphen_values = true)]
        conversion_rate: String,

        /// Expected monthly visitors
        #[arg(long, allow_hyphen_values = true)]
        monthly_visitors: String,

        /// Cost to deliver one unit
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        cost_per_unit: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List landing pages with their signup counts
    Pages {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List the email signups collected by a landing page
    Signups {
        /// Slug of the landing page
        slug: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Ideas {
            industry,
            audience,
            skills,
            json,
        } => commands::ideas::run(&industry, &audience, &skills, json)?,
        Commands::Pricing {
            target_mrr,
            conversion_rate,
            monthly_visitors,
            cost_per_unit,
            json,
        } => commands::pricing::run(
            &PricingInput {
                target_mrr: &target_mrr,
                conversion_rate: &conversion_rate,
                monthly_visitors: &monthly_visitors,
                cost_per_unit: &cost_per_unit,
            },
            json,
        )?,
        Commands::Pages { json } => commands::pages::run(json).await?,
        Commands::Signups { slug, json } => commands::signups::run(&slug, json).await?,
    }
    Ok(())
}
