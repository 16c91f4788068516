//! Pricing calculator command.

use launchkit_core::pricing::{self, PricingInput, PricingQuote};

/// Print the suggested price tiers.
///
/// # Errors
///
/// Returns an error if any argument is not a number or JSON output fails.
pub fn run(input: &PricingInput<'_>, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let quote = pricing::calculate(input)?;

    let out = if json {
        serde_json::to_string_pretty(&quote)? + "\n"
    } else {
        render(&quote)
    };

    #[allow(clippy::print_stdout)]
    {
        print!("{out}");
    }
    Ok(())
}

fn render(quote: &PricingQuote) -> String {
    format!(
        "Buyers per month: {}\nDiscount:  {}\nSuggested: {}\nPremium:   {}\n",
        quote.buyers_per_month, quote.price_low, quote.price_mid, quote.price_high
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn reference() -> PricingInput<'static> {
        PricingInput {
            target_mrr: "1000",
            conversion_rate: "2",
            monthly_visitors: "10000",
            cost_per_unit: "0",
        }
    }

    #[test]
    fn test_render_quote() {
        let quote = pricing::calculate(&reference()).unwrap();

        assert_eq!(
            render(&quote),
            "Buyers per month: 200\nDiscount:  4.00\nSuggested: 5.00\nPremium:   7.50\n"
        );
    }

    #[test]
    fn test_json_keeps_cents() {
        let quote = pricing::calculate(&reference()).unwrap();
        let value = serde_json::to_value(quote).unwrap();

        assert_eq!(value["buyers_per_month"], 200);
        assert_eq!(value["price_high"], "7.50");
    }

    #[test]
    fn test_invalid_argument_is_error() {
        let input = PricingInput {
            target_mrr: "lots",
            ..reference()
        };
        assert!(run(&input, false).is_err());
    }
}
