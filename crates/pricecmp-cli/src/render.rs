//! Terminal rendering of ranked offers.

use pricecmp_core::{format_display_price, CanonicalOffer};
use serde::Serialize;

const CHEAPEST_BADGE: &str = "Cheapest";
const TITLE_WIDTH: usize = 50;

#[derive(Debug, Serialize)]
struct SearchOutput<'a> {
    cheapest_id: Option<&'a str>,
    offers: &'a [CanonicalOffer],
}

/// Render offers as a fixed-width table, badging the row whose id matches
/// `cheapest_id`.
pub(crate) fn render_table(offers: &[CanonicalOffer], cheapest_id: Option<&str>) -> String {
    if offers.is_empty() {
        return "no offers found; try another product name or SKU\n".to_string();
    }

    let mut out = format!("Offers ({})\n", offers.len());
    out.push_str(&format!(
        "{:<10}{:<20}{:<10}{:<16}TITLE\n",
        "", "RETAILER", "PRICE", "SKU"
    ));
    for offer in offers {
        let badge = if Some(offer.id.as_str()) == cheapest_id {
            CHEAPEST_BADGE
        } else {
            ""
        };
        let title_display = if offer.title.chars().count() > TITLE_WIDTH {
            format!(
                "{}...",
                offer.title.chars().take(TITLE_WIDTH).collect::<String>()
            )
        } else {
            offer.title.clone()
        };
        out.push_str(&format!(
            "{:<10}{:<20}{:<10}{:<16}{}\n",
            badge,
            offer.retailer,
            format_display_price(offer.price.as_ref()),
            offer.sku.as_deref().unwrap_or("\u{2014}"),
            title_display
        ));
    }
    out
}

/// Render offers and the cheapest id as pretty-printed JSON.
pub(crate) fn render_json(
    offers: &[CanonicalOffer],
    cheapest_id: Option<&str>,
) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&SearchOutput {
        cheapest_id,
        offers,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn offer(id: &str, retailer: &str, price: Option<serde_json::Value>) -> CanonicalOffer {
        CanonicalOffer {
            id: id.to_owned(),
            title: format!("Offer {id}"),
            retailer: retailer.to_owned(),
            sku: None,
            price,
            raw: json!({}),
        }
    }

    #[test]
    fn empty_results_print_helper_line() {
        assert_eq!(
            render_table(&[], None),
            "no offers found; try another product name or SKU\n"
        );
    }

    #[test]
    fn table_badges_only_the_cheapest_row() {
        let offers = vec![
            offer("b", "Store B", Some(json!(2.0))),
            offer("a", "Store A", Some(json!("3.5"))),
            offer("c", "Store C", None),
        ];
        let table = render_table(&offers, Some("b"));
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[0], "Offers (3)");
        assert!(lines[2].starts_with("Cheapest  Store B"));
        assert!(lines[2].contains("$2.00"));
        assert!(!lines[3].contains(CHEAPEST_BADGE));
        assert!(lines[3].contains("$3.50"));
        assert!(lines[4].contains("No price"));
    }

    #[test]
    fn long_titles_are_truncated() {
        let mut long = offer("x", "Store", Some(json!(1)));
        long.title = "a".repeat(80);
        let table = render_table(&[long], None);
        assert!(table.contains(&format!("{}...", "a".repeat(TITLE_WIDTH))));
        assert!(!table.contains(&"a".repeat(TITLE_WIDTH + 1)));
    }

    #[test]
    fn json_output_keeps_raw_price() {
        let offers = vec![offer("a", "Store A", Some(json!("3.10")))];
        let rendered = render_json(&offers, Some("a")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["cheapest_id"], json!("a"));
        assert_eq!(value["offers"][0]["price"], json!("3.10"));
        assert_eq!(value["offers"][0]["sku"], serde_json::Value::Null);
    }
}
