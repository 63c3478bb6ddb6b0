//! Result Renderer: pure functions from suggestions to HTML fragments.
//! Nothing in this module touches the network or the filesystem; writing
//! the output is the caller's job.

use crate::models::{display_date, CottageSuggestion};
use chrono::Utc;
use std::fmt::Write;

/// Shown when a suggestion's own image fails to load.
const PLACEHOLDER_IMAGE_URL: &str =
    "https://via.placeholder.com/400x220/3498db/ffffff?text=Cottage+Image";

/// Render the full results fragment: one card per suggestion in backend
/// order, or the no-results guidance block for an empty list.
pub fn render_results(suggestions: &[CottageSuggestion], booker_name: Option<&str>) -> String {
    // Display-only batch tag; all cards of one pass share the prefix.
    // Never used as a key or sent anywhere.
    let pass_millis = Utc::now().timestamp_millis();
    render_results_at(suggestions, booker_name, pass_millis)
}

fn render_results_at(
    suggestions: &[CottageSuggestion],
    booker_name: Option<&str>,
    pass_millis: i64,
) -> String {
    if suggestions.is_empty() {
        return no_results_block();
    }

    let mut html = String::new();
    for (index, suggestion) in suggestions.iter().enumerate() {
        let tag = format!("BK{}-{}", pass_millis, index + 1);
        html.push_str(&render_card(suggestion, booker_name, &tag));
    }
    html
}

fn render_card(suggestion: &CottageSuggestion, booker_name: Option<&str>, tag: &str) -> String {
    let mut html = String::new();

    let _ = write!(
        html,
        r#"<div class="cottage-card">
<img src="{image}" alt="Cottage {id}" class="cottage-image" onerror="this.src='{placeholder}'">
<div class="cottage-info">
<h3>{address}</h3>
<div class="booking-number">Suggestion #{tag}</div>
"#,
        image = escape_html(&suggestion.image_url),
        id = escape_html(&suggestion.cottage_id),
        placeholder = PLACEHOLDER_IMAGE_URL,
        address = escape_html(&suggestion.address),
        tag = escape_html(tag),
    );

    if let Some(name) = booker_name {
        html.push_str(&info_item("Booker Name", &escape_html(name)));
    }

    html.push_str(&info_item("Cottage ID", &escape_html(&suggestion.cottage_id)));
    html.push_str(&info_item(
        "Capacity",
        &format!("{} people", suggestion.capacity),
    ));
    html.push_str(&info_item(
        "Bedrooms",
        &suggestion.number_of_bedrooms.to_string(),
    ));
    html.push_str(&info_item(
        "Distance to Lake",
        &format!("{} meters", suggestion.distance_to_lake),
    ));
    html.push_str(&info_item("Nearest City", &escape_html(&suggestion.city_name)));
    html.push_str(&info_item(
        "Distance to City",
        &format!("{} meters", suggestion.distance_to_city),
    ));
    html.push_str(&info_item("Check-in Date", &display_date(suggestion.start_date)));
    html.push_str(&info_item("Check-out Date", &display_date(suggestion.end_date)));
    html.push_str(&info_item(
        "Duration",
        &format!("{} nights", suggestion.nights()),
    ));

    html.push_str("</div>\n</div>\n");
    html
}

fn info_item(label: &str, value: &str) -> String {
    format!(
        "<div class=\"info-item\"><span class=\"info-label\">{}:</span> <span class=\"info-value\">{}</span></div>\n",
        label, value
    )
}

/// Guidance shown for an empty result set. Not an error.
fn no_results_block() -> String {
    r#"<div class="no-results">
<h3>No cottages found</h3>
<p>No cottages match your search criteria. Try adjusting your filters:</p>
<ul>
<li>Increase the maximum distance to lake or city</li>
<li>Reduce the number of required bedrooms</li>
<li>Increase date flexibility</li>
<li>Try different dates</li>
</ul>
</div>
"#
    .to_string()
}

/// Inline error panel naming the configured endpoint.
pub fn render_error(endpoint: &str, detail: &str) -> String {
    format!(
        r#"<div class="error-message">
<strong>Error:</strong> Unable to connect to the server. Please make sure the backend is running on {}.
<br><br>
Error details: {}
</div>
"#,
        escape_html(endpoint),
        escape_html(detail)
    )
}

/// Wrap a fragment into a standalone page so the output file opens in a
/// browser as-is. Keeps the `results` anchor from the original page.
pub fn render_page(fragment: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Cottage Search Results</title>
<style>
body {{ font-family: sans-serif; max-width: 720px; margin: 0 auto; padding: 16px; }}
.cottage-card {{ border: 1px solid #ddd; border-radius: 8px; margin-bottom: 24px; overflow: hidden; }}
.cottage-image {{ width: 100%; height: 220px; object-fit: cover; }}
.cottage-info {{ padding: 16px; }}
.booking-number {{ color: #2980b9; font-weight: bold; margin-bottom: 8px; }}
.info-item {{ margin: 4px 0; }}
.info-label {{ font-weight: bold; }}
.no-results {{ text-align: center; padding: 40px; color: #7f8c8d; }}
.error-message {{ background: #fdecea; border: 1px solid #e74c3c; padding: 16px; border-radius: 8px; }}
</style>
</head>
<body>
<section id="results">
{}</section>
</body>
</html>
"#,
        fragment
    )
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
