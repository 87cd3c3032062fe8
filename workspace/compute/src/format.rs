//! Display helpers shared by the dashboard components.

use pulldown_cmark::{html, Event, Options, Parser};
use rust_decimal::Decimal;

/// Formats an amount as a dollar magnitude with two decimals, e.g. `$1500.00`.
pub fn format_currency(amount: Decimal) -> String {
    format!("${:.2}", amount.abs())
}

/// Table label for a raw category, `N/A` when absent.
pub fn category_label(category: Option<&str>) -> &str {
    match category {
        Some(label) if !label.is_empty() => label,
        _ => "N/A",
    }
}

/// CSS classes for a category badge: the label lowercased with whitespace removed.
pub fn badge_class(category: Option<&str>) -> String {
    let suffix = match category {
        Some(label) if !label.is_empty() => label
            .chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect(),
        _ => "uncategorized".to_string(),
    };
    format!("badge {}", suffix)
}

/// Renders chat markdown to HTML.
///
/// Tables, strikethrough and task lists are enabled. Raw HTML in the source is
/// escaped and shown as text.
pub fn render_markdown(text: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(text, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });

    let mut rendered = String::with_capacity(text.len() * 3 / 2);
    html::push_html(&mut rendered, parser);
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_drops_sign() {
        assert_eq!(format_currency(Decimal::new(-1500, 0)), "$1500.00");
        assert_eq!(format_currency(Decimal::new(425, 2)), "$4.25");
        assert_eq!(format_currency(Decimal::ZERO), "$0.00");
    }

    #[test]
    fn test_badge_class() {
        assert_eq!(badge_class(Some("Groceries")), "badge groceries");
        assert_eq!(badge_class(Some("Eating Out")), "badge eatingout");
        assert_eq!(badge_class(None), "badge uncategorized");
        assert_eq!(badge_class(Some("")), "badge uncategorized");
    }

    #[test]
    fn test_category_label() {
        assert_eq!(category_label(Some("Travel")), "Travel");
        assert_eq!(category_label(None), "N/A");
    }

    #[test]
    fn test_render_markdown_bold() {
        let html = render_markdown("Category: **Restaurants** (confidence: 0.87)");
        assert!(html.contains("<strong>Restaurants</strong>"));
        assert!(html.starts_with("<p>"));
    }

    #[test]
    fn test_render_markdown_escapes_raw_html() {
        let html = render_markdown("hello <script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_render_markdown_list() {
        let html = render_markdown("- rent\n- groceries\n");
        assert!(html.contains("<ul>"));
        assert!(html.contains("<li>rent</li>"));
    }
}
