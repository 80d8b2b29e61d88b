//! Marker popup and tooltip content

use crate::app::models::ContactRecord;
use crate::app::services::dxcc::lookup_country;
use crate::constants::{LOOKUP_LINKS, POPUP_FIELDS, fields};

/// Placeholder used when a record has no callsign
const NO_CALL: &str = "QSO";

/// Escape text for use in HTML content and single- or double-quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Hover text for a marker, escaped
pub fn tooltip(record: &ContactRecord) -> String {
    escape_html(record.call().unwrap_or(NO_CALL))
}

/// Popup HTML for a marker
///
/// Lists the popup fields in fixed order, skipping empty ones, then a
/// best-effort country when the log has none, then callsign lookup links.
/// Every value taken from the log is escaped.
pub fn format_popup(record: &ContactRecord) -> String {
    let mut lines: Vec<String> = POPUP_FIELDS
        .iter()
        .filter_map(|&key| {
            record
                .get(key)
                .map(|value| format!("<b>{}</b>: {}", key, escape_html(value)))
        })
        .collect();

    if record.get(fields::COUNTRY).is_none() {
        if let Some(country) = record.call().and_then(lookup_country) {
            lines.push(format!("<b>Country (prefix)</b>: {}", escape_html(country)));
        }
    }

    let body = if lines.is_empty() {
        "<i>No details</i>".to_string()
    } else {
        lines.join("<br>")
    };

    format!("{}{}", body, lookup_links(record.call().unwrap_or(NO_CALL)))
}

fn lookup_links(call: &str) -> String {
    let call = escape_html(call);
    let anchors: Vec<String> = LOOKUP_LINKS
        .iter()
        .map(|(label, base)| {
            format!(
                "<a href='{}{}' target='_blank' rel='noopener'>{}</a>",
                base, call, label
            )
        })
        .collect();

    format!("<div style='margin-top:6px'>{}</div>", anchors.join(" · "))
}
