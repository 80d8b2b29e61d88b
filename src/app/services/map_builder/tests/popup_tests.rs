//! Tests for popup and tooltip content

use super::super::popup::{escape_html, format_popup, tooltip};
use super::create_point;

#[test]
fn test_popup_fields_in_display_order() {
    let point = create_point(
        0,
        0.0,
        0.0,
        &[
            ("MODE", "CW"),
            ("CALL", "DL1ABC"),
            ("COMMENT", "not shown"),
            ("BAND", "20m"),
            ("COUNTRY", "Fed. Rep. of Germany"),
        ],
    );
    let popup = format_popup(&point.record);

    assert!(popup.starts_with(
        "<b>CALL</b>: DL1ABC<br><b>BAND</b>: 20m<br><b>MODE</b>: CW<br><b>COUNTRY</b>: Fed. Rep. of Germany"
    ));
    assert!(!popup.contains("COMMENT"));
    assert!(!popup.contains("Country (prefix)"));
}

#[test]
fn test_popup_lookup_links() {
    let point = create_point(0, 0.0, 0.0, &[("CALL", "K1ABC")]);
    let popup = format_popup(&point.record);

    assert!(popup.contains("<a href='https://www.qrz.com/lookup/K1ABC' target='_blank' rel='noopener'>QRZ</a>"));
    assert!(popup.contains("<a href='https://clublog.org/logsearch/K1ABC' target='_blank' rel='noopener'>Club Log</a>"));
}

#[test]
fn test_popup_prefix_country_when_missing() {
    let point = create_point(0, 0.0, 0.0, &[("CALL", "G4ABC")]);
    let popup = format_popup(&point.record);

    assert!(popup.contains("<b>Country (prefix)</b>: England"));
}

#[test]
fn test_popup_without_details() {
    let point = create_point(0, 0.0, 0.0, &[("COMMENT", "hello")]);
    let popup = format_popup(&point.record);

    assert!(popup.starts_with("<i>No details</i>"));
    assert!(popup.contains("https://www.qrz.com/lookup/QSO"));
    assert_eq!(tooltip(&point.record), "QSO");
}

#[test]
fn test_popup_escapes_log_values() {
    let point = create_point(
        0,
        0.0,
        0.0,
        &[("CALL", "<b>X</b>"), ("COUNTRY", "A & B's \"land\"")],
    );
    let popup = format_popup(&point.record);

    assert!(popup.contains("<b>CALL</b>: &lt;b&gt;X&lt;/b&gt;"));
    assert!(popup.contains("A &amp; B&#x27;s &quot;land&quot;"));
    assert!(!popup.contains("<b>X</b>"));
    assert_eq!(tooltip(&point.record), "&lt;b&gt;X&lt;/b&gt;");
}

#[test]
fn test_escape_html() {
    assert_eq!(escape_html("plain"), "plain");
    assert_eq!(escape_html("<&>"), "&lt;&amp;&gt;");
    assert_eq!(escape_html("Zürich"), "Zürich");
}
