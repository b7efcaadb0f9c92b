// Host-side tests for markup string helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod style {
    include!("../src/style.rs");
}

use style::*;

#[test]
fn letters_keep_spaces_as_nbsp() {
    let letters = split_letters("Vro Pay");
    assert_eq!(letters.len(), 7);
    assert_eq!(letters[0], "V");
    assert_eq!(letters[3], "\u{00A0}");
    assert_eq!(letters.concat().replace('\u{00A0}', " "), "Vro Pay");
}

#[test]
fn empty_title_has_no_letters() {
    assert!(split_letters("").is_empty());
}

#[test]
fn stagger_delay_grows_with_index() {
    assert_eq!(
        stagger_style(0, 0.05, 0.0, 0.5),
        "transition-delay:0.00s;transition-duration:0.50s"
    );
    assert_eq!(
        stagger_style(4, 0.05, 0.0, 0.5),
        "transition-delay:0.20s;transition-duration:0.50s"
    );
    // Base delay offsets the whole group (callouts).
    assert_eq!(
        stagger_style(0, 0.1, 0.3, 0.8),
        "transition-delay:0.30s;transition-duration:0.80s"
    );
}

#[test]
fn progress_width_is_clamped_percent() {
    assert_eq!(progress_width(0.0), "width:0.00%");
    assert_eq!(progress_width(0.425), "width:42.50%");
    assert_eq!(progress_width(1.0), "width:100.00%");
    assert_eq!(progress_width(1.7), "width:100.00%");
    assert_eq!(progress_width(-0.2), "width:0.00%");
    assert_eq!(progress_width(f32::NAN), "width:0.00%");
}

#[test]
fn theme_query_parsing() {
    assert_eq!(theme_from_query("?theme=midnight"), Some("midnight"));
    assert_eq!(theme_from_query("?a=1&theme=daylight&b=2"), Some("daylight"));
    assert_eq!(theme_from_query("theme=midnight"), Some("midnight"));
    assert_eq!(theme_from_query("?theme="), None);
    assert_eq!(theme_from_query("?themes=midnight"), None);
    assert_eq!(theme_from_query(""), None);
}

#[test]
fn css_hex_rounds_and_clamps() {
    assert_eq!(css_hex([0.0, 0.0, 0.0]), "#000000");
    assert_eq!(css_hex([1.0, 1.0, 1.0]), "#ffffff");
    assert_eq!(css_hex([1.0, 0.5, 0.0]), "#ff8000");
    assert_eq!(css_hex([2.0, -1.0, 0.2]), "#ff0033");
}
