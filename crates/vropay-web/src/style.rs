// Pure string helpers for generated markup. No web-sys here so the host tests
// can include this file directly.

/// Letters of `text` as separate spans' contents; spaces become NBSP so they
/// keep their width inside inline-block spans.
pub fn split_letters(text: &str) -> Vec<String> {
    text.chars()
        .map(|c| {
            if c == ' ' {
                '\u{00A0}'.to_string()
            } else {
                c.to_string()
            }
        })
        .collect()
}

/// Inline style for the `index`-th item of a staggered reveal.
pub fn stagger_style(
    index: usize,
    stagger_sec: f32,
    base_delay_sec: f32,
    duration_sec: f32,
) -> String {
    let delay = base_delay_sec + index as f32 * stagger_sec;
    format!("transition-delay:{delay:.2}s;transition-duration:{duration_sec:.2}s")
}

/// Width style of the progress bar for global progress `g`.
pub fn progress_width(g: f32) -> String {
    let pct = if g.is_nan() { 0.0 } else { g.clamp(0.0, 1.0) * 100.0 };
    format!("width:{pct:.2}%")
}

/// Value of `theme` in a location search string such as `?a=1&theme=midnight`.
pub fn theme_from_query(search: &str) -> Option<&str> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| *k == "theme")
        .map(|(_, v)| v)
        .filter(|v| !v.is_empty())
}

/// `#rrggbb` CSS colour from sRGB floats.
pub fn css_hex(rgb: [f32; 3]) -> String {
    let c = |x: f32| (x.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!("#{:02x}{:02x}{:02x}", c(rgb[0]), c(rgb[1]), c(rgb[2]))
}
