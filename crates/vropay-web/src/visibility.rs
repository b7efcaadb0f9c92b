// Which section content is revealed, decided from viewport intersection.
// Pure (no web-sys) so host tests can include it.

use vropay_core::SectionId;

/// Section named by a `data-section` attribute value.
pub fn section_from_attr(value: &str) -> Option<SectionId> {
    value.trim().parse::<usize>().ok().and_then(SectionId::from_index)
}

/// New reveal state for `section` when its intersection with the viewport
/// changes; `None` leaves it as it is.
///
/// The hero is revealed once on load and stays revealed. Every other section
/// shows while any part of it is on screen and hides again when it leaves, so
/// its stagger replays on the next visit.
#[inline]
pub fn reveal_change(section: SectionId, intersecting: bool) -> Option<bool> {
    match (section, intersecting) {
        (SectionId::Hero, false) => None,
        (_, shown) => Some(shown),
    }
}
