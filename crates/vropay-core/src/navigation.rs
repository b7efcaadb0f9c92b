//! Jump-to-section navigation.

use crate::constants::NAV_TARGETS;
use crate::progress::{clamp01, SectionId};

/// Something that can perform (or at least start) a scroll to an offset.
///
/// Requests are fire-and-forget; completion is never reported back.
pub trait SmoothScroll {
    fn scroll_to(&self, offset: f64, smooth: bool);
}

/// Scroll offset that corresponds to `target_progress` on a page with
/// `scrollable_extent` pixels of scroll range.
#[inline]
pub fn target_scroll_offset(target_progress: f32, scrollable_extent: f64) -> f64 {
    if !(scrollable_extent > 0.0) {
        return 0.0;
    }
    clamp01(target_progress) as f64 * scrollable_extent
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavTarget {
    pub section: SectionId,
    pub progress: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavigationDispatcher {
    targets: [NavTarget; 4],
}

impl Default for NavigationDispatcher {
    fn default() -> Self {
        Self::new(NAV_TARGETS)
    }
}

impl NavigationDispatcher {
    pub fn new(progress: [f32; 4]) -> Self {
        let targets = SectionId::ALL.map(|section| NavTarget {
            section,
            progress: clamp01(progress[section.index()]),
        });
        Self { targets }
    }

    pub fn targets(&self) -> &[NavTarget; 4] {
        &self.targets
    }

    #[inline]
    pub fn target(&self, section: SectionId) -> NavTarget {
        self.targets[section.index()]
    }

    /// Request a smooth scroll to `section`'s jump target. Returns the offset
    /// that was requested.
    pub fn navigate<S: SmoothScroll + ?Sized>(
        &self,
        section: SectionId,
        scrollable_extent: f64,
        scroller: &S,
    ) -> f64 {
        self.navigate_to_progress(self.target(section).progress, scrollable_extent, scroller)
    }

    pub fn navigate_to_progress<S: SmoothScroll + ?Sized>(
        &self,
        target_progress: f32,
        scrollable_extent: f64,
        scroller: &S,
    ) -> f64 {
        let offset = target_scroll_offset(target_progress, scrollable_extent);
        log::debug!(
            "[nav] progress={:.3} extent={:.0} -> offset={:.0}",
            target_progress,
            scrollable_extent,
            offset
        );
        scroller.scroll_to(offset, true);
        offset
    }
}

/// Keyboard shortcuts for section navigation.
///
/// Arrow/Page keys step relative to `current`, Home/End jump to the ends and
/// the digits 1-4 select a section directly.
pub fn section_for_key(key: &str, current: SectionId) -> Option<SectionId> {
    match key {
        "ArrowDown" | "PageDown" => Some(current.next()),
        "ArrowUp" | "PageUp" => Some(current.prev()),
        "Home" => Some(SectionId::Hero),
        "End" => Some(SectionId::Financials),
        "1" | "2" | "3" | "4" => key
            .parse::<usize>()
            .ok()
            .and_then(|n| SectionId::from_index(n - 1)),
        _ => None,
    }
}
