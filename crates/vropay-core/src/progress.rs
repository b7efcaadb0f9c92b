//! Scroll progress derivation.
//!
//! Everything here is a pure function of its inputs. A scroll event becomes a
//! [`ScrollState`], which [`derive`] turns into a [`ScrollSnapshot`] holding
//! the active [`SectionId`] and its local progress. Sub-phases of a section
//! are remapped with [`PhaseRange`] using the same clamp-and-remap formula.

use crate::constants::SECTION_BOUNDS;
use crate::error::ConfigError;

/// Clamp to \[0, 1\]. Non-finite input maps to 0.
#[inline]
pub fn clamp01(x: f32) -> f32 {
    if x.is_nan() {
        0.0
    } else {
        x.clamp(0.0, 1.0)
    }
}

/// Convert a raw scroll offset into global progress.
///
/// `scrollable_extent` is content height minus viewport height. When the
/// content fits inside the viewport the extent is zero or negative and the
/// progress is defined as 0.
#[inline]
pub fn normalize_scroll(scroll_offset: f64, scrollable_extent: f64) -> f32 {
    if !(scrollable_extent > 0.0) || !scroll_offset.is_finite() {
        return 0.0;
    }
    clamp01((scroll_offset / scrollable_extent) as f32)
}

/// Remap `value` from `lower..upper` into \[0, 1\], clamped.
#[inline]
pub fn remap01(value: f32, lower: f32, upper: f32) -> f32 {
    let span = upper - lower;
    if span <= 0.0 {
        // Degenerate range acts as a step at `lower`.
        return if value >= lower { 1.0 } else { 0.0 };
    }
    clamp01((value - lower) / span)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionId {
    Hero,
    Problem,
    Ecosystem,
    Financials,
}

impl SectionId {
    pub const ALL: [SectionId; 4] = [
        SectionId::Hero,
        SectionId::Problem,
        SectionId::Ecosystem,
        SectionId::Financials,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn from_index(index: usize) -> Option<SectionId> {
        Self::ALL.get(index).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            SectionId::Hero => "Hero",
            SectionId::Problem => "Problem",
            SectionId::Ecosystem => "Ecosystem",
            SectionId::Financials => "Financials",
        }
    }

    /// Following section, saturating at Financials.
    pub fn next(self) -> SectionId {
        Self::from_index(self.index() + 1).unwrap_or(SectionId::Financials)
    }

    /// Preceding section, saturating at Hero.
    pub fn prev(self) -> SectionId {
        self.index()
            .checked_sub(1)
            .and_then(Self::from_index)
            .unwrap_or(SectionId::Hero)
    }
}

/// A half-open slice `[lower, upper)` of global progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionRange {
    pub id: SectionId,
    pub lower: f32,
    pub upper: f32,
}

impl SectionRange {
    pub const fn new(id: SectionId, lower: f32, upper: f32) -> Self {
        Self { id, lower, upper }
    }

    /// 0 at `lower`, 1 at or beyond `upper`, linear in between.
    #[inline]
    pub fn local_progress(&self, global_progress: f32) -> f32 {
        remap01(clamp01(global_progress), self.lower, self.upper)
    }
}

/// Partition of \[0, 1\] into the four sections.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionTable {
    ranges: [SectionRange; 4],
}

impl Default for SectionTable {
    fn default() -> Self {
        let b = SECTION_BOUNDS;
        Self {
            ranges: [
                SectionRange::new(SectionId::Hero, b[0], b[1]),
                SectionRange::new(SectionId::Problem, b[1], b[2]),
                SectionRange::new(SectionId::Ecosystem, b[2], b[3]),
                SectionRange::new(SectionId::Financials, b[3], b[4]),
            ],
        }
    }
}

impl SectionTable {
    /// Build a table from the five boundaries `0 = b0 < b1 < b2 < b3 < b4 = 1`.
    pub fn from_bounds(bounds: [f32; 5]) -> Result<Self, ConfigError> {
        let ranges = [
            SectionRange::new(SectionId::Hero, bounds[0], bounds[1]),
            SectionRange::new(SectionId::Problem, bounds[1], bounds[2]),
            SectionRange::new(SectionId::Ecosystem, bounds[2], bounds[3]),
            SectionRange::new(SectionId::Financials, bounds[3], bounds[4]),
        ];
        Self::new(ranges)
    }

    pub fn new(ranges: [SectionRange; 4]) -> Result<Self, ConfigError> {
        let table = Self { ranges };
        table.validate()?;
        Ok(table)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let first = self.ranges[0].lower;
        if first != 0.0 {
            return Err(ConfigError::TableStart(first));
        }
        let last = self.ranges[3].upper;
        if last != 1.0 {
            return Err(ConfigError::TableEnd(last));
        }
        for (i, r) in self.ranges.iter().enumerate() {
            if !(r.upper > r.lower) {
                return Err(ConfigError::EmptyRange {
                    lower: r.lower,
                    upper: r.upper,
                });
            }
            if let Some(next) = self.ranges.get(i + 1) {
                if next.lower != r.upper {
                    return Err(ConfigError::Discontinuous {
                        index: i,
                        next: i + 1,
                        upper: r.upper,
                        lower: next.lower,
                    });
                }
            }
        }
        Ok(())
    }

    #[inline]
    pub fn ranges(&self) -> &[SectionRange; 4] {
        &self.ranges
    }

    #[inline]
    pub fn range(&self, id: SectionId) -> SectionRange {
        self.ranges[id.index()]
    }

    /// Section whose `[lower, upper)` holds `global_progress`; the last
    /// section also owns 1.0.
    #[inline]
    pub fn classify(&self, global_progress: f32) -> SectionId {
        let g = clamp01(global_progress);
        let r = &self.ranges;
        if g < r[0].upper {
            SectionId::Hero
        } else if g < r[1].upper {
            SectionId::Problem
        } else if g < r[2].upper {
            SectionId::Ecosystem
        } else {
            SectionId::Financials
        }
    }
}

/// Sub-range of a section's local progress used for staged reveals.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhaseRange {
    pub lower: f32,
    pub upper: f32,
}

impl PhaseRange {
    pub const fn new(lower: f32, upper: f32) -> Self {
        Self { lower, upper }
    }

    /// Exactly 0 below `lower`, exactly 1 at or above `upper`.
    #[inline]
    pub fn progress(&self, local_progress: f32) -> f32 {
        remap01(clamp01(local_progress), self.lower, self.upper)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let in_unit = |x: f32| (0.0..=1.0).contains(&x);
        if !in_unit(self.lower) || !in_unit(self.upper) {
            return Err(ConfigError::PhaseOutOfBounds {
                lower: self.lower,
                upper: self.upper,
            });
        }
        if !(self.upper > self.lower) {
            return Err(ConfigError::EmptyRange {
                lower: self.lower,
                upper: self.upper,
            });
        }
        Ok(())
    }
}

/// Three sequential reveal phases. Bounds are kept exactly as each design
/// revision wrote them; neighbouring phases may share or skip ranges.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhaseScheme(pub [PhaseRange; 3]);

impl PhaseScheme {
    pub const THIRDS: PhaseScheme = PhaseScheme([
        PhaseRange::new(0.0, 0.33),
        PhaseRange::new(0.33, 0.66),
        PhaseRange::new(0.66, 1.0),
    ]);

    pub const STAGGERED: PhaseScheme = PhaseScheme([
        PhaseRange::new(0.25, 0.5),
        PhaseRange::new(0.5, 0.75),
        PhaseRange::new(0.75, 1.0),
    ]);

    #[inline]
    pub fn progress(&self, local_progress: f32) -> [f32; 3] {
        let p = &self.0;
        [
            p[0].progress(local_progress),
            p[1].progress(local_progress),
            p[2].progress(local_progress),
        ]
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.0.iter().try_for_each(PhaseRange::validate)
    }
}

/// One scroll-change observation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub global_progress: f32,
}

impl ScrollState {
    pub fn from_scroll(scroll_offset: f64, scrollable_extent: f64) -> Self {
        Self {
            global_progress: normalize_scroll(scroll_offset, scrollable_extent),
        }
    }
}

/// Everything derived from one [`ScrollState`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollSnapshot {
    pub global: f32,
    pub section: SectionId,
    pub local: f32,
}

impl Default for ScrollSnapshot {
    fn default() -> Self {
        Self {
            global: 0.0,
            section: SectionId::Hero,
            local: 0.0,
        }
    }
}

/// Classify and compute local progress in one step.
#[inline]
pub fn derive(state: ScrollState, table: &SectionTable) -> ScrollSnapshot {
    let global = clamp01(state.global_progress);
    let section = table.classify(global);
    let local = table.range(section).local_progress(global);
    ScrollSnapshot {
        global,
        section,
        local,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_uses_half_open_ranges() {
        let t = SectionTable::default();
        assert_eq!(t.classify(0.0), SectionId::Hero);
        assert_eq!(t.classify(0.199), SectionId::Hero);
        assert_eq!(t.classify(0.2), SectionId::Problem);
        assert_eq!(t.classify(0.4), SectionId::Ecosystem);
        assert_eq!(t.classify(0.7), SectionId::Financials);
        assert_eq!(t.classify(1.0), SectionId::Financials);
    }

    #[test]
    fn out_of_range_inputs_are_clamped() {
        let t = SectionTable::default();
        assert_eq!(t.classify(-3.0), SectionId::Hero);
        assert_eq!(t.classify(7.0), SectionId::Financials);
        assert_eq!(t.classify(f32::NAN), SectionId::Hero);
    }

    #[test]
    fn section_navigation_saturates() {
        assert_eq!(SectionId::Hero.prev(), SectionId::Hero);
        assert_eq!(SectionId::Hero.next(), SectionId::Problem);
        assert_eq!(SectionId::Financials.next(), SectionId::Financials);
        assert_eq!(SectionId::Financials.prev(), SectionId::Ecosystem);
    }

    #[test]
    fn degenerate_phase_is_a_step() {
        let p = PhaseRange::new(0.5, 0.5);
        assert_eq!(p.progress(0.49), 0.0);
        assert_eq!(p.progress(0.5), 1.0);
    }

    #[test]
    fn table_rejects_gaps() {
        assert!(SectionTable::from_bounds([0.0, 0.2, 0.4, 0.7, 1.0]).is_ok());
        let ranges = [
            SectionRange::new(SectionId::Hero, 0.0, 0.2),
            SectionRange::new(SectionId::Problem, 0.25, 0.4),
            SectionRange::new(SectionId::Ecosystem, 0.4, 0.7),
            SectionRange::new(SectionId::Financials, 0.7, 1.0),
        ];
        assert!(matches!(
            SectionTable::new(ranges),
            Err(ConfigError::Discontinuous { index: 0, .. })
        ));
    }
}
