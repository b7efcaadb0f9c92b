//! View-side state shared with the web frontend.
//!
//! Nothing here touches platform APIs. The web crate owns one [`ViewState`]
//! behind an `Rc<RefCell<_>>`: the scroll listener writes to it and the frame
//! loop reads from it.

use crate::constants::SCROLL_SETTLE_SEC;
use crate::progress::{derive, ScrollSnapshot, ScrollState, SectionTable};
use glam::{Mat4, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Camera on the +z axis looking at the origin, 75° vertical field of view.
    pub fn facing_origin(distance: f32, aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, distance),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: 75f32.to_radians(),
            znear: 0.1,
            zfar: 100.0,
        }
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Clip space back to world space, for ray generation in the scene shader.
    pub fn inverse_view_projection(&self) -> Mat4 {
        (self.projection_matrix() * self.view_matrix()).inverse()
    }
}

/// Whether scroll events are currently arriving.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollActivity {
    Idle,
    /// `last_event` is in seconds on the same clock passed to
    /// [`ViewState::settle`].
    Scrolling { last_event: f64 },
}

#[derive(Clone, Debug)]
pub struct ViewState {
    pub table: SectionTable,
    pub snapshot: ScrollSnapshot,
    pub activity: ScrollActivity,
}

impl ViewState {
    pub fn new(table: SectionTable) -> Self {
        Self {
            table,
            snapshot: ScrollSnapshot::default(),
            activity: ScrollActivity::Idle,
        }
    }

    /// Recompute the snapshot from a scroll position without touching
    /// [`ScrollActivity`]; used for the initial read on mount.
    pub fn sync(&mut self, scroll_offset: f64, scrollable_extent: f64) -> ScrollSnapshot {
        let state = ScrollState::from_scroll(scroll_offset, scrollable_extent);
        let previous = self.snapshot.section;
        self.snapshot = derive(state, &self.table);
        if self.snapshot.section != previous {
            log::debug!(
                "[view] section {} -> {}",
                previous.label(),
                self.snapshot.section.label()
            );
        }
        self.snapshot
    }

    /// Record one scroll event and return the fresh snapshot.
    pub fn on_scroll(
        &mut self,
        scroll_offset: f64,
        scrollable_extent: f64,
        now: f64,
    ) -> ScrollSnapshot {
        let snapshot = self.sync(scroll_offset, scrollable_extent);
        if self.activity == ScrollActivity::Idle {
            log::debug!("[view] idle -> scrolling");
        }
        self.activity = ScrollActivity::Scrolling { last_event: now };
        snapshot
    }

    /// Fall back to Idle once no scroll event has arrived for
    /// [`SCROLL_SETTLE_SEC`]. Returns true on that transition.
    pub fn settle(&mut self, now: f64) -> bool {
        match self.activity {
            ScrollActivity::Scrolling { last_event } if now - last_event >= SCROLL_SETTLE_SEC => {
                log::debug!("[view] scrolling -> idle");
                self.activity = ScrollActivity::Idle;
                true
            }
            _ => false,
        }
    }

    #[inline]
    pub fn is_scrolling(&self) -> bool {
        matches!(self.activity, ScrollActivity::Scrolling { .. })
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(SectionTable::default())
    }
}
