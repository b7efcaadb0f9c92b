//! Per-frame element animation.
//!
//! [`FrameAnimator::tick`] runs once per display refresh. It reads the latest
//! [`ScrollSnapshot`] (however many scroll events were coalesced since the
//! previous tick) plus elapsed time and writes an [`ElementState`] for every
//! mounted element of the active scene through a [`SceneGraph`].
//!
//! Order of composition for one element:
//! 1. scroll-driven target from the scene window / phase progress
//! 2. optional exponential smoothing of the position toward that target
//! 3. idle float (lift + wobble) added on top
//! 4. constant spin about the scene's Y axis

use crate::constants::*;
use crate::progress::{PhaseScheme, ScrollSnapshot, SectionId};
use crate::scene::{growth_curve_visible, ElementId, ElementSpec, Role, SceneSpec, Shape};
use crate::theme::Theme;
use fnv::FnvHashMap;
use glam::{Quat, Vec3};
use std::f32::consts::TAU;

/// Visual parameters of one element for the current frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElementState {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
    pub opacity: f32,
    pub emissive: f32,
    /// Fraction of a progressively drawn shape that is visible.
    pub reveal: f32,
}

impl ElementState {
    pub fn at_rest(spec: &ElementSpec) -> Self {
        Self {
            position: spec.position,
            rotation: spec.rotation,
            scale: Vec3::ONE,
            opacity: spec.opacity,
            emissive: spec.emissive,
            reveal: if spec.shape == Shape::GrowthCurve { 0.0 } else { 1.0 },
        }
    }
}

/// Drawable elements owned by the rendering side.
///
/// `element_mut` returns `None` for elements that are not mounted yet; the
/// animator skips those for the current tick.
pub trait SceneGraph {
    fn element_mut(&mut self, id: ElementId) -> Option<&mut ElementState>;
}

/// Plain in-memory scene graph: the mounted scene's specs and their states.
#[derive(Clone, Debug, Default)]
pub struct SceneBuffer {
    section: Option<SectionId>,
    specs: Vec<ElementSpec>,
    states: Vec<ElementState>,
    index: FnvHashMap<ElementId, usize>,
}

impl SceneBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the contents with `scene`, every element at rest.
    pub fn mount(&mut self, scene: &SceneSpec) {
        self.unmount();
        self.section = Some(scene.section);
        for (i, spec) in scene.elements.iter().enumerate() {
            self.specs.push(*spec);
            self.states.push(ElementState::at_rest(spec));
            self.index.insert(spec.id, i);
        }
    }

    pub fn unmount(&mut self) {
        self.section = None;
        self.specs.clear();
        self.states.clear();
        self.index.clear();
    }

    #[inline]
    pub fn section(&self) -> Option<SectionId> {
        self.section
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ElementSpec, &ElementState)> {
        self.specs.iter().zip(self.states.iter())
    }
}

impl SceneGraph for SceneBuffer {
    fn element_mut(&mut self, id: ElementId) -> Option<&mut ElementState> {
        let i = *self.index.get(&id)?;
        self.states.get_mut(i)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameInput {
    pub snapshot: ScrollSnapshot,
    /// Seconds since the view was mounted.
    pub elapsed: f32,
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Close `factor` of the gap between `current` and `target`.
#[inline]
pub fn approach(current: Vec3, target: Vec3, factor: f32) -> Vec3 {
    current + (target - current) * factor
}

/// Scroll-driven part of an element's state, before smoothing and idle motion.
pub fn scroll_target(spec: &ElementSpec, local: f32, phases: &PhaseScheme) -> ElementState {
    let mut s = ElementState::at_rest(spec);
    match spec.role {
        Role::HeroSphere(axis) => {
            let spread = local * HERO_SPREAD;
            let dir = match axis {
                0 => Vec3::NEG_X,
                1 => Vec3::Y,
                _ => Vec3::Z,
            };
            s.position = spec.position + dir * spread;
            s.opacity = 1.0 - local * HERO_FADE;
        }
        Role::Bridge => {
            // Cylinder local X: lying on its side this is the thickness.
            s.scale = Vec3::new(local, 1.0, 1.0);
            s.opacity = local;
            s.emissive = PROBLEM_BRIDGE_EMISSIVE;
        }
        Role::Walker => {
            s.position.x = lerp(PROBLEM_WALK_X[0], PROBLEM_WALK_X[1], local);
            s.position.y =
                spec.position.y + (local * TAU * PROBLEM_BOB_CYCLES).sin() * PROBLEM_BOB_AMPLITUDE;
        }
        Role::Module(phase) => {
            let p = phases.progress(local)[(phase as usize).min(2)];
            s.position.y = spec.position.y + p * MODULE_DROP;
            s.scale = Vec3::splat(lerp(MODULE_MIN_SCALE, 1.0, p));
        }
        Role::GrowthCurve => {
            let visible = growth_curve_visible(local);
            s.reveal = (visible - 1) as f32 / (GROWTH_CURVE_SAMPLES - 1) as f32;
        }
        Role::Marker(i) => {
            let shown = local > MARKER_THRESHOLDS[(i as usize).min(2)];
            s.opacity = if shown { 1.0 } else { 0.0 };
        }
        Role::DomeParticle => {
            s.scale = Vec3::splat(local);
        }
        Role::Island | Role::EngineCore | Role::Ring => {}
    }
    s
}

/// Turns scroll snapshots and the clock into element states.
pub struct FrameAnimator {
    scenes: [SceneSpec; 4],
    phases: PhaseScheme,
    smoothing: Option<f32>,
    smoothed: FnvHashMap<ElementId, Vec3>,
    active: Option<SectionId>,
}

impl FrameAnimator {
    pub fn new(theme: &Theme) -> Self {
        Self {
            scenes: SectionId::ALL.map(|s| theme.scene(s)),
            phases: theme.phases,
            smoothing: theme.smoothing,
            smoothed: FnvHashMap::default(),
            active: None,
        }
    }

    #[inline]
    pub fn scene(&self, section: SectionId) -> &SceneSpec {
        &self.scenes[section.index()]
    }

    #[inline]
    pub fn active(&self) -> Option<SectionId> {
        self.active
    }

    pub fn tick<G: SceneGraph + ?Sized>(&mut self, input: &FrameInput, graph: &mut G) {
        let section = input.snapshot.section;
        if self.active != Some(section) {
            log::debug!("[animator] scene {:?} -> {:?}", self.active, section);
            self.smoothed.clear();
            self.active = Some(section);
        }
        let scene = &self.scenes[section.index()];
        let local = scene.window.local_progress(input.snapshot.global);
        let t = input.elapsed;

        for spec in scene.elements.iter() {
            let Some(out) = graph.element_mut(spec.id) else {
                continue;
            };
            let mut state = scroll_target(spec, local, &self.phases);

            if let Some(factor) = self.smoothing {
                let current = self.smoothed.entry(spec.id).or_insert(spec.position);
                *current = approach(*current, state.position, factor);
                state.position = *current;
            }

            if let Some(float) = spec.float {
                let (lift, wobble) = float.sample(t);
                state.position.y += lift;
                state.rotation = wobble * state.rotation;
            }

            if spec.spin != 0.0 {
                let spin = Quat::from_rotation_y(t * spec.spin);
                state.position = spin * state.position;
                state.rotation = spin * state.rotation;
            }

            *out = state;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::{derive, ScrollState};

    fn input(global: f32, elapsed: f32, theme: &Theme) -> FrameInput {
        FrameInput {
            snapshot: derive(
                ScrollState {
                    global_progress: global,
                },
                &theme.sections,
            ),
            elapsed,
        }
    }

    #[test]
    fn approach_closes_a_tenth_of_the_gap() {
        let p = approach(Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0), 0.1);
        assert!((p.x - 1.0).abs() < 1e-6);
    }

    #[test]
    fn unmounted_elements_are_skipped() {
        let theme = Theme::daylight();
        let mut animator = FrameAnimator::new(&theme);
        let mut graph = SceneBuffer::new();
        animator.tick(&input(0.05, 1.0, &theme), &mut graph);
        assert!(graph.is_empty());
        assert_eq!(animator.active(), Some(SectionId::Hero));
    }

    #[test]
    fn bridge_grows_with_progress() {
        let theme = Theme::daylight();
        let scene = theme.scene(SectionId::Problem);
        let bridge = scene
            .elements
            .iter()
            .find(|e| e.role == Role::Bridge)
            .copied()
            .expect("bridge");
        let half = scroll_target(&bridge, 0.5, &theme.phases);
        assert!((half.scale.x - 0.5).abs() < 1e-6);
        assert_eq!(half.scale.y, 1.0);
        assert!((half.opacity - 0.5).abs() < 1e-6);
    }
}
