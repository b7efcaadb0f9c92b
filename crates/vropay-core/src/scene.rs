//! Decorative scene geometry for each section.
//!
//! A [`SceneSpec`] is the static description of one section's background:
//! which primitives exist, where they rest, and what [`Role`] the animator
//! gives them. Colours come from the theme palette so every revision shares
//! the same layout.

use crate::constants::*;
use crate::progress::{SectionId, SectionRange};
use crate::theme::{Palette, Theme};
use glam::{Quat, Vec3};
use rand::prelude::*;
use smallvec::SmallVec;
use std::f32::consts::{FRAC_PI_2, TAU};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ElementId {
    pub section: SectionId,
    pub index: u8,
}

/// Primitive drawn by the renderer. `size` in [`ElementSpec`] is interpreted
/// per shape (see [`Shape::code`] for the shader side).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    /// `size.x` = radius
    Sphere,
    /// `size` = half extents
    Box,
    /// `size.x` = radius, `size.y` = half height, `size.z` = side count (0 = round)
    Cylinder,
    /// `size.x` = ring radius, `size.y` = tube radius
    Torus,
    /// `size.x` = tube radius; the curve itself is fixed (see [`growth_curve_point`])
    GrowthCurve,
}

impl Shape {
    /// Numeric kind understood by `scene.wgsl`.
    #[inline]
    pub fn code(self) -> f32 {
        match self {
            Shape::Sphere => 0.0,
            Shape::Box => 1.0,
            Shape::Cylinder => 2.0,
            Shape::Torus => 3.0,
            Shape::GrowthCurve => 4.0,
        }
    }
}

/// What the frame animator does with an element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    /// Hero sphere drifting out along axis 0 (−x), 1 (+y) or 2 (+z).
    HeroSphere(u8),
    Island,
    Bridge,
    Walker,
    EngineCore,
    Ring,
    /// Ecosystem module revealed during phase 0, 1 or 2.
    Module(u8),
    GrowthCurve,
    /// Financials year marker shown past threshold 0, 1 or 2.
    Marker(u8),
    DomeParticle,
}

/// Idle bobbing and wobble, independent of scroll.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatMotion {
    pub speed: f32,
    pub rotation_intensity: f32,
    pub float_intensity: f32,
}

impl FloatMotion {
    pub const fn new(speed: f32, rotation_intensity: f32, float_intensity: f32) -> Self {
        Self {
            speed,
            rotation_intensity,
            float_intensity,
        }
    }

    /// Vertical offset and wobble rotation at `elapsed` seconds.
    pub fn sample(&self, elapsed: f32) -> (f32, Quat) {
        let s = elapsed / 4.0 * self.speed;
        let ri = self.rotation_intensity;
        let wobble = Quat::from_euler(
            glam::EulerRot::XYZ,
            s.cos() / 8.0 * ri,
            s.sin() / 8.0 * ri,
            s.sin() / 20.0 * ri,
        );
        let lift = s.sin() / 10.0 * self.float_intensity;
        (lift, wobble)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElementSpec {
    pub id: ElementId,
    pub role: Role,
    pub shape: Shape,
    /// Resting (hidden/initial) position in scene space.
    pub position: Vec3,
    pub rotation: Quat,
    pub size: Vec3,
    pub color: [f32; 3],
    pub opacity: f32,
    pub emissive: f32,
    /// Constant spin about the scene's Y axis, rad/s.
    pub spin: f32,
    pub float: Option<FloatMotion>,
}

impl ElementSpec {
    fn new(section: SectionId, index: usize, role: Role, shape: Shape) -> Self {
        Self {
            id: ElementId {
                section,
                index: index as u8,
            },
            role,
            shape,
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            size: Vec3::ONE,
            color: [1.0, 1.0, 1.0],
            opacity: 1.0,
            emissive: 0.0,
            spin: 0.0,
            float: None,
        }
    }

    fn at(mut self, x: f32, y: f32, z: f32) -> Self {
        self.position = Vec3::new(x, y, z);
        self
    }

    fn sized(mut self, x: f32, y: f32, z: f32) -> Self {
        self.size = Vec3::new(x, y, z);
        self
    }

    fn rotated(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    fn colored(mut self, color: [f32; 3]) -> Self {
        self.color = color;
        self
    }

    fn glowing(mut self, emissive: f32) -> Self {
        self.emissive = emissive;
        self
    }

    fn faded(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    fn spinning(mut self, spin: f32) -> Self {
        self.spin = spin;
        self
    }

    fn floating(mut self, float: FloatMotion) -> Self {
        self.float = Some(float);
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneSpec {
    pub section: SectionId,
    /// Slice of global progress the scene animates over.
    pub window: SectionRange,
    pub ambient: f32,
    pub light_color: [f32; 3],
    pub elements: SmallVec<[ElementSpec; 8]>,
}

/// Point on the growth curve for `t` in \[0, 1\].
#[inline]
pub fn growth_curve_point(t: f32) -> Vec3 {
    let x = (t - 0.5) * 10.0;
    let y = t.powf(GROWTH_CURVE_EXPONENT) * 5.0 - 2.0;
    Vec3::new(x, y, 0.0)
}

/// Number of curve samples shown at `local` progress.
#[inline]
pub fn growth_curve_visible(local: f32) -> usize {
    let count = (GROWTH_CURVE_SAMPLES as f32 * local.clamp(0.0, 1.0)).floor() as usize;
    count.clamp(GROWTH_CURVE_MIN_VISIBLE, GROWTH_CURVE_SAMPLES)
}

pub fn build_scene(theme: &Theme, section: SectionId) -> SceneSpec {
    let palette = &theme.palettes[section.index()];
    let window = theme.windows[section.index()];
    let elements = match section {
        SectionId::Hero => hero_elements(palette),
        SectionId::Problem => problem_elements(palette),
        SectionId::Ecosystem => ecosystem_elements(palette),
        SectionId::Financials => financials_elements(palette),
    };
    let ambient = match section {
        SectionId::Hero => 0.8,
        SectionId::Problem => 0.3,
        SectionId::Ecosystem => 0.7,
        SectionId::Financials => 0.3,
    };
    SceneSpec {
        section,
        window,
        ambient,
        light_color: palette.glow,
        elements,
    }
}

fn hero_elements(p: &Palette) -> SmallVec<[ElementSpec; 8]> {
    let s = SectionId::Hero;
    let sphere = |i: usize| ElementSpec::new(s, i, Role::HeroSphere(i as u8), Shape::Sphere);
    smallvec::smallvec![
        sphere(0)
            .sized(1.0, 1.0, 1.0)
            .colored(p.base)
            .spinning(HERO_SPIN)
            .floating(FloatMotion::new(1.5, 0.2, 0.3)),
        sphere(1)
            .sized(0.8, 0.8, 0.8)
            .colored(p.accent)
            .spinning(HERO_SPIN)
            .floating(FloatMotion::new(2.0, 0.15, 0.25)),
        sphere(2)
            .sized(0.6, 0.6, 0.6)
            .colored(p.highlight)
            .spinning(HERO_SPIN)
            .floating(FloatMotion::new(1.7, 0.18, 0.28)),
    ]
}

fn problem_elements(p: &Palette) -> SmallVec<[ElementSpec; 8]> {
    let s = SectionId::Problem;
    smallvec::smallvec![
        ElementSpec::new(s, 0, Role::Island, Shape::Box)
            .at(-4.0, -1.0, 0.0)
            .sized(1.0, 0.25, 1.0)
            .colored(p.base),
        ElementSpec::new(s, 1, Role::Island, Shape::Box)
            .at(4.0, -1.0, 0.0)
            .sized(1.0, 0.25, 1.0)
            .colored(p.base),
        // Lying on its side; the animator scales its thickness (local x).
        ElementSpec::new(s, 2, Role::Bridge, Shape::Cylinder)
            .at(0.0, -0.7, 0.0)
            .sized(0.2, 4.0, 0.0)
            .rotated(Quat::from_rotation_z(FRAC_PI_2))
            .colored(p.glow)
            .glowing(PROBLEM_BRIDGE_EMISSIVE)
            .faded(0.0),
        ElementSpec::new(s, 3, Role::Walker, Shape::Box)
            .at(PROBLEM_WALK_X[0], 0.0, 0.0)
            .sized(0.2, 0.4, 0.2)
            .colored(p.accent),
    ]
}

fn ecosystem_elements(p: &Palette) -> SmallVec<[ElementSpec; 8]> {
    let s = SectionId::Ecosystem;
    let flat = Quat::from_rotation_x(FRAC_PI_2);
    let ring = |i: usize, y: f32, color: [f32; 3]| {
        ElementSpec::new(s, i, Role::Ring, Shape::Torus)
            .at(0.0, y, 0.0)
            .sized(1.8, 0.05, 0.0)
            .rotated(flat)
            .colored(color)
            .spinning(ECOSYSTEM_SPIN)
    };
    let module = |i: usize, phase: u8, x: f32, z: f32, color: [f32; 3]| {
        ElementSpec::new(s, i, Role::Module(phase), Shape::Box)
            .at(x, -MODULE_DROP, z)
            .sized(0.4, 0.4, 0.4)
            .colored(color)
            .spinning(ECOSYSTEM_SPIN)
    };
    smallvec::smallvec![
        ElementSpec::new(s, 0, Role::EngineCore, Shape::Cylinder)
            .sized(1.5, 1.0, 6.0)
            .colored(p.base)
            .spinning(ECOSYSTEM_SPIN),
        ring(1, 0.8, p.accent),
        ring(2, 0.0, p.base),
        ring(3, -0.8, p.highlight),
        module(4, 0, 0.0, 2.0, p.accent),
        module(5, 1, -2.0, -1.0, p.base),
        module(6, 2, 2.0, -1.0, p.highlight),
    ]
}

fn financials_elements(p: &Palette) -> SmallVec<[ElementSpec; 8]> {
    let s = SectionId::Financials;
    let mut out: SmallVec<[ElementSpec; 8]> = SmallVec::new();
    out.push(
        ElementSpec::new(s, 0, Role::GrowthCurve, Shape::GrowthCurve)
            .sized(0.05, 0.0, 0.0)
            .colored(p.glow)
            .glowing(1.0),
    );
    let markers = [
        (Vec3::new(-3.3, -1.0, 0.0), p.base),
        (Vec3::new(0.0, 0.5, 0.0), p.accent),
        (Vec3::new(3.3, 3.0, 0.0), p.highlight),
    ];
    for (i, (pos, color)) in markers.into_iter().enumerate() {
        out.push(
            ElementSpec::new(s, 1 + i, Role::Marker(i as u8), Shape::Sphere)
                .at(pos.x, pos.y, pos.z)
                .sized(0.15, 0.15, 0.15)
                .colored(color)
                .glowing(1.0)
                .faded(0.0),
        );
    }
    let mut rng = StdRng::seed_from_u64(DOME_SEED);
    for i in 0..DOME_PARTICLES {
        let theta = i as f32 / DOME_PARTICLES as f32 * TAU;
        let phi = (2.0 * rng.gen::<f32>() - 1.0).acos();
        let pos = Vec3::new(
            phi.sin() * theta.cos(),
            phi.sin() * theta.sin(),
            phi.cos(),
        ) * DOME_RADIUS;
        out.push(
            ElementSpec::new(s, 4 + i, Role::DomeParticle, Shape::Sphere)
                .at(pos.x, pos.y, pos.z)
                .sized(0.05, 0.05, 0.05)
                .colored(p.glow)
                .glowing(0.5)
                .faded(0.6)
                .spinning(DOME_SPIN),
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_ids_are_unique_and_ordered() {
        let theme = Theme::daylight();
        for section in SectionId::ALL {
            let scene = build_scene(&theme, section);
            for (i, e) in scene.elements.iter().enumerate() {
                assert_eq!(e.id.section, section);
                assert_eq!(e.id.index as usize, i);
            }
        }
    }

    #[test]
    fn growth_curve_shows_at_least_two_samples() {
        assert_eq!(growth_curve_visible(0.0), 2);
        assert_eq!(growth_curve_visible(0.5), 25);
        assert_eq!(growth_curve_visible(1.0), GROWTH_CURVE_SAMPLES);
    }

    #[test]
    fn dome_layout_is_deterministic() {
        let theme = Theme::daylight();
        let a = build_scene(&theme, SectionId::Financials);
        let b = build_scene(&theme, SectionId::Financials);
        assert_eq!(a, b);
        for e in a.elements.iter().filter(|e| e.role == Role::DomeParticle) {
            assert!((e.position.length() - DOME_RADIUS).abs() < 1e-3);
        }
    }
}
