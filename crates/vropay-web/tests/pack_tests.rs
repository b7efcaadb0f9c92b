// Host-side tests for GPU uniform packing.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod pack {
    include!("../src/pack.rs");
}

use pack::*;
use vropay_core::constants::MAX_SCENE_ELEMENTS;
use vropay_core::{Camera, ElementState, SectionId, Theme};

fn lighting() -> FrameLighting {
    FrameLighting {
        ambient: 0.5,
        light: [1.0, 1.0, 1.0],
        background: [0.0, 0.0, 0.0],
    }
}

#[test]
fn layout_matches_wgsl_struct() {
    // 5 vec4 per element; 4x4 matrix plus four vec4 header.
    assert_eq!(std::mem::size_of::<ElementPacked>(), 80);
    assert_eq!(
        std::mem::size_of::<SceneUniforms>(),
        64 + 4 * 16 + MAX_SCENE_ELEMENTS * 80
    );
    assert_eq!(std::mem::size_of::<SceneUniforms>() % 16, 0);
}

#[test]
fn srgb_conversion_endpoints() {
    assert_eq!(srgb_to_linear(0.0), 0.0);
    assert!((srgb_to_linear(1.0) - 1.0).abs() < 1e-6);
    // Mid grey is darker in linear space.
    let mid = srgb_to_linear(0.5);
    assert!(mid > 0.2 && mid < 0.22, "{mid}");
    assert!(srgb_to_linear(0.02) < 0.002);
}

#[test]
fn packs_scene_elements_in_order() {
    let theme = Theme::daylight();
    let scene = theme.scene(SectionId::Hero);
    let states: Vec<ElementState> = scene.elements.iter().map(ElementState::at_rest).collect();
    let camera = Camera::facing_origin(10.0, 16.0 / 9.0);
    let u = SceneUniforms::new(
        &camera,
        1.5,
        [1600.0, 900.0],
        &lighting(),
        scene.elements.iter().zip(states.iter()),
    );
    assert_eq!(u.count(), scene.elements.len());
    assert_eq!(u.eye_time, [0.0, 0.0, 10.0, 1.5]);
    assert_eq!(u.resolution_count[3], 0.5);

    let first = &scene.elements[0];
    let packed = u.elements[0];
    assert_eq!(packed.pos_kind[3], first.shape.code());
    assert_eq!(packed.size_reveal[0], first.size.x);
    assert_eq!(packed.scale_emissive[3], first.emissive);
    // Slots past the element count stay zeroed.
    assert_eq!(u.elements[scene.elements.len()], ElementPacked::default());
}

#[test]
fn count_is_capped() {
    let theme = Theme::daylight();
    let scene = theme.scene(SectionId::Ecosystem);
    let spec = scene.elements[0];
    let state = ElementState::at_rest(&spec);
    let many = std::iter::repeat((&spec, &state)).take(MAX_SCENE_ELEMENTS + 12);
    let u = SceneUniforms::new(
        &Camera::facing_origin(10.0, 1.0),
        0.0,
        [1.0, 1.0],
        &lighting(),
        many,
    );
    assert_eq!(u.count(), MAX_SCENE_ELEMENTS);
}

#[test]
fn opacity_is_clamped_when_packed() {
    let theme = Theme::midnight();
    let scene = theme.scene(SectionId::Problem);
    let spec = scene.elements[0];
    let mut state = ElementState::at_rest(&spec);
    state.opacity = 1.8;
    assert_eq!(pack_element(&spec, &state).color_opacity[3], 1.0);
    state.opacity = -0.5;
    assert_eq!(pack_element(&spec, &state).color_opacity[3], 0.0);
}
