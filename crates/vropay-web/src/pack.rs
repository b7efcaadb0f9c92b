// GPU uniform layout for scene.wgsl and the packing of animated elements into
// it. Pure (no wgpu/web-sys) so host tests can include it.

use vropay_core::constants::MAX_SCENE_ELEMENTS;
use vropay_core::{Camera, ElementSpec, ElementState};

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ElementPacked {
    pub pos_kind: [f32; 4],
    pub rotation: [f32; 4],
    pub size_reveal: [f32; 4],
    pub color_opacity: [f32; 4],
    pub scale_emissive: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniforms {
    pub inv_view_proj: [[f32; 4]; 4],
    pub eye_time: [f32; 4],
    pub resolution_count: [f32; 4],
    pub light: [f32; 4],
    pub background: [f32; 4],
    pub elements: [ElementPacked; MAX_SCENE_ELEMENTS],
}

#[inline]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[inline]
pub fn linear_rgb(rgb: [f32; 3]) -> [f32; 3] {
    rgb.map(srgb_to_linear)
}

pub fn pack_element(spec: &ElementSpec, state: &ElementState) -> ElementPacked {
    let [r, g, b] = linear_rgb(spec.color);
    ElementPacked {
        pos_kind: state.position.extend(spec.shape.code()).to_array(),
        rotation: state.rotation.to_array(),
        size_reveal: spec.size.extend(state.reveal).to_array(),
        color_opacity: [r, g, b, state.opacity.clamp(0.0, 1.0)],
        scale_emissive: state.scale.extend(state.emissive).to_array(),
    }
}

/// Per-frame inputs besides the elements themselves.
#[derive(Clone, Debug)]
pub struct FrameLighting {
    pub ambient: f32,
    pub light: [f32; 3],
    pub background: [f32; 3],
}

impl SceneUniforms {
    /// Pack up to [`MAX_SCENE_ELEMENTS`] elements; extras are dropped.
    pub fn new<'a>(
        camera: &Camera,
        time: f32,
        resolution: [f32; 2],
        lighting: &FrameLighting,
        elements: impl IntoIterator<Item = (&'a ElementSpec, &'a ElementState)>,
    ) -> Self {
        let mut packed = [ElementPacked::default(); MAX_SCENE_ELEMENTS];
        let mut count = 0usize;
        for (slot, (spec, state)) in packed.iter_mut().zip(elements) {
            *slot = pack_element(spec, state);
            count += 1;
        }
        let [lr, lg, lb] = linear_rgb(lighting.light);
        let [br, bg, bb] = linear_rgb(lighting.background);
        Self {
            inv_view_proj: camera.inverse_view_projection().to_cols_array_2d(),
            eye_time: camera.eye.extend(time).to_array(),
            resolution_count: [resolution[0], resolution[1], count as f32, lighting.ambient],
            light: [lr, lg, lb, 1.0],
            background: [br, bg, bb, 1.0],
            elements: packed,
        }
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.resolution_count[2] as usize
    }
}
