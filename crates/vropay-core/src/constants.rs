// Shared scroll-mapping and scene tuning constants.

// Section boundaries in global progress (Hero | Problem | Ecosystem | Financials)
pub const SECTION_BOUNDS: [f32; 5] = [0.0, 0.2, 0.4, 0.7, 1.0];

// "Jump to section" targets used by the navigation dots and keyboard
pub const NAV_TARGETS: [f32; 4] = [0.0, 0.2, 0.4, 0.85];

// Exponential smoothing: fraction of the remaining gap closed per frame tick
pub const DEFAULT_SMOOTHING: f32 = 0.1;

// Seconds without a scroll event before Scrolling settles back to Idle
pub const SCROLL_SETTLE_SEC: f64 = 0.15;

// Upper bound on decorative elements per scene (matches the shader array)
pub const MAX_SCENE_ELEMENTS: usize = 40;

// Hero: spheres drift apart over the first tenth of the page
pub const HERO_WINDOW: [f32; 2] = [0.0, 0.1];
pub const HERO_SPREAD: f32 = 3.0; // world units at full spread
pub const HERO_FADE: f32 = 0.3; // opacity lost at full spread
pub const HERO_SPIN: f32 = 0.1; // rad/s

// Problem: bridge forms while the figure walks across
pub const PROBLEM_WINDOW: [f32; 2] = [0.1, 0.3];
pub const PROBLEM_WALK_X: [f32; 2] = [-4.0, 4.0];
pub const PROBLEM_BOB_AMPLITUDE: f32 = 0.1;
pub const PROBLEM_BOB_CYCLES: f32 = 2.0; // full bobs over the walk
pub const PROBLEM_BRIDGE_EMISSIVE: f32 = 0.5;

// Ecosystem: modules rise into their slots one phase at a time
pub const ECOSYSTEM_WINDOW: [f32; 2] = [0.3, 0.5];
pub const ECOSYSTEM_SPIN: f32 = 0.2; // rad/s
pub const MODULE_DROP: f32 = 3.0; // how far below the slot a hidden module waits
pub const MODULE_MIN_SCALE: f32 = 0.5;

// Financials: growth curve, year markers and the particle dome
pub const FINANCIALS_WINDOW: [f32; 2] = [0.7, 1.0];
pub const GROWTH_CURVE_SAMPLES: usize = 51;
pub const GROWTH_CURVE_MIN_VISIBLE: usize = 2;
pub const GROWTH_CURVE_EXPONENT: f32 = 2.5;
pub const MARKER_THRESHOLDS: [f32; 3] = [0.3, 0.6, 0.9];
pub const DOME_PARTICLES: usize = 30;
pub const DOME_RADIUS: f32 = 8.0;
pub const DOME_SEED: u64 = 0x5652_4f50_4159; // fixed so the dome is stable across reloads
pub const DOME_SPIN: f32 = 0.1; // rad/s
