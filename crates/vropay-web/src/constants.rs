// Page wiring, camera and reveal timing constants

// Element ids expected in index.html
pub const CANVAS_ID: &str = "app-canvas";
pub const SECTIONS_ID: &str = "sections";
pub const NAV_ID: &str = "section-nav";
pub const PROGRESS_BAR_ID: &str = "scroll-progress-bar";

// Classes toggled on generated markup
pub const VISIBLE_CLASS: &str = "is-visible";
pub const ACTIVE_CLASS: &str = "active";

// Camera sits on +z looking at the origin
pub const CAMERA_Z: f32 = 10.0;

// Bloom post chain
pub const BLOOM_STRENGTH: f32 = 0.8;
pub const BLOOM_THRESHOLD: f32 = 0.9; // linear luminance where glow starts
pub const EXPOSURE: f32 = 1.0;

// Reveal transitions (seconds)
pub const REVEAL_DURATION_SEC: f32 = 0.8;
pub const CARD_STAGGER_SEC: f32 = 0.1;
pub const CALLOUT_DELAY_SEC: f32 = 0.3;
pub const LETTER_STAGGER_SEC: f32 = 0.05;
pub const LETTER_DURATION_SEC: f32 = 0.5;
