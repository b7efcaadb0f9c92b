use thiserror::Error;

/// Mistakes in a section table, phase scheme or theme.
///
/// Runtime inputs never produce these: scroll values are clamped and missing
/// elements are skipped. Only hand-written configuration is checked.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("section table must start at 0.0, found {0}")]
    TableStart(f32),
    #[error("section table must end at 1.0, found {0}")]
    TableEnd(f32),
    #[error("gap or overlap between sections {index} and {next}: {upper} != {lower}")]
    Discontinuous {
        index: usize,
        next: usize,
        upper: f32,
        lower: f32,
    },
    #[error("range {lower}..{upper} is empty or inverted")]
    EmptyRange { lower: f32, upper: f32 },
    #[error("phase bounds {lower}..{upper} fall outside 0..1")]
    PhaseOutOfBounds { lower: f32, upper: f32 },
    #[error("smoothing factor {0} must be in (0, 1]")]
    Smoothing(f32),
    #[error("scene {scene} has {count} elements, limit is {limit}")]
    TooManyElements {
        scene: &'static str,
        count: usize,
        limit: usize,
    },
}
