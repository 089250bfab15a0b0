use thiserror::Error;

pub mod color;
pub mod css;
pub mod ramp;

pub use color::{HslColor, OklchColor};
pub use css::format_css;
pub use ramp::{BaseColor, MAX_STEPS, MIN_STEPS, Ramp, RampEntry};

/// Default base color shown by the front ends.
pub const DEFAULT_BASE_COLOR: &str = "#ad0770";
/// Default step count shown by the front ends.
pub const DEFAULT_STEPS: usize = 5;

pub fn version() -> &'static str {
    "0.1.0"
}

/// The only way ramp generation can fail: the base color string did not
/// parse, or did not convert into the OKLCH model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RampError {
    #[error("invalid color")]
    InvalidColor,
}
