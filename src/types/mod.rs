//! Value types for light control parameters.

mod brightness;
mod hue_saturation;
mod power;

pub use brightness::Brightness;
pub use hue_saturation::HueSaturation;
pub use power::PowerMode;
