mod convert;
mod gray;

pub use convert::format_transform;
pub use gray::{gray_from_rgb, BW, GW, RW};
