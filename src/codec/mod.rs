//! GIF container handling: decoding source frames and encoding dithered
//! animations.

mod decode;
mod encode;

pub use decode::{decode_gif, read_gif};
pub use encode::encode_gif;
