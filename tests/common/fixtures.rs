//! Test fixtures: GIFs built in memory and written to temp dirs.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Gray ramp used as the global color table of fixture GIFs.
/// Index `i` has gray value `i * 17`.
pub fn gray_ramp_table() -> Vec<u8> {
    (0..16u8).flat_map(|i| [i * 17; 3]).collect()
}

/// A single fixture frame: ramp indices plus a delay in centiseconds.
pub struct FixtureFrame {
    pub indices: Vec<u8>,
    pub delay: u16,
}

impl FixtureFrame {
    /// Every pixel set to ramp index `level`.
    pub fn flat(width: u16, height: u16, level: u8, delay: u16) -> Self {
        Self {
            indices: vec![level; width as usize * height as usize],
            delay,
        }
    }

    /// Horizontal ramp, shifted by `offset` so frames differ.
    pub fn gradient(width: u16, height: u16, offset: u8, delay: u16) -> Self {
        let indices = (0..height as usize)
            .flat_map(|_| (0..width as usize).map(move |x| (x as u8).wrapping_add(offset) % 16))
            .collect();
        Self { indices, delay }
    }
}

/// Encode fixture frames as a full-canvas GIF.
pub fn build_gif(width: u16, height: u16, frames: &[FixtureFrame]) -> Vec<u8> {
    let table = gray_ramp_table();
    let mut out = Vec::new();
    {
        let mut encoder = gif::Encoder::new(&mut out, width, height, &table).unwrap();
        encoder.set_repeat(gif::Repeat::Infinite).unwrap();
        for frame in frames {
            let frame = gif::Frame {
                width,
                height,
                delay: frame.delay,
                buffer: Cow::Borrowed(frame.indices.as_slice()),
                ..Default::default()
            };
            encoder.write_frame(&frame).unwrap();
        }
    }
    out
}

/// Write a fixture GIF into `dir` and return its path.
pub fn write_gif(
    dir: &Path,
    name: &str,
    width: u16,
    height: u16,
    frames: &[FixtureFrame],
) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, build_gif(width, height, frames)).unwrap();
    path
}

/// Write a YAML config into `dir` and return its path.
pub fn write_config(dir: &Path, yaml: &str) -> PathBuf {
    let path = dir.join("gifdither.yaml");
    std::fs::write(&path, yaml).unwrap();
    path
}
