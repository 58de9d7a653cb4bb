//! Assertion helpers for tests.

use std::path::Path;

use pretty_assertions::assert_eq;

/// Decoded view of an output GIF, as indices into the global color table.
pub struct DecodedGif {
    pub width: u16,
    pub height: u16,
    pub global_palette: Vec<u8>,
    pub frames: Vec<DecodedFrame>,
}

pub struct DecodedFrame {
    pub indices: Vec<u8>,
    pub delay: u16,
    pub has_local_palette: bool,
}

impl DecodedGif {
    pub fn delays(&self) -> Vec<u16> {
        self.frames.iter().map(|f| f.delay).collect()
    }
}

/// Read a GIF without color conversion.
pub fn read_indexed(path: &Path) -> DecodedGif {
    let file = std::fs::File::open(path).unwrap();
    let mut options = gif::DecodeOptions::new();
    options.set_color_output(gif::ColorOutput::Indexed);
    let mut decoder = options.read_info(file).unwrap();

    let width = decoder.width();
    let height = decoder.height();
    let global_palette = decoder.global_palette().map(<[u8]>::to_vec).unwrap_or_default();

    let mut frames = Vec::new();
    while let Some(frame) = decoder.read_next_frame().unwrap() {
        frames.push(DecodedFrame {
            indices: frame.buffer.to_vec(),
            delay: frame.delay,
            has_local_palette: frame.palette.is_some(),
        });
    }

    DecodedGif {
        width,
        height,
        global_palette,
        frames,
    }
}

/// Assert the file is a GIF whose global table starts with `colors` and
/// whose frames only use indices within it.
pub fn assert_gif_uses_palette(path: &Path, colors: &[[u8; 3]]) {
    let gif = read_indexed(path);
    let expected: Vec<u8> = colors.iter().flatten().copied().collect();

    assert_eq!(
        &gif.global_palette[..expected.len()],
        expected.as_slice(),
        "Global color table does not match the palette"
    );
    for (i, frame) in gif.frames.iter().enumerate() {
        assert!(!frame.has_local_palette, "Frame {i} has a local palette");
        assert!(
            frame.indices.iter().all(|&idx| (idx as usize) < colors.len()),
            "Frame {i} uses an index outside the palette"
        );
    }
}
