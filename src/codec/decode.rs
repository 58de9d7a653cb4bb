use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use gray_dither::{SourceFrame, RGBA8};

use crate::error::CodecError;

const CLEAR: RGBA8 = RGBA8 {
    r: 0,
    g: 0,
    b: 0,
    a: 0,
};

/// Decode every frame of a GIF file.
pub fn read_gif(path: &Path) -> Result<Vec<SourceFrame>, CodecError> {
    let file = File::open(path).map_err(|source| CodecError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    decode_gif(BufReader::new(file))
}

/// Decode a GIF stream into full-canvas frames.
///
/// Frames in a GIF may cover only part of the logical screen and rely on the
/// previous frame's disposal. Each returned frame is the composited canvas
/// at the moment that frame is shown, with the frame's own delay.
pub fn decode_gif<R: Read>(mut reader: R) -> Result<Vec<SourceFrame>, CodecError> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;

    let mut options = gif::DecodeOptions::new();
    options.set_color_output(gif::ColorOutput::RGBA);
    // The decoder reads ahead to the first image and reports a stream that
    // ends before one as truncated.
    let mut decoder = match options.read_info(data.as_slice()) {
        Ok(decoder) => decoder,
        Err(_) if is_frameless(&data) => return Err(CodecError::NoFrames),
        Err(err) => return Err(err.into()),
    };

    let width = decoder.width() as usize;
    let height = decoder.height() as usize;

    let mut canvas = vec![CLEAR; width * height];
    let mut saved = canvas.clone();
    let mut frames = Vec::new();

    while let Some(frame) = decoder.read_next_frame()? {
        let rect = Rect {
            left: frame.left as usize,
            top: frame.top as usize,
            width: frame.width as usize,
            height: frame.height as usize,
        };

        if frame.dispose == gif::DisposalMethod::Previous {
            saved.copy_from_slice(&canvas);
        }

        rect.for_each_visible(width, height, |fx, fy, cx, cy| {
            let offset = (fy * rect.width + fx) * 4;
            if let Some(&[r, g, b, a]) = frame.buffer.get(offset..offset + 4) {
                // Transparent pixels let the canvas show through.
                if a > 0 {
                    canvas[cy * width + cx] = RGBA8::new(r, g, b, a);
                }
            }
        });

        let index = frames.len();
        let source = SourceFrame::new(canvas.clone(), width, height, frame.delay)
            .map_err(|source| CodecError::Frame { index, source })?;
        frames.push(source);

        match frame.dispose {
            gif::DisposalMethod::Background => {
                rect.for_each_visible(width, height, |_, _, cx, cy| {
                    canvas[cy * width + cx] = CLEAR;
                });
            }
            gif::DisposalMethod::Previous => canvas.copy_from_slice(&saved),
            _ => {}
        }
    }

    if frames.is_empty() {
        return Err(CodecError::NoFrames);
    }

    tracing::debug!(frames = frames.len(), width, height, "Decoded GIF");
    Ok(frames)
}

/// Whether `data` is a well-formed GIF that ends without any image block.
///
/// Walks header, logical screen descriptor, global color table and any
/// extension blocks; true only if the trailer comes before an image
/// descriptor.
fn is_frameless(data: &[u8]) -> bool {
    const HEADER: usize = 6;
    const SCREEN: usize = 7;

    if !(data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a")) {
        return false;
    }
    let Some(&flags) = data.get(HEADER + 4) else {
        return false;
    };
    let mut pos = HEADER + SCREEN;
    if flags & 0x80 != 0 {
        pos += 3 << ((flags & 0x07) + 1);
    }

    loop {
        match data.get(pos) {
            Some(0x3B) => return true,
            Some(0x21) => {
                // Introducer and label, then sub-blocks up to a zero length.
                pos += 2;
                loop {
                    let Some(&len) = data.get(pos) else {
                        return false;
                    };
                    pos += 1;
                    if len == 0 {
                        break;
                    }
                    pos += len as usize;
                }
            }
            _ => return false,
        }
    }
}

/// Placement of a frame on the logical screen.
struct Rect {
    left: usize,
    top: usize,
    width: usize,
    height: usize,
}

impl Rect {
    /// Visit the part of the rect that lies on a `canvas_w` x `canvas_h`
    /// screen, passing frame-local and canvas coordinates.
    fn for_each_visible(
        &self,
        canvas_w: usize,
        canvas_h: usize,
        mut f: impl FnMut(usize, usize, usize, usize),
    ) {
        for fy in 0..self.height {
            let cy = self.top + fy;
            if cy >= canvas_h {
                break;
            }
            for fx in 0..self.width {
                let cx = self.left + fx;
                if cx >= canvas_w {
                    break;
                }
                f(fx, fy, cx, cy);
            }
        }
    }
}
