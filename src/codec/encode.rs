use std::borrow::Cow;

use gray_dither::Animation;

use crate::error::CodecError;

/// Encode a dithered animation as a looping GIF.
///
/// The palette becomes the global color table and every frame indexes into
/// it directly. The whole file is built in memory so a failure never leaves
/// a partial file behind.
pub fn encode_gif(animation: &Animation) -> Result<Vec<u8>, CodecError> {
    let (width, height) = gif_dimensions(animation.width(), animation.height())?;
    let table = animation.palette().to_rgb_bytes();

    let mut encoder = gif::Encoder::new(Vec::new(), width, height, &table)?;
    encoder.set_repeat(gif::Repeat::Infinite)?;

    for frame in animation.frames() {
        let frame = gif::Frame {
            width,
            height,
            delay: frame.delay(),
            buffer: Cow::Borrowed(frame.indices()),
            ..Default::default()
        };
        encoder.write_frame(&frame)?;
    }

    let bytes = encoder.into_inner()?;
    tracing::debug!(
        frames = animation.len(),
        bytes = bytes.len(),
        "Encoded GIF"
    );
    Ok(bytes)
}

fn gif_dimensions(width: usize, height: usize) -> Result<(u16, u16), CodecError> {
    match (u16::try_from(width), u16::try_from(height)) {
        (Ok(w), Ok(h)) => Ok((w, h)),
        _ => Err(CodecError::TooLarge { width, height }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::decode_gif;
    use gray_dither::{DelayPolicy, GrayDitherer, Palette, SourceFrame, RGB8, RGBA8};

    fn gray_frame(v: u8, delay: u16) -> SourceFrame {
        SourceFrame::new(vec![RGBA8::new(v, v, v, 255); 12], 4, 3, delay).unwrap()
    }

    #[test]
    fn test_encode_then_decode_preserves_frames() {
        let palette = Palette::from_hex(&["#081820", "#346856", "#88c070", "#e0f8d0"]).unwrap();
        let frames = vec![gray_frame(0, 5), gray_frame(255, 9)];
        let animation = GrayDitherer::new(palette.clone())
            .dither_animation(&frames)
            .unwrap();

        let bytes = encode_gif(&animation).unwrap();
        let decoded = decode_gif(bytes.as_slice()).unwrap();

        assert_eq!(decoded.len(), 2);
        assert_eq!(decoded[0].width(), 4);
        assert_eq!(decoded[0].height(), 3);
        assert_eq!(decoded[0].delay(), 5);
        assert_eq!(decoded[1].delay(), 9);

        let darkest = palette.color(0);
        let lightest = palette.color(3);
        assert!(decoded[0]
            .pixels()
            .iter()
            .all(|p| RGB8::new(p.r, p.g, p.b) == darkest));
        assert!(decoded[1]
            .pixels()
            .iter()
            .all(|p| RGB8::new(p.r, p.g, p.b) == lightest));
    }

    #[test]
    fn test_encode_fixed_delay() {
        let palette = Palette::from_hex(&["#000", "#fff"]).unwrap();
        let animation = GrayDitherer::new(palette)
            .delay(DelayPolicy::Fixed(0))
            .dither_animation(&[gray_frame(10, 50), gray_frame(200, 70)])
            .unwrap();

        let decoded = decode_gif(encode_gif(&animation).unwrap().as_slice()).unwrap();
        let delays: Vec<u16> = decoded.iter().map(SourceFrame::delay).collect();
        assert_eq!(delays, vec![0, 0]);
    }

    #[test]
    fn test_loops_forever() {
        let palette = Palette::from_hex(&["#000", "#fff"]).unwrap();
        let animation = GrayDitherer::new(palette)
            .dither_animation(&[gray_frame(128, 1)])
            .unwrap();
        let bytes = encode_gif(&animation).unwrap();

        assert!(bytes.starts_with(b"GIF89a"));
        assert!(bytes
            .windows(b"NETSCAPE2.0".len())
            .any(|w| w == b"NETSCAPE2.0"));
    }

    #[test]
    fn test_dimensions_over_u16_rejected() {
        assert!(matches!(
            gif_dimensions(70_000, 1),
            Err(CodecError::TooLarge {
                width: 70_000,
                height: 1
            })
        ));
        assert_eq!(gif_dimensions(640, 480).unwrap(), (640, 480));
    }
}
