//! Domain-critical regression tests for gray-dither.
//!
//! These tests are designed to catch specific classes of bugs, not just
//! confirm happy paths. Each test documents the regression it guards against.

#[cfg(test)]
mod domain_tests {
    use crate::animation::{DelayPolicy, SourceFrame};
    use crate::api::GrayDitherer;
    use crate::color::{luma, RGB8, RGBA8};
    use crate::dither::{
        DitherOptions, FrameDitherer, GrayGrid, Quantizer, Reconstruction, FLOYD_STEINBERG,
    };
    use crate::palette::{Palette, PaletteRegistry};

    fn mono() -> Palette {
        Palette::new(&[RGB8::new(0, 0, 0), RGB8::new(255, 255, 255)]).unwrap()
    }

    fn greys() -> Palette {
        Palette::from_hex(&["#333333", "#666666", "#999999", "#cccccc"]).unwrap()
    }

    /// Deterministic pseudo-random pixels (xorshift), so tests need no RNG crate.
    fn noise_frame(width: usize, height: usize, seed: u32, delay: u16) -> SourceFrame {
        let mut state = seed.max(1);
        let pixels = (0..width * height)
            .map(|_| {
                state ^= state << 13;
                state ^= state >> 17;
                state ^= state << 5;
                let [r, g, b, _] = state.to_le_bytes();
                RGBA8::new(r, g, b, 255)
            })
            .collect();
        SourceFrame::new(pixels, width, height, delay).unwrap()
    }

    /// Run the scan loop by hand so the working grid can be inspected
    /// afterwards.
    fn scan(grid: &mut GrayGrid, quantizer: &Quantizer) -> Vec<u8> {
        let mut indices = Vec::new();
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                let gray = grid.get(x, y);
                let q = quantizer.quantize(gray);
                indices.push(q.index);
                grid.diffuse(x, y, q.error(gray), &FLOYD_STEINBERG);
            }
        }
        indices
    }

    // ========================================================================
    // GAP 1: Black stays black
    // ========================================================================

    /// If this breaks, it means: negative error from the canonical
    /// reconstruction value (31) is no longer clamped at 0 and is wrapping
    /// or underflowing into bright values.
    #[test]
    fn test_black_frame_stays_black() {
        let mut grid = GrayGrid::from_gray(vec![0; 4], 2, 2);
        let quantizer = Quantizer::new(&mono(), Reconstruction::Canonical);
        let indices = scan(&mut grid, &quantizer);

        assert_eq!(indices, vec![0, 0, 0, 0]);
        assert_eq!(grid.cells(), &[0, 0, 0, 0], "grid must not pick up residue");
    }

    /// With reconstruction taken from the palette, black maps onto black
    /// with no error at all.
    #[test]
    fn test_black_frame_zero_error_with_palette_luma() {
        let quantizer = Quantizer::new(&mono(), Reconstruction::PaletteLuma);
        let q = quantizer.quantize(0);
        assert_eq!(q.index, 0);
        assert_eq!(q.error(0), 0);

        let frame = SourceFrame::new(vec![RGBA8::new(0, 0, 0, 255); 4], 2, 2, 0).unwrap();
        let out = FrameDitherer::new(
            &mono(),
            &DitherOptions::new().reconstruction(Reconstruction::PaletteLuma),
        )
        .dither(&frame);
        assert_eq!(out.indices(), &[0, 0, 0, 0]);
    }

    // ========================================================================
    // GAP 2: Single pixel, four levels
    // ========================================================================

    /// If this breaks, it means: the 4-level band table or its
    /// reconstruction constants shifted, or diffusion wrote outside a 1x1
    /// grid.
    #[test]
    fn test_single_pixel_gray_100() {
        let quantizer = Quantizer::new(&greys(), Reconstruction::Canonical);
        let q = quantizer.quantize(100);
        assert_eq!(q.index, 1);
        assert_eq!(q.reconstruction, 95);
        assert_eq!(q.error(100), 5);

        let mut grid = GrayGrid::from_gray(vec![100], 1, 1);
        let indices = scan(&mut grid, &quantizer);
        assert_eq!(indices, vec![1]);
        assert_eq!(grid.cells(), &[100], "nothing to diffuse into");
    }

    // ========================================================================
    // GAP 3: Determinism across scheduling
    // ========================================================================

    /// If this breaks, it means: frame tasks share mutable state (a working
    /// grid, a cursor) or results are placed by completion order instead of
    /// input index.
    #[test]
    fn test_thread_count_does_not_change_output() {
        let frames: Vec<SourceFrame> = (0..24)
            .map(|i| noise_frame(17, 11, 0x9E37_79B9 ^ i as u32, i as u16))
            .collect();

        let serial = GrayDitherer::new(greys()).threads(1);
        let parallel = GrayDitherer::new(greys()).threads(8);

        let a = serial.dither_animation(&frames).unwrap();
        let b = parallel.dither_animation(&frames).unwrap();

        assert_eq!(a.len(), frames.len());
        assert_eq!(a.frames(), b.frames());
        assert_eq!(a.delays(), (0..24).collect::<Vec<u16>>());
    }

    /// If this breaks, it means: the frame ditherer carries state between
    /// calls.
    #[test]
    fn test_repeat_dither_identical() {
        let frame = noise_frame(31, 29, 7, 0);
        let ditherer = FrameDitherer::new(&mono(), &DitherOptions::new());
        assert_eq!(ditherer.dither(&frame), ditherer.dither(&frame));
    }

    // ========================================================================
    // GAP 4: Order with uneven task cost
    // ========================================================================

    /// If this breaks, it means: output order follows task completion. The
    /// frames alternate in content so a misplaced frame is detectable.
    #[test]
    fn test_order_preserved_per_frame_content() {
        let registry = PaletteRegistry::builtin();
        let palette = registry.resolve(Some(2)).unwrap().palette.clone();
        let ditherer = GrayDitherer::new(palette).threads(4);

        let frames: Vec<SourceFrame> = (0..50)
            .map(|i| {
                let v = (i * 5) as u8;
                SourceFrame::new(vec![RGBA8::new(v, v, v, 255); 64], 8, 8, 0).unwrap()
            })
            .collect();
        let animation = ditherer.dither_animation(&frames).unwrap();

        for (i, (out, src)) in animation.frames().iter().zip(&frames).enumerate() {
            let expected = ditherer.dither_frame(src);
            assert_eq!(out.indices(), expected.indices(), "frame {i} out of place");
        }
    }

    // ========================================================================
    // GAP 5: Tone preservation
    // ========================================================================

    /// If this breaks, it means: error is not being diffused (or is diffused
    /// with the wrong sign), so flat mid-gray collapses to a single color.
    /// With canonical reconstruction 31/223, gray g should come out roughly
    /// (g - 31) / 192 white.
    #[test]
    fn test_mid_gray_ratio() {
        let size = 32;
        let pixel = RGBA8::new(127, 127, 127, 255);
        let gray = luma(pixel) as f64;
        let frame = SourceFrame::new(vec![pixel; size * size], size, size, 0).unwrap();

        let out = FrameDitherer::new(&mono(), &DitherOptions::new()).dither(&frame);
        let white = out.indices().iter().filter(|&&i| i == 1).count();
        let ratio = white as f64 / (size * size) as f64;
        let expected = (gray - 31.0) / 192.0;

        assert!(
            (ratio - expected).abs() < 0.1,
            "REGRESSION: gray {gray} produced {ratio:.3} white, expected ~{expected:.3}"
        );
    }

    // ========================================================================
    // GAP 6: Column 0 receives southwest error
    // ========================================================================

    /// If this breaks, it means: the southwest bounds check became `x > 1`
    /// instead of `x >= 1`, so column 0 of each row stops receiving error
    /// from column 1 above it.
    #[test]
    fn test_column_zero_receives_southwest() {
        let mut grid = GrayGrid::from_gray(vec![100; 4], 2, 2);
        grid.diffuse(1, 0, 16, &FLOYD_STEINBERG);
        assert_eq!(grid.get(0, 1), 103);
    }

    // ========================================================================
    // GAP 7: Valid indices for every built-in palette
    // ========================================================================

    /// If this breaks, it means: a palette's band count and its length
    /// disagree, which would index past the GIF color table.
    #[test]
    fn test_all_builtin_palettes_valid_indices() {
        let frame = noise_frame(23, 19, 12345, 0);
        for entry in PaletteRegistry::builtin().iter() {
            for mode in [Reconstruction::Canonical, Reconstruction::PaletteLuma] {
                let out = GrayDitherer::new(entry.palette.clone())
                    .reconstruction(mode)
                    .dither_frame(&frame);
                assert!(
                    out.indices()
                        .iter()
                        .all(|&i| (i as usize) < entry.palette.len()),
                    "palette {} ({:?}) produced an out-of-range index",
                    entry.name,
                    mode
                );
            }
        }
    }

    /// If this breaks, it means: the fixed delay override leaks into the
    /// preserve path or vice versa.
    #[test]
    fn test_delay_policies() {
        let frames = vec![noise_frame(4, 4, 1, 3), noise_frame(4, 4, 2, 8)];
        let keep = GrayDitherer::new(mono()).dither_animation(&frames).unwrap();
        let zero = GrayDitherer::new(mono())
            .delay(DelayPolicy::Fixed(0))
            .dither_animation(&frames)
            .unwrap();
        assert_eq!(keep.delays(), vec![3, 8]);
        assert_eq!(zero.delays(), vec![0, 0]);
        assert_eq!(keep.frames()[0].indices(), zero.frames()[0].indices());
    }
}
