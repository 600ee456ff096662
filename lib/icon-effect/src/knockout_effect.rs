//! White background knockout
//!
//! Turns a dark logo on a white canvas into a light logo on a transparent
//! canvas: near-white pixels are cleared, everything else is inverted and
//! made fully opaque.

use crate::{Effect, Result};
use image::{Pixel, Rgba, RgbaImage};
use rayon::prelude::*;

/// A pixel counts as background when R, G and B are all strictly above this.
pub const WHITE_THRESHOLD: u8 = 200;

/// Replacement for background pixels.
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

#[inline]
pub fn is_background(pixel: &Rgba<u8>) -> bool {
    pixel[0] > WHITE_THRESHOLD && pixel[1] > WHITE_THRESHOLD && pixel[2] > WHITE_THRESHOLD
}

/// Map one pixel: background becomes `TRANSPARENT`, anything else has its
/// color channels inverted and its alpha forced to 255.
#[inline]
pub fn knockout_pixel(pixel: Rgba<u8>) -> Rgba<u8> {
    if is_background(&pixel) {
        TRANSPARENT
    } else {
        Rgba([255 - pixel[0], 255 - pixel[1], 255 - pixel[2], 255])
    }
}

/// Pixel counts of one knockout pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KnockoutStats {
    /// Pixels cleared to transparent
    pub cleared: u64,
    /// Pixels inverted and made opaque
    pub inverted: u64,
}

impl KnockoutStats {
    pub fn total(&self) -> u64 {
        self.cleared + self.inverted
    }

    fn merge(self, other: Self) -> Self {
        Self {
            cleared: self.cleared + other.cleared,
            inverted: self.inverted + other.inverted,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WhiteKnockout;

impl WhiteKnockout {
    pub fn new() -> Self {
        Self
    }

    /// Knock out the background of `image` in place and count what happened.
    pub fn run(&self, image: &mut RgbaImage) -> KnockoutStats {
        let pixels: &mut [u8] = image;

        pixels
            .par_chunks_exact_mut(4)
            .map(|channels| {
                let source = *Rgba::<u8>::from_slice(channels);
                channels.copy_from_slice(&knockout_pixel(source).0);

                if is_background(&source) {
                    KnockoutStats {
                        cleared: 1,
                        inverted: 0,
                    }
                } else {
                    KnockoutStats {
                        cleared: 0,
                        inverted: 1,
                    }
                }
            })
            .reduce(KnockoutStats::default, KnockoutStats::merge)
    }
}

impl Effect for WhiteKnockout {
    fn apply(&self, image: &mut RgbaImage) -> Result<()> {
        let stats = self.run(image);
        log::debug!(
            "White knockout: {} cleared, {} inverted ({}x{})",
            stats.cleared,
            stats.inverted,
            image.width(),
            image.height()
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_white_becomes_transparent() {
        assert_eq!(knockout_pixel(Rgba([255, 255, 255, 255])), TRANSPARENT);
        assert_eq!(knockout_pixel(Rgba([230, 210, 250, 17])), TRANSPARENT);
    }

    #[test]
    fn test_threshold_is_strict() {
        // 200 on every channel is still foreground
        assert_eq!(
            knockout_pixel(Rgba([200, 200, 200, 255])),
            Rgba([55, 55, 55, 255])
        );
        assert_eq!(knockout_pixel(Rgba([201, 201, 201, 255])), TRANSPARENT);

        // one channel at the threshold keeps the pixel
        assert_eq!(
            knockout_pixel(Rgba([255, 200, 255, 255])),
            Rgba([0, 55, 0, 255])
        );
    }

    #[test]
    fn test_foreground_inverted_and_opaque() {
        assert_eq!(
            knockout_pixel(Rgba([10, 20, 30, 255])),
            Rgba([245, 235, 225, 255])
        );
        assert_eq!(
            knockout_pixel(Rgba([0, 0, 0, 0])),
            Rgba([255, 255, 255, 255])
        );
        assert_eq!(
            knockout_pixel(Rgba([128, 64, 250, 3])),
            Rgba([127, 191, 5, 255])
        );
    }

    #[test]
    fn test_not_idempotent() {
        let original = Rgba([10, 20, 30, 255]);
        let once = knockout_pixel(original);
        let twice = knockout_pixel(once);

        // the inverted dark pixel is now near-white and gets cleared
        assert_eq!(twice, TRANSPARENT);
        assert_ne!(twice, original);
    }

    #[test]
    fn test_run_counts_and_dimensions() {
        let mut img = RgbaImage::new(3, 2);
        img.put_pixel(0, 0, Rgba([255, 255, 255, 255]));
        img.put_pixel(1, 0, Rgba([10, 20, 30, 255]));
        img.put_pixel(2, 0, Rgba([201, 201, 201, 0]));
        img.put_pixel(0, 1, Rgba([200, 200, 200, 255]));
        img.put_pixel(1, 1, Rgba([0, 0, 0, 128]));
        img.put_pixel(2, 1, Rgba([220, 100, 220, 255]));

        let stats = WhiteKnockout::new().run(&mut img);

        assert_eq!(img.dimensions(), (3, 2));
        assert_eq!(stats.cleared, 2);
        assert_eq!(stats.inverted, 4);
        assert_eq!(stats.total(), 6);

        assert_eq!(*img.get_pixel(0, 0), TRANSPARENT);
        assert_eq!(*img.get_pixel(1, 0), Rgba([245, 235, 225, 255]));
        assert_eq!(*img.get_pixel(2, 0), TRANSPARENT);
        assert_eq!(*img.get_pixel(0, 1), Rgba([55, 55, 55, 255]));
        assert_eq!(*img.get_pixel(1, 1), Rgba([255, 255, 255, 255]));
        assert_eq!(*img.get_pixel(2, 1), Rgba([35, 155, 35, 255]));
    }

    #[test]
    fn test_run_matches_per_pixel_rule() {
        let mut img = RgbaImage::from_fn(64, 48, |x, y| {
            Rgba([
                (x * 4) as u8,
                (y * 5) as u8,
                ((x + y) * 2) as u8,
                (x * y % 256) as u8,
            ])
        });
        let expected = RgbaImage::from_fn(64, 48, |x, y| knockout_pixel(*img.get_pixel(x, y)));

        WhiteKnockout.run(&mut img);

        assert_eq!(img, expected);
    }

    #[test]
    fn test_empty_image() {
        let mut img = RgbaImage::new(0, 0);
        let stats = WhiteKnockout.run(&mut img);
        assert_eq!(stats, KnockoutStats::default());
    }

    #[test]
    fn test_apply_effect() {
        let mut img = RgbaImage::from_pixel(4, 4, Rgba([250, 250, 250, 255]));
        WhiteKnockout.apply(&mut img).unwrap();
        assert!(img.pixels().all(|p| *p == TRANSPARENT));
    }
}
