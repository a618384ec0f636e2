//! RGB to HSV color conversion.
//!
//! Every downstream acoustic parameter is derived from the HSV form of a
//! pixel, using integer-truncated hue/saturation/value. Truncation (not
//! rounding) is load-bearing: run coalescing in [`crate::scan`] compares
//! mapped notes for equality, and those comparisons only behave if two
//! nearby colors truncate to the same integers.

/// An integer HSV sample derived from one pixel.
///
/// Invariants hold by construction: `h ∈ [0, 360)`, `s ∈ [0, 100]`,
/// `v ∈ [0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsv {
    /// Hue in degrees, `0..360`.
    pub h: u16,
    /// Saturation in percent, `0..=100`.
    pub s: u8,
    /// Value (brightness) in percent, `0..=100`.
    pub v: u8,
}

/// Convert an 8-bit RGB triple to integer HSV.
///
/// Channels are normalized to `[0, 1]`, run through the standard
/// hue/saturation/value formulas, then scaled to degrees/percent and
/// truncated toward zero.
///
/// # Example
/// ```
/// use pictone::color::rgb_to_hsv;
///
/// let red = rgb_to_hsv(255, 0, 0);
/// assert_eq!((red.h, red.s, red.v), (0, 100, 100));
///
/// let blue = rgb_to_hsv(0, 0, 255);
/// assert_eq!((blue.h, blue.s, blue.v), (240, 100, 100));
/// ```
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> Hsv {
    let r = r as f64 / 255.0;
    let g = g as f64 / 255.0;
    let b = b as f64 / 255.0;

    let maxc = r.max(g).max(b);
    let minc = r.min(g).min(b);
    let v = maxc;

    if maxc == minc {
        // Achromatic: hue and saturation collapse to zero.
        return Hsv {
            h: 0,
            s: 0,
            v: (v * 100.0) as u8,
        };
    }

    let s = (maxc - minc) / maxc;
    let span = maxc - minc;
    let rc = (maxc - r) / span;
    let gc = (maxc - g) / span;
    let bc = (maxc - b) / span;

    let h = if r == maxc {
        bc - gc
    } else if g == maxc {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };
    let h = (h / 6.0).rem_euclid(1.0);

    Hsv {
        h: (h * 360.0) as u16,
        s: (s * 100.0) as u8,
        v: (v * 100.0) as u8,
    }
}
