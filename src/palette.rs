// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Maps an iteration count onto a color.
//!
//! Colors travel through the renderer as packed 24-bit integers,
//! `0xRRGGBB`, one `u32` per pixel.  The display and the screenshot
//! code unpack them again when they need bytes.

/// An 8-bit-per-channel color.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Packs the channels as `(r << 16) | (g << 8) | b`.
    pub fn pack(self) -> u32 {
        (u32::from(self.0) << 16) | (u32::from(self.1) << 8) | u32::from(self.2)
    }

    /// The inverse of `pack`.  Anything above the low 24 bits is ignored.
    pub fn unpack(packed: u32) -> Rgb {
        Rgb(
            ((packed >> 16) & 0xff) as u8,
            ((packed >> 8) & 0xff) as u8,
            (packed & 0xff) as u8,
        )
    }
}

/// Black.
pub const BLACK: Rgb = Rgb(0, 0, 0);
/// White.
pub const WHITE: Rgb = Rgb(255, 255, 255);

/// The four escape bands of the banded palette, slowest-escaping last.
pub const BANDS: [Rgb; 4] = [
    Rgb(0, 15, 0),
    Rgb(0, 128, 0),
    Rgb(154, 215, 50),
    Rgb(173, 255, 47),
];

/// The two ways of turning an iteration count into a color.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Palette {
    /// Points that never escape are black; the rest fall into one of
    /// four quarter-of-the-cap bands of increasingly bright green.
    Banded,
    /// Points that never escape are white, everything else is black.
    Binary,
}

impl Palette {
    /// The color for a point that survived `iters` out of `cap`
    /// iterations.  Band edges use integer division, so with a cap of
    /// 50 the edges sit at 12, 25 and 37, and a count sitting exactly on
    /// an edge belongs to the band above it.
    pub fn color(self, iters: usize, cap: usize) -> Rgb {
        match self {
            Palette::Banded => {
                if iters == cap {
                    BLACK
                } else if iters < cap / 4 {
                    BANDS[0]
                } else if iters < cap * 2 / 4 {
                    BANDS[1]
                } else if iters < cap * 3 / 4 {
                    BANDS[2]
                } else {
                    BANDS[3]
                }
            }
            Palette::Binary => {
                if iters == cap {
                    WHITE
                } else {
                    BLACK
                }
            }
        }
    }

    /// `color`, packed.
    #[inline]
    pub fn packed(self, iters: usize, cap: usize) -> u32 {
        self.color(iters, cap).pack()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packing_puts_red_on_top() {
        assert_eq!(Rgb(0x12, 0x34, 0x56).pack(), 0x0012_3456);
        assert_eq!(WHITE.pack(), 0x00ff_ffff);
        assert_eq!(BLACK.pack(), 0);
    }

    #[test]
    fn unpack_reverses_pack() {
        for &r in &[0u8, 1, 127, 128, 254, 255] {
            for &g in &[0u8, 15, 128, 255] {
                for &b in &[0u8, 47, 50, 255] {
                    assert_eq!(Rgb::unpack(Rgb(r, g, b).pack()), Rgb(r, g, b));
                }
            }
        }
    }

    #[test]
    fn banded_edges_for_a_cap_of_fifty() {
        let p = Palette::Banded;
        assert_eq!(p.color(0, 50), BANDS[0]);
        assert_eq!(p.color(11, 50), BANDS[0]);
        assert_eq!(p.color(12, 50), BANDS[1]);
        assert_eq!(p.color(24, 50), BANDS[1]);
        assert_eq!(p.color(25, 50), BANDS[2]);
        assert_eq!(p.color(36, 50), BANDS[2]);
        assert_eq!(p.color(37, 50), BANDS[3]);
        assert_eq!(p.color(49, 50), BANDS[3]);
        assert_eq!(p.color(50, 50), BLACK);
    }

    #[test]
    fn binary_only_cares_about_the_cap() {
        let p = Palette::Binary;
        assert_eq!(p.color(50, 50), WHITE);
        assert_eq!(p.color(49, 50), BLACK);
        assert_eq!(p.color(0, 50), BLACK);
        assert_eq!(p.packed(7, 7), 0x00ff_ffff);
    }
}
