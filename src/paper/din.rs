//! ISO 216, ISO 269 and DIN 476 paper sizes.

use serde::{Deserialize, Serialize};

const MM_PER_INCH: f64 = 25.4;
const POINTS_PER_INCH: f64 = 72.0;

/// DIN/ISO paper size series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaperSeries {
    /// ISO 216 A series.
    A,
    /// ISO 216 B series.
    B,
    /// ISO 269 C series (envelopes).
    C,
    /// DIN 476 D series.
    D,
    /// DIN lang envelope.
    Dl,
}

macro_rules! paper_sizes {
    ($($variant:ident => $series:ident, $w:expr, $h:expr;)*) => {
        /// Standard paper size with portrait dimensions in millimetres.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum PaperSize {
            $($variant,)*
        }

        impl PaperSize {
            /// Every size, series by series, largest first.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)*];

            /// Name such as `A4` or `DL`.
            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant),)*
                }
            }

            pub fn series(&self) -> PaperSeries {
                match self {
                    $(Self::$variant => PaperSeries::$series,)*
                }
            }

            /// Portrait width (short edge).
            pub fn width_mm(&self) -> u32 {
                match self {
                    $(Self::$variant => $w,)*
                }
            }

            /// Portrait height (long edge).
            pub fn height_mm(&self) -> u32 {
                match self {
                    $(Self::$variant => $h,)*
                }
            }
        }
    };
}

paper_sizes! {
    A0 => A, 841, 1189;
    A1 => A, 594, 841;
    A2 => A, 420, 594;
    A3 => A, 297, 420;
    A4 => A, 210, 297;
    A5 => A, 148, 210;
    A6 => A, 105, 148;
    A7 => A, 74, 105;
    A8 => A, 52, 74;
    A9 => A, 37, 52;
    A10 => A, 26, 37;
    B0 => B, 1000, 1414;
    B1 => B, 707, 1000;
    B2 => B, 500, 707;
    B3 => B, 353, 500;
    B4 => B, 250, 353;
    B5 => B, 176, 250;
    B6 => B, 125, 176;
    B7 => B, 88, 125;
    B8 => B, 62, 88;
    B9 => B, 44, 62;
    B10 => B, 31, 44;
    C0 => C, 917, 1297;
    C1 => C, 648, 917;
    C2 => C, 458, 648;
    C3 => C, 324, 458;
    C4 => C, 229, 324;
    C5 => C, 162, 229;
    C6 => C, 114, 162;
    C7 => C, 81, 114;
    C8 => C, 57, 81;
    C9 => C, 40, 57;
    C10 => C, 28, 40;
    D0 => D, 771, 1090;
    D1 => D, 545, 771;
    D2 => D, 385, 545;
    D3 => D, 272, 385;
    D4 => D, 192, 272;
    D5 => D, 136, 192;
    D6 => D, 96, 136;
    D7 => D, 68, 96;
    D8 => D, 48, 68;
    DL => Dl, 110, 220;
}

fn mm_to(mm: u32, units_per_inch: f64) -> u32 {
    (f64::from(mm) * units_per_inch / MM_PER_INCH).round() as u32
}

impl PaperSize {
    /// Look up a size by name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|size| size.name().eq_ignore_ascii_case(name))
    }

    /// Width in pixels at `dpi`, rounded to the nearest pixel.
    pub fn width_px(&self, dpi: u32) -> u32 {
        mm_to(self.width_mm(), f64::from(dpi))
    }

    pub fn height_px(&self, dpi: u32) -> u32 {
        mm_to(self.height_mm(), f64::from(dpi))
    }

    /// Width in PostScript points (1/72 inch).
    pub fn width_pt(&self) -> u32 {
        mm_to(self.width_mm(), POINTS_PER_INCH)
    }

    pub fn height_pt(&self) -> u32 {
        mm_to(self.height_mm(), POINTS_PER_INCH)
    }

    /// `(width, height)` in millimetres with the long edge horizontal.
    pub fn landscape_mm(&self) -> (u32, u32) {
        (self.height_mm(), self.width_mm())
    }

    /// `(width, height)` in millimetres with the long edge vertical.
    pub fn portrait_mm(&self) -> (u32, u32) {
        (self.width_mm(), self.height_mm())
    }

    /// Sizes belonging to one series.
    pub fn of_series(series: PaperSeries) -> impl Iterator<Item = Self> {
        Self::ALL
            .iter()
            .copied()
            .filter(move |size| size.series() == series)
    }
}

impl std::fmt::Display for PaperSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a4() {
        let a4 = PaperSize::A4;
        assert_eq!((a4.width_mm(), a4.height_mm()), (210, 297));
        assert_eq!((a4.width_px(300), a4.height_px(300)), (2480, 3508));
        assert_eq!((a4.width_px(72), a4.height_px(72)), (595, 842));
        assert_eq!((a4.width_pt(), a4.height_pt()), (595, 842));
        assert_eq!(a4.landscape_mm(), (297, 210));
    }

    #[test]
    fn names() {
        assert_eq!(PaperSize::from_name("a4"), Some(PaperSize::A4));
        assert_eq!(PaperSize::from_name("DL"), Some(PaperSize::DL));
        assert_eq!(PaperSize::from_name("A11"), None);
        assert_eq!(PaperSize::C10.to_string(), "C10");
    }

    #[test]
    fn series_sizes() {
        assert_eq!(PaperSize::of_series(PaperSeries::A).count(), 11);
        assert_eq!(PaperSize::of_series(PaperSeries::B).count(), 11);
        assert_eq!(PaperSize::of_series(PaperSeries::C).count(), 11);
        assert_eq!(PaperSize::of_series(PaperSeries::D).count(), 9);
        assert_eq!(PaperSize::DL.series(), PaperSeries::Dl);
    }

    #[test]
    fn each_size_halves_the_previous() {
        for pair in PaperSize::ALL.windows(2) {
            let (big, small) = (pair[0], pair[1]);
            if big.series() != small.series() {
                continue;
            }
            assert_eq!(small.height_mm(), big.width_mm(), "{big} -> {small}");
            assert!(small.width_mm() <= big.height_mm() / 2 + 1, "{big} -> {small}");
            assert!(small.width_mm() + 1 >= big.height_mm() / 2, "{big} -> {small}");
        }
    }
}
