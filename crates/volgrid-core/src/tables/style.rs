//! Styling configuration for table construction.
//!
//! [`GridStyle`] is an explicitly constructed, immutable value passed into
//! the [`TableBuilder`](super::TableBuilder); nothing here is ambient
//! state. The defaults reproduce the production color scheme: a
//! red/white/green diverging palette, softened by alpha over a white page.

/// An RGBA color with channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    /// Red channel.
    pub r: f64,
    /// Green channel.
    pub g: f64,
    /// Blue channel.
    pub b: f64,
    /// Alpha channel.
    pub a: f64,
}

impl Rgba {
    /// Creates a color from channel values.
    #[must_use]
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a fully opaque color.
    #[must_use]
    pub const fn opaque(r: f64, g: f64, b: f64) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Creates an opaque color from 8-bit channels.
    #[must_use]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self::opaque(f64::from(r) / 255.0, f64::from(g) / 255.0, f64::from(b) / 255.0)
    }

    /// Composites the color over a white background, returning 8-bit RGB.
    #[must_use]
    pub fn over_white(&self) -> [u8; 3] {
        let blend = |c: f64| -> u8 {
            let v = self.a * c + (1.0 - self.a);
            (v.clamp(0.0, 1.0) * 255.0).round() as u8
        };
        [blend(self.r), blend(self.g), blend(self.b)]
    }

    fn lerp(self, other: Self, t: f64) -> Self {
        let mix = |a: f64, b: f64| a + (b - a) * t;
        Self::new(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
            mix(self.a, other.a),
        )
    }
}

/// A linear-segmented colormap over evenly spaced stops.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorMap {
    stops: Vec<Rgba>,
}

impl ColorMap {
    /// Creates a colormap from at least two evenly spaced stops.
    #[must_use]
    pub fn new(stops: Vec<Rgba>) -> Self {
        debug_assert!(stops.len() >= 2, "colormap needs at least two stops");
        Self { stops }
    }

    /// The soft red/white/green palette used for volatility percentiles
    /// (before reversal).
    #[must_use]
    pub fn red_white_green_soft() -> Self {
        Self::new(vec![
            Rgba::new(0.8, 0.2, 0.2, 0.4),
            Rgba::opaque(1.0, 1.0, 1.0),
            Rgba::new(0.2, 0.8, 0.2, 0.4),
        ])
    }

    /// The stronger red/white/green palette used for carry levels.
    #[must_use]
    pub fn red_white_green_strong() -> Self {
        Self::new(vec![
            Rgba::new(0.8, 0.0, 0.0, 0.6),
            Rgba::opaque(1.0, 1.0, 1.0),
            Rgba::new(0.0, 0.8, 0.0, 0.6),
        ])
    }

    /// Returns the colormap with its stops reversed.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let mut stops = self.stops.clone();
        stops.reverse();
        Self { stops }
    }

    /// Samples the colormap at `t` in `0.0..=1.0` (clamped).
    #[must_use]
    pub fn sample(&self, t: f64) -> Rgba {
        let t = if t.is_nan() { 0.5 } else { t.clamp(0.0, 1.0) };
        let segments = self.stops.len() - 1;
        let scaled = t * segments as f64;
        let i = (scaled.floor() as usize).min(segments - 1);
        self.stops[i].lerp(self.stops[i + 1], scaled - i as f64)
    }
}

/// A diverging background color scale over a fixed value range.
///
/// `low` and `high` stretch the effective range to
/// `[vmin - low * range, vmax + high * range]`, so the extremes of the
/// data never reach full palette saturation.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScale {
    /// The palette to sample.
    pub map: ColorMap,
    /// Value mapped toward the low end of the palette.
    pub vmin: f64,
    /// Value mapped toward the high end of the palette.
    pub vmax: f64,
    /// Low-end stretch factor.
    pub low: f64,
    /// High-end stretch factor.
    pub high: f64,
}

impl ColorScale {
    /// Creates a scale over `[vmin, vmax]` with no stretch.
    #[must_use]
    pub fn new(map: ColorMap, vmin: f64, vmax: f64) -> Self {
        Self {
            map,
            vmin,
            vmax,
            low: 0.0,
            high: 0.0,
        }
    }

    /// Sets the low/high stretch factors.
    #[must_use]
    pub fn with_stretch(mut self, low: f64, high: f64) -> Self {
        self.low = low;
        self.high = high;
        self
    }

    /// Maps a value to its palette position in `0.0..=1.0`.
    #[must_use]
    pub fn position(&self, value: f64) -> f64 {
        let range = self.vmax - self.vmin;
        if range <= 0.0 {
            return 0.5;
        }
        let lo = self.vmin - self.low * range;
        let span = range * (1.0 + self.low + self.high);
        ((value - lo) / span).clamp(0.0, 1.0)
    }

    /// Returns the background color for a value.
    #[must_use]
    pub fn color_at(&self, value: f64) -> Rgba {
        self.map.sample(self.position(value))
    }
}

/// An in-cell diverging bar centered at an alignment point.
#[derive(Debug, Clone, PartialEq)]
pub struct BarStyle {
    /// The value the bar grows away from.
    pub align: f64,
    /// Fill for values below the alignment point.
    pub negative: Rgba,
    /// Fill for values above the alignment point.
    pub positive: Rgba,
}

impl BarStyle {
    /// Creates a diverging bar style.
    #[must_use]
    pub fn diverging(align: f64, negative: Rgba, positive: Rgba) -> Self {
        Self {
            align,
            negative,
            positive,
        }
    }
}

/// Immutable styling configuration for the table builder.
#[derive(Debug, Clone, PartialEq)]
pub struct GridStyle {
    /// Color scale for the volatility percentile table (0-100, high
    /// percentiles red).
    pub pctl_scale: ColorScale,
    /// Color scale for the carry row (-5..+5, positive carry green).
    pub carry_scale: ColorScale,
    /// Diverging bar for the 4-week shift table, centered at zero.
    pub shift_bar: BarStyle,
    /// Diverging bar for the carry percentile rows, centered at 50.
    pub carry_bar: BarStyle,
    /// Numeric display precision for every table.
    pub precision: usize,
}

impl Default for GridStyle {
    fn default() -> Self {
        let bar_negative = Rgba::from_u8(0xFF, 0xCC, 0xCB);
        let bar_positive = Rgba::from_u8(0xCB, 0xFF, 0xCC);
        Self {
            pctl_scale: ColorScale::new(ColorMap::red_white_green_soft().reversed(), 0.0, 100.0)
                .with_stretch(0.5, 0.55),
            carry_scale: ColorScale::new(ColorMap::red_white_green_strong(), -5.0, 5.0)
                .with_stretch(0.5, 0.55),
            shift_bar: BarStyle::diverging(0.0, bar_negative, bar_positive),
            carry_bar: BarStyle::diverging(50.0, bar_negative, bar_positive),
            precision: 2,
        }
    }
}
