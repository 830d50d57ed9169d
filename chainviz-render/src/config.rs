//! Configuration types for chart rendering
//!
//! Level 4 - Utilities and configuration

use chainviz_core::Player;
use serde::Serialize;

/// Base heatmap figure size in pixels at scale 1.0
pub const HEATMAP_SIZE: (u32, u32) = (1000, 800);
/// Base win-rate figure size in pixels at scale 1.0
pub const WIN_RATE_SIZE: (u32, u32) = (1000, 600);
/// Base runtime figure size in pixels at scale 1.0
pub const RUNTIME_SIZE: (u32, u32) = (1600, 600);

/// Smallest accepted size multiplier
pub const MIN_SCALE: f64 = 0.25;
/// Largest accepted size multiplier (runtime figure 6400x2400)
pub const MAX_SCALE: f64 = 4.0;

/// Plain RGB colour, serialized as `#rrggbb`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub struct ChartColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ChartColor {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const WHITE: ChartColor = ChartColor::rgb(255, 255, 255);
    pub const BLACK: ChartColor = ChartColor::rgb(0, 0, 0);

    /// Linear blend, `t` in 0.0..=1.0
    pub fn lerp(self, other: ChartColor, t: f64) -> ChartColor {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        ChartColor::rgb(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }

    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<ChartColor> for String {
    fn from(color: ChartColor) -> String {
        color.hex()
    }
}

/// Sequential colour ramps for bar charts
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Ramp {
    Viridis,
    Plasma,
    Cividis,
}

impl Ramp {
    fn stops(self) -> &'static [ChartColor] {
        const VIRIDIS: [ChartColor; 5] = [
            ChartColor::rgb(0x44, 0x01, 0x54),
            ChartColor::rgb(0x3b, 0x52, 0x8b),
            ChartColor::rgb(0x21, 0x91, 0x8c),
            ChartColor::rgb(0x5e, 0xc9, 0x62),
            ChartColor::rgb(0xfd, 0xe7, 0x25),
        ];
        const PLASMA: [ChartColor; 5] = [
            ChartColor::rgb(0x0d, 0x08, 0x87),
            ChartColor::rgb(0x7e, 0x03, 0xa8),
            ChartColor::rgb(0xcc, 0x47, 0x78),
            ChartColor::rgb(0xf8, 0x95, 0x40),
            ChartColor::rgb(0xf0, 0xf9, 0x21),
        ];
        const CIVIDIS: [ChartColor; 5] = [
            ChartColor::rgb(0x00, 0x22, 0x4e),
            ChartColor::rgb(0x3b, 0x49, 0x6c),
            ChartColor::rgb(0x7c, 0x7b, 0x78),
            ChartColor::rgb(0xbc, 0xaf, 0x6f),
            ChartColor::rgb(0xfe, 0xe8, 0x38),
        ];

        match self {
            Ramp::Viridis => &VIRIDIS,
            Ramp::Plasma => &PLASMA,
            Ramp::Cividis => &CIVIDIS,
        }
    }

    /// Sample at `t` in 0.0..=1.0
    pub fn sample(self, t: f64) -> ChartColor {
        let stops = self.stops();
        let scaled = t.clamp(0.0, 1.0) * (stops.len() - 1) as f64;
        let lower = (scaled.floor() as usize).min(stops.len() - 2);
        stops[lower].lerp(stops[lower + 1], scaled - lower as f64)
    }

    /// Colour for bar `index` of `count`, spread evenly over the ramp.
    ///
    /// Stays clear of the brightest end so white labels remain readable.
    pub fn pick(self, index: usize, count: usize) -> ChartColor {
        if count <= 1 {
            return self.sample(0.0);
        }
        self.sample(index as f64 / (count - 1) as f64 * 0.85)
    }
}

/// Colours of an outcome grid
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HeatmapStyle {
    /// Fill for cells the row player lost
    pub loss: ChartColor,
    /// Fill for cells the row player won
    pub win: ChartColor,
    /// Fill for undefined cells (diagonal, unplayed)
    pub undefined: ChartColor,
    /// Lines between cells
    pub grid_line: ChartColor,
    /// Annotation text
    pub text: ChartColor,
}

impl HeatmapStyle {
    /// Red perspective wins in green, Blue perspective wins in blue
    pub fn for_perspective(player: Player) -> Self {
        let win = match player {
            Player::Red => ChartColor::rgb(0x90, 0xee, 0x90),
            Player::Blue => ChartColor::rgb(0x89, 0xcf, 0xf0),
        };
        Self {
            loss: ChartColor::rgb(0xff, 0x99, 0x99),
            win,
            undefined: ChartColor::rgb(0xf2, 0xf2, 0xf2),
            grid_line: ChartColor::WHITE,
            text: ChartColor::BLACK,
        }
    }
}

/// Colours of a bar chart
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BarStyle {
    pub ramp: Ramp,
    /// Value label text
    pub label: ChartColor,
}

impl BarStyle {
    pub fn new(ramp: Ramp) -> Self {
        Self {
            ramp,
            label: ChartColor::WHITE,
        }
    }
}

/// Render configuration for all figures
#[derive(Clone, Debug)]
pub struct RenderConfig {
    /// Multiplier applied to every pixel size and font size
    pub scale: f64,
    /// Font family for captions and labels
    pub font_family: String,
    /// Win-rate bars
    pub win_rate_bars: BarStyle,
    /// Runtime bars, heuristic as first player
    pub runtime_first_bars: BarStyle,
    /// Runtime bars, heuristic as second player
    pub runtime_second_bars: BarStyle,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            scale: 1.0,
            font_family: "sans-serif".to_string(),
            win_rate_bars: BarStyle::new(Ramp::Viridis),
            runtime_first_bars: BarStyle::new(Ramp::Plasma),
            runtime_second_bars: BarStyle::new(Ramp::Cividis),
        }
    }
}

impl RenderConfig {
    /// Set the size multiplier, clamped to `MIN_SCALE..=MAX_SCALE`.
    /// Non-positive or non-finite values fall back to 1.0.
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = if scale.is_finite() && scale > 0.0 {
            scale.clamp(MIN_SCALE, MAX_SCALE)
        } else {
            1.0
        };
        self
    }

    /// Scale a base pixel length
    pub fn px(&self, base: u32) -> u32 {
        ((base as f64 * self.scale).round() as u32).max(1)
    }

    /// Scaled length for plotters size parameters (margins, label areas)
    pub fn size(&self, base: u32) -> i32 {
        self.px(base) as i32
    }

    /// Scale a base figure size
    pub fn figure(&self, base: (u32, u32)) -> (u32, u32) {
        (self.px(base.0), self.px(base.1))
    }

    /// Font spec for plotters: (family, scaled size)
    pub fn font(&self, base: u32) -> (&str, u32) {
        (self.font_family.as_str(), self.px(base))
    }
}
