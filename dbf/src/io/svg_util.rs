use std::fmt::{Display, Formatter};
use std::str::FromStr;

use anyhow::{Result, ensure};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sheetpack::geometry::primitives::Rect;
use svg::node::element::Rectangle;

#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct SvgDrawOptions {
    ///The theme to use for the svg
    #[serde(default)]
    pub theme: SvgSheetTheme,
    ///Write the id of every item on top of it
    #[serde(default)]
    pub item_labels: bool,
    ///Draw the margin band surrounding every item
    #[serde(default)]
    pub margins: bool,
    ///Draw the free rectangles left on the sheet after it was sealed
    #[serde(default)]
    pub free_rects: bool,
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgSheetTheme::default(),
            item_labels: true,
            margins: true,
            free_rects: false,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct SvgSheetTheme {
    pub stroke_width_multiplier: f32,
    pub sheet_fill: Color,
    pub item_fill: Color,
    pub margin_fill: Color,
    pub free_rect_stroke: Color,
}

impl Default for SvgSheetTheme {
    fn default() -> Self {
        SvgSheetTheme::EARTH_TONES
    }
}

impl SvgSheetTheme {
    pub const EARTH_TONES: SvgSheetTheme = SvgSheetTheme {
        stroke_width_multiplier: 2.0,
        sheet_fill: Color(0xCC, 0x82, 0x4A),
        item_fill: Color(0xFF, 0xC8, 0x79),
        margin_fill: Color(0xE6, 0xA5, 0x62),
        free_rect_stroke: Color(0x00, 0x80, 0x00), // GREEN
    };

    pub const GRAY: SvgSheetTheme = SvgSheetTheme {
        stroke_width_multiplier: 2.5,
        sheet_fill: Color(0xD3, 0xD3, 0xD3),
        item_fill: Color(0x7A, 0x7A, 0x7A),
        margin_fill: Color(0xA8, 0xA8, 0xA8),
        free_rect_stroke: Color(0xD0, 0x00, 0x00), // RED
    };
}

pub fn change_brightness(color: Color, fraction: f32) -> Color {
    let Color(r, g, b) = color;

    let r = (r as f32 * fraction) as u8;
    let g = (g as f32 * fraction) as u8;
    let b = (b as f32 * fraction) as u8;
    Color(r, g, b)
}

pub fn rect_to_svg(rect: &Rect, params: &[(&str, &str)]) -> Rectangle {
    params.iter().fold(
        Rectangle::new()
            .set("x", rect.x)
            .set("y", rect.y)
            .set("width", rect.w)
            .set("height", rect.h),
        |r, (k, v)| r.set(*k, *v),
    )
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Color(pub u8, pub u8, pub u8);

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl FromStr for Color {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        ensure!(
            hex.len() == 6 && hex.is_ascii(),
            "invalid color: {s:?}, expected #RRGGBB"
        );
        let r = u8::from_str_radix(&hex[0..2], 16)?;
        let g = u8::from_str_radix(&hex[2..4], 16)?;
        let b = u8::from_str_radix(&hex[4..6], 16)?;
        Ok(Color(r, g, b))
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
