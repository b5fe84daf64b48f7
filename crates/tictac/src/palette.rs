//! Interpreting the engine's opaque player color tokens.

use tictac_engine::{DEFAULT_COLOR_ONE, DEFAULT_COLOR_TWO, PlayerId};
use tracing::{instrument, warn};

/// A 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Builds a color from channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#rrggbb`, `#rgb` or a basic color name.
    pub fn parse(token: &str) -> Option<Self> {
        let token = token.trim();
        if let Some(hex) = token.strip_prefix('#') {
            return parse_hex(hex);
        }
        named(&token.to_ascii_lowercase())
    }

    /// Resolves a player's token, falling back to the seat default.
    #[instrument]
    pub fn for_player(token: &str, seat: PlayerId) -> Self {
        Self::parse(token).unwrap_or_else(|| {
            warn!(token, "Unknown color token, using seat default");
            let fallback = match seat {
                PlayerId::One => DEFAULT_COLOR_ONE,
                PlayerId::Two => DEFAULT_COLOR_TWO,
            };
            Self::parse(fallback).unwrap_or(Self::new(255, 255, 255))
        })
    }
}

fn parse_hex(hex: &str) -> Option<Rgb> {
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        6 if hex.is_ascii() => Some(Rgb::new(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        3 if hex.is_ascii() => {
            let short = |i: usize| channel(&hex[i..=i]).map(|v| v * 17);
            Some(Rgb::new(short(0)?, short(1)?, short(2)?))
        }
        _ => None,
    }
}

fn named(name: &str) -> Option<Rgb> {
    let rgb = match name {
        "red" => Rgb::new(214, 69, 65),
        "blue" => Rgb::new(42, 157, 244),
        "green" => Rgb::new(46, 160, 67),
        "yellow" => Rgb::new(230, 190, 40),
        "magenta" => Rgb::new(200, 60, 200),
        "cyan" => Rgb::new(40, 190, 200),
        "orange" => Rgb::new(240, 148, 0),
        "white" => Rgb::new(255, 255, 255),
        "black" => Rgb::new(0, 0, 0),
        _ => return None,
    };
    Some(rgb)
}

impl From<Rgb> for ratatui::style::Color {
    fn from(c: Rgb) -> Self {
        ratatui::style::Color::Rgb(c.r, c.g, c.b)
    }
}

impl From<Rgb> for crossterm::style::Color {
    fn from(c: Rgb) -> Self {
        crossterm::style::Color::Rgb {
            r: c.r,
            g: c.g,
            b: c.b,
        }
    }
}
