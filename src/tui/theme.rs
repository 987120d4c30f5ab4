//! Colour palette per theme plus the small colour math used for fades
//! and gradient overlays.

use ratatui::style::{Color, Modifier, Style};

use crate::core::config::Theme;

/// Selected-card border and counter buttons.
pub const AMBER: Color = Color::Rgb(245, 158, 11);
/// "Book Now" button.
pub const ORANGE: Color = Color::Rgb(249, 115, 22);
/// Headline text on hero images.
pub const GOLD: Color = Color::Rgb(255, 215, 0);
pub const STAR: Color = Color::Rgb(255, 213, 74);
pub const PRICE: Color = Color::Rgb(154, 107, 0);
pub const FOOTER_BG: Color = Color::Rgb(17, 18, 26);
pub const WHITE: Color = Color::Rgb(255, 255, 255);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub card: Color,
    pub text: Color,
    pub muted: Color,
    pub panel_text: Color,
    pub border: Color,
    /// Status bar; light text on dark themes and vice versa.
    pub status: Style,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                background: Color::Rgb(17, 18, 26),
                card: Color::Rgb(30, 31, 44),
                text: Color::Rgb(235, 235, 240),
                muted: Color::Rgb(150, 150, 160),
                panel_text: Color::Rgb(200, 200, 210),
                border: Color::Rgb(60, 62, 80),
                status: Style::default()
                    .fg(Color::White)
                    .bg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            },
            Theme::Light => Self {
                background: Color::Rgb(247, 247, 251),
                card: Color::Rgb(255, 255, 255),
                text: Color::Rgb(34, 34, 34),
                muted: Color::Rgb(102, 102, 102),
                panel_text: Color::Rgb(68, 68, 68),
                border: Color::Rgb(238, 238, 238),
                status: Style::default()
                    .fg(Color::Black)
                    .bg(Color::White)
                    .add_modifier(Modifier::BOLD),
            },
        }
    }
}

/// Linear blend from `from` to `to`. Only RGB colours blend; anything
/// else switches over at the halfway point.
pub fn blend(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ if t < 0.5 => from,
        _ => to,
    }
}

/// Darken toward black by `amount` in [0, 1].
pub fn darken(color: Color, amount: f32) -> Color {
    blend(color, Color::Rgb(0, 0, 0), amount)
}
