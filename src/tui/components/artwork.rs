//! # Artwork
//!
//! Terminals cannot show the photographs the catalog refers to, so each
//! `ImageRef` resolves to a coloured swatch with a glyph. The resolver is
//! a trait so a richer backend (sixel, kitty graphics) can slot in later.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Widget};

use crate::core::catalog::ImageRef;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Artwork {
    pub color: Color,
    pub glyph: &'static str,
}

impl Artwork {
    pub const PLACEHOLDER: Artwork = Artwork {
        color: Color::Rgb(90, 90, 100),
        glyph: "?",
    };
}

/// Turns an opaque image handle into something drawable.
pub trait ImageResolver {
    fn resolve(&self, image: &ImageRef) -> Artwork;
}

/// Swatches for the images bundled with the app.
#[derive(Debug, Default, Clone, Copy)]
pub struct BundledArtwork;

impl ImageResolver for BundledArtwork {
    fn resolve(&self, image: &ImageRef) -> Artwork {
        let (color, glyph) = match image.as_str() {
            "kunta-kinteh" => (Color::Rgb(139, 94, 60), "⌂"),
            "bijilo-forest" => (Color::Rgb(34, 120, 50), "♣"),
            "sanyang-beach" => (Color::Rgb(0, 140, 190), "≈"),
            "gambia" => (Color::Rgb(196, 98, 16), "☀"),
            "golden-shore" => (Color::Rgb(214, 160, 40), "≈"),
            _ => return Artwork::PLACEHOLDER,
        };
        Artwork { color, glyph }
    }
}

/// A filled block with the glyph centred.
pub struct Swatch(pub Artwork);

impl Widget for Swatch {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let style = Style::default().bg(self.0.color).fg(Color::White);
        let middle = area.height / 2;
        let lines: Vec<Line> = (0..area.height)
            .map(|row| {
                if row == middle {
                    Line::from(self.0.glyph)
                } else {
                    Line::from("")
                }
            })
            .collect();
        Paragraph::new(lines)
            .style(style)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_images_resolve() {
        let art = BundledArtwork.resolve(&ImageRef::new("sanyang-beach"));
        assert_eq!(art.glyph, "≈");
        assert_ne!(art, Artwork::PLACEHOLDER);
    }

    #[test]
    fn test_unknown_image_gets_placeholder() {
        let art = BundledArtwork.resolve(&ImageRef::new("atlantis"));
        assert_eq!(art, Artwork::PLACEHOLDER);
    }

    #[test]
    fn test_swatch_fills_background() {
        let area = Rect::new(0, 0, 6, 3);
        let mut buf = Buffer::empty(area);
        Swatch(Artwork::PLACEHOLDER).render(area, &mut buf);
        assert_eq!(buf[(0, 0)].bg, Artwork::PLACEHOLDER.color);
        assert_eq!(buf[(5, 2)].bg, Artwork::PLACEHOLDER.color);
        let middle: String = (0..6).map(|x| buf[(x, 1)].symbol().to_string()).collect();
        assert_eq!(middle.trim(), "?");
    }
}
