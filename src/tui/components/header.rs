//! Banner at the top of the destination screen: country name, tagline,
//! a short pitch, and current weather in the corner.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Widget, Wrap};

use crate::tui::components::artwork::Artwork;
use crate::tui::theme::{self, GOLD, WHITE};

pub const HEADER_HEIGHT: u16 = 9;

pub const COUNTRY: &str = "Gambia";
pub const TAGLINE: &str = "The Smiling Coast of Africa";
pub const PITCH: &str = "Discover the beauty of Gambia, the ultimate stop to cultural \
    richness, wildlife, and serene beaches.";
pub const WEATHER: &str = "☀ 28°C  GM ";

pub struct CountryHeader {
    pub artwork: Artwork,
}

impl Widget for CountryHeader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for row in 0..area.height {
            let t = row as f32 / area.height.max(1) as f32;
            let shade = theme::darken(self.artwork.color, t * 0.7);
            buf.set_style(
                Rect::new(area.x, area.y + row, area.width, 1),
                Style::default().bg(shade),
            );
        }
        let bottom = theme::darken(self.artwork.color, 0.7);

        let inner = Rect {
            x: area.x + 2,
            width: area.width.saturating_sub(4),
            ..area
        };
        let [weather, _, title, tagline, pitch] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(2),
        ])
        .areas(inner);

        Paragraph::new(Line::from(WEATHER).right_aligned())
            .style(Style::default().fg(WHITE).add_modifier(Modifier::BOLD))
            .render(weather, buf);
        Paragraph::new(COUNTRY)
            .style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD))
            .render(title, buf);
        Paragraph::new(TAGLINE)
            .style(Style::default().fg(theme::blend(bottom, WHITE, 0.95)))
            .render(tagline, buf);
        Paragraph::new(PITCH)
            .style(Style::default().fg(theme::blend(bottom, WHITE, 0.92)))
            .wrap(Wrap { trim: true })
            .render(pitch, buf);
    }
}
