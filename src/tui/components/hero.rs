//! # Hero Screen
//!
//! Full-bleed image with a darkening gradient toward the bottom, a gold
//! headline, a subtitle and a single call-to-action button.
//!
//! The button's position comes from [`HeroScreen::button_area`], which the
//! hit tester calls with the same area so clicks line up with what was
//! drawn.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Wrap};

use crate::core::catalog::ImageRef;
use crate::tui::component::Component;
use crate::tui::components::artwork::ImageResolver;
use crate::tui::theme::{self, GOLD, WHITE};

pub const TITLE: &str = "Journey To The Golden Shore";
pub const SUBTITLE: &str = "The Ultimate Stop To Success And Happiness";
pub const BUTTON: &str = "Start Swimming";

const BUTTON_BG: Color = Color::Rgb(255, 179, 0);
/// Darkest point of the overlay gradient (at the bottom edge).
const OVERLAY_MAX: f32 = 0.65;

pub struct HeroScreen<'a> {
    pub resolver: &'a dyn ImageResolver,
}

impl<'a> HeroScreen<'a> {
    pub fn new(resolver: &'a dyn ImageResolver) -> Self {
        Self { resolver }
    }

    /// Title, subtitle and button areas, anchored near the bottom.
    fn content_areas(area: Rect) -> [Rect; 3] {
        let inner = Rect {
            x: area.x + 3u16.min(area.width / 2),
            width: area.width.saturating_sub(6),
            ..area
        };
        let [_, title, subtitle, _, button, _] = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(2),
        ])
        .areas(inner);
        [title, subtitle, button]
    }

    pub fn button_area(area: Rect) -> Rect {
        Self::content_areas(area)[2]
    }
}

impl Component for HeroScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let art = self.resolver.resolve(&ImageRef::new("golden-shore"));

        // Background with a top-to-bottom darkening overlay, one row at a time.
        for row in 0..area.height {
            let t = row as f32 / area.height.max(1) as f32;
            let shade = theme::darken(art.color, t * OVERLAY_MAX);
            let line = Rect::new(area.x, area.y + row, area.width, 1);
            frame.render_widget(Paragraph::new("").style(Style::default().bg(shade)), line);
        }

        let [title, subtitle, button] = Self::content_areas(area);
        let bottom_shade = theme::darken(art.color, OVERLAY_MAX);

        frame.render_widget(
            Paragraph::new(TITLE)
                .style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD))
                .wrap(Wrap { trim: true }),
            title,
        );
        frame.render_widget(
            Paragraph::new(SUBTITLE)
                .style(Style::default().fg(theme::blend(bottom_shade, WHITE, 0.9)))
                .wrap(Wrap { trim: true }),
            subtitle,
        );

        let label = Paragraph::new(vec![Line::from(""), Line::from(BUTTON)])
            .style(
                Style::default()
                    .fg(WHITE)
                    .bg(BUTTON_BG)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center);
        frame.render_widget(label, button);
    }
}
