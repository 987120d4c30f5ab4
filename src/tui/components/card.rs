//! # Destination Card
//!
//! One row of the destination list: a bordered card plus the animated
//! description panel that unfolds below it.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │▓▓▓▓▓▓▓▓ Kunta Kinteh Island         5,000 D  │
//! │▓▓▓⌂▓▓▓▓                                      │
//! │▓▓▓▓▓▓▓▓ ★ 4.8                       Selected │
//! └──────────────────────────────────────────────┘
//!   A historical heritage site harboring tales     ← panel, height and
//!   of slavery in Africa, symbolizing ...            colour follow progress
//! ```
//!
//! Both are plain ratatui `Widget`s so the list can draw them into its
//! scroll buffer.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::animation::interpolate;
use crate::core::catalog::Destination;
use crate::tui::components::artwork::{Artwork, Swatch};
use crate::tui::theme::{self, AMBER, PRICE, Palette, STAR};

/// Card height including borders.
pub const CARD_HEIGHT: u16 = 5;
const SWATCH_WIDTH: u16 = 8;

/// Rows the description panel occupies at `progress`.
pub fn panel_height(progress: f32, max_rows: u16) -> u16 {
    interpolate(progress, (0.0, 1.0), (0.0, max_rows as f32)).round() as u16
}

pub struct DestinationCard<'a> {
    pub destination: &'a Destination,
    pub price_label: String,
    pub artwork: Artwork,
    pub selected: bool,
    pub focused: bool,
    pub palette: &'a Palette,
}

impl Widget for DestinationCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.selected {
            Style::default().fg(AMBER).add_modifier(Modifier::BOLD)
        } else if self.focused {
            Style::default().fg(self.palette.text)
        } else {
            Style::default().fg(self.palette.border)
        };
        let block = Block::bordered()
            .border_style(border_style)
            .style(Style::default().bg(self.palette.card));
        let inner = block.inner(area);
        block.render(area, buf);

        let [swatch, _, content] = Layout::horizontal([
            Constraint::Length(SWATCH_WIDTH),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(inner);
        Swatch(self.artwork).render(swatch, buf);

        let width = content.width as usize;
        let name = Span::styled(
            self.destination.name.as_str(),
            Style::default()
                .fg(self.palette.text)
                .add_modifier(Modifier::BOLD),
        );
        let price = Span::styled(
            self.price_label.as_str(),
            Style::default().fg(PRICE).add_modifier(Modifier::BOLD),
        );
        let hint = if self.selected { "Selected" } else { "Tap to open" };

        let lines = vec![
            spread(vec![name], vec![price, Span::raw(" ")], width),
            Line::from(""),
            spread(
                vec![
                    Span::styled("★ ", Style::default().fg(STAR)),
                    Span::styled(
                        self.destination.rating.as_str(),
                        Style::default()
                            .fg(self.palette.muted)
                            .add_modifier(Modifier::BOLD),
                    ),
                ],
                vec![
                    Span::styled(hint, Style::default().fg(self.palette.muted)),
                    Span::raw(" "),
                ],
                width,
            ),
        ];
        Paragraph::new(lines).render(content, buf);
    }
}

/// Left spans, padding, right spans. The left side is truncated when the
/// two do not fit.
fn spread<'a>(left: Vec<Span<'a>>, right: Vec<Span<'a>>, width: usize) -> Line<'a> {
    let right_width: usize = right.iter().map(|s| s.content.width()).sum();
    let budget = width.saturating_sub(right_width + 1);

    let mut used = 0;
    let mut spans = Vec::with_capacity(left.len() + right.len() + 1);
    for span in left {
        let remaining = budget.saturating_sub(used);
        let text = truncate_to_width(&span.content, remaining);
        used += text.width();
        spans.push(Span::styled(text, span.style));
    }
    spans.push(Span::raw(" ".repeat(width.saturating_sub(used + right_width))));
    spans.extend(right);
    Line::from(spans)
}

fn truncate_to_width(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(c);
        used += w;
    }
    if max > 0 {
        out.push('…');
    }
    out
}

/// Description text revealed below a card. Text fades in with `progress`
/// by blending from the card background toward the normal text colour.
pub struct DescriptionPanel<'a> {
    pub text: &'a str,
    pub progress: f32,
    pub palette: &'a Palette,
}

impl DescriptionPanel<'_> {
    /// Wrapped lines for a panel `width` columns wide.
    pub fn wrapped(text: &str, width: u16) -> Vec<String> {
        let inner = width.saturating_sub(4).max(1) as usize;
        textwrap::wrap(text, inner)
            .into_iter()
            .map(|line| line.into_owned())
            .collect()
    }
}

impl Widget for DescriptionPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let fg = theme::blend(self.palette.card, self.palette.panel_text, self.progress);
        let mut wrapped = Self::wrapped(self.text, area.width);
        let rows = area.height as usize;
        if wrapped.len() > rows {
            wrapped.truncate(rows);
            if let Some(last) = wrapped.last_mut() {
                let width = area.width.saturating_sub(4).max(1) as usize;
                *last = truncate_to_width(&format!("{last}…"), width);
            }
        }
        let lines: Vec<Line> = wrapped
            .into_iter()
            .map(|l| Line::from(format!("  {l}")))
            .collect();
        Paragraph::new(lines)
            .style(Style::default().fg(fg).bg(self.palette.card))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Theme;
    use crate::test_support::destination;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_panel_height_interpolates() {
        assert_eq!(panel_height(0.0, 4), 0);
        assert_eq!(panel_height(0.5, 4), 2);
        assert_eq!(panel_height(1.0, 4), 4);
        assert_eq!(panel_height(1.5, 4), 4);
    }

    #[test]
    fn test_spread_pads_to_width() {
        let line = spread(vec![Span::raw("Left")], vec![Span::raw("Right")], 20);
        assert_eq!(line.width(), 20);
    }

    #[test]
    fn test_spread_truncates_long_left_side() {
        let line = spread(
            vec![Span::raw("An extremely long destination name")],
            vec![Span::raw("5,000 D")],
            20,
        );
        assert_eq!(line.width(), 20);
        assert!(line.spans[0].content.ends_with('…'));
    }

    #[test]
    fn test_card_shows_price_and_hint() {
        let palette = Palette::for_theme(Theme::Dark);
        let dest = destination(2, 4000);
        let area = Rect::new(0, 0, 50, CARD_HEIGHT);
        let mut buf = Buffer::empty(area);
        DestinationCard {
            destination: &dest,
            price_label: "4,000 D".to_string(),
            artwork: Artwork::PLACEHOLDER,
            selected: false,
            focused: false,
            palette: &palette,
        }
        .render(area, &mut buf);

        assert!(row_text(&buf, 1).contains("Destination 2"));
        assert!(row_text(&buf, 1).contains("4,000 D"));
        assert!(row_text(&buf, 3).contains("Tap to open"));
    }

    #[test]
    fn test_selected_card_has_amber_border() {
        let palette = Palette::for_theme(Theme::Light);
        let dest = destination(1, 5000);
        let area = Rect::new(0, 0, 50, CARD_HEIGHT);
        let mut buf = Buffer::empty(area);
        DestinationCard {
            destination: &dest,
            price_label: "5,000 D".to_string(),
            artwork: Artwork::PLACEHOLDER,
            selected: true,
            focused: true,
            palette: &palette,
        }
        .render(area, &mut buf);

        assert_eq!(buf[(0, 0)].fg, AMBER);
        assert!(row_text(&buf, 3).contains("Selected"));
    }

    #[test]
    fn test_panel_fades_with_progress() {
        let palette = Palette::for_theme(Theme::Light);
        let area = Rect::new(0, 0, 40, 2);

        let mut faint = Buffer::empty(area);
        DescriptionPanel { text: "Sunsets.", progress: 0.0, palette: &palette }
            .render(area, &mut faint);
        assert_eq!(faint[(2, 0)].fg, palette.card);

        let mut full = Buffer::empty(area);
        DescriptionPanel { text: "Sunsets.", progress: 1.0, palette: &palette }
            .render(area, &mut full);
        assert_eq!(full[(2, 0)].fg, palette.panel_text);
        assert_eq!(full[(2, 0)].symbol(), "S");
    }

    #[test]
    fn test_overflowing_panel_ends_with_ellipsis() {
        let palette = Palette::for_theme(Theme::Dark);
        let area = Rect::new(0, 0, 16, 2);
        let text = "one two three four five six seven eight nine ten";
        assert!(DescriptionPanel::wrapped(text, area.width).len() > 2);

        let mut buf = Buffer::empty(area);
        DescriptionPanel { text, progress: 1.0, palette: &palette }.render(area, &mut buf);
        assert!(row_text(&buf, 1).trim_end().ends_with('…'));
        assert!(!row_text(&buf, 0).contains('…'));
    }

    #[test]
    fn test_short_panel_has_no_ellipsis() {
        let palette = Palette::for_theme(Theme::Dark);
        let area = Rect::new(0, 0, 40, 2);
        let mut buf = Buffer::empty(area);
        DescriptionPanel { text: "Sunsets.", progress: 1.0, palette: &palette }
            .render(area, &mut buf);
        assert!(!row_text(&buf, 0).contains('…'));
    }

    #[test]
    fn test_wrapped_respects_width() {
        let lines = DescriptionPanel::wrapped("one two three four five six", 12);
        assert!(lines.len() > 1);
        assert!(lines.iter().all(|l| l.width() <= 8));
    }
}
