//! # Booking Footer
//!
//! Fixed bar under the destination list:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │[-]  2  [+]                  Total 8,000 D  Book Now  │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! Stateless. [`FooterLayout`] is shared with the hit tester.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::tui::component::Component;
use crate::tui::theme::{AMBER, FOOTER_BG, ORANGE, WHITE};

pub const FOOTER_HEIGHT: u16 = 3;
pub const BOOK_LABEL: &str = "Book Now";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterLayout {
    pub decrement: Rect,
    pub quantity: Rect,
    pub increment: Rect,
    pub total: Rect,
    pub book: Rect,
}

impl FooterLayout {
    pub fn new(area: Rect) -> Self {
        let inner = Block::bordered().inner(area);
        let [decrement, quantity, increment, total, _, book] = Layout::horizontal([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(2),
            Constraint::Length(BOOK_LABEL.len() as u16 + 2),
        ])
        .areas(inner);
        Self {
            decrement,
            quantity,
            increment,
            total,
            book,
        }
    }
}

pub struct BookingFooter {
    pub quantity: u32,
    pub total_label: String,
}

impl Component for BookingFooter {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(
            Block::bordered()
                .border_style(Style::default().fg(Color::Rgb(34, 34, 58)))
                .style(Style::default().bg(FOOTER_BG)),
            area,
        );
        let layout = FooterLayout::new(area);
        let button = Style::default()
            .fg(WHITE)
            .bg(AMBER)
            .add_modifier(Modifier::BOLD);

        frame.render_widget(
            Paragraph::new("-").style(button).alignment(Alignment::Center),
            layout.decrement,
        );
        frame.render_widget(
            Paragraph::new(self.quantity.to_string())
                .style(Style::default().fg(WHITE).add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center),
            layout.quantity,
        );
        frame.render_widget(
            Paragraph::new("+").style(button).alignment(Alignment::Center),
            layout.increment,
        );
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("Total ", Style::default().fg(Color::Rgb(204, 204, 204))),
                Span::styled(
                    self.total_label.as_str(),
                    Style::default().fg(WHITE).add_modifier(Modifier::BOLD),
                ),
            ]))
            .alignment(Alignment::Right),
            layout.total,
        );
        frame.render_widget(
            Paragraph::new(BOOK_LABEL)
                .style(
                    Style::default()
                        .fg(WHITE)
                        .bg(ORANGE)
                        .add_modifier(Modifier::BOLD),
                )
                .alignment(Alignment::Center),
            layout.book,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_layout_orders_controls() {
        let layout = FooterLayout::new(Rect::new(0, 20, 60, FOOTER_HEIGHT));
        assert_eq!(layout.decrement.x, 1);
        assert_eq!(layout.decrement.y, 21);
        assert!(layout.increment.x > layout.quantity.x);
        assert_eq!(layout.book.x + layout.book.width, 59);
    }

    #[test]
    fn test_footer_shows_quantity_and_total() {
        let mut terminal = Terminal::new(TestBackend::new(60, FOOTER_HEIGHT)).unwrap();
        terminal
            .draw(|f| {
                BookingFooter {
                    quantity: 3,
                    total_label: "12,000 D".to_string(),
                }
                .render(f, f.area());
            })
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Total 12,000 D"));
        assert!(text.contains(BOOK_LABEL));
        assert!(text.contains(" 3 "));
    }
}
