//! Static greeting screen: a green field with one centred line.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Paragraph};

use crate::tui::component::Component;

pub const GREETING: &str = "Hello Halelujah!!!";
const FIELD: Color = Color::Rgb(0, 128, 0);

pub struct HelloScreen;

impl Component for HelloScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Block::new().style(Style::default().bg(FIELD)), area);

        let [line] = Layout::vertical([Constraint::Length(1)])
            .flex(Flex::Center)
            .areas(area);
        let text = Paragraph::new(GREETING)
            .style(
                Style::default()
                    .fg(Color::White)
                    .bg(FIELD)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center);
        frame.render_widget(text, line);
    }
}
