//! Header View Component
//!
//! Renders the top section with the search input, the active unit, and
//! key hints.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::DashboardViewModel;

/// Header view wrapper
pub struct HeaderView<'a> {
    model: &'a DashboardViewModel,
    search_focused: bool,
}

impl<'a> HeaderView<'a> {
    pub fn new(model: &'a DashboardViewModel, search_focused: bool) -> Self {
        Self {
            model,
            search_focused,
        }
    }
}

impl<'a> Widget for HeaderView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title_style = if self.search_focused {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        let block = Block::default()
            .title("weatherdeck")
            .title_style(title_style)
            .borders(Borders::ALL);

        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = vec![];

        let mut search_spans = vec![
            Span::styled("Search: ", Style::default().add_modifier(Modifier::DIM)),
            Span::raw(self.model.query.as_str()),
        ];
        if self.search_focused {
            search_spans.push(Span::styled(
                "█",
                Style::default().add_modifier(Modifier::SLOW_BLINK),
            ));
        }
        lines.push(Line::from(search_spans));

        lines.push(Line::from(vec![
            Span::styled(
                format!("{}  ", self.model.unit_label),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("{} (Ctrl-U)", self.model.switch_hint),
                Style::default().fg(Color::Yellow),
            ),
        ]));

        lines.push(Line::from(Span::styled(
            "Tab focus | Up/Down select | Enter toggle favorite | Esc clear search | q quit",
            Style::default().add_modifier(Modifier::DIM),
        )));

        Paragraph::new(lines).render(inner, buf);
    }
}
