//! Record Table View
//!
//! Builds the bordered list for one record panel (search results or
//! favorites). Selection state lives in the owning component; this view
//! only shapes the widgets.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use crate::presentation::view_models::{ListViewModel, RowViewModel};

/// Record table view wrapper
pub struct RecordTableView<'a> {
    model: &'a ListViewModel,
    focused: bool,
}

impl<'a> RecordTableView<'a> {
    pub fn new(model: &'a ListViewModel, focused: bool) -> Self {
        Self { model, focused }
    }

    pub fn is_empty(&self) -> bool {
        self.model.rows.is_empty()
    }

    pub fn item_count(&self) -> usize {
        self.model.rows.len()
    }

    pub fn block(&self) -> Block<'a> {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };

        Block::default()
            .title(self.model.title.as_str())
            .borders(Borders::ALL)
            .border_style(border_style)
    }

    /// Placeholder paragraph for an empty panel.
    pub fn empty_placeholder(&self) -> Paragraph<'a> {
        Paragraph::new(Line::from(Span::styled(
            self.model.empty_hint.as_str(),
            Style::default().add_modifier(Modifier::DIM),
        )))
    }

    /// The list widget plus the area it should occupy inside `area`.
    pub fn build_list(&self, area: Rect) -> (List<'a>, Rect) {
        let block = self.block();
        let inner = block.inner(area);

        let items: Vec<ListItem> = self.model.rows.iter().map(row_item).collect();

        let highlight_style = if self.focused {
            Style::default()
                .bg(Color::Cyan)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::REVERSED)
        };

        let list = List::new(items)
            .highlight_style(highlight_style)
            .highlight_symbol("> ");

        (list, inner)
    }
}

fn row_item(row: &RowViewModel) -> ListItem<'static> {
    let marker = if row.is_favorite { "★ " } else { "  " };

    let line = Line::from(vec![
        Span::styled(marker.to_string(), Style::default().fg(Color::Yellow)),
        Span::styled(
            format!("{:<18}", truncate(&row.city, 18)),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("{:>8}  ", row.temperature)),
        Span::raw(format!("{:<24}", truncate(&row.description, 24))),
        Span::styled(
            format!("[{}]", row.action_label),
            Style::default().add_modifier(Modifier::DIM),
        ),
    ]);

    ListItem::new(line)
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_respects_char_boundaries() {
        assert_eq!(truncate("Reykjavik", 18), "Reykjavik");
        assert_eq!(truncate("São Paulo metropolitan", 10), "São Paulo…");
    }
}
