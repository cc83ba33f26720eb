//! Plain console rendering for the one-shot `list` command.
//!
//! Fixed-width columns in the style of the TUI panels. Styling is applied
//! only when stdout is a terminal; piped output stays plain.

use is_terminal::IsTerminal;
use owo_colors::OwoColorize;

use crate::presentation::view_models::RowViewModel;

const CITY_WIDTH: usize = 18;
const TEMP_WIDTH: usize = 8;
const DESC_WIDTH: usize = 24;

// marker + city + gap + temp + gap + desc + gap + widest action label
const TABLE_WIDTH: usize = 2 + CITY_WIDTH + 1 + TEMP_WIDTH + 2 + DESC_WIDTH + 2 + 23;

/// Render rows as an aligned table, one line per row plus header and
/// separator. Pure; colorization happens in `print_rows`.
pub fn format_rows(rows: &[RowViewModel]) -> Vec<String> {
    let mut lines = Vec::with_capacity(rows.len() + 2);

    lines.push(table_line("  ", "CITY", "TEMP", "DESCRIPTION", "ACTION"));
    lines.push("-".repeat(TABLE_WIDTH));

    for row in rows {
        let marker = if row.is_favorite { "★ " } else { "  " };
        lines.push(table_line(
            marker,
            &truncate(&row.city, CITY_WIDTH),
            &row.temperature,
            &truncate(&row.description, DESC_WIDTH),
            &format!("[{}]", row.action_label),
        ));
    }

    lines
}

fn table_line(marker: &str, city: &str, temp: &str, description: &str, action: &str) -> String {
    format!(
        "{}{:<city$} {:>temp$}  {:<desc$}  {}",
        marker,
        city,
        temp,
        description,
        action,
        city = CITY_WIDTH,
        temp = TEMP_WIDTH,
        desc = DESC_WIDTH,
    )
}

/// Print the table to stdout, styled when attached to a terminal and
/// truncated to its width.
pub fn print_rows(rows: &[RowViewModel]) {
    let is_tty = std::io::stdout().is_terminal();
    let width = terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(TABLE_WIDTH);

    for (index, line) in format_rows(rows).into_iter().enumerate() {
        let line = truncate(&line, width);
        if is_tty && index == 0 {
            println!("{}", line.bold());
        } else {
            println!("{}", line);
        }
    }

    if rows.is_empty() {
        let hint = "No matching records";
        if is_tty {
            println!("{}", hint.dimmed());
        } else {
            println!("{}", hint);
        }
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}
