//! Main UI layout and rendering for the favdir TUI.
//!
//! The screen is split into the favorites list on the left, the details table
//! on the right and a one-line status bar underneath.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Clear, List, ListItem, ListState, Paragraph, Row, Table, TableState},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::format::format_kind;
use crate::nav::Pane;
use crate::table::{RowKind, COLUMNS};
use crate::ui::colors::ColorScheme;
use crate::ui::input::InputMode;

/// Application name.
const APP_NAME: &str = "favdir";

const HIGHLIGHT_SYMBOL: &str = "> ";

/// Draw the whole screen.
pub fn render_ui(frame: &mut Frame, app: &mut App) {
    let size = frame.area();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Panes
            Constraint::Length(1), // Status bar
        ])
        .split(size);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(favorites_width(app)),
            Constraint::Min(1),
        ])
        .split(main_layout[0]);

    render_favorites(frame, panes[0], app);
    render_details(frame, panes[1], app);
    render_status_bar(frame, main_layout[1], app);

    if app.input_mode == InputMode::Help {
        render_help_overlay(frame, size, &app.color_scheme);
    }
}

/// Width of the favorites pane: the widest label plus highlight symbol and borders.
fn favorites_width(app: &App) -> u16 {
    let widest = app
        .navigator
        .registry()
        .iter()
        .map(|entry| entry.label.width())
        .chain(std::iter::once("Favorites".width()))
        .max()
        .unwrap_or(0);

    (widest + HIGHLIGHT_SYMBOL.width() + 2).min(u16::MAX as usize) as u16
}

fn pane_block<'a>(title: String, focused: bool, color_scheme: &ColorScheme) -> Block<'a> {
    let border_color = if focused {
        color_scheme.border_focused
    } else {
        color_scheme.border
    };

    Block::default()
        .title(title)
        .title_style(Style::default().fg(color_scheme.accent).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
}

fn render_favorites(frame: &mut Frame, area: Rect, app: &App) {
    let color_scheme = &app.color_scheme;
    let focused = app.navigator.focused_pane() == Pane::Favorites;

    let items: Vec<ListItem> = app
        .navigator
        .registry()
        .iter()
        .map(|entry| ListItem::new(entry.label.clone()).style(Style::default().fg(color_scheme.text)))
        .collect();

    let list = List::new(items)
        .block(pane_block("Favorites".to_string(), focused, color_scheme))
        .highlight_style(
            Style::default()
                .bg(color_scheme.selected_bg)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(HIGHLIGHT_SYMBOL);

    let mut state = ListState::default();
    if !app.navigator.registry().is_empty() {
        state.select(Some(app.favorite_index));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_details(frame: &mut Frame, area: Rect, app: &mut App) {
    let color_scheme = &app.color_scheme;
    let focused = app.navigator.focused_pane() == Pane::Details;
    let title = match app.navigator.selected_path() {
        Some(path) => path.display().to_string(),
        None => "Details".to_string(),
    };
    let block = pane_block(title, focused, color_scheme);

    let model = app.navigator.table();
    let header_style = Style::default().fg(color_scheme.text_dim);

    if model.is_empty() {
        let hint = Line::from(Span::styled("No favorite selected", header_style));
        frame.render_widget(Paragraph::new(hint).block(block), area);
        return;
    }

    let header = model
        .rows()
        .iter()
        .find(|row| row.kind == RowKind::Header)
        .map(|row| Row::new(row.cells.iter().map(|c| Cell::from(c.clone()))).style(header_style));

    // Indicator messages are wider than any column, so they bypass the table.
    let indicators: Vec<&str> = model
        .rows()
        .iter()
        .filter(|row| row.kind == RowKind::Indicator)
        .filter_map(|row| row.cells.first().map(String::as_str))
        .collect();

    if !indicators.is_empty() {
        let mut lines = Vec::new();
        if let Some(header) = model.rows().iter().find(|row| row.kind == RowKind::Header) {
            lines.push(Line::from(Span::styled(header.cells.join(" "), header_style)));
        }
        for message in indicators {
            lines.push(Line::from(Span::styled(
                message.to_string(),
                Style::default().fg(color_scheme.error_fg),
            )));
        }
        frame.render_widget(Paragraph::new(lines).block(block), area);
        return;
    }

    let header_rows = usize::from(header.is_some());
    let body: Vec<Row> = model
        .rows()
        .iter()
        .filter(|row| row.kind == RowKind::Data)
        .map(|row| {
            let is_dir = row.cells.get(3).is_some_and(|kind| kind.trim() == format_kind(true));
            let name_style = if is_dir {
                Style::default().fg(color_scheme.dirs)
            } else {
                Style::default().fg(color_scheme.text)
            };
            let mut cells = row.cells.iter().map(|c| Cell::from(c.clone()));
            let first = cells.next().map(|c| c.style(name_style));
            Row::new(first.into_iter().chain(cells)).style(Style::default().fg(color_scheme.text))
        })
        .collect();

    let widths = COLUMNS.iter().map(|column| Constraint::Length(column.width as u16));
    let mut table = Table::new(body, widths)
        .block(block)
        .column_spacing(1)
        .highlight_style(
            Style::default()
                .bg(color_scheme.selected_bg)
                .add_modifier(Modifier::BOLD),
        );
    if let Some(header) = header {
        table = table.header(header);
    }

    let mut state = TableState::default().with_offset(app.details_offset);
    if focused {
        state.select(
            app.navigator
                .highlighted_row()
                .map(|row| row.saturating_sub(header_rows)),
        );
    }
    frame.render_stateful_widget(table, area, &mut state);
    app.details_offset = state.offset();
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let color_scheme = &app.color_scheme;
    let status_style = Style::default().fg(color_scheme.status_fg).bg(color_scheme.status_bg);
    let key_style = Style::default().fg(color_scheme.key_fg).add_modifier(Modifier::BOLD);
    let hint_style = Style::default().fg(color_scheme.hint_fg);

    let mut spans = vec![Span::raw(" ")];

    match &app.status {
        Some(status) => {
            let style = if status.is_error {
                Style::default().fg(color_scheme.error_fg).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(color_scheme.status_fg)
            };
            spans.push(Span::styled(status.text.clone(), style));
        }
        None => {
            let hints: &[(&str, &str)] = match app.navigator.focused_pane() {
                Pane::Favorites => &[("j/k", "move"), ("Enter", "details"), ("r", "refresh")],
                Pane::Details => &[("j/k", "move"), ("Enter", "select"), ("Esc", "back")],
            };
            for (key, label) in hints.iter().chain([("?", "help"), ("q", "quit")].iter()) {
                spans.push(Span::styled(key.to_string(), key_style));
                spans.push(Span::styled(format!(":{} ", label), hint_style));
            }
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).style(status_style), area);
}

/// Render help overlay with all keyboard shortcuts.
fn render_help_overlay(frame: &mut Frame, area: Rect, color_scheme: &ColorScheme) {
    let overlay_width = 46.min(area.width.saturating_sub(4));
    let overlay_height = 16.min(area.height.saturating_sub(2));
    let overlay_x = (area.width.saturating_sub(overlay_width)) / 2;
    let overlay_y = (area.height.saturating_sub(overlay_height)) / 2;
    let overlay_area = Rect::new(overlay_x, overlay_y, overlay_width, overlay_height);

    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .title(format!(" {} Help ", APP_NAME))
        .title_style(Style::default().fg(color_scheme.accent).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color_scheme.accent))
        .style(Style::default().bg(color_scheme.status_bg));

    let section = |title: &'static str| {
        Line::from(Span::styled(
            title,
            Style::default().fg(color_scheme.accent).add_modifier(Modifier::BOLD),
        ))
    };
    let binding = |keys: &'static str, action: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {:<11}", keys), Style::default().fg(color_scheme.key_fg)),
            Span::styled(action, Style::default().fg(color_scheme.text)),
        ])
    };

    let help_text = vec![
        section("Navigation"),
        binding("j/↓", "Move down"),
        binding("k/↑", "Move up"),
        binding("g/G", "Go to top/bottom"),
        binding("Enter/l/→", "Show details / select item"),
        binding("Esc/h/←", "Back to favorites"),
        Line::from(""),
        section("Actions"),
        binding("r", "Re-read the directory"),
        binding("?", "Show this help"),
        binding("q/Ctrl-C", "Quit"),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(color_scheme.hint_fg),
        )),
    ];

    frame.render_widget(Paragraph::new(help_text).block(block), overlay_area);
}
