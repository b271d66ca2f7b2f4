//! UI rendering for TUI.

use crate::app::{App, AppMode};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Row, Table, TableState},
};

/// Draw the main UI.
#[tracing::instrument(skip_all)]
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    draw_header(f, app, chunks[0]);

    match app.mode {
        AppMode::List => draw_list_view(f, app, chunks[1]),
        AppMode::Chart => {
            let chart = app.chart_config();
            crate::chart::draw_chart(f, chunks[1], &app.chart_points(), chart.horizontal)
        }
        AppMode::ContextMenu { .. } => {
            draw_list_view(f, app, chunks[1]);
            draw_context_menu(f, app, chunks[1]);
        }
    }

    draw_status_bar(f, app, chunks[2]);
}

fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let title = if app.pending > 0 {
        format!("Storefront - {} products (loading...)", app.adapter.len())
    } else {
        format!("Storefront - {} products", app.adapter.len())
    };
    let header = Paragraph::new(title)
        .block(Block::default().borders(Borders::ALL))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    f.render_widget(header, area);
}

fn draw_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.mode {
        AppMode::List => "↑↓: Navigate | Enter: Actions | A: Add | S: Add stub | C: Chart | R: Refresh | Q: Quit",
        AppMode::Chart => "Esc: Back | Q: Quit",
        AppMode::ContextMenu { .. } => "D: Delete | Esc: Back",
    };

    let status_text = format!("{} | {}", app.status_line(), help_text);
    let status = Paragraph::new(status_text)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Gray));
    f.render_widget(status, area);
}

#[tracing::instrument(skip_all, fields(generation = app.adapter.generation()))]
fn draw_list_view(f: &mut Frame, app: &App, area: Rect) {
    let header = Row::new(vec!["Title", "Price", "Rating", "Category"])
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .bottom_margin(1);

    let rows: Vec<Row> = app
        .adapter
        .rows()
        .into_iter()
        .map(|row| Row::new(vec![row.title, row.price, row.stars, row.category]))
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Min(20),
            Constraint::Length(10),
            Constraint::Length(7),
            Constraint::Length(18),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title("Products"))
    .row_highlight_style(
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );

    let mut state = TableState::default();
    if !app.adapter.is_empty() {
        state.select(Some(app.adapter.selected()));
    }
    f.render_stateful_widget(table, area, &mut state);
}

fn draw_context_menu(f: &mut Frame, app: &App, area: Rect) {
    let title = app
        .menu_product()
        .map(|product| product.title.clone())
        .unwrap_or_else(|| "(no longer listed)".to_string());
    let popup = centered(area, 50, 5);

    let menu = Paragraph::new("d  Delete product\nEsc  Back")
        .block(Block::default().borders(Borders::ALL).title(title))
        .style(Style::default().fg(Color::White));
    f.render_widget(Clear, popup);
    f.render_widget(menu, popup);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
