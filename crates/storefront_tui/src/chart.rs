//! Top-rated bar chart.

use ratatui::{
    Frame,
    layout::{Alignment, Direction, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
};
use storefront_core::ChartPoint;

/// Bars hold integers; rates are scaled so one decimal survives.
const VALUE_SCALE: f64 = 10.0;
const BAR_GAP: u16 = 1;

/// Scale a point value to a bar height.
pub fn bar_value(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        (value * VALUE_SCALE).round() as u64
    } else {
        0
    }
}

/// Draw `points` as a bar chart filling `area`.
#[tracing::instrument(skip(f, points), fields(points = points.len()))]
pub fn draw_chart(f: &mut Frame, area: Rect, points: &[ChartPoint], horizontal: bool) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Top {} by rating", points.len()));

    if points.is_empty() {
        let empty = Paragraph::new("No products to chart")
            .block(block)
            .alignment(Alignment::Center);
        f.render_widget(empty, area);
        return;
    }

    let bars: Vec<Bar> = points
        .iter()
        .map(|point| {
            Bar::default()
                .value(bar_value(*point.value()))
                .label(Line::from(point.label().clone()))
                .text_value(point.text().clone())
        })
        .collect();

    let count = points.len() as u16;
    let (direction, bar_width) = if horizontal {
        (Direction::Horizontal, 1)
    } else {
        let inner = area.width.saturating_sub(2);
        let width = (inner / count).saturating_sub(BAR_GAP).max(1);
        (Direction::Vertical, width)
    };

    let max = bars_max(points);
    let chart = BarChart::default()
        .block(block)
        .direction(direction)
        .bar_width(bar_width)
        .bar_gap(BAR_GAP)
        .bar_style(Style::default().fg(Color::Cyan))
        .value_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .max(max)
        .data(BarGroup::default().bars(&bars));

    f.render_widget(chart, area);
}

// Ratings top out at 5; anything larger stretches the axis.
fn bars_max(points: &[ChartPoint]) -> u64 {
    points
        .iter()
        .map(|p| bar_value(*p.value()))
        .max()
        .unwrap_or(0)
        .max(bar_value(5.0))
}
