//! Plain-text renderings for the command line.

use storefront_core::{ChartPoint, Product};

/// One line per product: index, title, price and star rating.
///
/// The index is the one `storefront remove` expects.
pub fn product_lines(products: &[Product]) -> Vec<String> {
    let width = products
        .iter()
        .map(|p| p.title.chars().count())
        .max()
        .unwrap_or(0)
        .min(48);

    products
        .iter()
        .enumerate()
        .map(|(index, product)| {
            let title: String = product.title.chars().take(width).collect();
            format!(
                "{:>3}  {:<width$}  {:>9}  {}",
                index,
                title,
                format!("${:.2}", product.price),
                storefront_tui::stars(product.rating.rate),
                width = width
            )
        })
        .collect()
}

/// Horizontal text bars scaled to `width` columns.
///
/// Bars are scaled against the larger of 5 and the biggest value, so ratings
/// keep a fixed axis.
pub fn chart_lines(points: &[ChartPoint], width: usize) -> Vec<String> {
    let label_width = points
        .iter()
        .map(|p| p.label().chars().count())
        .max()
        .unwrap_or(0);
    let max = points
        .iter()
        .map(|p| *p.value())
        .fold(5.0_f64, f64::max);

    points
        .iter()
        .map(|point| {
            let ratio = (point.value() / max).clamp(0.0, 1.0);
            let bar = "█".repeat((ratio * width as f64).round() as usize);
            format!(
                "{:<label_width$} │{} {}",
                point.label(),
                bar,
                point.text(),
                label_width = label_width
            )
        })
        .collect()
}
