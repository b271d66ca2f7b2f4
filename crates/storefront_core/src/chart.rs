//! Top-rated chart projection.
//!
//! Selection and labelling are pure; drawing is left to whichever chart
//! widget consumes the resulting [`ChartPoint`]s.

use crate::Product;
use derive_getters::Getters;

/// Formats a bar's numeric value for display.
pub trait ValueFormatter {
    /// Render `value` as bar text.
    fn format(&self, value: f64) -> String;
}

/// One decimal place, as ratings are shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RatingFormatter;

impl ValueFormatter for RatingFormatter {
    fn format(&self, value: f64) -> String {
        format!("{:.1}", value)
    }
}

/// Currency with two decimals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PriceFormatter;

impl ValueFormatter for PriceFormatter {
    fn format(&self, value: f64) -> String {
        format!("${:.2}", value)
    }
}

impl<F> ValueFormatter for F
where
    F: Fn(f64) -> String,
{
    fn format(&self, value: f64) -> String {
        self(value)
    }
}

/// A labelled bar ready for rendering.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct ChartPoint {
    label: String,
    value: f64,
    text: String,
}

/// Select the `n` best-rated products, highest `rating.rate` first.
///
/// The sort is stable, so products with equal rates keep catalog order.
/// Fewer than `n` products yields all of them.
///
/// # Examples
///
/// ```
/// use storefront_core::{Product, Rating, top_rated};
///
/// let products: Vec<Product> = [4.5, 2.0, 5.0]
///     .iter()
///     .enumerate()
///     .map(|(i, rate)| {
///         Product::builder()
///             .id(i as u32)
///             .title(format!("p{}", i))
///             .price(1.0)
///             .rating(Rating { rate: *rate, count: 1 })
///             .build()
///             .unwrap()
///     })
///     .collect();
///
/// let rates: Vec<f64> = top_rated(&products, 5).iter().map(|p| p.rating.rate).collect();
/// assert_eq!(rates, vec![5.0, 4.5, 2.0]);
/// ```
pub fn top_rated(products: &[Product], n: usize) -> Vec<&Product> {
    let mut ranked: Vec<&Product> = products.iter().collect();
    ranked.sort_by(|a, b| b.rating.rate.total_cmp(&a.rating.rate));
    ranked.truncate(n);
    ranked
}

/// Project the top `n` products into chart points.
///
/// Labels are product titles cut to `label_width` characters (`0` keeps the
/// full title); bar text comes from `formatter`.
#[tracing::instrument(skip(products, formatter), fields(available = products.len()))]
pub fn project(
    products: &[Product],
    n: usize,
    label_width: usize,
    formatter: &dyn ValueFormatter,
) -> Vec<ChartPoint> {
    let points: Vec<ChartPoint> = top_rated(products, n)
        .into_iter()
        .map(|product| ChartPoint {
            label: shorten(&product.title, label_width),
            value: product.rating.rate,
            text: formatter.format(product.rating.rate),
        })
        .collect();
    tracing::debug!(points = points.len(), "Projected chart points");
    points
}

fn shorten(title: &str, width: usize) -> String {
    if width == 0 || title.chars().count() <= width {
        return title.to_string();
    }
    let mut short: String = title.chars().take(width.saturating_sub(1)).collect();
    short.push('…');
    short
}
