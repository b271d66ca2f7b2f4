//! Tests for top-rated selection and chart projection.

use storefront_core::{PriceFormatter, Product, Rating, RatingFormatter, ValueFormatter, project, top_rated};

fn rated(rates: &[f64]) -> Vec<Product> {
    rates
        .iter()
        .enumerate()
        .map(|(i, rate)| {
            Product::builder()
                .id(i as u32 + 1)
                .title(format!("Product number {}", i + 1))
                .price(5.0)
                .rating(Rating { rate: *rate, count: 10 })
                .build()
                .unwrap()
        })
        .collect()
}

fn rates(products: &[&Product]) -> Vec<f64> {
    products.iter().map(|p| p.rating.rate).collect()
}

#[test]
fn selects_top_five_by_rate_descending() {
    let products = rated(&[4.5, 2.0, 5.0, 3.0, 1.0, 4.9]);
    let top = top_rated(&products, 5);
    assert_eq!(rates(&top), vec![5.0, 4.9, 4.5, 3.0, 2.0]);
}

#[test]
fn fewer_than_five_selects_all_in_order() {
    let products = rated(&[1.5, 3.5, 2.5]);
    let top = top_rated(&products, 5);
    assert_eq!(rates(&top), vec![3.5, 2.5, 1.5]);
}

#[test]
fn ties_keep_catalog_order() {
    let products = rated(&[4.0, 4.0, 5.0, 4.0]);
    let ids: Vec<u32> = top_rated(&products, 5).iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![3, 1, 2, 4]);
}

#[test]
fn empty_catalog_selects_nothing() {
    assert!(top_rated(&[], 5).is_empty());
}

#[test]
fn selection_does_not_reorder_source() {
    let products = rated(&[1.0, 5.0]);
    let _ = top_rated(&products, 5);
    assert_eq!(products[0].rating.rate, 1.0);
}

#[test]
fn project_labels_and_formats_bars() {
    let products = rated(&[4.5, 2.0, 5.0]);
    let points = project(&products, 2, 9, &RatingFormatter);

    assert_eq!(points.len(), 2);
    assert_eq!(points[0].label(), "Product …");
    assert_eq!(*points[0].value(), 5.0);
    assert_eq!(points[0].text(), "5.0");
    assert_eq!(points[1].text(), "4.5");
}

#[test]
fn closures_act_as_formatters() {
    let stars = |value: f64| "*".repeat(value.round() as usize);
    let products = rated(&[3.2]);
    let points = project(&products, 5, 0, &stars);

    assert_eq!(points[0].text(), "***");
    assert_eq!(points[0].label(), "Product number 1");
}

#[test]
fn price_formatter_uses_two_decimals() {
    assert_eq!(PriceFormatter.format(22.3), "$22.30");
    assert_eq!(RatingFormatter.format(4.76), "4.8");
}
