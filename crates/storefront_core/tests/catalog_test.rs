use storefront_core::{Catalog, Product};

fn titled(id: u32) -> Product {
    Product::builder()
        .id(id)
        .title(format!("p{}", id))
        .price(1.0)
        .build()
        .unwrap()
}

#[test]
fn replace_discards_previous_entries() {
    let mut catalog = Catalog::new(vec![titled(1), titled(2), titled(3)]);
    catalog.replace(vec![titled(9)]);

    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.get(0).map(|p| p.id), Some(9));
}

#[test]
fn remove_in_bounds_takes_exactly_one() {
    let mut catalog = Catalog::new(vec![titled(1), titled(2), titled(3)]);
    let removed = catalog.remove(1).unwrap();

    assert_eq!(removed.id, 2);
    let ids: Vec<u32> = catalog.products().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn remove_out_of_bounds_is_ignored() {
    let mut catalog = Catalog::new(vec![titled(1)]);
    assert!(catalog.remove(1).is_none());
    assert!(catalog.remove(usize::MAX).is_none());
    assert_eq!(catalog.len(), 1);
}

#[test]
fn push_appends_in_display_order() {
    let mut catalog = Catalog::default();
    assert!(catalog.is_empty());
    catalog.push(titled(4));
    catalog.push(titled(2));

    let ids: Vec<u32> = catalog.into_products().into_iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![4, 2]);
}
