//! Tests for the product JSON codec.

use storefront_core::{Catalog, Product, Rating, decode_product, decode_products, encode_products};

const REMOTE_LIST: &str = r#"[
  {
    "id": 1,
    "title": "Fjallraven - Foldsack No. 1 Backpack, Fits 15 Laptops",
    "price": 109.95,
    "description": "Your perfect pack for everyday use and walks in the forest.",
    "category": "men's clothing",
    "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
    "rating": { "rate": 3.9, "count": 120 }
  },
  {
    "id": 2,
    "title": "Mens Casual Premium Slim Fit T-Shirts",
    "price": 22.3,
    "description": "Slim-fitting style.",
    "category": "men's clothing",
    "image": "https://fakestoreapi.com/img/71-3HjGNDUL._AC_SY879._SX._UX._SY._UY_.jpg",
    "rating": { "rate": 4.1, "count": 259 }
  }
]"#;

fn product(id: u32, rate: f64) -> Product {
    Product::builder()
        .id(id)
        .title(format!("Product {}", id))
        .price(10.0 + id as f64)
        .description("desc")
        .category("misc")
        .image(format!("https://example.com/{}.jpg", id))
        .rating(Rating { rate, count: id * 3 })
        .build()
        .unwrap()
}

#[test]
fn decodes_remote_list_payload() {
    let products = decode_products(REMOTE_LIST).unwrap();

    assert_eq!(products.len(), 2);
    assert_eq!(products[0].id, 1);
    assert_eq!(products[0].price, 109.95);
    assert_eq!(products[0].rating, Rating { rate: 3.9, count: 120 });
    assert_eq!(products[1].title, "Mens Casual Premium Slim Fit T-Shirts");
}

#[test]
fn decodes_single_product_object() {
    let body = r#"{"id":7,"title":"Ring","price":9.99,"description":"","category":"jewelery","image":"x","rating":{"rate":3.0,"count":400}}"#;
    let product = decode_product(body).unwrap();

    assert_eq!(product.id, 7);
    assert_eq!(product.category, "jewelery");
}

#[test]
fn single_product_endpoint_is_not_an_array() {
    assert!(decode_product(REMOTE_LIST).is_err());
}

#[test]
fn missing_rating_fails_whole_list() {
    let body = r#"[
        {"id":1,"title":"a","price":1.0,"description":"","category":"","image":"","rating":{"rate":1.0,"count":1}},
        {"id":2,"title":"b","price":2.0,"description":"","category":"","image":""}
    ]"#;

    let err = decode_products(body).unwrap_err();
    assert!(err.is_deserialization());
}

#[test]
fn malformed_json_is_deserialization_failure() {
    let err = decode_products("[{\"id\": 1,").unwrap_err();
    assert!(err.is_deserialization());
    assert!(!err.is_network());
}

#[test]
fn unknown_fields_are_ignored() {
    let body = r#"[{"id":1,"title":"a","price":1.0,"description":"","category":"","image":"","rating":{"rate":1.0,"count":1},"stock":12}]"#;
    assert_eq!(decode_products(body).unwrap().len(), 1);
}

#[test]
fn snapshot_round_trip_reproduces_catalog() {
    let catalog = Catalog::new(vec![product(1, 4.5), product(2, 2.0), product(3, 5.0)]);

    let snapshot = encode_products(catalog.products()).unwrap();
    let restored = Catalog::new(decode_products(&snapshot).unwrap());

    assert_eq!(restored, catalog);
}

#[test]
fn empty_catalog_round_trips() {
    let snapshot = encode_products(&[]).unwrap();
    assert_eq!(snapshot, "[]");
    assert!(decode_products(&snapshot).unwrap().is_empty());
}

#[test]
fn catalog_serializes_as_bare_array() {
    let catalog = Catalog::new(vec![product(1, 4.5)]);
    let via_serde = serde_json::to_string(&catalog).unwrap();
    let via_codec = encode_products(catalog.products()).unwrap();
    assert_eq!(via_serde, via_codec);
}
