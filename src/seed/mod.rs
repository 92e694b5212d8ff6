use tracing::info;

use crate::models::Product;

/// (title, description, price, stock, image slug)
static DEMO_PRODUCTS: &[(&str, &str, f64, u32, &str)] = &[
    ("Blue T-Shirt", "Comfortable cotton t-shirt", 19.99, 20, "Blue+Tshirt"),
    ("Sneakers", "Stylish running shoes", 59.99, 10, "Sneakers"),
    ("Coffee Mug", "Ceramic 350ml mug", 9.5, 40, "Mug"),
];

fn placeholder_image(slug: &str) -> String {
    format!("https://via.placeholder.com/400x300?text={}", slug)
}

/// The catalog every fresh store starts with, ids assigned from 1.
pub fn demo_catalog() -> Vec<Product> {
    let products: Vec<Product> = DEMO_PRODUCTS
        .iter()
        .zip(1u64..)
        .map(|(&(title, description, price, stock, slug), id)| Product {
            id,
            title: title.to_string(),
            description: description.to_string(),
            price,
            stock,
            image: placeholder_image(slug),
        })
        .collect();

    info!("Seeded demo catalog with {} products", products.len());
    products
}
