//! The catalog item shown in the listing, the quick-view overlay and the full detail page.
use record_store::{Record, ResourceId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ResourceId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub image_url: String,
    pub in_stock: bool,
    pub rating: f32,
}

impl Product {
    /// Price formatted for display, e.g. `$299.99`.
    pub fn display_price(&self) -> String {
        format!("${:.2}", self.price)
    }

    pub fn stock_label(&self) -> &'static str {
        if self.in_stock {
            "In Stock"
        } else {
            "Out of Stock"
        }
    }
}

impl Record for Product {
    fn id(&self) -> &ResourceId {
        &self.id
    }

    fn title(&self) -> &str {
        &self.name
    }

    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }
}

/// The six products the demo catalog ships with, in listing order.
pub fn sample_catalog() -> Vec<Product> {
    let product = |id: &str,
                   name: &str,
                   description: &str,
                   price: f64,
                   category: &str,
                   seed: &str,
                   in_stock: bool,
                   rating: f32| Product {
        id: ResourceId::new(id),
        name: name.to_string(),
        description: description.to_string(),
        price,
        category: category.to_string(),
        image_url: format!("https://picsum.photos/seed/{}/400/300", seed),
        in_stock,
        rating,
    };

    vec![
        product(
            "1",
            "Wireless Headphones Pro",
            "Premium noise-canceling wireless headphones with 40-hour battery life.",
            299.99,
            "Electronics",
            "headphones",
            true,
            4.8,
        ),
        product(
            "2",
            "Mechanical Keyboard RGB",
            "Cherry MX switches, per-key RGB lighting, aircraft-grade aluminum frame.",
            149.99,
            "Electronics",
            "keyboard",
            true,
            4.6,
        ),
        product(
            "3",
            "Ultra-Wide Monitor 34\"",
            "34-inch curved ultrawide monitor with 144Hz refresh rate and 1ms response time.",
            599.99,
            "Electronics",
            "monitor",
            false,
            4.9,
        ),
        product(
            "4",
            "Ergonomic Office Chair",
            "Fully adjustable ergonomic chair with lumbar support and 4D armrests.",
            449.99,
            "Furniture",
            "chair",
            true,
            4.7,
        ),
        product(
            "5",
            "Smart Desk Lamp",
            "LED desk lamp with adjustable color temperature and USB charging port.",
            79.99,
            "Lighting",
            "lamp",
            true,
            4.4,
        ),
        product(
            "6",
            "Portable SSD 2TB",
            "Ultra-fast portable SSD with hardware encryption for secure data storage.",
            189.99,
            "Storage",
            "ssd",
            true,
            4.8,
        ),
    ]
}
