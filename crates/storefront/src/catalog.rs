//! The seed catalog.
//!
//! Products are fixed at process start; there is no admin surface for
//! editing them. Prices are in the shop currency with two decimal places.

use rust_decimal::Decimal;
use timberhaus_core::{Catalog, Product, ProductId};

/// Build the furniture catalog served by this storefront.
#[must_use]
pub fn seed_catalog() -> Catalog {
    Catalog::new(vec![
        Product {
            id: ProductId::new(1),
            name: "Classic Oak Sofa".to_string(),
            price: Decimal::new(4_999_900, 2),
            description: "Comfortable 3-seater sofa crafted in solid oak with premium cushions."
                .to_string(),
            image: "sofa.jpg".to_string(),
            category: "Living Room".to_string(),
        },
        Product {
            id: ProductId::new(2),
            name: "Mid-Century Dining Chair".to_string(),
            price: Decimal::new(799_900, 2),
            description: "Stylish dining chair with walnut legs and upholstered seat.".to_string(),
            image: "chair.jpg".to_string(),
            category: "Dining".to_string(),
        },
        Product {
            id: ProductId::new(3),
            name: "Rustic Coffee Table".to_string(),
            price: Decimal::new(1_490_000, 2),
            description: "Solid wood coffee table with natural finish and storage shelf."
                .to_string(),
            image: "table.jpg".to_string(),
            category: "Living Room".to_string(),
        },
        Product {
            id: ProductId::new(4),
            name: "Scandinavian Bed Frame".to_string(),
            price: Decimal::new(3_995_000, 2),
            description: "Minimalist bed frame in pine with sturdy slats.".to_string(),
            image: "bed.jpg".to_string(),
            category: "Bedroom".to_string(),
        },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_catalog_ids_are_distinct() {
        let catalog = seed_catalog();
        assert_eq!(catalog.len(), 4);
        for product in catalog.all() {
            assert_eq!(catalog.get(product.id).unwrap().name, product.name);
        }
    }
}
