//! Demo catalog
//!
//! The fixed product list the demo storefront is seeded with on startup.

use crate::domain_models::{Price, Product, ProductCategory::*};
use crate::error::StoreError;
use crate::store::Store;

/// The demo products, in catalog order
pub fn demo_products() -> Vec<Product> {
    vec![
        Product::new(0, "Heinmann's Bread", Products, Price::from_cents(219))
            .with_description("Nutritious bread")
            .with_image("bread.svg"),
        Product::new(1, "Alp Milk", Products, Price::from_cents(119))
            .with_description("Best Milk in the Galaxy")
            .with_image("milk.png"),
        Product::new(2, "Emmental cheese", Products, Price::from_cents(249))
            .with_description("Tasty, juicy and local cheese")
            .with_image("cheese.svg"),
        Product::new(3, "iPhone 13 Pro", Devices, Price::from_cents(119_900))
            .with_description("The latest elite phone from Apple")
            .with_image("phone.svg"),
        Product::new(4, "iPhone 13", Devices, Price::from_cents(99_900))
            .with_description("The latest phone from Apple")
            .with_image("phone.svg"),
        Product::new(
            5,
            "Pixel 6 Pro - 128GB Internal Memory, AT&T, 6GB RAM",
            Devices,
            Price::from_cents(79_900),
        )
        .with_description("The latest flagship from Google")
        .with_image("phone.svg"),
        Product::new(
            6,
            "Pixel 6 (5G variant, 256GB Internal Memory, Unlocked)",
            Devices,
            Price::from_cents(64_900),
        )
        .with_description("The latest flagship from Google with 5G")
        .with_image("phone.svg"),
        Product::new(7, "MaxBoost Speakers - Feel the bass!", Devices, Price::from_cents(7_924))
            .with_description("Immersive speakers")
            .with_image("speakers.png"),
        Product::new(8, "Nightstand Lamp (AC-Cable included)", Living, Price::from_cents(3_365))
            .with_description("Brighten up your rooms")
            .with_image("lamp.png"),
        Product::new(9, "Aquarium", Living, Price::from_cents(13_900))
            .with_description("Keep your fish save and visible")
            .with_image("aquarium.png"),
        Product::new(10, "Couch XXL", Living, Price::from_cents(45_754))
            .with_description("Space four you, your guests and your stuff")
            .with_image("sofa.svg"),
        Product::new(11, "Batteries Combo-Pack", Miscellaneous, Price::from_cents(864))
            .with_description("Juice for all your (old) devices")
            .with_image("batteries.png"),
        Product::new(12, "Paper 100 Pack", Miscellaneous, Price::from_cents(890))
            .with_description("Print anything on it")
            .with_image("paper_stack.svg"),
        Product::new(446, "Tissue box", Miscellaneous, Price::from_cents(86))
            .with_description("For colds or emotional films")
            .with_image("tissue_box.svg"),
    ]
}

/// Seed the store's catalog with the demo products
pub fn fill_products(store: &mut Store) -> Result<(), StoreError> {
    for product in demo_products() {
        store.add_product(product)?;
    }
    log::info!("Seeded catalog with {} demo products", store.state().catalog.len());
    Ok(())
}
