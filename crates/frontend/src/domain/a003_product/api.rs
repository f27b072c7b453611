use contracts::domain::a003_product::aggregate::{Product, ProductPayload};

use crate::shared::api::{ApiClient, ApiError, LocalEntityApi, SourceApi};
use crate::shared::config::AppConfig;
use crate::shared::storage::{KeyValueStore, LocalStorage};

pub type ProductApi = SourceApi<Product, ProductPayload>;

pub fn product_api(config: &AppConfig) -> ProductApi {
    SourceApi::for_source(config.products, ApiClient::from_session(config))
}

/// Overwrites the locally stored products with the demo catalogue
pub fn seed_demo_products() -> Result<(), ApiError> {
    seed_into(LocalStorage)
}

fn seed_into<S: KeyValueStore>(store: S) -> Result<(), ApiError> {
    LocalEntityApi::<Product, ProductPayload, S>::new(store).seed(&demo_products())
}

pub fn demo_products() -> Vec<Product> {
    let item = |id: &str, sku: &str, name: &str, price: f64, stock: u32, category: &str, material: &str| Product {
        id: id.to_string(),
        sku: sku.to_string(),
        name: name.to_string(),
        price,
        stock,
        category_id: category.to_string(),
        material: material.to_string(),
        description: String::new(),
        image_urls: Vec::new(),
    };

    vec![
        item("demo-1", "RG-001", "Solitaire diamond ring", 1299.0, 4, "RINGS", "18k white gold"),
        item("demo-2", "RG-014", "Eternity band", 849.5, 7, "RINGS", "Platinum"),
        item("demo-3", "NK-003", "Pearl pendant necklace", 359.0, 12, "NECKLACES", "Sterling silver"),
        item("demo-4", "ER-021", "Sapphire stud earrings", 629.0, 0, "EARRINGS", "14k yellow gold"),
        item("demo-5", "BR-008", "Tennis bracelet", 1890.0, 2, "BRACELETS", "18k rose gold"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::EntityApi;
    use crate::shared::storage::MemoryStore;
    use futures::executor::block_on;

    #[test]
    fn test_demo_seed_replaces_local_products() {
        let store = MemoryStore::new();
        let api = LocalEntityApi::<Product, ProductPayload, _>::new(store.clone());
        let leftover = ProductPayload {
            sku: "OLD".into(),
            name: "Old".into(),
            price: 1.0,
            stock: 1,
            category_id: String::new(),
            material: String::new(),
            description: String::new(),
            image_urls: vec![],
        };
        block_on(api.create(&leftover)).unwrap();

        seed_into(store).unwrap();
        let products = block_on(api.list()).unwrap();
        assert_eq!(products.len(), demo_products().len());
        assert!(products.iter().all(|p| p.sku != "OLD"));
    }

    #[test]
    fn test_demo_skus_are_unique() {
        let products = demo_products();
        let mut skus: Vec<_> = products.iter().map(|p| p.sku.as_str()).collect();
        skus.sort();
        skus.dedup();
        assert_eq!(skus.len(), products.len());
    }
}
