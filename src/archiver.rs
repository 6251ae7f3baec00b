use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::Product;

pub fn save_to_file(products: &[Product], filename: impl AsRef<Path>) -> Result<()> {
    let filename = filename.as_ref();
    let json = serde_json::to_string_pretty(products)?;
    let mut file = File::create(filename)
        .with_context(|| format!("creating {}", filename.display()))?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_camel_case_json() {
        let product = Product {
            title: "Desk Lamp".into(),
            rating: None,
            review_count: 12,
            price: "$24.00".into(),
            image_url: "lamp.jpg".into(),
            star_icon_class: Some("a-star-small-4".into()),
            unit_count: String::new(),
            purchase_count: String::new(),
            price_per_unit: String::new(),
            original_price: String::new(),
            shipping_info: String::new(),
        };

        let path = std::env::temp_dir().join(format!("archive-{}.json", std::process::id()));
        save_to_file(&[product.clone()], &path).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();

        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value[0]["reviewCount"], 12);
        assert_eq!(value[0]["starIconClass"], "a-star-small-4");
        assert!(value[0]["rating"].is_null());

        let back: Vec<Product> = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, vec![product]);
    }
}
