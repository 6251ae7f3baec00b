use serde::{Deserialize, Serialize};

/// One search result, as served to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub title: String,
    pub rating: Option<f64>,
    pub review_count: u64,
    pub price: String,
    pub image_url: String,
    pub star_icon_class: Option<String>,
    pub unit_count: String,
    pub purchase_count: String,
    pub price_per_unit: String,
    pub original_price: String,
    pub shipping_info: String,
}
