//! Where each product field lives in Amazon's search-result markup.
//!
//! Amazon does not version this markup, so every field gets its own entry
//! here. Fields with several entries are tried in order.

use scraper::Selector;

use crate::error::ParseError;

pub const CONTAINER: &str = r#"[data-component-type="s-search-result"]"#;

pub const TITLE: &[&str] = &[
    ".a-size-medium.a-color-base.a-text-normal",
    ".a-size-base-plus.a-color-base.a-text-normal",
    "span.a-text-normal",
];

pub const TITLE_PLACEHOLDER: &str = "Title Unavailable";

pub const RATING: &str = ".a-icon-alt";

pub const REVIEW_COUNT: &str = ".a-size-base.s-underline-text";

/// Visible price, then the screen-reader copy, then the legacy class.
pub const PRICE: &[&str] = &[
    r#".a-price span[aria-hidden="true"]"#,
    OFFSCREEN_PRICE,
    ".a-color-price",
];

pub const OFFSCREEN_PRICE: &str = ".a-price .a-offscreen";

pub const IMAGE: &str = ".s-image";

pub const STAR_ICON: &str = "i.a-icon-star-small";

pub const STAR_CLASS_PREFIX: &str = "a-star-small-";

pub const UNIT_COUNT: &str = ".a-size-base.a-color-base.s-background-color-platinum";

// Shared by purchase count and original price.
pub const SECONDARY_LABEL: &str = ".a-size-base.a-color-secondary";

pub const SHIPPING_INFO: &str = ".a-row.a-size-base.a-color-secondary .a-size-small";

/// The table above, compiled once.
#[derive(Debug)]
pub struct CompiledSelectors {
    pub container: Selector,
    pub title: Vec<Selector>,
    pub rating: Selector,
    pub review_count: Selector,
    pub price: Vec<Selector>,
    pub image: Selector,
    pub star_icon: Selector,
    pub unit_count: Selector,
    pub purchase_count: Selector,
    pub price_per_unit: Selector,
    pub original_price: Selector,
    pub shipping_info: Selector,
}

impl CompiledSelectors {
    pub fn new() -> Result<Self, ParseError> {
        Ok(Self {
            container: compile(CONTAINER)?,
            title: compile_all(TITLE)?,
            rating: compile(RATING)?,
            review_count: compile(REVIEW_COUNT)?,
            price: compile_all(PRICE)?,
            image: compile(IMAGE)?,
            star_icon: compile(STAR_ICON)?,
            unit_count: compile(UNIT_COUNT)?,
            purchase_count: compile(SECONDARY_LABEL)?,
            price_per_unit: compile(OFFSCREEN_PRICE)?,
            original_price: compile(SECONDARY_LABEL)?,
            shipping_info: compile(SHIPPING_INFO)?,
        })
    }
}

pub fn compile(selector: &'static str) -> Result<Selector, ParseError> {
    Selector::parse(selector).map_err(|e| ParseError {
        selector,
        message: e.to_string(),
    })
}

fn compile_all(selectors: &[&'static str]) -> Result<Vec<Selector>, ParseError> {
    selectors.iter().copied().map(compile).collect()
}
