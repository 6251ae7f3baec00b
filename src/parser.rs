use anyhow::Result;
use scraper::{ElementRef, Html, Selector};

use crate::error::ParseError;
use crate::models::Product;
use crate::selectors::{CompiledSelectors, STAR_CLASS_PREFIX, TITLE_PLACEHOLDER};

/// Turns a search-results page into product records.
#[derive(Debug)]
pub struct Extractor {
    selectors: CompiledSelectors,
}

impl Extractor {
    pub fn new() -> Result<Self, ParseError> {
        Ok(Self {
            selectors: CompiledSelectors::new()?,
        })
    }

    /// Products in document order. Containers without an image are skipped.
    pub fn extract(&self, html: &str) -> Vec<Product> {
        let doc = Html::parse_document(html);

        doc.select(&self.selectors.container)
            .filter_map(|container| self.extract_product(container))
            .collect()
    }

    fn extract_product(&self, product: ElementRef) -> Option<Product> {
        let s = &self.selectors;

        let image_url = product
            .select(&s.image)
            .next()
            .and_then(|img| img.value().attr("src"))
            .filter(|src| !src.is_empty())?
            .to_string();

        let title = s
            .title
            .iter()
            .filter_map(|sel| first_text(product, sel))
            .find(|text| !text.is_empty())
            .unwrap_or_else(|| TITLE_PLACEHOLDER.to_string());

        let price = s
            .price
            .iter()
            .find_map(|sel| product.select(sel).next())
            .map(|el| clean_price(&text_of(el)))
            .unwrap_or_default();

        Some(Product {
            title,
            rating: first_text(product, &s.rating).and_then(|t| parse_rating(&t)),
            review_count: first_text(product, &s.review_count)
                .map(|t| parse_review_count(&t))
                .unwrap_or(0),
            price,
            image_url,
            star_icon_class: product
                .select(&s.star_icon)
                .next()
                .and_then(|icon| {
                    icon.value()
                        .classes()
                        .find(|class| class.starts_with(STAR_CLASS_PREFIX))
                        .map(str::to_string)
                }),
            unit_count: first_text(product, &s.unit_count).unwrap_or_default(),
            purchase_count: first_text(product, &s.purchase_count).unwrap_or_default(),
            price_per_unit: first_text(product, &s.price_per_unit)
                .map(|t| clean_price(&t))
                .unwrap_or_default(),
            original_price: first_text(product, &s.original_price).unwrap_or_default(),
            shipping_info: first_text(product, &s.shipping_info).unwrap_or_default(),
        })
    }
}

pub fn parse_products(html: &str) -> Result<Vec<Product>> {
    let extractor = Extractor::new()?;
    Ok(extractor.extract(html))
}

fn text_of(el: ElementRef) -> String {
    el.text().collect()
}

/// Trimmed text of the first element under `scope` matching `selector`.
fn first_text(scope: ElementRef, selector: &Selector) -> Option<String> {
    scope
        .select(selector)
        .next()
        .map(|el| text_of(el).trim().to_string())
}

/// "4,5 out of 5 stars" -> 4.5
pub fn parse_rating(label: &str) -> Option<f64> {
    label
        .split_whitespace()
        .next()?
        .replacen(',', ".", 1)
        .parse::<f64>()
        .ok()
        .filter(|r| r.is_finite())
}

/// "1,234" -> 1234, "(87)" -> 87. Anything without leading digits is 0.
pub fn parse_review_count(text: &str) -> u64 {
    let stripped = text.replace(',', "");
    let digits: String = stripped
        .trim()
        .trim_start_matches('(')
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().unwrap_or(0)
}

pub fn clean_price(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .replace("&nbsp;", " ")
}
