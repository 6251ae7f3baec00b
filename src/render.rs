use crate::models::Product;

const FULL_STAR: char = '★';
const HALF_STAR: char = '⯨';
const EMPTY_STAR: char = '☆';

/// Five glyphs, rating rounded to the nearest half star.
pub fn stars(rating: f64) -> String {
    let halves = (rating * 2.0).round().clamp(0.0, 10.0) as usize;
    let full = halves / 2;
    let half = halves % 2;

    let mut out = String::new();
    out.extend(std::iter::repeat_n(FULL_STAR, full));
    out.extend(std::iter::repeat_n(HALF_STAR, half));
    out.extend(std::iter::repeat_n(EMPTY_STAR, 5 - full - half));
    out
}

/// Plain-text card for terminal output.
pub fn card(product: &Product) -> String {
    let mut lines = vec![product.title.clone()];

    if let Some(rating) = product.rating {
        lines.push(format!("  {} {rating}", stars(rating)));
    }
    if !product.price.is_empty() {
        lines.push(format!("  {}", product.price));
    }
    if product.review_count > 0 {
        lines.push(format!("  ({} reviews)", product.review_count));
    }
    for label in [&product.unit_count, &product.purchase_count, &product.shipping_info] {
        if !label.is_empty() {
            lines.push(format!("  {label}"));
        }
    }
    lines.push(format!("  {}", product.image_url));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
