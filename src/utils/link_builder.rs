//! Tracking link construction.

use crate::domain::entities::ProductId;

/// Builds a tracking link from a platform base URL, a product and the
/// campaign-wide link ordinal.
///
/// The path segment is `<product-id>_<ordinal>`; a trailing slash on the base
/// URL is tolerated.
///
/// # Examples
///
/// ```ignore
/// let link = build_tracking_link("https://track.fb.test", &ProductId::from("p1"), 1);
/// assert_eq!(link, "https://track.fb.test/p1_1");
/// ```
pub fn build_tracking_link(base_url: &str, product_id: &ProductId, ordinal: usize) -> String {
    format!(
        "{}/{}_{}",
        base_url.trim_end_matches('/'),
        product_id,
        ordinal
    )
}
