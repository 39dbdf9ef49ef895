//! Listing query value types: price ranges, pagination and post filters.

use crate::error::DomainError;

use super::category::CategoryId;
use super::post::Post;

/// Inclusive price-per-day bounds, each side optional.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PriceRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl PriceRange {
    /// Parse a `"min-max"` filter such as `10-50`, `-50` or `10-`.
    ///
    /// Rejects a missing separator, unparsable bounds and `min > max`.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let (min, max) = raw.split_once('-').ok_or_else(|| {
            DomainError::Validation("price must be formatted as min-max".to_string())
        })?;

        let range = Self {
            min: parse_bound(min, "minimum")?,
            max: parse_bound(max, "maximum")?,
        };

        if let (Some(min), Some(max)) = (range.min, range.max) {
            if min > max {
                return Err(DomainError::Validation(format!(
                    "minimum price {min} exceeds maximum price {max}"
                )));
            }
        }

        Ok(range)
    }

    pub fn contains(&self, price: f64) -> bool {
        self.min.is_none_or(|min| price >= min) && self.max.is_none_or(|max| price <= max)
    }
}

fn parse_bound(raw: &str, which: &str) -> Result<Option<f64>, DomainError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }

    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Some(value)),
        _ => Err(DomainError::Validation(format!("invalid {which} price"))),
    }
}

/// One page of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    number: u64,
    size: u64,
}

/// Largest offset the store accepts; SQL offsets are signed 64-bit.
const MAX_OFFSET: u64 = i64::MAX as u64;

impl Page {
    pub const DEFAULT_SIZE: u64 = 10;

    /// Page numbers start at 1 and are clamped to the last page whose
    /// offset the store can address.
    pub fn new(number: u64, size: u64) -> Self {
        Self {
            number: number.clamp(1, Self::last_number(size)),
            size,
        }
    }

    /// Parse a `page` query value. Missing, non-numeric, non-positive and
    /// unaddressable values fall back to the first page.
    pub fn parse(raw: Option<&str>) -> Self {
        let last = Self::last_number(Self::DEFAULT_SIZE);
        let number = raw
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|n| (1..=last).contains(n))
            .unwrap_or(1);

        Self::new(number, Self::DEFAULT_SIZE)
    }

    pub fn number(&self) -> u64 {
        self.number
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    /// Never exceeds `i64::MAX`.
    pub fn offset(&self) -> u64 {
        (self.number - 1).saturating_mul(self.size).min(MAX_OFFSET)
    }

    fn last_number(size: u64) -> u64 {
        MAX_OFFSET.checked_div(size).map_or(u64::MAX, |n| n + 1)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(1, Self::DEFAULT_SIZE)
    }
}

/// Store-level post filter, with the category already resolved to an ID.
#[derive(Debug, Clone, Default)]
pub struct PostFilter {
    pub category_id: Option<CategoryId>,
    /// Case-insensitive substring of the title.
    pub title: Option<String>,
    pub price: PriceRange,
}

impl PostFilter {
    pub fn matches(&self, post: &Post) -> bool {
        self.category_id.is_none_or(|id| post.category_id == id)
            && self
                .title
                .as_deref()
                .is_none_or(|t| post.title.to_lowercase().contains(&t.to_lowercase()))
            && self.price.contains(post.price_per_day)
    }
}

/// Listing search as requested by a client, category given by name.
#[derive(Debug, Clone, Default)]
pub struct PostSearch {
    pub category: Option<String>,
    pub title: Option<String>,
    pub price: PriceRange,
    pub page: Page,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_range_both_bounds() {
        let range = PriceRange::parse("10-50").unwrap();
        assert_eq!(range.min, Some(10.0));
        assert_eq!(range.max, Some(50.0));
        assert!(range.contains(10.0));
        assert!(range.contains(50.0));
        assert!(!range.contains(50.5));
        assert!(!range.contains(9.99));
    }

    #[test]
    fn test_price_range_open_sides() {
        let upper_only = PriceRange::parse("-50").unwrap();
        assert_eq!(upper_only, PriceRange { min: None, max: Some(50.0) });

        let lower_only = PriceRange::parse("10-").unwrap();
        assert_eq!(lower_only, PriceRange { min: Some(10.0), max: None });

        let open = PriceRange::parse("-").unwrap();
        assert_eq!(open, PriceRange::default());
        assert!(open.contains(1_000_000.0));
    }

    #[test]
    fn test_price_range_rejects_inverted_bounds() {
        let result = PriceRange::parse("50-10");
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_price_range_rejects_garbage() {
        assert!(matches!(PriceRange::parse("cheap"), Err(DomainError::Validation(_))));
        assert!(matches!(PriceRange::parse("ten-20"), Err(DomainError::Validation(_))));
        assert!(matches!(PriceRange::parse("10-inf"), Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_page_defaults() {
        assert_eq!(Page::parse(None).number(), 1);
        assert_eq!(Page::parse(Some("0")).number(), 1);
        assert_eq!(Page::parse(Some("-3")).number(), 1);
        assert_eq!(Page::parse(Some("abc")).number(), 1);
        assert_eq!(Page::parse(None).size(), Page::DEFAULT_SIZE);
    }

    #[test]
    fn test_page_offset() {
        assert_eq!(Page::parse(Some("1")).offset(), 0);
        assert_eq!(Page::parse(Some("3")).offset(), 20);
        assert_eq!(Page::new(4, 25).offset(), 75);
    }

    #[test]
    fn test_unaddressable_page_falls_back_to_first() {
        let last = (i64::MAX as u64) / Page::DEFAULT_SIZE + 1;

        let edge = Page::parse(Some(&last.to_string()));
        assert_eq!(edge.number(), last);
        assert!(edge.offset() <= i64::MAX as u64);

        for raw in ["922337203685477582", "18446744073709551615", "99999999999999999999"] {
            let page = Page::parse(Some(raw));
            assert_eq!(page.number(), 1, "{raw}");
            assert_eq!(page.offset(), 0, "{raw}");
        }
    }

    #[test]
    fn test_page_new_clamps_to_addressable_offset() {
        let page = Page::new(u64::MAX, 25);
        assert!(page.offset() <= i64::MAX as u64);
        assert_eq!(page.number(), (i64::MAX as u64) / 25 + 1);

        assert!(Page::new(u64::MAX, 1).offset() <= i64::MAX as u64);
        assert_eq!(Page::new(7, 0).offset(), 0);
    }
}
