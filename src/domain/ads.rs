//! Ad headline templating.
//!
//! Templates carry a `{product}` placeholder (matched case-insensitively)
//! that is replaced by the product name. Rendered headlines longer than the
//! limit are cut and end with [`ELLIPSIS`].

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::{NoExpand, Regex};
use serde::Serialize;

pub const PLACEHOLDER: &str = "{product}";
pub const ELLIPSIS: &str = "...";

/// Upper bound on variants returned by [`generate_variants`].
pub const MAX_VARIANTS: usize = 20;

static PLACEHOLDER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\{product\}").unwrap());

const TEMPLATE_SUFFIXES: &[&str] = &[" - Contact us today", " - Free trial", " - Expert service"];
const TEMPLATE_PREFIXES: &[&str] = &["Professional ", "Premium ", "Trusted "];

const PREDEFINED_TEMPLATES: &[&str] = &[
    "{product} - Quality you can trust",
    "Expert {product} service, ask us today",
    "{product} on sale, limited-time offer",
    "Choose {product}, choose quality",
    "{product} solutions from a dedicated team",
    "Top-rated {product}, the first choice",
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdTemplateError {
    #[error("Ad template must contain the {{product}} placeholder")]
    MissingPlaceholder,

    #[error("max_length must be at least 3, got {0}")]
    MaxLengthTooSmall(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdVariant {
    pub headline: String,
    /// Length of `headline` in characters.
    pub length: usize,
    pub truncated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Returns `true` if `template` contains the placeholder in any letter case.
pub fn has_placeholder(template: &str) -> bool {
    PLACEHOLDER_PATTERN.is_match(template)
}

/// Replaces every placeholder occurrence with `product`.
pub fn substitute(template: &str, product: &str) -> String {
    PLACEHOLDER_PATTERN
        .replace_all(template, NoExpand(product))
        .into_owned()
}

/// Renders one headline from `template`.
///
/// # Errors
///
/// - [`AdTemplateError::MaxLengthTooSmall`] when `max_length < 3`, since the
///   ellipsis alone needs three characters
/// - [`AdTemplateError::MissingPlaceholder`] when the template has no
///   placeholder
///
/// # Examples
///
/// ```ignore
/// let ad = render("{product}", "A very very long product name", 10).unwrap();
/// assert_eq!(ad.headline, "A very ...");
/// assert!(ad.truncated);
/// ```
pub fn render(template: &str, product: &str, max_length: usize) -> Result<AdVariant, AdTemplateError> {
    if max_length < ELLIPSIS.len() {
        return Err(AdTemplateError::MaxLengthTooSmall(max_length));
    }
    if !has_placeholder(template) {
        return Err(AdTemplateError::MissingPlaceholder);
    }

    let full = substitute(template, product);
    let full_length = full.chars().count();

    let (headline, truncated) = if full_length > max_length {
        let mut cut: String = full.chars().take(max_length - ELLIPSIS.len()).collect();
        cut.push_str(ELLIPSIS);
        (cut, true)
    } else {
        (full, false)
    };

    Ok(AdVariant {
        length: headline.chars().count(),
        headline,
        truncated,
        description: None,
    })
}

/// Renders the caller's template, decorated versions of it and the
/// predefined templates.
///
/// Variants are deduplicated by headline, capped at [`MAX_VARIANTS`] and
/// stable-sorted by length.
pub fn generate_variants(
    template: &str,
    product: &str,
    max_length: usize,
) -> Result<Vec<AdVariant>, AdTemplateError> {
    let custom_description = format!("Generated from your template for {product}");

    let mut templates: Vec<(String, &str)> =
        vec![(template.to_owned(), custom_description.as_str())];
    templates.extend(
        TEMPLATE_SUFFIXES
            .iter()
            .map(|suffix| (format!("{template}{suffix}"), custom_description.as_str())),
    );
    templates.extend(
        TEMPLATE_PREFIXES
            .iter()
            .map(|prefix| (format!("{prefix}{template}"), custom_description.as_str())),
    );
    templates.extend(
        PREDEFINED_TEMPLATES
            .iter()
            .map(|t| ((*t).to_owned(), "Generated from a built-in template")),
    );

    let mut seen = HashSet::new();
    let mut variants = Vec::new();
    for (tpl, description) in templates {
        if variants.len() >= MAX_VARIANTS {
            break;
        }
        let mut variant = render(&tpl, product, max_length)?;
        if seen.insert(variant.headline.clone()) {
            variant.description = Some(description.to_owned());
            variants.push(variant);
        }
    }

    variants.sort_by_key(|v| v.length);
    Ok(variants)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_without_truncation() {
        let ad = render("Best {product} deal", "Widgets", 30).unwrap();
        assert_eq!(ad.headline, "Best Widgets deal");
        assert_eq!(ad.length, 17);
        assert!(!ad.truncated);
    }

    #[test]
    fn test_render_truncates_with_ellipsis() {
        let ad = render("{product}", "A very very long product name", 10).unwrap();
        assert_eq!(ad.headline, "A very ...");
        assert_eq!(ad.length, 10);
        assert!(ad.headline.ends_with("..."));
        assert!(ad.truncated);
    }

    #[test]
    fn test_render_exact_length_is_not_truncated() {
        let ad = render("{product}!", "Shoes", 6).unwrap();
        assert_eq!(ad.headline, "Shoes!");
        assert!(!ad.truncated);
    }

    #[test]
    fn test_render_placeholder_case_insensitive() {
        let ad = render("{Product} and {PRODUCT}", "X", 30).unwrap();
        assert_eq!(ad.headline, "X and X");
    }

    #[test]
    fn test_render_product_with_dollar_sign_is_literal() {
        let ad = render("Only {product}", "$5 deals", 30).unwrap();
        assert_eq!(ad.headline, "Only $5 deals");
    }

    #[test]
    fn test_render_missing_placeholder() {
        assert_eq!(
            render("No placeholder here", "X", 30),
            Err(AdTemplateError::MissingPlaceholder)
        );
    }

    #[test]
    fn test_render_max_length_too_small() {
        assert_eq!(
            render("{product}", "X", 2),
            Err(AdTemplateError::MaxLengthTooSmall(2))
        );
    }

    #[test]
    fn test_render_minimum_max_length() {
        let ad = render("{product}", "Long name", 3).unwrap();
        assert_eq!(ad.headline, "...");
        assert!(ad.truncated);
    }

    #[test]
    fn test_render_counts_characters_not_bytes() {
        let ad = render("{product}", "运动鞋专卖店官方旗舰", 8).unwrap();
        assert_eq!(ad.headline, "运动鞋专卖...");
        assert_eq!(ad.length, 8);
    }

    #[test]
    fn test_truncated_headline_is_prefix_of_full_text() {
        let full = substitute("Buy {product} now at the lowest price", "Running Shoes");
        let ad = render("Buy {product} now at the lowest price", "Running Shoes", 20).unwrap();
        let body = ad.headline.strip_suffix(ELLIPSIS).unwrap();
        assert!(full.starts_with(body));
        assert_eq!(ad.length, 20);
    }

    #[test]
    fn test_generate_variants() {
        let variants = generate_variants("Best {product}", "Tea", 30).unwrap();

        assert!(!variants.is_empty());
        assert!(variants.len() <= MAX_VARIANTS);
        assert!(variants.iter().any(|v| v.headline == "Best Tea"));
        assert!(variants.iter().all(|v| v.length <= 30));
        assert!(variants.iter().all(|v| v.description.is_some()));
        assert!(variants.windows(2).all(|w| w[0].length <= w[1].length));

        let unique: HashSet<_> = variants.iter().map(|v| &v.headline).collect();
        assert_eq!(unique.len(), variants.len());
    }

    #[test]
    fn test_generate_variants_propagates_template_errors() {
        assert_eq!(
            generate_variants("plain", "Tea", 30),
            Err(AdTemplateError::MissingPlaceholder)
        );
    }
}
