//! Image reference normalization.
//!
//! Pure functions only. Every image string that crosses into an invocation
//! or a comparison goes through [`normalize_image_reference`] first.

/// Tag appended to references that carry none.
pub const DEFAULT_TAG: &str = "latest";

/// Separator between repository and tag.
pub const TAG_SEPARATOR: char = ':';

/// Appends `:latest` to a reference without a colon; returns it unchanged otherwise.
///
/// Any colon counts as a tag separator, so registry ports
/// (`localhost:5000/app`) are left untouched. The empty string becomes
/// `":latest"`.
#[must_use]
pub fn normalize_image_reference(image: &str) -> String {
    if image.contains(TAG_SEPARATOR) {
        image.to_string()
    } else {
        format!("{image}{TAG_SEPARATOR}{DEFAULT_TAG}")
    }
}

/// Returns `true` when `normalized` appears as a whole line of `listing`.
///
/// `listing` is the `repository:tag` output of an image list, one record per
/// line. Matching is exact: no trimming, prefix or fuzzy comparison.
#[must_use]
pub fn image_listed(listing: &str, normalized: &str) -> bool {
    listing.split('\n').any(|line| line == normalized)
}
