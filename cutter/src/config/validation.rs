//! Setting value validation.

use pattern_raster::BoundsPolicy;

use super::defaults;

/// Validate a setting value. Returns `Ok(())` if valid, or an error message.
pub fn validate_setting(key: &str, value: &str) -> Result<(), String> {
    match key {
        defaults::BOUNDS_POLICY => parse_bounds_policy(value).map(|_| ()),
        defaults::CUTS_FILE | defaults::INPUT_ROOT | defaults::OUTPUT_DIR | defaults::ASSETS_DIR => {
            if value.trim().is_empty() {
                return Err("path must not be empty".into());
            }
            Ok(())
        }
        _ => Ok(()),
    }
}

/// Parse a bounds policy name (case-insensitive).
pub fn parse_bounds_policy(value: &str) -> Result<BoundsPolicy, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "pad" => Ok(BoundsPolicy::Pad),
        "reject" => Ok(BoundsPolicy::Reject),
        _ => Err("must be 'pad' or 'reject'".into()),
    }
}
