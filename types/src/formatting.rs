//! Display-name derivation for inventory items.
//!
//! Items carry optional prefix and title parts; the in-game name is built
//! from whichever parts are set. Empty part names are treated exactly like
//! missing parts.

fn non_empty(part: Option<&str>) -> Option<&str> {
    part.filter(|name| !name.is_empty())
}

/// Derive an item's display name from its name parts.
///
/// - Prefix and suffix both set: `"prefix suffix"`
/// - Only one set: that part alone
/// - Neither set: the fallback base name, if any
///
/// # Examples
/// ```
/// use livefeed_types::formatting::format_inventory_name;
/// assert_eq!(format_inventory_name(Some("Bonus"), Some("Pack"), None).as_deref(), Some("Bonus Pack"));
/// assert_eq!(format_inventory_name(None, Some("Pack"), None).as_deref(), Some("Pack"));
/// assert_eq!(format_inventory_name(Some(""), None, Some("Rocket")).as_deref(), Some("Rocket"));
/// assert_eq!(format_inventory_name(None, None, None), None);
/// ```
pub fn format_inventory_name(
    prefix: Option<&str>,
    suffix: Option<&str>,
    fallback: Option<&str>,
) -> Option<String> {
    match (non_empty(prefix), non_empty(suffix)) {
        (Some(prefix), Some(suffix)) => Some(format!("{prefix} {suffix}")),
        (None, Some(suffix)) => Some(suffix.to_string()),
        (Some(prefix), None) => Some(prefix.to_string()),
        (None, None) => fallback.map(str::to_string),
    }
}
