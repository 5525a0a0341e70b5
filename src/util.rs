use serde::Serialize;

/// Get the serde-serialized name of a unit enum variant.
/// Uses serde's own rules (rename_all, rename, etc.) as the single source of truth.
/// Returns `None` for non-string variants (data-carrying variants).
pub fn serde_variant_name<T: Serialize>(val: &T) -> Option<String> {
    match serde_json::to_value(val) {
        Ok(serde_json::Value::String(s)) => Some(s),
        _ => None,
    }
}

/// Get serde-serialized names for all variants of an enum.
/// Filters out any non-string variants (data-carrying variants).
pub fn serde_variant_names<T: Serialize>(variants: &[T]) -> Vec<String> {
    variants.iter().filter_map(serde_variant_name).collect()
}

/// Deserialize a string into an enum variant using serde's own rules.
pub fn from_serde_str<T: for<'de> serde::Deserialize<'de>>(s: &str) -> Option<T> {
    serde_json::from_value(serde_json::Value::String(s.to_string())).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::StrokeEvent;
    use crate::model::BlendMode;

    #[test]
    fn variant_names_follow_serde_renames() {
        assert_eq!(serde_variant_names(&BlendMode::ALL), vec!["MIX", "OVERLAY"]);
        assert_eq!(serde_variant_name(&StrokeEvent::Release).as_deref(), Some("release"));
    }

    #[test]
    fn from_serde_str_rejects_unknown() {
        assert_eq!(from_serde_str::<StrokeEvent>("cancel"), Some(StrokeEvent::Cancel));
        assert_eq!(from_serde_str::<StrokeEvent>("Cancel"), None);
    }
}
