//! GEN_KW namespace handling.
//!
//! ERT writes GEN_KW parameters to `parameters.txt` as `GROUP:NAME value`.
//! Lookups only care about the part after the first colon.

use indexmap::IndexMap;
use tracing::debug;

/// Removes everything up to and including the first colon.
///
/// Names without a colon are returned unchanged.
pub fn strip_namespace(name: &str) -> &str {
    match name.split_once(':') {
        Some((_, rest)) => rest,
        None => name,
    }
}

/// Applies [`strip_namespace`] to every key of `table`.
///
/// When two keys reduce to the same name the later entry wins; order of
/// first appearance is kept.
pub fn strip_namespace_keys<V>(table: IndexMap<String, V>) -> IndexMap<String, V> {
    let mut stripped = IndexMap::with_capacity(table.len());
    for (key, value) in table {
        let name = strip_namespace(&key).to_string();
        if stripped.insert(name, value).is_some() {
            debug!(
                "Parameter {} shadows an earlier entry with the same name",
                key
            );
        }
    }
    stripped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_name_unchanged() {
        assert_eq!(strip_namespace("SATNUM_WO"), "SATNUM_WO");
        assert_eq!(strip_namespace(""), "");
    }

    #[test]
    fn test_prefix_removed() {
        assert_eq!(strip_namespace("GLOBVAR:INTERP_WO"), "INTERP_WO");
        assert_eq!(strip_namespace(":INTERP_WO"), "INTERP_WO");
        assert_eq!(strip_namespace("GLOBVAR:"), "");
    }

    #[test]
    fn test_only_first_colon_is_separator() {
        assert_eq!(strip_namespace("A:B:C"), "B:C");
    }

    #[test]
    fn test_strip_keys() {
        let mut table = IndexMap::new();
        table.insert("NS:FOO".to_string(), "1".to_string());
        table.insert("BAR".to_string(), "2".to_string());

        let stripped = strip_namespace_keys(table);
        assert_eq!(stripped.get("FOO").map(String::as_str), Some("1"));
        assert_eq!(stripped.get("BAR").map(String::as_str), Some("2"));
        assert!(!stripped.contains_key("NS:FOO"));
    }

    #[test]
    fn test_strip_keys_collision_later_wins() {
        let mut table = IndexMap::new();
        table.insert("A:X".to_string(), 1);
        table.insert("Y".to_string(), 2);
        table.insert("B:X".to_string(), 3);

        let stripped = strip_namespace_keys(table);
        assert_eq!(stripped.len(), 2);
        assert_eq!(stripped["X"], 3);
        assert_eq!(stripped.keys().collect::<Vec<_>>(), vec!["X", "Y"]);
    }
}
