use indexmap::IndexSet;

use crate::alias::table::{AliasTable, StoreError};

/// Collects the usable alias set of an internal canonical identifier.
///
/// Aliases containing `+` or `,` denote compound or variant descriptors and
/// are filtered out. An empty or unknown name yields an empty set. Store
/// failures surface to the caller so catalog walks can skip a single bad
/// entry instead of aborting.
pub fn collect_aliases(
    table: &impl AliasTable,
    internal: &str,
) -> Result<IndexSet<String>, StoreError> {
    let mut aliases = IndexSet::new();
    if internal.is_empty() {
        return Ok(aliases);
    }

    let count = table.alias_count(internal)?;
    for index in 0..count {
        if let Some(alias) = table.alias(internal, index)? {
            if !alias.contains('+') && !alias.contains(',') {
                aliases.insert(alias);
            }
        }
    }
    Ok(aliases)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alias::data::StaticAliasTable;

    #[test]
    fn aliases_keep_table_order() {
        let aliases = collect_aliases(&StaticAliasTable, "ISO-8859-1").unwrap();
        let all: Vec<&str> = aliases.iter().map(|name| name.as_str()).collect();
        assert_eq!(all[0], "ISO-8859-1");
        assert!(all.contains(&"csISOLatin1"));
    }

    #[test]
    fn compound_descriptors_are_filtered() {
        let aliases = collect_aliases(&StaticAliasTable, "ISO-2022-JP").unwrap();
        assert!(!aliases.is_empty());
        for alias in &aliases {
            assert!(!alias.contains('+'), "{}", alias);
            assert!(!alias.contains(','), "{}", alias);
        }
        // The comma-bearing canonical identifier itself is excluded.
        assert!(!aliases.contains("ISO_2022,locale=ja,version=0"));
    }

    #[test]
    fn empty_and_unknown_names_yield_empty_sets() {
        assert!(collect_aliases(&StaticAliasTable, "").unwrap().is_empty());
        assert!(
            collect_aliases(&StaticAliasTable, "made-up-name")
                .unwrap()
                .is_empty()
        );
    }
}
