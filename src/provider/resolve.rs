use log::trace;

use crate::alias::standard::RESOLVE_PRECEDENCE;
use crate::alias::table::{AliasTable, StoreError};

/// Prefix carried by names absent from every public standard registry.
pub const UNREGISTERED_PREFIX: &str = "x-";

pub fn has_unregistered_prefix(name: &str) -> bool {
    // get() rather than slicing: byte index 2 need not be a char boundary.
    name.get(..UNREGISTERED_PREFIX.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(UNREGISTERED_PREFIX))
}

/// Outcome of resolving a requested name to an internal canonical identifier.
///
/// `Unregistered` and `NotFound` both mean "no mapping", but they are kept
/// apart: the former is a name the table syntactically recognized as
/// unregistered-namespace without a further mapping, the latter matched
/// nothing at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternalLookup {
    Found(String),
    Unregistered,
    NotFound,
}

impl InternalLookup {
    pub fn found(&self) -> Option<&str> {
        match self {
            InternalLookup::Found(name) => Some(name),
            _ => None,
        }
    }
}

/// Maps a requested name (options already stripped) to an internal canonical
/// identifier.
///
/// Standards in [`RESOLVE_PRECEDENCE`] are tried first, then the generic
/// alias lookup, then the same lookup with the `x-` prefix removed. A
/// [`StoreError`] aborts the lookup; the orchestrator converts it into the
/// unsupported outcome rather than keeping a partial result.
pub fn resolve_internal(
    table: &impl AliasTable,
    name: &str,
) -> Result<InternalLookup, StoreError> {
    for standard in RESOLVE_PRECEDENCE {
        if let Some(canonical) = table.canonical_name(name, *standard)? {
            trace!("resolved {} via {}", name, standard);
            return Ok(InternalLookup::Found(canonical));
        }
    }

    if let Some(canonical) = table.alias(name, 0)? {
        trace!("resolved {} via alias table", name);
        return Ok(InternalLookup::Found(canonical));
    }

    if has_unregistered_prefix(name) {
        let rest = &name[UNREGISTERED_PREFIX.len()..];
        return match table.alias(rest, 0)? {
            Some(canonical) => {
                trace!("resolved {} via prefix-stripped alias {}", name, rest);
                Ok(InternalLookup::Found(canonical))
            }
            None => Ok(InternalLookup::Unregistered),
        };
    }

    Ok(InternalLookup::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alias::data::StaticAliasTable;

    #[test]
    fn standard_spellings_win_over_aliases() {
        let table = StaticAliasTable;
        let lookup = resolve_internal(&table, "UTF-8").unwrap();
        assert_eq!(lookup, InternalLookup::Found("UTF-8".to_string()));
    }

    #[test]
    fn generic_aliases_resolve_when_no_standard_matches() {
        let table = StaticAliasTable;
        let lookup = resolve_internal(&table, "csISOLatin1").unwrap();
        assert_eq!(lookup, InternalLookup::Found("ISO-8859-1".to_string()));
    }

    #[test]
    fn prefixed_names_retry_without_the_prefix() {
        let table = StaticAliasTable;
        // x-sjis is not in the table, but sjis is.
        let lookup = resolve_internal(&table, "x-sjis").unwrap();
        assert_eq!(lookup, InternalLookup::Found("Shift_JIS".to_string()));
    }

    #[test]
    fn prefix_check_ignores_case() {
        let table = StaticAliasTable;
        let lookup = resolve_internal(&table, "X-sjis").unwrap();
        assert_eq!(lookup, InternalLookup::Found("Shift_JIS".to_string()));
    }

    #[test]
    fn unmapped_prefixed_names_are_unregistered() {
        let table = StaticAliasTable;
        let lookup = resolve_internal(&table, "x-unknown-made-up-name").unwrap();
        assert_eq!(lookup, InternalLookup::Unregistered);
    }

    #[test]
    fn unmapped_plain_names_are_not_found() {
        let table = StaticAliasTable;
        let lookup = resolve_internal(&table, "made-up-name").unwrap();
        assert_eq!(lookup, InternalLookup::NotFound);
    }

    #[test]
    fn short_names_do_not_panic_the_prefix_check() {
        assert!(!has_unregistered_prefix("x"));
        assert!(!has_unregistered_prefix(""));
        assert!(has_unregistered_prefix("X-"));
    }

    #[test]
    fn multi_byte_names_do_not_panic_the_prefix_check() {
        assert!(!has_unregistered_prefix("日本語"));
        let table = StaticAliasTable;
        let lookup = resolve_internal(&table, "日本語").unwrap();
        assert_eq!(lookup, InternalLookup::NotFound);
    }
}
