use encoding_rs::Encoding;
use log::{debug, trace};

use crate::alias::standard::{HOST_PRECEDENCE, Standard};
use crate::alias::table::{AliasTable, StoreError};

use super::resolve::{InternalLookup, UNREGISTERED_PREFIX, has_unregistered_prefix, resolve_internal};

/// Failure raised by the host registry for names it rejects outright.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    UnknownName(String),
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryError::UnknownName(name) => {
                write!(f, "host registry does not know {}", name)
            }
        }
    }
}

impl std::error::Error for RegistryError {}

/// The host platform's own charset registry, consulted as an oracle.
pub trait HostRegistry {
    fn is_recognized(&self, name: &str) -> bool;

    /// The registry's own preferred spelling for a name it recognizes.
    fn preferred_spelling(&self, name: &str) -> Result<String, RegistryError>;
}

/// Host registry backed by the encoding_rs label set.
#[derive(Debug, Default, Clone, Copy)]
pub struct EncodingRsRegistry;

impl HostRegistry for EncodingRsRegistry {
    fn is_recognized(&self, name: &str) -> bool {
        Encoding::for_label(name.as_bytes()).is_some()
    }

    fn preferred_spelling(&self, name: &str) -> Result<String, RegistryError> {
        Encoding::for_label(name.as_bytes())
            .map(|encoding| encoding.name().to_string())
            .ok_or_else(|| RegistryError::UnknownName(name.to_string()))
    }
}

fn with_unregistered_prefix(name: &str) -> String {
    if has_unregistered_prefix(name) {
        name.to_string()
    } else {
        format!("{}{}", UNREGISTERED_PREFIX, name)
    }
}

/// Step A of the derivation: standard spellings in precedence order, then the
/// first `x-` alias in index order, then the legacy last resort (UTR22
/// spelling, alias index 1 for compound comma names, the canonical itself)
/// with the unregistered prefix attached exactly once.
fn derive_candidate(table: &impl AliasTable, internal: &str) -> Result<String, StoreError> {
    for standard in HOST_PRECEDENCE {
        if let Some(spelling) = table.standard_name(internal, *standard)? {
            trace!("host candidate for {} via {}", internal, standard);
            return Ok(spelling);
        }
    }

    let count = table.alias_count(internal)?;
    for index in 0..count {
        if let Some(alias) = table.alias(internal, index)? {
            if has_unregistered_prefix(&alias) {
                trace!("host candidate for {} via alias {}", internal, alias);
                return Ok(alias);
            }
        }
    }

    let mut name = table.standard_name(internal, Standard::Utr22)?;
    if name.is_none() && internal.contains(',') {
        name = table.alias(internal, 1)?;
    }
    let name = name.unwrap_or_else(|| internal.to_string());
    Ok(with_unregistered_prefix(&name))
}

/// Derives the name the host registry ought to use for an internal canonical
/// identifier.
///
/// An empty input yields `None` without consulting any collaborator. A store
/// failure during derivation means no host name is available, not a failed
/// resolution. Cross-validation against the registry may replace the
/// candidate with the registry's own spelling, but only when that spelling
/// resolves back to a real internal canonical identifier; any error raised
/// while cross-validating voids the whole derivation.
pub fn host_canonical_name(
    table: &impl AliasTable,
    registry: &impl HostRegistry,
    internal: &str,
) -> Option<String> {
    if internal.is_empty() {
        return None;
    }

    let candidate = match derive_candidate(table, internal) {
        Ok(candidate) => candidate,
        Err(err) => {
            debug!("host derivation for {} hit the store error {}", internal, err);
            return None;
        }
    };

    if registry.is_recognized(&candidate) {
        let preferred = match registry.preferred_spelling(&candidate) {
            Ok(preferred) => preferred,
            Err(err) => {
                debug!("host cross-validation of {} failed: {}", candidate, err);
                return None;
            }
        };
        if preferred != candidate {
            match resolve_internal(table, &preferred) {
                Ok(InternalLookup::Found(_)) => {
                    trace!("host registry prefers {} over {}", preferred, candidate);
                    return Some(preferred);
                }
                Ok(_) => {}
                Err(err) => {
                    debug!("host cross-validation of {} failed: {}", preferred, err);
                    return None;
                }
            }
        }
    }

    Some(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alias::data::StaticAliasTable;

    #[test]
    fn standard_spellings_come_back_unprefixed() {
        let host = host_canonical_name(&StaticAliasTable, &EncodingRsRegistry, "KOI8-R");
        assert_eq!(host.as_deref(), Some("KOI8-R"));
    }

    #[test]
    fn registry_spelling_replaces_a_divergent_candidate() {
        // The registry folds US-ASCII into windows-1252, which resolves
        // internally, so the registry spelling wins.
        let host = host_canonical_name(&StaticAliasTable, &EncodingRsRegistry, "US-ASCII");
        assert_eq!(host.as_deref(), Some("windows-1252"));
    }

    #[test]
    fn existing_prefixed_alias_is_used_as_is() {
        let host = host_canonical_name(&StaticAliasTable, &EncodingRsRegistry, "mac-cyrillic");
        assert_eq!(host.as_deref(), Some("x-mac-cyrillic"));
    }

    #[test]
    fn utr22_fallback_gains_the_prefix() {
        let host = host_canonical_name(&StaticAliasTable, &EncodingRsRegistry, "ibm-37_P100-1995");
        assert_eq!(host.as_deref(), Some("x-ibm-37"));
    }

    #[test]
    fn compound_names_fall_back_to_alias_index_one() {
        let host = host_canonical_name(
            &StaticAliasTable,
            &EncodingRsRegistry,
            "ISO_2022,locale=ja,version=1",
        );
        assert_eq!(host.as_deref(), Some("x-ibm-5054"));
    }

    #[test]
    fn empty_input_short_circuits() {
        assert_eq!(
            host_canonical_name(&StaticAliasTable, &EncodingRsRegistry, ""),
            None
        );
    }

    #[test]
    fn prefix_is_never_doubled() {
        assert_eq!(with_unregistered_prefix("x-user-defined"), "x-user-defined");
        assert_eq!(with_unregistered_prefix("X-Custom"), "X-Custom");
        assert_eq!(with_unregistered_prefix("ibm-37"), "x-ibm-37");
    }
}
