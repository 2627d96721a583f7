pub mod aliases;
pub mod host;
pub mod options;
pub mod resolve;

use indexmap::IndexSet;
use log::debug;

use crate::alias::data::StaticAliasTable;
use crate::alias::table::{AliasTable, StoreError};
use crate::converter::{Converter, ConverterFactory, EncodingRsFactory};

use self::aliases::collect_aliases;
use self::host::{EncodingRsRegistry, HostRegistry, host_canonical_name};
use self::options::split_options;
use self::resolve::{InternalLookup, resolve_internal};

/// Per-entry result of a catalog walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogOutcome {
    Resolved { host_name: String },
    Skipped { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: String,
    pub outcome: CatalogOutcome,
}

impl CatalogEntry {
    pub fn is_resolved(&self) -> bool {
        matches!(self.outcome, CatalogOutcome::Resolved { .. })
    }
}

/// The resolution pipeline: option extraction, internal canonicalization,
/// alias collection, host-canonical derivation, and hand-off to the
/// construction factory.
///
/// Collaborators are injected; `CharsetProvider::new()` wires the built-in
/// alias table, the encoding_rs host registry, and the encoding_rs factory.
/// Each `resolve` call is a self-contained pipeline holding no state beyond
/// its own locals, so one provider instance serves any number of callers.
pub struct CharsetProvider<T = StaticAliasTable, R = EncodingRsRegistry, F = EncodingRsFactory> {
    table: T,
    registry: R,
    factory: F,
}

impl CharsetProvider {
    pub fn new() -> Self {
        Self {
            table: StaticAliasTable,
            registry: EncodingRsRegistry,
            factory: EncodingRsFactory,
        }
    }
}

impl Default for CharsetProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, R, F> CharsetProvider<T, R, F>
where
    T: AliasTable,
    R: HostRegistry,
    F: ConverterFactory,
{
    pub fn with_parts(table: T, registry: R, factory: F) -> Self {
        Self {
            table,
            registry,
            factory,
        }
    }

    pub fn table(&self) -> &T {
        &self.table
    }

    /// Resolves a requested name to a constructed converter.
    ///
    /// When no internal mapping exists (or the alias store fails), the
    /// original, un-stripped name goes to the factory's raw path as a last
    /// resort; names the alias table has never heard of can still construct
    /// if the backend knows them.
    pub fn resolve(&self, requested: &str) -> Option<Converter> {
        let (stripped, option_suffix) = split_options(requested);

        let internal = match resolve_internal(&self.table, stripped) {
            Ok(InternalLookup::Found(name)) => name,
            Ok(outcome) => {
                debug!("{} has no internal mapping ({:?}), trying raw", requested, outcome);
                return self.factory.construct_raw(requested);
            }
            Err(err) => {
                debug!("internal resolution of {} failed ({}), trying raw", requested, err);
                return self.factory.construct_raw(requested);
            }
        };

        self.build(&internal, option_suffix)
    }

    fn build(&self, internal: &str, option_suffix: Option<&str>) -> Option<Converter> {
        let aliases = match collect_aliases(&self.table, internal) {
            Ok(aliases) => aliases,
            Err(err) => {
                debug!("alias collection for {} failed: {}", internal, err);
                return None;
            }
        };
        let host = host_canonical_name(&self.table, &self.registry, internal);

        let full_name = match option_suffix {
            Some(suffix) => format!("{}{}", internal, suffix),
            None => internal.to_string(),
        };
        self.factory.construct(&full_name, host.as_deref(), &aliases)
    }

    /// Every raw name in the alias table, unfiltered.
    pub fn catalog_all_names(&self) -> Result<Vec<String>, StoreError> {
        let count = self.table.available_count()?;
        let mut names = Vec::with_capacity(count);
        for index in 0..count {
            if let Some(name) = self.table.available_name(index)? {
                names.push(name);
            }
        }
        Ok(names)
    }

    /// Walks the full table, attempting to resolve every entry. A failing
    /// entry is reported as skipped; the walk never aborts.
    pub fn catalog_outcomes(&self) -> Vec<CatalogEntry> {
        let count = match self.table.available_count() {
            Ok(count) => count,
            Err(err) => {
                debug!("catalog walk unavailable: {}", err);
                return Vec::new();
            }
        };

        let mut entries = Vec::with_capacity(count);
        for index in 0..count {
            let name = match self.table.available_name(index) {
                Ok(Some(name)) => name,
                Ok(None) => continue,
                Err(err) => {
                    entries.push(CatalogEntry {
                        name: format!("#{}", index),
                        outcome: CatalogOutcome::Skipped {
                            reason: err.to_string(),
                        },
                    });
                    continue;
                }
            };

            let outcome = match self.build(&name, None) {
                Some(converter) => CatalogOutcome::Resolved {
                    host_name: converter.name().to_string(),
                },
                None => CatalogOutcome::Skipped {
                    reason: "construction failed".to_string(),
                },
            };
            entries.push(CatalogEntry { name, outcome });
        }
        entries
    }

    /// Host-canonical names of every entry that resolves, deduplicated in
    /// table order. Entries that fail individually are skipped.
    pub fn catalog_canonical_names(&self) -> Vec<String> {
        let mut names = IndexSet::new();
        for entry in self.catalog_outcomes() {
            if let CatalogOutcome::Resolved { host_name } = entry.outcome {
                names.insert(host_name);
            }
        }
        names.into_iter().collect()
    }

    /// Every converter that can actually be constructed from the table.
    pub fn converters(&self) -> Vec<Converter> {
        let count = match self.table.available_count() {
            Ok(count) => count,
            Err(err) => {
                debug!("catalog walk unavailable: {}", err);
                return Vec::new();
            }
        };

        let mut converters = Vec::new();
        for index in 0..count {
            if let Ok(Some(name)) = self.table.available_name(index) {
                if let Some(converter) = self.build(&name, None) {
                    converters.push(converter);
                }
            }
        }
        converters
    }
}
