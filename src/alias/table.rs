use super::standard::Standard;

/// Backing-store failure raised by an alias table.
///
/// The resolution pipeline never surfaces this to external callers; each
/// component converts it into the next fallback in its chain (see the
/// provider module). Catalog enumeration reports it per entry instead of
/// aborting the whole walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The backing store could not be read
    Read(String),
    /// The backing store contents are malformed
    Malformed(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Read(detail) => write!(f, "alias store read failure: {}", detail),
            StoreError::Malformed(detail) => write!(f, "alias store malformed: {}", detail),
        }
    }
}

impl std::error::Error for StoreError {}

/// Read-only, pre-built source of converter names and aliases.
///
/// Name matching is ASCII-case-insensitive; returned names keep the table's
/// own spelling. Alias index 0 is the internal canonical identifier itself,
/// so `alias(name, 0)` doubles as "which converter does this name belong to".
///
/// Every operation may fail with a [`StoreError`]; implementations backed by
/// in-memory data simply never return one.
pub trait AliasTable {
    /// Internal canonical identifier of the converter whose `standard`
    /// spelling is `name`, if any.
    fn canonical_name(&self, name: &str, standard: Standard) -> Result<Option<String>, StoreError>;

    /// The `standard` spelling registered for the converter `name` belongs
    /// to, if any.
    fn standard_name(&self, name: &str, standard: Standard) -> Result<Option<String>, StoreError>;

    /// Alias at `index` of the converter `name` belongs to.
    fn alias(&self, name: &str, index: usize) -> Result<Option<String>, StoreError>;

    /// Number of aliases registered for the converter `name` belongs to.
    /// Zero when the name is unknown.
    fn alias_count(&self, name: &str) -> Result<usize, StoreError>;

    /// Number of converters in the table.
    fn available_count(&self) -> Result<usize, StoreError>;

    /// Internal canonical identifier of the converter at `index`.
    fn available_name(&self, index: usize) -> Result<Option<String>, StoreError>;
}
