//! Common test helpers for charset-rs tests.

use charset_rs::CharsetProvider;

/// Provider wired with the built-in table, the encoding_rs registry and the
/// encoding_rs factory.
pub fn provider() -> CharsetProvider {
    CharsetProvider::new()
}
