use encoding_rs::Encoding;
use indexmap::IndexSet;
use log::debug;

use crate::alias::data;
use crate::provider::options::split_options;

/// A constructed encoder/decoder handle.
///
/// Carries the resolved identity triple (internal name with any option
/// suffix, host-canonical name, alias set) and delegates byte work to the
/// backing encoding_rs table.
#[derive(Debug, Clone)]
pub struct Converter {
    internal_name: String,
    host_name: Option<String>,
    aliases: IndexSet<String>,
    encoding: &'static Encoding,
    swap_lfnl: bool,
}

impl Converter {
    pub fn new(
        internal_name: String,
        host_name: Option<String>,
        aliases: IndexSet<String>,
        encoding: &'static Encoding,
        swap_lfnl: bool,
    ) -> Self {
        Self {
            internal_name,
            host_name,
            aliases,
            encoding,
            swap_lfnl,
        }
    }

    /// Internal canonical identifier, including any option suffix.
    pub fn internal_name(&self) -> &str {
        &self.internal_name
    }

    /// Host-canonical name when one was derived, otherwise the internal
    /// identifier without its option suffix.
    pub fn name(&self) -> &str {
        match &self.host_name {
            Some(name) => name,
            None => split_options(&self.internal_name).0,
        }
    }

    pub fn host_name(&self) -> Option<&str> {
        self.host_name.as_deref()
    }

    pub fn aliases(&self) -> impl Iterator<Item = &str> {
        self.aliases.iter().map(|alias| alias.as_str())
    }

    pub fn contains_alias(&self, name: &str) -> bool {
        self.aliases
            .iter()
            .any(|alias| alias.eq_ignore_ascii_case(name))
    }

    pub fn swaps_lfnl(&self) -> bool {
        self.swap_lfnl
    }

    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }

    pub fn decode(&self, input: &[u8]) -> (String, bool) {
        let (text, _, had_errors) = self.encoding.decode(input);
        (text.into_owned(), had_errors)
    }

    pub fn encode(&self, input: &str) -> (Vec<u8>, bool) {
        let (bytes, _, had_errors) = self.encoding.encode(input);
        (bytes.into_owned(), had_errors)
    }
}

/// Builds converter objects from resolved identities. Construction failure
/// means "no charset available" and is never retried.
pub trait ConverterFactory {
    fn construct(
        &self,
        internal: &str,
        host: Option<&str>,
        aliases: &IndexSet<String>,
    ) -> Option<Converter>;

    /// Last-resort path: build directly from a name the alias table had no
    /// mapping for.
    fn construct_raw(&self, name: &str) -> Option<Converter>;
}

/// Factory backed by encoding_rs tables.
#[derive(Debug, Default, Clone, Copy)]
pub struct EncodingRsFactory;

impl EncodingRsFactory {
    /// Builds a converter for a caller-supplied backend label, bypassing the
    /// alias table entirely. The converter gets the given name and an empty
    /// alias set.
    pub fn construct_with_label(&self, name: &str, label: &str) -> Option<Converter> {
        let encoding = Encoding::for_label(label.as_bytes())?;
        let (_, options) = split_options(name);
        Some(Converter::new(
            name.to_string(),
            None,
            IndexSet::new(),
            encoding,
            options.is_some(),
        ))
    }
}

fn backend_encoding(base: &str) -> Option<&'static Encoding> {
    if let Some(entry) = data::entry_for(base) {
        if let Some(encoding) = Encoding::for_label(entry.canonical.as_bytes()) {
            return Some(encoding);
        }
        for alias in entry.aliases {
            if let Some(encoding) = Encoding::for_label(alias.as_bytes()) {
                return Some(encoding);
            }
        }
        return None;
    }
    Encoding::for_label(base.as_bytes())
}

impl ConverterFactory for EncodingRsFactory {
    fn construct(
        &self,
        internal: &str,
        host: Option<&str>,
        aliases: &IndexSet<String>,
    ) -> Option<Converter> {
        let (base, options) = split_options(internal);
        let Some(encoding) = backend_encoding(base) else {
            debug!("no backend table for {}", base);
            return None;
        };
        Some(Converter::new(
            internal.to_string(),
            host.map(|name| name.to_string()),
            aliases.clone(),
            encoding,
            options.is_some(),
        ))
    }

    fn construct_raw(&self, name: &str) -> Option<Converter> {
        let (base, options) = split_options(name);
        let encoding = Encoding::for_label(base.as_bytes())?;
        Some(Converter::new(
            name.to_string(),
            None,
            IndexSet::new(),
            encoding,
            options.is_some(),
        ))
    }
}
