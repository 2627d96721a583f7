use std::collections::HashMap;

use lazy_static::lazy_static;

use super::standard::Standard;
use super::table::{AliasTable, StoreError};

/// One converter in the built-in table. Alias index 0 is the internal
/// canonical identifier itself.
#[derive(Debug)]
pub struct ConverterEntry {
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
    pub mime: Option<&'static str>,
    pub iana: Option<&'static str>,
    pub utr22: Option<&'static str>,
}

impl ConverterEntry {
    pub fn standard(&self, standard: Standard) -> Option<&'static str> {
        match standard {
            Standard::Mime => self.mime,
            Standard::Iana => self.iana,
            Standard::Utr22 => self.utr22,
        }
    }
}

const ENTRIES: &[ConverterEntry] = &[
    ConverterEntry {
        canonical: "UTF-8",
        aliases: &["UTF-8", "ibm-1208", "ibm-1209", "cp1208", "unicode-1-1-utf-8"],
        mime: Some("UTF-8"),
        iana: Some("UTF-8"),
        utr22: None,
    },
    ConverterEntry {
        canonical: "UTF-16",
        aliases: &["UTF-16", "ISO-10646-UCS-2", "ibm-1204", "ucs-2", "csUnicode"],
        mime: Some("UTF-16"),
        iana: Some("UTF-16"),
        utr22: None,
    },
    ConverterEntry {
        canonical: "UTF-16BE",
        aliases: &["UTF-16BE", "ibm-1200", "UnicodeBig"],
        mime: Some("UTF-16BE"),
        iana: Some("UTF-16BE"),
        utr22: None,
    },
    ConverterEntry {
        canonical: "UTF-16LE",
        aliases: &["UTF-16LE", "ibm-1202", "UnicodeLittle"],
        mime: Some("UTF-16LE"),
        iana: Some("UTF-16LE"),
        utr22: None,
    },
    ConverterEntry {
        canonical: "UTF-32",
        aliases: &["UTF-32", "ISO-10646-UCS-4", "ibm-1236", "ucs-4", "csUCS4"],
        mime: Some("UTF-32"),
        iana: Some("UTF-32"),
        utr22: None,
    },
    ConverterEntry {
        canonical: "UTF-32BE",
        aliases: &["UTF-32BE", "ibm-1232"],
        mime: None,
        iana: Some("UTF-32BE"),
        utr22: None,
    },
    ConverterEntry {
        canonical: "UTF-32LE",
        aliases: &["UTF-32LE", "ibm-1234"],
        mime: None,
        iana: Some("UTF-32LE"),
        utr22: None,
    },
    ConverterEntry {
        canonical: "ISO-8859-1",
        aliases: &[
            "ISO-8859-1",
            "ibm-819",
            "cp819",
            "latin1",
            "8859-1",
            "iso-ir-100",
            "l1",
            "csISOLatin1",
        ],
        mime: Some("ISO-8859-1"),
        iana: Some("ISO-8859-1"),
        utr22: None,
    },
    ConverterEntry {
        canonical: "ISO-8859-2",
        aliases: &[
            "ISO-8859-2",
            "ibm-912",
            "cp912",
            "latin2",
            "iso-ir-101",
            "l2",
            "csISOLatin2",
        ],
        mime: Some("ISO-8859-2"),
        iana: Some("ISO-8859-2"),
        utr22: None,
    },
    ConverterEntry {
        canonical: "ISO-8859-5",
        aliases: &[
            "ISO-8859-5",
            "ibm-915",
            "cp915",
            "cyrillic",
            "iso-ir-144",
            "csISOLatinCyrillic",
        ],
        mime: Some("ISO-8859-5"),
        iana: Some("ISO-8859-5"),
        utr22: None,
    },
    ConverterEntry {
        canonical: "ISO-8859-7",
        aliases: &[
            "ISO-8859-7",
            "ibm-813",
            "cp813",
            "greek",
            "iso-ir-126",
            "ELOT_928",
            "csISOLatinGreek",
        ],
        mime: Some("ISO-8859-7"),
        iana: Some("ISO-8859-7"),
        utr22: None,
    },
    ConverterEntry {
        canonical: "ISO-8859-15",
        aliases: &["ISO-8859-15", "ibm-923", "cp923", "latin9", "l9"],
        mime: Some("ISO-8859-15"),
        iana: Some("ISO-8859-15"),
        utr22: None,
    },
    ConverterEntry {
        canonical: "US-ASCII",
        aliases: &[
            "US-ASCII",
            "ascii",
            "ANSI_X3.4-1968",
            "646",
            "iso-ir-6",
            "csASCII",
        ],
        mime: Some("US-ASCII"),
        iana: Some("US-ASCII"),
        utr22: None,
    },
    ConverterEntry {
        canonical: "windows-1251",
        aliases: &["windows-1251", "cp1251", "ANSI1251"],
        mime: Some("windows-1251"),
        iana: Some("windows-1251"),
        utr22: None,
    },
    ConverterEntry {
        canonical: "windows-1252",
        aliases: &["windows-1252", "cp1252", "ibm-5348"],
        mime: Some("windows-1252"),
        iana: Some("windows-1252"),
        utr22: None,
    },
    ConverterEntry {
        canonical: "windows-874",
        aliases: &["windows-874", "cp874", "ibm-874"],
        mime: None,
        iana: Some("windows-874"),
        utr22: None,
    },
    ConverterEntry {
        canonical: "TIS-620",
        aliases: &["TIS-620", "tis620.2533", "iso-ir-166"],
        mime: None,
        iana: Some("TIS-620"),
        utr22: None,
    },
    ConverterEntry {
        canonical: "KOI8-R",
        aliases: &["KOI8-R", "koi8", "ibm-878", "cskoi8r"],
        mime: Some("KOI8-R"),
        iana: Some("KOI8-R"),
        utr22: None,
    },
    ConverterEntry {
        canonical: "KOI8-U",
        aliases: &["KOI8-U", "ibm-1168"],
        mime: None,
        iana: Some("KOI8-U"),
        utr22: None,
    },
    ConverterEntry {
        canonical: "Shift_JIS",
        aliases: &["Shift_JIS", "sjis", "shift-jis", "pck", "csShiftJIS"],
        mime: Some("Shift_JIS"),
        iana: Some("Shift_JIS"),
        utr22: None,
    },
    ConverterEntry {
        canonical: "EUC-JP",
        aliases: &[
            "EUC-JP",
            "ibm-33722",
            "eucjis",
            "Extended_UNIX_Code_Packed_Format_for_Japanese",
            "csEUCPkdFmtJapanese",
        ],
        mime: Some("EUC-JP"),
        iana: Some("EUC-JP"),
        utr22: None,
    },
    ConverterEntry {
        canonical: "EUC-KR",
        aliases: &["EUC-KR", "ibm-970", "cp970", "5601", "csEUCKR"],
        mime: Some("EUC-KR"),
        iana: Some("EUC-KR"),
        utr22: None,
    },
    ConverterEntry {
        canonical: "GBK",
        aliases: &["GBK", "CP936", "MS936", "windows-936"],
        mime: None,
        iana: Some("GBK"),
        utr22: None,
    },
    ConverterEntry {
        canonical: "gb18030",
        aliases: &["gb18030", "ibm-1392", "windows-54936"],
        mime: None,
        iana: Some("GB18030"),
        utr22: None,
    },
    ConverterEntry {
        canonical: "Big5",
        aliases: &["Big5", "csBig5", "windows-950"],
        mime: Some("Big5"),
        iana: Some("Big5"),
        utr22: None,
    },
    ConverterEntry {
        canonical: "macintosh",
        aliases: &["macintosh", "mac", "csMacintosh"],
        mime: None,
        iana: Some("macintosh"),
        utr22: None,
    },
    ConverterEntry {
        canonical: "mac-cyrillic",
        aliases: &["mac-cyrillic", "x-mac-cyrillic", "maccy"],
        mime: None,
        iana: None,
        utr22: None,
    },
    ConverterEntry {
        canonical: "x-user-defined",
        aliases: &["x-user-defined"],
        mime: None,
        iana: None,
        utr22: None,
    },
    ConverterEntry {
        canonical: "ibm-37_P100-1995",
        aliases: &[
            "ibm-37_P100-1995",
            "ibm-37",
            "ebcdic-cp-us",
            "cp037",
            "037",
            "cpibm37",
        ],
        mime: None,
        iana: None,
        utr22: Some("ibm-37"),
    },
    ConverterEntry {
        canonical: "ISO_2022,locale=ja,version=0",
        aliases: &[
            "ISO_2022,locale=ja,version=0",
            "ISO-2022-JP",
            "csISO2022JP",
            "JIS_Encoding",
        ],
        mime: Some("ISO-2022-JP"),
        iana: Some("ISO-2022-JP"),
        utr22: None,
    },
    ConverterEntry {
        canonical: "ISO_2022,locale=ja,version=1",
        aliases: &["ISO_2022,locale=ja,version=1", "ibm-5054", "JIS7"],
        mime: None,
        iana: None,
        utr22: None,
    },
];

lazy_static! {
    static ref NAME_INDEX: HashMap<String, usize> = {
        let mut index = HashMap::new();
        for (pos, entry) in ENTRIES.iter().enumerate() {
            for name in entry.aliases {
                index.entry(name.to_ascii_lowercase()).or_insert(pos);
            }
            for spelling in [entry.mime, entry.iana, entry.utr22].into_iter().flatten() {
                index.entry(spelling.to_ascii_lowercase()).or_insert(pos);
            }
        }
        index
    };
}

pub fn entries() -> &'static [ConverterEntry] {
    ENTRIES
}

pub fn entry_for(name: &str) -> Option<&'static ConverterEntry> {
    NAME_INDEX
        .get(&name.to_ascii_lowercase())
        .map(|pos| &ENTRIES[*pos])
}

/// The built-in alias table. All data lives in static slices, so no operation
/// ever reports a [`StoreError`].
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticAliasTable;

impl AliasTable for StaticAliasTable {
    fn canonical_name(&self, name: &str, standard: Standard) -> Result<Option<String>, StoreError> {
        let found = entry_for(name).and_then(|entry| {
            entry
                .standard(standard)
                .filter(|spelling| spelling.eq_ignore_ascii_case(name))
                .map(|_| entry.canonical.to_string())
        });
        Ok(found)
    }

    fn standard_name(&self, name: &str, standard: Standard) -> Result<Option<String>, StoreError> {
        Ok(entry_for(name)
            .and_then(|entry| entry.standard(standard))
            .map(|spelling| spelling.to_string()))
    }

    fn alias(&self, name: &str, index: usize) -> Result<Option<String>, StoreError> {
        Ok(entry_for(name)
            .and_then(|entry| entry.aliases.get(index))
            .map(|alias| alias.to_string()))
    }

    fn alias_count(&self, name: &str) -> Result<usize, StoreError> {
        Ok(entry_for(name).map(|entry| entry.aliases.len()).unwrap_or(0))
    }

    fn available_count(&self) -> Result<usize, StoreError> {
        Ok(ENTRIES.len())
    }

    fn available_name(&self, index: usize) -> Result<Option<String>, StoreError> {
        Ok(ENTRIES.get(index).map(|entry| entry.canonical.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alias_index_zero_is_the_canonical_name() {
        for entry in entries() {
            assert_eq!(entry.aliases[0], entry.canonical, "{}", entry.canonical);
        }
    }

    #[test]
    fn every_alias_finds_its_own_entry() {
        for entry in entries() {
            for alias in entry.aliases {
                let found = entry_for(alias).expect(alias);
                assert_eq!(found.canonical, entry.canonical);
            }
        }
    }

    #[test]
    fn standard_spellings_find_their_entry() {
        for entry in entries() {
            for spelling in [entry.mime, entry.iana, entry.utr22].into_iter().flatten() {
                let found = entry_for(spelling).expect(spelling);
                assert_eq!(found.canonical, entry.canonical);
            }
        }
    }

    #[test]
    fn lookup_ignores_ascii_case() {
        let table = StaticAliasTable;
        assert_eq!(
            table.alias("CSISOLATIN1", 0).unwrap(),
            Some("ISO-8859-1".to_string())
        );
        assert_eq!(
            table.canonical_name("utf-8", Standard::Mime).unwrap(),
            Some("UTF-8".to_string())
        );
    }

    #[test]
    fn canonical_name_requires_the_standard_spelling() {
        let table = StaticAliasTable;
        // csISOLatin1 is a plain alias, not the MIME or IANA spelling.
        assert_eq!(
            table.canonical_name("csISOLatin1", Standard::Mime).unwrap(),
            None
        );
        assert_eq!(
            table.canonical_name("csISOLatin1", Standard::Iana).unwrap(),
            None
        );
    }

    #[test]
    fn unknown_names_have_no_aliases() {
        let table = StaticAliasTable;
        assert_eq!(table.alias_count("no-such-charset").unwrap(), 0);
        assert_eq!(table.alias("no-such-charset", 0).unwrap(), None);
    }
}
