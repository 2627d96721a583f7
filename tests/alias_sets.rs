mod common;

use common::provider;

#[test]
fn collected_aliases_never_contain_compound_markers() {
    for converter in provider().converters() {
        for alias in converter.aliases() {
            assert!(!alias.contains('+'), "{}", alias);
            assert!(!alias.contains(','), "{}", alias);
        }
    }
}

#[test]
fn alias_sets_include_the_canonical_spelling_first() {
    let converter = provider().resolve("EUC-KR").expect("EUC-KR resolves");
    let first = converter.aliases().next().expect("non-empty alias set");
    assert_eq!(first, "EUC-KR");
}

#[test]
fn comma_bearing_canonicals_are_absent_from_their_own_alias_set() {
    let converter = provider().resolve("ISO-2022-JP").expect("resolves");
    assert!(!converter.contains_alias("ISO_2022,locale=ja,version=0"));
    assert!(converter.contains_alias("csISO2022JP"));
}

#[test]
fn alias_membership_check_ignores_case() {
    let converter = provider().resolve("ISO-8859-1").expect("resolves");
    assert!(converter.contains_alias("CSISOLATIN1"));
    assert!(!converter.contains_alias("no-such-alias"));
}
