use memchr::memmem;

/// Modifier suffix recognized inside a requested name. Not part of the
/// encoding identity; it selects LF/NL swapping in the converter.
pub const OPTION_SWAP_LFNL: &str = ",swaplfnl";

/// Splits a recognized option token off a requested name.
///
/// The stripped name is everything before the first occurrence of the token.
/// The extracted suffix travels with the resolution call as a value and gets
/// reattached to the internal canonical identifier at hand-off, so no state
/// outlives a single resolution.
pub fn split_options(name: &str) -> (&str, Option<&'static str>) {
    match memmem::find(name.as_bytes(), OPTION_SWAP_LFNL.as_bytes()) {
        Some(pos) => (&name[..pos], Some(OPTION_SWAP_LFNL)),
        None => (name, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_names_pass_through() {
        assert_eq!(split_options("UTF-8"), ("UTF-8", None));
        assert_eq!(split_options(""), ("", None));
    }

    #[test]
    fn option_suffix_is_stripped_and_remembered() {
        assert_eq!(
            split_options("ibm-37,swaplfnl"),
            ("ibm-37", Some(OPTION_SWAP_LFNL))
        );
    }

    #[test]
    fn split_happens_at_the_first_occurrence() {
        assert_eq!(
            split_options("cp037,swaplfnl,swaplfnl"),
            ("cp037", Some(OPTION_SWAP_LFNL))
        );
    }
}
