/// External naming standards the alias table carries spellings for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Standard {
    Mime,
    Iana,
    Utr22,
}

impl Standard {
    pub fn as_str(&self) -> &'static str {
        match self {
            Standard::Mime => "MIME",
            Standard::Iana => "IANA",
            Standard::Utr22 => "UTR22",
        }
    }
}

impl std::fmt::Display for Standard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Standards tried, in order, when resolving a requested name to an internal
/// canonical identifier. Standard-tagged spellings win over table-local
/// aliases, so this order must stay ahead of the generic alias fallbacks.
pub const RESOLVE_PRECEDENCE: &[Standard] = &[Standard::Mime, Standard::Iana];

/// Standards tried, in order, when deriving the host-facing canonical
/// spelling. UTR22 is not part of this list; it only participates in the
/// last-resort branch of the derivation.
pub const HOST_PRECEDENCE: &[Standard] = &[Standard::Mime, Standard::Iana];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_precedence_prefers_mime_over_iana() {
        assert_eq!(RESOLVE_PRECEDENCE, &[Standard::Mime, Standard::Iana][..]);
    }

    #[test]
    fn host_precedence_excludes_utr22() {
        assert!(!HOST_PRECEDENCE.contains(&Standard::Utr22));
    }

    #[test]
    fn tags_round_trip_as_text() {
        assert_eq!(Standard::Mime.as_str(), "MIME");
        assert_eq!(Standard::Iana.as_str(), "IANA");
        assert_eq!(Standard::Utr22.as_str(), "UTR22");
    }
}
