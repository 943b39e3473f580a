//! core/tags/util.rs
//! Small parsing helpers for tag reading.

/// Parse strings like:
/// - "3" -> Some(3)
/// - "3/12" -> Some(3) (the total is irrelevant here)
///
/// Some taggers write TRCK/TPOS as free text the library's numeric accessors
/// don't pick up; this is the fallback for those files.
pub(crate) fn parse_slash_pair_u32(s: Option<&str>) -> Option<u32> {
    let s = s?.trim();
    if s.is_empty() {
        return None;
    }

    s.split('/').next().and_then(|p| p.trim().parse::<u32>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_numbers_and_pairs() {
        assert_eq!(parse_slash_pair_u32(Some("3")), Some(3));
        assert_eq!(parse_slash_pair_u32(Some("3/12")), Some(3));
        assert_eq!(parse_slash_pair_u32(Some(" 07 / 12 ")), Some(7));
    }

    #[test]
    fn rejects_missing_and_garbage() {
        assert_eq!(parse_slash_pair_u32(None), None);
        assert_eq!(parse_slash_pair_u32(Some("")), None);
        assert_eq!(parse_slash_pair_u32(Some("  ")), None);
        assert_eq!(parse_slash_pair_u32(Some("x/2")), None);
    }
}
