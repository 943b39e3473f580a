//! core/sanitize.rs
//! Make tag strings safe to use as path segments on the player's filesystem.

/// Characters the player's FAT filesystem (and Windows) refuse in names.
const ILLEGAL: &[char] = &['"', '*', '/', ':', '<', '>', '?', '\\', '|'];

/// Longest segment the player displays without truncating on its own.
const MAX_LEN: usize = 32;

/// Strip illegal characters, then cap at [`MAX_LEN`] characters and trim.
///
/// The trim runs last, so a segment that truncation left ending in a space
/// comes back shorter than [`MAX_LEN`]. Empty input stays empty; already-clean
/// short strings pass through unchanged.
pub fn sanitize(s: &str) -> String {
    let cleaned: String = s
        .chars()
        .filter(|c| !ILLEGAL.contains(c))
        .take(MAX_LEN)
        .collect();

    cleaned.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_every_illegal_character() {
        let out = sanitize("a\"b*c/d:e<f>g?h\\i|j");
        assert_eq!(out, "abcdefghij");

        for c in ILLEGAL {
            assert!(!out.contains(*c));
        }
    }

    #[test]
    fn truncates_to_32_characters() {
        let long = "x".repeat(80);
        assert_eq!(sanitize(&long).chars().count(), 32);
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let long = "é".repeat(80);
        assert_eq!(sanitize(&long).chars().count(), 32);
    }

    #[test]
    fn trims_after_truncation() {
        // 31 chars + space + more: the cut lands on the space, trim drops it.
        let input = format!("{} {}", "x".repeat(31), "y".repeat(10));
        assert_eq!(sanitize(&input), "x".repeat(31));
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(sanitize("  Song Title  "), "Song Title");
    }

    #[test]
    fn noop_on_clean_short_strings() {
        assert_eq!(sanitize("Best"), "Best");
        assert_eq!(sanitize(&sanitize("Best")), "Best");
    }

    #[test]
    fn empty_in_empty_out() {
        assert_eq!(sanitize(""), "");
        assert_eq!(sanitize("///"), "");
    }
}
