/// Inclusive code point ranges treated as emoji. Order matters only for speed;
/// the table overlaps, so it is scanned linearly rather than bisected.
pub const EMOJI_RANGES: &[(u32, u32)] = &[
    (0x1F600, 0x1F64F), // Emoticons
    (0x1F300, 0x1F5FF), // Misc Symbols and Pictographs
    (0x1F680, 0x1F6FF), // Transport and Map
    (0x1F1E6, 0x1F1FF), // Regional indicators
    (0x2600, 0x26FF),   // Misc symbols
    (0x2700, 0x27BF),   // Dingbats
    (0x1F900, 0x1F9FF), // Supplemental Symbols and Pictographs
    (0x1FA70, 0x1FAFF), // Symbols and Pictographs Extended-A
    (0x1F018, 0x1F270), // Assorted symbols
    (0x238C, 0x2454),   // Misc technical
    (0x20D0, 0x20FF),   // Combining marks for symbols
];

pub fn is_emoji(c: char) -> bool {
    let cp = c as u32;
    EMOJI_RANGES.iter().any(|&(lo, hi)| cp >= lo && cp <= hi)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ch(cp: u32) -> char {
        char::from_u32(cp).unwrap()
    }

    #[test]
    fn range_bounds_are_inclusive() {
        for &(lo, hi) in EMOJI_RANGES {
            assert!(is_emoji(ch(lo)), "U+{lo:X} should match");
            assert!(is_emoji(ch(hi)), "U+{hi:X} should match");
        }
    }

    #[test]
    fn neighbours_outside_every_range_do_not_match() {
        let inside = |cp: u32| EMOJI_RANGES.iter().any(|&(lo, hi)| cp >= lo && cp <= hi);
        for &(lo, hi) in EMOJI_RANGES {
            // Adjacent ranges (e.g. misc symbols / dingbats) share a border.
            for cp in [lo - 1, hi + 1] {
                if !inside(cp) {
                    assert!(!is_emoji(ch(cp)), "U+{cp:X} should not match");
                }
            }
        }
        assert!(!is_emoji(ch(0x20CF)));
        assert!(!is_emoji(ch(0x238B)));
        assert!(!is_emoji(ch(0x27C0)));
        assert!(!is_emoji(ch(0x1F017)));
        assert!(!is_emoji(ch(0x1FA6F)));
    }

    #[test]
    fn common_emoji_match() {
        for c in ['😀', '🚀', '✅', '☀', '🇩', '🥳', '🪐'] {
            assert!(is_emoji(c), "{c} should match");
        }
    }

    #[test]
    fn ordinary_text_does_not_match() {
        for c in ['a', 'Z', '0', ' ', '\n', 'é', 'ß', '中', '—', '€'] {
            assert!(!is_emoji(c), "{c:?} should not match");
        }
    }
}
