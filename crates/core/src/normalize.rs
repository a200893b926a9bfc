//! Text normalization for searching item names and identifiers.
//!
//! `simplify` makes comparisons accent-insensitive, case-insensitive and
//! whitespace-tolerant:
//! - Unicode NFD decomposition
//! - Combining diacritical marks (U+0300..=U+036F) removed
//! - NFC recomposition
//! - Lowercase conversion
//! - `đ` folded to `d` (it has no canonical decomposition)
//! - Whitespace runs collapsed to one space, ends trimmed

use unicode_normalization::UnicodeNormalization;

fn is_combining_diacritic(c: char) -> bool {
    matches!(c, '\u{0300}'..='\u{036F}')
}

/// Normalize text for substring matching.
///
/// # Examples
///
/// ```
/// use warehouse_core::simplify;
///
/// assert_eq!(simplify("  Điện   THOẠI "), "dien thoai");
/// assert_eq!(simplify("Crème Brûlée"), "creme brulee");
/// ```
pub fn simplify(s: &str) -> String {
    let stripped: String = s.nfd().filter(|c| !is_combining_diacritic(*c)).collect();

    let folded: String = stripped
        .nfc()
        .collect::<String>()
        .to_lowercase()
        .chars()
        .map(|c| if c == 'đ' { 'd' } else { c })
        .collect();

    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_vietnamese_diacritics() {
        assert_eq!(simplify("Điện thoại"), "dien thoai");
        assert_eq!(simplify("ĐIỆN THOẠI"), "dien thoai");
        assert_eq!(simplify("xoá màn hình"), "xoa man hinh");
        assert_eq!(simplify("Thoát"), "thoat");
    }

    #[test]
    fn collapses_and_trims_whitespace() {
        assert_eq!(simplify("  Điện   thoại  "), "dien thoai");
        assert_eq!(simplify("a\t\tb\nc"), "a b c");
        assert_eq!(simplify("   "), "");
    }

    #[test]
    fn keeps_characters_without_marks() {
        assert_eq!(simplify("PHO12"), "pho12");
        assert_eq!(simplify("Galaxy S24"), "galaxy s24");
    }

    #[test]
    fn precomposed_and_decomposed_input_agree() {
        let precomposed = "caf\u{00E9}";
        let decomposed = "cafe\u{0301}";
        assert_eq!(simplify(precomposed), simplify(decomposed));
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: simplifying twice changes nothing.
            #[test]
            fn simplify_is_idempotent(input in "[ \\tA-Za-z0-9À-ÿĐđƠơƯưẠ-ỹ]{0,40}") {
                let once = simplify(&input);
                prop_assert_eq!(simplify(&once), once);
            }

            /// Property: output never carries leading, trailing or doubled spaces.
            #[test]
            fn simplify_output_is_whitespace_normal(input in "[ \\ta-zA-Zàáạảãđ]{0,40}") {
                let out = simplify(&input);
                prop_assert_eq!(out.trim(), out.as_str());
                prop_assert!(!out.contains("  "));
            }
        }
    }
}
