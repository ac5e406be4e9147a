//! Allow/block vocabulary for the emoji check.
//!
//! Both tables are plain data so the policy can be audited and tested apart
//! from the scanning loop in [`crate::classify`].

/// Monochrome symbols that are always permitted.
pub const ALLOWED_SYMBOLS: &[char] = &[
    '\u{2713}', // ✓ check mark
    '\u{00D7}', // × multiplication sign
    '\u{2192}', // → rightwards arrow
    '\u{2022}', // • bullet
    '\u{2013}', // – en dash
    '\u{2014}', // — em dash
];

/// Inclusive code point ranges treated as colorful emoji.
pub const BLOCKED_RANGES: &[(char, char)] = &[
    ('\u{1F600}', '\u{1F64F}'), // emoticons
    ('\u{1F680}', '\u{1F6FF}'), // transport and map symbols
    ('\u{1F300}', '\u{1F5FF}'), // misc symbols and pictographs
    ('\u{1F900}', '\u{1F9FF}'), // supplemental symbols and pictographs
    ('\u{1F1E0}', '\u{1F1FF}'), // regional indicators
    // Colorful dingbats that sit outside the pictograph blocks.
    ('\u{2705}', '\u{2705}'), // ✅
    ('\u{274C}', '\u{274C}'), // ❌
    ('\u{2B50}', '\u{2B50}'), // ⭐
    ('\u{2764}', '\u{2764}'), // ❤
    ('\u{2728}', '\u{2728}'), // ✨
    ('\u{2733}', '\u{2734}'), // ✳ ✴
    ('\u{2747}', '\u{2747}'), // ❇
    ('\u{2753}', '\u{2753}'), // ❓
    ('\u{2755}', '\u{2755}'), // ❕
    ('\u{2757}', '\u{2757}'), // ❗
    ('\u{2795}', '\u{2797}'), // ➕ ➖ ➗
];

/// Check if a character is on the allowlist.
pub fn is_allowed(c: char) -> bool {
    ALLOWED_SYMBOLS.contains(&c)
}

/// Check if a character falls in any blocked range.
pub fn in_blocked_range(c: char) -> bool {
    BLOCKED_RANGES
        .iter()
        .any(|&(start, end)| (start..=end).contains(&c))
}

/// Check if a character should be reported. The allowlist always wins.
pub fn is_offending(c: char) -> bool {
    !is_allowed(c) && in_blocked_range(c)
}
