//! Token estimation for collected content
//!
//! Bundles are built for LLM consumption, so the summary and stats report a
//! token figure next to the byte count. Counting uses tiktoken's cl100k_base
//! encoding when it loads, with a character-class heuristic as fallback.

use once_cell::sync::Lazy;
use tiktoken_rs::{cl100k_base, CoreBPE};

// Loaded once on first use; an Err here just means we estimate instead
static CL100K_BPE: Lazy<Result<CoreBPE, String>> =
    Lazy::new(|| cl100k_base().map_err(|e| format!("Failed to load cl100k_base: {}", e)));

/// Count tokens in text, preferring the BPE encoding
pub fn count_tokens(text: &str) -> usize {
    if text.is_empty() {
        return 0;
    }

    match &*CL100K_BPE {
        Ok(bpe) => bpe.encode_with_special_tokens(text).len(),
        Err(_) => estimate_tokens(text),
    }
}

/// Estimate tokens with a fast heuristic (no BPE encoding)
///
/// Rough rates observed from cl100k_base: ~4 chars per token for ASCII
/// prose, ~2 for code symbols, ~1.5 for CJK, ~2 for other unicode.
pub fn estimate_tokens(text: &str) -> usize {
    if text.is_empty() {
        return 0;
    }

    let mut ascii_chars = 0usize;
    let mut cjk_chars = 0usize;
    let mut other_unicode = 0usize;
    let mut code_symbols = 0usize;

    for c in text.chars() {
        if c.is_ascii() {
            if is_code_symbol(c) {
                code_symbols += 1;
            } else {
                ascii_chars += 1;
            }
        } else if is_cjk_char(c) {
            cjk_chars += 1;
        } else {
            other_unicode += 1;
        }
    }

    ascii_chars.div_ceil(4)
        + code_symbols.div_ceil(2)
        + (cjk_chars * 2).div_ceil(3)
        + other_unicode.div_ceil(2)
}

/// Check if a character is a common code symbol/operator
#[inline]
fn is_code_symbol(c: char) -> bool {
    matches!(
        c,
        '(' | ')'
            | '['
            | ']'
            | '{'
            | '}'
            | '<'
            | '>'
            | '='
            | '+'
            | '-'
            | '*'
            | '/'
            | '%'
            | '&'
            | '|'
            | '^'
            | '!'
            | '~'
            | '?'
            | ':'
            | ';'
            | ','
            | '.'
            | '@'
            | '#'
            | '$'
            | '\\'
            | '"'
            | '\''
            | '`'
    )
}

/// Check if a character is CJK (Chinese/Japanese/Korean)
#[inline]
fn is_cjk_char(c: char) -> bool {
    let cp = c as u32;
    (0x4E00..=0x9FFF).contains(&cp)      // CJK Unified Ideographs
        || (0x3400..=0x4DBF).contains(&cp)  // CJK Extension A
        || (0x3000..=0x303F).contains(&cp)  // CJK Symbols and Punctuation
        || (0x3040..=0x309F).contains(&cp)  // Hiragana
        || (0x30A0..=0x30FF).contains(&cp)  // Katakana
        || (0xAC00..=0xD7AF).contains(&cp)  // Hangul Syllables
        || (0xFF00..=0xFFEF).contains(&cp) // Fullwidth Forms
}
