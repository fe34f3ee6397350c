//! Body word counting.
//!
//! A word is a maximal whitespace-delimited token after carriage returns are
//! stripped (so CRLF and LF bodies count identically). Tokens made up
//! entirely of digits are not counted; page numbers and counters embedded
//! in prose would otherwise inflate the total.

/// Count the words in a post body. Pure and deterministic.
pub fn count_words(text: &str) -> usize {
    text.replace('\r', "")
        .split_whitespace()
        .filter(|token| !token.chars().all(|c| c.is_ascii_digit()))
        .count()
}
