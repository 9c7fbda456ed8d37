//! Splitting a space-delimited move list into candidate tokens.

use crate::config::SelectorConfig;

/// Splits on single spaces, skipping empty runs, keeping at most
/// `cfg.max_moves` tokens each cut to `cfg.max_token_len` bytes.
pub fn split_moves<'a>(moves: &'a str, cfg: &SelectorConfig) -> Vec<&'a str> {
    moves
        .split(' ')
        .filter(|t| !t.is_empty())
        .take(cfg.max_moves)
        .map(|t| truncate_token(t, cfg.max_token_len))
        .collect()
}

fn truncate_token(token: &str, max_len: usize) -> &str {
    if token.len() <= max_len {
        return token;
    }
    let mut end = max_len;
    while !token.is_char_boundary(end) {
        end -= 1;
    }
    &token[..end]
}

#[cfg(test)]
#[path = "movelist_tests.rs"]
mod movelist_tests;
