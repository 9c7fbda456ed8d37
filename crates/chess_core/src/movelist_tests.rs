use super::*;

#[test]
fn test_split_preserves_order() {
    let cfg = SelectorConfig::default();
    assert_eq!(split_moves("e4 d4 Nf3", &cfg), vec!["e4", "d4", "Nf3"]);
}

#[test]
fn test_repeated_spaces_collapse() {
    let cfg = SelectorConfig::default();
    assert_eq!(split_moves("  e4   d4 ", &cfg), vec!["e4", "d4"]);
    assert!(split_moves("", &cfg).is_empty());
    assert!(split_moves("   ", &cfg).is_empty());
}

#[test]
fn test_count_cap() {
    let cfg = SelectorConfig {
        max_moves: 2,
        ..Default::default()
    };
    assert_eq!(split_moves("a3 a4 b3 b4", &cfg), vec!["a3", "a4"]);

    let many = vec!["h3"; 300].join(" ");
    assert_eq!(split_moves(&many, &SelectorConfig::default()).len(), 256);
}

#[test]
fn test_token_length_cap() {
    let cfg = SelectorConfig::default();
    let tokens = split_moves("abcdefghijklmnopqrst e4", &cfg);
    assert_eq!(tokens, vec!["abcdefghijklmno", "e4"]);
}

#[test]
fn test_truncation_respects_char_boundaries() {
    let cfg = SelectorConfig {
        max_token_len: 3,
        ..Default::default()
    };
    // 'é' is two bytes; cutting at 3 would split it.
    assert_eq!(split_moves("aéb", &cfg), vec!["aé"]);
    assert_eq!(split_moves("aaé", &cfg), vec!["aa"]);
}
