//! 文字バイグラムによるあいまい一致（Sørensen–Dice係数）
//!
//! 正規化後のテキスト（空白を含む）から隣接2文字の多重集合を作り、
//! 2·|共通| / (|A| + |B|) を返す。外部ライブラリは使わない。

use crate::normalize::normalize_text;
use std::collections::HashMap;

/// 類似度を計算（0.0〜1.0）
///
/// どちらかの正規化テキストが2文字未満なら0.0。
pub fn dice_similarity(a: &str, b: &str) -> f64 {
    let bigrams_a = bigrams(&normalize_text(a));
    let bigrams_b = bigrams(&normalize_text(b));

    if bigrams_a.is_empty() || bigrams_b.is_empty() {
        return 0.0;
    }

    let mut counts: HashMap<(char, char), usize> = HashMap::new();
    for bigram in &bigrams_a {
        *counts.entry(*bigram).or_insert(0) += 1;
    }

    let mut intersection = 0usize;
    for bigram in &bigrams_b {
        if let Some(count) = counts.get_mut(bigram) {
            if *count > 0 {
                *count -= 1;
                intersection += 1;
            }
        }
    }

    (2 * intersection) as f64 / (bigrams_a.len() + bigrams_b.len()) as f64
}

/// 隣接2文字の列
fn bigrams(text: &str) -> Vec<(char, char)> {
    let chars: Vec<char> = text.chars().collect();
    chars.windows(2).map(|w| (w[0], w[1])).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_texts() {
        assert!((dice_similarity("Install windows", "install   WINDOWS!") - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_disjoint_texts() {
        assert_eq!(dice_similarity("abc", "xyz"), 0.0);
    }

    #[test]
    fn test_short_texts() {
        assert_eq!(dice_similarity("", "install windows"), 0.0);
        assert_eq!(dice_similarity("a", "a"), 0.0);
        assert_eq!(dice_similarity("!!", "ab"), 0.0);
    }

    #[test]
    fn test_partial_overlap() {
        // night: ni ig gh ht / nacht: na ac ch ht → 共通1
        let score = dice_similarity("night", "nacht");
        assert!((score - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_multiset_counts() {
        // aaaa: aa×3 / aa: aa×1 → 2·1 / 4
        assert!((dice_similarity("aaaa", "aa") - 0.5).abs() < 1e-12);
        assert!((dice_similarity("aa", "aaaa") - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_bigrams_span_spaces() {
        assert_eq!(bigrams("a b"), vec![('a', ' '), (' ', 'b')]);
        assert!(dice_similarity("ab cd", "abcd") < 1.0);
    }

    #[test]
    fn test_similar_vs_dissimilar() {
        let position = "Install roof windows Install roof windows in building";
        let similar = dice_similarity("I need to install windows in the roof", position);
        let dissimilar = dice_similarity("I need to install windows", "Paint walls Paint interior walls");
        assert!(similar > 0.0 && similar <= 1.0);
        assert!(dissimilar < 0.5);
        assert!(similar > dissimilar);
    }
}
