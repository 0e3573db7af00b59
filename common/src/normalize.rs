//! テキスト正規化・トークン化
//!
//! インテーク側とポジション側で同じ処理を通すこと。
//!
//! ## 処理フロー
//! 1. 小文字化
//! 2. NFD分解して結合文字（ダイアクリティカルマーク）を除去
//! 3. 英数字・空白以外を空白に置換
//! 4. 連続空白を1つに、前後をトリム

use lazy_static::lazy_static;
use std::collections::{HashMap, HashSet};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    static ref STOP_WORDS: HashSet<&'static str> = [
        "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "has", "he", "in",
        "is", "it", "its", "of", "on", "that", "the", "to", "was", "were", "will", "with",
        "this", "but", "they", "have", "had", "what", "said", "each", "which", "their", "if",
        "do", "how", "up", "out", "many", "then", "them", "these", "so", "some", "her",
        "would", "make", "like", "into", "him", "time", "look", "two", "more", "write", "go",
        "see", "no", "way", "could", "my", "than", "first", "been", "call", "who", "now",
        "find", "down", "day", "did", "get", "come", "made", "may", "part",
    ]
    .into_iter()
    .collect();

    /// 語形変化・類義語 → 正規形
    static ref SYNONYMS: HashMap<&'static str, &'static str> = [
        ("installation", "install"),
        ("installing", "install"),
        ("mount", "install"),
        ("mounting", "install"),
        ("setup", "install"),
        ("renovation", "renovate"),
        ("renovating", "renovate"),
        ("repairing", "repair"),
        ("fix", "repair"),
        ("fixing", "repair"),
        ("painting", "paint"),
        ("painted", "paint"),
        ("electrical", "electric"),
        ("plumbing", "plumb"),
        ("demolition", "demolish"),
        ("demolishing", "demolish"),
        ("dismantling", "demolish"),
        ("dismantle", "demolish"),
        ("tiles", "tile"),
        ("windows", "window"),
        ("walls", "wall"),
        ("floors", "floor"),
        ("flooring", "floor"),
        ("sockets", "socket"),
        ("switches", "switch"),
        ("fixtures", "fixture"),
        ("sinks", "sink"),
        ("toilets", "toilet"),
        ("bathtubs", "bathtub"),
        ("partitions", "partition"),
    ]
    .into_iter()
    .collect();
}

/// テキストを正規化する
///
/// 冪等: `normalize_text(&normalize_text(x)) == normalize_text(x)`
pub fn normalize_text(text: &str) -> String {
    let folded: String = text
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(|c| if c.is_alphanumeric() || c.is_whitespace() { c } else { ' ' })
        .collect();

    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// 正規形のトークンを返す（重複なし、初出順）
///
/// 1文字以下のトークンとストップワードは除外する。空入力は空のVec。
pub fn tokenize(text: &str) -> Vec<String> {
    let normalized = normalize_text(text);
    let mut seen = HashSet::new();

    normalized
        .split(' ')
        .filter(|token| token.chars().count() > 1)
        .map(canonical)
        .filter(|token| !STOP_WORDS.contains(token))
        .filter(|token| seen.insert(*token))
        .map(str::to_string)
        .collect()
}

fn canonical(token: &str) -> &str {
    SYNONYMS.get(token).copied().unwrap_or(token)
}
