//! 個別スコア（キーワード一致・あいまい一致・カテゴリブースト）

use crate::fuzzy::dice_similarity;
use crate::normalize::tokenize;
use crate::types::Position;

/// カテゴリブーストの値（集計時にさらに重みが掛かる）
pub const CATEGORY_BOOST_VALUE: f64 = 0.2;

/// アクセス困難時にブーストする工種コード
pub const DIFFICULT_ACCESS_TRADE_CODES: &[&str] = &["0300"];

/// ポジション側トークンのうちインテークにも含まれるもの（インテーク側の順序）
pub fn matched_keywords(tokens: &[String], position_tokens: &[String]) -> Vec<String> {
    tokens
        .iter()
        .filter(|token| position_tokens.contains(token))
        .cloned()
        .collect()
}

/// キーワード一致スコア（0.0〜1.0）
///
/// 一致数を大きい方のトークン数で割る。両方空なら0.0。
pub fn keyword_score(tokens: &[String], position: &Position) -> f64 {
    let position_tokens = tokenize(&position.search_text());
    let matched = matched_keywords(tokens, &position_tokens);
    keyword_ratio(matched.len(), tokens.len(), position_tokens.len())
}

/// 一致数とトークン数からキーワード一致スコアを計算（トークン化済みの場合）
pub fn keyword_ratio(matched: usize, intake_tokens: usize, position_tokens: usize) -> f64 {
    let total = intake_tokens.max(position_tokens);
    if total == 0 {
        return 0.0;
    }

    matched as f64 / total as f64
}

/// あいまい一致スコア（0.0〜1.0）
pub fn fuzzy_score(intake_text: &str, position: &Position) -> f64 {
    dice_similarity(intake_text, &position.search_text())
}

/// カテゴリブースト（0.0 または CATEGORY_BOOST_VALUE）
pub fn category_boost(difficult_access: bool, trade_code: &str) -> f64 {
    if !difficult_access {
        return 0.0;
    }

    if DIFFICULT_ACCESS_TRADE_CODES.contains(&trade_code) {
        return CATEGORY_BOOST_VALUE;
    }

    0.0
}
