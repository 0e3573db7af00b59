//! 照合・ランキング
//!
//! ## 処理フロー
//! 1. カタログを平坦化（工種コードを保持）
//! 2. 全ポジションをスコアリングし、根拠を作成
//! 3. ポジション番号で重複除去（スコアが高い方を残す）
//! 4. スコア降順に安定ソート（同点はカタログ順）
//! 5. 上位N件に切り詰め

use crate::normalize::tokenize;
use crate::score::{category_boost, fuzzy_score, keyword_ratio, matched_keywords};
use crate::signals::{extract_signals, intake_text};
use crate::types::{Catalogue, Intake, MatchReason, MatchResult};
use log::debug;
use std::collections::HashMap;

/// 返却件数のデフォルト
pub const DEFAULT_TOP_N: usize = 15;

/// シグナルごとの重み
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    pub keyword: f64,
    pub fuzzy: f64,
    /// `category_boost` の戻り値（0.0/0.2）に掛ける
    pub category_boost: f64,
}

impl Weights {
    pub const DEFAULT: Weights = Weights {
        keyword: 0.6,
        fuzzy: 0.3,
        category_boost: 0.1,
    };

    pub fn combine(&self, keyword: f64, fuzzy: f64, boost: f64) -> f64 {
        self.keyword * keyword + self.fuzzy * fuzzy + self.category_boost * boost
    }
}

impl Default for Weights {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// インテークをカタログと照合し、上位 `top_n` 件を返す
///
/// 純粋関数: 同じ入力には同じ順序の結果を返す。空の説明・空のカタログでも失敗しない。
pub fn match_intake(intake: &Intake, catalogue: &Catalogue, top_n: usize) -> Vec<MatchResult> {
    let signals = extract_signals(intake);
    let full_text = intake_text(intake);
    let weights = Weights::DEFAULT;

    let mut results = Vec::new();
    for (trade_code, position) in catalogue.positions() {
        let position_tokens = tokenize(&position.search_text());
        let matched = matched_keywords(&signals.tokens, &position_tokens);
        let keyword = keyword_ratio(matched.len(), signals.tokens.len(), position_tokens.len());
        let fuzzy = fuzzy_score(&full_text, position);
        let boost = category_boost(signals.difficult_access, trade_code);

        results.push(MatchResult {
            position: position.clone(),
            score: weights.combine(keyword, fuzzy, boost),
            why: MatchReason {
                matched_keywords: matched,
                fuzzy_match: fuzzy > 0.0,
                category_boost: boost > 0.0,
            },
        });
    }

    let scored = results.len();
    let mut ranked = deduplicate_by_position_number(results);
    let unique = ranked.len();
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked.truncate(top_n);

    debug!(
        "照合: トークン{}件, ポジション{}件, 重複除去後{}件, 返却{}件",
        signals.tokens.len(),
        scored,
        unique,
        ranked.len()
    );

    ranked
}

/// ポジション番号ごとにスコアが最も高い結果だけを残す
///
/// 残った結果は、その番号が最初に現れた位置に置かれる。
fn deduplicate_by_position_number(results: Vec<MatchResult>) -> Vec<MatchResult> {
    let mut slots: HashMap<u32, usize> = HashMap::new();
    let mut best: Vec<MatchResult> = Vec::with_capacity(results.len());

    for result in results {
        let number = result.position.position_number;
        match slots.get(&number) {
            Some(&slot) => {
                if result.score > best[slot].score {
                    best[slot] = result;
                }
            }
            None => {
                slots.insert(number, best.len());
                best.push(result);
            }
        }
    }

    best
}
