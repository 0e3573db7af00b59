//! カタログ読み込み・検査モジュール
//!
//! JSON（`{"trades": [...]}`）から読み込み、構造が不正なら照合前にエラーにする。

use crate::error::{Error, Result};
use crate::types::{Catalogue, Position};
use log::warn;
use std::collections::{BTreeSet, HashSet};

/// カタログの統計情報
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogueStats {
    pub trades: usize,
    pub positions: usize,
    pub hero_positions: usize,
    /// 複数回出現するポジション番号（昇順）
    pub duplicate_ids: Vec<u32>,
}

impl Catalogue {
    /// JSON文字列から読み込み
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;

        let trades = value
            .get("trades")
            .and_then(|t| t.as_array())
            .ok_or_else(|| Error::InvalidCatalogue("missing trades array".into()))?;

        for (index, trade) in trades.iter().enumerate() {
            let code = trade
                .get("code")
                .and_then(|c| c.as_str())
                .ok_or_else(|| Error::InvalidCatalogue(format!("trade #{} has no code", index)))?;

            if !trade.get("positions").map(|p| p.is_array()).unwrap_or(false) {
                return Err(Error::InvalidCatalogue(format!(
                    "trade {} is missing its positions array",
                    code
                )));
            }
        }

        let catalogue: Catalogue = serde_json::from_value(value)?;

        let stats = catalogue.stats();
        if !stats.duplicate_ids.is_empty() {
            warn!(
                "カタログに重複したポジション番号があります（スコアの高い方のみ残ります）: {:?}",
                stats.duplicate_ids
            );
        }

        Ok(catalogue)
    }

    /// 全ポジションを（工種コード, ポジション）としてカタログ順に列挙
    pub fn positions(&self) -> impl Iterator<Item = (&str, &Position)> {
        self.trades.iter().flat_map(|trade| {
            trade
                .positions
                .iter()
                .map(move |position| (trade.code.as_str(), position))
        })
    }

    /// 統計情報を取得
    pub fn stats(&self) -> CatalogueStats {
        let mut seen = HashSet::new();
        let mut duplicates = BTreeSet::new();
        let mut positions = 0;
        let mut hero_positions = 0;

        for (_, position) in self.positions() {
            positions += 1;
            if position.hero {
                hero_positions += 1;
            }
            if !seen.insert(position.position_number) {
                duplicates.insert(position.position_number);
            }
        }

        CatalogueStats {
            trades: self.trades.len(),
            positions,
            hero_positions,
            duplicate_ids: duplicates.into_iter().collect(),
        }
    }
}
