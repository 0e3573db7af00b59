//! 照合エンジンの型定義
//!
//! - Catalogue / Trade / Position: カタログ（読み込み後は不変）
//! - Intake: 依頼内容（境界で検証済み）
//! - MatchResult / MatchReason: 照合結果と根拠

use serde::{Deserialize, Serialize};

/// 請求可能な明細（ポジション）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// カタログ内で一意な番号
    pub position_number: u32,

    #[serde(default)]
    pub short_name_de: String,

    #[serde(default)]
    pub short_name_en: String,

    #[serde(default)]
    pub unit: String,

    #[serde(default)]
    pub description_de: String,

    #[serde(default)]
    pub description_en: String,

    /// 主力ポジション
    #[serde(default)]
    pub hero: bool,
}

impl Position {
    /// 照合に使うテキスト（英語の略称 + 説明）
    pub fn search_text(&self) -> String {
        format!("{} {}", self.short_name_en, self.description_en)
    }
}

/// 工種（コード単位のポジション群）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub code: String,

    #[serde(default)]
    pub name_de: String,

    #[serde(default)]
    pub name_en: String,

    pub positions: Vec<Position>,
}

/// カタログ全体
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalogue {
    pub trades: Vec<Trade>,
}

/// 依頼内容
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intake {
    // 必須項目の欠落は validate_intake で項目ごとに報告する
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub phone: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub address: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    #[serde(default)]
    pub description: String,

    /// 搬入・作業場所へのアクセスが困難
    #[serde(default)]
    pub difficult_access: bool,
}

/// 照合根拠
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchReason {
    /// 一致したトークン（インテーク側の順序）
    pub matched_keywords: Vec<String>,
    pub fuzzy_match: bool,
    pub category_boost: bool,
}

impl MatchReason {
    /// 表示用の根拠リスト
    pub fn describe(&self) -> Vec<String> {
        let mut reasons = Vec::new();

        if !self.matched_keywords.is_empty() {
            reasons.push(format!("Keywords: {}", self.matched_keywords.join(", ")));
        }
        if self.fuzzy_match {
            reasons.push("Fuzzy match".to_string());
        }
        if self.category_boost {
            reasons.push("Category boost".to_string());
        }

        reasons
    }
}

/// 照合結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub position: Position,
    pub score: f64,
    pub why: MatchReason,
}
