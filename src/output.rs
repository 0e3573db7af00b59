//! 照合結果の出力（表・JSON）

use position_matcher_common::MatchResult;
use serde::Serialize;

const NAME_WIDTH: usize = 40;

/// JSON出力の形式
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResponse {
    pub results: Vec<MatchResult>,
    pub generated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalogue_digest: Option<String>,
}

impl MatchResponse {
    pub fn new(results: Vec<MatchResult>, catalogue_digest: Option<&str>) -> Self {
        Self {
            results,
            generated_at: chrono::Utc::now().to_rfc3339(),
            catalogue_digest: catalogue_digest.map(str::to_string),
        }
    }
}

/// 結果を表形式の文字列にする
pub fn render_table(results: &[MatchResult]) -> String {
    if results.is_empty() {
        return "No results found.".to_string();
    }

    let mut lines = vec![format!(
        "{:>8}  {:<width$}  {:>5}  {}",
        "Position",
        "Short Name",
        "Score",
        "Why",
        width = NAME_WIDTH
    )];
    lines.push("-".repeat(8 + 2 + NAME_WIDTH + 2 + 5 + 2 + 24));

    for result in results {
        let why = result.why.describe().join(" / ");
        lines.push(format!(
            "{:>8}  {:<width$}  {:>5.2}  {}",
            result.position.position_number,
            truncate(&result.position.short_name_en, NAME_WIDTH),
            result.score,
            why,
            width = NAME_WIDTH
        ));
    }

    lines.join("\n")
}

/// 文字数で切り詰め（超過時は末尾を…にする）
fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    truncated.push('…');
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;
    use position_matcher_common::{MatchReason, Position};

    fn result(number: u32, name: &str, score: f64, why: MatchReason) -> MatchResult {
        MatchResult {
            position: Position {
                position_number: number,
                short_name_en: name.into(),
                ..Default::default()
            },
            score,
            why,
        }
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_table(&[]), "No results found.");
    }

    #[test]
    fn test_render_rows() {
        let results = vec![
            result(
                100,
                "Install windows",
                0.6789,
                MatchReason {
                    matched_keywords: vec!["install".into(), "window".into()],
                    fuzzy_match: true,
                    category_boost: false,
                },
            ),
            result(400, "Difficult access support", 0.02, MatchReason {
                category_boost: true,
                ..Default::default()
            }),
        ];

        let table = render_table(&results);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("Short Name"));
        assert!(lines[2].contains("0.68"));
        assert!(lines[2].contains("Keywords: install, window / Fuzzy match"));
        assert!(lines[3].contains("0.02"));
        assert!(lines[3].ends_with("Category boost"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("Fensterbänke einbauen", 8), "Fenster…");
    }

    #[test]
    fn test_response_json() {
        let response = MatchResponse::new(vec![], Some("abc"));
        let value = serde_json::to_value(&response).unwrap();
        assert!(value["results"].as_array().unwrap().is_empty());
        assert_eq!(value["catalogueDigest"], "abc");
        assert!(value["generatedAt"].is_string());

        let value = serde_json::to_value(MatchResponse::new(vec![], None)).unwrap();
        assert!(value.get("catalogueDigest").is_none());
    }
}
