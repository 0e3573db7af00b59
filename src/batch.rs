//! 一括照合
//!
//! 依頼内容ごとに検証し、並列で照合する。不正な依頼内容はエラーとして記録し、
//! バッチ全体は中断しない。出力順は入力順。

use indicatif::{ProgressBar, ProgressStyle};
use position_matcher_common::{match_intake, validate_intake, Catalogue, Intake, MatchResult, ValidationErrors};
use rayon::prelude::*;
use serde::Serialize;

/// 1件分の照合結果
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchEntry {
    pub index: usize,
    pub results: Vec<MatchResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ValidationErrors>,
}

/// 複数の依頼内容を照合する
pub fn match_batch(
    intakes: &[Intake],
    catalogue: &Catalogue,
    top_n: usize,
    progress: Option<&ProgressBar>,
) -> Vec<BatchEntry> {
    intakes
        .par_iter()
        .enumerate()
        .map(|(index, intake)| {
            let entry = match validate_intake(intake) {
                Ok(()) => BatchEntry {
                    index,
                    results: match_intake(intake, catalogue, top_n),
                    error: None,
                },
                Err(errors) => BatchEntry {
                    index,
                    results: Vec::new(),
                    error: Some(errors),
                },
            };
            if let Some(pb) = progress {
                pb.inc(1);
            }
            entry
        })
        .collect()
}

/// 一括照合用のプログレスバー
pub fn progress_bar(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    if let Ok(style) =
        ProgressStyle::default_bar().template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
    {
        pb.set_style(style.progress_chars("█▉▊▋▌▍▎▏  "));
    }
    pb
}
