//! インテークから照合用シグナルを抽出

use crate::normalize::tokenize;
use crate::types::Intake;

/// 照合1回分のシグナル
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntakeSignals {
    pub tokens: Vec<String>,
    pub difficult_access: bool,
}

/// 名前・住所・説明（・会社名）からトークンを抽出する
pub fn extract_signals(intake: &Intake) -> IntakeSignals {
    let mut fields = vec![
        intake.name.as_str(),
        intake.address.as_str(),
        intake.description.as_str(),
    ];
    if let Some(company) = intake.company.as_deref() {
        fields.push(company);
    }

    IntakeSignals {
        tokens: tokenize(&fields.join(" ")),
        difficult_access: intake.difficult_access,
    }
}

/// あいまい一致に使う全文（名前・会社名・住所・説明、空欄は除外）
pub fn intake_text(intake: &Intake) -> String {
    [
        Some(intake.name.as_str()),
        intake.company.as_deref(),
        Some(intake.address.as_str()),
        Some(intake.description.as_str()),
    ]
    .into_iter()
    .flatten()
    .filter(|part| !part.is_empty())
    .collect::<Vec<_>>()
    .join(" ")
}
