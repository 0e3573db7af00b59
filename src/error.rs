use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatcherError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("カタログが指定されていません。`position-match config --set-catalogue PATH` か --catalogue で指定してください")]
    MissingCatalogue,

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("カタログが不正: {0}")]
    InvalidCatalogue(String),

    #[error("依頼内容が不正: {0}")]
    InvalidIntake(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("入力エラー: {0}")]
    Prompt(#[from] dialoguer::Error),
}

pub type Result<T> = std::result::Result<T, MatcherError>;
