use crate::error::{MatcherError, Result};
use log::warn;
use position_matcher_common::DEFAULT_TOP_N;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// カタログパスを上書きする環境変数
pub const CATALOGUE_ENV: &str = "POSITION_MATCHER_CATALOGUE";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalogue_path: Option<PathBuf>,
    #[serde(default = "default_top_n")]
    pub default_top_n: usize,
}

fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalogue_path: None,
            default_top_n: DEFAULT_TOP_N,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// 設定ファイルが壊れていてもデフォルトで続行する（`config` コマンドで修復するため）
    pub fn load_or_default(config_path: &Path) -> Self {
        Self::load_from(config_path).unwrap_or_else(|e| {
            warn!("設定ファイルを読み込めません（デフォルトを使用）: {}", e);
            Self::default()
        })
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| MatcherError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("position-matcher").join("config.json"))
    }

    /// カタログパスを決定する（引数 → 環境変数 → 設定ファイル）
    pub fn resolve_catalogue(&self, cli_path: Option<&Path>) -> Result<PathBuf> {
        self.resolve_catalogue_with(cli_path, std::env::var(CATALOGUE_ENV).ok())
    }

    /// 環境変数の値を受け取って決定する。空文字は未設定扱い
    pub fn resolve_catalogue_with(
        &self,
        cli_path: Option<&Path>,
        env_path: Option<String>,
    ) -> Result<PathBuf> {
        if let Some(path) = cli_path {
            return Ok(path.to_path_buf());
        }

        if let Some(path) = env_path.filter(|p| !p.is_empty()) {
            return Ok(PathBuf::from(path));
        }

        self.catalogue_path.clone().ok_or(MatcherError::MissingCatalogue)
    }

    pub fn set_catalogue(&mut self, path: PathBuf) -> Result<()> {
        self.catalogue_path = Some(path);
        self.save()
    }

    pub fn set_top_n(&mut self, top_n: usize) -> Result<()> {
        if top_n == 0 {
            return Err(MatcherError::Config("返却件数は1以上にしてください".into()));
        }
        self.default_top_n = top_n;
        self.save()
    }
}
