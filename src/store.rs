//! カタログストア
//!
//! 起動時に作成し、各照合に `Arc<Catalogue>` を渡す。
//! 初回の `get` でだけファイルを読み込み、同時に呼ばれても読み込みは1回。
//! 読み込みに失敗した場合はキャッシュせず、次の `get` で再試行する。

use crate::error::{MatcherError, Result};
use log::info;
use position_matcher_common::Catalogue;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::OnceCell;

pub struct CatalogueStore {
    path: PathBuf,
    loaded: OnceCell<Loaded>,
}

/// 読み込み済みカタログとそのファイルのハッシュ
struct Loaded {
    catalogue: Arc<Catalogue>,
    digest: String,
}

impl CatalogueStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            loaded: OnceCell::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// カタログを取得（未読み込みなら読み込む）
    pub async fn get(&self) -> Result<Arc<Catalogue>> {
        let loaded = self.loaded.get_or_try_init(|| self.load()).await?;
        Ok(Arc::clone(&loaded.catalogue))
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.initialized()
    }

    /// カタログファイルのSHA-256（読み込み後のみ）
    pub fn digest(&self) -> Option<&str> {
        self.loaded.get().map(|loaded| loaded.digest.as_str())
    }

    async fn load(&self) -> Result<Loaded> {
        if !self.path.exists() {
            return Err(MatcherError::FileNotFound(self.path.display().to_string()));
        }

        let bytes = tokio::fs::read(&self.path).await?;
        let digest = hex::encode(Sha256::digest(&bytes));

        let content = String::from_utf8(bytes).map_err(|e| {
            MatcherError::InvalidCatalogue(format!("カタログ読み込みエラー: {}", e))
        })?;
        let catalogue = Catalogue::from_json_str(&content).map_err(|e| {
            MatcherError::InvalidCatalogue(format!("カタログ読み込みエラー: {}", e))
        })?;

        let stats = catalogue.stats();
        info!(
            "カタログ読み込み: {} (工種{}件, ポジション{}件, sha256={})",
            self.path.display(),
            stats.trades,
            stats.positions,
            digest
        );

        Ok(Loaded {
            catalogue: Arc::new(catalogue),
            digest,
        })
    }
}
