//! カタログストア・設定ファイルのテスト
//!
//! 一度だけ読み込むこと、読み込み失敗時の挙動を検証

use position_matcher::config::Config;
use position_matcher::error::MatcherError;
use position_matcher::store::CatalogueStore;
use std::sync::Arc;
use tempfile::tempdir;

const CATALOGUE_JSON: &str = r#"{
    "trades": [
        {
            "code": "0100",
            "name_de": "Fenster",
            "name_en": "Windows",
            "positions": [
                {"position_number": 100, "short_name_de": "Fenster einbauen", "short_name_en": "Install windows", "unit": "Stk.", "description_de": "", "description_en": "Install windows in building", "hero": true}
            ]
        },
        {
            "code": "0300",
            "name_de": "Zugänglichkeit",
            "name_en": "Accessibility",
            "positions": [
                {"position_number": 400, "short_name_de": "", "short_name_en": "Difficult access support", "unit": "Std.", "description_de": "", "description_en": "Use equipment for difficult access", "hero": false}
            ]
        }
    ]
}"#;

/// 初回の get で読み込み、以降は同じ Arc を返す
#[tokio::test]
async fn test_store_loads_once() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("catalogue.json");
    std::fs::write(&path, CATALOGUE_JSON).unwrap();

    let store = CatalogueStore::new(&path);
    assert!(!store.is_loaded());
    assert!(store.digest().is_none());

    let first = store.get().await.expect("カタログ読み込み失敗");
    assert!(store.is_loaded());
    assert_eq!(first.trades.len(), 2);

    // ファイルを消しても再読み込みしない
    std::fs::remove_file(&path).unwrap();
    let second = store.get().await.expect("キャッシュが使われていない");
    assert!(Arc::ptr_eq(&first, &second));
}

/// 同時に呼ばれても同じカタログを共有する
#[tokio::test]
async fn test_store_concurrent_cold_start() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("catalogue.json");
    std::fs::write(&path, CATALOGUE_JSON).unwrap();

    let store = Arc::new(CatalogueStore::new(&path));
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let store = Arc::clone(&store);
            tokio::spawn(async move { store.get().await.map_err(|e| e.to_string()) })
        })
        .collect();

    let mut loaded = Vec::new();
    for handle in handles {
        loaded.push(handle.await.unwrap().unwrap());
    }
    for catalogue in &loaded[1..] {
        assert!(Arc::ptr_eq(&loaded[0], catalogue));
    }
}

/// SHA-256 が記録される
#[tokio::test]
async fn test_store_digest() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("catalogue.json");
    std::fs::write(&path, CATALOGUE_JSON).unwrap();

    let store = CatalogueStore::new(&path);
    store.get().await.unwrap();

    let digest = store.digest().expect("ハッシュがない");
    assert_eq!(digest.len(), 64);
    assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
}

/// 存在しないファイル
#[tokio::test]
async fn test_store_missing_file() {
    let store = CatalogueStore::new("/nonexistent/path/catalogue.json");
    let err = store.get().await.unwrap_err();
    assert!(matches!(err, MatcherError::FileNotFound(_)));
    assert!(!store.is_loaded());
}

/// 不正なカタログは照合前にエラー、修正後は再試行で読み込める
#[tokio::test]
async fn test_store_invalid_then_retry() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("catalogue.json");
    std::fs::write(&path, r#"{"positions": []}"#).unwrap();

    let store = CatalogueStore::new(&path);
    let err = store.get().await.unwrap_err();
    match err {
        MatcherError::InvalidCatalogue(message) => {
            assert!(message.contains("カタログ読み込みエラー"));
            assert!(message.contains("missing trades array"));
        }
        other => panic!("unexpected error: {:?}", other),
    }

    assert!(store.digest().is_none());

    std::fs::write(&path, CATALOGUE_JSON).unwrap();
    assert_eq!(store.get().await.unwrap().trades.len(), 2);
    assert!(store.digest().is_some());
}

/// 設定ファイルの保存と読み込み
#[test]
fn test_config_save_and_load() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("config.json");

    // 存在しなければデフォルト
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.default_top_n, 15);
    assert!(config.catalogue_path.is_none());

    let config = Config {
        catalogue_path: Some(dir.path().join("catalogue.json")),
        default_top_n: 5,
    };
    config.save_to(&path).expect("設定保存失敗");

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded.default_top_n, 5);
    assert_eq!(loaded.catalogue_path, config.catalogue_path);
}

/// 古い設定ファイル（項目不足）でもデフォルトで補う
#[test]
fn test_config_partial_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{}").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.default_top_n, 15);
}

/// 壊れた設定ファイルでも config コマンドはデフォルトで続行できる
#[test]
fn test_config_load_or_default_on_corrupt_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert!(Config::load_from(&path).is_err());

    let config = Config::load_or_default(&path);
    assert_eq!(config.default_top_n, 15);
    assert!(config.catalogue_path.is_none());
}
