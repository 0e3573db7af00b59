use clap::Parser;
use log::info;
use position_matcher::{batch, cli, config, error, intake_prompt, output, store};
use position_matcher_common::{match_intake, validate_intake, Intake};
use cli::{Cli, Commands, OutputFormat};
use config::Config;
use error::{MatcherError, Result};
use output::MatchResponse;
use store::CatalogueStore;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG が優先。--verbose で debug まで出す
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    // config コマンドは壊れた設定ファイルを上書きできるよう読み込み失敗を許容する
    let config = match cli.command {
        Commands::Config { .. } => Config::load_or_default(&Config::config_path()?),
        _ => Config::load()?,
    };

    match cli.command {
        Commands::Match { intake, top_n, format, output } => {
            let top_n = top_n.unwrap_or(config.default_top_n);
            let store = CatalogueStore::new(config.resolve_catalogue(cli.catalogue.as_deref())?);

            let content = std::fs::read_to_string(&intake)?;
            let intake_data: Intake = serde_json::from_str(&content)?;
            validate_intake(&intake_data).map_err(|e| MatcherError::InvalidIntake(e.to_string()))?;

            let catalogue = store.get().await?;
            let results = match_intake(&intake_data, &catalogue, top_n);
            info!("{}件の候補を返却", results.len());

            let response = MatchResponse::new(results, store.digest());

            if let Some(path) = output {
                let json = serde_json::to_string_pretty(&response)?;
                std::fs::write(&path, json)?;
                println!("✔ 結果を保存: {}", path.display());
            }

            match format {
                OutputFormat::Table => println!("{}", output::render_table(&response.results)),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&response)?),
            }
        }

        Commands::Batch { input, top_n, output } => {
            let top_n = top_n.unwrap_or(config.default_top_n);
            let store = CatalogueStore::new(config.resolve_catalogue(cli.catalogue.as_deref())?);

            let content = std::fs::read_to_string(&input)?;
            let intakes: Vec<Intake> = serde_json::from_str(&content)?;

            let catalogue = store.get().await?;

            eprintln!("[1/2] {}件の依頼内容を照合中...", intakes.len());
            let pb = batch::progress_bar(intakes.len());
            let entries = batch::match_batch(&intakes, &catalogue, top_n, Some(&pb));
            pb.finish_and_clear();

            let failed = entries.iter().filter(|e| e.error.is_some()).count();
            eprintln!("✔ 照合完了（不正な依頼内容: {}件）", failed);

            eprintln!("[2/2] 結果を出力中...");
            let json = serde_json::to_string_pretty(&entries)?;
            match output {
                Some(path) => {
                    std::fs::write(&path, json)?;
                    eprintln!("✔ 結果を保存: {}", path.display());
                }
                None => println!("{}", json),
            }
        }

        Commands::Intake { output } => {
            println!("📝 position-match - 依頼内容入力\n");
            intake_prompt::run_interactive_intake(output.as_deref())?;
        }

        Commands::Catalogue => {
            let store = CatalogueStore::new(config.resolve_catalogue(cli.catalogue.as_deref())?);
            let catalogue = store.get().await?;
            let stats = catalogue.stats();

            println!("カタログ情報:");
            println!("  パス: {}", store.path().display());
            println!("  工種: {}件", stats.trades);
            println!("  ポジション: {}件（主力 {}件）", stats.positions, stats.hero_positions);
            if stats.duplicate_ids.is_empty() {
                println!("  重複番号: なし");
            } else {
                println!("  重複番号: {:?}", stats.duplicate_ids);
            }
            println!("  SHA-256: {}", store.digest().unwrap_or("-"));
        }

        Commands::Config { set_catalogue, set_top_n, show } => {
            let mut config = config;

            if let Some(path) = set_catalogue {
                config.set_catalogue(path)?;
                println!("✔ カタログパスを設定しました");
            }

            if let Some(n) = set_top_n {
                config.set_top_n(n)?;
                println!("✔ 返却件数を設定しました");
            }

            if show {
                println!("設定:");
                println!(
                    "  カタログ: {}",
                    config
                        .catalogue_path
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "未設定".into())
                );
                println!("  返却件数: {}", config.default_top_n);
                println!("  設定ファイル: {}", Config::config_path()?.display());
            }
        }
    }

    Ok(())
}
