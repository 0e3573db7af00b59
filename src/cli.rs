use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "position-match")]
#[command(about = "依頼内容と工種カタログの照合ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// カタログJSONファイル（設定ファイル・環境変数より優先）
    #[arg(long, global = true)]
    pub catalogue: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 依頼内容JSONをカタログと照合
    Match {
        /// 依頼内容JSONファイル
        #[arg(required = true)]
        intake: PathBuf,

        /// 返却件数（デフォルト: 設定値）
        #[arg(short = 'n', long)]
        top_n: Option<usize>,

        /// 出力形式 (table/json)
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,

        /// 出力ファイル（JSON）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 複数の依頼内容（JSON配列）を一括照合
    Batch {
        /// 依頼内容JSON配列ファイル
        #[arg(required = true)]
        input: PathBuf,

        /// 返却件数（デフォルト: 設定値）
        #[arg(short = 'n', long)]
        top_n: Option<usize>,

        /// 出力JSONファイル（省略時は標準出力）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 対話式で依頼内容JSONを作成
    Intake {
        /// 出力JSONファイル（省略時は標準出力）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// カタログの統計情報を表示
    Catalogue,

    /// 設定
    Config {
        /// カタログパスを設定
        #[arg(long)]
        set_catalogue: Option<PathBuf>,

        /// 返却件数のデフォルトを設定
        #[arg(long)]
        set_top_n: Option<usize>,

        /// 現在の設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" | "t" => Ok(OutputFormat::Table),
            "json" | "j" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}. Use table or json", s)),
        }
    }
}
