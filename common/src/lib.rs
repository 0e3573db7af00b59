//! Position Matcher Common Library
//!
//! 依頼内容（インテーク）と工種カタログの照合エンジン。
//! CLIから利用される型と純粋関数のみを持ち、I/Oは行わない。

pub mod types;
pub mod error;
pub mod normalize;
pub mod signals;
pub mod fuzzy;
pub mod score;
pub mod matcher;
pub mod catalogue;
pub mod validation;

pub use types::{Catalogue, Intake, MatchReason, MatchResult, Position, Trade};
pub use error::{Error, Result};
pub use normalize::{normalize_text, tokenize};
pub use signals::{extract_signals, intake_text, IntakeSignals};
pub use fuzzy::dice_similarity;
pub use score::{category_boost, fuzzy_score, keyword_ratio, keyword_score};
pub use matcher::{match_intake, Weights, DEFAULT_TOP_N};
pub use catalogue::CatalogueStats;
pub use validation::{validate_intake, ValidationErrors};
