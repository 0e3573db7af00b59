pub mod batch;
pub mod cli;
pub mod config;
pub mod error;
pub mod intake_prompt;
pub mod output;
pub mod store;
