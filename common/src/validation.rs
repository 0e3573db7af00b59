//! インテーク検証
//!
//! 照合エンジンは再検証しないため、境界（CLI）で必ず通すこと。

use crate::types::Intake;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// 説明文の最小文字数
pub const MIN_DESCRIPTION_CHARS: usize = 10;

lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

/// フィールド名 → エラーメッセージ
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationErrors {
    pub field_errors: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    pub fn add(&mut self, field: &str, message: &str) {
        self.field_errors
            .entry(field.to_string())
            .or_default()
            .push(message.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.field_errors.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.field_errors.get(field).map(Vec::as_slice)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .field_errors
            .iter()
            .map(|(field, messages)| format!("{}: {}", field, messages.join(", ")))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

/// インテークを検証する
pub fn validate_intake(intake: &Intake) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if intake.name.is_empty() {
        errors.add("name", "Name is required");
    }
    if intake.phone.is_empty() {
        errors.add("phone", "Phone is required");
    }
    if intake.email.is_empty() {
        errors.add("email", "Email is required");
    } else if !EMAIL_RE.is_match(&intake.email) {
        errors.add("email", "Invalid email");
    }
    if intake.address.is_empty() {
        errors.add("address", "Address is required");
    }
    if intake.description.chars().count() < MIN_DESCRIPTION_CHARS {
        errors.add("description", "Description must be at least 10 characters");
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
