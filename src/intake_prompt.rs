//! 対話式依頼内容入力モジュール

use crate::error::Result;
use dialoguer::{Confirm, Input};
use position_matcher_common::{validate_intake, Intake};
use std::path::Path;

/// 入力文字列を任意項目に変換（空欄はNone）
pub fn optional_field(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// 対話式で依頼内容を入力し、JSONを保存（または表示）する
pub fn run_interactive_intake(output_path: Option<&Path>) -> Result<()> {
    let mut current = Intake::default();

    let intake = loop {
        current = prompt_intake(&current)?;

        match validate_intake(&current) {
            Ok(()) => break current,
            Err(errors) => {
                println!("\n⚠ 入力内容に不備があります:");
                for (field, messages) in &errors.field_errors {
                    println!("  - {}: {}", field, messages.join(", "));
                }

                let retry = Confirm::new()
                    .with_prompt("入力し直しますか？")
                    .default(true)
                    .interact()?;
                if !retry {
                    println!("中断しました");
                    return Ok(());
                }
                println!();
            }
        }
    };

    let json = serde_json::to_string_pretty(&intake)?;
    match output_path {
        Some(path) => {
            std::fs::write(path, json)?;
            println!("\n✓ 保存しました: {}", path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}

/// 各項目を入力（前回の値を初期値にする）
fn prompt_intake(previous: &Intake) -> Result<Intake> {
    let name = prompt_text("氏名", &previous.name)?;
    let company = prompt_text("会社名（任意）", previous.company.as_deref().unwrap_or(""))?;
    let phone = prompt_text("電話番号", &previous.phone)?;
    let email = prompt_text("メールアドレス", &previous.email)?;
    let address = prompt_text("住所", &previous.address)?;
    let description = prompt_text("依頼内容（10文字以上）", &previous.description)?;

    let difficult_access = Confirm::new()
        .with_prompt("作業場所へのアクセスが困難ですか？")
        .default(previous.difficult_access)
        .interact()?;

    Ok(Intake {
        name: name.trim().to_string(),
        phone: phone.trim().to_string(),
        email: email.trim().to_string(),
        address: address.trim().to_string(),
        company: optional_field(&company),
        description: description.trim().to_string(),
        difficult_access,
    })
}

fn prompt_text(prompt: &str, initial: &str) -> Result<String> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text()?;
    Ok(input)
}
