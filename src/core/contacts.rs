use crate::core::{table, ContactCard, Pipeline, Table};
use crate::utils::error::{EtlError, Result};
use std::path::PathBuf;

/// vCard 每一行的分類結果。值一律取第一個冒號之後的文字，
/// 之後的冒號保留，所以含冒號的值不會被截斷。
#[derive(Debug, PartialEq, Eq)]
pub enum CardLine<'a> {
    Name(&'a str),
    Phone(&'a str),
    Email(&'a str),
    End,
    Other,
}

impl<'a> CardLine<'a> {
    pub fn classify(line: &'a str) -> Self {
        if line.trim() == "END:VCARD" {
            return CardLine::End;
        }

        // 前綴比對用原始行，取值前先去掉前後空白；沒有冒號的行視為 Other
        let value = line.trim().split_once(':').map(|(_, v)| v);

        if line.starts_with("FN") {
            value.map(CardLine::Name).unwrap_or(CardLine::Other)
        } else if line.starts_with("TEL") {
            value.map(CardLine::Phone).unwrap_or(CardLine::Other)
        } else if line.starts_with("EMAIL") {
            value.map(CardLine::Email).unwrap_or(CardLine::Other)
        } else {
            CardLine::Other
        }
    }
}

/// vCard → CSV 管線。來源檔不存在時視為空輸入，仍會輸出只有標頭的 CSV。
pub struct ContactPipeline {
    source: PathBuf,
    dest: PathBuf,
}

impl ContactPipeline {
    pub fn new(source: impl Into<PathBuf>, dest: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            dest: dest.into(),
        }
    }
}

impl Pipeline for ContactPipeline {
    type Raw = String;

    fn extract(&self) -> Result<String> {
        if !self.source.exists() {
            tracing::warn!(
                "Contacts file not found, treating as empty input: {}",
                self.source.display()
            );
            return Ok(String::new());
        }

        let text = std::fs::read_to_string(&self.source).map_err(EtlError::IoError)?;
        Ok(text)
    }

    fn transform(&self, text: String) -> Result<Table> {
        let mut table = Table::new(vec![
            "Name".to_string(),
            "Phone".to_string(),
            "Email".to_string(),
        ]);

        let mut card = ContactCard::default();
        for line in text.lines() {
            match CardLine::classify(line) {
                CardLine::Name(value) => card.name = value.to_string(),
                CardLine::Phone(value) => card.phones.push(value.to_string()),
                // 同一張名片出現多個 EMAIL 時以最後一個為準
                CardLine::Email(value) => card.email = value.to_string(),
                CardLine::End => card.flush_into(&mut table.rows),
                CardLine::Other => {}
            }
        }

        Ok(table)
    }

    fn load(&self, table: Table) -> Result<String> {
        table::write_csv(&self.dest, &table)?;
        Ok(self.dest.display().to_string())
    }
}
