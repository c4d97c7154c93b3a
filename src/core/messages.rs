use crate::core::{table, Pipeline, Record, Table};
use crate::utils::error::{EtlError, Result};
use chrono::DateTime;
use std::collections::{BTreeSet, HashMap};
use std::path::PathBuf;

/// 訊息備份 JSON → CSV 管線
pub struct MessagePipeline {
    source: PathBuf,
    dest: PathBuf,
}

impl MessagePipeline {
    pub fn new(source: impl Into<PathBuf>, dest: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            dest: dest.into(),
        }
    }
}

/// 所有記錄鍵名的聯集，字典序排序後回傳
pub fn collect_headers(records: &[Record]) -> Vec<String> {
    let mut headers = BTreeSet::new();
    for record in records {
        for key in record.data.keys() {
            headers.insert(key.clone());
        }
    }
    headers.into_iter().collect()
}

/// epoch 毫秒 → `DD/MM/YYYY HH:MM:SS` (UTC)。
/// 空值回傳空字串；無法解析或超出範圍回報 InvalidTimestamp。
pub fn normalize_timestamp(raw: &str, record_index: usize) -> Result<String> {
    if raw.is_empty() {
        return Ok(String::new());
    }

    let invalid = || EtlError::InvalidTimestamp {
        record: record_index,
        value: raw.to_string(),
    };

    // 接受整數與帶小數的數字字串，毫秒除以 1000 轉成秒
    let millis: f64 = raw.parse().map_err(|_| invalid())?;
    if !millis.is_finite() {
        return Err(invalid());
    }

    let seconds = (millis / 1000.0) as i64;
    let datetime = DateTime::from_timestamp(seconds, 0).ok_or_else(invalid)?;
    Ok(datetime.format("%d/%m/%Y %H:%M:%S").to_string())
}

fn value_to_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn numeric_value(value: &serde_json::Value) -> Option<f64> {
    match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

/// 排序鍵：缺少或非數值的 date 視為正無窮，降冪排序時排最前
fn date_sort_key(record: &Record) -> f64 {
    record
        .data
        .get("date")
        .and_then(numeric_value)
        .unwrap_or(f64::INFINITY)
}

fn human_date(record: &Record, field: &str) -> String {
    let raw = record.data.get(field).map(value_to_text).unwrap_or_default();
    match normalize_timestamp(&raw, record.index) {
        Ok(text) => text,
        Err(e) => {
            // 單一格式錯誤不中止整個轉換，該欄留空
            tracing::warn!("{}", e);
            String::new()
        }
    }
}

fn malformed_input(raw: &str, err: &serde_json::Error) -> EtlError {
    let line = err.line();
    let content = raw
        .lines()
        .nth(line.saturating_sub(1))
        .unwrap_or("")
        .trim()
        .to_string();
    EtlError::MalformedInput { line, content }
}

impl Pipeline for MessagePipeline {
    type Raw = Vec<Record>;

    fn extract(&self) -> Result<Vec<Record>> {
        if !self.source.exists() {
            return Err(EtlError::NotFound {
                path: self.source.display().to_string(),
            });
        }

        let raw = std::fs::read_to_string(&self.source)?;
        let parsed: serde_json::Value =
            serde_json::from_str(&raw).map_err(|e| malformed_input(&raw, &e))?;

        let items = match parsed {
            serde_json::Value::Array(items) => items,
            _ => {
                return Err(EtlError::MalformedInput {
                    line: 1,
                    content: raw.lines().next().unwrap_or("").trim().to_string(),
                })
            }
        };

        let mut records = Vec::with_capacity(items.len());
        for (i, item) in items.into_iter().enumerate() {
            match item {
                serde_json::Value::Object(obj) => {
                    let data: HashMap<String, serde_json::Value> = obj.into_iter().collect();
                    records.push(Record {
                        data,
                        index: i + 1,
                    });
                }
                other => {
                    tracing::warn!("Skipping non-object record at position {}: {}", i + 1, other);
                }
            }
        }

        tracing::debug!("Extracted {} records from {}", records.len(), self.source.display());
        Ok(records)
    }

    fn transform(&self, mut records: Vec<Record>) -> Result<Table> {
        let headers = collect_headers(&records);

        // date 降冪；缺 date 的記錄視為最新排最前
        records.sort_by(|a, b| date_sort_key(b).total_cmp(&date_sort_key(a)));

        let mut columns = vec!["date_human".to_string(), "date_sent_human".to_string()];
        columns.extend(headers.iter().cloned());

        let mut table = Table::new(columns);
        for record in &records {
            let mut row = HashMap::new();
            row.insert("date_human".to_string(), human_date(record, "date"));
            row.insert("date_sent_human".to_string(), human_date(record, "date_sent"));
            for header in &headers {
                let text = record
                    .data
                    .get(header)
                    .map(value_to_text)
                    .unwrap_or_default();
                row.insert(header.clone(), text);
            }
            table.rows.push(row);
        }

        Ok(table)
    }

    fn load(&self, table: Table) -> Result<String> {
        table::write_csv(&self.dest, &table)?;
        Ok(self.dest.display().to_string())
    }
}
