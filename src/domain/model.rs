use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 一筆訊息記錄；index 為輸入中的順序 (1-based)，用於診斷訊息
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    pub data: HashMap<String, serde_json::Value>,
    pub index: usize,
}

/// 完整物化的輸出表格，load 階段一次寫出
#[derive(Debug, Clone, Default)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<HashMap<String, String>>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }
}

/// 單一 vCard 的累積狀態，flush 後歸零
#[derive(Debug, Clone, Default)]
pub struct ContactCard {
    pub name: String,
    pub phones: Vec<String>,
    pub email: String,
}

impl ContactCard {
    /// 每個累積的電話各輸出一列；沒有電話的名片不輸出
    pub fn flush_into(&mut self, rows: &mut Vec<HashMap<String, String>>) {
        for phone in &self.phones {
            let mut row = HashMap::new();
            row.insert("Name".to_string(), self.name.clone());
            row.insert("Phone".to_string(), phone.clone());
            row.insert("Email".to_string(), self.email.clone());
            rows.push(row);
        }
        *self = ContactCard::default();
    }
}
