use crate::domain::model::Table;
use crate::utils::error::Result;

/// 兩條轉換管線共用的 extract / transform / load 介面，
/// 單執行緒同步執行。
pub trait Pipeline {
    /// extract 階段的原始輸入型別（JSON 記錄或 VCF 文字）
    type Raw;

    fn extract(&self) -> Result<Self::Raw>;
    fn transform(&self, data: Self::Raw) -> Result<Table>;
    fn load(&self, table: Table) -> Result<String>;
}
