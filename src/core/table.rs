use crate::domain::model::Table;
use crate::utils::error::Result;
use std::path::Path;

/// 將表格寫成 CSV：先標頭列，再逐列依欄位順序取值，缺欄補空字串。
/// 目標檔案存在時直接覆寫。
pub fn write_csv(path: &Path, table: &Table) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(&table.columns)?;

    for row in &table.rows {
        let record: Vec<&str> = table
            .columns
            .iter()
            .map(|column| row.get(column).map(String::as_str).unwrap_or(""))
            .collect();
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn row(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_write_csv_fills_missing_cells_with_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.csv");

        let mut table = Table::new(vec!["a".to_string(), "b".to_string()]);
        table.rows.push(row(&[("a", "1")]));
        table.rows.push(row(&[("a", "2"), ("b", "x")]));

        write_csv(&path, &table).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines, vec!["a,b", "1,", "2,x"]);
    }

    #[test]
    fn test_write_csv_empty_table_still_writes_header() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("empty.csv");

        let table = Table::new(vec!["Name".to_string(), "Phone".to_string(), "Email".to_string()]);
        write_csv(&path, &table).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.trim_end(), "Name,Phone,Email");
    }

    #[test]
    fn test_write_csv_overwrites_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.csv");

        let mut table = Table::new(vec!["a".to_string()]);
        table.rows.push(row(&[("a", "first")]));
        write_csv(&path, &table).unwrap();
        let first = std::fs::read_to_string(&path).unwrap();

        write_csv(&path, &table).unwrap();
        let second = std::fs::read_to_string(&path).unwrap();

        assert_eq!(first, second);
    }
}
