use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

/// 預設路徑沿用原始工具的固定檔名，不帶參數直接執行即可
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "export-etl")]
#[command(about = "Converts SMS backup JSON and vCard contact exports to CSV")]
pub struct CliConfig {
    #[arg(long, default_value = "sms_restore.json")]
    pub messages_input: String,

    #[arg(long, default_value = "sms_restore.csv")]
    pub messages_output: String,

    #[arg(long, default_value = "Contacts.vcf")]
    pub contacts_input: String,

    #[arg(long, default_value = "Contacts.csv")]
    pub contacts_output: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("messages_input", &self.messages_input)?;
        validate_path("messages_output", &self.messages_output)?;
        validate_path("contacts_input", &self.contacts_input)?;
        validate_path("contacts_output", &self.contacts_output)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_fixed_filenames() {
        let config = CliConfig::parse_from(["export-etl"]);

        assert_eq!(config.messages_input, "sms_restore.json");
        assert_eq!(config.messages_output, "sms_restore.csv");
        assert_eq!(config.contacts_input, "Contacts.vcf");
        assert_eq!(config.contacts_output, "Contacts.csv");
        assert!(!config.verbose);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_path_fails_validation() {
        let config = CliConfig::parse_from(["export-etl", "--messages-input", " "]);
        assert!(config.validate().is_err());
    }
}
