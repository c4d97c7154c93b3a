use clap::Parser;
use export_etl::utils::{logger, validation::Validate};
use export_etl::{CliConfig, ContactPipeline, EtlEngine, MessagePipeline};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting export-etl CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let mut exit_code = 0;

    // 兩條管線各自獨立執行，一條失敗不影響另一條
    let messages = EtlEngine::new(
        "messages",
        MessagePipeline::new(&config.messages_input, &config.messages_output),
    );
    match messages.run() {
        Ok(path) => {
            println!("✅ Messages CSV written: {}", path);
        }
        Err(e) => {
            tracing::error!("❌ Message conversion failed: {}", e);
            eprintln!("❌ {}", e);
            exit_code = 1;
        }
    }

    let contacts = EtlEngine::new(
        "contacts",
        ContactPipeline::new(&config.contacts_input, &config.contacts_output),
    );
    match contacts.run() {
        Ok(path) => {
            println!("✅ Contacts CSV written: {}", path);
        }
        Err(e) => {
            tracing::error!("❌ Contact conversion failed: {}", e);
            eprintln!("❌ {}", e);
            exit_code = 1;
        }
    }

    if exit_code > 0 {
        std::process::exit(exit_code);
    }
}
