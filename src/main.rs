use clap::Parser;
use pairsum::core::engine::evaluate;
use pairsum::utils::{logger, output};
use pairsum::{CliConfig, QuerySource};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    // 解析並驗證輸入，格式錯誤時直接結束
    let query = match config.query() {
        Ok(query) => query,
        Err(e) => {
            tracing::error!("❌ Input validation failed: {} (Category: {:?})", e, e.category());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    let report = evaluate(query, config.include_pairs());
    println!("{}", output::render_query(&report, config.format)?);

    Ok(())
}
