use clap::Parser;
use pairsum::config::toml_config::TomlConfig;
use pairsum::utils::{logger, output, validation::Validate};
use pairsum::{OutputFormat, PairSumEngine, PairSumError, QuerySource};

#[derive(Parser)]
#[command(name = "pairsum-batch")]
#[command(about = "Run pair-sum queries from a TOML query file")]
struct Args {
    /// Path to TOML query file
    #[arg(short, long, default_value = "pairsum.toml")]
    config: String,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Include every matching pair in the report
    #[arg(long)]
    pairs: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,

    /// Dry run - validate and list the queries without evaluating them
    #[arg(long)]
    dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn exit_with(e: &PairSumError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 初始化日誌
    if args.json_logs {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("📁 Loading queries from: {}", args.config);

    let config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config.with_pairs(args.pairs),
        Err(e) => exit_with(&e),
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        exit_with(&e);
    }

    tracing::info!(
        "✅ Batch '{}' loaded with {} queries",
        config.batch.name,
        config.queries.len()
    );

    if args.dry_run {
        perform_dry_run(&config)?;
        return Ok(());
    }

    let engine = PairSumEngine::new(config);
    let report = match engine.run() {
        Ok(report) => report,
        Err(e) => exit_with(&e),
    };

    println!("{}", output::render_batch(&report, args.format)?);

    let failed = report.failed_expectations().len();
    if failed > 0 {
        exit_with(&PairSumError::ExpectationMismatch {
            failed,
            total: report.total(),
        });
    }

    Ok(())
}

fn perform_dry_run(config: &TomlConfig) -> anyhow::Result<()> {
    println!("🔍 DRY RUN: {}", config.batch.name);
    if let Some(description) = &config.batch.description {
        println!("   {}", description);
    }

    for query in config.queries()? {
        println!(
            "  - {}: target {} over {} values (mode: {})",
            query.name,
            query.target,
            query.values.len(),
            query.mode
        );
    }

    Ok(())
}
