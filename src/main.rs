use clap::Parser;
use housing_stats::core::ConfigProvider;
use housing_stats::utils::{logger, validation::Validate};
use housing_stats::{CliConfig, EtlEngine, EtlError, HousingPipeline, LocalStorage, TomlConfig};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting housing-stats");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        fail(e);
    }

    let storage = LocalStorage::new(&config.data_dir);

    let result = match config.config.clone() {
        Some(path) => TomlConfig::from_file(path)
            .map(|toml| toml.with_fallbacks(&config.input, config.format))
            .and_then(|toml| run(storage, toml)),
        None => run(storage, config),
    };

    match result {
        Ok(report) => print!("{}", report),
        Err(e) => fail(e),
    }
}

fn run<C: ConfigProvider + Validate>(
    storage: LocalStorage,
    config: C,
) -> housing_stats::Result<String> {
    config.validate()?;
    tracing::debug!(
        "Reading {} from {}",
        config.input_file(),
        storage.base_path().display()
    );

    let pipeline = HousingPipeline::new(storage, config);
    EtlEngine::new(pipeline).run()
}

fn fail(e: EtlError) -> ! {
    tracing::error!("❌ Run failed: {} (Category: {:?})", e, e.category());
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e);
    std::process::exit(e.exit_code());
}
