use clap::Parser;
use promo_rules::utils::{logger, validation::Validate};
use promo_rules::{run_import, sort_rows, CliConfig, LocalStorage};
use promo_rules::core::Storage;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting promo-rules import");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let csv_text = std::fs::read_to_string(&config.input)?;
    let outcome = run_import(&csv_text);
    tracing::info!(
        "Parsed {} row(s) into {} rule entries",
        outcome.rows.len(),
        outcome.rules.len()
    );

    let storage = LocalStorage::new(config.output_path.clone());

    let preview = match &config.sort_by {
        Some(key) => sort_rows(&outcome.rows, key, config.direction),
        None => outcome.rows.clone(),
    };
    storage.write_file("rows.json", &serde_json::to_vec_pretty(&preview)?)?;

    if !outcome.report.is_clean() {
        storage.write_file("report.json", &serde_json::to_vec_pretty(&outcome.report)?)?;
        for message in &outcome.report.errors {
            eprintln!("❌ {}", message);
        }
        tracing::error!(
            "Import blocked: {} validation error(s), report saved to {}/report.json",
            outcome.report.errors.len(),
            config.output_path
        );
        std::process::exit(2);
    }

    storage.write_file("rules.json", &serde_json::to_vec_pretty(&outcome.rules)?)?;
    tracing::info!("✅ Import completed successfully");
    println!("✅ Imported {} categories", outcome.rules.len());
    println!("📁 Output saved to: {}", config.output_path);

    Ok(())
}
