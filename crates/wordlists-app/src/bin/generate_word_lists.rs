use wordlists_config::Config;
use wordlists_core::pipeline;
use wordlists_lang_spanish::SpanishPack;

fn main() -> anyhow::Result<()> {
    let config = Config::load()?;
    wordlists_app::logging::init(&config.log_level);

    let pack = SpanishPack::with_defaults();
    let report = pipeline::generate(&config, &pack)?;

    tracing::info!(
        "All word lists generated: {} levels, {} files, {} entries",
        report.levels.len(),
        report.files(),
        report.entries()
    );
    if !report.skipped.is_empty() {
        tracing::warn!("Skipped levels: {}", report.skipped.join(", "));
    }

    Ok(())
}
