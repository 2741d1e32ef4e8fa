use wordlists_config::Config;
use wordlists_core::summary;

fn main() -> anyhow::Result<()> {
    let config = Config::load()?;
    wordlists_app::logging::init(&config.log_level);

    let report = summary::summarize(
        &config.base_dir,
        &config.languages,
        &config.levels,
        &config.reference,
    );
    print!("{report}");

    Ok(())
}
