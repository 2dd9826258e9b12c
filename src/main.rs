use anyhow::Context;

use deploy_settings::load_config;
use deploy_settings::utils::{init_logging, log_settings_summary, log_settings_warnings};

fn main() -> anyhow::Result<()> {
    // Load configuration
    let settings = load_config().context("failed to load settings")?;

    // Initialize logging
    init_logging(&settings.logging)?;
    log_settings_warnings(&settings);
    log_settings_summary(&settings);

    if std::env::args().skip(1).any(|arg| arg == "--json") {
        let snapshot = serde_json::to_string_pretty(&settings)?;
        println!("{}", snapshot);
    }

    Ok(())
}
