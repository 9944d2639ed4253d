use clap::Parser;
use logo_uri::utils::logger;
use logo_uri::CliConfig;

fn main() {
    logger::init_cli_logger();

    // 參數一律忽略，輸出永遠相同
    match CliConfig::try_parse() {
        Ok(config) => tracing::debug!("CLI config: {:?}", config),
        Err(e) => tracing::debug!("Ignoring command-line arguments ({:?})", e.kind()),
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = logo_uri::emit(&mut out) {
        tracing::error!("❌ Failed to write logo data URI: {}", e);
        std::process::exit(e.exit_code());
    }
}
