use clap::Parser;

/// The logo is fixed, so the command declares no options. The binary ignores
/// whatever arguments it is given, including `--help` and `--version`.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "logo-uri")]
#[command(version)]
#[command(about = "Print the application logo as an SVG data URI")]
pub struct CliConfig {}
