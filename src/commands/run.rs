//! Command dispatch logic for trustcard

use super::{ScoreArgs, score_url_file};
use crate::{Host, Result};
use clap::Parser;
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use std::io::Write;

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "trustcard", author, version, long_about = None)]
#[command(about = "Score the trustworthiness of ML models, their code and their datasets")]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(flatten)]
    score: ScoreArgs,
}

/// Parse command-line arguments and score the URL file they name.
///
/// Usage errors are reported on the host's error stream and end with exit code 2; help
/// and version output go to the host's output stream with exit code 0. Processing errors
/// are returned to the caller.
///
/// # Arguments
///
/// * `args` - An iterator of command-line arguments (typically from `std::env::args()`)
pub async fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => {
            let rendered = e.render().to_string();
            if e.use_stderr() {
                write!(host.error(), "{rendered}")?;
            } else {
                write!(host.output(), "{rendered}")?;
            }
            host.exit(e.exit_code());
            return Ok(());
        }
    };

    score_url_file(host, &cli.score).await
}
