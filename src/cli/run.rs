//! Handler for a screening run.

use tracing::info;

use crate::app::{render_table, App, SessionEnd};
use crate::cli::{output, Cli};
use crate::config::Config;
use crate::error::Result;

/// Load configuration, run one session and print the table.
pub async fn execute(cli: &Cli) -> Result<()> {
    let mut config = Config::load(&cli.config)?;
    cli.apply(&mut config)?;

    config.init_logging();
    if cli.no_color {
        owo_colors::set_override(false);
    }

    info!(
        symbols = config.symbols.len(),
        mode = %config.mode,
        "daybook starting"
    );

    let report = App::screen(&config, chrono::Local::now().date_naive()).await?;

    println!();
    println!("{}", render_table(report.mode, &report.rows));
    println!();

    let total = report.rows.len();
    match report.end {
        SessionEnd::Complete => {}
        SessionEnd::TimedOut => output::warning(&format!(
            "timed out with {} of {total} instruments reported",
            report.filled
        )),
        SessionEnd::Closed | SessionEnd::Marker(_) if report.filled < total => output::warning(
            &format!("stream ended with {} of {total} instruments reported", report.filled),
        ),
        SessionEnd::Closed | SessionEnd::Marker(_) => {}
    }

    Ok(())
}
