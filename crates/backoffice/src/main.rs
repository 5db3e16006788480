mod app;
mod cli;
mod errors;
mod logging;

use backoffice::config::Config;
use clap::Parser;
use color_eyre::Result;

use crate::app::App;
use crate::cli::Cli;

pub fn main() -> Result<()> {
    crate::errors::init()?;
    crate::logging::init()?;

    let args = Cli::parse();
    let config = Config::new()?;
    tracing::debug!(?config, "configuration loaded");

    let mut app = App::new(config);
    app.run(args)?;
    Ok(())
}
