//! flatdir CLI: copy every file under a directory into one target directory.

use anyhow::Result;
use clap::Parser;
use flatdir::engine::arg_parser::Cli;
use flatdir::engine::handle_run;
use std::time::Instant;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let start_time = Instant::now();
    let cli = Cli::parse();
    handle_run(&cli).await?;
    log::debug!("Total time: {:?}", start_time.elapsed());
    Ok(())
}
