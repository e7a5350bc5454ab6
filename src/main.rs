// src/main.rs

use kubectl_foreach::output::error_marker;
use kubectl_foreach::{cli, logging, run};

#[tokio::main]
async fn main() {
    if let Err(err) = run_main().await {
        eprintln!(
            "{}{err}",
            error_marker(console::colors_enabled_stderr())
        );
        std::process::exit(1);
    }
}

async fn run_main() -> anyhow::Result<()> {
    let args = cli::parse();
    logging::init_logging(args.log_level)?;
    run(args).await?;
    Ok(())
}
