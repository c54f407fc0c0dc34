use anyhow::Result;
use golf_card::args;
use golf_card::repl::{run_repl, run_script};
use std::io;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> Result<()> {
    let args = args::args_checks()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.log_level))
        .unwrap_or_else(|_| EnvFilter::new(args::DEFAULT_LOG_LEVEL));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();

    match args.script {
        Some(script) => run_script(args.draft, &script, &mut io::stdout().lock()),
        None => run_repl(args.draft),
    }
}
