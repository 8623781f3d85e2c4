use std::io;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use taskman::cli::Cli;
use taskman::collection::TaskList;
use taskman::config::Config;
use taskman::shell::Shell;

fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_level());

    let config = match Config::load(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    info!(?config, "config loaded");

    let tasks = TaskList::with_style(config.render_style());
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(
        tasks,
        config.language.messages(),
        stdin.lock(),
        stdout.lock(),
    );

    if let Err(e) = shell.run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
