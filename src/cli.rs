use clap::Parser;

/// Interactive in-memory task manager
#[derive(Parser, Debug, Clone)]
#[command(name = "taskman", version, about)]
pub struct Cli {
    /// Path to config file (default: taskman.toml, optional)
    #[arg(long)]
    pub config: Option<String>,

    /// Message language (pt, en)
    #[arg(long)]
    pub language: Option<String>,

    /// chrono format string used to display due dates
    #[arg(long)]
    pub date_format: Option<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Default log directive derived from `--verbose`.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
