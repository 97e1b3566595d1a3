use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "dashgen",
    version,
    about = "Smart-home dashboard frontend scaffold generator (shadcn/ui)"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose output (shows overwrite diffs)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Target root directory (defaults to the working directory)
    #[arg(short, long, global = true)]
    pub root: Option<std::path::PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write the dashboard scaffold (the default when no command is given)
    Generate,

    /// List everything a run would write, without touching the filesystem
    Plan,

    /// Show animated dashgen banner
    Banner,

    /// Show configuration information
    Config {
        #[command(subcommand)]
        cmd: Option<ConfigCmd>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCmd {
    /// Show current configuration
    Show,
    /// Reset configuration to defaults
    Reset,
    /// Print the global configuration file path
    Path,
}
