use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Acquire NAME, run a command, and release NAME when it exits
    Run {
        /// Lock name
        name: String,

        /// Command and arguments to run while holding the lock
        #[arg(required = true, last = true)]
        command: Vec<String>,
    },

    /// Show who holds NAME, if anyone
    Status {
        /// Lock name
        name: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Remove records left behind by processes that no longer exist
    Sweep {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
