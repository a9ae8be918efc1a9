use clap::{Parser, Subcommand};

/// Command-line interface definition for worktimer
#[derive(Parser)]
#[command(
    name = "worktimer",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small work/pause timer: toggle between working and paused and see today's worked time",
    long_about = None
)]
pub struct Cli {
    /// Override the session log path
    #[arg(global = true, long = "log", value_name = "FILE")]
    pub log: Option<String>,

    /// Override the PID file used to find the running instance
    #[arg(global = true, long = "pid-file", value_name = "FILE")]
    pub pid_file: Option<String>,

    /// Verbose diagnostics on stderr (RUST_LOG still applies)
    #[arg(global = true, short = 'v', long = "verbose")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the tracker in the foreground (toggles the running one if present)
    Run {
        /// Start working immediately
        #[arg(long = "start")]
        start: bool,
    },

    /// Toggle work/pause in the running tracker
    Toggle,

    /// Tell the running tracker the system is about to sleep
    Suspend,

    /// Show the time worked today (closed sessions)
    Today {
        /// Print the report as JSON
        #[arg(long = "json")]
        json: bool,
    },

    /// List the sessions that started on a day
    List {
        /// Day to list (YYYY-MM-DD), today if omitted
        #[arg(long = "date", value_name = "DATE")]
        date: Option<String>,
    },

    /// Open the session log in an editor to correct it
    Edit {
        /// Specify the editor to use (overrides $EDITOR/$VISUAL)
        #[arg(long = "editor")]
        editor: Option<String>,
    },

    /// Create the configuration directory and a default config file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },
}
