use crate::export::ExportFormat;
use clap::{ArgGroup, Parser, Subcommand};

/// Command-line interface definition for healthlog
#[derive(Parser)]
#[command(
    name = "healthlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A personal health log: food, sugar, water and insulin with daily totals and a sugar limit",
    long_about = None
)]
pub struct Cli {
    /// Use this SQLite file (forces the local backend; useful for tests)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the database
    Init,

    /// Show or edit the configuration file
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

    /// Log a food entry
    Add {
        /// Food label
        food: String,

        #[arg(long, short = 's', allow_hyphen_values = true, help = "Sugar in grams")]
        sugar: Option<String>,

        #[arg(long, short = 'w', allow_hyphen_values = true, help = "Water in cups")]
        water: Option<String>,

        #[arg(long, short = 'i', allow_hyphen_values = true, help = "Insulin in units")]
        insulin: Option<String>,

        #[arg(
            long = "at",
            value_name = "WHEN",
            help = "Timestamp 'YYYY-MM-DD HH:MM' or 'HH:MM' (default: now)"
        )]
        at: Option<String>,
    },

    /// List the entries of a day (newest first)
    List {
        #[arg(long, short, help = "Day to list (YYYY-MM-DD, default: today)")]
        date: Option<String>,
    },

    /// Show the totals of a day against the sugar limit
    Totals {
        #[arg(long, short, help = "Day to sum (YYYY-MM-DD, default: today)")]
        date: Option<String>,

        #[arg(long, help = "Print the totals as JSON")]
        json: bool,
    },

    /// Delete the last entry or all entries of a day
    #[command(group(ArgGroup::new("what").required(true).args(["last", "all"])))]
    Del {
        #[arg(long, help = "Delete the most recent entry")]
        last: bool,

        #[arg(long, help = "Delete every entry of the day")]
        all: bool,

        #[arg(long, short, help = "Day (YYYY-MM-DD, default: today)")]
        date: Option<String>,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Show or set the daily sugar limit (grams)
    Limit {
        /// New limit; omit to show the current one
        #[arg(allow_hyphen_values = true)]
        value: Option<String>,
    },

    /// Draw the totals of a day as a bar chart
    Chart {
        #[arg(long, short, help = "Day to chart (YYYY-MM-DD, default: today)")]
        date: Option<String>,

        #[arg(long, default_value_t = 40, help = "Bar width in characters")]
        width: usize,

        #[arg(long, value_name = "FILE", help = "Write an SVG chart instead")]
        svg: Option<String>,
    },

    /// Export entries to CSV or JSON
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "YYYY, YYYY-MM, YYYY-MM-DD or START:END (default: current month)"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Start the web UI
    Serve {
        #[arg(long, help = "Address to bind (default from config)")]
        bind: Option<String>,

        #[arg(long, short, help = "Port to listen on (default from config)")]
        port: Option<u16>,
    },
}
