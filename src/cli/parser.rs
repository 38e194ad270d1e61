use crate::export::DumpFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rRegister
#[derive(Parser)]
#[command(
    name = "rregister",
    version = env!("CARGO_PKG_VERSION"),
    about = "Backfill a working-hours register with business days, skipping weekends, holidays and vacations",
    long_about = None
)]
pub struct Cli {
    /// Configuration file (default: ~/.rregister/rregister.yml)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default configuration file
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Show or validate the configuration
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Validate durations, start times and paths")]
        check: bool,
    },

    /// Backfill the register with generated working days
    Backfill {
        /// First date to fill, YYYY-MM-DD (default: day after the last sheet date)
        #[arg(long, short = 's', value_name = "DATE")]
        start: Option<String>,

        /// End date, YYYY-MM-DD, not included (default: today)
        #[arg(long, short = 'e', value_name = "DATE")]
        end: Option<String>,

        #[arg(long = "dry-run", help = "Print generated rows without touching the sheet")]
        dry_run: bool,
    },

    /// Dump the register to the console or a file
    Dump {
        #[arg(long, short = 'f', value_enum, default_value = "pretty")]
        format: DumpFormat,

        #[arg(long, short = 'o', value_name = "FILE", help = "Output file (stdout if not provided)")]
        output: Option<String>,

        #[arg(long, help = "Overwrite the output file without asking")]
        force: bool,
    },

    /// List working days in a range
    Days {
        /// First date, YYYY-MM-DD (default: first day of the current month)
        #[arg(long, short = 's', value_name = "DATE")]
        start: Option<String>,

        /// End date, YYYY-MM-DD, not included (default: today)
        #[arg(long, short = 'e', value_name = "DATE")]
        end: Option<String>,

        #[arg(long = "vacations", help = "Mark days found in the vacations file")]
        vacations: bool,
    },
}
