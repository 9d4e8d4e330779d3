pub mod calc;
pub mod circle;
pub mod employees;
pub mod rectangle;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use primer_common::config::{Config, DEFAULT_PRECISION};

#[derive(Parser)]
#[command(name = "primer")]
#[command(about = "Small validated value object exercises.")]
#[command(version)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Reduce output, repeat for less (-q, -qq)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Decimals used for computed values
    #[arg(short, long, default_value_t = DEFAULT_PRECISION, global = true)]
    pub precision: usize,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute area and perimeter of one or more circles
    #[command(alias = "c")]
    Circle {
        /// Number of circles, asked interactively when omitted
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },
    /// Four-operation calculator menu
    #[command(alias = "k")]
    Calc,
    /// Resize a unit rectangle through its validating setters
    #[command(alias = "r")]
    Rectangle {
        #[arg(allow_negative_numbers = true)]
        width: Option<f64>,
        #[arg(allow_negative_numbers = true)]
        height: Option<f64>,
    },
    /// Generate employees with random job titles and salaries
    #[command(alias = "e")]
    Employees {
        /// Newline-delimited file of job titles
        #[arg(short, long, default_value = "jobTitles.txt")]
        titles: PathBuf,
        /// Number of employees, asked interactively when omitted
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            no_banner: self.no_banner,
            quiet: self.quiet,
            precision: self.precision,
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
