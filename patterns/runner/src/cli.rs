use clap::{Parser, Subcommand};
use patterns_common::Pattern;

#[derive(Parser, Debug)]
#[command(name = "patterns")]
#[command(
    version,
    about = "Run interview pattern exercises on their sample inputs",
    long_about = None
)]
pub struct Cli {
    /// Raise the log level (-v info, -vv debug, -vvv trace); RUST_LOG wins
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// List the available exercises
    List {
        /// Only show exercises for this pattern
        #[arg(short, long, value_parser = parse_pattern)]
        pattern: Option<Pattern>,

        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run exercises on their sample inputs
    Run {
        /// Exercise slugs, as printed by `list`
        #[arg(value_name = "SLUG", required_unless_present = "all")]
        slugs: Vec<String>,

        /// Run every exercise
        #[arg(short, long, conflicts_with = "slugs")]
        all: bool,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

fn parse_pattern(s: &str) -> Result<Pattern, String> {
    Pattern::from_slug(s).ok_or_else(|| {
        let known: Vec<&str> = Pattern::ALL.iter().map(|p| p.slug()).collect();
        format!("unknown pattern '{s}', expected one of: {}", known.join(", "))
    })
}
