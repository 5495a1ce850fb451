use clap::{Parser, Subcommand};

/// hexcolor: inspect, edit and combine hex colors.
#[derive(Parser, Debug)]
#[command(name = "hexcolor", version, about)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Print results as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    /// Log level override (debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the normalized value and channels of a color.
    Show { color: String },

    /// Average two colors channel by channel.
    Add { left: String, right: String },

    /// Subtract the second color from the first, flooring at zero.
    Sub { left: String, right: String },

    /// Replace individual channels (two hex digits each).
    Edit {
        color: String,

        #[arg(long)]
        red: Option<String>,

        #[arg(long)]
        green: Option<String>,

        #[arg(long)]
        blue: Option<String>,

        #[arg(long)]
        alpha: Option<String>,
    },
}

pub fn parse() -> Args {
    Args::parse()
}
