use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::domain::Title;

#[derive(Parser, Debug)]
#[command(author, version, about = "chess-glance: browse chess.com titled players")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Start the JSON API server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Print a page of titled players, optionally filtered
    Players {
        /// Title abbreviation (GM, IM, WGM, ...)
        #[arg(short, long, default_value = "GM")]
        title: Title,
        /// Case-insensitive substring to match
        #[arg(short, long)]
        query: Option<String>,
        /// Page number, starting at 1
        #[arg(long)]
        page: Option<usize>,
        /// Players per page
        #[arg(long)]
        page_size: Option<usize>,
    },
    /// Show a player's profile card
    Profile {
        /// chess.com username
        username: String,
        /// Keep updating the last-seen timer until Ctrl-C
        #[arg(short, long)]
        follow: bool,
    },
    /// Search a titled roster interactively from stdin
    Browse {
        /// Title abbreviation (GM, IM, WGM, ...)
        #[arg(short, long, default_value = "GM")]
        title: Title,
    },
    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}
