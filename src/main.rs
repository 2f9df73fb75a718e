use anyhow::Result;
use colored::Colorize;

use chess_glance::cli::Command;
use chess_glance::{
    handle_browse, handle_completions, handle_players, handle_profile, handle_serve, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("{} {e:#}", "Error:".red().bold());
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Serve { port } => handle_serve(*port),
        Command::Players {
            title,
            query,
            page,
            page_size,
        } => handle_players(*title, query.as_deref(), *page, *page_size),
        Command::Profile { username, follow } => handle_profile(username, *follow),
        Command::Browse { title } => handle_browse(*title),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
