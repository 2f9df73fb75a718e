pub mod api;
pub mod cache;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod http;
pub mod pagination;
pub mod rate_limiter;
pub mod search;
pub mod services;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::domain::Title;
use crate::services::server::ServerService;
use crate::services::terminal::TerminalService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::from_env();
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_players(
    title: Title,
    query: Option<&str>,
    page: Option<usize>,
    page_size: Option<usize>,
) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = TerminalService::from_config(&AppConfig::from_env())?;
        service.list_players(title, query, page, page_size).await
    })
}

pub fn handle_profile(username: &str, follow: bool) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = TerminalService::from_config(&AppConfig::from_env())?;
        service.show_profile(username, follow).await
    })
}

pub fn handle_browse(title: Title) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = TerminalService::from_config(&AppConfig::from_env())?;
        service.browse(title).await
    })
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}
