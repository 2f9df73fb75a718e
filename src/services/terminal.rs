use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Utc;
use colored::Colorize;
use log::{debug, info};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::api::{ChessComClient, PlayerSource};
use crate::cache::PlayerDirectory;
use crate::config::settings::AppConfig;
use crate::domain::{LastSeen, PlayerCard, Title, UsernamePolicy};
use crate::errors::fetch_context;
use crate::pagination::{PageSlice, PaginationConfig, Selection};
use crate::search::{Debouncer, SearchQuery};

const DEBOUNCE_MS: u64 = 300;
const TIMER_TICK_SECS: u64 = 1;

/// Terminal front end over the same directory the server uses
pub struct TerminalService<S> {
    directory: Arc<PlayerDirectory<S>>,
    usernames: UsernamePolicy,
    pagination: PaginationConfig,
}

impl TerminalService<ChessComClient> {
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let client = ChessComClient::new(&config.api).context("Failed to build chess.com client")?;
        Self::new(Arc::new(client), config)
    }
}

impl<S: PlayerSource> TerminalService<S> {
    pub fn new(source: Arc<S>, config: &AppConfig) -> Result<Self> {
        Ok(Self {
            directory: Arc::new(PlayerDirectory::new(source, config.directory.index_depth)),
            usernames: UsernamePolicy::new()?,
            pagination: PaginationConfig::from(&config.pagination),
        })
    }

    /// Print one page of the titled roster filtered by `query`
    pub async fn list_players(
        &self,
        title: Title,
        query: Option<&str>,
        page: Option<usize>,
        page_size: Option<usize>,
    ) -> Result<()> {
        let roster = self
            .directory
            .roster(title)
            .await
            .with_context(|| fetch_context(&format!("titled/{}", title)))?;

        let query = SearchQuery::from(query);
        let selection = Selection::resolve(&self.pagination, page, page_size, None, None);
        let slice = roster.select(&query, selection);

        print!("{}", render_matches(title, &query, &slice));
        Ok(())
    }

    /// Print a profile card. With `follow`, keep the last-seen line ticking until Ctrl-C.
    pub async fn show_profile(&self, username: &str, follow: bool) -> Result<()> {
        let username = self.usernames.normalize(username)?;
        let profile = self
            .directory
            .source()
            .player_profile(&username)
            .await
            .with_context(|| fetch_context(&format!("player/{}", username)))?;

        let card = PlayerCard::from_profile(&profile, Utc::now());
        println!("{}", render_card(&card));

        let Some(last_online) = profile.last_online else {
            return Ok(());
        };

        if follow {
            follow_last_seen(&mut std::io::stdout(), last_online, tokio::signal::ctrl_c()).await?;
        } else {
            println!("{}", render_last_seen(&LastSeen::now(last_online)));
        }
        Ok(())
    }

    /// Read queries from stdin, debounce them and print matches for the latest one
    pub async fn browse(&self, title: Title) -> Result<()> {
        let roster = self
            .directory
            .roster(title)
            .await
            .with_context(|| fetch_context(&format!("titled/{}", title)))?;
        info!("Browsing {} {} players", roster.len(), roster.title());
        println!(
            "{} {} players loaded. Type to search, Ctrl-D to quit.",
            roster.len(),
            title.full_name()
        );

        let (input, mut output) = Debouncer::new(Duration::from_millis(DEBOUNCE_MS)).spawn(32);

        let reader = tokio::spawn(async move {
            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            while let Ok(Some(line)) = lines.next_line().await {
                if input.send(line).await.is_err() {
                    break;
                }
            }
        });

        while let Some(raw) = output.recv().await {
            let query = SearchQuery::new(&raw);
            debug!("Searching {} roster for {:?}", title, query.as_str());
            let selection = Selection::resolve(&self.pagination, None, None, None, None);
            let slice = roster.select(&query, selection);
            print!("{}", render_matches(title, &query, &slice));
        }

        reader.await.context("stdin reader failed")?;
        Ok(())
    }
}

/// Redraw the last-seen line in place every tick until `stop` resolves.
/// The first tick fires immediately and draws the initial line.
async fn follow_last_seen<W, F>(out: &mut W, last_online: i64, stop: F) -> Result<()>
where
    W: Write,
    F: Future,
{
    let mut ticker = tokio::time::interval(Duration::from_secs(TIMER_TICK_SECS));
    tokio::pin!(stop);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                write!(out, "\r{}   ", render_last_seen(&LastSeen::now(last_online)))?;
                out.flush()?;
            }
            _ = &mut stop => {
                writeln!(out)?;
                return Ok(());
            }
        }
    }
}

pub fn render_matches(title: Title, query: &SearchQuery, slice: &PageSlice<String>) -> String {
    let mut out = String::new();
    let heading = if query.is_empty() {
        format!("{} players", title)
    } else {
        format!("{} players matching {:?}", title, query.as_str())
    };
    out.push_str(&format!(
        "{} ({} total, page {}/{})\n",
        heading.bold(),
        slice.total,
        slice.page,
        slice.total_pages.max(1)
    ));

    if slice.items.is_empty() {
        out.push_str(&format!("  {}\n", "No players found".dimmed()));
        return out;
    }

    for (i, username) in slice.items.iter().enumerate() {
        out.push_str(&format!("{:>5}. {}\n", slice.offset + i + 1, username.cyan()));
    }
    out
}

pub fn render_card(card: &PlayerCard) -> String {
    let mut lines = card.lines().into_iter();
    let mut out = String::new();
    if let Some(first) = lines.next() {
        out.push_str(&first.bold().to_string());
    }
    for line in lines {
        out.push('\n');
        out.push_str(&line);
    }
    out
}

pub fn render_last_seen(seen: &LastSeen) -> String {
    format!("Last seen: {}", seen.text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slice(items: &[&str], total: usize, offset: usize) -> PageSlice<String> {
        PageSlice {
            items: items.iter().map(|s| s.to_string()).collect(),
            total,
            page: offset / 2 + 1,
            page_size: 2,
            total_pages: total.div_ceil(2),
            offset,
        }
    }

    #[test]
    fn renders_numbered_matches() {
        let out = render_matches(
            Title::GM,
            &SearchQuery::new("Car"),
            &slice(&["magnuscarlsen", "fabianocaruana"], 3, 0),
        );
        assert!(out.contains("GM players matching \"car\""));
        assert!(out.contains("3 total, page 1/2"));
        assert!(out.contains("1. "));
        assert!(out.contains("magnuscarlsen"));
        assert!(out.contains("2. "));
    }

    #[test]
    fn numbering_continues_across_pages() {
        let out = render_matches(Title::IM, &SearchQuery::default(), &slice(&["x"], 3, 2));
        assert!(out.contains("IM players"));
        assert!(out.contains("3. "));
    }

    #[test]
    fn renders_empty_result() {
        let out = render_matches(Title::GM, &SearchQuery::new("zzz"), &slice(&[], 0, 0));
        assert!(out.contains("No players found"));
        assert!(out.contains("page 1/1"));
    }

    #[test]
    fn renders_last_seen_line() {
        let seen = LastSeen {
            last_online: 0,
            seconds_ago: 90,
            text: "1 min ago".into(),
        };
        assert_eq!(render_last_seen(&seen), "Last seen: 1 min ago");
    }

    #[tokio::test(start_paused = true)]
    async fn follow_redraws_a_single_line() {
        let mut out = Vec::new();
        let stop = tokio::time::sleep(Duration::from_millis(2500));

        follow_last_seen(&mut out, Utc::now().timestamp(), stop)
            .await
            .unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("\rLast seen: "));
        assert_eq!(out.matches("Last seen: ").count(), 3);
        assert_eq!(out.matches('\n').count(), 1);
        assert!(out.ends_with('\n'));
    }
}
