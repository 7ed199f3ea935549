use super::SourceError;
use crate::model::{DirectoryEntry, PlayerDirectory};
use chrono::{DateTime, Utc};
use regex::Regex;
use scraper::{Html, Selector};
use std::collections::HashMap;

const SITE_ROOT: &str = "https://www.pgatour.com";
const PLAYER_HREF_PATTERN: &str = r#"/player/\d+/[^/"]+"#;

/// "LAST, FIRST" -> "FIRST LAST". Text without a comma is kept as is.
fn normalize_link_name(text: &str) -> String {
    match text.split_once(',') {
        Some((last, first)) => format!("{} {}", first.trim(), last.trim()),
        None => text.to_string(),
    }
}

fn absolute_url(href: &str) -> String {
    if href.starts_with('/') {
        format!("{SITE_ROOT}{href}")
    } else {
        href.to_string()
    }
}

/// Collects every player profile link on a tournament page.
///
/// Names are unique in the result; a repeated name keeps its first position
/// and takes the last URL seen.
///
/// # Errors
///
/// Will return `Err` if no player links are found
pub fn parse_directory_html(
    html: &str,
    fetched_at: DateTime<Utc>,
) -> Result<PlayerDirectory, SourceError> {
    let href_re = Regex::new(PLAYER_HREF_PATTERN).map_err(|e| SourceError::Shape(e.to_string()))?;
    let selector = Selector::parse("a[href]").map_err(|e| SourceError::Shape(e.to_string()))?;
    let document = Html::parse_document(html);

    let mut entries: Vec<DirectoryEntry> = Vec::new();
    let mut seen: HashMap<String, usize> = HashMap::new();

    for link in document.select(&selector) {
        let Some(href) = link.value().attr("href") else {
            continue;
        };
        if !href_re.is_match(href) {
            continue;
        }

        let text: String = link.text().collect();
        let player_name = normalize_link_name(text.trim());
        if player_name.is_empty() {
            continue;
        }

        let profile_url = absolute_url(href);
        match seen.get(&player_name) {
            Some(&idx) => entries[idx].profile_url = profile_url,
            None => {
                seen.insert(player_name.clone(), entries.len());
                entries.push(DirectoryEntry {
                    player_name,
                    profile_url,
                });
            }
        }
    }

    if entries.is_empty() {
        return Err(SourceError::Empty);
    }
    Ok(PlayerDirectory {
        entries,
        fetched_at: Some(fetched_at),
    })
}
