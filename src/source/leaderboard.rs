use super::SourceError;
use crate::model::{LeaderboardSnapshot, PlayerStanding};
use chrono::{DateTime, Utc};
use scraper::{Html, Selector};
use serde_json::Value;

const NEXT_DATA_SELECTOR: &str = "script#__NEXT_DATA__";

/// Scalar json value as display text. The site has served positions both as
/// strings and as bare numbers.
fn value_as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn standing_from_json(player: &Value) -> Option<PlayerStanding> {
    let scoring = player.get("scoringData");
    let field = |key: &str| scoring.and_then(|s| s.get(key)).and_then(value_as_text);

    let player_name = player
        .get("player")
        .and_then(|p| p.get("displayName"))
        .and_then(Value::as_str)?
        .to_string();
    let rank = field("position")?;
    let total_score = field("total")?;
    let today = field("score").unwrap_or_else(|| "N/A".to_string());
    let round_scores = scoring
        .and_then(|s| s.get("rounds"))
        .and_then(Value::as_array)
        .map(|rounds| rounds.iter().filter_map(value_as_text).collect())
        .unwrap_or_default();

    Some(PlayerStanding {
        rank,
        player_name,
        today,
        total_score,
        round_scores,
    })
}

/// Pulls the standings out of the `__NEXT_DATA__` payload embedded in the
/// leaderboard page. Rows missing a name, position or total are dropped.
///
/// # Errors
///
/// Will return `Err` if the payload is missing or malformed, or if it holds no
/// usable rows
pub fn parse_leaderboard_html(
    html: &str,
    fetched_at: DateTime<Utc>,
) -> Result<LeaderboardSnapshot, SourceError> {
    let document = Html::parse_document(html);
    let selector =
        Selector::parse(NEXT_DATA_SELECTOR).map_err(|e| SourceError::Shape(e.to_string()))?;
    let script = document
        .select(&selector)
        .next()
        .ok_or_else(|| SourceError::Shape("no __NEXT_DATA__ script on page".to_string()))?;
    let raw: String = script.text().collect();
    let json: Value = serde_json::from_str(&raw)
        .map_err(|e| SourceError::Shape(format!("__NEXT_DATA__ is not json: {e}")))?;

    let standings: Vec<PlayerStanding> = json
        .pointer("/props/pageProps/leaderboard/players")
        .and_then(Value::as_array)
        .map(|players| players.iter().filter_map(standing_from_json).collect())
        .unwrap_or_default();

    if standings.is_empty() {
        return Err(SourceError::Empty);
    }
    Ok(LeaderboardSnapshot::new(standings, fetched_at))
}
