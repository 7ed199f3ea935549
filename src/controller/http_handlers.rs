use actix_web::web::{self, Data};
use actix_web::HttpResponse;
use serde::Deserialize;
use serde_json::json;
use std::collections::HashMap;

use super::data_service::PicksService;
use crate::error::AppError;
use crate::view::results::render_results_template;

#[derive(Deserialize)]
pub struct NewEntry {
    pub owner: String,
    pub players: Vec<String>,
}

#[derive(Deserialize)]
pub struct HiddenFlag {
    pub hidden: bool,
}

#[derive(Deserialize)]
pub struct PlayerList {
    pub players: Vec<String>,
}

fn get_flag(query: &HashMap<String, String>, key: &str) -> bool {
    match query.get(key).map(|s| s.trim()) {
        Some("1") => true,
        Some(other) => other.parse().unwrap_or(false),
        None => false,
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(HttpResponse::Ok))
        .route("/leaderboard", web::get().to(leaderboard))
        .route("/results", web::get().to(results))
        .route("/upcoming-players", web::get().to(upcoming_players))
        .route("/bets", web::get().to(list_bets))
        .route("/bets", web::post().to(add_bet))
        .route("/bets/{owner}", web::delete().to(remove_bet))
        .route("/bets/{owner}/hidden", web::put().to(set_hidden))
        .route("/bets/{owner}/players", web::put().to(replace_players));
}

pub async fn leaderboard(service: Data<PicksService>) -> Result<HttpResponse, AppError> {
    let snapshot = service.leaderboard().await?;
    Ok(HttpResponse::Ok().json(snapshot))
}

/// Scored standings. JSON with `json=1`, otherwise an html table; `all=1`
/// includes hidden entries.
pub async fn results(
    query: web::Query<HashMap<String, String>>,
    service: Data<PicksService>,
) -> Result<HttpResponse, AppError> {
    let json = get_flag(&query, "json");
    let include_hidden = get_flag(&query, "all");

    let results = service.results(include_hidden).await?;
    if json {
        Ok(HttpResponse::Ok().json(results))
    } else {
        let markup = render_results_template(&results);
        Ok(HttpResponse::Ok()
            .content_type("text/html")
            .body(markup.into_string()))
    }
}

pub async fn upcoming_players(service: Data<PicksService>) -> HttpResponse {
    let directory = service.upcoming_players().await;
    HttpResponse::Ok().json(directory.as_ref())
}

pub async fn list_bets(
    query: web::Query<HashMap<String, String>>,
    service: Data<PicksService>,
) -> Result<HttpResponse, AppError> {
    let entries = service.list_entries(get_flag(&query, "all")).await?;
    Ok(HttpResponse::Ok().json(entries))
}

pub async fn add_bet(
    body: web::Json<NewEntry>,
    service: Data<PicksService>,
) -> Result<HttpResponse, AppError> {
    let NewEntry { owner, players } = body.into_inner();
    let entry = service.add_entry(&owner, players).await?;
    Ok(HttpResponse::Created().json(entry))
}

pub async fn remove_bet(
    owner: web::Path<String>,
    service: Data<PicksService>,
) -> Result<HttpResponse, AppError> {
    if service.remove_entry(&owner).await? {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Ok(HttpResponse::NotFound().json(json!({"error": format!("no entry for owner: {owner}")})))
    }
}

pub async fn set_hidden(
    owner: web::Path<String>,
    body: web::Json<HiddenFlag>,
    service: Data<PicksService>,
) -> Result<HttpResponse, AppError> {
    service.set_hidden(&owner, body.hidden).await?;
    Ok(HttpResponse::Ok().json(json!({"owner": owner.as_str(), "hidden": body.hidden})))
}

pub async fn replace_players(
    owner: web::Path<String>,
    body: web::Json<PlayerList>,
    service: Data<PicksService>,
) -> Result<HttpResponse, AppError> {
    let players = body.into_inner().players;
    service.replace_players(&owner, players.clone()).await?;
    Ok(HttpResponse::Ok().json(json!({"owner": owner.as_str(), "players": players})))
}
