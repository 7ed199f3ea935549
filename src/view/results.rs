use maud::{Markup, html};

use crate::model::BetResult;

pub const RESULTS_TITLE: &str = "Pool Standings";

fn points_class(points: i32) -> &'static str {
    match points {
        p if p > 0 => "points-up",
        p if p < 0 => "points-down",
        _ => "points-even",
    }
}

#[must_use]
pub fn render_results_template(results: &[BetResult]) -> Markup {
    html! {
        (maud::DOCTYPE)
        head {
            meta charset="UTF-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            title { (RESULTS_TITLE) }
        }
        body {
            h1 { (RESULTS_TITLE) }
            @if results.is_empty() {
                p class="empty" { "No entries yet." }
            }
            @for (position, result) in results.iter().enumerate() {
                div class="entry" {
                    h2 {
                        (position + 1) ". " (result.owner)
                        span class=(points_class(result.total_points)) { " (" (result.total_points) " pts)" }
                    }
                    table class="details" {
                        thead {
                            tr {
                                th { "Player" }
                                th { "Rank" }
                                th { "Today" }
                                th { "Total" }
                                th { "Rounds" }
                                th { "Points" }
                            }
                        }
                        tbody {
                            @for detail in &result.details {
                                tr {
                                    td { (detail.player) }
                                    td { (detail.rank) }
                                    td { (detail.today) }
                                    td { (detail.total_score) }
                                    td {
                                        @if detail.round_scores.is_empty() {
                                            "N/A"
                                        } @else {
                                            (detail.round_scores.join(", "))
                                        }
                                    }
                                    td class=(points_class(detail.points)) { (detail.points) }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
