mod common;

use common::{five, snapshot};
use rusty_golf_picks::model::BetEntry;
use rusty_golf_picks::{score_all, score_entry};

#[test]
fn test1_end_to_end_example() {
    let board = snapshot(&[("A", "1"), ("B", "CUT"), ("D", "T12")]);
    let result = score_entry("dana", &["A", "B", "C"], &board);

    assert_eq!(result.owner, "dana");
    assert_eq!(result.total_points, 2);
    let rows: Vec<(&str, &str, i32)> = result
        .details
        .iter()
        .map(|d| (d.player.as_str(), d.rank.as_str(), d.points))
        .collect();
    assert_eq!(rows, vec![("A", "1", 3), ("B", "CUT", -1)]);
    assert_eq!(result.best_position, Some(1));
}

#[test]
fn test1_absent_player_has_no_detail() {
    let board = snapshot(&[("A", "5")]);
    let result = score_entry("dana", &["Nobody"], &board);
    assert!(result.details.is_empty());
    assert_eq!(result.total_points, 0);
    assert_eq!(result.best_position, None);
}

#[test]
fn test1_empty_selection() {
    let board = snapshot(&[("A", "1")]);
    let selected: [&str; 0] = [];
    let result = score_entry("dana", &selected, &board);
    assert_eq!(result.total_points, 0);
    assert!(result.details.is_empty());
}

#[test]
fn test1_matching_is_exact() {
    let board = snapshot(&[("Ludvig Åberg", "1")]);
    let result = score_entry("dana", &["Ludvig Aberg", "ludvig åberg"], &board);
    assert!(result.details.is_empty());
}

#[test]
fn test1_first_matching_row_wins() {
    let board = snapshot(&[("A", "3"), ("A", "CUT")]);
    let result = score_entry("dana", &["A"], &board);
    assert_eq!(result.details[0].rank, "3");
    assert_eq!(result.total_points, 1);
}

#[test]
fn test1_details_sorted_by_raw_rank_and_total_is_sum() {
    let board = snapshot(&[
        ("P1", "2"),
        ("P2", "10"),
        ("P3", "T45"),
        ("P4", "-"),
        ("P5", "WD"),
    ]);
    let result = score_entry("dana", five("P").as_slice(), &board);

    let ranks: Vec<&str> = result.details.iter().map(|d| d.rank.as_str()).collect();
    assert_eq!(ranks, vec!["-", "10", "2", "T45", "WD"]);
    let sum: i32 = result.details.iter().map(|d| d.points).sum();
    assert_eq!(result.total_points, sum);
    assert_eq!(result.total_points, 1 + 1 - 1 + 0 - 1);
    assert_eq!(result.best_position, Some(2));
}

#[test]
fn test1_selection_order_does_not_matter() {
    let board = snapshot(&[("A", "T5"), ("B", "T5"), ("C", "31"), ("D", "1")]);
    let forward = score_entry("dana", &["A", "B", "C", "D"], &board);
    let backward = score_entry("dana", &["D", "C", "B", "A"], &board);
    assert_eq!(forward, backward);
}

#[test]
fn test1_carries_standing_fields() {
    let board = snapshot(&[("A", "T7")]);
    let result = score_entry("dana", &["A"], &board);
    let detail = &result.details[0];
    assert_eq!(detail.today, "-2");
    assert_eq!(detail.total_score, "-8");
    assert_eq!(detail.round_scores, vec!["68", "70"]);
}

#[test]
fn test1_standings_ordered_by_points_then_owner() {
    let board = snapshot(&[("A", "1"), ("B", "2"), ("C", "CUT")]);
    let entries = vec![
        BetEntry {
            owner: "zed".to_string(),
            players: vec!["B".to_string()],
            hidden: false,
        },
        BetEntry {
            owner: "amy".to_string(),
            players: vec!["B".to_string()],
            hidden: false,
        },
        BetEntry {
            owner: "kim".to_string(),
            players: vec!["A".to_string(), "C".to_string()],
            hidden: false,
        },
    ];
    let results = score_all(&entries, &board);
    let order: Vec<(&str, i32)> = results
        .iter()
        .map(|r| (r.owner.as_str(), r.total_points))
        .collect();
    assert_eq!(order, vec![("kim", 2), ("amy", 1), ("zed", 1)]);
}
