use contrib_shooter::error::Error;
use contrib_shooter::graph::{ContributionGraph, Day, Week};

use rand::rngs::StdRng;
use rand::SeedableRng;

fn day(level: i32) -> Day {
    Day {
        level,
        count: level as i64,
        date: String::new(),
    }
}

fn week(levels: &[i32]) -> Week {
    Week {
        days: levels.iter().copied().map(day).collect(),
    }
}

// ── Construction & validation ─────────────────────────────────────────────────

#[test]
fn new_accepts_well_formed_weeks() {
    let g = ContributionGraph::new(vec![week(&[0, 1, 2]), week(&[3, 0, 0])]).unwrap();
    assert_eq!(g.num_weeks(), 2);
    assert_eq!(g.num_days(), 3);
    assert_eq!(g.total_contributions, 6);
}

#[test]
fn new_rejects_empty_grid() {
    let err = ContributionGraph::new(vec![]).unwrap_err();
    assert!(matches!(err, Error::MalformedGrid(_)));
}

#[test]
fn new_rejects_unequal_week_lengths() {
    let err = ContributionGraph::new(vec![week(&[0, 1, 2]), week(&[3, 0])]).unwrap_err();
    assert!(matches!(err, Error::MalformedGrid(_)));
}

#[test]
fn new_rejects_negative_level() {
    let err = ContributionGraph::new(vec![week(&[0, -1, 2])]).unwrap_err();
    assert!(matches!(err, Error::MalformedGrid(_)));
}

#[test]
fn new_rejects_negative_count() {
    let mut w = week(&[1]);
    w.days[0].count = -5;
    let err = ContributionGraph::new(vec![w]).unwrap_err();
    assert!(matches!(err, Error::MalformedGrid(_)));
}

// ── level_at ──────────────────────────────────────────────────────────────────

#[test]
fn level_at_reads_cells() {
    let g = ContributionGraph::new(vec![week(&[0, 1, 2]), week(&[3, 0, 4])]).unwrap();
    assert_eq!(g.level_at(0, 1).unwrap(), 1);
    assert_eq!(g.level_at(1, 0).unwrap(), 3);
    assert_eq!(g.level_at(1, 2).unwrap(), 4);
}

#[test]
fn level_at_rejects_out_of_range_week() {
    let g = ContributionGraph::new(vec![week(&[0, 1, 2])]).unwrap();
    let err = g.level_at(1, 0).unwrap_err();
    assert!(matches!(err, Error::OutOfRange { week: 1, .. }));
}

#[test]
fn level_at_rejects_out_of_range_day() {
    let g = ContributionGraph::new(vec![week(&[0, 1, 2])]).unwrap();
    let err = g.level_at(0, 3).unwrap_err();
    assert!(matches!(err, Error::OutOfRange { day: 3, .. }));
}

// ── JSON round-trip ───────────────────────────────────────────────────────────

#[test]
fn json_round_trip_preserves_metadata() {
    let json = r#"{
        "username": "octocat",
        "total_contributions": 9,
        "weeks": [
            {"days": [
                {"level": 1, "count": 1, "date": "2024-01-01"},
                {"level": 0, "count": 0, "date": "2024-01-02"},
                {"level": 3, "count": 8, "date": "2024-01-03"}
            ]}
        ]
    }"#;
    let g: ContributionGraph = serde_json::from_str(json).unwrap();
    g.validate().unwrap();
    assert_eq!(g.username, "octocat");
    assert_eq!(g.total_contributions, 9);
    assert_eq!(g.weeks[0].days[2].date, "2024-01-03");

    let back = serde_json::to_string(&g).unwrap();
    let g2: ContributionGraph = serde_json::from_str(&back).unwrap();
    assert_eq!(g2.weeks[0].days[1].level, 0);
    assert_eq!(g2.username, "octocat");
}

#[test]
fn json_missing_metadata_defaults() {
    // Only `weeks` is required; metadata fields default.
    let json = r#"{"weeks": [{"days": [{"level": 2}]}]}"#;
    let g: ContributionGraph = serde_json::from_str(json).unwrap();
    g.validate().unwrap();
    assert_eq!(g.username, "");
    assert_eq!(g.level_at(0, 0).unwrap(), 2);
}

// ── Demo generator ────────────────────────────────────────────────────────────

#[test]
fn demo_grid_is_valid_and_full_size() {
    let mut rng = StdRng::seed_from_u64(42);
    let g = ContributionGraph::demo(&mut rng);
    g.validate().unwrap();
    assert_eq!(g.num_weeks(), 52);
    assert_eq!(g.num_days(), 7);
}

#[test]
fn demo_grid_is_seed_deterministic() {
    let a = ContributionGraph::demo(&mut StdRng::seed_from_u64(7));
    let b = ContributionGraph::demo(&mut StdRng::seed_from_u64(7));
    for (wa, wb) in a.weeks.iter().zip(&b.weeks) {
        for (da, db) in wa.days.iter().zip(&wb.days) {
            assert_eq!(da.level, db.level);
        }
    }
}
