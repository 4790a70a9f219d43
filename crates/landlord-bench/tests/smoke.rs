use std::fs;

use landlord_bench::config::BenchmarkConfig;
use landlord_bench::selfplay::SelfPlayRunner;
use tempfile::tempdir;

fn load_config(output_dir: &std::path::Path) -> BenchmarkConfig {
    let yaml = format!(
        r#"
run_id: "test_smoke"
games:
  seed: 4242
  count: 3
outputs:
  jsonl: "{jsonl}"
  summary_md: "{summary}"
logging:
  enable_structured: false
"#,
        jsonl = output_dir.join("games.jsonl").display(),
        summary = output_dir.join("summary.md").display(),
    );

    let cfg: BenchmarkConfig = serde_yaml::from_str(&yaml).expect("valid yaml");
    cfg.validate().expect("config validates");
    cfg
}

#[test]
fn selfplay_smoke_test_writes_rows_and_summary() {
    let dir = tempdir().expect("temp dir");
    let config = load_config(dir.path());
    let outputs = config.resolved_outputs();

    let runner = SelfPlayRunner::new(config, outputs);
    let summary = runner.run().expect("self-play completes");

    assert_eq!(summary.games_played, 3);
    assert_eq!(summary.rows_written, 3);
    assert!(summary.landlord_wins <= 3);

    let jsonl = fs::read_to_string(&summary.jsonl_path).expect("jsonl readable");
    let rows: Vec<serde_json::Value> = jsonl
        .lines()
        .map(|line| serde_json::from_str(line).expect("row decodes to JSON"))
        .collect();
    assert_eq!(rows.len(), 3);
    for (index, row) in rows.iter().enumerate() {
        assert_eq!(row["run_id"], "test_smoke");
        assert_eq!(row["game_index"], index);
        assert!(row["winner"].is_string());
        assert!(row["turns"].as_u64().unwrap() > 0);
    }

    let markdown = fs::read_to_string(&summary.summary_path).expect("summary readable");
    assert!(markdown.contains("# Self-play summary: test_smoke"));
    assert!(markdown.contains("landlord win rate"));
}

#[test]
fn selfplay_runs_are_deterministic_for_a_seed() {
    let dir_a = tempdir().expect("temp dir");
    let dir_b = tempdir().expect("temp dir");

    let runner_a = {
        let config = load_config(dir_a.path());
        let outputs = config.resolved_outputs();
        SelfPlayRunner::new(config, outputs)
    };
    let runner_b = {
        let config = load_config(dir_b.path());
        let outputs = config.resolved_outputs();
        SelfPlayRunner::new(config, outputs)
    };

    let summary_a = runner_a.run().expect("first run completes");
    let summary_b = runner_b.run().expect("second run completes");

    let jsonl_a = fs::read_to_string(&summary_a.jsonl_path).expect("jsonl readable");
    let jsonl_b = fs::read_to_string(&summary_b.jsonl_path).expect("jsonl readable");
    assert_eq!(jsonl_a, jsonl_b, "same seed must replay the same games");
}
