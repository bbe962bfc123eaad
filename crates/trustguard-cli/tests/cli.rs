use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

fn tguard(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tguard").unwrap();
    cmd.env("TGUARD_CONFIG", config_dir.path().join("config.toml"))
        .env_remove("TRUSTGUARD_BACKEND_URL")
        .env_remove("TRUSTGUARD_ANALYSIS_URL")
        .env_remove("RUST_LOG")
        .arg("--no-color");
    cmd
}

const REVIEWS: &str = r#"[
  {"id":"review_001","productId":"prod_001","userId":"user_001","userName":"Sarah Mitchell",
   "rating":4,"headline":"Solid","content":"Solid product, works as described, I use it daily.",
   "date":"2024-01-15T10:30:00Z","verified":true},
  {"id":"review_006","productId":"prod_001","userId":"user_006","userName":"Deal_2024",
   "rating":5,"headline":"Best ever","content":"Amazing incredible perfect product highly recommend five stars great product",
   "date":"2024-01-20T08:00:00Z","verified":false}
]"#;

#[test]
fn score_offline_json() {
    let dir = TempDir::new().unwrap();
    tguard(&dir)
        .args(["--offline", "-o", "json", "score", "Five stars", "-r", "5", "-u", "Deal_2024"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"isFake\": true"))
        .stdout(predicate::str::contains("Suspicious username pattern"));
}

#[test]
fn score_rejects_bad_rating() {
    let dir = TempDir::new().unwrap();
    tguard(&dir)
        .args(["--offline", "score", "Fine.", "-r", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("rating"));
}

#[test]
fn analyze_offline_synthesizes_trust_score() {
    let dir = TempDir::new().unwrap();
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(REVIEWS.as_bytes()).unwrap();

    tguard(&dir)
        .args(["--offline", "-o", "json", "analyze"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"totalReviews\": 2"))
        .stdout(predicate::str::contains("\"fakeReviews\": 1"))
        .stdout(predicate::str::contains("\"trustScoreSource\": \"local\""));
}

#[test]
fn trust_score_offline_without_reviews() {
    let dir = TempDir::new().unwrap();
    tguard(&dir)
        .args(["--offline", "-o", "json", "trust-score", "prod_404"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"overall\": 79"));
}

#[test]
fn config_set_then_show() {
    let dir = TempDir::new().unwrap();
    tguard(&dir)
        .args(["config", "set", "backend_url", "http://shop.internal:8080"])
        .assert()
        .success();

    tguard(&dir)
        .args(["-o", "json", "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("http://shop.internal:8080"));

    tguard(&dir)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn feed_replay_from_stdin() {
    let dir = TempDir::new().unwrap();
    let frames = concat!(
        r#"{"type":"new_review","payload":{"id":"r1","productId":"p","userId":"u","userName":"Kim","rating":4,"headline":"Ok","content":"Fine.","date":"2024-01-25T08:00:00Z"}}"#,
        "\n",
        "garbage\n",
    );
    tguard(&dir)
        .args(["-o", "json", "feed", "-"])
        .write_stdin(frames)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"reviewsAdded\": 1"))
        .stdout(predicate::str::contains("\"dropped\": 1"));
}
