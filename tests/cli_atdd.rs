use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const ANALYSTS_CSV: &str = "\
Performance Analyst,Team,Goals Scored,Goals Conceded,Top Scorer (Goals),Top Clean Sheet Keeper (Clean Sheets),Passes Attempted,Passes Completed,Set Piece Goals,Penalties Awarded,Penalty Goals
Ana Ruiz,Real Madrid,2.0,1.0,Vinicius (15),Courtois (12),600,520,10,8,6
Luis Gomez,Sevilla,1.0,2.0,En-Nesyri (9),Nyland (5),450,350,6,5,5
";

const PLAYERS_CSV: &str = "\
player name,player team,Minutes Played,Matches,goals,Total Passes,Successful Passes,Pass Start Position,Pass End Position
Pedri,Barcelona,1500,20,10,200,160,\"(10, 20)\",\"(30, 40)\"
Bench Guy,Cadiz,0,0,0,0,0,,
";

const MANAGERS_CSV: &str = "\
Manager,Team,Matches,Wins,Draws,Losses,Goals Scored,Goals Conceded,Trophies,Goalkeeper,Defenders,Midfielders,Forwards
Xavi,Barcelona,20,10,5,5,30,20,1,1,4,3,3
Ancelotti,Real Madrid,20,16,3,1,50,10,2,1,4,4,2
Mendilibar,Alaves,20,2,6,12,12,40,0,1,5,3,2
";

fn matchlens() -> Command {
    Command::cargo_bin("matchlens").expect("binary should compile")
}

fn write_datasets(dir: &Path) {
    fs::write(dir.join("Performance Analysts.csv"), ANALYSTS_CSV).expect("analysts should write");
    fs::write(dir.join("teams.txt"), "Team: Real Madrid - Formation: 4-3-3\n")
        .expect("formations should write");
    fs::write(dir.join("players_statistics.csv"), PLAYERS_CSV).expect("players should write");
    fs::write(dir.join("la_liga_managers_2024.csv"), MANAGERS_CSV)
        .expect("managers should write");
}

#[test]
fn view_renders_manager_markdown_with_ranking() {
    let dir = TempDir::new().expect("temp dir should be created");
    write_datasets(dir.path());

    matchlens()
        .arg("view")
        .arg(dir.path())
        .args(["manager", "Xavi"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# La Liga Coach Statistics Dashboard"))
        .stdout(predicate::str::contains("- Ranking: 2 of 3"));
}

#[test]
fn view_defaults_to_first_key_and_emits_json() {
    let dir = TempDir::new().expect("temp dir should be created");
    write_datasets(dir.path());

    let output = matchlens()
        .arg("view")
        .arg(dir.path())
        .args(["analyst", "--format", "json"])
        .output()
        .expect("view should run");
    assert!(output.status.success());

    let body: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be json");
    assert_eq!(body["dashboard"], "analyst");
    assert_eq!(body["selection"], "Ana Ruiz");
    assert_eq!(body["charts"][0]["id"], "goals-chart");
}

#[test]
fn view_unknown_key_exits_with_runtime_failure() {
    let dir = TempDir::new().expect("temp dir should be created");
    write_datasets(dir.path());

    matchlens()
        .arg("view")
        .arg(dir.path())
        .args(["player", "Nobody"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("no player record found for 'Nobody'"));
}

#[test]
fn view_zero_match_player_reports_division_by_zero() {
    let dir = TempDir::new().expect("temp dir should be created");
    write_datasets(dir.path());

    matchlens()
        .arg("view")
        .arg(dir.path())
        .args(["player", "Bench Guy"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("division by zero"));
}

#[test]
fn keys_lists_managers_in_file_order() {
    let dir = TempDir::new().expect("temp dir should be created");
    write_datasets(dir.path());

    matchlens()
        .arg("keys")
        .arg(dir.path())
        .arg("manager")
        .assert()
        .success()
        .stdout("Xavi\nAncelotti\nMendilibar\n");
}

#[test]
fn check_succeeds_when_every_dataset_is_clean() {
    let dir = TempDir::new().expect("temp dir should be created");
    write_datasets(dir.path());

    matchlens()
        .arg("check")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("manager: 3 rows, 3 keys"))
        .stdout(predicate::str::contains("sha256 "));
}

#[test]
fn check_warns_when_a_dashboard_has_no_dataset() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(dir.path().join("la_liga_managers_2024.csv"), MANAGERS_CSV)
        .expect("managers should write");

    matchlens()
        .arg("check")
        .arg(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("analyst: no dataset found"))
        .stdout(predicate::str::contains("player: no dataset found"));
}

const EXTRA_PASS_ROW: &str = "Pedri,Barcelona,1500,20,10,200,160,\"(15, 25)\",\"(35, 45)\"\n";

fn write_per_pass_players(dir: &Path) {
    fs::write(
        dir.join("players_statistics.csv"),
        format!("{PLAYERS_CSV}{EXTRA_PASS_ROW}"),
    )
    .expect("players should write");
}

#[test]
fn zero_config_check_accepts_per_pass_players() {
    let dir = TempDir::new().expect("temp dir should be created");
    write_datasets(dir.path());
    write_per_pass_players(dir.path());

    matchlens()
        .arg("check")
        .arg(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("player: 3 rows, 2 keys"))
        .stdout(predicate::str::contains("[WARN] duplicate key Pedri (2 rows)"))
        .stdout(predicate::str::contains("manager: 3 rows, 3 keys"));
}

#[test]
fn zero_config_player_heatmap_spans_every_pass_row() {
    let dir = TempDir::new().expect("temp dir should be created");
    write_datasets(dir.path());
    write_per_pass_players(dir.path());

    let output = matchlens()
        .arg("view")
        .arg(dir.path())
        .args(["player", "Pedri", "-f", "json"])
        .output()
        .expect("view should run");
    assert!(output.status.success());

    let body: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be json");
    let heatmap = body["charts"]
        .as_array()
        .expect("charts array")
        .iter()
        .find(|chart| chart["id"] == "pass-heatmap-graph")
        .expect("heatmap chart");
    assert_eq!(heatmap["figure"]["data"][0]["x"], serde_json::json!([10.0, 15.0]));
}

#[test]
fn configured_players_reject_duplicates_by_default() {
    let dir = TempDir::new().expect("temp dir should be created");
    write_datasets(dir.path());
    write_per_pass_players(dir.path());
    fs::write(
        dir.path().join("matchlens.toml"),
        "[data.players]\npath = \"players_statistics.csv\"\n",
    )
    .expect("config should write");

    matchlens()
        .arg("check")
        .arg(dir.path())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("duplicate key 'Pedri'"));
}

#[test]
fn check_warns_on_duplicates_under_first_policy() {
    let dir = TempDir::new().expect("temp dir should be created");
    write_datasets(dir.path());
    write_per_pass_players(dir.path());
    fs::write(
        dir.path().join("matchlens.toml"),
        r#"
[data.players]
path = "players_statistics.csv"
duplicate_keys = "first"
"#,
    )
    .expect("config should write");

    matchlens()
        .arg("check")
        .arg(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("[WARN] duplicate key Pedri (2 rows)"));
}

#[test]
fn config_limits_dashboards_to_configured_datasets() {
    let dir = TempDir::new().expect("temp dir should be created");
    write_datasets(dir.path());
    fs::write(
        dir.path().join("matchlens.toml"),
        "[data.managers]\npath = \"la_liga_managers_2024.csv\"\n",
    )
    .expect("config should write");

    matchlens()
        .arg("view")
        .arg(dir.path())
        .arg("player")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("player dashboard is not configured"));
}

#[test]
fn latin1_dataset_is_decoded() {
    let dir = TempDir::new().expect("temp dir should be created");
    let mut bytes = b"Manager,Team,Matches,Wins,Draws,Losses,Goals Scored,Goals Conceded,Trophies,Goalkeeper,Defenders,Midfielders,Forwards\n".to_vec();
    bytes.extend_from_slice(b"Jos\xe9 Bordal\xe1s,Getafe,20,8,6,6,22,20,0,1,4,4,2\n");
    fs::write(dir.path().join("la_liga_managers_2024.csv"), bytes)
        .expect("managers should write");

    matchlens()
        .arg("keys")
        .arg(dir.path())
        .arg("manager")
        .assert()
        .success()
        .stdout("José Bordalás\n");
}

#[test]
fn missing_path_exits_with_runtime_failure() {
    matchlens()
        .args(["check", "/definitely/not/here"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("path does not exist"));
}

#[test]
fn empty_directory_has_no_datasets() {
    let dir = TempDir::new().expect("temp dir should be created");

    matchlens()
        .arg("check")
        .arg(dir.path())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("no datasets found"));
}

#[test]
fn header_only_dataset_has_no_default_view() {
    let dir = TempDir::new().expect("temp dir should be created");
    let header = MANAGERS_CSV.lines().next().expect("header line");
    fs::write(dir.path().join("la_liga_managers_2024.csv"), format!("{header}\n"))
        .expect("managers should write");

    matchlens()
        .arg("view")
        .arg(dir.path())
        .arg("manager")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("manager dataset has no rows"));
}

#[test]
fn config_without_datasets_is_rejected() {
    let dir = TempDir::new().expect("temp dir should be created");
    write_datasets(dir.path());
    fs::write(dir.path().join("matchlens.toml"), "[server]\nport = 9000\n")
        .expect("config should write");

    matchlens()
        .arg("check")
        .arg(dir.path())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("no dataset configured"));
}

#[test]
fn serve_on_occupied_port_exits_with_runtime_failure() {
    let dir = TempDir::new().expect("temp dir should be created");
    write_datasets(dir.path());
    let taken = std::net::TcpListener::bind("127.0.0.1:0").expect("listener should bind");
    let port = taken.local_addr().expect("listener address").port();

    matchlens()
        .arg("serve")
        .arg(dir.path())
        .args(["--host", "127.0.0.1", "--port", &port.to_string()])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("could not bind 127.0.0.1"));
}
