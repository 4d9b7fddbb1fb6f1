use assert_cmd::Command;
use predicates::prelude::*;

fn hero_battle() -> Command {
    Command::cargo_bin("hero-battle").unwrap()
}

#[test]
fn demo_runs_both_scenarios() {
    hero_battle()
        .args(["demo", "--seed", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dmytro was defeated! Winner: Merlin"))
        .stdout(predicate::str::contains("Dmytro was defeated! Winner: Leona"))
        .stdout(predicate::str::contains("Found hero: #2 Merlin [Mage/Magical]"))
        .stdout(predicate::str::contains("Found hero: #5 Merlin [Mage/Magical]"))
        .stdout(predicate::str::contains("Total damage dealt: "))
        .stdout(predicate::str::contains("Critical hits: "));
}

#[test]
fn demo_is_the_default_command() {
    hero_battle()
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Scenario 1: heroes ==="));
}

#[test]
fn seeded_demo_is_reproducible() {
    let run = || {
        hero_battle()
            .args(["demo", "--seed", "7"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn duel_reports_winner() {
    hero_battle()
        .args(["duel", "--first", "warrior", "--second", "archer", "--seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Warrior was defeated! Winner: Archer"))
        .stdout(predicate::str::contains("winner=Archer loser=Warrior rounds="));
}

#[test]
fn rust_log_level_reaches_engine_events() {
    hero_battle()
        .env("RUST_LOG", "debug")
        .args(["duel", "--first", "warrior", "--second", "archer", "--seed", "1"])
        .assert()
        .success()
        .stderr(predicate::str::contains("hero created"))
        .stderr(predicate::str::contains("battle finished"));
}

#[test]
fn quiet_by_default() {
    hero_battle()
        .env_remove("RUST_LOG")
        .args(["duel", "--first", "warrior", "--second", "archer", "--seed", "1"])
        .assert()
        .success()
        .stderr(predicate::str::contains("hero created").not());
}

/// Pull the pretty-printed JSON objects out of mixed demo output.
fn json_blocks(stdout: &str) -> Vec<serde_json::Value> {
    let mut blocks = Vec::new();
    let mut current: Option<String> = None;
    for line in stdout.lines() {
        if current.is_none() && (line == "{" || line == "Found hero: {") {
            current = Some("{\n".to_string());
            continue;
        }
        if let Some(buf) = current.as_mut() {
            buf.push_str(line);
            buf.push('\n');
            if line == "}" {
                let text = current.take().unwrap();
                blocks.push(serde_json::from_str(&text).unwrap());
            }
        }
    }
    blocks
}

#[test]
fn demo_json_prints_hero_records() {
    let out = hero_battle().args(["demo", "--seed", "1", "--json"]).output().unwrap();
    assert!(out.status.success());
    let blocks = json_blocks(&String::from_utf8(out.stdout).unwrap());

    // per scenario: three created, one lookup, three final
    assert_eq!(blocks.len(), 14);
    let ids: Vec<u64> = blocks[..3].iter().map(|h| h["id"].as_u64().unwrap()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(blocks[3]["name"], "Merlin");
    assert_eq!(blocks[3]["archetype"], "mage");
    assert_eq!(blocks[4]["name"], "Dmytro");
    assert_eq!(blocks[4]["alive"], false);
    assert_eq!(blocks[4]["stats"]["health"], 0);
    assert_eq!(blocks[10]["id"], 5);
    assert_eq!(blocks[11]["id"], 4);
    assert_eq!(blocks[11]["alive"], false);
}

#[test]
fn roster_pretty_is_multiline_json() {
    let out = hero_battle().args(["roster", "--pretty"]).output().unwrap();
    assert!(out.status.success());
    let text = String::from_utf8(out.stdout).unwrap();
    assert!(text.lines().count() > 3);
    let heroes: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(heroes[1]["attack_category"], "magical");
    assert_eq!(heroes[1]["stats"]["speed"], 8);
}

#[test]
fn duel_rejects_unknown_archetype() {
    hero_battle()
        .args(["duel", "--first", "paladin", "--second", "mage"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid hero archetype"));
}

#[test]
fn roster_dumps_json() {
    let out = hero_battle().args(["roster"]).output().unwrap();
    assert!(out.status.success());
    let heroes: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let heroes = heroes.as_array().unwrap();
    assert_eq!(heroes.len(), 3);
    assert_eq!(heroes[0]["name"], "Dmytro");
    assert_eq!(heroes[2]["archetype"], "archer");
    assert_eq!(heroes[2]["id"], 3);
}

#[test]
fn simulate_vs_prints_summary() {
    Command::cargo_bin("simulate-vs")
        .unwrap()
        .args(["--first", "mage", "--second", "warrior", "--trials", "20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("trials:             20"))
        .stdout(predicate::str::contains("Mage win rate:      100.0%"));
}

#[test]
fn simulate_vs_needs_trials() {
    Command::cargo_bin("simulate-vs")
        .unwrap()
        .args(["--first", "mage", "--second", "warrior", "--trials", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least one duel sample"));
}
