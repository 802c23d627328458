//! CLI end-to-end tests
//!
//! Tests for the cinescroll command-line interface. Commands that talk to the
//! catalog run against a local wiremock server configured through a
//! temporary config file.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use serde_json::{json, Value};
use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::{tempdir, TempDir};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Get a command for the cinescroll binary
#[allow(deprecated)]
fn cinescroll_cmd() -> Command {
    let mut cmd = Command::cargo_bin("cinescroll").unwrap();
    cmd.env_remove("CINESCROLL_API_KEY").env_remove("RUST_LOG");
    cmd
}

/// Write a config file pointing at `base_url` and return its directory and path.
fn write_config(base_url: &str, api_key: &str) -> (TempDir, PathBuf) {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cinescroll.toml");
    fs::write(
        &path,
        format!("[api]\nbase_url = \"{base_url}\"\napi_key = \"{api_key}\"\n"),
    )
    .unwrap();
    (dir, path)
}

/// Run the binary off the async runtime so the mock server keeps serving.
async fn run(args: Vec<String>) -> Output {
    tokio::task::spawn_blocking(move || cinescroll_cmd().args(args).output().unwrap())
        .await
        .unwrap()
}

fn args(config: &PathBuf, rest: &[&str]) -> Vec<String> {
    let mut out = vec!["--config".to_string(), config.display().to_string()];
    out.extend(rest.iter().map(|s| s.to_string()));
    out
}

fn listing(ids: impl IntoIterator<Item = u64>) -> Value {
    let results: Vec<Value> = ids
        .into_iter()
        .map(|id| {
            json!({
                "id": id,
                "title": format!("Movie {id}"),
                "poster_path": format!("/{id}.jpg"),
                "release_date": "2020-01-01",
                "genre_ids": [28],
                "vote_average": 7.5
            })
        })
        .collect();
    json!({ "page": 1, "total_pages": 10, "results": results })
}

#[test]
fn test_cli_no_args_shows_help() {
    cinescroll_cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_help_flag() {
    cinescroll_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("cinescroll"))
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_version_flag() {
    cinescroll_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("cinescroll"));
}

#[test]
fn test_cli_version_command() {
    cinescroll_cmd()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_list_help() {
    cinescroll_cmd()
        .args(["list", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("infinite scroll"))
        .stdout(predicate::str::contains("--sort"));
}

#[test]
fn test_cli_list_rejects_unknown_sort() {
    cinescroll_cmd()
        .args(["list", "--sort", "budget"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown sort key"));
}

#[test]
fn test_cli_list_requires_api_key() {
    let (_dir, config) = write_config("http://127.0.0.1:9", "");
    cinescroll_cmd()
        .args(args(&config, &["list"]))
        .assert()
        .failure()
        .stderr(predicate::str::contains("No API key configured"));
}

#[test]
fn test_cli_validate_valid_config() {
    let (_dir, config) = write_config("http://localhost:8000/3", "key");
    cinescroll_cmd()
        .arg("validate")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"))
        .stdout(predicate::str::contains("API key set: true"));
}

#[test]
fn test_cli_validate_invalid_config() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("bad.toml");
    fs::write(&config, "[browse]\npages = 0\n").unwrap();

    cinescroll_cmd()
        .arg("validate")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("browse.pages"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_cli_list_merges_pages_as_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/discover/movie"))
        .and(query_param("sort_by", "vote_average.desc"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing(1..=20)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/discover/movie"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing(18..=37)))
        .expect(1)
        .mount(&server)
        .await;

    let (_dir, config) = write_config(&server.uri(), "test-key");
    let output = run(args(
        &config,
        &["list", "--sort", "rating", "--pages", "2", "--json"],
    ))
    .await;
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["page"], 2);
    assert_eq!(json["exhausted"], false);
    assert_eq!(json["query"]["sort"], "rating");
    let results = json["results"].as_array().unwrap();
    assert_eq!(results.len(), 37);
    assert_eq!(results[0]["id"], "1");
    assert_eq!(results[36]["id"], "37");
    assert_eq!(
        results[0]["image_url"],
        "https://image.tmdb.org/t/p/w500/1.jpg"
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_cli_list_stops_at_empty_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/discover/movie"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing(1..=3)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/discover/movie"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing(std::iter::empty())))
        .expect(1)
        .mount(&server)
        .await;

    let (_dir, config) = write_config(&server.uri(), "test-key");
    let output = run(args(&config, &["list", "--pages", "5"])).await;
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Movie 3"));
    assert!(stdout.contains("3 movies, 2 page(s) loaded, end of catalog"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_cli_list_reports_fetch_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/discover/movie"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let (_dir, config) = write_config(&server.uri(), "test-key");
    let output = run(args(&config, &["list"])).await;
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to load movies"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_cli_genres() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/genre/movie/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "genres": [{ "id": 28, "name": "Action" }, { "id": 18, "name": "Drama" }]
        })))
        .mount(&server)
        .await;

    let (_dir, config) = write_config(&server.uri(), "test-key");
    let output = run(args(&config, &["genres"])).await;
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("28  Action"));
    assert!(stdout.contains("18  Drama"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_cli_show_prints_trailer() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movie/550"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 550,
            "title": "Fight Club",
            "runtime": 139,
            "budget": 63000000,
            "genres": [{ "id": 18, "name": "Drama" }]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/movie/550/videos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                { "key": "teaser", "site": "YouTube", "type": "Teaser" },
                { "key": "SUXWAEX2jlg", "site": "YouTube", "type": "Trailer" }
            ]
        })))
        .mount(&server)
        .await;

    let (_dir, config) = write_config(&server.uri(), "test-key");
    let output = run(args(&config, &["show", "550"])).await;
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Fight Club"));
    assert!(stdout.contains("Runtime: 139 min"));
    assert!(stdout.contains("Budget: $63,000,000"));
    assert!(stdout.contains("Trailer: https://www.youtube.com/watch?v=SUXWAEX2jlg"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_cli_show_missing_movie_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let (_dir, config) = write_config(&server.uri(), "test-key");
    let output = run(args(&config, &["show", "1"])).await;
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to load movie 1"));
}
