use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("CLI crate should be inside workspace")
        .to_path_buf()
}

fn load_fixture(name: &str) -> String {
    let path = workspace_root()
        .join("usajobs_api/tests/fixtures")
        .join(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("read fixture {}: {}", path.display(), e))
}

async fn run_cli(base_url: String, args: &[&str]) -> Output {
    let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
    tokio::task::spawn_blocking(move || {
        Command::new(env!("CARGO_BIN_EXE_usajobs"))
            .current_dir(std::env::temp_dir())
            .env_remove("USAJOBS_USER_AGENT")
            .env_remove("USAJOBS_API_KEY")
            .env("USAJOBS_BASE_URL", base_url)
            .args(&args)
            .output()
            .expect("failed to run usajobs binary")
    })
    .await
    .unwrap()
}

#[tokio::test(flavor = "multi_thread")]
async fn list_prints_code_table() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/codelist/academichonors"))
        .and(header("host", "data.usajobs.gov"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(load_fixture("academichonors.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let output = run_cli(
        mock_server.uri(),
        &[
            "--user-agent",
            "me@example.com",
            "--token",
            "secret",
            "list",
            "academic-honors",
        ],
    )
    .await;
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Summa Cum Laude"));
}

#[tokio::test(flavor = "multi_thread")]
async fn list_csv_detail() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/codelist/academichonors"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(load_fixture("academichonors.json")),
        )
        .mount(&mock_server)
        .await;

    let output = run_cli(
        mock_server.uri(),
        &[
            "--user-agent",
            "me@example.com",
            "--token",
            "secret",
            "--output",
            "csv",
            "list",
            "academichonors",
            "--detail",
        ],
    )
    .await;
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let mut lines = stdout.lines();
    assert_eq!(
        lines.next(),
        Some("ID,Code,Value,Last Modified,Disabled,Date Generated")
    );
    assert_eq!(stdout.lines().count(), 4);
}

#[tokio::test(flavor = "multi_thread")]
async fn search_sends_credentials_and_filters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(header("user-agent", "me@example.com"))
        .and(header("authorization-key", "secret"))
        .and(query_param("JobCategoryCode", "2210;0854"))
        .and(query_param("ResultsPerPage", "500"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("search.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let output = run_cli(
        mock_server.uri(),
        &[
            "--user-agent",
            "me@example.com",
            "--token",
            "secret",
            "--output",
            "json",
            "search",
            "--job-category",
            "2210,0854",
        ],
    )
    .await;
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let items: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(items[0]["MatchedObjectId"], "780512300");
}

#[tokio::test(flavor = "multi_thread")]
async fn search_without_credentials_fails() {
    let mock_server = MockServer::start().await;

    let output = run_cli(mock_server.uri(), &["search", "--keyword", "army"]).await;
    assert!(!output.status.success());

    let received = mock_server.received_requests().await.unwrap();
    assert!(received.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn list_without_credentials_fails() {
    let mock_server = MockServer::start().await;

    let output = run_cli(mock_server.uri(), &["list", "academic-honors"]).await;
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("--user-agent"));

    let received = mock_server.received_requests().await.unwrap();
    assert!(received.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn non_success_status_fails_the_command() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(401).set_body_string(load_fixture("error.json")))
        .mount(&mock_server)
        .await;

    let output = run_cli(
        mock_server.uri(),
        &["--user-agent", "me@example.com", "--token", "bad", "search"],
    )
    .await;
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("401 Unauthorized"));
}
