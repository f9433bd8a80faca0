//! End-to-end tests running the `sip-bulk-fetch` binary against a mock registry

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn packages_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create packages file");
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn cmd(registry: Option<&str>) -> Command {
    let mut cmd = Command::cargo_bin("sip-bulk-fetch").unwrap();
    cmd.env_remove("RUST_LOG")
        .env_remove("SIP_LANG")
        .env_remove("SIP_TRUST_SCORE")
        .env_remove("SIP_TIMEOUT")
        .env_remove("SIP_REGISTRY_URL")
        .env("NO_COLOR", "1");
    if let Some(url) = registry {
        cmd.env("SIP_REGISTRY_URL", url);
    }
    cmd
}

async fn mount_project(server: &MockServer, name: &str, version: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/pypi/{}/json", name)))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "info": {
                "version": version,
                "home_page": "",
                "project_urls": { "Homepage": format!("https://{}.example", name) }
            },
            "releases": {
                version: [
                    { "packagetype": "bdist_wheel", "digests": { "sha256": format!("{}-wheel", name) } },
                    { "packagetype": "sdist", "digests": { "sha256": format!("{}-sdist", name) } }
                ]
            }
        })))
        .expect(1)
        .mount(server)
        .await;
}

fn records(stdout: &[u8]) -> Vec<serde_json::Value> {
    serde_json::from_slice(stdout).expect("stdout is not a JSON array")
}

#[tokio::test]
async fn fetches_in_input_order() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    mount_project(&server, "requests", "2.32.3").await;
    mount_project(&server, "flask", "3.0.3").await;
    let file = packages_file("requests\n# a comment\n\nflask");

    let assert = cmd(Some(server.uri().as_str()))
        .arg(file.path())
        .assert()
        .success()
        .stderr(contains("(1/2) fetching requests..."))
        .stderr(contains("(2/2) fetching flask..."))
        .stderr(contains("completed: 2 success, 0 errors"))
        .stderr(contains("comment").not());

    let records = records(&assert.get_output().stdout);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["name"], "requests");
    assert_eq!(records[0]["version"], "2.32.3");
    assert_eq!(records[0]["hash"], "sha256:requests-sdist");
    assert_eq!(records[0]["trust_score"], 5.0);
    assert_eq!(records[0]["endorsed_by"], serde_json::json!(["pypi-bulk-fetch"]));
    assert_eq!(records[0]["source"], "https://requests.example");
    assert_eq!(records[1]["name"], "flask");
    Ok(())
}

#[tokio::test]
async fn failed_package_does_not_fail_run() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    mount_project(&server, "requests", "2.32.3").await;
    Mock::given(method("GET"))
        .and(path("/pypi/no-such-package/json"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    let file = packages_file("no-such-package\nrequests\n");

    let assert = cmd(Some(server.uri().as_str()))
        .arg(file.path())
        .assert()
        .code(0)
        .stderr(contains("error fetching no-such-package"))
        .stderr(contains("completed: 1 success, 1 errors"));

    let records = records(&assert.get_output().stdout);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["name"], "requests");
    Ok(())
}

#[tokio::test]
async fn output_is_pretty_printed() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    mount_project(&server, "requests", "2.32.3").await;
    let file = packages_file("requests\n");

    let assert = cmd(Some(server.uri().as_str()))
        .args(["--trust-score", "7.5"])
        .arg(file.path())
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone())?;
    assert!(stdout.starts_with("[\n  {\n    \"name\": \"requests\",\n"));
    assert!(stdout.contains("    \"trust_score\": 7.5,\n"));
    Ok(())
}

#[test]
fn no_arguments_is_usage_error() {
    cmd(None).assert().failure().stdout("");
}

#[test]
fn missing_file_is_usage_error() {
    let dir = tempfile::tempdir().unwrap();

    cmd(None)
        .arg(dir.path().join("does-not-exist.txt"))
        .assert()
        .failure()
        .stdout("")
        .stderr(contains("does-not-exist.txt"));
}

#[tokio::test]
async fn only_comments_is_usage_error() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    let file = packages_file("# nothing here\n\n   \n  # still nothing\n");

    cmd(Some(server.uri().as_str()))
        .arg(file.path())
        .assert()
        .failure()
        .stdout("")
        .stderr(contains("no packages found in file"));

    assert!(server.received_requests().await.unwrap_or_default().is_empty());
    Ok(())
}
