use assert_cmd::Command;
use assert_cmd::cargo;
use mockito::Server;
use predicates::prelude::*;

const LISTING: &str = include_str!("fixtures/maven-3.html");

fn listing_of(versions: &[&str]) -> String {
    let rows: String = versions
        .iter()
        .map(|v| {
            format!("<img src=\"/icons/folder.gif\" alt=\"[DIR]\"> <a href=\"{v}/\">{v}/</a>\n")
        })
        .collect();
    format!("<html><body><pre>{rows}<hr></pre></body></html>")
}

fn mvn_latest() -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("mvn-latest"));
    cmd.env_remove("MVN_LATEST_URL");
    cmd
}

#[test]
fn test_end_to_end_prints_list_literal() {
    let mut server = Server::new();
    let url = server.url();

    let mock = server
        .mock("GET", "/maven-3")
        .with_status(200)
        .with_header("content-type", "text/html;charset=UTF-8")
        .with_body(LISTING)
        .expect(1)
        .create();

    mvn_latest()
        .arg("--url")
        .arg(format!("{}/maven-3", url))
        .assert()
        .success()
        .stdout(format!(
            "['{url}/maven-3/3.8.5/binaries/apache-maven-3.8.5-bin.tar.gz', \
             '{url}/maven-3/3.8.5/binaries/apache-maven-3.8.5-bin.zip']\n"
        ));

    mock.assert();
}

#[test]
fn test_trailing_slash_gives_same_output() {
    let mut server = Server::new();
    let url = server.url();

    let _mock = server
        .mock("GET", "/maven-3")
        .with_status(200)
        .with_body(LISTING)
        .expect(2)
        .create();

    let with_slash = mvn_latest()
        .arg("--url")
        .arg(format!("{}/maven-3/", url))
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let without_slash = mvn_latest()
        .arg("--url")
        .arg(format!("{}/maven-3", url))
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(with_slash, without_slash);
}

#[test]
fn test_base_url_from_environment() {
    let mut server = Server::new();
    let url = server.url();

    let _mock = server
        .mock("GET", "/mirror/maven-3")
        .with_status(200)
        .with_body(listing_of(&["3.8.4", "3.8.5"]))
        .create();

    mvn_latest()
        .env("MVN_LATEST_URL", format!("{}/mirror/maven-3/", url))
        .arg("--format")
        .arg("lines")
        .assert()
        .success()
        .stdout(format!(
            "{url}/mirror/maven-3/3.8.5/binaries/apache-maven-3.8.5-bin.tar.gz\n\
             {url}/mirror/maven-3/3.8.5/binaries/apache-maven-3.8.5-bin.zip\n"
        ));
}

#[test]
fn test_string_order_is_default() {
    let mut server = Server::new();
    let url = server.url();

    let _mock = server
        .mock("GET", "/maven-3")
        .with_status(200)
        .with_body(listing_of(&["3.10.0", "3.9.0"]))
        .expect(2)
        .create();

    mvn_latest()
        .arg("--url")
        .arg(format!("{}/maven-3", url))
        .assert()
        .success()
        .stdout(predicate::str::contains("apache-maven-3.9.0-bin.tar.gz"));

    mvn_latest()
        .arg("--url")
        .arg(format!("{}/maven-3", url))
        .arg("--order")
        .arg("numeric")
        .assert()
        .success()
        .stdout(predicate::str::contains("apache-maven-3.10.0-bin.tar.gz"));
}

#[test]
fn test_json_output() {
    let mut server = Server::new();
    let url = server.url();

    let _mock = server
        .mock("GET", "/maven-3")
        .with_status(200)
        .with_body(LISTING)
        .create();

    let output = mvn_latest()
        .arg("--url")
        .arg(format!("{}/maven-3", url))
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["version"], "3.8.5");
    assert_eq!(
        value["zip"],
        format!("{url}/maven-3/3.8.5/binaries/apache-maven-3.8.5-bin.zip")
    );
}

#[test]
fn test_not_found_fails_without_retry() {
    let mut server = Server::new();
    let url = server.url();

    let mock = server
        .mock("GET", "/maven-3")
        .with_status(404)
        .expect(1)
        .create();

    mvn_latest()
        .arg("--url")
        .arg(format!("{}/maven-3", url))
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("not found"));

    mock.assert();
}

#[test]
fn test_empty_listing_fails() {
    let mut server = Server::new();
    let url = server.url();

    let _mock = server
        .mock("GET", "/maven-3")
        .with_status(200)
        .with_body(listing_of(&[]))
        .create();

    mvn_latest()
        .arg("--url")
        .arg(format!("{}/maven-3", url))
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("no version directories found"));
}

#[test]
fn test_non_utf8_listing_fails() {
    let mut server = Server::new();
    let url = server.url();

    let _mock = server
        .mock("GET", "/maven-3")
        .with_status(200)
        .with_body(b"<a href=\"3.8.5/\">3.8.5/</a>\xff\xfe")
        .create();

    mvn_latest()
        .arg("--url")
        .arg(format!("{}/maven-3", url))
        .assert()
        .failure()
        .stderr(predicate::str::contains("not valid UTF-8"));
}

#[test]
fn test_connection_refused_fails() {
    mvn_latest()
        .arg("--url")
        .arg("http://127.0.0.1:1/maven-3")
        .arg("--timeout")
        .arg("5")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to fetch directory listing"));
}
