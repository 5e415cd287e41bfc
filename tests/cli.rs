use assert_cmd::prelude::*;
use mockito::Matcher;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

/// Command with a clean environment pointed at `base_url`; `home` isolates the
/// default config location.
fn sitecms(base_url: &str, home: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("sitecms"));
    cmd.env("STRAPI_URL", base_url)
        .env("HOME", home)
        .env_remove("STRAPI_API_TOKEN")
        .env_remove("CMS_API_TIMEOUT")
        .env_remove("ENABLE_CMS")
        .env_remove("SITECMS_CONFIG")
        .env_remove("SITECMS_FORMAT")
        .env_remove("SITECMS_DEBUG")
        .env_remove("RUST_LOG");
    cmd
}

fn ok_body(data: &str) -> String {
    format!(r#"{{"data": {}, "meta": {{}}}}"#, data)
}

const VALIDATION_ERROR_BODY: &str = r#"{
    "data": null,
    "error": {"status": 400, "name": "ValidationError", "message": "Invalid key buttons"}
}"#;

#[test]
fn status_reports_resolved_config() -> Result<(), Box<dyn std::error::Error>> {
    let home = tempdir()?;

    sitecms("https://cms.example.com/", home.path())
        .arg("status")
        .env("STRAPI_API_TOKEN", "secret")
        .assert()
        .success()
        .stdout(predicate::str::contains("https://cms.example.com/api"))
        .stdout(predicate::str::contains("API token configured"))
        .stdout(predicate::str::contains("secret").not());

    Ok(())
}

#[test]
fn status_json_reads_custom_config_path() -> Result<(), Box<dyn std::error::Error>> {
    let home = tempdir()?;
    let config_path = home.path().join("cms.yaml");
    fs::write(
        &config_path,
        "base_url: https://file.example.com\ntimeout_ms: 2500\nenabled: false\n",
    )?;

    let assert = Command::new(assert_cmd::cargo::cargo_bin!("sitecms"))
        .arg("status")
        .arg("--format")
        .arg("json")
        .arg("--config")
        .arg(&config_path)
        .env("HOME", home.path())
        .env_remove("STRAPI_URL")
        .env_remove("CMS_API_TIMEOUT")
        .env_remove("ENABLE_CMS")
        .env_remove("SITECMS_FORMAT")
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout)?;
    assert_eq!(json["data"]["baseUrl"], "https://file.example.com/api");
    assert_eq!(json["data"]["timeoutMs"], 2500);
    assert_eq!(json["data"]["enabled"], false);

    Ok(())
}

#[test]
fn missing_explicit_config_fails() -> Result<(), Box<dyn std::error::Error>> {
    let home = tempdir()?;

    sitecms("http://localhost:1337", home.path())
        .arg("status")
        .arg("--config")
        .arg(home.path().join("does-not-exist.yaml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));

    Ok(())
}

#[test]
fn fetch_home_normalizes_partial_payload() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let home = tempdir()?;

    let mock = server
        .mock("GET", "/api/home")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("populate".into(), "*".into()),
            Matcher::Regex("_t=[0-9]+".into()),
        ]))
        .with_status(200)
        .with_body(ok_body(
            r#"{"hero": {"title1": "BRANDING", "backgroundImage": {"url": "/uploads/hero.jpg"}}}"#,
        ))
        .expect(1)
        .create();

    let assert = sitecms(&server.url(), home.path())
        .arg("fetch")
        .arg("home")
        .arg("--format")
        .arg("json")
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout)?;
    assert_eq!(json["meta"]["key"], "home");
    assert_eq!(json["data"]["hero"]["title1"], "BRANDING");
    assert_eq!(json["data"]["hero"]["title2"], "ALL UNDER ONE ROOF");
    assert_eq!(
        json["data"]["hero"]["backgroundImage"],
        format!("{}/uploads/hero.jpg", server.url())
    );
    assert_eq!(json["data"]["seo"]["title"], "Qoyy Global - Marketing Made Simple");

    mock.assert();
    Ok(())
}

#[test]
fn fetch_raw_prints_unwrapped_payload() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let home = tempdir()?;

    let _mock = server
        .mock("GET", "/api/about")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(ok_body(r#"{"id": 1, "attributes": {"heading": "WHO WE ARE"}}"#))
        .create();

    let assert = sitecms(&server.url(), home.path())
        .args(["fetch", "about", "--raw", "--format", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout)?;
    assert_eq!(json["data"], serde_json::json!({"heading": "WHO WE ARE"}));

    Ok(())
}

#[test]
fn fetch_sends_bearer_token_and_json_content_type() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let home = tempdir()?;

    let mock = server
        .mock("GET", "/api/home")
        .match_query(Matcher::Any)
        .match_header("authorization", "Bearer tok")
        .match_header("content-type", "application/json")
        .with_status(200)
        .with_body(ok_body("{}"))
        .expect(1)
        .create();

    sitecms(&server.url(), home.path())
        .args(["fetch", "home", "--raw", "--format", "json"])
        .env("STRAPI_API_TOKEN", "tok")
        .assert()
        .success();

    mock.assert();
    Ok(())
}

#[test]
fn fetch_without_token_omits_authorization() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let home = tempdir()?;

    let mock = server
        .mock("GET", "/api/home")
        .match_query(Matcher::Any)
        .match_header("authorization", Matcher::Missing)
        .match_header("content-type", "application/json")
        .with_status(200)
        .with_body(ok_body("{}"))
        .expect(1)
        .create();

    sitecms(&server.url(), home.path())
        .args(["fetch", "home", "--raw", "--format", "json"])
        .assert()
        .success();

    mock.assert();
    Ok(())
}

#[test]
fn disabled_cms_fails_without_network() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let home = tempdir()?;

    let mock = server
        .mock("GET", Matcher::Any)
        .match_query(Matcher::Any)
        .expect(0)
        .create();

    sitecms(&server.url(), home.path())
        .args(["fetch", "info"])
        .env("ENABLE_CMS", "false")
        .assert()
        .failure()
        .stderr(predicate::str::contains("CMS is disabled"));

    mock.assert();
    Ok(())
}

#[test]
fn contact_retries_with_generic_populate_on_validation_error() -> Result<(), Box<dyn std::error::Error>>
{
    let mut server = mockito::Server::new();
    let home = tempdir()?;

    let specific = server
        .mock("GET", "/api/contact")
        .match_query(Matcher::UrlEncoded(
            "populate[seo][populate]".into(),
            "*".into(),
        ))
        .with_status(400)
        .with_body(VALIDATION_ERROR_BODY)
        .expect(1)
        .create();

    let generic = server
        .mock("GET", "/api/contact")
        .match_query(Matcher::UrlEncoded("populate".into(), "*".into()))
        .with_status(200)
        .with_body(ok_body(r#"{"heading": "SAY HELLO", "buttons": {"whatsapp": {"href": "https://wa.me/1"}}}"#))
        .expect(1)
        .create();

    let assert = sitecms(&server.url(), home.path())
        .args(["fetch", "contact", "--format", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout)?;
    assert_eq!(json["data"]["heading"], "SAY HELLO");
    assert_eq!(json["data"]["buttons"]["whatsapp"]["href"], "https://wa.me/1");
    assert_eq!(
        json["data"]["buttons"]["whatsapp"]["label"],
        "CONTACT US VIA WHATSAPP"
    );

    specific.assert();
    generic.assert();
    Ok(())
}

#[test]
fn server_error_is_reported() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let home = tempdir()?;

    let mock = server
        .mock("GET", "/api/service-page-content")
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body(r#"{"data": null, "error": {"status": 500, "name": "InternalServerError", "message": "Internal Server Error"}}"#)
        .expect(1)
        .create();

    sitecms(&server.url(), home.path())
        .args(["fetch", "services"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Failed to fetch content from CMS (service-page-content)",
        ));

    mock.assert();
    Ok(())
}

#[test]
fn site_loads_global_once_and_reports_failed_sections() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let home = tempdir()?;

    let global = server
        .mock("GET", "/api/global")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(ok_body(r#"{"footer": {"companyName": "Qoyy Global Sdn Bhd"}}"#))
        .expect(1)
        .create();

    let mut pages = Vec::new();
    for resource in ["home", "about", "service-page-content", "contact"] {
        pages.push(
            server
                .mock("GET", format!("/api/{}", resource).as_str())
                .match_query(Matcher::Any)
                .with_status(200)
                .with_body(ok_body("{}"))
                .create(),
        );
    }

    let _info = server
        .mock("GET", "/api/info")
        .match_query(Matcher::Any)
        .with_status(404)
        .with_body(r#"{"data": null, "error": {"status": 404, "name": "NotFoundError", "message": "Not Found"}}"#)
        .create();

    let assert = sitecms(&server.url(), home.path())
        .args(["site", "--format", "table"])
        .assert()
        .failure();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    assert!(stdout.contains("Qoyy Global Sdn Bhd"));
    assert!(stdout.contains("error loading content"));
    assert!(stdout.contains("5 cards"));

    let stderr = String::from_utf8_lossy(&assert.get_output().stderr);
    assert!(stderr.contains("1 of 7 site sections failed to load"));

    global.assert();
    Ok(())
}
