//! Integration tests for `licache write`
//!
//! - One argument writes ./LICENSE, two arguments write the given path
//! - No arguments writes the configured favorite
//! - Missing favorite exits with code 1, unknown license with code 2

mod common;

use common::{mount_details, stderr, TestEnv, MIT_TEXT};
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_write_default_path() {
    let server = MockServer::start().await;
    mount_details(&server, "MIT", MIT_TEXT, 1).await;
    let env = TestEnv::new();
    env.use_server(&server, "");

    let output = env.run(&["write", "MIT"]).await;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let written = std::fs::read_to_string(env.work_dir().join("LICENSE")).unwrap();
    assert_eq!(written, MIT_TEXT);
}

#[tokio::test]
async fn test_write_custom_path_overwrites() {
    let server = MockServer::start().await;
    mount_details(&server, "ISC", "ISC text", 1).await;
    let env = TestEnv::new();
    env.use_server(&server, "");
    std::fs::write(env.work_dir().join("COPYING"), "old").unwrap();

    let output = env.run(&["-q", "write", "ISC", "COPYING"]).await;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(output.stdout.is_empty());
    let written = std::fs::read_to_string(env.work_dir().join("COPYING")).unwrap();
    assert_eq!(written, "ISC text");
}

#[tokio::test]
async fn test_write_uses_favorite() {
    let server = MockServer::start().await;
    mount_details(&server, "Apache-2.0", "Apache text", 1).await;
    let env = TestEnv::new();
    env.use_server(
        &server,
        "favorite = \"apache\"\n[aliases]\napache = \"Apache-2.0\"\n",
    );

    let output = env.run(&["write"]).await;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let written = std::fs::read_to_string(env.work_dir().join("LICENSE")).unwrap();
    assert_eq!(written, "Apache text");
}

#[tokio::test]
async fn test_write_without_favorite_exits_1() {
    let env = TestEnv::new();

    let output = env.run(&["write"]).await;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("favorite license is not set"));
    assert!(!env.work_dir().join("LICENSE").exists());
}

#[tokio::test]
async fn test_write_unknown_license_exits_2() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    let env = TestEnv::new();
    env.use_server(&server, "");

    let output = env.run(&["write", "Nope"]).await;

    assert_eq!(output.status.code(), Some(2));
    assert!(!env.work_dir().join("LICENSE").exists());
}

#[tokio::test]
async fn test_write_reuses_cached_text() {
    let server = MockServer::start().await;
    mount_details(&server, "MIT", MIT_TEXT, 1).await;
    let env = TestEnv::new();
    env.use_server(&server, "");

    assert!(env.run(&["get", "MIT"]).await.status.success());
    let output = env.run(&["write", "MIT"]).await;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(env.work_dir().join("LICENSE").exists());
}
