//! End-to-end tests for the scoring command.
//!
//! The Hugging Face Hub and the GitHub API are both served by a local `wiremock`
//! server; a temporary configuration file points the tool at it.

use chrono::{TimeDelta, Utc};
use serde_json::{Value, json};
use std::fs;
use std::path::{Path, PathBuf};
use trustcard::Host;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Test host that captures output to in-memory buffers.
#[derive(Default)]
struct TestHost {
    output_buf: Vec<u8>,
    error_buf: Vec<u8>,
    exit_code: Option<i32>,
}

impl TestHost {
    fn output_lines(&self) -> Vec<Value> {
        String::from_utf8_lossy(&self.output_buf)
            .lines()
            .map(|line| serde_json::from_str(line).expect("each output line should be JSON"))
            .collect()
    }
}

impl Host for TestHost {
    fn output(&mut self) -> impl std::io::Write {
        &mut self.output_buf
    }

    fn error(&mut self) -> impl std::io::Write {
        &mut self.error_buf
    }

    fn exit(&mut self, code: i32) {
        self.exit_code = Some(code);
    }
}

const SCORECARD_FIELDS: &[&str] = &[
    "name",
    "category",
    "net_score",
    "net_score_latency",
    "ramp_up_time",
    "ramp_up_time_latency",
    "bus_factor",
    "bus_factor_latency",
    "performance_claims",
    "performance_claims_latency",
    "license",
    "license_latency",
    "size_score",
    "size_score_latency",
    "dataset_and_code_score",
    "dataset_and_code_score_latency",
    "dataset_quality",
    "dataset_quality_latency",
    "code_quality",
    "code_quality_latency",
];

async fn mount_json(server: &MockServer, route: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

async fn mount_text(server: &MockServer, route: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

async fn mock_hub() -> MockServer {
    let server = MockServer::start().await;

    mount_json(
        &server,
        "/api/models/google-bert/bert-base-uncased",
        json!({
            "cardData": {"license": "apache-2.0"},
            "siblings": [
                {"rfilename": "config.json", "size": 570},
                {"rfilename": "model.safetensors", "size": 440_449_768}
            ],
            "downloads": 50_000_000,
            "lastModified": "2024-02-19T11:06:12.000Z"
        }),
    )
    .await;

    mount_json(&server, "/api/datasets/bookcorpus/bookcorpus", json!({"downloads": 150_000})).await;
    mount_text(&server, "/datasets/bookcorpus/bookcorpus/raw/main/README.md", "# BookCorpus\nA train split of novels.").await;

    mount_json(
        &server,
        "/repos/google-research/bert",
        json!({
            "stargazers_count": 38_000,
            "forks_count": 9_600,
            "pushed_at": (Utc::now() - TimeDelta::days(10)).to_rfc3339()
        }),
    )
    .await;

    let contributors: Vec<Value> = (0..12).map(|i| json!({"login": format!("dev{i}")})).collect();
    mount_json(&server, "/repos/google-research/bert/contributors", Value::Array(contributors)).await;

    let readme = format!(
        "# BERT\n\n## Usage\n{}\n\nWe report accuracy on GLUE.\n\n{}",
        vec!["step"; 60].join(" "),
        vec!["details"; 1700].join(" ")
    );
    mount_text(&server, "/repos/google-research/bert/readme", &readme).await;

    // The whisper model is unknown to this hub
    Mock::given(method("GET"))
        .and(path("/api/models/openai/whisper-tiny"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    server
}

fn write_file(dir: &Path, name: &str, text: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, text).expect("writing test file");
    path
}

fn write_config(dir: &Path, server: &MockServer) -> PathBuf {
    write_file(
        dir,
        "trustcard.toml",
        &format!(
            "request_timeout_secs = 5\nmax_concurrent_artifacts = 2\nhuggingface_url = \"{uri}\"\ngithub_api_url = \"{uri}\"\n",
            uri = server.uri()
        ),
    )
}

async fn run_tool(host: &mut TestHost, config: &Path, url_file: &Path) -> trustcard::Result<()> {
    trustcard::run(host, [
        "trustcard".into(),
        "--config".into(),
        config.as_os_str().to_owned(),
        url_file.as_os_str().to_owned(),
    ])
    .await
}

fn score(card: &Value, key: &str) -> f64 {
    card[key].as_f64().unwrap_or_else(|| panic!("{key} should be a number in {card}"))
}

#[tokio::test]
async fn test_scores_every_line_in_order() {
    let server = mock_hub().await;
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), &server);
    let urls = write_file(
        dir.path(),
        "urls.txt",
        "https://github.com/google-research/bert, https://huggingface.co/datasets/bookcorpus/bookcorpus, https://huggingface.co/google-bert/bert-base-uncased\n\
         \n\
         ,,https://huggingface.co/openai/whisper-tiny\n",
    );

    let mut host = TestHost::default();
    run_tool(&mut host, &config, &urls).await.unwrap();

    assert_eq!(host.exit_code, None);
    let cards = host.output_lines();
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0]["name"], "bert-base-uncased");
    assert_eq!(cards[1]["name"], "whisper-tiny");

    for card in &cards {
        let object = card.as_object().unwrap();
        let keys: Vec<_> = object.keys().map(String::as_str).collect();
        for field in SCORECARD_FIELDS {
            assert!(keys.contains(field), "missing {field} in {card}");
        }
        assert_eq!(card["category"], "MODEL");
    }
}

#[tokio::test]
async fn test_fully_documented_artifact() {
    let server = mock_hub().await;
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), &server);
    let urls = write_file(
        dir.path(),
        "urls.txt",
        "https://github.com/google-research/bert, https://huggingface.co/datasets/bookcorpus/bookcorpus, https://huggingface.co/google-bert/bert-base-uncased\n",
    );

    let mut host = TestHost::default();
    run_tool(&mut host, &config, &urls).await.unwrap();

    let cards = host.output_lines();
    let card = &cards[0];

    assert!((score(card, "license") - 1.0).abs() < f64::EPSILON);
    assert!((score(card, "bus_factor") - 1.0).abs() < f64::EPSILON);
    assert!((score(card, "performance_claims") - 1.0).abs() < f64::EPSILON);
    assert!((score(card, "dataset_and_code_score") - 1.0).abs() < f64::EPSILON);
    assert!((score(card, "dataset_quality") - 0.7).abs() < 1e-9);
    assert!((score(card, "code_quality") - 1.0).abs() < f64::EPSILON);
    assert!((score(card, "ramp_up_time") - 0.13).abs() < 1e-9);

    let size = card["size_score"].as_object().unwrap();
    assert!((size["raspberry_pi"].as_f64().unwrap() - 0.1796).abs() < 1e-4);
    assert!((size["aws_server"].as_f64().unwrap() - 0.9727).abs() < 1e-4);

    let net = score(card, "net_score");
    assert!(net > 0.5 && net <= 1.0, "{net}");
}

#[tokio::test]
async fn test_unknown_model_scores_zero_where_data_is_missing() {
    let server = mock_hub().await;
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), &server);
    let urls = write_file(dir.path(), "urls.txt", ",,https://huggingface.co/openai/whisper-tiny\n");

    let mut host = TestHost::default();
    run_tool(&mut host, &config, &urls).await.unwrap();

    let cards = host.output_lines();
    let card = &cards[0];
    assert!(score(card, "license").abs() < f64::EPSILON);
    assert!(score(card, "dataset_and_code_score").abs() < f64::EPSILON);
    assert!(score(card, "net_score").abs() < f64::EPSILON);
    for device in ["raspberry_pi", "jetson_nano", "desktop_pc", "aws_server"] {
        assert!(card["size_score"][device].as_f64().unwrap().abs() < f64::EPSILON);
    }
}

#[tokio::test]
async fn test_malformed_line_fails_without_output() {
    let server = mock_hub().await;
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), &server);
    let urls = write_file(
        dir.path(),
        "urls.txt",
        ",,https://huggingface.co/openai/whisper-tiny\nhttps://github.com/google-research/bert,,\n",
    );

    let mut host = TestHost::default();
    let err = run_tool(&mut host, &config, &urls).await.unwrap_err();

    assert!(err.to_string().contains("line 2"), "{err}");
    assert!(host.output_buf.is_empty());
}

#[tokio::test]
async fn test_invalid_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_file(dir.path(), "bad.toml", "max_concurrent_artifacts = 0\n");
    let urls = write_file(dir.path(), "urls.txt", ",,https://huggingface.co/gpt2\n");

    let mut host = TestHost::default();
    let _ = run_tool(&mut host, &config, &urls).await.unwrap_err();
    assert!(host.output_buf.is_empty());
}

#[tokio::test]
async fn test_missing_arguments_exit_with_usage_error() {
    let mut host = TestHost::default();
    trustcard::run(&mut host, ["trustcard"]).await.unwrap();

    assert_eq!(host.exit_code, Some(2));
    assert!(!host.error_buf.is_empty());
    assert!(host.output_buf.is_empty());
}
