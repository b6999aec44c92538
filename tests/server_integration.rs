//! Integration tests for the HTTP tool server.

use std::sync::Arc;
use std::time::Duration;

use iac_knowledge::bootstrap::build_registry;
use iac_knowledge::config::{DocumentConfig, KnowledgeConfig};
use iac_knowledge::server::KnowledgeServer;
use iac_knowledge::tools::{ErrorBody, RetrievalTool, RetrieveResponse, TopicsResponse};
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;

/// Start a server on an ephemeral port, returning its base URL and shutdown token.
async fn start_server(config: &KnowledgeConfig) -> (String, CancellationToken) {
    let registry = build_registry(config).await.expect("Failed to build registry");
    let tool = RetrievalTool::new(Arc::new(registry));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to get address");

    let cancel = CancellationToken::new();
    let server = KnowledgeServer::new(tool).with_cancellation(cancel.clone());
    tokio::spawn(async move { server.serve(listener).await });

    (format!("http://{addr}"), cancel)
}

#[tokio::test]
async fn test_get_knowledge_for_builtin_topic() {
    let (base, cancel) = start_server(&KnowledgeConfig::default()).await;

    let response = reqwest::get(format!("{base}/api/knowledge/cdk-best-practices"))
        .await
        .expect("Request failed");
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Invalid JSON");
    assert_eq!(body["topic"], "cdk-best-practices");
    assert_eq!(body["results"][0]["rank"], 1);
    assert_eq!(body["results"][0]["title"], "AWS CDK Best Practices");
    assert_eq!(body["results"][0]["url"], "");
    assert!(body["results"][0]["context"]
        .as_str()
        .unwrap()
        .contains("AWS CDK Best Practices for AI Agents"));

    cancel.cancel();
}

#[tokio::test]
async fn test_unknown_topic_returns_not_found_with_topics() {
    let (base, cancel) = start_server(&KnowledgeConfig::default()).await;

    let response = reqwest::get(format!("{base}/api/knowledge/nonexistent-topic"))
        .await
        .expect("Request failed");
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);

    let body: ErrorBody = response.json().await.expect("Invalid JSON");
    assert_eq!(body.error, "unknown_topic");
    assert_eq!(body.available_topics, vec!["cdk-best-practices"]);

    cancel.cancel();
}

#[tokio::test]
async fn test_post_tool_call_with_query() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("team.md");
    std::fs::write(
        &path,
        "## Naming\n\nLet CDK generate names.\n\n## Removal\n\nSet removal policies.\n",
    )
    .unwrap();

    let config = KnowledgeConfig {
        documents: vec![DocumentConfig {
            topic: "team".to_string(),
            path,
            title: None,
            url: "https://wiki.example.com/team".to_string(),
            description: "Team conventions".to_string(),
        }],
        ..KnowledgeConfig::default()
    };
    let (base, cancel) = start_server(&config).await;
    let client = reqwest::Client::new();

    let response: RetrieveResponse = client
        .post(format!("{base}/api/tools/get_knowledge"))
        .json(&serde_json::json!({ "topic": "team", "query": "removal" }))
        .send()
        .await
        .expect("Request failed")
        .json()
        .await
        .expect("Invalid JSON");

    assert_eq!(response.results.len(), 1);
    assert_eq!(response.results[0].title(), "Removal");
    assert_eq!(response.results[0].rank(), 2);
    assert_eq!(response.results[0].url(), "https://wiki.example.com/team");

    let topics: TopicsResponse = client
        .get(format!("{base}/api/topics"))
        .send()
        .await
        .expect("Request failed")
        .json()
        .await
        .expect("Invalid JSON");
    let names: Vec<_> = topics.topics.iter().map(|t| t.topic.as_str()).collect();
    assert_eq!(names, vec!["cdk-best-practices", "team"]);

    cancel.cancel();
}

#[tokio::test]
async fn test_blank_topic_is_bad_request() {
    let (base, cancel) = start_server(&KnowledgeConfig::default()).await;

    let response = reqwest::Client::new()
        .post(format!("{base}/api/tools/get_knowledge"))
        .json(&serde_json::json!({ "topic": "   " }))
        .send()
        .await
        .expect("Request failed");
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);

    cancel.cancel();
}

#[tokio::test]
async fn test_tools_listing() {
    let (base, cancel) = start_server(&KnowledgeConfig::default()).await;

    let tools: serde_json::Value = reqwest::get(format!("{base}/api/tools"))
        .await
        .expect("Request failed")
        .json()
        .await
        .expect("Invalid JSON");
    assert_eq!(tools[0]["name"], "get_knowledge");
    assert_eq!(tools[0]["input_schema"]["required"][0], "topic");

    cancel.cancel();
}

/// Test graceful shutdown via `CancellationToken`.
#[tokio::test]
async fn test_server_shutdown() {
    let registry = build_registry(&KnowledgeConfig::default()).await.unwrap();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to get address");

    let server = KnowledgeServer::new(RetrievalTool::new(Arc::new(registry)));
    let cancel = server.cancellation_token();
    let server_handle = tokio::spawn(async move { server.serve(listener).await });

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(
        tokio::net::TcpStream::connect(addr).await.is_ok(),
        "Server should be accepting connections"
    );

    cancel.cancel();

    let shutdown_result = timeout(Duration::from_secs(2), server_handle).await;
    assert!(
        shutdown_result.is_ok(),
        "Server should shut down within timeout"
    );
}
