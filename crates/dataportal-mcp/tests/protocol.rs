//! Protocol-level integration tests for dataportal-mcp.
//!
//! None of these reach an upstream: every endpoint points at a closed port.

use serde_json::{json, Value};

use dataportal::Endpoints;
use dataportal_mcp::config::{Config, Service};
use dataportal_mcp::protocol::ProtocolHandler;
use dataportal_mcp::transport::framing;
use dataportal_mcp::types::*;

// ─────────────────────── helpers ───────────────────────

fn offline_config(service: Service) -> Config {
    Config {
        endpoints: Endpoints {
            riksdagen: "http://127.0.0.1:9".into(),
            typkod: "http://127.0.0.1:9/typkod".into(),
            fastighetsskatt: "http://127.0.0.1:9/skatt".into(),
        },
        timeout: std::time::Duration::from_secs(1),
        service,
    }
}

fn handler(service: Service) -> ProtocolHandler {
    ProtocolHandler::from_config(&offline_config(service))
}

fn mcp_request(id: i64, method: &str, params: Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "method": method,
        "params": params
    })
}

fn init_request() -> Value {
    mcp_request(
        0,
        "initialize",
        json!({
            "protocolVersion": "2024-11-05",
            "capabilities": {},
            "clientInfo": { "name": "test-client", "version": "1.0" }
        }),
    )
}

async fn send(handler: &ProtocolHandler, msg: Value) -> Option<Value> {
    let parsed: JsonRpcMessage = serde_json::from_value(msg).unwrap();
    handler.handle_message(parsed).await
}

async fn send_unwrap(handler: &ProtocolHandler, msg: Value) -> Value {
    send(handler, msg).await.expect("expected response")
}

fn tool_names(response: &Value) -> Vec<String> {
    response["result"]["tools"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap().to_string())
        .collect()
}

// ─────────────────────── handshake ───────────────────────

#[tokio::test]
async fn test_01_initialize_reports_capabilities() {
    let handler = handler(Service::All);
    let resp = send_unwrap(&handler, init_request()).await;

    let result = &resp["result"];
    assert_eq!(result["protocolVersion"], MCP_VERSION);
    assert_eq!(result["serverInfo"]["name"], "dataportal-mcp");
    assert!(result["capabilities"]["tools"].is_object());
    assert!(result["capabilities"]["logging"].is_object());
    assert!(result["capabilities"]["resources"].is_object());
    assert!(result["capabilities"].get("prompts").is_none());
}

#[tokio::test]
async fn test_02_initialize_without_params_is_invalid() {
    let handler = handler(Service::All);
    let resp = send_unwrap(&handler, json!({ "jsonrpc": "2.0", "id": 1, "method": "initialize" })).await;
    assert_eq!(resp["error"]["code"], error_codes::INVALID_PARAMS);
}

#[tokio::test]
async fn test_03_initialized_notification_has_no_response() {
    let handler = handler(Service::All);
    send_unwrap(&handler, init_request()).await;
    let resp = send(
        &handler,
        json!({ "jsonrpc": "2.0", "method": "notifications/initialized" }),
    )
    .await;
    assert!(resp.is_none());
}

#[tokio::test]
async fn test_04_ping_and_shutdown_return_empty_objects() {
    let handler = handler(Service::All);
    let ping = send_unwrap(&handler, mcp_request(1, "ping", json!({}))).await;
    assert_eq!(ping["result"], json!({}));
    let shutdown = send_unwrap(&handler, mcp_request(2, "shutdown", json!({}))).await;
    assert_eq!(shutdown["result"], json!({}));
}

#[tokio::test]
async fn test_05_unknown_method() {
    let handler = handler(Service::All);
    let resp = send_unwrap(&handler, mcp_request(1, "prompts/list", json!({}))).await;
    assert_eq!(resp["error"]["code"], error_codes::METHOD_NOT_FOUND);
    assert_eq!(resp["id"], 1);
}

#[tokio::test]
async fn test_06_wrong_jsonrpc_version() {
    let handler = handler(Service::All);
    let resp = send_unwrap(
        &handler,
        json!({ "jsonrpc": "1.0", "id": 5, "method": "ping" }),
    )
    .await;
    assert_eq!(resp["error"]["code"], error_codes::INVALID_REQUEST);
}

// ─────────────────────── tools/list ───────────────────────

#[tokio::test]
async fn test_07_all_services_list_ten_tools() {
    let handler = handler(Service::All);
    let resp = send_unwrap(&handler, mcp_request(1, "tools/list", json!({}))).await;
    let names = tool_names(&resp);
    assert_eq!(names.len(), 10);
    assert!(names.contains(&"riksdagen_kalender_fetch".to_string()));
    assert!(names.contains(&"skatteverket_search_fastighetsskatt_avgift".to_string()));
}

#[tokio::test]
async fn test_08_single_service_hides_other_group() {
    let handler = handler(Service::Fastigheter);
    let resp = send_unwrap(&handler, mcp_request(1, "tools/list", json!({}))).await;
    assert!(tool_names(&resp).iter().all(|n| n.starts_with("skatteverket_")));

    let call = send_unwrap(
        &handler,
        mcp_request(
            2,
            "tools/call",
            json!({ "name": "riksdagen_list_documents", "arguments": {} }),
        ),
    )
    .await;
    assert_eq!(call["error"]["code"], mcp_error_codes::TOOL_NOT_FOUND);
}

#[tokio::test]
async fn test_09_unknown_tool() {
    let handler = handler(Service::All);
    let resp = send_unwrap(
        &handler,
        mcp_request(1, "tools/call", json!({ "name": "riksdagen_votering_list" })),
    )
    .await;
    assert_eq!(resp["error"]["code"], mcp_error_codes::TOOL_NOT_FOUND);
}

#[tokio::test]
async fn test_10_bad_arguments_are_invalid_params() {
    let handler = handler(Service::All);

    let wrong_fmt = send_unwrap(
        &handler,
        mcp_request(
            1,
            "tools/call",
            json!({ "name": "riksdagen_fetch_document", "arguments": { "dok_id_or_url": "HD096", "fmt": "pdf" } }),
        ),
    )
    .await;
    assert_eq!(wrong_fmt["error"]["code"], error_codes::INVALID_PARAMS);

    let missing = send_unwrap(
        &handler,
        mcp_request(
            2,
            "tools/call",
            json!({ "name": "skatteverket_get_taxeringsenhet_typkod", "arguments": {} }),
        ),
    )
    .await;
    assert_eq!(missing["error"]["code"], error_codes::INVALID_PARAMS);

    let too_many = send_unwrap(
        &handler,
        mcp_request(
            3,
            "tools/call",
            json!({ "name": "skatteverket_list_fastighetsskatt_avgift", "arguments": { "limit": 501 } }),
        ),
    )
    .await;
    assert_eq!(too_many["error"]["code"], error_codes::INVALID_PARAMS);
}

#[tokio::test]
async fn test_11_empty_reference_is_empty_error_result() {
    let handler = handler(Service::Riksdagen);
    let resp = send_unwrap(
        &handler,
        mcp_request(
            1,
            "tools/call",
            json!({ "name": "riksdagen_kalender_fetch", "arguments": { "dok_id_or_url": "   " } }),
        ),
    )
    .await;

    let result = &resp["result"];
    assert_eq!(result["isError"], true);
    assert_eq!(result["content"][0]["text"], "");
}

#[tokio::test]
async fn test_12_unreachable_upstream_is_upstream_error() {
    let handler = handler(Service::All);
    let resp = send_unwrap(
        &handler,
        mcp_request(
            1,
            "tools/call",
            json!({ "name": "skatteverket_list_taxeringsenhet_typkoder", "arguments": {} }),
        ),
    )
    .await;
    assert_eq!(resp["error"]["code"], mcp_error_codes::UPSTREAM_ERROR);
}

// ─────────────────────── logging ───────────────────────

#[tokio::test]
async fn test_13_set_level_enables_log_notifications() {
    let handler = handler(Service::Riksdagen);
    let call = || {
        serde_json::from_value::<JsonRpcMessage>(mcp_request(
            9,
            "tools/call",
            json!({ "name": "riksdagen_fetch_document", "arguments": { "dok_id_or_url": "" } }),
        ))
        .unwrap()
    };

    let before = handler.handle(call()).await;
    assert!(before.notifications.is_empty());

    let set = send_unwrap(
        &handler,
        mcp_request(1, "logging/setLevel", json!({ "level": "error" })),
    )
    .await;
    assert_eq!(set["result"], json!({}));

    let after = handler.handle(call()).await;
    assert_eq!(after.notifications.len(), 1);
    let params = after.notifications[0].params.as_ref().unwrap();
    assert_eq!(after.notifications[0].method, LOG_MESSAGE_METHOD);
    assert_eq!(params["level"], "error");
    assert!(params["data"].as_str().unwrap().contains("Invalid document reference"));
    assert!(after.response.is_some());
}

#[tokio::test]
async fn test_14_set_level_rejects_unknown_level() {
    let handler = handler(Service::All);
    let resp = send_unwrap(
        &handler,
        mcp_request(1, "logging/setLevel", json!({ "level": "verbose" })),
    )
    .await;
    assert_eq!(resp["error"]["code"], error_codes::INVALID_PARAMS);
}

// ─────────────────────── resources ───────────────────────

#[tokio::test]
async fn test_15_resources_follow_service() {
    let handler = handler(Service::Riksdagen);
    let resp = send_unwrap(&handler, mcp_request(1, "resources/list", json!({}))).await;
    let uris: Vec<&str> = resp["result"]["resources"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["uri"].as_str().unwrap())
        .collect();

    assert!(uris.contains(&"dataportal://datasets"));
    assert!(uris.contains(&"dataportal://ledamot/dataportal"));
    assert!(!uris.iter().any(|u| u.starts_with("dataportal://typkod")));
}

#[tokio::test]
async fn test_16_read_resource_and_templates() {
    let handler = handler(Service::All);
    let read = send_unwrap(
        &handler,
        mcp_request(1, "resources/read", json!({ "uri": "dataportal://fastighetsskatt/api" })),
    )
    .await;
    assert_eq!(
        read["result"]["contents"][0]["text"],
        dataportal::sources::FASTIGHETSSKATT_DATASET_URL
    );

    let missing = send_unwrap(
        &handler,
        mcp_request(2, "resources/read", json!({ "uri": "dataportal://okand/api" })),
    )
    .await;
    assert_eq!(missing["error"]["code"], mcp_error_codes::RESOURCE_NOT_FOUND);

    let templates = send_unwrap(&handler, mcp_request(3, "resources/templates/list", json!({}))).await;
    assert_eq!(
        templates["result"]["resourceTemplates"][0]["uriTemplate"],
        "dataportal://{dataset}/{link}"
    );
}

// ─────────────────────── framing ───────────────────────

#[tokio::test]
async fn test_17_framed_round_trip_through_handler() {
    let handler = handler(Service::All);
    let line = framing::frame_message(&mcp_request(4, "ping", json!({}))).unwrap();
    let msg = framing::parse_message(&line).unwrap();
    let resp = handler.handle_message(msg).await.unwrap();
    assert_eq!(resp["id"], 4);
}
