//! Tool calls through the protocol handler against mocked upstreams.

use std::time::Duration;

use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use dataportal::Endpoints;
use dataportal_mcp::config::{Config, Service};
use dataportal_mcp::protocol::ProtocolHandler;
use dataportal_mcp::types::*;

// ─────────────────────── helpers ───────────────────────

const TYPKOD_PATH: &str = "/rowstore/dataset/typkod";
const SKATT_PATH: &str = "/rowstore/dataset/skatt";

fn handler(server: &MockServer) -> ProtocolHandler {
    ProtocolHandler::from_config(&Config {
        endpoints: Endpoints {
            riksdagen: server.uri(),
            typkod: format!("{}{TYPKOD_PATH}", server.uri()),
            fastighetsskatt: format!("{}{SKATT_PATH}", server.uri()),
        },
        timeout: Duration::from_secs(5),
        service: Service::All,
    })
}

fn tool_call(id: i64, name: &str, arguments: Value) -> JsonRpcMessage {
    serde_json::from_value(json!({
        "jsonrpc": "2.0",
        "id": id,
        "method": "tools/call",
        "params": { "name": name, "arguments": arguments }
    }))
    .unwrap()
}

async fn call(handler: &ProtocolHandler, name: &str, arguments: Value) -> Value {
    handler
        .handle_message(tool_call(1, name, arguments))
        .await
        .expect("expected response")
}

fn text_of(response: &Value) -> &str {
    response["result"]["content"][0]["text"].as_str().unwrap()
}

fn rowstore(results: Value) -> Value {
    json!({
        "next": null,
        "resultCount": results.as_array().map(|r| r.len()).unwrap_or(0),
        "offset": 0,
        "limit": 10,
        "queryTime": 1,
        "results": results
    })
}

// ─────────────────────── riksdagen ───────────────────────

#[tokio::test]
async fn test_01_list_documents_returns_compact_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/dokumentlista/"))
        .and(query_param("doktyp", "prop"))
        .and(query_param("rm", "2023/24"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "dokumentlista": {
                "@traffar": "1",
                "dokument": [{ "dok_id": "HB03100", "titel": "Budgetpropositionen", "summary": null }]
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let resp = call(
        &handler(&server),
        "riksdagen_list_documents",
        json!({ "doktyp": "prop", "rm": "2023/24" }),
    )
    .await;

    let body: Value = serde_json::from_str(text_of(&resp)).unwrap();
    assert_eq!(body["dokument"][0]["dok_id"], "HB03100");
    assert!(body["dokument"][0].get("summary").is_none());
    assert_ne!(resp["result"]["isError"], true);
}

#[tokio::test]
async fn test_02_no_matches_is_empty_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/dokumentlista/"))
        .and(query_param("avd", "kalender"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let resp = call(&handler(&server), "riksdagen_kalender_list", json!({})).await;
    assert_eq!(text_of(&resp), "");
    assert_ne!(resp["result"]["isError"], true);
}

#[tokio::test]
async fn test_03_fetch_document_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/dokument/HD01FiU1.text"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Finansutskottets betänkande"))
        .expect(1)
        .mount(&server)
        .await;

    let resp = call(
        &handler(&server),
        "riksdagen_fetch_document",
        json!({ "dok_id_or_url": "HD01FiU1" }),
    )
    .await;
    assert_eq!(text_of(&resp), "Finansutskottets betänkande");
}

#[tokio::test]
async fn test_04_upstream_status_carries_url_and_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/dokumentlista/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .expect(1)
        .mount(&server)
        .await;

    let resp = call(&handler(&server), "riksdagen_ledamot_list", json!({ "sok": "Andersson" })).await;

    let error = &resp["error"];
    assert_eq!(error["code"], mcp_error_codes::UPSTREAM_ERROR);
    assert_eq!(error["data"]["status"], 500);
    assert!(error["data"]["url"]
        .as_str()
        .unwrap()
        .starts_with(&server.uri()));
    assert!(resp.get("result").is_none());
}

// ─────────────────────── skatteverket ───────────────────────

#[tokio::test]
async fn test_05_get_typkod() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(TYPKOD_PATH))
        .and(query_param("typkod", "113"))
        .respond_with(ResponseTemplate::new(200).set_body_json(rowstore(json!([
            { "typkod": 113, "beskrivning": "Lantbruksenhet, bebyggd" }
        ]))))
        .expect(1)
        .mount(&server)
        .await;

    let resp = call(
        &handler(&server),
        "skatteverket_get_taxeringsenhet_typkod",
        json!({ "typkod": "113" }),
    )
    .await;

    let body: Value = serde_json::from_str(text_of(&resp)).unwrap();
    assert_eq!(body["typkod"], "113");
    assert_eq!(body["beskrivning"], "Lantbruksenhet, bebyggd");
}

#[tokio::test]
async fn test_06_unknown_typkod_is_empty_text_with_warning() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(TYPKOD_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(rowstore(json!([]))))
        .mount(&server)
        .await;

    let handler = handler(&server);
    let set_level: JsonRpcMessage = serde_json::from_value(json!({
        "jsonrpc": "2.0",
        "id": 0,
        "method": "logging/setLevel",
        "params": { "level": "warning" }
    }))
    .unwrap();
    handler.handle_message(set_level).await;

    let outcome = handler
        .handle(tool_call(1, "skatteverket_get_taxeringsenhet_typkod", json!({ "typkod": "999" })))
        .await;

    let resp = outcome.response.unwrap();
    assert_eq!(text_of(&resp), "");
    assert_eq!(outcome.notifications.len(), 1);
    let params = outcome.notifications[0].params.as_ref().unwrap();
    assert_eq!(params["level"], "warning");
    assert_eq!(params["data"], "Typkod 999 not found");
}

#[tokio::test]
async fn test_07_search_fastighetsskatt_accepts_swedish_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SKATT_PATH))
        .and(query_param("grupperingsvärde", "Stockholm"))
        .and(query_param("inkomstar", "2023"))
        .respond_with(ResponseTemplate::new(200).set_body_json(rowstore(json!([
            { "gruppering": "Län", "grupperingsvärde": "Stockholm", "antal": 1200 }
        ]))))
        .expect(1)
        .mount(&server)
        .await;

    let resp = call(
        &handler(&server),
        "skatteverket_search_fastighetsskatt_avgift",
        json!({ "grupperingsvärde": "Stockholm", "inkomstar": "2023" }),
    )
    .await;

    let body: Value = serde_json::from_str(text_of(&resp)).unwrap();
    assert_eq!(body["results"][0]["antal"], "1200");
}

#[tokio::test]
async fn test_08_invalid_limit_never_reaches_upstream() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(rowstore(json!([]))))
        .expect(0)
        .mount(&server)
        .await;

    let resp = call(
        &handler(&server),
        "skatteverket_list_taxeringsenhet_typkoder",
        json!({ "limit": 0 }),
    )
    .await;
    assert_eq!(resp["error"]["code"], error_codes::INVALID_PARAMS);
}

#[tokio::test]
async fn test_09_status_from_any_endpoint_is_upstream_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .expect(4)
        .mount(&server)
        .await;

    let handler = handler(&server);
    let calls = [
        ("riksdagen_fetch_document", json!({ "dok_id_or_url": "HD096" })),
        ("riksdagen_kalender_fetch", json!({ "dok_id_or_url": "HD096", "fmt": "json" })),
        ("skatteverket_get_taxeringsenhet_typkod", json!({ "typkod": "220" })),
        ("skatteverket_list_fastighetsskatt_avgift", json!({})),
    ];

    for (name, arguments) in calls {
        let resp = call(&handler, name, arguments).await;
        assert_eq!(resp["error"]["code"], mcp_error_codes::UPSTREAM_ERROR, "{name}");
        assert_eq!(resp["error"]["data"]["status"], 404, "{name}");
        assert!(resp.get("result").is_none(), "{name}");
    }
}
