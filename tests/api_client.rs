//! Integration tests for `ApiClient` against a transport double.
//!
//! These tests verify response classification and payload extraction for both
//! operations, and the query each operation sends.

mod helpers;

use chrono::NaiveDate;
use helpers::{client_with, MockTransport};
use whois_history::{
    Contact, SearchOptions, TransportErrorKind, WhoisHistoryError, WhoisRecord,
};

const SUCCESS_PAYLOAD: &str = r#"{"records":[{"domainName":"domain.test"}], "recordsCount":1}"#;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
async fn test_purchase_returns_records() {
    let transport = MockTransport::with_body(SUCCESS_PAYLOAD);
    let client = client_with(&transport);

    let records = client
        .purchase("domain.test", &SearchOptions::default())
        .await
        .unwrap();

    let valid = vec![WhoisRecord {
        domain_name: "domain.test".to_string(),
        ..Default::default()
    }];
    assert_eq!(records, valid);
}

#[tokio::test]
async fn test_preview_returns_count() {
    let transport = MockTransport::with_body(SUCCESS_PAYLOAD);
    let client = client_with(&transport);

    let count = client
        .preview("domain.test", &SearchOptions::default())
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn test_error_request() {
    let transport = MockTransport::with_body(r#"{"code":999, "messages":"test error message"}"#);
    let client = client_with(&transport);

    let err = client
        .purchase("domain.test", &SearchOptions::default())
        .await
        .unwrap_err();
    match &err {
        WhoisHistoryError::Remote(message) => assert_eq!(message.code, 999),
        other => panic!("expected Remote, got {:?}", other),
    }
    assert_eq!(err.to_string(), "[999] test error message");

    let err = client
        .preview("domain.test", &SearchOptions::default())
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "[999] test error message");
}

#[tokio::test]
async fn test_get_empty_response() {
    let client = client_with(&MockTransport::with_body(""));
    let result = client.purchase("domain.test", &SearchOptions::default()).await;
    assert!(matches!(result, Err(WhoisHistoryError::EmptyResponse)));
}

#[tokio::test]
async fn test_empty_response_ignores_status() {
    for status in [200, 204, 500] {
        let client = client_with(&MockTransport::with_status(status, ""));
        let result = client.preview("domain.test", &SearchOptions::default()).await;
        assert!(
            matches!(result, Err(WhoisHistoryError::EmptyResponse)),
            "status {} should still be classified by body",
            status
        );
    }
}

#[tokio::test]
async fn test_success_body_with_error_status_is_still_success() {
    let client = client_with(&MockTransport::with_status(500, r#"{"recordsCount":4}"#));
    let count = client
        .preview("domain.test", &SearchOptions::default())
        .await
        .unwrap();
    assert_eq!(count, 4);
}

#[tokio::test]
async fn test_get_unparsable_response() {
    let client = client_with(&MockTransport::with_body("not a json"));
    let result = client.purchase("domain.test", &SearchOptions::default()).await;
    assert!(matches!(result, Err(WhoisHistoryError::UnparsableResponse(_))));
}

#[tokio::test]
async fn test_missing_payload_is_empty_result() {
    let client = client_with(&MockTransport::with_body(r#"{"recordsCount":1}"#));
    let result = client.purchase("domain.test", &SearchOptions::default()).await;
    assert!(matches!(
        result,
        Err(WhoisHistoryError::EmptyResult { key: "records" })
    ));

    let client = client_with(&MockTransport::with_body(r#"{"records":[]}"#));
    let result = client.preview("domain.test", &SearchOptions::default()).await;
    assert!(matches!(
        result,
        Err(WhoisHistoryError::EmptyResult {
            key: "recordsCount"
        })
    ));
}

#[tokio::test]
async fn test_purchase_with_no_records() {
    let client = client_with(&MockTransport::with_body(r#"{"records":[],"recordsCount":0}"#));
    let records = client
        .purchase("domain.test", &SearchOptions::default())
        .await
        .unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn test_purchase_preserves_order_and_nested_objects() {
    let body = r#"{
        "records": [
            {
                "domainName": "domain.test",
                "createdDateISO8601": "2001-02-03T04:05:06+00:00",
                "registrarName": "First Registrar",
                "status": "clientHold",
                "registrantContact": {"name": "Jane Doe", "country": "NZ"}
            },
            {
                "domainName": "domain.test",
                "registrarName": "Second Registrar",
                "nameServers": ["ns1.domain.test", "ns2.domain.test"]
            }
        ],
        "recordsCount": 2
    }"#;
    let client = client_with(&MockTransport::with_body(body));

    let records = client
        .purchase("domain.test", &SearchOptions::default())
        .await
        .unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].registrar_name, "First Registrar");
    assert!(records[0].status.is_empty());
    assert_eq!(
        records[0].registrant_contact,
        Some(Contact {
            name: "Jane Doe".to_string(),
            country: "NZ".to_string(),
            ..Default::default()
        })
    );
    assert!(records[0].administrative_contact.is_none());
    assert_eq!(
        records[0]
            .created_date_iso8601
            .map(|dt| dt.to_rfc3339()),
        Some("2001-02-03T04:05:06+00:00".to_string())
    );

    assert_eq!(records[1].registrar_name, "Second Registrar");
    assert_eq!(
        records[1].name_servers,
        vec!["ns1.domain.test", "ns2.domain.test"]
    );
    assert!(records[1].registrant_contact.is_none());
}

#[tokio::test]
async fn test_malformed_record_field_propagates() {
    let client = client_with(&MockTransport::with_body(
        r#"{"records":[{"domainName":"domain.test","expiresDateISO8601":"next year"}]}"#,
    ));
    let result = client.purchase("domain.test", &SearchOptions::default()).await;
    assert!(matches!(result, Err(WhoisHistoryError::Field(_))));
}

#[tokio::test]
async fn test_transport_failure_propagates() {
    let client = client_with(&MockTransport::failing("connection refused"));
    match client.preview("domain.test", &SearchOptions::default()).await {
        Err(WhoisHistoryError::Transport(e)) => {
            assert_eq!(e.kind, TransportErrorKind::Connect);
            assert_eq!(e.message, "connection refused");
        }
        other => panic!("expected Transport error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_purchase_request_parameters() {
    let transport = MockTransport::with_body(SUCCESS_PAYLOAD);
    let client = client_with(&transport);

    client
        .purchase("domain.test", &SearchOptions::default())
        .await
        .unwrap();

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.url, "https://whois-history.whoisxmlapi.com/api/v1");
    assert_eq!(request.method, reqwest::Method::GET);
    assert_eq!(request.query_param("domainName"), Some("domain.test"));
    assert_eq!(request.query_param("apiKey"), Some("test"));
    assert_eq!(request.query_param("outputFormat"), Some("JSON"));
    assert_eq!(request.query_param("mode"), Some("purchase"));
    assert_eq!(request.query.len(), 4);
}

#[tokio::test]
async fn test_preview_request_sends_date_filters() {
    let transport = MockTransport::with_body(SUCCESS_PAYLOAD);
    let client = client_with(&transport);
    let options = SearchOptions::new()
        .since_date(date(2020, 1, 1))
        .created_date_from(date(2000, 2, 3))
        .updated_date_to(date(2021, 11, 30));

    client.preview("domain.test", &options).await.unwrap();

    let request = &transport.requests()[0];
    assert_eq!(request.query_param("mode"), Some("preview"));
    assert_eq!(request.query_param("sinceDate"), Some("2020-01-01"));
    assert_eq!(request.query_param("createdDateFrom"), Some("2000-02-03"));
    assert_eq!(request.query_param("updatedDateTo"), Some("2021-11-30"));
    assert_eq!(request.query_param("createdDateTo"), None);
    assert_eq!(request.query.len(), 7);
}

#[tokio::test]
async fn test_set_transport_replaces_double() {
    let first = MockTransport::with_body("");
    let second = MockTransport::with_body(r#"{"recordsCount":9}"#);
    let mut client = client_with(&first);

    client.set_transport(second.clone());
    let count = client
        .preview("domain.test", &SearchOptions::default())
        .await
        .unwrap();

    assert_eq!(count, 9);
    assert!(first.requests().is_empty());
    assert_eq!(second.requests().len(), 1);
}

#[tokio::test]
async fn test_one_request_per_operation() {
    let transport = MockTransport::with_body(SUCCESS_PAYLOAD);
    let client = client_with(&transport);

    client.preview("domain.test", &SearchOptions::default()).await.unwrap();
    client.purchase("domain.test", &SearchOptions::default()).await.unwrap();

    let modes: Vec<String> = transport
        .requests()
        .iter()
        .map(|r| r.query_param("mode").unwrap_or_default().to_string())
        .collect();
    assert_eq!(modes, vec!["preview", "purchase"]);
}
