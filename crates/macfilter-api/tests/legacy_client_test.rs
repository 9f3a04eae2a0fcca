#![allow(clippy::unwrap_used)]
// Integration tests for `LegacyClient` using wiremock.

use std::time::Duration;

use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use macfilter_api::{ControllerPlatform, Error, LegacyClient, TransportConfig};

// ── Helpers ─────────────────────────────────────────────────────────

fn client_for(server: &MockServer, platform: ControllerPlatform) -> LegacyClient {
    let base_url = Url::parse(&server.uri()).unwrap();
    LegacyClient::new(base_url, platform, &TransportConfig::default()).unwrap()
}

async fn setup() -> (MockServer, LegacyClient) {
    let server = MockServer::start().await;
    let client = client_for(&server, ControllerPlatform::ClassicController);
    (server, client)
}

fn ok_envelope(data: serde_json::Value) -> serde_json::Value {
    json!({ "meta": { "rc": "ok" }, "data": data })
}

// ── Authentication tests ────────────────────────────────────────────

#[tokio::test]
async fn test_login_success() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/login"))
        .and(body_json(json!({ "username": "admin", "password": "hunter2" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(json!([]))))
        .expect(1)
        .mount(&server)
        .await;

    let secret: secrecy::SecretString = "hunter2".to_string().into();
    client.login("admin", &secret).await.unwrap();
}

#[tokio::test]
async fn test_login_under_base_path() {
    let server = MockServer::start().await;
    let base_url = Url::parse(&format!("{}/unifi/", server.uri())).unwrap();
    let client = LegacyClient::new(
        base_url,
        ControllerPlatform::ClassicController,
        &TransportConfig::default(),
    )
    .unwrap();

    Mock::given(method("POST"))
        .and(path("/unifi/api/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(json!([]))))
        .expect(1)
        .mount(&server)
        .await;

    let secret: secrecy::SecretString = "hunter2".to_string().into();
    client.login("admin", &secret).await.unwrap();
}

#[tokio::test]
async fn test_login_failure() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(400).set_body_string("api.err.Invalid"))
        .mount(&server)
        .await;

    let secret: secrecy::SecretString = "wrong".to_string().into();
    let result = client.login("admin", &secret).await;

    assert!(
        matches!(result, Err(Error::Authentication { .. })),
        "expected Authentication error, got: {result:?}"
    );
}

#[tokio::test]
async fn test_unifi_os_login_and_csrf_on_logout() {
    let server = MockServer::start().await;
    let client = client_for(&server, ControllerPlatform::UnifiOs);

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).insert_header("X-CSRF-Token", "tok-1"))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/auth/logout"))
        .and(header("X-CSRF-Token", "tok-1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let secret: secrecy::SecretString = "pw".to_string().into();
    client.login("admin", &secret).await.unwrap();
    client.logout().await.unwrap();
}

#[tokio::test]
async fn test_detect_platform_classic() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    let base = Url::parse(&server.uri()).unwrap();
    let platform = LegacyClient::detect_platform(&base, &TransportConfig::default())
        .await
        .unwrap();
    assert_eq!(platform, ControllerPlatform::ClassicController);
}

#[tokio::test]
async fn test_detect_platform_unifi_os() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let base = Url::parse(&server.uri()).unwrap();
    let platform = LegacyClient::detect_platform(&base, &TransportConfig::default())
        .await
        .unwrap();
    assert_eq!(platform, ControllerPlatform::UnifiOs);
}

// ── Endpoint tests ──────────────────────────────────────────────────

#[tokio::test]
async fn test_list_sites() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/self/sites"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(json!([
            { "_id": "s1", "name": "default", "desc": "Default", "role": "admin" },
            { "_id": "s2", "name": "x7k2p9", "desc": "Branch Office" }
        ]))))
        .mount(&server)
        .await;

    let sites = client.list_sites().await.unwrap();

    assert_eq!(sites.len(), 2);
    assert_eq!(sites[1].name, "x7k2p9");
    assert_eq!(sites[1].desc.as_deref(), Some("Branch Office"));
}

#[tokio::test]
async fn test_list_wlans() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/s/x7k2p9/rest/wlanconf"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(json!([
            {
                "_id": "w1",
                "name": "Guest",
                "mac_filter_enabled": true,
                "mac_filter_policy": "allow",
                "mac_filter_list": ["AA:BB:CC:DD:EE:FF", "11-22-33-44-55-66"]
            },
            { "_id": "w2", "name": "IoT", "mac_filter_list": null }
        ]))))
        .mount(&server)
        .await;

    let wlans = client.list_wlans("x7k2p9").await.unwrap();

    assert_eq!(wlans.len(), 2);
    assert_eq!(wlans[0].name, "Guest");
    assert_eq!(wlans[0].mac_filter_policy.as_deref(), Some("allow"));
    assert_eq!(wlans[0].mac_filter_list.as_ref().unwrap().len(), 2);
    assert!(wlans[1].mac_filter_list.is_none());
}

#[tokio::test]
async fn test_list_known_clients() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/s/default/stat/alluser"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(json!([
            { "_id": "u1", "mac": "aa:bb:cc:dd:ee:ff", "name": "Phone", "oui": "Apple" },
            { "_id": "u2", "mac": "11:22:33:44:55:66", "hostname": "printer" }
        ]))))
        .mount(&server)
        .await;

    let users = client.list_known_clients("default").await.unwrap();

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].name.as_deref(), Some("Phone"));
    assert_eq!(users[1].hostname.as_deref(), Some("printer"));
}

#[tokio::test]
async fn test_unifi_os_prefix_on_site_endpoints() {
    let server = MockServer::start().await;
    let client = client_for(&server, ControllerPlatform::UnifiOs);

    Mock::given(method("GET"))
        .and(path("/proxy/network/api/s/default/rest/wlanconf"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(json!([]))))
        .expect(1)
        .mount(&server)
        .await;

    let wlans = client.list_wlans("default").await.unwrap();
    assert!(wlans.is_empty());
}

// ── Error tests ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_session_expired() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let result = client.list_sites().await;

    match result {
        Err(Error::Authentication { ref message }) => {
            assert!(message.contains("session expired"), "got: {message}");
        }
        other => panic!("expected Authentication error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_controller_rc_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/s/nope/rest/wlanconf"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meta": { "rc": "error", "msg": "api.err.NoSiteContext" },
            "data": []
        })))
        .mount(&server)
        .await;

    let result = client.list_wlans("nope").await;

    match result {
        Err(Error::Controller { ref message }) => {
            assert!(message.contains("NoSiteContext"), "got: {message}");
        }
        other => panic!("expected Controller error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_unifi_os_error_body_with_http_200() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/self/sites"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": { "code": 401, "message": "Unauthorized" }
        })))
        .mount(&server)
        .await;

    let result = client.list_sites().await;
    let err = result.unwrap_err();
    assert!(matches!(err, Error::Authentication { .. }), "got {err:?}");
}

#[tokio::test]
async fn test_timeout_reports_configured_limit() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/self/sites"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(ok_envelope(json!([])))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let transport = TransportConfig {
        timeout: Duration::from_secs(1),
        ..TransportConfig::default()
    };
    let client = LegacyClient::new(
        Url::parse(&server.uri()).unwrap(),
        ControllerPlatform::ClassicController,
        &transport,
    )
    .unwrap();

    let err = client.list_sites().await.unwrap_err();
    assert!(
        matches!(err, Error::Timeout { timeout_secs: 1 }),
        "expected timeout, got: {err:?}"
    );
}

#[tokio::test]
async fn test_rotated_csrf_token_is_used_next() {
    let server = MockServer::start().await;
    let client = client_for(&server, ControllerPlatform::UnifiOs);

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).insert_header("X-CSRF-Token", "tok-1"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/proxy/network/api/self/sites"))
        .and(header("X-CSRF-Token", "tok-1"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-Updated-CSRF-Token", "tok-2")
                .set_body_json(ok_envelope(json!([]))),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/auth/logout"))
        .and(header("X-CSRF-Token", "tok-2"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let secret: secrecy::SecretString = "pw".to_string().into();
    client.login("admin", &secret).await.unwrap();
    client.list_sites().await.unwrap();
    client.logout().await.unwrap();
}
