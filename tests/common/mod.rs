//! Shared helpers for storeline integration tests

#![allow(dead_code)]

use serde_json::{json, Value};
use storeline::{ClientConfig, HttpPhotoApi};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const ACCESS_KEY: &str = "test-access-key";

/// Build a photo record the way the upstream API serialises it
pub fn photo(id: &str, color: &str, description: &str, likes: u32) -> Value {
    json!({
        "id": id,
        "color": color,
        "description": description,
        "likes": likes,
        "urls": {
            "raw": format!("https://images.example/{id}?raw"),
            "regular": format!("u{id}"),
        },
        "width": 4000,
        "height": 3000,
    })
}

/// The two-item listing used by the documented scenarios
pub fn red_and_blue() -> Value {
    json!([photo("1", "Red", "Acme", 10), photo("2", "Blue", "Acme", 5)])
}

pub fn api_for(server: &MockServer) -> HttpPhotoApi {
    let config = ClientConfig::new(&server.uri(), ACCESS_KEY).expect("valid mock server URL");
    HttpPhotoApi::new(config).expect("reqwest client")
}

/// Client pointed at a local port nothing listens on
pub fn unreachable_api() -> HttpPhotoApi {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local address").port();
    drop(listener);

    let config = ClientConfig::new(&format!("http://127.0.0.1:{port}"), ACCESS_KEY)
        .expect("valid loopback URL");
    HttpPhotoApi::new(config).expect("reqwest client")
}

/// Serve `body` on `GET {endpoint}` for authorised requests
pub async fn mount_json(server: &MockServer, endpoint: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(endpoint))
        .and(header("Authorization", format!("Client-ID {ACCESS_KEY}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}
