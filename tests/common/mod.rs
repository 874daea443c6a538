//! Common test utilities and fixtures

#![allow(dead_code)]

use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Path the mock server serves stats on
pub const STATS_PATH: &str = "/_stats";

/// Sample payloads for testing
pub mod payloads {
    /// Everything within bounds
    pub const HEALTHY: &str = "10,100,50,100,5,100,5";

    /// Load, disk and network over their thresholds
    pub const OVERLOADED: &str = "31,100,50,100,95,100,95";

    /// Wrong number of fields
    pub const SHORT: &str = "1,2,3";

    /// Non-numeric field
    pub const GARBLED: &str = "1,2,x,4,5,6,7";
}

/// Full URL of the stats endpoint on a mock server
pub fn stats_url(server: &MockServer) -> String {
    format!("{}{}", server.uri(), STATS_PATH)
}

/// Respond to stats requests with the given status and body
pub async fn mount_stats(server: &MockServer, status: u16, body: &str) {
    Mock::given(method("GET"))
        .and(path(STATS_PATH))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(server)
        .await;
}

/// Respond to the next `times` stats requests, taking priority over other mocks
pub async fn mount_stats_times(server: &MockServer, status: u16, body: &str, times: u64) {
    Mock::given(method("GET"))
        .and(path(STATS_PATH))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .up_to_n_times(times)
        .with_priority(1)
        .mount(server)
        .await;
}

/// Respond with a healthy payload after `delay`
pub async fn mount_slow_stats(server: &MockServer, delay: Duration) {
    Mock::given(method("GET"))
        .and(path(STATS_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(payloads::HEALTHY)
                .set_delay(delay),
        )
        .mount(server)
        .await;
}
