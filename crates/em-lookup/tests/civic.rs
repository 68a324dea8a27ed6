//! Failure paths of the HTTP client, without a live service.

use std::time::Duration;

use em_lookup::{
    CivicClient, CivicConfig, FALLBACK_MESSAGE, Lookup, LookupError, legislators_by_zipcode,
};

fn unreachable_client() -> CivicClient {
    // Port 9 (discard) is not expected to be listening on the test host.
    let config = CivicConfig::new("test-key")
        .with_base_url("http://127.0.0.1:9/civicinfo/v2/representatives")
        .with_timeout(Duration::from_secs(2));
    CivicClient::new(config).unwrap()
}

#[test]
fn unreachable_service_is_a_network_error() {
    let err = unreachable_client().officials("20010").unwrap_err();
    assert!(matches!(err, LookupError::Network(_)));
}

#[test]
fn unreachable_service_falls_back() {
    let client = unreachable_client();
    let legislators = legislators_by_zipcode(&client, "20010");
    assert!(legislators.is_fallback());
    assert_eq!(legislators.text(), FALLBACK_MESSAGE);
}
