use super::*;

fn test_client(domain: &str) -> Result<StorefrontClient, StorefrontError> {
    StorefrontClient::new(domain, "token", "2024-01", 5, "pdp-test/0.1")
}

#[test]
fn endpoint_from_bare_domain() {
    let client = test_client("hydrogen-preview.myshopify.com").unwrap();
    assert_eq!(
        client.endpoint(),
        "https://hydrogen-preview.myshopify.com/api/2024-01/graphql.json"
    );
    assert_eq!(
        client.store_origin(),
        "https://hydrogen-preview.myshopify.com"
    );
}

#[test]
fn endpoint_ignores_path_on_full_url() {
    let client = test_client("https://shop.example.com/collections/all").unwrap();
    assert_eq!(
        client.endpoint(),
        "https://shop.example.com/api/2024-01/graphql.json"
    );
}

#[test]
fn endpoint_keeps_explicit_port_and_scheme() {
    let client = test_client("http://127.0.0.1:8081").unwrap();
    assert_eq!(
        client.endpoint(),
        "http://127.0.0.1:8081/api/2024-01/graphql.json"
    );
}

#[test]
fn rejects_unparseable_domain() {
    let result = test_client("not a domain");
    assert!(
        matches!(result, Err(StorefrontError::InvalidEndpoint { .. })),
        "expected InvalidEndpoint"
    );
}

#[test]
fn storefront_origin_strips_trailing_slash() {
    assert_eq!(
        storefront_origin("https://shop.example.com/").unwrap(),
        "https://shop.example.com"
    );
}

#[test]
fn retries_default_to_off() {
    let client = test_client("shop.example.com").unwrap();
    assert_eq!(client.max_retries, 0);
    let client = client.with_retries(3, 100);
    assert_eq!(client.max_retries, 3);
    assert_eq!(client.backoff_base_ms, 100);
}
