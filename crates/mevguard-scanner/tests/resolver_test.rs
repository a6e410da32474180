use std::time::{Duration, Instant};

use futures::future::join_all;
use mevguard_core::{QueryResolver, RiskLevel};
use mevguard_scanner::{MockResolver, ScannerConfig};

fn fast_resolver() -> MockResolver {
    MockResolver::new(ScannerConfig::with_delay(Duration::from_millis(5)))
}

fn is_synthetic_address(addr: &str) -> bool {
    addr.len() == 42
        && addr.starts_with("0x")
        && addr[2..].chars().all(|c| c.is_ascii_hexdigit())
}

#[tokio::test]
async fn sentinel_returns_full_record() {
    let resolver = fast_resolver();
    for query in ["vitalik.eth", "Vitalik.ETH", "VITALIK.ETH"] {
        let r = resolver.resolve(query).await.unwrap();
        assert_eq!(r.total_transactions, 156);
        assert_eq!(r.attacked_transactions, 8);
        assert_eq!(r.risk_level, RiskLevel::Medium);
        assert_eq!(r.attacks.len(), 3);
        assert_eq!(r.wallet_address, "0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045");
    }
}

#[tokio::test]
async fn ens_query_gets_synthetic_address() {
    let r = fast_resolver().resolve("alice.eth").await.unwrap();
    assert_eq!(r.ens_name.as_deref(), Some("alice.eth"));
    assert!(is_synthetic_address(&r.wallet_address), "{}", r.wallet_address);
    assert_eq!(r.total_transactions, 45);
    assert_eq!(r.attacked_transactions, 3);
    assert_eq!(r.risk_level, RiskLevel::Low);
    assert_eq!(r.attacks.len(), 1);
}

#[tokio::test]
async fn address_query_is_echoed_verbatim() {
    let query = "0x0000000000000000000000000000000000000001";
    let r = fast_resolver().resolve(query).await.unwrap();
    assert_eq!(r.wallet_address, query);
    assert!(r.ens_name.is_none());
    assert_eq!(r.total_transactions, 45);
}

#[tokio::test]
async fn malformed_input_still_resolves() {
    let r = fast_resolver().resolve("definitely not a wallet").await.unwrap();
    assert_eq!(r.wallet_address, "definitely not a wallet");
}

#[tokio::test]
async fn sequential_calls_do_not_leak() {
    let resolver = fast_resolver();
    let first = resolver.resolve("bob.eth").await.unwrap();
    let second = resolver.resolve("0xabc").await.unwrap();
    assert_eq!(first.ens_name.as_deref(), Some("bob.eth"));
    assert!(second.ens_name.is_none());
    assert_eq!(second.wallet_address, "0xabc");

    let third = resolver.resolve("carol").await.unwrap();
    assert_eq!(third.wallet_address, "carol");
    assert!(third.ens_name.is_none());
}

#[tokio::test]
async fn resolution_respects_delay() {
    let delay = Duration::from_millis(60);
    let resolver = MockResolver::new(ScannerConfig::with_delay(delay));
    let start = Instant::now();
    resolver.resolve("0xabc").await.unwrap();
    assert!(start.elapsed() >= delay);
}

#[tokio::test]
async fn concurrent_calls_are_independent() {
    let resolver = fast_resolver();
    let queries: Vec<String> = (0..16)
        .map(|i| if i % 2 == 0 { format!("user{}.eth", i) } else { format!("0x{:040x}", i) })
        .collect();
    let results = join_all(queries.iter().map(|q| resolver.resolve(q))).await;

    for (query, result) in queries.iter().zip(results) {
        let r = result.unwrap();
        if query.ends_with(".eth") {
            assert_eq!(r.ens_name.as_deref(), Some(query.as_str()));
            assert!(is_synthetic_address(&r.wallet_address));
        } else {
            assert_eq!(&r.wallet_address, query);
            assert!(r.ens_name.is_none());
        }
    }
}
