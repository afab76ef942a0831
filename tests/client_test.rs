//! WikiClient orchestration over an in-memory fetcher

use kodegen_tools_lolwiki::{AbilitySlot, ItemEntry, ItemSummary, WikiClient, WikiConfig, WikiError};

mod common;
use common::{
    StaticFetcher, champion_fixture, create_test_html, index_fixture, init_tracing, item_fixture,
    test_config,
};

const BASE: &str = "http://wiki.test/";

fn summary(name: &str) -> ItemSummary {
    ItemSummary {
        name: name.to_string(),
        url: format!("{BASE}{}", name.replace(' ', "_")),
        tags: Vec::new(),
    }
}

#[test]
fn test_page_url_encodes_titles() {
    let client = WikiClient::with_fetcher(test_config(BASE), StaticFetcher::new());

    assert_eq!(
        client.page_url("Test Page").expect("page url"),
        "http://wiki.test/Test_Page"
    );
    assert_eq!(
        client.page_url("Kai'Sa").expect("page url"),
        "http://wiki.test/Kai%27Sa"
    );
}

#[test]
fn test_default_page_url_keeps_locale_prefix() {
    let config = WikiConfig::builder()
        .cache_enabled(false)
        .build()
        .expect("default config");
    let client = WikiClient::with_fetcher(config, StaticFetcher::new());

    let url = client.page_url("Test Page").expect("page url");
    assert_eq!(url, "https://wiki.leagueoflegends.com/en-us/Test_Page");
}

#[tokio::test]
async fn test_get_champion_resolves_and_extracts() {
    init_tracing();
    let fetcher = StaticFetcher::new().with_page("http://wiki.test/Test_Champion", champion_fixture());
    let client = WikiClient::with_fetcher(test_config(BASE), fetcher);

    let record = client
        .get_champion("Test Champion")
        .await
        .expect("champion page");

    assert_eq!(record.name, "Test Champion");
    assert_eq!(record.url, "http://wiki.test/Test_Champion");
    assert_eq!(record.base_stats["health"], "500");
    assert_eq!(record.spells[0].slot, AbilitySlot::Q);
}

#[tokio::test]
async fn test_missing_page_propagates_fetch_error() {
    let client = WikiClient::with_fetcher(test_config(BASE), StaticFetcher::new());

    let err = client.get_item("Nowhere").await.expect_err("404 expected");
    assert!(matches!(err, WikiError::Status { status: 404, .. }));
}

#[tokio::test]
async fn test_list_items_reads_configured_index_page() {
    let fetcher = StaticFetcher::new().with_page("http://wiki.test/List_of_items", index_fixture());
    let client = WikiClient::with_fetcher(test_config(BASE), fetcher);

    let items = client.list_items().await.expect("index page");

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].url, "http://wiki.test/Item_One");
    assert_eq!(items[0].tags, vec!["Legendary".to_string()]);
    assert_eq!(client.fetcher().requests(), vec!["http://wiki.test/List_of_items"]);
}

#[tokio::test]
async fn test_expand_items_preserves_order_and_degrades_failures() {
    init_tracing();
    let fetcher = StaticFetcher::new()
        .with_page("http://wiki.test/Item_One", item_fixture())
        .with_page(
            "http://wiki.test/Item_Three",
            create_test_html("Item Three", "<p>Active: Blink.</p>"),
        )
        .with_failure("http://wiki.test/Item_Two");
    let client = WikiClient::with_fetcher(test_config(BASE), fetcher);

    let entries = client
        .expand_items(vec![
            summary("Item One"),
            summary("Item Two"),
            summary("Item Three"),
        ])
        .await;

    let names: Vec<&str> = entries.iter().map(ItemEntry::name).collect();
    assert_eq!(names, vec!["Item One", "Item Two", "Item Three"]);

    let first = entries[0].record().expect("first item expanded");
    assert_eq!(first.rarity.as_deref(), Some("Legendary"));

    match &entries[1] {
        ItemEntry::Failed { summary, error } => {
            assert_eq!(summary.name, "Item Two");
            assert!(error.contains("500"), "unexpected error: {error}");
        }
        other => panic!("expected failed entry, got {other:?}"),
    }

    let third = entries[2].record().expect("third item expanded");
    assert_eq!(third.actives, vec!["Active: Blink.".to_string()]);
}

#[tokio::test]
async fn test_expand_items_respects_concurrency_limit() {
    let mut fetcher = StaticFetcher::new();
    let mut rows = Vec::new();
    for i in 0..12 {
        let name = format!("Item {i}");
        fetcher = fetcher.with_page(format!("http://wiki.test/Item_{i}"), item_fixture());
        rows.push(summary(&name));
    }
    let config = WikiConfig::builder()
        .base_url(BASE)
        .cache_enabled(false)
        .max_concurrent_items(2)
        .build()
        .expect("config");
    let client = WikiClient::with_fetcher(config, fetcher);

    let entries = client.expand_items(rows).await;

    assert_eq!(entries.len(), 12);
    assert!(entries.iter().all(|entry| !entry.is_failed()));
    assert_eq!(client.fetcher().peak_in_flight(), 2);
}

#[tokio::test]
async fn test_list_items_expanded_end_to_end() {
    let fetcher = StaticFetcher::new()
        .with_page("http://wiki.test/List_of_items", index_fixture())
        .with_page("http://wiki.test/Item_One", item_fixture());
    let client = WikiClient::with_fetcher(test_config(BASE), fetcher);

    let entries = client.list_items_expanded().await.expect("expanded index");

    assert_eq!(entries.len(), 1);
    let record = entries[0].record().expect("item expanded");
    assert_eq!(record.name, "Item One");
    assert_eq!(record.passives, vec!["Passive: Grants speed".to_string()]);
}

#[test]
fn test_failed_entry_serializes_with_status_tag() {
    let entry = ItemEntry::Failed {
        summary: summary("Item Two"),
        error: "HTTP 500".to_string(),
    };
    let json = serde_json::to_value(&entry).expect("serialize entry");

    assert_eq!(json["status"], "failed");
    assert_eq!(json["summary"]["name"], "Item Two");
}
