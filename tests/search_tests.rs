//! Fetcher and aggregator tests against mocked HTTP sources

use argus::search::{
    Aggregator, EncyclopediaFetcher, Fetcher, NewsFetcher, SubLimit, WebSearchFetcher,
    build_http_client,
};
use argus::types::SourceKind;
use argus::utils::config::SearchConfig;
use serde_json::json;
use std::collections::HashSet;
use std::sync::Arc;
use wiremock::matchers::{header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const WEB_PAGE: &str = r#"
<html><body>
  <div class="g">
    <a href="/url?q=https://example.com/tesla&amp;sa=U"><h3>Tesla shares rally</h3></a>
    <div class="IsZvec">Tesla stock climbed on strong deliveries.</div>
  </div>
  <div class="g">
    <a href="https://shared.example/story"><h3>Shared story</h3></a>
    <div class="IsZvec">Also covered by the news source.</div>
  </div>
</body></html>
"#;

const NEWS_PAGE: &str = r#"
<html><body>
  <article>
    <h3><a href="./articles/abc">Tesla deliveries beat estimates</a></h3>
    <time datetime="2026-03-01T10:00:00Z">1 day ago</time>
    <p>Deliveries rose sharply in the quarter.</p>
  </article>
  <article>
    <h4><a href="https://shared.example/story">Shared story</a></h4>
  </article>
  <article>
    <div>No headline link here</div>
  </article>
</body></html>
"#;

fn config(web: &MockServer, news: &MockServer) -> SearchConfig {
    SearchConfig {
        timeout_secs: 2,
        web_base_url: web.uri(),
        encyclopedia_api_url: format!("{}/w/api.php", web.uri()),
        news_base_url: news.uri(),
        ..SearchConfig::default()
    }
}

fn long_text(len: usize) -> String {
    "x".repeat(len)
}

async fn mount_web(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "Tesla stock"))
        .and(header_exists("user-agent"))
        .respond_with(ResponseTemplate::new(200).set_body_string(WEB_PAGE))
        .mount(server)
        .await;
}

async fn mount_news(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "Tesla stock"))
        .and(query_param("hl", "en-US"))
        .and(query_param("ceid", "US:en"))
        .respond_with(ResponseTemplate::new(200).set_body_string(NEWS_PAGE))
        .mount(server)
        .await;
}

async fn mount_encyclopedia(server: &MockServer, limit: &str) {
    let long_description = long_text(120);
    Mock::given(method("GET"))
        .and(path("/w/api.php"))
        .and(query_param("action", "opensearch"))
        .and(query_param("search", "Tesla stock"))
        .and(query_param("limit", limit))
        .and(query_param("namespace", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            "Tesla stock",
            ["Tesla, Inc.", "Tesla (unit)"],
            ["EV maker", long_description],
            [
                "https://en.wikipedia.org/wiki/Tesla,_Inc.",
                "https://en.wikipedia.org/wiki/Tesla_(unit)"
            ]
        ])))
        .expect(1)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/w/api.php"))
        .and(query_param("action", "query"))
        .and(query_param("prop", "extracts"))
        .and(query_param("titles", "Tesla, Inc."))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "query": {"pages": {"5533631": {"title": "Tesla, Inc.", "extract": long_text(300)}}}
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_web_fetcher_parses_results_page() {
    let web = MockServer::start().await;
    let news = MockServer::start().await;
    mount_web(&web).await;

    let cfg = config(&web, &news);
    let fetcher = WebSearchFetcher::new(build_http_client(&cfg).unwrap(), &cfg);
    let results = fetcher.fetch("Tesla stock", 5).await;

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].link, "https://example.com/tesla");
    assert_eq!(results[0].source, SourceKind::GeneralWeb);
}

#[tokio::test]
async fn test_web_fetcher_absorbs_http_errors() {
    let web = MockServer::start().await;
    let news = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&web)
        .await;

    let cfg = config(&web, &news);
    let fetcher = WebSearchFetcher::new(build_http_client(&cfg).unwrap(), &cfg);

    assert!(fetcher.fetch("Tesla stock", 5).await.is_empty());
    assert!(fetcher.try_fetch("Tesla stock", 5).await.is_err());
}

#[tokio::test]
async fn test_encyclopedia_replaces_short_descriptions_with_extracts() {
    let web = MockServer::start().await;
    let news = MockServer::start().await;
    mount_encyclopedia(&web, "3").await;

    let cfg = config(&web, &news);
    let fetcher = EncyclopediaFetcher::new(build_http_client(&cfg).unwrap(), &cfg);
    let results = fetcher.fetch("Tesla stock", 3).await;

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].title, "Tesla, Inc.");
    assert_eq!(results[0].snippet.chars().count(), 253);
    assert!(results[0].snippet.ends_with("..."));
    // Long enough descriptions are kept as-is
    assert_eq!(results[1].snippet, long_text(120));
    assert_eq!(results[1].source, SourceKind::Encyclopedia);
}

#[tokio::test]
async fn test_encyclopedia_keeps_description_when_extract_fails() {
    let web = MockServer::start().await;
    let news = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("action", "opensearch"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            "castles",
            ["Castle"],
            ["Fortified structure"],
            ["https://en.wikipedia.org/wiki/Castle"]
        ])))
        .mount(&web)
        .await;
    Mock::given(method("GET"))
        .and(query_param("action", "query"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&web)
        .await;

    let cfg = config(&web, &news);
    let fetcher = EncyclopediaFetcher::new(build_http_client(&cfg).unwrap(), &cfg);
    let results = fetcher.fetch("castles", 3).await;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].snippet, "Fortified structure");
}

#[tokio::test]
async fn test_encyclopedia_malformed_response_yields_nothing() {
    let web = MockServer::start().await;
    let news = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&web)
        .await;

    let cfg = config(&web, &news);
    let fetcher = EncyclopediaFetcher::new(build_http_client(&cfg).unwrap(), &cfg);
    assert!(fetcher.fetch("castles", 3).await.is_empty());
}

#[tokio::test]
async fn test_news_fetcher_rebases_links_and_prefixes_time() {
    let web = MockServer::start().await;
    let news = MockServer::start().await;
    mount_news(&news).await;

    let cfg = config(&web, &news);
    let fetcher = NewsFetcher::new(build_http_client(&cfg).unwrap(), &cfg);
    let results = fetcher.fetch("Tesla stock", 5).await;

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].link, format!("{}/articles/abc", news.uri()));
    assert_eq!(
        results[0].snippet,
        "2026-03-01T10:00:00Z - Deliveries rose sharply in the quarter."
    );
    assert_eq!(
        results[1].snippet,
        argus::search::news::FALLBACK_SNIPPET
    );
}

#[tokio::test]
async fn test_aggregator_dedupes_and_truncates() {
    let web = MockServer::start().await;
    let news = MockServer::start().await;
    mount_web(&web).await;
    mount_news(&news).await;
    // limit 6: web 3, encyclopedia 3, news 2
    mount_encyclopedia(&web, "3").await;

    let aggregator = Aggregator::from_config(&config(&web, &news)).unwrap();
    let results = aggregator.aggregate("Tesla stock", 6).await;

    let links: HashSet<_> = results.iter().map(|r| r.link.as_str()).collect();
    assert_eq!(links.len(), results.len());
    assert!(results.len() <= 6);

    // Priority order: web first, the duplicate news story is dropped
    assert_eq!(results[0].source, SourceKind::GeneralWeb);
    assert_eq!(results[1].link, "https://shared.example/story");
    assert_eq!(results[1].source, SourceKind::GeneralWeb);
    assert_eq!(results[2].source, SourceKind::Encyclopedia);
    assert_eq!(results.last().unwrap().source, SourceKind::News);
    assert_eq!(results.len(), 5);
}

#[tokio::test]
async fn test_aggregator_survives_a_failing_source() {
    let web = MockServer::start().await;
    let news = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&web)
        .await;
    mount_encyclopedia(&web, "3").await;
    mount_news(&news).await;

    let aggregator = Aggregator::from_config(&config(&web, &news)).unwrap();
    let results = aggregator.aggregate("Tesla stock", 15).await;

    assert!(results.iter().all(|r| r.source != SourceKind::GeneralWeb));
    assert_eq!(
        results
            .iter()
            .filter(|r| r.source == SourceKind::Encyclopedia)
            .count(),
        2
    );
    assert_eq!(
        results
            .iter()
            .filter(|r| r.source == SourceKind::News)
            .count(),
        2
    );
}

#[tokio::test]
async fn test_aggregator_with_custom_fetchers() {
    let web = MockServer::start().await;
    let news = MockServer::start().await;
    mount_news(&news).await;

    let cfg = config(&web, &news);
    let client = build_http_client(&cfg).unwrap();
    let aggregator = Aggregator::new()
        .with_fetcher(Arc::new(NewsFetcher::new(client, &cfg)), SubLimit::Fixed(1));

    let results = aggregator.aggregate("Tesla stock", 10).await;
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "Tesla deliveries beat estimates");
}
