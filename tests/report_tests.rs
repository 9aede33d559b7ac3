//! End-to-end tests for the template report and the canned chart

use argus::chart::ChartKind;
use argus::create_chart;
use argus::report::{Section, TopicDomain, classify, compose, synthesize};
use argus::types::{SearchResult, SourceKind};
use rand::SeedableRng;
use rand::rngs::StdRng;
use regex::Regex;
use rstest::rstest;

fn tesla_results() -> Vec<SearchResult> {
    vec![
        SearchResult::new(
            "Tesla shares jump after earnings",
            "https://example.com/tesla-earnings",
            "Tesla stock price rose as investors cheered revenue growth and profit.",
            SourceKind::GeneralWeb,
        ),
        SearchResult::new(
            "Tesla, Inc.",
            "https://en.wikipedia.org/wiki/Tesla,_Inc.",
            "Tesla is an American electric vehicle and clean energy company.",
            SourceKind::Encyclopedia,
        ),
        SearchResult::new(
            "Analysts split on Tesla forecast",
            "https://news.example.com/tesla-forecast",
            "Market analysts weigh the stock's volatility against long-term growth.",
            SourceKind::News,
        ),
    ]
}

#[rstest]
#[case("Tesla stock price", TopicDomain::Financial)]
#[case("COVID vaccine", TopicDomain::Healthcare)]
#[case("AI software", TopicDomain::Technology)]
#[case("medieval castles", TopicDomain::General)]
#[case("MARKET outlook", TopicDomain::Financial)]
#[case("sports scores", TopicDomain::General)]
#[case("mobile phones", TopicDomain::General)]
fn test_classification(#[case] topic: &str, #[case] expected: TopicDomain) {
    assert_eq!(classify(topic), expected);
}

#[rstest]
#[case("Tesla stock")]
#[case("public health policy")]
#[case("digital payments")]
#[case("medieval castles")]
fn test_every_heading_present_and_filled(#[case] topic: &str) {
    for seed in 0..5 {
        let mut rng = StdRng::seed_from_u64(seed);
        let report = compose(topic, "2026-01-02", &tesla_results(), &mut rng);

        assert!(report.sections.blank_sections().is_empty(), "seed {seed}");
        for section in Section::ALL {
            assert!(
                report.markdown.contains(&section.heading()),
                "missing {} for {topic}",
                section.title()
            );
        }
    }
}

#[test]
fn test_tesla_stock_report() {
    let results = tesla_results();
    let mut rng = StdRng::seed_from_u64(42);
    let report = compose("Tesla stock", "2026-01-02", &results, &mut rng);

    assert_eq!(report.domain, TopicDomain::Financial);
    assert!(
        report
            .markdown
            .starts_with("# Comprehensive Research Report: Tesla stock")
    );
    assert!(report.markdown.contains("**Generated on:** 2026-01-02"));

    let findings_start = report.markdown.find("## Key Findings").unwrap();
    let findings = &report.markdown[findings_start..];
    let numbered = Regex::new(r"(?m)^\d+\. ").unwrap();
    assert!(numbered.is_match(findings));

    let sources_start = report.markdown.rfind("## Sources").unwrap();
    let sources = &report.markdown[sources_start..];
    for result in &results {
        assert!(sources.contains(&result.title));
        assert!(sources.contains(&result.link));
    }
    assert!(sources.trim_end().ends_with("search engine*"));
}

#[test]
fn test_same_seed_same_report() {
    let results = tesla_results();
    let first = synthesize(
        "Tesla stock",
        "2026-01-02",
        &results,
        &mut StdRng::seed_from_u64(9),
    );
    let second = synthesize(
        "Tesla stock",
        "2026-01-02",
        &results,
        &mut StdRng::seed_from_u64(9),
    );
    assert_eq!(first, second);
}

#[test]
fn test_report_without_results() {
    let mut rng = StdRng::seed_from_u64(3);
    let report = compose("medieval castles", "2026-01-02", &[], &mut rng);

    assert_eq!(report.domain, TopicDomain::General);
    assert!(report.sections.blank_sections().is_empty());
    assert!(report.markdown.contains("## Sources"));
}

#[test]
fn test_financial_chart() {
    let mut rng = StdRng::seed_from_u64(1);
    let chart = create_chart("Tesla stock", &tesla_results(), &mut rng);

    assert_eq!(chart.domain, TopicDomain::Financial);
    assert_eq!(chart.kind, ChartKind::Line);
    assert_eq!(chart.x_labels.len(), 10);
    assert_eq!(chart.series[0].name, "Tesla Price");
    // Day 1 carries no drift
    assert_eq!(chart.series[0].values[0], 100.0);
    assert_eq!(chart.series[1].values[0], 95.0);
}

#[rstest]
#[case("COVID vaccine", ChartKind::GroupedBar, 2)]
#[case("AI software", ChartKind::Bar, 1)]
fn test_fixed_range_charts(
    #[case] topic: &str,
    #[case] kind: ChartKind,
    #[case] series_count: usize,
) {
    let mut rng = StdRng::seed_from_u64(5);
    let chart = create_chart(topic, &[], &mut rng);

    assert_eq!(chart.kind, kind);
    assert_eq!(chart.series.len(), series_count);
    assert_eq!(chart.x_labels.len(), 5);
    for series in &chart.series {
        assert!(series.values.iter().all(|v| (0.0..=100.0).contains(v)));
    }
}

#[test]
fn test_general_chart_counts_words() {
    let results = vec![SearchResult::new(
        "Castles of Wales",
        "https://example.com/castles",
        "Castles built by Edward; castles everywhere.",
        SourceKind::GeneralWeb,
    )];
    let mut rng = StdRng::seed_from_u64(0);
    let chart = create_chart("medieval castles", &results, &mut rng);

    assert_eq!(chart.kind, ChartKind::HorizontalBar);
    assert_eq!(chart.x_labels[0], "castles");
    assert_eq!(chart.series[0].values[0], 3.0);

    let table = chart.to_markdown_table();
    assert!(table.contains("| castles | 3.00 |"));
}
