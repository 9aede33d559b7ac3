//! File export tests

use argus::chart::create_chart;
use argus::export::{Exporter, chart_file_name, report_file_name, results_file_name};
use argus::report::WRITING_INSTRUCTIONS;
use argus::types::{SearchPackage, SearchResult, SourceKind};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tempfile::TempDir;

fn package() -> SearchPackage {
    SearchPackage {
        topic: "Tesla stock".to_string(),
        date: "2026-01-02".to_string(),
        results: vec![SearchResult::new(
            "Tesla shares rally",
            "https://example.com/tesla",
            "Shares rose.",
            SourceKind::GeneralWeb,
        )],
        instructions: WRITING_INSTRUCTIONS.to_string(),
    }
}

#[test]
fn test_file_names() {
    assert_eq!(
        report_file_name("Tesla stock", "2026-01-02"),
        "report_Tesla_stock_20260102.md"
    );
    assert_eq!(
        results_file_name("Tesla stock", "2026-01-02"),
        "results_Tesla_stock_20260102.json"
    );
    assert_eq!(
        chart_file_name("Tesla stock", "2026-01-02"),
        "chart_Tesla_stock_20260102.json"
    );
}

#[test]
fn test_write_all_creates_every_file() {
    let dir = TempDir::new().unwrap();
    let exporter = Exporter::new(dir.path().join("out"));
    let package = package();
    let chart = create_chart(
        &package.topic,
        &package.results,
        &mut StdRng::seed_from_u64(1),
    );

    let files = exporter
        .write_all(&package, Some("# Report"), Some(&chart))
        .unwrap();

    assert_eq!(files.paths().count(), 3);
    for path in files.paths() {
        assert!(path.exists(), "{} was not written", path.display());
    }

    let report = std::fs::read_to_string(files.report.unwrap()).unwrap();
    assert_eq!(report, "# Report");

    let results: SearchPackage =
        serde_json::from_str(&std::fs::read_to_string(files.results.unwrap()).unwrap()).unwrap();
    assert_eq!(results.topic, "Tesla stock");
    assert_eq!(results.results, package.results);

    let chart_json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(files.chart.unwrap()).unwrap()).unwrap();
    assert_eq!(chart_json["kind"], "line");
    assert_eq!(chart_json["domain"], "financial");
}

#[test]
fn test_results_only_export() {
    let dir = TempDir::new().unwrap();
    let exporter = Exporter::new(dir.path());

    let files = exporter.write_all(&package(), None, None).unwrap();

    assert!(files.report.is_none());
    assert!(files.chart.is_none());
    assert!(
        dir.path()
            .join("results_Tesla_stock_20260102.json")
            .exists()
    );
}
