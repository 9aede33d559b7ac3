//! Caller-owned state for one interactive search

use crate::chart::ChartSpec;
use crate::types::SearchPackage;

/// Latest search, report and chart produced in a session
#[derive(Debug, Clone, Default)]
pub struct SearchSession {
    pub package: Option<SearchPackage>,
    pub report: Option<String>,
    pub chart: Option<ChartSpec>,
    pub completed: bool,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a fresh package and forget the previous report and chart.
    pub fn begin(&mut self, package: SearchPackage) {
        self.package = Some(package);
        self.report = None;
        self.chart = None;
        self.completed = false;
    }

    /// Attach the report and chart, marking the search complete.
    pub fn complete(&mut self, report: String, chart: ChartSpec) {
        self.report = Some(report);
        self.chart = Some(chart);
        self.completed = self.package.is_some();
    }

    pub fn topic(&self) -> Option<&str> {
        self.package.as_ref().map(|p| p.topic.as_str())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::create_chart;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn package(topic: &str) -> SearchPackage {
        SearchPackage {
            topic: topic.to_string(),
            date: "2026-01-02".to_string(),
            results: vec![],
            instructions: String::new(),
        }
    }

    #[test]
    fn test_lifecycle() {
        let mut session = SearchSession::new();
        assert!(!session.completed);
        assert!(session.topic().is_none());

        session.begin(package("castles"));
        assert_eq!(session.topic(), Some("castles"));
        assert!(!session.completed);

        let chart = create_chart("castles", &[], &mut StdRng::seed_from_u64(1));
        session.complete("# report".to_string(), chart);
        assert!(session.completed);

        session.begin(package("moats"));
        assert!(session.report.is_none());
        assert!(!session.completed);

        session.reset();
        assert!(session.package.is_none());
    }

    #[test]
    fn test_complete_without_package() {
        let mut session = SearchSession::new();
        let chart = create_chart("castles", &[], &mut StdRng::seed_from_u64(1));
        session.complete("# report".to_string(), chart);
        assert!(!session.completed);
    }
}
