//! File export for reports, search packages and charts
//!
//! Files are named `<kind>_<topic with spaces as underscores>_<YYYYMMDD>.<ext>`
//! and written as UTF-8 into the configured output directory.

use crate::chart::ChartSpec;
use crate::types::{AppError, Result, SearchPackage};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// `<topic>_<YYYYMMDD>` with spaces in the topic replaced by underscores.
pub fn file_stem(topic: &str, date: &str) -> String {
    let compact: String = date.chars().filter(|c| c.is_ascii_digit()).collect();
    format!("{}_{}", topic.trim().replace(' ', "_"), compact)
}

pub fn report_file_name(topic: &str, date: &str) -> String {
    format!("report_{}.md", file_stem(topic, date))
}

pub fn results_file_name(topic: &str, date: &str) -> String {
    format!("results_{}.json", file_stem(topic, date))
}

pub fn chart_file_name(topic: &str, date: &str) -> String {
    format!("chart_{}.json", file_stem(topic, date))
}

/// Paths written by one export
#[derive(Debug, Clone, Default)]
pub struct ExportedFiles {
    pub report: Option<PathBuf>,
    pub results: Option<PathBuf>,
    pub chart: Option<PathBuf>,
}

impl ExportedFiles {
    pub fn paths(&self) -> impl Iterator<Item = &PathBuf> {
        [&self.report, &self.results, &self.chart]
            .into_iter()
            .flatten()
    }
}

/// Writes export files under one directory
#[derive(Debug, Clone)]
pub struct Exporter {
    out_dir: PathBuf,
}

impl Exporter {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    pub fn write_report(&self, package: &SearchPackage, report: &str) -> Result<PathBuf> {
        let path = self
            .out_dir
            .join(report_file_name(&package.topic, &package.date));
        self.write(&path, report)?;
        Ok(path)
    }

    /// Serialize the whole package (topic, date, results, instructions).
    pub fn write_results(&self, package: &SearchPackage) -> Result<PathBuf> {
        let path = self
            .out_dir
            .join(results_file_name(&package.topic, &package.date));
        self.write(&path, &to_json(package)?)?;
        Ok(path)
    }

    pub fn write_chart(&self, package: &SearchPackage, chart: &ChartSpec) -> Result<PathBuf> {
        let path = self
            .out_dir
            .join(chart_file_name(&package.topic, &package.date));
        self.write(&path, &to_json(chart)?)?;
        Ok(path)
    }

    /// Write every available artifact.
    pub fn write_all(
        &self,
        package: &SearchPackage,
        report: Option<&str>,
        chart: Option<&ChartSpec>,
    ) -> Result<ExportedFiles> {
        let mut files = ExportedFiles {
            results: Some(self.write_results(package)?),
            ..Default::default()
        };
        if let Some(report) = report {
            files.report = Some(self.write_report(package, report)?);
        }
        if let Some(chart) = chart {
            files.chart = Some(self.write_chart(package, chart)?);
        }
        Ok(files)
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        fs::create_dir_all(&self.out_dir)?;
        fs::write(path, contents)?;
        tracing::info!(path = %path.display(), bytes = contents.len(), "Exported file");
        Ok(())
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| AppError::Internal(format!("Failed to serialize export: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names() {
        assert_eq!(file_stem("Tesla stock", "2026-03-04"), "Tesla_stock_20260304");
        assert_eq!(
            report_file_name("Tesla stock", "2026-03-04"),
            "report_Tesla_stock_20260304.md"
        );
        assert_eq!(
            results_file_name("AI", "2026-03-04"),
            "results_AI_20260304.json"
        );
        assert_eq!(
            chart_file_name("medieval castles", "2026-03-04"),
            "chart_medieval_castles_20260304.json"
        );
    }

    #[test]
    fn test_exported_paths_skip_missing() {
        let files = ExportedFiles {
            results: Some(PathBuf::from("results.json")),
            ..Default::default()
        };
        assert_eq!(files.paths().count(), 1);
    }
}
