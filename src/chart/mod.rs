//! Canned per-domain chart data
//!
//! Charts are descriptive only: the numbers are drawn from fixed ranges (or,
//! for general topics, from term frequencies in the results) and serialized
//! as JSON next to the report.

use crate::report::domain::build_corpus;
use crate::report::{TopicDomain, classify, top_terms};
use crate::types::SearchResult;
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChartKind {
    Line,
    GroupedBar,
    Bar,
    HorizontalBar,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub domain: TopicDomain,
    pub title: String,
    pub kind: ChartKind,
    pub x_labels: Vec<String>,
    pub series: Vec<Series>,
    pub x_label: String,
    pub y_label: String,
    pub description: String,
}

impl ChartSpec {
    /// Render the data as a markdown table, one column per series.
    pub fn to_markdown_table(&self) -> String {
        let mut header = format!("| {} |", self.x_label);
        let mut rule = String::from("|---|");
        for series in &self.series {
            header.push_str(&format!(" {} |", series.name));
            rule.push_str("---|");
        }

        let rows = self.x_labels.iter().enumerate().map(|(i, label)| {
            let cells: String = self
                .series
                .iter()
                .map(|s| match s.values.get(i) {
                    Some(value) => format!(" {:.2} |", value),
                    None => " |".to_string(),
                })
                .collect();
            format!("| {} |{}", label, cells)
        });

        std::iter::once(header)
            .chain(std::iter::once(rule))
            .chain(rows)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

const TERM_LIMIT: usize = 10;

/// Build the canned chart for `topic`.
pub fn create_chart<R: Rng>(topic: &str, results: &[SearchResult], rng: &mut R) -> ChartSpec {
    let domain = classify(topic);
    let chart = match domain {
        TopicDomain::Financial => financial(topic, rng),
        TopicDomain::Healthcare => healthcare(topic, rng),
        TopicDomain::Technology => technology(topic, rng),
        TopicDomain::General => general(topic, results, rng),
    };
    tracing::debug!(topic, kind = ?chart.kind, "Built chart");
    chart
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn labels(prefix: &str, count: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("{} {}", prefix, (b'A' + i as u8) as char))
        .collect()
}

fn financial<R: Rng>(topic: &str, rng: &mut R) -> ChartSpec {
    let lead = topic.split_whitespace().next().unwrap_or(topic);
    let main = (0..10)
        .map(|i| round2(100.0 + rng.random_range(-5.0_f64..5.0) * i as f64))
        .collect();
    let comparison = (0..10)
        .map(|i| round2(95.0 + rng.random_range(-4.0_f64..6.0) * i as f64))
        .collect();

    ChartSpec {
        domain: TopicDomain::Financial,
        title: format!("Financial Analysis: {}", topic),
        kind: ChartKind::Line,
        x_labels: (1..=10).map(|day| format!("Day {}", day)).collect(),
        series: vec![
            Series {
                name: format!("{} Price", lead),
                values: main,
            },
            Series {
                name: "Market Comparison".to_string(),
                values: comparison,
            },
        ],
        x_label: "Timeline".to_string(),
        y_label: "Price Value".to_string(),
        description: format!(
            "## Financial Analysis Visualization for \"{topic}\"\n\n\
             This chart tracks the price trend over ten days against a market comparison.\n\
             - The first series follows {lead}\n\
             - The second series is a market reference\n\n\
             **Note:** Figures are illustrative and not taken from live market data."
        ),
    }
}

fn healthcare<R: Rng>(topic: &str, rng: &mut R) -> ChartSpec {
    let effectiveness = (0..5).map(|_| round2(rng.random_range(65.0..95.0))).collect();
    let side_effects = (0..5).map(|_| round2(rng.random_range(5.0..30.0))).collect();

    ChartSpec {
        domain: TopicDomain::Healthcare,
        title: format!("Healthcare Analysis: {}", topic),
        kind: ChartKind::GroupedBar,
        x_labels: labels("Treatment", 5),
        series: vec![
            Series {
                name: "Effectiveness (%)".to_string(),
                values: effectiveness,
            },
            Series {
                name: "Side Effects (%)".to_string(),
                values: side_effects,
            },
        ],
        x_label: "Treatments".to_string(),
        y_label: "Percentage (%)".to_string(),
        description: format!(
            "## Healthcare Analysis Visualization for \"{topic}\"\n\n\
             This chart compares treatments by effectiveness and reported side effects.\n\
             - Effectiveness is shown as a percentage of positive outcomes\n\
             - Side effects are shown as a percentage of reported cases\n\n\
             **Note:** Figures are illustrative and not taken from clinical data."
        ),
    }
}

fn technology<R: Rng>(topic: &str, rng: &mut R) -> ChartSpec {
    let adoption = (0..5).map(|_| round2(rng.random_range(10.0..90.0))).collect();

    ChartSpec {
        domain: TopicDomain::Technology,
        title: format!("Technology Analysis: {}", topic),
        kind: ChartKind::Bar,
        x_labels: labels("Solution", 5),
        series: vec![Series {
            name: "Adoption (%)".to_string(),
            values: adoption,
        }],
        x_label: "Solutions".to_string(),
        y_label: "Adoption Rate (%)".to_string(),
        description: format!(
            "## Technology Analysis Visualization for \"{topic}\"\n\n\
             This chart compares adoption rates across five technology solutions.\n\
             Higher bars indicate broader adoption.\n\n\
             **Note:** Figures are illustrative and not taken from market surveys."
        ),
    }
}

fn general<R: Rng>(topic: &str, results: &[SearchResult], rng: &mut R) -> ChartSpec {
    let terms = top_terms(&build_corpus(results), TERM_LIMIT);

    let (x_labels, values, y_label, description) = if terms.is_empty() {
        let aspects = ["History", "Culture", "Impact", "Research", "Public Interest"];
        let scores: Vec<f64> = aspects
            .iter()
            .map(|_| round2(rng.random_range(1.0..10.0)))
            .collect();
        (
            aspects.iter().map(|a| a.to_string()).collect::<Vec<_>>(),
            scores,
            "Aspects",
            format!(
                "## Topic Overview for \"{topic}\"\n\n\
                 No terms could be extracted from the results, so this chart shows indicative \
                 scores for common aspects of the topic.\n\n\
                 **Note:** Scores are illustrative."
            ),
        )
    } else {
        let (words, counts): (Vec<String>, Vec<f64>) = terms
            .into_iter()
            .map(|(word, count)| (word, count as f64))
            .unzip();
        (
            words,
            counts,
            "Words",
            format!(
                "## Word Frequency Analysis for \"{topic}\"\n\n\
                 This chart shows the most frequent words in the search results.\n\
                 The most common terms point to the main themes of the topic.\n\n\
                 **Note:** Common stopwords are excluded."
            ),
        )
    };

    ChartSpec {
        domain: TopicDomain::General,
        title: format!("Word Frequency Analysis: {}", topic),
        kind: ChartKind::HorizontalBar,
        x_labels,
        series: vec![Series {
            name: "Frequency".to_string(),
            values,
        }],
        x_label: "Frequency".to_string(),
        y_label: y_label.to_string(),
        description,
    }
}
