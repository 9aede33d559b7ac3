//! Topic classification and corpus statistics

use crate::types::SearchResult;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TopicDomain {
    Financial,
    Healthcare,
    Technology,
    General,
}

impl TopicDomain {
    pub fn as_str(&self) -> &'static str {
        match self {
            TopicDomain::Financial => "financial",
            TopicDomain::Healthcare => "healthcare",
            TopicDomain::Technology => "technology",
            TopicDomain::General => "general",
        }
    }

    /// Terms counted in the result corpus to gate optional findings
    pub fn terms(&self) -> &'static [&'static str] {
        match self {
            TopicDomain::Financial => FINANCIAL_TERMS,
            TopicDomain::Healthcare => HEALTHCARE_TERMS,
            TopicDomain::Technology => TECHNOLOGY_TERMS,
            TopicDomain::General => &[],
        }
    }
}

impl fmt::Display for TopicDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TopicDomain::Financial => "Financial",
            TopicDomain::Healthcare => "Healthcare",
            TopicDomain::Technology => "Technology",
            TopicDomain::General => "General",
        };
        f.write_str(label)
    }
}

/// Ordered classification table; the first domain with a matching keyword wins.
pub const CLASSIFICATION: &[(TopicDomain, &[&str])] = &[
    (
        TopicDomain::Financial,
        &[
            "stock",
            "market",
            "price",
            "investment",
            "financial",
            "trending news",
        ],
    ),
    (
        TopicDomain::Healthcare,
        &[
            "health",
            "covid",
            "vaccine",
            "medical",
            "disease",
            "treatment",
        ],
    ),
    (
        TopicDomain::Technology,
        &[
            "tech",
            "technology",
            "ai",
            "software",
            "digital",
            "app",
            "coding",
            "enginering",
        ],
    ),
];

/// Classify a topic by substring containment in its lower-cased form.
pub fn classify(topic: &str) -> TopicDomain {
    let lowered = topic.to_lowercase();
    CLASSIFICATION
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| lowered.contains(kw)))
        .map(|(domain, _)| *domain)
        .unwrap_or(TopicDomain::General)
}

pub const FINANCIAL_TERMS: &[&str] = &[
    "stock", "market", "price", "investment", "financial", "economy", "profit", "loss",
    "growth", "decline", "shares", "investor", "trend", "forecast", "capital", "revenue",
    "income", "assets", "liabilities", "credit", "debt", "loan", "interest rate",
    "dividends", "portfolio", "mutual funds", "hedge funds", "etf", "cryptocurrency",
    "bitcoin", "blockchain", "forex", "trading", "exchange", "inflation", "gdp", "bonds",
    "equity", "derivatives", "commodities", "fiscal policy", "monetary policy", "banking",
    "mortgage", "real estate", "insurance", "ipo", "bear market", "bull market", "leverage",
    "liquidity", "cash flow", "balance sheet",
];

pub const HEALTHCARE_TERMS: &[&str] = &[
    "health", "medical", "treatment", "clinical", "drug", "therapy", "patient", "disease",
    "condition", "vaccine", "healthcare", "doctor", "hospital", "trial", "medicine",
    "diagnosis", "symptom", "prescription", "surgery", "mental health", "wellness",
    "nutrition", "pharmaceutical", "public health", "epidemic", "pandemic", "virus",
    "infection", "antibiotic", "immune system", "genetics", "biotechnology", "telemedicine",
    "nursing", "physician", "oncology", "cardiology", "neurology", "radiology", "icu",
    "emergency care", "blood test", "mri", "rehabilitation",
];

pub const TECHNOLOGY_TERMS: &[&str] = &[
    "technology", "software", "digital", "innovation", "app", "development", "system",
    "platform", "data", "ai", "artificial intelligence", "machine learning", "algorithm",
    "automation", "robotics", "deep learning", "neural network", "big data",
    "cloud computing", "cybersecurity", "blockchain", "iot", "internet of things",
    "quantum computing", "virtual reality", "augmented reality", "5g", "computing",
    "sensors", "mobile", "smartphone", "laptop", "server", "database", "networking", "api",
    "devops", "docker", "kubernetes", "microservices", "edge computing", "llm", "chatbot",
    "nlp", "computer vision",
];

const STOPWORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "is", "are", "was", "were", "been", "being",
    "have", "has", "had", "do", "does", "did", "doing", "to", "from", "by", "with", "about",
    "against", "between", "into", "through", "during", "before", "after", "above", "below",
    "of", "at", "in", "on", "for", "this", "that", "these", "those", "it", "its", "they",
    "them", "their", "which", "who", "whom", "what", "when", "where",
];

/// All titles and snippets joined and lower-cased.
pub fn build_corpus(results: &[SearchResult]) -> String {
    results
        .iter()
        .map(|result| format!("{} {} ", result.title, result.snippet))
        .collect::<String>()
        .to_lowercase()
}

/// Whole-word occurrence counts of a term list in a corpus
#[derive(Debug, Clone, Default)]
pub struct KeywordCounts {
    counts: HashMap<&'static str, usize>,
}

impl KeywordCounts {
    pub fn count(corpus: &str, terms: &[&'static str]) -> Self {
        let counts = terms
            .iter()
            .map(|term| {
                let hits = Regex::new(&format!(r"\b{}\b", regex::escape(term)))
                    .map(|re| re.find_iter(corpus).count())
                    .unwrap_or(0);
                (*term, hits)
            })
            .collect();
        Self { counts }
    }

    pub fn get(&self, term: &str) -> usize {
        self.counts.get(term).copied().unwrap_or(0)
    }

    /// True when at least one of `terms` occurs
    pub fn any(&self, terms: &[&str]) -> bool {
        terms.iter().any(|term| self.get(term) > 0)
    }
}

/// Most frequent non-stopword terms longer than two characters.
///
/// Ties keep first-seen order.
pub fn top_terms(corpus: &str, n: usize) -> Vec<(String, usize)> {
    let cleaned: String = corpus
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect();

    let mut order: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for word in cleaned.split_whitespace() {
        if word.chars().count() <= 2 || STOPWORDS.contains(&word) {
            continue;
        }
        match index.get(word) {
            Some(&i) => order[i].1 += 1,
            None => {
                index.insert(word.to_string(), order.len());
                order.push((word.to_string(), 1));
            }
        }
    }

    order.sort_by(|a, b| b.1.cmp(&a.1));
    order.truncate(n);
    order
}

/// Everything a domain template needs to fill its blanks
#[derive(Debug, Clone)]
pub struct TopicContext {
    pub query: String,
    /// First word of the query, used where the templates name "the asset"
    pub lead: String,
    pub domain: TopicDomain,
    pub result_count: usize,
    pub counts: KeywordCounts,
    pub corpus: String,
}

impl TopicContext {
    pub fn new(query: &str, results: &[SearchResult]) -> Self {
        let domain = classify(query);
        let corpus = build_corpus(results);
        let counts = KeywordCounts::count(&corpus, domain.terms());
        let lead = query
            .split_whitespace()
            .next()
            .unwrap_or(query)
            .to_string();

        Self {
            query: query.to_string(),
            lead,
            domain,
            result_count: results.len(),
            counts,
            corpus,
        }
    }

    /// Up to `n` frequent terms of the corpus
    pub fn key_themes(&self, n: usize) -> Vec<String> {
        top_terms(&self.corpus, n)
            .into_iter()
            .map(|(word, _)| word)
            .collect()
    }
}
