//! Per-domain section templates

mod financial;
mod general;
mod healthcare;
mod technology;

use super::domain::{TopicContext, TopicDomain};
use super::phrases::Phrases;
use super::sections::ReportSections;
use rand::Rng;

/// Fill every section for the context's domain.
pub(crate) fn fill<R: Rng>(ctx: &TopicContext, phrases: &mut Phrases<'_, R>) -> ReportSections {
    match ctx.domain {
        TopicDomain::Financial => financial::sections(ctx, phrases),
        TopicDomain::Healthcare => healthcare::sections(ctx, phrases),
        TopicDomain::Technology => technology::sections(ctx, phrases),
        TopicDomain::General => general::sections(ctx, phrases),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{SearchResult, SourceKind};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn results() -> Vec<SearchResult> {
        vec![
            SearchResult::new(
                "Market trend forecast",
                "https://a.example",
                "Investor shares stock clinical trial patient therapy vaccine software data ai",
                SourceKind::GeneralWeb,
            ),
            SearchResult::new(
                "Platform innovation",
                "https://b.example",
                "development system treatment",
                SourceKind::News,
            ),
        ]
    }

    #[test]
    fn test_every_domain_fills_every_section() {
        for topic in ["Tesla stock", "covid vaccine", "AI chips", "medieval castles"] {
            for seed in 0..8 {
                let ctx = TopicContext::new(topic, &results());
                let mut rng = StdRng::seed_from_u64(seed);
                let sections = fill(&ctx, &mut Phrases::new(&mut rng));
                assert!(
                    sections.blank_sections().is_empty(),
                    "{} (seed {}) left {:?} blank",
                    topic,
                    seed,
                    sections.blank_sections()
                );
            }
        }
    }

    #[test]
    fn test_five_numbered_findings() {
        for topic in ["Tesla stock", "covid vaccine", "AI chips", "medieval castles"] {
            let ctx = TopicContext::new(topic, &results());
            let mut rng = StdRng::seed_from_u64(11);
            let sections = fill(&ctx, &mut Phrases::new(&mut rng));
            let lines: Vec<&str> = sections.key_findings.lines().collect();
            assert_eq!(lines.len(), 5, "{}", topic);
            for (i, line) in lines.iter().enumerate() {
                assert!(line.starts_with(&format!("{}. ", i + 1)));
            }
        }
    }

    #[test]
    fn test_gated_findings_lead_when_terms_present() {
        let ctx = TopicContext::new("Tesla stock", &results());
        let mut rng = StdRng::seed_from_u64(2);
        let sections = fill(&ctx, &mut Phrases::new(&mut rng));
        assert!(
            sections
                .key_findings
                .starts_with("1. Stock performance for Tesla shows")
        );
    }

    #[test]
    fn test_general_without_results_still_fills() {
        let ctx = TopicContext::new("medieval castles", &[]);
        let mut rng = StdRng::seed_from_u64(5);
        let sections = fill(&ctx, &mut Phrases::new(&mut rng));
        assert!(
            sections
                .executive_summary
                .contains("various aspects of the subject")
        );
        assert!(sections.blank_sections().is_empty());
    }
}
