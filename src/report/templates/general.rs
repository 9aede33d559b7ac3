use crate::report::domain::TopicContext;
use crate::report::phrases::{Phrases, join_natural, numbered, top_up};
use crate::report::sections::ReportSections;
use rand::Rng;

pub(crate) fn sections<R: Rng>(ctx: &TopicContext, p: &mut Phrases<'_, R>) -> ReportSections {
    let q = ctx.query.as_str();
    let themes = ctx.key_themes(5);
    let theme_list = join_natural(&themes[..themes.len().min(3)])
        .unwrap_or_else(|| "various aspects of the subject".to_string());
    let lead_theme = themes
        .first()
        .cloned()
        .unwrap_or_else(|| "the topic".to_string());

    ReportSections {
        executive_summary: format!(
            "This report explores {q}, drawing on {} sources. The material centres on \
             {theme_list}, and reveals {} perspectives on the subject.",
            ctx.result_count,
            p.pick(&["diverse", "complementary", "sometimes conflicting", "well-documented"])
        ),
        key_findings: key_findings(ctx, &lead_theme, p),
        background: format!(
            "{q} has attracted {} attention, particularly in discussions of {}. \
             Historical context shows {}.",
            p.pick(&["sustained", "renewed", "growing", "considerable"]),
            p.pick(&["its origins", "its cultural significance", "its practical relevance"]),
            p.pick(&[
                "a long and varied development",
                "periods of rapid change",
                "steady evolution over time",
            ]),
        ),
        trends: [
            format!(
                "**Renewed Focus on {lead_theme}**: Recent sources {} this aspect.",
                p.pick(&["increasingly emphasize", "frequently discuss", "revisit"])
            ),
            format!(
                "**{} Interest**: Coverage of {q} is {}.",
                p.pick(&["Public", "Academic", "Media"]),
                p.pick(&["rising", "broadening", "becoming more specialized"]),
            ),
        ]
        .join("\n\n"),
        expert_insights: format!(
            "**Specialist View**: {} suggest that {}.\n\n\
             **Alternative Perspectives**: Other commentators {}.",
            p.pick(&["Scholars", "Researchers", "Observers"]),
            p.pick(&[
                "the topic is more nuanced than commonly assumed",
                "recent evidence supports established views",
                "new sources are changing the conversation",
            ]),
            p.pick(&[
                "question the dominant interpretation",
                "highlight overlooked details",
                "call for further study",
            ]),
        ),
        technical_details: format!(
            "**Source Overview**:\n\
             - Sources consulted: {}\n\
             - Most frequent themes: {}\n\
             - Estimated coverage: {}%",
            ctx.result_count,
            if themes.is_empty() {
                "none identified".to_string()
            } else {
                themes.join(", ")
            },
            p.int(40, 95),
        ),
        impact: format!(
            "Understanding {q} matters for {}. It informs {} and shapes {}.",
            p.pick(&["researchers", "educators", "the general public", "decision makers"]),
            p.pick(&["public debate", "education", "policy discussions"]),
            p.pick(&["future research", "popular understanding", "practical decisions"]),
        ),
        data_analysis: format!(
            "The collected sources show {} coverage, with {} emphasis on {lead_theme}.",
            p.pick(&["broad", "focused", "uneven"]),
            p.pick(&["strong", "moderate", "recurring"]),
        ),
        future_outlook: format!(
            "Interest in {q} is likely to {}. Future work may focus on {}.",
            p.pick(&["continue", "grow", "shift toward new questions"]),
            p.pick(&[
                "primary sources",
                "comparative analysis",
                "wider public engagement",
            ]),
        ),
        recommendations: [
            format!(
                "**Further Reading**: {} the primary sources listed below.",
                p.pick(&["Consult", "Review", "Explore"])
            ),
            format!(
                "**Critical Evaluation**: {} claims across multiple sources.",
                p.pick(&["Compare", "Cross-check", "Verify"])
            ),
            format!(
                "**Stay Informed**: {} new developments on {lead_theme}.",
                p.pick(&["Follow", "Track", "Monitor"])
            ),
        ]
        .join("\n\n"),
        conclusion: format!(
            "{q} is a {} subject. The sources gathered here offer {} starting point for \
             deeper study.",
            p.pick(&["rich", "multifaceted", "fascinating", "complex"]),
            p.pick(&["a solid", "a useful", "a broad"]),
        ),
    }
}

fn key_findings<R: Rng>(
    ctx: &TopicContext,
    lead_theme: &str,
    p: &mut Phrases<'_, R>,
) -> String {
    let q = ctx.query.as_str();
    let mut findings: Vec<String> = Vec::new();

    let generic = vec![
        format!(
            "Sources describe {q} from {} angles.",
            p.pick(&["several", "historical and contemporary", "practical and theoretical"])
        ),
        format!("Recent discussion increasingly centres on {lead_theme}."),
        format!(
            "There is {} agreement among sources on the core facts.",
            p.pick(&["broad", "partial", "limited"])
        ),
        format!(
            "Public interest in the topic has {}.",
            p.pick(&["grown", "remained steady", "fluctuated"])
        ),
        format!(
            "Several open questions remain about {}.",
            p.pick(&["its origins", "its future direction", "its wider significance"])
        ),
    ];

    top_up(&mut findings, generic, 5, p);
    numbered(&findings)
}
