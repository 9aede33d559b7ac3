use crate::report::domain::TopicContext;
use crate::report::phrases::{Phrases, numbered, top_up};
use crate::report::sections::ReportSections;
use rand::Rng;

pub(crate) fn sections<R: Rng>(ctx: &TopicContext, p: &mut Phrases<'_, R>) -> ReportSections {
    let q = ctx.query.as_str();

    ReportSections {
        executive_summary: format!(
            "{q} represents a {} area of technological development. Adoption is {}, and the \
             surrounding ecosystem of vendors, developers and users continues to evolve.",
            p.pick(&["fast-moving", "transformative", "maturing", "highly competitive"]),
            p.pick(&["accelerating", "uneven across industries", "broadening", "steady"])
        ),
        key_findings: key_findings(ctx, p),
        background: format!(
            "The foundations of {q} trace back to work on {}. Over the last {} years the field \
             has moved from {} to {}.",
            p.pick(&[
                "distributed systems",
                "statistical learning",
                "networked devices",
                "open-source tooling",
            ]),
            p.int(3, 15),
            p.pick(&["research prototypes", "niche deployments", "early experiments"]),
            p.pick(&[
                "production systems",
                "mainstream products",
                "enterprise platforms",
            ]),
        ),
        trends: [
            format!(
                "**{} Adoption**: Organizations are {} {}.",
                p.pick(&["Enterprise", "Consumer", "Developer"]),
                p.pick(&["rapidly integrating", "piloting", "standardizing on"]),
                p.pick(&["cloud-native tooling", "AI-assisted workflows", "open platforms"]),
            ),
            format!(
                "**Infrastructure**: Demand for {} continues to {}.",
                p.pick(&["compute capacity", "specialized hardware", "edge deployments"]),
                p.pick(&["grow", "outpace supply", "reshape budgets"]),
            ),
            format!(
                "**Ecosystem**: {} are {}.",
                p.pick(&["Open-source projects", "Startups", "Standards bodies"]),
                p.pick(&[
                    "driving much of the innovation",
                    "consolidating",
                    "attracting significant investment",
                ]),
            ),
        ]
        .join("\n\n"),
        expert_insights: [
            format!(
                "**Engineering View**: {} point out that {}.",
                p.pick(&["Senior engineers", "Architects", "Practitioners"]),
                p.pick(&[
                    "integration cost is often underestimated",
                    "reliability matters more than raw capability",
                    "tooling maturity is improving quickly",
                ]),
            ),
            format!(
                "**Industry Analysis**: {} expect {} over the coming years.",
                p.pick(&["Industry analysts", "Research firms", "Investors"]),
                p.pick(&[
                    "sustained double-digit growth",
                    "market consolidation",
                    "new regulatory frameworks",
                ]),
            ),
        ]
        .join("\n\n"),
        technical_details: format!(
            "**Technical Indicators**:\n\
             - Adoption Rate: {}%\n\
             - Performance Improvement: {}x over previous generation\n\
             - Average Deployment Time: {} weeks\n\
             - Reported Reliability: {}%\n\n\
             **Architecture**:\n\
             - {}",
            p.float(15.0, 85.0, 1),
            p.float(1.2, 5.0, 1),
            p.int(2, 26),
            p.float(95.0, 99.99, 2),
            p.pick(&[
                "Cloud-hosted with API access",
                "Hybrid on-premise and cloud",
                "Edge-first with central coordination",
                "Fully managed service",
            ]),
        ),
        impact: format!(
            "**For Businesses**:\n- {}\n\n\
             **For Developers**:\n- {}\n\n\
             **For Society**:\n- {}",
            p.pick(&[
                "Productivity gains",
                "New product opportunities",
                "Shifts in competitive position",
            ]),
            p.pick(&["New skills in demand", "Changing workflows", "Better tooling"]),
            p.pick(&[
                "Questions of privacy and security",
                "Changes in the labor market",
                "Wider access to services",
            ]),
        ),
        data_analysis: format!(
            "Usage data for {q} indicates {}, while benchmark results show {}.",
            p.pick(&["steady growth", "rapid uptake", "concentrated adoption"]),
            p.pick(&[
                "consistent gains",
                "diminishing returns at scale",
                "wide variance between vendors",
            ]),
        ),
        future_outlook: format!(
            "Looking ahead, {q} is likely to {}. The main open questions concern {}.",
            p.pick(&[
                "become a standard part of the technology stack",
                "expand into new industries",
                "see significant consolidation",
            ]),
            p.pick(&["regulation", "cost", "interoperability", "security"]),
        ),
        recommendations: [
            format!(
                "**Evaluate**: {} {q} against concrete business needs.",
                p.pick(&["Assess", "Pilot", "Benchmark"])
            ),
            format!(
                "**Invest in Skills**: {} teams on {}.",
                p.pick(&["Train", "Upskill", "Support"]),
                p.pick(&["core concepts", "security practices", "operational tooling"]),
            ),
            format!(
                "**Plan for Change**: {} architectures that {}.",
                p.pick(&["Favor", "Design", "Adopt"]),
                p.pick(&[
                    "avoid vendor lock-in",
                    "scale incrementally",
                    "can absorb rapid change",
                ]),
            ),
        ]
        .join("\n\n"),
        conclusion: format!(
            "{q} is {} the technology landscape. Organizations that {} will be best positioned \
             to benefit.",
            p.pick(&["reshaping", "steadily influencing", "becoming central to"]),
            p.pick(&[
                "experiment early",
                "invest in skills",
                "adopt deliberately",
            ]),
        ),
    }
}

fn key_findings<R: Rng>(ctx: &TopicContext, p: &mut Phrases<'_, R>) -> String {
    let q = ctx.query.as_str();
    let counts = &ctx.counts;
    let mut findings = Vec::new();

    if counts.any(&["software", "system", "platform"]) {
        findings.push(format!(
            "Software platforms in this space show {}.",
            p.pick(&[
                "rapid feature growth",
                "increasing interoperability",
                "consolidation around a few vendors",
                "maturing reliability",
            ])
        ));
    }
    if counts.any(&["innovation", "development"]) {
        findings.push(format!(
            "Development activity points to {}.",
            p.pick(&[
                "a strong innovation pipeline",
                "incremental improvements",
                "breakthrough research",
                "growing open-source contribution",
            ])
        ));
    }
    if counts.any(&["data"]) {
        findings.push(format!(
            "Data practices are {}.",
            p.pick(&[
                "becoming a competitive differentiator",
                "under growing regulatory scrutiny",
                "shifting toward real-time processing",
            ])
        ));
    }
    if counts.any(&["ai", "artificial intelligence", "machine learning"]) {
        findings.push(format!(
            "AI capabilities are {}.",
            p.pick(&[
                "being embedded across products",
                "improving at a rapid pace",
                "raising questions about governance",
                "lowering the cost of automation",
            ])
        ));
    }

    let generic = vec![
        format!(
            "Adoption of {q} is {} across industries.",
            p.pick(&["growing", "uneven", "accelerating"])
        ),
        format!(
            "Security considerations remain {}.",
            p.pick(&["a top concern", "an active research area", "a barrier to adoption"])
        ),
        format!(
            "Investment in the sector has {}.",
            p.pick(&["increased", "stabilized", "shifted toward later-stage companies"])
        ),
        format!(
            "Talent shortages are {}.",
            p.pick(&["slowing deployment", "driving up salaries", "easing gradually"])
        ),
        format!(
            "Standards and interoperability are {}.",
            p.pick(&["improving", "fragmented", "under active discussion"])
        ),
    ];

    top_up(&mut findings, generic, 5, p);
    numbered(&findings)
}
