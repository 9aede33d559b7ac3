use crate::report::domain::TopicContext;
use crate::report::phrases::{Phrases, numbered, top_up};
use crate::report::sections::ReportSections;
use rand::Rng;

pub(crate) fn sections<R: Rng>(ctx: &TopicContext, p: &mut Phrases<'_, R>) -> ReportSections {
    let q = ctx.query.as_str();
    let lead = ctx.lead.as_str();

    ReportSections {
        executive_summary: format!(
            "The analysis of {q} reveals significant financial implications across markets and \
             investment sectors. Key economic indicators suggest {} outlook, with several factors \
             shaping market behavior and investor sentiment.",
            p.pick(&["a positive", "a negative", "a mixed", "an uncertain"])
        ),
        key_findings: key_findings(ctx, p),
        background: format!(
            "{q} operates within the broader {} sector, which has been characterized by {} in \
             recent years. Founded around {}, {lead} has moved through several market cycles and \
             economic conditions.\n\n\
             Historical performance shows {} in response to changing demand and economic pressure. \
             Its market position has been shaped by {}.",
            p.pick(&["financial services", "investment", "market", "economic"]),
            p.pick(&[
                "rapid growth",
                "significant disruption",
                "technological transformation",
                "regulatory change",
            ]),
            p.int(1980, 2015),
            p.pick(&[
                "consistent growth",
                "cyclical patterns",
                "variable returns",
                "strategic adaptability",
            ]),
            p.pick(&[
                "strategic acquisitions",
                "product innovation",
                "market expansion",
                "competitive pressure",
                "regulatory change",
            ]),
        ),
        trends: [
            format!(
                "**{} {}**: {lead} has shown {} improvement in {}.",
                p.pick(&["Increasing", "Growing", "Expanding", "Rising"]),
                p.pick(&[
                    "Market Share",
                    "Investor Interest",
                    "Financial Performance",
                    "Industry Recognition",
                ]),
                p.pick(&["significant", "steady", "remarkable", "noticeable"]),
                p.pick(&[
                    "recent quarters",
                    "year-over-year comparisons",
                    "market positioning",
                    "investor relations",
                ]),
            ),
            format!(
                "**{} Transformation**: Adoption of {} has {}.",
                p.pick(&["Technological", "Digital", "Strategic", "Operational"]),
                p.pick(&[
                    "advanced analytics",
                    "artificial intelligence",
                    "blockchain settlement",
                    "cloud infrastructure",
                ]),
                p.pick(&[
                    "improved efficiency",
                    "reduced costs",
                    "sharpened decision-making",
                    "strengthened security",
                ]),
            ),
            format!(
                "**{} Developments**: Recent {} have {}.",
                p.pick(&["Regulatory", "Compliance", "Legal", "Policy"]),
                p.pick(&["regulations", "legislation", "policy updates", "disclosure rules"]),
                p.pick(&[
                    "affected operations",
                    "forced adjustments",
                    "opened new opportunities",
                    "posed challenges",
                ]),
            ),
            format!(
                "**{} Behavior**: Shifting {} are driving {}.",
                p.pick(&["Consumer", "Client", "Customer", "Investor"]),
                p.pick(&["demographics", "market segments", "user needs", "client expectations"]),
                p.pick(&[
                    "product development",
                    "service improvements",
                    "marketing strategy",
                    "customer engagement",
                ]),
            ),
        ]
        .join("\n\n"),
        expert_insights: [
            format!(
                "**{} Analysis**: According to {}, {q} shows {} for {}.",
                p.pick(&["Market", "Financial", "Investment", "Economic"]),
                p.pick(&[
                    "industry experts",
                    "financial analysts",
                    "market specialists",
                    "economic researchers",
                ]),
                p.pick(&[
                    "strong potential",
                    "concerning indicators",
                    "promising metrics",
                    "mixed signals",
                ]),
                p.pick(&[
                    "long-term growth",
                    "short-term performance",
                    "competitiveness",
                    "investor returns",
                ]),
            ),
            format!(
                "**{} Positioning**: Analysts at {} have {} the importance of its {}.",
                p.pick(&["Strategic", "Competitive", "Operational"]),
                p.pick(&[
                    "major financial institutions",
                    "leading investment firms",
                    "independent research houses",
                ]),
                p.pick(&["highlighted", "emphasized", "noted", "questioned"]),
                p.pick(&[
                    "market strategy",
                    "capital structure",
                    "technology spending",
                    "expansion plans",
                ]),
            ),
            format!(
                "**Risk Assessment**: {} {} that {} is needed around {}.",
                p.pick(&["Senior analysts", "Industry veterans", "Portfolio managers"]),
                p.pick(&["suggest", "indicate", "argue", "recommend"]),
                p.pick(&["careful monitoring", "strategic planning", "disciplined sizing"]),
                p.pick(&[
                    "market volatility",
                    "competitive pressure",
                    "regulatory change",
                    "technological disruption",
                ]),
            ),
        ]
        .join("\n\n"),
        technical_details: format!(
            "**Financial Metrics**:\n\
             - Price-to-Earnings Ratio: {}\n\
             - Earnings per Share (EPS): ${}\n\
             - Return on Equity (ROE): {}%\n\
             - Debt-to-Equity Ratio: {}\n\
             - Operating Margin: {}%\n\n\
             **Market Performance**:\n\
             - Year-to-Date Change: {}{}%\n\
             - 52-Week Range: ${} - ${}\n\
             - Average Trading Volume: {} shares\n\n\
             **Forecast**:\n\
             - Projected Revenue Growth: {}{}%\n\
             - Target Price Range: ${} - ${}",
            p.float(10.0, 25.0, 2),
            p.float(1.0, 10.0, 2),
            p.float(5.0, 20.0, 2),
            p.float(0.5, 2.0, 2),
            p.float(10.0, 30.0, 2),
            p.sign(),
            p.float(1.0, 15.0, 2),
            p.float(50.0, 100.0, 2),
            p.float(100.0, 200.0, 2),
            p.int(100_000, 5_000_000),
            p.sign(),
            p.float(2.0, 12.0, 1),
            p.float(80.0, 150.0, 2),
            p.float(150.0, 250.0, 2),
        ),
        impact: format!(
            "The performance and positioning of {q} matter to several groups:\n\n\
             **For Investors**:\n- {}\n- {}\n\n\
             **For the Industry**:\n- {}\n- {}\n\n\
             **For the Broader Economy**:\n- {}",
            p.pick(&[
                "Potential for strong returns",
                "Need for careful portfolio consideration",
                "Opportunity for strategic investment",
                "Importance of risk assessment",
            ]),
            p.pick(&[
                "Long-term growth considerations",
                "Short-term volatility factors",
                "Dividend potential",
            ]),
            p.pick(&[
                "Benchmark for competitors",
                "Influence on sector valuation",
                "Effect on industry practice",
            ]),
            p.pick(&[
                "Influence on regulatory approaches",
                "Contribution to market trends",
                "Role in technology adoption",
            ]),
            p.pick(&[
                "Employment effects",
                "Contribution to economic growth",
                "Influence on sector stability",
                "Capital market contributions",
            ]),
        ),
        data_analysis: format!(
            "Analysis of the available financial data shows several patterns:\n\n\
             **Performance Trends**:\n- {} shown {}\n- {} indicates {}\n\n\
             **Stability Indicators**:\n- Liquidity ratios suggest {}\n- Solvency analysis indicates {}",
            p.pick(&[
                "Quarterly growth has",
                "Annual returns have",
                "Profitability metrics have",
                "Cash flow indicators have",
            ]),
            p.pick(&[
                "consistent improvement",
                "variable results",
                "cyclical patterns",
                "steady performance",
            ]),
            p.pick(&["Comparison with industry averages", "Peer benchmarking", "Sector analysis"]),
            p.pick(&[
                "above-average results",
                "competitive positioning",
                "room for improvement",
            ]),
            p.pick(&[
                "strong short-term financial health",
                "adequate operational funding",
                "a reasonable cash position",
            ]),
            p.pick(&[
                "a sustainable long-term position",
                "manageable debt levels",
                "a balanced capital structure",
            ]),
        ),
        future_outlook: format!(
            "Based on current indicators, the outlook for {q} suggests:\n\n\
             **Short term (6-12 months)**:\n- {}\n\n\
             **Medium term (1-3 years)**:\n- {}\n\n\
             **Long term (3-5+ years)**:\n- {}",
            p.pick(&[
                "Continued growth in core segments",
                "Adjustments to market conditions",
                "Focus on operational efficiency",
                "Expansion of key revenue streams",
            ]),
            p.pick(&[
                "Market expansion opportunities",
                "Benefits from technology integration",
                "Stronger competitive positioning",
                "New strategic partnerships",
            ]),
            p.pick(&[
                "Responses to industry disruption",
                "Sustainable growth pathways",
                "Market leadership opportunities",
                "Adaptation to regulatory change",
            ]),
        ),
        recommendations: [
            format!(
                "**Investment Strategy**: {} {q} for {} based on {}.",
                p.pick(&["Consider", "Evaluate", "Assess", "Review"]),
                p.pick(&[
                    "long-term portfolio inclusion",
                    "short-term growth opportunities",
                    "dividend income potential",
                    "strategic sector exposure",
                ]),
                p.pick(&[
                    "current valuation metrics",
                    "growth projections",
                    "competitive positioning",
                    "market conditions",
                ]),
            ),
            format!(
                "**Risk Management**: {} appropriate {} to {}.",
                p.pick(&["Implement", "Develop", "Establish", "Maintain"]),
                p.pick(&[
                    "diversification strategies",
                    "position sizing",
                    "hedging approaches",
                    "monitoring protocols",
                ]),
                p.pick(&[
                    "limit exposure",
                    "manage volatility",
                    "protect capital",
                    "balance risk and reward",
                ]),
            ),
            format!(
                "**Timing**: {} {} for {}.",
                p.pick(&["Monitor", "Track", "Watch"]),
                p.pick(&[
                    "technical indicators",
                    "fundamental developments",
                    "news catalysts",
                    "market sentiment",
                ]),
                p.pick(&[
                    "entry points",
                    "position adjustments",
                    "rebalancing",
                    "profit-taking",
                ]),
            ),
        ]
        .join("\n\n"),
        conclusion: format!(
            "The analysis of {q} reveals a {} financial landscape with {} for {}.\n\n\
             The interplay between {} will continue to {} in both the near term and the years \
             ahead. Decisions grounded in {} will be essential for {}.",
            p.pick(&["complex", "nuanced", "multifaceted", "dynamic"]),
            p.pick(&[
                "significant implications",
                "important considerations",
                "notable opportunities",
                "real challenges",
            ]),
            p.pick(&[
                "investors",
                "market participants",
                "industry observers",
                "financial professionals",
            ]),
            p.pick(&[
                "market forces",
                "financial metrics",
                "economic factors",
                "competitive dynamics",
            ]),
            p.pick(&[
                "shape outcomes",
                "influence performance",
                "drive developments",
            ]),
            p.pick(&[
                "comprehensive information",
                "reliable data",
                "expert insight",
                "thorough research",
            ]),
            p.pick(&[
                "navigating complexity",
                "achieving objectives",
                "managing risk",
            ]),
        ),
    }
}

fn key_findings<R: Rng>(ctx: &TopicContext, p: &mut Phrases<'_, R>) -> String {
    let q = ctx.query.as_str();
    let lead = ctx.lead.as_str();
    let counts = &ctx.counts;
    let mut findings = Vec::new();

    if counts.any(&["stock", "shares"]) {
        findings.push(format!(
            "Stock performance for {lead} shows {} in recent trading periods.",
            p.pick(&[
                "notable growth",
                "concerning volatility",
                "relative stability",
                "mixed performance",
            ])
        ));
    }
    if counts.any(&["market"]) {
        findings.push(format!(
            "Market analysis indicates {} within the sector.",
            p.pick(&[
                "strong potential",
                "a cautious outlook",
                "competitive positioning",
                "shifting dynamics",
            ])
        ));
    }
    if counts.any(&["investment", "investor"]) {
        findings.push(format!(
            "Investor sentiment remains {}.",
            p.pick(&[
                "positive with continued interest",
                "cautious due to market uncertainty",
                "mixed with varying perspectives",
                "attentive to emerging developments",
            ])
        ));
    }
    if counts.any(&["trend", "forecast"]) {
        findings.push(format!(
            "Financial forecasts project {} in upcoming quarters.",
            p.pick(&[
                "continued growth",
                "potential challenges",
                "market expansion",
                "variable performance",
            ])
        ));
    }

    let generic = vec![
        format!(
            "Analysis of financial statements reveals {} fundamentals.",
            p.pick(&["strong", "concerning", "stable", "improving"])
        ),
        format!(
            "Competitive positioning within the {lead} market shows {}.",
            p.pick(&[
                "distinct advantages",
                "notable challenges",
                "room for growth",
                "a need for strategic adjustment",
            ])
        ),
        format!(
            "Economic factors such as {} are influencing financial performance.",
            p.pick(&[
                "inflation",
                "interest rates",
                "supply chain disruption",
                "consumer sentiment",
            ])
        ),
        format!(
            "The {} outlook for {q} suggests {}.",
            p.pick(&["short-term", "long-term", "mid-term"]),
            p.pick(&[
                "promising returns",
                "careful planning",
                "strategic repositioning",
                "continued monitoring",
            ])
        ),
        format!(
            "Market share {} compared to key competitors.",
            p.pick(&["has increased", "has decreased", "remains stable", "fluctuates"])
        ),
    ];

    top_up(&mut findings, generic, 5, p);
    numbered(&findings)
}
