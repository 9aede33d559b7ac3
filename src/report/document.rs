//! Markdown assembly and the writer-facing prompts

use super::sections::{ReportSections, Section};
use crate::types::{SearchPackage, SearchResult};

/// Writing guidance attached to every search package
pub const WRITING_INSTRUCTIONS: &str = "\
Develop a comprehensive and engaging report based on all the provided information.

Key requirements:
- Rely primarily on the given data and figures.
- Include any relevant figures such as charts or saved visualizations.
- Organize the report in a structured, professional format.

Financial analysis (if applicable):
- Build a comparative table of fundamental ratios, financial metrics or stock performance.
- Interpret the ratios and stock trends.
- Analyze correlations, risks and investment opportunities.
- Summarize recent financial news and its likely market impact.
- Offer predictions and possible future market scenarios based on the data.

Healthcare and technology analysis (if applicable):
- Summarize breakthroughs, trends and innovations in the field.
- Compare technologies, treatments or companies on the provided metrics.
- Analyze likely future developments and market impact.

Marketing and business analysis (if applicable):
- Evaluate market trends, customer behavior and industry shifts.
- Compare marketing strategies and consumer insights.
- Offer strategic recommendations for growth.

Art and culture, entertainment, sports and top news (if applicable):
- Provide historical context and compare styles or eras.
- Analyze trends in cinema, music, gaming and sport.
- Summarize key headlines and group news by category.

General guidelines:
- Make every data-driven insight clear and well explained.
- Write in a professional, analytical tone.
- Close with a concise conclusion of the key takeaways.";

const FOOTER: &str = "*This report was automatically generated by the Argus multi-agent search engine*";

/// Render results as numbered plain-text records.
pub fn format_results(results: &[SearchResult]) -> String {
    results
        .iter()
        .enumerate()
        .map(|(i, result)| {
            format!(
                "\nResult {}:\nTitle: {}\nLink: {}\nSnippet: {}\n---\n",
                i + 1,
                result.title,
                result.link,
                result.snippet
            )
        })
        .collect()
}

/// Assemble the final markdown document.
pub fn assemble(
    query: &str,
    date: &str,
    results: &[SearchResult],
    sections: &ReportSections,
) -> String {
    let mut out = String::new();
    out.push_str(&format!("# Comprehensive Research Report: {}\n", query));
    out.push_str(&format!("**Generated on:** {}\n\n", date));

    for section in Section::ALL {
        if section == Section::Background {
            out.push_str("## Detailed Analysis\n\n");
        }
        out.push_str(&section.heading());
        out.push('\n');
        if section == Section::ExecutiveSummary {
            out.push_str(&format!(
                "This report provides an in-depth analysis of \"{}\" based on information \
                 gathered from {} different sources. The research examines key developments, \
                 current trends, expert opinions, and future projections related to this topic.\n\n",
                query,
                results.len()
            ));
        }
        out.push_str(sections.get(section));
        out.push_str("\n\n");
    }

    out.push_str("## Sources\n");
    out.push_str("The following sources were consulted for this report:\n");
    out.push_str(&format_results(results));
    out.push_str("\n---\n");
    out.push_str(FOOTER);
    out.push('\n');
    out
}

/// Opening message for the live writer conversation.
pub fn writer_prompt(package: &SearchPackage) -> String {
    format!(
        "# REPORT GENERATION TASK\n\n\
         ## Search Information\n\
         - Query: {}\n\
         - Date: {}\n\
         - Number of results: {}\n\n\
         ## Search Results\n{}\n\
         ## Report Instructions\n{}\n\n\
         Please generate a comprehensive, well-structured report based on the search results above.\n\
         Organize the information clearly with proper headings, subheadings, and markdown formatting.\n\
         Include relevant insights, analysis, and recommendations where appropriate.\n",
        package.topic,
        package.date,
        package.results.len(),
        format_results(&package.results),
        package.instructions
    )
}

/// Prompt for the task assistant.
pub fn task_prompt(topic: &str, date: &str) -> String {
    format!(
        "Today is {date}.\n\
         You are an AI agent that retrieves, analyzes and summarizes information across domains \
         such as stock markets, finance, marketing, technology and healthcare.\n\n\
         ### Your Tasks:\n\
         1. Information Retrieval:\n\
         \x20  - Search for the latest news headlines and trends related to: {topic}\n\
         \x20  - Retrieve at least 10 relevant headlines for the topic.\n\
         \x20  - If the first results are unclear, refine the query and retry.\n\
         \x20  - Do not use services that require an API key.\n\n\
         2. Detailed Report Generation:\n\
         \x20  - Provide a well-structured summary of the retrieved information.\n\
         \x20  - Include relevant data points, key insights and explanations.\n\n\
         3. Data Visualization:\n\
         \x20  - Generate and save visualizations based on the retrieved data.\n\
         \x20  - Plot price trends for stock topics and statistical insights for healthcare topics.\n\n\
         4. Search Engine Behavior:\n\
         \x20  - Fetch reliable information across domains.\n\
         \x20  - Verify sources before presenting data.\n\n\
         Rules & Constraints:\n\
         - Do not use APIs that require an API key.\n\
         - If data is unclear or incomplete, refine the search query and try again.\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SourceKind;

    fn sample() -> Vec<SearchResult> {
        vec![
            SearchResult::new("First", "https://one.example", "alpha", SourceKind::GeneralWeb),
            SearchResult::new("Second", "https://two.example", "beta", SourceKind::News),
        ]
    }

    fn filled() -> ReportSections {
        ReportSections {
            executive_summary: "summary".into(),
            key_findings: "1. finding".into(),
            background: "background".into(),
            trends: "trends".into(),
            expert_insights: "experts".into(),
            technical_details: "details".into(),
            impact: "impact".into(),
            data_analysis: "data".into(),
            future_outlook: "outlook".into(),
            recommendations: "recommend".into(),
            conclusion: "conclusion".into(),
        }
    }

    #[test]
    fn test_format_results() {
        let text = format_results(&sample());
        assert!(text.contains(
            "Result 1:\nTitle: First\nLink: https://one.example\nSnippet: alpha\n---"
        ));
        assert!(text.contains("Result 2:\nTitle: Second"));
        assert_eq!(format_results(&[]), "");
    }

    #[test]
    fn test_assemble_layout() {
        let doc = assemble("castles", "2026-01-02", &sample(), &filled());
        assert!(doc.starts_with(
            "# Comprehensive Research Report: castles\n**Generated on:** 2026-01-02"
        ));
        assert!(doc.contains("based on information gathered from 2 different sources"));

        let detailed = doc.find("## Detailed Analysis").unwrap();
        let background = doc.find("### Current State & Background").unwrap();
        let data = doc.find("## Data Analysis").unwrap();
        assert!(detailed < background && background < data);

        let sources = doc.rfind("## Sources").unwrap();
        assert!(doc[sources..].contains("https://one.example"));
        assert!(doc.trim_end().ends_with(FOOTER));
    }

    #[test]
    fn test_writer_prompt() {
        let package = SearchPackage {
            topic: "castles".into(),
            date: "2026-01-02".into(),
            results: sample(),
            instructions: WRITING_INSTRUCTIONS.into(),
        };
        let prompt = writer_prompt(&package);
        assert!(prompt.starts_with("# REPORT GENERATION TASK"));
        assert!(prompt.contains("- Query: castles"));
        assert!(prompt.contains("- Number of results: 2"));
        assert!(prompt.contains("## Report Instructions\nDevelop a comprehensive"));
    }

    #[test]
    fn test_task_prompt() {
        let prompt = task_prompt("castles", "2026-01-02");
        assert!(prompt.starts_with("Today is 2026-01-02."));
        assert!(prompt.contains("trends related to: castles"));
    }
}
