use serde::Serialize;

/// The eleven body sections of a report, in document order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    ExecutiveSummary,
    KeyFindings,
    Background,
    Trends,
    ExpertInsights,
    TechnicalDetails,
    Impact,
    DataAnalysis,
    FutureOutlook,
    Recommendations,
    Conclusion,
}

impl Section {
    pub const ALL: [Section; 11] = [
        Section::ExecutiveSummary,
        Section::KeyFindings,
        Section::Background,
        Section::Trends,
        Section::ExpertInsights,
        Section::TechnicalDetails,
        Section::Impact,
        Section::DataAnalysis,
        Section::FutureOutlook,
        Section::Recommendations,
        Section::Conclusion,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Section::ExecutiveSummary => "Executive Summary",
            Section::KeyFindings => "Key Findings",
            Section::Background => "Current State & Background",
            Section::Trends => "Major Developments & Trends",
            Section::ExpertInsights => "Expert Insights & Perspectives",
            Section::TechnicalDetails => "Technical Details & Specifications",
            Section::Impact => "Impact & Implications",
            Section::DataAnalysis => "Data Analysis",
            Section::FutureOutlook => "Future Outlook",
            Section::Recommendations => "Recommendations",
            Section::Conclusion => "Conclusion",
        }
    }

    /// Subsections of "Detailed Analysis" render one level deeper
    pub fn is_detail(&self) -> bool {
        matches!(
            self,
            Section::Background
                | Section::Trends
                | Section::ExpertInsights
                | Section::TechnicalDetails
                | Section::Impact
        )
    }

    pub fn heading(&self) -> String {
        let level = if self.is_detail() { "###" } else { "##" };
        format!("{} {}", level, self.title())
    }
}

/// Filled section bodies
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReportSections {
    pub executive_summary: String,
    pub key_findings: String,
    pub background: String,
    pub trends: String,
    pub expert_insights: String,
    pub technical_details: String,
    pub impact: String,
    pub data_analysis: String,
    pub future_outlook: String,
    pub recommendations: String,
    pub conclusion: String,
}

impl ReportSections {
    pub fn get(&self, section: Section) -> &str {
        match section {
            Section::ExecutiveSummary => &self.executive_summary,
            Section::KeyFindings => &self.key_findings,
            Section::Background => &self.background,
            Section::Trends => &self.trends,
            Section::ExpertInsights => &self.expert_insights,
            Section::TechnicalDetails => &self.technical_details,
            Section::Impact => &self.impact,
            Section::DataAnalysis => &self.data_analysis,
            Section::FutureOutlook => &self.future_outlook,
            Section::Recommendations => &self.recommendations,
            Section::Conclusion => &self.conclusion,
        }
    }

    /// Sections whose body is empty or whitespace
    pub fn blank_sections(&self) -> Vec<Section> {
        Section::ALL
            .into_iter()
            .filter(|section| self.get(*section).trim().is_empty())
            .collect()
    }
}
