use crate::report::domain::TopicContext;
use crate::report::phrases::{Phrases, numbered, top_up};
use crate::report::sections::ReportSections;
use rand::Rng;

pub(crate) fn sections<R: Rng>(ctx: &TopicContext, p: &mut Phrases<'_, R>) -> ReportSections {
    let q = ctx.query.as_str();

    ReportSections {
        executive_summary: format!(
            "This report examines {q} from a healthcare perspective. Current evidence points to \
             {} developments, with implications for patient outcomes, clinical practice and \
             public health policy.",
            p.pick(&["encouraging", "significant", "mixed", "rapidly evolving"])
        ),
        key_findings: key_findings(ctx, p),
        background: format!(
            "Research into {q} has expanded considerably over the past {} years. Early work \
             focused on {}, while more recent studies have shifted toward {}.\n\n\
             The field is shaped by {} and by the growing availability of {}.",
            p.int(5, 20),
            p.pick(&[
                "basic mechanisms",
                "observational data",
                "small pilot studies",
                "symptom management",
            ]),
            p.pick(&[
                "large randomized trials",
                "personalized approaches",
                "preventive strategies",
                "long-term outcomes",
            ]),
            p.pick(&[
                "regulatory oversight",
                "funding priorities",
                "public health needs",
                "advances in diagnostics",
            ]),
            p.pick(&[
                "real-world evidence",
                "genomic data",
                "digital health records",
                "wearable monitoring",
            ]),
        ),
        trends: [
            format!(
                "**{} Care**: Providers are moving toward {}.",
                p.pick(&["Personalized", "Preventive", "Integrated", "Value-Based"]),
                p.pick(&[
                    "treatment plans tailored to individual risk",
                    "earlier intervention",
                    "coordinated multidisciplinary teams",
                    "outcome-linked reimbursement",
                ]),
            ),
            format!(
                "**Digital Health**: {} is {} how patients are monitored.",
                p.pick(&["Telemedicine", "Remote monitoring", "AI-assisted diagnosis"]),
                p.pick(&["reshaping", "accelerating", "complementing"]),
            ),
            format!(
                "**Research Pipeline**: {} new studies are {} in this area.",
                p.pick(&["Several", "Numerous", "A growing number of"]),
                p.pick(&["underway", "recruiting participants", "reporting interim results"]),
            ),
        ]
        .join("\n\n"),
        expert_insights: [
            format!(
                "**Clinical Perspective**: {} emphasize that {}.",
                p.pick(&["Physicians", "Clinical researchers", "Specialists"]),
                p.pick(&[
                    "evidence quality remains the deciding factor",
                    "patient selection strongly affects outcomes",
                    "long-term follow-up is still needed",
                ]),
            ),
            format!(
                "**Public Health View**: {} note that {} will determine population impact.",
                p.pick(&["Epidemiologists", "Health economists", "Policy advisers"]),
                p.pick(&[
                    "access and affordability",
                    "uptake rates",
                    "equitable distribution",
                ]),
            ),
        ]
        .join("\n\n"),
        technical_details: format!(
            "**Clinical Indicators**:\n\
             - Reported Efficacy: {}%\n\
             - Adverse Event Rate: {}%\n\
             - Median Follow-up: {} months\n\
             - Study Population: {} participants\n\n\
             **Regulatory Status**:\n\
             - {}",
            p.float(60.0, 95.0, 1),
            p.float(1.0, 15.0, 1),
            p.int(6, 48),
            p.int(200, 20_000),
            p.pick(&[
                "Approved for general use",
                "Under regulatory review",
                "Approved with conditions",
                "In late-stage trials",
            ]),
        ),
        impact: format!(
            "**For Patients**:\n- {}\n\n\
             **For Providers**:\n- {}\n\n\
             **For Health Systems**:\n- {}",
            p.pick(&[
                "Improved quality of life",
                "More treatment options",
                "Earlier diagnosis",
            ]),
            p.pick(&[
                "Updated clinical guidelines",
                "New training requirements",
                "Changes to care pathways",
            ]),
            p.pick(&[
                "Shifts in resource allocation",
                "Potential cost savings",
                "Pressure on capacity",
            ]),
        ),
        data_analysis: format!(
            "Available data on {q} shows {} across studies, with {} between populations. \
             Confidence in the findings is {}.",
            p.pick(&["consistent results", "variable results", "a clear signal"]),
            p.pick(&["notable differences", "modest differences", "little variation"]),
            p.pick(&["high", "moderate", "still developing"]),
        ),
        future_outlook: format!(
            "Over the next few years, {q} is expected to see {}. Key uncertainties include {}.",
            p.pick(&[
                "broader adoption",
                "refined treatment protocols",
                "expanded research funding",
            ]),
            p.pick(&[
                "long-term safety",
                "cost effectiveness",
                "access in underserved regions",
            ]),
        ),
        recommendations: [
            format!(
                "**For Clinicians**: {} the latest guidance on {q}.",
                p.pick(&["Review", "Stay current with", "Incorporate"])
            ),
            format!(
                "**For Patients**: {} with a healthcare provider before {}.",
                p.pick(&["Discuss options", "Consult"]),
                p.pick(&["starting treatment", "making changes", "enrolling in a trial"]),
            ),
            format!(
                "**For Policymakers**: {} to improve {}.",
                p.pick(&["Invest in research", "Support data sharing", "Fund access programs"]),
                p.pick(&["equity", "outcomes", "preparedness"]),
            ),
        ]
        .join("\n\n"),
        conclusion: format!(
            "{q} remains an active area of healthcare research with {} implications. \
             Continued {} will be essential to translate evidence into better care.",
            p.pick(&["important", "wide-ranging", "significant"]),
            p.pick(&[
                "clinical investigation",
                "monitoring",
                "collaboration between researchers and providers",
            ]),
        ),
    }
}

fn key_findings<R: Rng>(ctx: &TopicContext, p: &mut Phrases<'_, R>) -> String {
    let q = ctx.query.as_str();
    let counts = &ctx.counts;
    let mut findings = Vec::new();

    if counts.any(&["treatment", "therapy"]) {
        findings.push(format!(
            "Treatment approaches show {} in recent evaluations.",
            p.pick(&[
                "promising efficacy",
                "variable outcomes",
                "improved tolerability",
                "room for refinement",
            ])
        ));
    }
    if counts.any(&["clinical", "trial"]) {
        findings.push(format!(
            "Clinical trials report {}.",
            p.pick(&[
                "statistically significant benefits",
                "encouraging preliminary data",
                "mixed endpoints",
                "results pending peer review",
            ])
        ));
    }
    if counts.any(&["patient"]) {
        findings.push(format!(
            "Patient outcomes indicate {}.",
            p.pick(&[
                "measurable improvement",
                "differences across age groups",
                "high satisfaction",
                "the need for closer follow-up",
            ])
        ));
    }
    if counts.any(&["vaccine"]) {
        findings.push(format!(
            "Vaccine data suggests {}.",
            p.pick(&[
                "a strong protective effect",
                "waning immunity over time",
                "a good safety profile",
                "value in booster schedules",
            ])
        ));
    }

    let generic = vec![
        format!(
            "Research on {q} has {} in the past year.",
            p.pick(&["accelerated", "broadened", "intensified"])
        ),
        format!(
            "Healthcare providers report {} when applying current guidance.",
            p.pick(&["consistent benefits", "practical challenges", "mixed experiences"])
        ),
        format!(
            "Access to care varies {} by region.",
            p.pick(&["considerably", "moderately", "significantly"])
        ),
        format!(
            "Regulatory agencies have {} their position.",
            p.pick(&["updated", "reaffirmed", "begun reviewing"])
        ),
        format!(
            "Public awareness of {q} is {}.",
            p.pick(&["growing", "uneven", "high"])
        ),
    ];

    top_up(&mut findings, generic, 5, p);
    numbered(&findings)
}
