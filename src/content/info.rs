//! Quick-info page content

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{PageContent, Rule, Schema, Seo, heading, seo_lines};
use crate::client::ContentKey;
use crate::output::Formattable;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InfoContent {
    pub seo: Seo,
    pub heading: String,
    pub lead: String,
    pub faqs: Vec<Faq>,
    pub process: Process,
    pub why_us: WhyUs,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Process {
    pub title: String,
    pub steps: Vec<ProcessStep>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessStep {
    pub num: String,
    pub label: String,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WhyUs {
    pub title: String,
    pub points: Vec<Point>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Point {
    pub label: String,
    pub note: String,
}

fn faq(question: &str, answer: &str) -> Faq {
    Faq {
        question: question.to_string(),
        answer: answer.to_string(),
    }
}

fn step(num: &str, label: &str, note: &str) -> ProcessStep {
    ProcessStep {
        num: num.to_string(),
        label: label.to_string(),
        note: note.to_string(),
    }
}

fn point(label: &str, note: &str) -> Point {
    Point {
        label: label.to_string(),
        note: note.to_string(),
    }
}

impl Default for InfoContent {
    fn default() -> Self {
        Self {
            seo: Seo::new(
                "Quick Info - Qoyy Global",
                "Answers for every question. Explore our services, process, and support for your marketing and creative needs.",
            ),
            heading: "ANSWERS FOR EVERY QUESTION".to_string(),
            lead: "Explore our services, process, and support for your marketing and creative needs.".to_string(),
            faqs: vec![
                faq(
                    "Which services are available?",
                    "We offer comprehensive media monitoring and public relations services including real-time brand monitoring, sentiment analysis, crisis management, press release distribution, media relations, strategic communication, digital PR, and government relations. Our services are tailored to meet the specific needs of government agencies and corporate brands across various industries.",
                ),
                faq(
                    "Who do you usually work with?",
                    "Our client base includes government agencies, corporate brands, and organizations across various sectors. We have extensive experience working with both public and private sector clients, understanding the unique challenges and opportunities that each sector presents. Our team is equipped to handle projects of all sizes, from small businesses to large multinational corporations.",
                ),
                faq(
                    "How fast is project delivery?",
                    "Project timelines vary depending on complexity and scope. Media monitoring services can be implemented within 24-48 hours, while comprehensive PR campaigns typically take 2-4 weeks to develop and launch. Crisis management responses are immediate, with 24/7 support available. We provide detailed timelines during our initial consultation and maintain regular communication throughout the project lifecycle.",
                ),
                faq(
                    "How can I get a proposal?",
                    "Getting a proposal is simple. You can contact us via WhatsApp for quick responses or email for detailed discussions. We'll schedule a consultation to understand your specific needs, challenges, and objectives. Based on this discussion, we'll provide a comprehensive proposal including strategy, timeline, deliverables, and investment. Our proposals are detailed and transparent, with no hidden costs.",
                ),
            ],
            process: Process {
                title: "Our Process".to_string(),
                steps: vec![
                    step("1.", "Discovery & Analysis", "Understanding your needs and market position"),
                    step("2.", "Strategy Development", "Creating tailored solutions and approaches"),
                    step("3.", "Implementation", "Executing campaigns and monitoring results"),
                    step("4.", "Optimization", "Continuous improvement and performance tracking"),
                ],
            },
            why_us: WhyUs {
                title: "Why Choose Us".to_string(),
                points: vec![
                    point("Proven Track Record", "Success with government and corporate clients"),
                    point("24/7 Support", "Round-the-clock crisis management"),
                    point("Transparent Reporting", "Clear metrics and ROI measurement"),
                    point("Custom Solutions", "Tailored strategies for your specific needs"),
                ],
            },
        }
    }
}

impl PageContent for InfoContent {
    const KEY: ContentKey = ContentKey::Info;

    fn schema() -> Schema {
        Schema::new()
            .field("seo", Seo::rule())
            .field("heading", Rule::Text)
            .field("lead", Rule::Text)
            .field(
                "faqs",
                Rule::Items {
                    item: Schema::new()
                        .field("question", Rule::Text)
                        .field("answer", Rule::Text),
                    defaults: |_| json!({"question": "Question", "answer": "Answer"}),
                },
            )
            .field(
                "process",
                Rule::Complete(Schema::new().field("title", Rule::Text).field(
                    "steps",
                    Rule::Items {
                        item: Schema::new()
                            .field("num", Rule::Text)
                            .field("label", Rule::Text)
                            .field("note", Rule::Text),
                        defaults: |index| json!({"num": format!("{}.", index + 1), "label": "", "note": ""}),
                    },
                )),
            )
            .field(
                "whyUs",
                Rule::Complete(Schema::new().field("title", Rule::Text).field(
                    "points",
                    Rule::Items {
                        item: Schema::new()
                            .field("label", Rule::Text)
                            .field("note", Rule::Text),
                        defaults: |_| json!({"label": "", "note": ""}),
                    },
                )),
            )
    }
}

impl Formattable for InfoContent {
    fn pretty(&self) -> String {
        let mut out = format!(
            "{}\n{}\n\n{}\n{}\n",
            heading("Info"),
            seo_lines(&self.seo),
            self.heading,
            self.lead
        );

        for faq in &self.faqs {
            out.push_str(&format!("\nQ: {}\nA: {}\n", faq.question, faq.answer));
        }

        out.push_str(&format!("\n{}\n", heading(&self.process.title)));
        for step in &self.process.steps {
            out.push_str(&format!("{} {} ({})\n", step.num, step.label, step.note));
        }

        out.push_str(&format!("\n{}\n", heading(&self.why_us.title)));
        for point in &self.why_us.points {
            out.push_str(&format!("• {}: {}\n", point.label, point.note));
        }

        out.trim_end().to_string()
    }
}
