use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtsScore {
    pub score: f64,
    #[serde(default)]
    pub explanation: String,
}

impl AtsScore {
    /// `8` rather than `8.0` for whole scores.
    pub fn score_label(&self) -> String {
        if self.score.fract() == 0.0 {
            format!("{:.0}", self.score)
        } else {
            format!("{:.1}", self.score)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeAnalysis {
    #[serde(default)]
    pub ats_score: Option<AtsScore>,
    #[serde(default)]
    pub resume_improvements: Vec<String>,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Resource {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobAnalysis {
    /// Markdown.
    #[serde(default)]
    pub skills_required: String,
    #[serde(default)]
    pub resources: Vec<Resource>,
    /// Markdown.
    #[serde(default)]
    pub career_growth: String,
}
