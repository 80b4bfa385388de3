use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Overall polarity of a review as reported by the prediction service.
///
/// Labels outside the known three are kept verbatim so the page can still
/// show them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
    Other(String),
}

impl SentimentLabel {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
            Self::Neutral => "Neutral",
            Self::Other(raw) => raw,
        }
    }

    /// Badge glyph. Unknown labels share the Positive glyph.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Negative => "😞",
            Self::Neutral => "😐",
            Self::Positive | Self::Other(_) => "😊",
        }
    }

    pub fn css_class(&self) -> String {
        self.as_str().to_lowercase()
    }
}

impl From<String> for SentimentLabel {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Positive" => Self::Positive,
            "Negative" => Self::Negative,
            "Neutral" => Self::Neutral,
            _ => Self::Other(raw),
        }
    }
}

impl From<SentimentLabel> for String {
    fn from(label: SentimentLabel) -> Self {
        label.as_str().to_string()
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AspectSentiment {
    Positive,
    Negative,
    Neutral,
    #[serde(rename = "Not Mentioned", alias = "NotMentioned")]
    NotMentioned,
}

impl AspectSentiment {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
            Self::Neutral => "Neutral",
            Self::NotMentioned => "Not Mentioned",
        }
    }

    pub fn is_mentioned(self) -> bool {
        self != Self::NotMentioned
    }

    pub fn css_class(self) -> String {
        self.as_str().to_lowercase()
    }
}

impl fmt::Display for AspectSentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub sentiment: SentimentLabel,
    #[serde(default)]
    pub aspects: BTreeMap<String, AspectSentiment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_sentiment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heuristic_sentiment: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CategoryCounts {
    #[serde(rename = "Positive")]
    pub positive: u64,
    #[serde(rename = "Negative")]
    pub negative: u64,
    #[serde(rename = "Neutral")]
    pub neutral: u64,
}

impl CategoryCounts {
    pub fn total(&self) -> u64 {
        self.positive + self.negative + self.neutral
    }

    /// Chart series order: Positive, Negative, Neutral.
    pub fn series(&self) -> [(&'static str, u64); 3] {
        [
            ("Positive", self.positive),
            ("Negative", self.negative),
            ("Neutral", self.neutral),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AspectTag {
    pub name: String,
    pub sentiment: AspectSentiment,
}

impl AspectTag {
    pub fn css_class(&self) -> String {
        format!("aspect-tag {}", self.sentiment.css_class())
    }
}

#[derive(Debug, Serialize)]
pub struct PredictRequest<'a> {
    pub text: &'a str,
}

/// Body returned by the prediction service. An `error` field wins over
/// everything else, whatever the HTTP status was.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Prediction {
    ServiceError { error: String },
    Analysis(AnalysisResult),
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub sentiment: String,
    pub icon: String,
    pub badge_class: String,
    pub aspects: Vec<AspectView>,
    pub counts: CategoryCounts,
    pub total_analyses: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AspectView {
    pub name: String,
    pub sentiment: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionResponse {
    pub total_analyses: u64,
    pub started_at: String,
    pub phase: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prediction_with_error_field_is_service_error() {
        let body = r#"{"error": "text too short", "sentiment": "Positive", "aspects": {}}"#;
        let parsed: Prediction = serde_json::from_str(body).unwrap();
        assert_eq!(
            parsed,
            Prediction::ServiceError {
                error: "text too short".into()
            }
        );
    }

    #[test]
    fn prediction_accepts_both_not_mentioned_spellings() {
        let body = r#"{
            "sentiment": "Positive",
            "model_sentiment": "Positive",
            "aspects": {"battery": "Positive", "screen": "Not Mentioned", "price": "NotMentioned"}
        }"#;
        let Prediction::Analysis(result) = serde_json::from_str::<Prediction>(body).unwrap() else {
            panic!("expected analysis");
        };
        assert_eq!(result.sentiment, SentimentLabel::Positive);
        assert_eq!(result.aspects["screen"], AspectSentiment::NotMentioned);
        assert_eq!(result.aspects["price"], AspectSentiment::NotMentioned);
        assert_eq!(result.model_sentiment.as_deref(), Some("Positive"));
    }

    #[test]
    fn unknown_sentiment_label_falls_back_to_positive_glyph() {
        let label = SentimentLabel::from("Mixed".to_string());
        assert_eq!(label, SentimentLabel::Other("Mixed".into()));
        assert_eq!(label.icon(), SentimentLabel::Positive.icon());
        assert_eq!(label.css_class(), "mixed");
    }

    #[test]
    fn unparsable_body_is_rejected() {
        assert!(serde_json::from_str::<Prediction>(r#"{"sentiment": 3}"#).is_err());
        assert!(serde_json::from_str::<Prediction>("<html>").is_err());
    }
}
