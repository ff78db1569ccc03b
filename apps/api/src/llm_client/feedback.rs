//! Typed shape of the feedback reply and the decode step that produces it.

use serde::{Deserialize, Serialize};

use crate::llm_client::LlmError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackCategory {
    Skills,
    Experience,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackItem {
    pub category: FeedbackCategory,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Feedback {
    #[serde(default)]
    pub matching_keywords: Vec<String>,
    #[serde(default)]
    pub feedback: Vec<FeedbackItem>,
}

/// Decodes model output into [`Feedback`].
///
/// The model is asked for bare JSON but often wraps it in prose or code
/// fences, so everything before the first `{` and after the last `}` is
/// discarded first. Keywords are then cleaned: blanks dropped, first letter
/// uppercased.
pub fn decode_feedback(text: &str) -> Result<Feedback, LlmError> {
    let json = outermost_object(text).ok_or_else(|| {
        LlmError::MalformedResponse("no JSON object in model output".to_string())
    })?;

    let mut feedback: Feedback = serde_json::from_str(json)
        .map_err(|e| LlmError::MalformedResponse(format!("feedback JSON did not decode: {e}")))?;

    feedback.matching_keywords = feedback
        .matching_keywords
        .iter()
        .map(|k| k.trim())
        .filter(|k| !k.is_empty())
        .map(capitalize_first)
        .collect();

    Ok(feedback)
}

fn outermost_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (start < end).then(|| &text[start..=end])
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
