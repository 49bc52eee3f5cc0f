//! QA correctness judge (`bedrock` feature)
//!
//! Implements `CorrectnessJudgePort` by prompting a Bedrock model to grade
//! a predicted answer against the reference as CORRECT or INCORRECT, then
//! parsing the verdict out of the free-form response. Parsing is
//! conservative: an ambiguous response grades as incorrect.

use crate::providers::bedrock::types;
use async_trait::async_trait;
use aws_sdk_bedrockruntime::Client as BedrockClient;
use aws_sdk_bedrockruntime::types as bedrock;
use gauge_application::{CorrectnessJudgePort, JudgeError, Judgment};
use std::sync::Arc;
use tracing::debug;

pub struct QaJudge {
    client: Arc<BedrockClient>,
    model_id: String,
    max_tokens: i32,
}

impl QaJudge {
    pub fn new(client: Arc<BedrockClient>, model_id: impl Into<String>, max_tokens: i32) -> Self {
        Self {
            client,
            model_id: model_id.into(),
            max_tokens,
        }
    }

    fn grading_prompt(input: &str, prediction: &str, reference: &str) -> String {
        format!(
            "You are a teacher grading a quiz. You are given a question, the student's \
             answer, and the true answer. Grade the student answer based only on factual \
             accuracy relative to the true answer; ignore differences in punctuation and \
             phrasing.\n\n\
             QUESTION: {}\n\
             STUDENT ANSWER: {}\n\
             TRUE ANSWER: {}\n\n\
             Reply with GRADE: CORRECT or GRADE: INCORRECT on the first line, followed by \
             a brief explanation.",
            input, prediction, reference
        )
    }

    async fn converse(&self, prompt: String) -> Result<String, JudgeError> {
        let message = bedrock::Message::builder()
            .role(bedrock::ConversationRole::User)
            .content(bedrock::ContentBlock::Text(prompt))
            .build()
            .map_err(|e| JudgeError::RequestFailed(format!("Failed to build message: {}", e)))?;

        debug!(model = %self.model_id, "Calling Bedrock for grading");

        let response = self
            .client
            .converse()
            .model_id(&self.model_id)
            .messages(message)
            .inference_config(
                bedrock::InferenceConfiguration::builder()
                    .max_tokens(self.max_tokens)
                    .build(),
            )
            .send()
            .await
            .map_err(|e| JudgeError::RequestFailed(types::convert_converse_error(&e)))?;

        let stop_reason = response.stop_reason();
        let output = response
            .output()
            .ok_or_else(|| JudgeError::RequestFailed("No output in Bedrock response".to_string()))?;

        Ok(types::convert_converse_output(output, stop_reason, &self.model_id).text_content())
    }
}

#[async_trait]
impl CorrectnessJudgePort for QaJudge {
    async fn evaluate(
        &self,
        input: &str,
        prediction: &str,
        reference: &str,
    ) -> Result<Judgment, JudgeError> {
        let prompt = Self::grading_prompt(input, prediction, reference);
        let response = self.converse(prompt).await?;
        let score = parse_grade(&response);

        Ok(Judgment {
            score,
            rationale: response,
        })
    }
}

/// Parse a grading response into a binary correctness score.
///
/// Checks INCORRECT before CORRECT since the former contains the latter.
/// Defaults to 0.0 when neither verdict keyword appears.
pub fn parse_grade(response: &str) -> f64 {
    let upper = response.to_uppercase();

    if upper.contains("INCORRECT") {
        return 0.0;
    }
    if upper.contains("CORRECT") {
        return 1.0;
    }

    0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_grade_correct() {
        assert_eq!(parse_grade("GRADE: CORRECT\nThe sum matches."), 1.0);
        assert_eq!(parse_grade("The answer is correct."), 1.0);
    }

    #[test]
    fn test_parse_grade_incorrect() {
        assert_eq!(parse_grade("GRADE: INCORRECT\nWrong sum."), 0.0);
        assert_eq!(parse_grade("This is incorrect."), 0.0);
    }

    #[test]
    fn test_parse_grade_ambiguous_defaults_to_incorrect() {
        assert_eq!(parse_grade("I cannot grade this."), 0.0);
        assert_eq!(parse_grade(""), 0.0);
    }

    #[test]
    fn test_grading_prompt_contains_fields() {
        let prompt = QaJudge::grading_prompt("What is 10 + 5?", "15", "15");
        assert!(prompt.contains("QUESTION: What is 10 + 5?"));
        assert!(prompt.contains("STUDENT ANSWER: 15"));
        assert!(prompt.contains("TRUE ANSWER: 15"));
    }
}
