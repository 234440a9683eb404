//! OpenAI-compatible chat-completion client used for course feedback and text comparison.

use crate::domain::model::Course;
use crate::domain::ports::FeedbackService;
use crate::utils::error::{Result, SyllabusError};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const COURSE_ANALYST: &str = "You review university course plans. Answer with a concise summary \
and concrete feedback on the structure of the course.";

const TEXT_COMPARER: &str = "You compare two texts. List only the differences, in a short and \
clear format, without further explanation.";

#[derive(Debug, Clone)]
pub struct ChatFeedbackClient {
    client: Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Deserialize)]
struct ChatReply {
    content: Option<String>,
}

impl ChatFeedbackClient {
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>) -> Result<Self> {
        let client = Client::builder().timeout(Duration::from_secs(60)).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            model: model.into(),
            api_key: None,
        })
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    async fn complete(&self, system: &str, prompt: &str) -> Result<String> {
        let url = format!("{}/chat/completions", self.endpoint);
        let body = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
        };

        tracing::debug!("Requesting chat completion from: {}", url);
        let mut request = self.client.post(&url).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }
        let response = request.send().await?;

        let status = response.status();
        tracing::debug!("Chat completion status: {}", status);
        if !status.is_success() {
            return Err(SyllabusError::FeedbackError {
                message: format!("{} returned {}", url, status),
            });
        }

        let reply: ChatResponse = response.json().await?;
        reply
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or_else(|| SyllabusError::FeedbackError {
                message: "response contained no message content".to_string(),
            })
    }
}

#[async_trait]
impl FeedbackService for ChatFeedbackClient {
    async fn course_feedback(&self, course: &Course) -> Result<String> {
        self.complete(COURSE_ANALYST, &course_prompt(course)).await
    }

    async fn compare_texts(&self, first: &str, second: &str) -> Result<String> {
        let prompt = format!(
            "Compare the two texts below and list the differences, changes and missing words.\n\n\
             Text 1:\n{}\n\nText 2:\n{}",
            first, second
        );
        self.complete(TEXT_COMPARER, &prompt).await
    }
}

/// Markdown-friendly rendering of a course for the analysis prompt.
pub fn course_prompt(course: &Course) -> String {
    let mut prompt = String::from(
        "Analyze this course plan. Give a two or three sentence summary, point out missing \
         sections or unbalanced assessments, and suggest improvements. Answer in markdown.\n\n",
    );
    prompt.push_str(&format!("Title: {}\n", course.title));
    prompt.push_str(&format!("Academic year: {}\n", course.academic_year));
    prompt.push_str(&format!("Language: {}\n", course.language));
    prompt.push_str(&format!("ECTS: {}\n", course.ects));
    prompt.push_str(&format!("Professor: {}\n", course.professor));
    prompt.push_str(&format!(
        "Hours: {} lecture, {} practical, {} lab\n",
        course.lecture_hours, course.practical_hours, course.lab_hours
    ));

    prompt.push_str("Learning outcomes:\n");
    for outcome in &course.learning_outcomes {
        prompt.push_str(&format!("- {} {}\n", outcome.code, outcome.description));
    }
    prompt.push_str("Assessments:\n");
    for assessment in &course.assessments {
        prompt.push_str(&format!(
            "- {}: {}\n",
            assessment.kind.as_str(),
            assessment.method.as_str()
        ));
    }
    prompt.push_str("Teaching methods:\n");
    for method in &course.teaching_methods {
        prompt.push_str(&format!("- {}\n", method.name.as_str()));
    }
    prompt.push_str("Syllabus:\n");
    for topic in &course.syllabus {
        prompt.push_str(&format!("- {} ({}h)\n", topic.topic, topic.hours));
    }
    prompt.push_str("References:\n");
    for reference in &course.references {
        prompt.push_str(&format!("- {} by {}\n", reference.title, reference.author));
    }
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn sample_course() -> Course {
        crate::core::parser::parse(
            "LOGIC\nECTS 6\nSYLLABUS\n4 h Propositions\nREFERENCES\nSmith, Intro to Logic, 2019",
        )
    }

    #[test]
    fn prompt_lists_the_parsed_content() {
        let prompt = course_prompt(&sample_course());
        assert!(prompt.contains("Title: LOGIC"));
        assert!(prompt.contains("ECTS: 6"));
        assert!(prompt.contains("- Propositions (4h)"));
        assert!(prompt.contains("- Intro to Logic by Smith"));
    }

    #[tokio::test]
    async fn returns_the_first_choice_trimmed() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/v1/chat/completions")
                .header("authorization", "Bearer secret")
                .json_body_partial(r#"{"model": "gpt-test"}"#);
            then.status(200).json_body(json!({
                "choices": [{"message": {"role": "assistant", "content": "  ## Summary\nFine.  "}}]
            }));
        });

        let client = ChatFeedbackClient::new(server.url("/v1/"), "gpt-test")
            .unwrap()
            .with_api_key("secret");
        let feedback = client.course_feedback(&sample_course()).await.unwrap();

        mock.assert();
        assert_eq!(feedback, "## Summary\nFine.");
    }

    #[tokio::test]
    async fn compare_texts_sends_both_texts() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/chat/completions")
                .body_contains("first version")
                .body_contains("second version");
            then.status(200)
                .json_body(json!({"choices": [{"message": {"content": "- first → second"}}]}));
        });

        let client = ChatFeedbackClient::new(server.base_url(), "gpt-test").unwrap();
        let diff = client
            .compare_texts("first version", "second version")
            .await
            .unwrap();

        mock.assert();
        assert_eq!(diff, "- first → second");
    }

    #[tokio::test]
    async fn error_status_becomes_feedback_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/chat/completions");
            then.status(500);
        });

        let client = ChatFeedbackClient::new(server.base_url(), "gpt-test").unwrap();
        let err = client.compare_texts("a", "b").await.unwrap_err();
        assert!(matches!(err, SyllabusError::FeedbackError { .. }));
    }

    #[tokio::test]
    async fn empty_choices_are_an_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/chat/completions");
            then.status(200).json_body(json!({"choices": []}));
        });

        let client = ChatFeedbackClient::new(server.base_url(), "gpt-test").unwrap();
        assert!(client.course_feedback(&Course::default()).await.is_err());
    }
}
