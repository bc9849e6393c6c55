//! Title, hashtag and content-idea suggestions.

use serde::{Deserialize, Serialize};
use tracing::warn;

use trendpulse_types::models::ContentIdea;

use crate::client::{CompletionClient, CompletionOptions, strip_code_fences};
use crate::types::Message;

/// The shape the dashboard renders for a suggestion request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionResult {
    pub titles: Vec<String>,
    pub tags: Vec<String>,
    pub content_ideas: Vec<ContentIdea>,
}

/// Generate suggestions for a topic/platform/style triple.
///
/// Any backend failure or unparsable reply is logged and replaced by the
/// deterministic fallback, so a valid request always yields a result.
pub async fn generate_suggestions(
    client: &dyn CompletionClient,
    options: &CompletionOptions,
    topic: &str,
    platform: &str,
    style: &str,
) -> SuggestionResult {
    let messages = suggestion_messages(topic, platform, style);

    match client.complete(&messages, options).await {
        Ok(text) => match parse_suggestions(&text) {
            Ok(result) => return result,
            Err(e) => warn!(
                backend = client.name(),
                error = %e,
                "Unparsable suggestion completion, using fallback"
            ),
        },
        Err(e) => warn!(
            backend = client.name(),
            error = %e,
            "Suggestion completion failed, using fallback"
        ),
    }

    fallback_suggestions(topic, platform)
}

fn suggestion_messages(topic: &str, platform: &str, style: &str) -> Vec<Message> {
    vec![
        Message::system(
            "You are a content strategist for short-form and long-form video creators. \
             Reply with a single JSON object of the form {\"titles\": [5 strings], \
             \"tags\": [8 hashtag strings], \"contentIdeas\": [3 objects with \"title\", \
             \"description\" and \"engagement\" fields]}.",
        ),
        Message::user(format!(
            "Suggest video titles, hashtags and content ideas for the topic \"{}\" \
             on {} in a {} style.",
            topic, platform, style
        )),
    ]
}

fn parse_suggestions(text: &str) -> Result<SuggestionResult, serde_json::Error> {
    serde_json::from_str(strip_code_fences(text))
}

/// Locally computed suggestions served when the completion backend is
/// unavailable. Same input always yields the same output.
pub fn fallback_suggestions(topic: &str, platform: &str) -> SuggestionResult {
    let topic = topic.trim();
    let stem = hashtag_stem(topic);

    SuggestionResult {
        titles: vec![
            format!("10 {} Secrets Nobody Talks About", topic),
            format!("I Tried {} for 30 Days and This Happened", topic),
            format!("The Ultimate {} Guide for Beginners", topic),
            format!("Why Everyone Is Getting {} Wrong", topic),
            format!("{} Mistakes You Need to Stop Making", topic),
        ],
        tags: vec![
            format!("#{}", stem),
            format!("#{}tips", stem),
            "#viral".to_string(),
            "#trending".to_string(),
            "#fyp".to_string(),
            "#contentcreator".to_string(),
            "#howto".to_string(),
            format!("#{}", hashtag_stem(platform)),
        ],
        content_ideas: vec![
            ContentIdea {
                title: format!("Beginner's guide to {}", topic),
                description: format!(
                    "Walk through the basics of {} step by step and end on one \
                     actionable takeaway viewers can try today.",
                    topic
                ),
                engagement: "High".to_string(),
            },
            ContentIdea {
                title: format!("{} myths, debunked", topic),
                description: format!(
                    "Pick the three most repeated claims about {} and test them \
                     on camera.",
                    topic
                ),
                engagement: "Medium".to_string(),
            },
            ContentIdea {
                title: format!("A week of {}", topic),
                description: format!(
                    "Document seven days of {} as a diary-style series with a \
                     before/after comparison.",
                    topic
                ),
                engagement: "High".to_string(),
            },
        ],
    }
}

/// Lowercased alphanumeric characters only, suitable for a hashtag.
fn hashtag_stem(text: &str) -> String {
    let stem: String = text
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(|c| c.to_lowercase())
        .collect();
    if stem.is_empty() { "content".to_string() } else { stem }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use crate::client::CompletionError;

    use super::*;

    struct FailingClient;

    #[async_trait]
    impl CompletionClient for FailingClient {
        fn name(&self) -> &str {
            "failing"
        }

        async fn complete(
            &self,
            _messages: &[Message],
            _options: &CompletionOptions,
        ) -> Result<String, CompletionError> {
            Err(CompletionError::Connection("no backend".to_string()))
        }
    }

    struct CannedClient(&'static str);

    #[async_trait]
    impl CompletionClient for CannedClient {
        fn name(&self) -> &str {
            "canned"
        }

        async fn complete(
            &self,
            _messages: &[Message],
            _options: &CompletionOptions,
        ) -> Result<String, CompletionError> {
            Ok(self.0.to_string())
        }
    }

    #[test]
    fn fallback_is_deterministic_and_well_formed() {
        let first = fallback_suggestions("yoga", "youtube");
        let second = fallback_suggestions("yoga", "youtube");
        assert_eq!(first, second);

        assert_eq!(first.titles.len(), 5);
        assert_eq!(first.tags.len(), 8);
        assert_eq!(first.content_ideas.len(), 3);
        assert!(first.titles.iter().all(|t| t.contains("yoga") || t.contains("Yoga")));
        assert!(first.tags.contains(&"#yoga".to_string()));
    }

    #[test]
    fn hashtag_stem_drops_non_alphanumerics() {
        assert_eq!(hashtag_stem("Home Workouts!"), "homeworkouts");
        assert_eq!(hashtag_stem("   "), "content");
    }

    #[test]
    fn parse_accepts_plain_and_fenced_json() {
        let body = r##"{"titles": ["a"], "tags": ["#a"], "contentIdeas": [{"title": "t", "description": "d", "engagement": "High"}]}"##;
        let parsed = parse_suggestions(body).unwrap();
        assert_eq!(parsed.titles, vec!["a"]);
        assert_eq!(parsed.content_ideas[0].engagement, "High");

        let fenced = format!("```json\n{}\n```", body);
        assert!(parse_suggestions(&fenced).is_ok());
    }

    #[test]
    fn parse_rejects_wrong_shape() {
        assert!(parse_suggestions(r#"{"suggestions": "text"}"#).is_err());
    }

    #[test]
    fn prompt_mentions_all_inputs() {
        let messages = suggestion_messages("yoga", "tiktok", "funny");
        assert_eq!(messages.len(), 2);
        let user = &messages[1].content;
        assert!(user.contains("yoga"));
        assert!(user.contains("tiktok"));
        assert!(user.contains("funny"));
    }

    #[tokio::test]
    async fn failed_completion_resolves_to_fallback() {
        let result = generate_suggestions(
            &FailingClient,
            &CompletionOptions::default(),
            "yoga",
            "youtube",
            "casual",
        )
        .await;
        assert_eq!(result, fallback_suggestions("yoga", "youtube"));
    }

    #[tokio::test]
    async fn parsed_completion_wins_over_fallback() {
        let canned = CannedClient(
            r##"{"titles": ["from model"], "tags": ["#m"], "contentIdeas": []}"##,
        );
        let result = generate_suggestions(
            &canned,
            &CompletionOptions::default(),
            "yoga",
            "youtube",
            "casual",
        )
        .await;
        assert_eq!(result.titles, vec!["from model"]);
    }

    #[tokio::test]
    async fn garbage_completion_resolves_to_fallback() {
        let canned = CannedClient("not json at all");
        let result = generate_suggestions(
            &canned,
            &CompletionOptions::default(),
            "yoga",
            "youtube",
            "casual",
        )
        .await;
        assert_eq!(result, fallback_suggestions("yoga", "youtube"));
    }
}
