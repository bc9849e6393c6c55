//! Viral-potential analysis of pasted content.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::client::{CompletionClient, CompletionOptions, strip_code_fences};
use crate::types::Message;

/// The shape the dashboard renders for an analysis request. Results are
/// ephemeral; nothing is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub viral_score: f64,
    pub optimized_titles: Vec<String>,
    pub viral_tags: Vec<String>,
    pub hook_ideas: Vec<String>,
    pub content_strategy: String,
}

/// Analyze pasted content for viral potential.
///
/// The same failure policy as suggestions applies: any backend failure or
/// unparsable reply resolves to the deterministic fallback. Model scores
/// outside 0..=10 are clamped.
pub async fn analyze_content(
    client: &dyn CompletionClient,
    options: &CompletionOptions,
    content: &str,
    platform: &str,
) -> AnalysisResult {
    let messages = analysis_messages(content, platform);

    match client.complete(&messages, options).await {
        Ok(text) => match parse_analysis(&text) {
            Ok(mut result) => {
                result.viral_score = result.viral_score.clamp(0.0, 10.0);
                return result;
            }
            Err(e) => warn!(
                backend = client.name(),
                error = %e,
                "Unparsable analysis completion, using fallback"
            ),
        },
        Err(e) => warn!(
            backend = client.name(),
            error = %e,
            "Analysis completion failed, using fallback"
        ),
    }

    fallback_analysis(content, platform)
}

fn analysis_messages(content: &str, platform: &str) -> Vec<Message> {
    vec![
        Message::system(
            "You are a viral content analyst. Reply with a single JSON object of the \
             form {\"viralScore\": number between 0 and 10, \"optimizedTitles\": \
             [3 strings], \"viralTags\": [6 hashtag strings], \"hookIdeas\": [3 strings], \
             \"contentStrategy\": string}.",
        ),
        Message::user(format!(
            "Analyze the viral potential of this {} content:\n\n{}",
            platform, content
        )),
    ]
}

fn parse_analysis(text: &str) -> Result<AnalysisResult, serde_json::Error> {
    serde_json::from_str(strip_code_fences(text))
}

/// Locally computed analysis served when the completion backend is
/// unavailable. The score is derived from surface features of the content,
/// so the same input always yields the same score.
pub fn fallback_analysis(content: &str, platform: &str) -> AnalysisResult {
    let content = content.trim();
    let words = content.split_whitespace().count();

    // Enough length to carry a story, a question hook, concrete numbers
    // and some punch each nudge the score up from a neutral baseline.
    let mut score: f64 = 5.0;
    if words >= 30 {
        score += 1.0;
    }
    if words >= 120 {
        score += 0.5;
    }
    if content.contains('?') {
        score += 1.0;
    }
    if content.chars().any(|c| c.is_ascii_digit()) {
        score += 0.5;
    }
    if content.contains('!') {
        score += 0.5;
    }

    let theme: String = content
        .split_whitespace()
        .take(5)
        .collect::<Vec<_>>()
        .join(" ");
    let theme = if theme.is_empty() {
        "This Topic".to_string()
    } else {
        theme
    };

    AnalysisResult {
        viral_score: score.min(10.0),
        optimized_titles: vec![
            format!("The Truth About {}", theme),
            format!("{}: What I Wish I Knew Sooner", theme),
            format!("How {} Changed My Content", theme),
        ],
        viral_tags: vec![
            "#viral".to_string(),
            "#trending".to_string(),
            "#fyp".to_string(),
            "#creator".to_string(),
            "#growth".to_string(),
            format!(
                "#{}",
                platform
                    .chars()
                    .filter(|c| c.is_alphanumeric())
                    .flat_map(|c| c.to_lowercase())
                    .collect::<String>()
            ),
        ],
        hook_ideas: vec![
            "Open with the end result, then rewind to how you got there.".to_string(),
            "Ask the audience a direct question in the first two seconds.".to_string(),
            "Show the common mistake first and the fix right after.".to_string(),
        ],
        content_strategy: format!(
            "Post this as a short vertical clip first and watch retention. If \
             first-day completion holds up, expand it into a longer {} breakdown \
             and cross-post a teaser to your other platforms.",
            platform
        ),
    }
}
