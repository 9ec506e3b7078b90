//! Demo generator: fixed, tone-flavored content with no network call.
//! Selected with `GENERATION_MODE=demo`.

use async_trait::async_trait;
use tracing::debug;

use crate::generation::tone::get_tone_voice;
use crate::generation::{GenerationError, GenerationService};
use crate::models::intake::{GeneratedContent, IntakeRequest};

const DEFAULT_PRODUCT: &str = "your product";
const DEFAULT_AUDIENCE: &str = "founders";

#[derive(Debug, Clone, Copy, Default)]
pub struct DemoGenerationService;

#[async_trait]
impl GenerationService for DemoGenerationService {
    async fn generate(&self, request: &IntakeRequest) -> Result<GeneratedContent, GenerationError> {
        debug!("Demo generation for tone={}", request.tone);
        Ok(demo_content(request))
    }

    fn describe(&self) -> String {
        "demo generator".to_string()
    }
}

fn or_default<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        fallback
    } else {
        trimmed
    }
}

/// Builds the demo output. Pure so it can be asserted on directly.
pub fn demo_content(request: &IntakeRequest) -> GeneratedContent {
    let voice = get_tone_voice(&request.tone);
    let product = or_default(&request.product, DEFAULT_PRODUCT);
    let audience = or_default(&request.audience, DEFAULT_AUDIENCE);
    let topic = request
        .raw_input
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .unwrap_or_default();

    let hooks = vec![
        format!("{} most {audience} are posting about the wrong thing.", voice.openers[0]),
        format!("{} \"{topic}\"", voice.openers[1]),
        format!("{} {product} exists because this kept happening.", voice.openers[2]),
    ];

    let post_outlines = vec![
        format!(
            "- {}\n- Share the note: \"{topic}\"\n- Show how {product} changes it\n- Close with one action for {audience}",
            voice.outline_frame
        ),
        format!(
            "- {}\n- Three mistakes {audience} make\n- What we do instead\n- Invite replies",
            voice.outline_frame
        ),
    ];

    let full_posts = vec![format!(
        "{} \"{topic}\"\n\nI hear this from {audience} every week.\nWe built {product} to make it the exception, not the rule.\n\n{}",
        voice.openers[1], voice.sign_off
    )];

    GeneratedContent {
        hooks,
        post_outlines,
        full_posts,
    }
}
