//! Page rendering: turns an `IntakeView` into the single intake page.
//!
//! The template is compiled once at startup. Tera autoescapes it (the name
//! ends in `.html`), so card text lands in both the card body and the copy
//! button's `data-copy` attribute as generated, except that line endings are
//! normalized to `\n` up front. The HTML parser would rewrite `\r\n` and
//! bare `\r` inside the attribute anyway, so this keeps the card text equal to
//! what the Copy button writes.

use serde::Serialize;
use tera::{Context, Tera};

use crate::errors::AppError;
use crate::intake::view::IntakeView;
use crate::models::intake::{GeneratedContent, IntakeInput, Tone};

const PAGE_TEMPLATE_NAME: &str = "index.html";
const PAGE_TEMPLATE: &str = include_str!("templates/index.html");

const PAGE_TITLE: &str = "Founder Intake Engine (Demo)";
const PAGE_DESCRIPTION: &str =
    "Tiny prototype that turns messy founder notes into structured LinkedIn content.";

/// One numbered, copyable block of generated text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentCard {
    pub label: String,
    pub text: String,
}

/// A labeled group of cards ("Hooks", "Post outlines", "Full posts").
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentSection {
    pub title: &'static str,
    pub cards: Vec<ContentCard>,
    pub multiline: bool,
}

#[derive(Debug, Serialize)]
struct ToneOption {
    value: &'static str,
    label: &'static str,
    selected: bool,
}

#[derive(Debug, Serialize)]
struct PageModel<'a> {
    title: &'static str,
    description: &'static str,
    backend: &'a str,
    form: &'a IntakeInput,
    tones: Vec<ToneOption>,
    loading: bool,
    error: Option<&'a str>,
    has_result: bool,
    sections: Vec<ContentSection>,
}

/// Normalizes `\r\n` and bare `\r` to `\n`, matching what the browser's
/// HTML parser does to attribute values.
fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Card label for item `index` (0-based) of a section: "Hooks" -> "Hook 1".
fn card_label(title: &str, index: usize) -> String {
    let singular = title.strip_suffix('s').unwrap_or(title);
    format!("{singular} {}", index + 1)
}

fn section(title: &'static str, items: &[String], multiline: bool) -> ContentSection {
    ContentSection {
        title,
        cards: items
            .iter()
            .enumerate()
            .map(|(i, text)| ContentCard {
                label: card_label(title, i),
                text: normalize_line_endings(text),
            })
            .collect(),
        multiline,
    }
}

/// Maps generated content to the three rendered sections, in display order.
pub fn content_sections(content: &GeneratedContent) -> Vec<ContentSection> {
    vec![
        section("Hooks", &content.hooks, false),
        section("Post outlines", &content.post_outlines, false),
        section("Full posts", &content.full_posts, true),
    ]
}

pub struct PageRenderer {
    tera: Tera,
    backend: String,
}

impl PageRenderer {
    /// `backend` is shown under the submit button.
    pub fn new(backend: String) -> Result<Self, AppError> {
        let mut tera = Tera::default();
        tera.add_raw_template(PAGE_TEMPLATE_NAME, PAGE_TEMPLATE)?;
        Ok(Self { tera, backend })
    }

    pub fn render(&self, view: &IntakeView) -> Result<String, AppError> {
        // An unknown tone was already rejected; fall back to the default
        // so the select still shows a choice.
        let selected = view.form.tone.parse::<Tone>().unwrap_or_default();

        let model = PageModel {
            title: PAGE_TITLE,
            description: PAGE_DESCRIPTION,
            backend: &self.backend,
            form: &view.form,
            tones: Tone::ALL
                .into_iter()
                .map(|tone| ToneOption {
                    value: tone.as_str(),
                    label: tone.label(),
                    selected: tone == selected,
                })
                .collect(),
            loading: view.loading,
            error: view.error.as_deref(),
            has_result: view.result.is_some(),
            sections: view.result.as_ref().map(content_sections).unwrap_or_default(),
        };

        let context = Context::from_serialize(&model)?;
        Ok(self.tera.render(PAGE_TEMPLATE_NAME, &context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renderer() -> PageRenderer {
        PageRenderer::new("http://gen.local/api/generate".to_string()).unwrap()
    }

    fn sample_content() -> GeneratedContent {
        GeneratedContent {
            hooks: vec!["A".to_string(), "B".to_string()],
            post_outlines: vec!["C".to_string()],
            full_posts: vec!["D\nE".to_string()],
        }
    }

    #[test]
    fn test_card_labels_are_singular_and_one_based() {
        let sections = content_sections(&sample_content());
        let labels: Vec<Vec<&str>> = sections
            .iter()
            .map(|s| s.cards.iter().map(|c| c.label.as_str()).collect())
            .collect();
        assert_eq!(
            labels,
            vec![vec!["Hook 1", "Hook 2"], vec!["Post outline 1"], vec!["Full post 1"]]
        );
    }

    #[test]
    fn test_only_full_posts_are_multiline() {
        let sections = content_sections(&sample_content());
        let multiline: Vec<bool> = sections.iter().map(|s| s.multiline).collect();
        assert_eq!(multiline, vec![false, false, true]);
        assert_eq!(sections[2].cards[0].text, "D\nE");
    }

    #[test]
    fn test_card_text_line_endings_normalized() {
        let content = GeneratedContent {
            full_posts: vec!["Line one\r\nLine two\rLine three\n".to_string()],
            ..GeneratedContent::default()
        };
        let sections = content_sections(&content);
        assert_eq!(sections[2].cards[0].text, "Line one\nLine two\nLine three\n");

        let view = IntakeView {
            result: Some(content),
            ..IntakeView::default()
        };
        let html = renderer().render(&view).unwrap();
        assert!(html.contains("data-copy=\"Line one\nLine two\nLine three\n\""));
        assert!(!html.contains('\r'));
    }

    #[test]
    fn test_empty_view_shows_placeholder() {
        let html = renderer().render(&IntakeView::default()).unwrap();
        assert!(html.contains("Hit \"Generate content\""));
        assert!(html.contains("Generate content</button>"));
        assert!(!html.contains("class=\"card\""));
    }

    #[test]
    fn test_loading_view_disables_button_and_hides_placeholder() {
        let view = IntakeView {
            loading: true,
            ..IntakeView::default()
        };
        let html = renderer().render(&view).unwrap();
        assert!(html.contains("disabled>Generating...</button>"));
        assert!(!html.contains("class=\"placeholder\""));
    }

    #[test]
    fn test_result_renders_numbered_cards_with_copy_text() {
        let view = IntakeView {
            result: Some(sample_content()),
            ..IntakeView::default()
        };
        let html = renderer().render(&view).unwrap();

        for label in ["Hook 1", "Hook 2", "Post outline 1", "Full post 1"] {
            assert!(html.contains(label), "missing {label}");
        }
        assert!(html.contains("data-copy=\"D\nE\""));
        assert!(html.contains("<p class=\"multiline\">D\nE</p>"));
        assert!(!html.contains("class=\"placeholder\""));
    }

    #[test]
    fn test_generated_text_is_escaped() {
        let view = IntakeView {
            result: Some(GeneratedContent {
                hooks: vec!["<script>alert(\"x\")</script>".to_string()],
                ..GeneratedContent::default()
            }),
            ..IntakeView::default()
        };
        let html = renderer().render(&view).unwrap();
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_error_and_form_values_are_echoed() {
        let view = IntakeView {
            form: IntakeInput {
                raw_input: "my notes".to_string(),
                product: "Forj".to_string(),
                audience: "CTOs".to_string(),
                tone: "mentor".to_string(),
            },
            error: Some("Drop in at least a few lines of notes.".to_string()),
            ..IntakeView::default()
        };
        let html = renderer().render(&view).unwrap();
        assert!(html.contains("role=\"alert\">Drop in at least a few lines of notes.</p>"));
        assert!(html.contains(">my notes</textarea>"));
        assert!(html.contains("value=\"Forj\""));
        assert!(html.contains("<option value=\"mentor\" selected>Calm mentor</option>"));
        assert!(html.contains("<option value=\"direct\">Direct &amp; sharp</option>"));
    }

    #[test]
    fn test_render_does_not_mutate_view() {
        let view = IntakeView {
            result: Some(sample_content()),
            generation: 3,
            ..IntakeView::default()
        };
        let before = view.clone();
        renderer().render(&view).unwrap();
        assert_eq!(view, before);
    }
}
