//! Developer tool generation. Each tool renders the user's input into a
//! fixed prompt; JSON tools get their output parsed, the rest are returned
//! as raw text.

use serde::Serialize;
use serde_json::Value;
use strum_macros::{Display, EnumIter, EnumString};

use crate::errors::UNAVAILABLE_MESSAGE;
use crate::orchestrator::Orchestrator;
use crate::prompt_template::load_prompt;
use crate::providers::base::ResponseFormat;
use crate::providers::utils::strip_code_fences;

pub const IMAGE_UNSUPPORTED_MESSAGE: &str =
    "Image generation requires specific model config. Please use text tools.";
pub const IMAGE_FAILED_MESSAGE: &str = "Image Generation Failed.";

#[derive(EnumIter, EnumString, Display, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(serialize_all = "kebab-case")]
pub enum ToolKind {
    CodeRefactor,
    SqlQuery,
    ColorPalette,
    RegexGenerator,
    ImageGenerator,
    ResumeAnalyzer,
    UserPersona,
    ReadmeGenerator,
    UnitTestWriter,
    ApiIdeas,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolTemplate {
    pub template: &'static str,
    pub expects_json: bool,
}

impl ToolTemplate {
    const fn text(template: &'static str) -> Self {
        Self {
            template,
            expects_json: false,
        }
    }

    const fn json(template: &'static str) -> Self {
        Self {
            template,
            expects_json: true,
        }
    }
}

impl ToolKind {
    /// Prompt template for the tool, `None` for image generation which never
    /// goes through the text providers
    pub fn template(&self) -> Option<ToolTemplate> {
        let template = match self {
            ToolKind::CodeRefactor => ToolTemplate::text(
                "Act as a Senior Engineer. Refactor this code for efficiency/readability:\n{{ input }}",
            ),
            ToolKind::SqlQuery => {
                ToolTemplate::text("Act as a DBA. Write an optimized SQL query for: \"{{ input }}\"")
            }
            ToolKind::ColorPalette => ToolTemplate::json(
                "Act as a UI Designer. Generate a 5-color palette for: \"{{ input }}\". Return ONLY a raw JSON array of objects {hex, name, usage}.",
            ),
            ToolKind::RegexGenerator => ToolTemplate::text(
                "Act as a Regex Expert. Create a regex for: \"{{ input }}\". Explain it.",
            ),
            ToolKind::ImageGenerator => return None,
            ToolKind::ResumeAnalyzer => ToolTemplate::text(
                "Analyze this resume. Provide Markdown report (Strengths, Weaknesses):\n{{ input }}",
            ),
            ToolKind::UserPersona => ToolTemplate::text(
                "Create 2 User Personas (Name, Bio, Needs) for: \"{{ input }}\". Format Markdown.",
            ),
            ToolKind::ReadmeGenerator => ToolTemplate::text(
                "Generate a GitHub README.md for: \"{{ input }}\". Include Features, Install, Usage. Format Markdown.",
            ),
            ToolKind::UnitTestWriter => ToolTemplate::text(
                "Write unit tests (edge cases included) for this code:\n{{ input }}",
            ),
            ToolKind::ApiIdeas => ToolTemplate::text(
                "Suggest 5 API integrations for: \"{{ input }}\". Explain function. Format Markdown.",
            ),
        };
        Some(template)
    }
}

/// Result handed back to a tool widget
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ToolOutput {
    Text(String),
    Json(Value),
}

impl ToolOutput {
    fn unavailable() -> Self {
        ToolOutput::Text(UNAVAILABLE_MESSAGE.to_string())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ToolOutput::Text(text) => Some(text),
            ToolOutput::Json(_) => None,
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ToolOutput::Json(value) => Some(value),
            ToolOutput::Text(_) => None,
        }
    }
}

#[derive(Serialize)]
struct ToolContext<'a> {
    input: &'a str,
}

pub fn build_tool_prompt(template: &ToolTemplate, input: &str) -> Result<String, tera::Error> {
    load_prompt(template.template, &ToolContext { input })
}

/// Run a developer tool against `input`.
///
/// Never fails: every failure is reported as a fixed message in
/// [`ToolOutput::Text`].
pub async fn generate_tool_result(
    orchestrator: &Orchestrator,
    kind: ToolKind,
    input: &str,
) -> ToolOutput {
    let Some(template) = kind.template() else {
        return image_placeholder(orchestrator);
    };

    match try_generate(orchestrator, &template, input).await {
        Ok(output) => output,
        Err(e) => {
            tracing::error!("Tool '{}' failed: {}", kind, e);
            ToolOutput::unavailable()
        }
    }
}

// Image output is not supported; no request is issued
fn image_placeholder(orchestrator: &Orchestrator) -> ToolOutput {
    if orchestrator.supports_images() {
        ToolOutput::Text(IMAGE_UNSUPPORTED_MESSAGE.to_string())
    } else {
        tracing::warn!("No image-capable provider configured");
        ToolOutput::Text(IMAGE_FAILED_MESSAGE.to_string())
    }
}

async fn try_generate(
    orchestrator: &Orchestrator,
    template: &ToolTemplate,
    input: &str,
) -> Result<ToolOutput, Box<dyn std::error::Error + Send + Sync>> {
    let prompt = build_tool_prompt(template, input)?;
    let format = ResponseFormat::from_expects_json(template.expects_json);
    let raw = orchestrator.generate(&prompt, format).await?;

    if template.expects_json {
        let value = serde_json::from_str(&strip_code_fences(&raw))?;
        Ok(ToolOutput::Json(value))
    } else {
        Ok(ToolOutput::Text(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::mock::MockProvider;
    use serde_json::json;
    use std::str::FromStr;
    use std::sync::atomic::Ordering;
    use strum::IntoEnumIterator;

    fn single(response: &str) -> Orchestrator {
        Orchestrator::new(vec![Box::new(MockProvider::new(
            "primary",
            vec![Ok(response.to_string())],
        ))])
    }

    #[test]
    fn test_only_color_palette_expects_json() {
        let json_tools: Vec<ToolKind> = ToolKind::iter()
            .filter(|k| k.template().is_some_and(|t| t.expects_json))
            .collect();
        assert_eq!(json_tools, vec![ToolKind::ColorPalette]);
        assert_eq!(ToolKind::iter().count(), 10);
        assert!(ToolKind::ImageGenerator.template().is_none());
    }

    #[test]
    fn test_tool_tags() {
        assert_eq!(ToolKind::from_str("unit-test-writer").unwrap(), ToolKind::UnitTestWriter);
        assert_eq!(ToolKind::SqlQuery.to_string(), "sql-query");
        assert!(ToolKind::from_str("sql_query").is_err());
    }

    #[test]
    fn test_build_tool_prompt() {
        let template = ToolKind::CodeRefactor.template().unwrap();
        let prompt = build_tool_prompt(&template, "fn main() {}").unwrap();
        assert_eq!(
            prompt,
            "Act as a Senior Engineer. Refactor this code for efficiency/readability:\nfn main() {}"
        );

        let template = ToolKind::ColorPalette.template().unwrap();
        let prompt = build_tool_prompt(&template, "ocean sunset palette").unwrap();
        assert!(prompt.contains("\"ocean sunset palette\""));
        assert!(prompt.ends_with("{hex, name, usage}."));
    }

    #[tokio::test]
    async fn test_text_tool_returns_raw_text() {
        let raw = "```sql\nSELECT 1;\n```";
        let output = generate_tool_result(&single(raw), ToolKind::SqlQuery, "one").await;
        assert_eq!(output, ToolOutput::Text(raw.to_string()));
    }

    #[tokio::test]
    async fn test_json_tool_strips_fences() {
        let raw = "```json\n[{\"hex\":\"#1B263B\",\"name\":\"Deep Navy\",\"usage\":\"background\"}]\n```";
        let output =
            generate_tool_result(&single(raw), ToolKind::ColorPalette, "ocean sunset palette").await;
        assert_eq!(
            output.as_json(),
            Some(&json!([{"hex": "#1B263B", "name": "Deep Navy", "usage": "background"}]))
        );
    }

    #[tokio::test]
    async fn test_json_tool_parse_failure() {
        let output =
            generate_tool_result(&single("Here is your palette!"), ToolKind::ColorPalette, "x").await;
        assert_eq!(output.as_text(), Some(UNAVAILABLE_MESSAGE));
    }

    #[tokio::test]
    async fn test_exhausted_chain() {
        let orchestrator = Orchestrator::new(vec![
            Box::new(MockProvider::unconfigured("primary")),
            Box::new(MockProvider::unconfigured("secondary")),
        ]);
        for kind in ToolKind::iter().filter(|k| *k != ToolKind::ImageGenerator) {
            let output = generate_tool_result(&orchestrator, kind, "input").await;
            assert_eq!(output.as_text(), Some(UNAVAILABLE_MESSAGE), "{}", kind);
        }
    }

    #[tokio::test]
    async fn test_image_generator_never_calls_providers() {
        let primary = MockProvider::new("primary", vec![Ok("text".to_string())]);
        let secondary =
            MockProvider::new("secondary", vec![Ok("text".to_string())]).with_images();
        let primary_calls = primary.calls();
        let secondary_calls = secondary.calls();
        let orchestrator = Orchestrator::new(vec![Box::new(primary), Box::new(secondary)]);

        let output = generate_tool_result(&orchestrator, ToolKind::ImageGenerator, "a cat").await;
        assert_eq!(output.as_text(), Some(IMAGE_UNSUPPORTED_MESSAGE));
        assert_eq!(primary_calls.load(Ordering::SeqCst), 0);
        assert_eq!(secondary_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_image_generator_without_capable_provider() {
        let output = generate_tool_result(
            &Orchestrator::new(vec![Box::new(MockProvider::unconfigured("primary"))]),
            ToolKind::ImageGenerator,
            "a cat",
        )
        .await;
        assert_eq!(output.as_text(), Some(IMAGE_FAILED_MESSAGE));
    }

    #[test]
    fn test_tool_output_serializes_untagged() {
        let text = serde_json::to_value(ToolOutput::Text("hi".to_string())).unwrap();
        assert_eq!(text, json!("hi"));
        let value = serde_json::to_value(ToolOutput::Json(json!([1]))).unwrap();
        assert_eq!(value, json!([1]));
    }
}
