//! Marketing content generation: ten fixed categories, each rendered into a
//! prompt that asks for a raw JSON array of strings.

use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString};

use crate::errors::UNAVAILABLE_MESSAGE;
use crate::orchestrator::Orchestrator;
use crate::prompt_template::load_prompt;
use crate::providers::base::ResponseFormat;

const BASE_PROMPT: &str = "Act as a world-class content strategist for the \"{{ industry }}\" industry, focusing on \"{{ topic }}\".";

const JSON_ARRAY_SUFFIX: &str = "Return ONLY a raw JSON array of strings.";

#[derive(EnumIter, EnumString, Display, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(serialize_all = "kebab-case")]
pub enum ContentCategory {
    Taglines,
    BlogIdeas,
    SocialPosts,
    NewsFeed,
    MarketingAngles,
    ContentOutlines,
    TopicIdeas,
    CodeSnippets,
    ApiIntegrations,
    InnovativeExpansions,
}

impl ContentCategory {
    /// What the model is asked to produce for this category
    pub fn instruction(&self) -> &'static str {
        match self {
            ContentCategory::Taglines => {
                "Generate 5 punchy, high-converting marketing taglines (max 10 words each)."
            }
            ContentCategory::BlogIdeas => {
                "Generate 5 engaging blog post titles that would drive SEO traffic."
            }
            ContentCategory::SocialPosts => "Generate 5 viral-ready social media post ideas/captions.",
            ContentCategory::NewsFeed => {
                "Generate 5 trending news feed headline ideas hooks relevant to this niche."
            }
            ContentCategory::MarketingAngles => {
                "Generate 5 unique marketing angles/hooks to sell products in this niche."
            }
            ContentCategory::ContentOutlines => {
                "Generate 5 high-level content outlines (e.g., \"Intro -> Problem -> Solution\")."
            }
            ContentCategory::TopicIdeas => "Generate 5 high-interest sub-topics within this niche.",
            ContentCategory::CodeSnippets => {
                "Generate 3 useful, short code snippets (Python, JS, SQL) solving a common problem."
            }
            ContentCategory::ApiIntegrations => {
                "Generate 5 creative API integration ideas for this industry."
            }
            ContentCategory::InnovativeExpansions => "Generate 5 innovative sub-services or trends.",
        }
    }

    fn template(&self) -> String {
        format!("{} {} {}", BASE_PROMPT, self.instruction(), JSON_ARRAY_SUFFIX)
    }
}

#[derive(Serialize)]
struct ContentContext<'a> {
    topic: &'a str,
    industry: &'a str,
}

pub fn build_content_prompt(
    topic: &str,
    industry: &str,
    category: ContentCategory,
) -> Result<String, tera::Error> {
    load_prompt(&category.template(), &ContentContext { topic, industry })
}

/// Generate marketing content for `topic` in `industry`.
///
/// Never fails: any provider, template or parse failure degrades to a
/// single-element list carrying the unavailability message.
pub async fn generate_marketing_content(
    orchestrator: &Orchestrator,
    topic: &str,
    industry: &str,
    category: ContentCategory,
) -> Vec<String> {
    match try_generate(orchestrator, topic, industry, category).await {
        Ok(items) => items,
        Err(e) => {
            tracing::error!("Marketing content generation failed for '{}': {}", category, e);
            vec![UNAVAILABLE_MESSAGE.to_string()]
        }
    }
}

async fn try_generate(
    orchestrator: &Orchestrator,
    topic: &str,
    industry: &str,
    category: ContentCategory,
) -> Result<Vec<String>, Box<dyn std::error::Error + Send + Sync>> {
    let prompt = build_content_prompt(topic, industry, category)?;
    let raw = orchestrator.generate(&prompt, ResponseFormat::Json).await?;
    Ok(serde_json::from_str(&raw)?)
}
