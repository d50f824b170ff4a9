use anyhow::{bail, Context, Result};
use folio::{
    generate_marketing_content, generate_tool_result, ContentCategory, Orchestrator, Settings,
    ToolKind,
};
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

// Usage:
//   cargo run --example generate -- tool color-palette "ocean sunset palette"
//   cargo run --example generate -- content taglines veganism "food blogging"
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Loads .env, OPENROUTER_API_KEY / GEMINI_API_KEY and FOLIO_* overrides
    let settings = Settings::new()?;
    let orchestrator = Orchestrator::from_settings(settings)?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
        ["tool", kind, input] => {
            let kind = ToolKind::from_str(kind).with_context(|| format!("unknown tool '{}'", kind))?;
            let output = generate_tool_result(&orchestrator, kind, input).await;
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        ["content", category, topic, industry] => {
            let category = ContentCategory::from_str(category)
                .with_context(|| format!("unknown content category '{}'", category))?;
            for item in generate_marketing_content(&orchestrator, topic, industry, category).await {
                println!("- {}", item);
            }
        }
        _ => bail!("usage: generate tool <kind> <input> | generate content <category> <topic> <industry>"),
    }

    Ok(())
}
