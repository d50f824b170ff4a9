pub mod configuration;
pub mod content;
pub mod errors;
pub mod orchestrator;
pub mod prompt_template;
pub mod providers;
pub mod tools;

pub use configuration::Settings;
pub use content::{generate_marketing_content, ContentCategory};
pub use errors::{ProviderError, ServiceError};
pub use orchestrator::Orchestrator;
pub use tools::{generate_tool_result, ToolKind, ToolOutput};
