use serde::Serialize;
use tera::{Context, Error as TeraError, Tera};

/// Render an inline prompt template against serializable context data.
///
/// The template name carries no `.html` suffix so tera performs no
/// autoescaping: user input is interpolated verbatim.
pub fn load_prompt<T: Serialize>(template: &str, context_data: &T) -> Result<String, TeraError> {
    let mut tera = Tera::default();
    tera.add_raw_template("inline_template", template)?;
    let context = Context::from_serialize(context_data)?;
    let rendered = tera.render("inline_template", &context)?;
    Ok(rendered)
}
