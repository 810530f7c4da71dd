//! Command handlers for the `recipebook` binary

mod check;
mod recipes;
mod registry;

use std::io::Write;

use anyhow::Result;
use serde::Serialize;

use recipebook::config::OutputFormat;
use recipebook::presentation::output;

pub use check::cmd_check;
pub use recipes::{cmd_recipes, cmd_scale, cmd_shopping_list, cmd_show};
pub use registry::{cmd_categories, cmd_ingredients};

/// Print `value` as JSON or through its text renderer
fn emit<T, F>(format: OutputFormat, value: &T, render: F) -> Result<()>
where
    T: Serialize + ?Sized,
    F: FnOnce(&T) -> String,
{
    let rendered = match format {
        OutputFormat::Json => output::to_json(value)?,
        OutputFormat::Text => render(value),
    };
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
