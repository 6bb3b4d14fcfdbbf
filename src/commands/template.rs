//! Template command: print a documentation skeleton

use anyhow::Result;
use chrono::Local;
use std::io::{self, Write};

use crate::templates::DocTemplate;

/// Print the template for a kind name or doc path
pub fn show(name: &str) -> Result<()> {
    write_template(name, &mut io::stdout().lock())
}

/// Write the rendered template for `name` to `out`
pub fn write_template<W: Write>(name: &str, out: &mut W) -> Result<()> {
    let template: DocTemplate = name.parse()?;
    let date = Local::now().format("%Y-%m-%d").to_string();
    write!(out, "{}", template.render(&date))?;
    out.flush()?;
    Ok(())
}
