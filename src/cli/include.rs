//! Template include command

use log::debug;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::error::Result;
use crate::output::{Formattable, IncludedTemplate};
use crate::templates;

/// Print the content of a template from the configured template directory
pub fn run(opts: &GlobalOptions, filename: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let store = ctx.template_store();

    debug!("Template root: {}", store.root().display());

    let content = templates::include(&store, filename)?;
    let included = IncludedTemplate {
        filename: filename.to_string(),
        content,
    };
    included.print(ctx.format)
}
