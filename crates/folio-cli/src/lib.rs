//! CLI logic for the Folio page renderer.
//!
//! This module contains the core CLI logic: loading configuration, selecting a
//! bundled page and writing it out in the requested format.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, Format};

use std::{
    fs,
    io::{self, Write},
};

use log::info;

use folio::{FolioError, PageBuilder, config::OutputConfig, content, props::PropertyBag};

/// Run the Folio CLI application
///
/// This function renders the selected page in the requested format and writes
/// the result to the output file, or to stdout when no file is given.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `FolioError` for:
/// - Configuration loading errors
/// - Unknown page selectors
/// - Rendering errors
/// - File I/O errors
pub fn run(args: &Args) -> Result<(), FolioError> {
    info!(
        page = args.page.as_str(),
        format:? = args.format;
        "Processing page"
    );

    let mut app_config = config::load_config(args.config.as_ref())?;
    if args.pretty {
        let doctype = app_config.output().doctype();
        app_config = app_config.with_output(OutputConfig::new(true, doctype));
    }

    let unit = content::lookup(&args.page)
        .ok_or_else(|| FolioError::UnknownPage(args.page.clone()))?;

    let builder = PageBuilder::new(app_config);
    let output = match args.format {
        Format::Html => builder.render_html(unit.as_ref(), &PropertyBag::new())?,
        Format::Toc => builder.toc_text(unit.as_ref()),
        Format::Metadata => builder.metadata_toml(unit.as_ref())?,
    };

    match &args.output {
        Some(path) => {
            fs::write(path, output)?;
            info!(output_file = path.as_str(); "Page exported successfully");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(output.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}
