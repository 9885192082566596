//! Error adapter for converting FolioError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use folio::{FolioError, render::MAX_DEPTH_LIMIT};
use folio_core::error::RenderError;

/// Adapter for [`FolioError`] values.
///
/// Page rendering has no source text to point into, so the adapter only
/// contributes a code and, where one exists, a hint on how to fix the error.
pub struct ErrorAdapter<'a>(pub &'a FolioError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            FolioError::Io(_) => "folio::io",
            FolioError::Render(err) => match err {
                RenderError::Unresolved { .. } => "folio::render::unresolved",
                RenderError::InvalidReference { .. } => "folio::render::invalid_reference",
                RenderError::InvalidTag { .. } => "folio::render::invalid_tag",
                RenderError::DepthExceeded { .. } => "folio::render::depth",
                RenderError::Component { .. } => "folio::render::component",
            },
            FolioError::Config(_) => "folio::config",
            FolioError::UnknownPage(_) => "folio::page",
            FolioError::Export(_) => "folio::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help: Box<dyn fmt::Display + 'a> = match &self.0 {
            FolioError::Render(RenderError::Unresolved { name }) => Box::new(format!(
                "register `{name}` under [components] in the configuration file"
            )),
            FolioError::Render(RenderError::DepthExceeded { .. }) => Box::new(format!(
                "a component probably renders itself; raise render.max_depth (at most {MAX_DEPTH_LIMIT}) if the nesting is intended"
            )),
            FolioError::Render(RenderError::InvalidTag { .. }) => Box::new(
                "element names start with a letter and contain only letters, digits and `-`",
            ),
            FolioError::UnknownPage(_) => {
                let pages: Vec<_> = folio::content::all()
                    .iter()
                    .map(|unit| unit.metadata().slug.clone())
                    .collect();
                Box::new(format!("available pages: {}", pages.join(", ")))
            }
            _ => return None,
        };
        Some(help)
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// A reportable error that can be rendered by miette.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// An error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Error(e) => e.labels(),
        }
    }
}

/// Convert a [`FolioError`] into a list of reportable errors.
pub fn to_reportables(err: &FolioError) -> Vec<Reportable<'_>> {
    vec![Reportable::Error(ErrorAdapter(err))]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_error_code_and_help() {
        let err = FolioError::Render(RenderError::Unresolved {
            name: "Admonition".to_string(),
        });

        let reportables = to_reportables(&err);

        assert_eq!(reportables.len(), 1);
        let reportable = &reportables[0];
        assert_eq!(
            reportable.to_string(),
            "no component registered for `Admonition`"
        );
        assert_eq!(
            reportable.code().unwrap().to_string(),
            "folio::render::unresolved"
        );
        assert!(reportable.help().unwrap().to_string().contains("Admonition"));
    }

    #[test]
    fn test_invalid_tag_code() {
        let err = FolioError::Render(RenderError::InvalidTag {
            tag: "p><b".to_string(),
        });

        let reportables = to_reportables(&err);

        assert_eq!(
            reportables[0].code().unwrap().to_string(),
            "folio::render::invalid_tag"
        );
        assert!(reportables[0].help().is_some());
    }

    #[test]
    fn test_unknown_page_lists_pages() {
        let err = FolioError::UnknownPage("/missing".to_string());

        let reportables = to_reportables(&err);

        let help = reportables[0].help().unwrap().to_string();
        assert_eq!(help, "available pages: /");
    }

    #[test]
    fn test_config_error_has_no_help() {
        let err = FolioError::Config("bad".to_string());

        let reportables = to_reportables(&err);

        assert_eq!(reportables[0].code().unwrap().to_string(), "folio::config");
        assert!(reportables[0].help().is_none());
    }
}
