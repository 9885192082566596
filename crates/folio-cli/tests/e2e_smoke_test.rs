use std::fs;

use tempfile::tempdir;

use folio::FolioError;
use folio_cli::{Args, Format, run};

fn args(page: &str, format: Format, output: Option<String>) -> Args {
    Args {
        page: page.to_string(),
        output,
        config: None,
        format,
        log_level: "off".to_string(),
        pretty: false,
    }
}

#[test]
fn e2e_smoke_test_every_page_and_format() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let mut failed = Vec::new();
    for unit in folio::content::all() {
        let slug = unit.metadata().slug.clone();
        for (format, extension) in [
            (Format::Html, "html"),
            (Format::Toc, "txt"),
            (Format::Metadata, "toml"),
        ] {
            let output_path = temp_dir
                .path()
                .join(format!("{}.{extension}", unit.metadata().id));
            let args = args(
                &slug,
                format,
                Some(output_path.to_string_lossy().to_string()),
            );

            match run(&args) {
                Ok(()) => {
                    let written = fs::read_to_string(&output_path).unwrap();
                    assert!(!written.is_empty(), "{} produced empty output", slug);
                }
                Err(err) => failed.push((slug.clone(), format, err)),
            }
        }
    }

    if !failed.is_empty() {
        for (slug, format, err) in &failed {
            eprintln!("  - {slug} ({format:?}): {err}");
        }
        panic!("{} page render(s) failed unexpectedly", failed.len());
    }
}

#[test]
fn e2e_html_output_with_config() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(
        &config_path,
        r#"
        [output]
        doctype = true

        [components.h2]
        tag = "h2"
        attributes = { className = "anchor" }
        "#,
    )
    .unwrap();
    let output_path = temp_dir.path().join("index.html");

    let mut args = args(
        "/OpenRace/",
        Format::Html,
        Some(output_path.to_string_lossy().to_string()),
    );
    args.config = Some(config_path.to_string_lossy().to_string());
    args.pretty = true;

    run(&args).expect("Render should succeed");

    let html = fs::read_to_string(&output_path).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>\n"));
    assert!(html.contains(
        r#"<h2 class="anchor" id="building-the-project">Building the Project</h2>"#
    ));
    assert!(html.contains("<pre><code class=\"language-bash\">git clone"));
}

#[test]
fn e2e_unknown_page_fails() {
    let result = run(&args("/missing", Format::Html, None));

    assert!(matches!(result, Err(FolioError::UnknownPage(page)) if page == "/missing"));
}
