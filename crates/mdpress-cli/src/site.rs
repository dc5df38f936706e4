//! Page generation: walks the content directory, renders every markdown
//! file through the engine, and fills the page template.

use anyhow::{Context, Result, ensure};
use mdpress_config::Config;
use mdpress_engine::{extract_title, render_document};
use std::fs;
use std::path::Path;

pub const TITLE_TOKEN: &str = "{{ Title }}";
pub const CONTENT_TOKEN: &str = "{{ Content }}";

/// Renders every `*.md` under the content directory to a mirrored `*.html`
/// under the public directory.
pub fn build_site(config: &Config) -> Result<()> {
    ensure!(
        config.content_dir.exists(),
        "content directory {} does not exist",
        config.content_dir.display()
    );
    let template = fs::read_to_string(&config.template_path)
        .with_context(|| format!("reading template {}", config.template_path.display()))?;

    generate_dir(&config.content_dir, &config.public_dir, &template)
}

fn generate_dir(content_dir: &Path, public_dir: &Path, template: &str) -> Result<()> {
    for entry in
        fs::read_dir(content_dir).with_context(|| format!("reading {}", content_dir.display()))?
    {
        let entry = entry?;
        let source = entry.path();

        if source.is_dir() {
            generate_dir(&source, &public_dir.join(entry.file_name()), template)?;
        } else if source.extension().is_some_and(|ext| ext == "md") {
            let dest = public_dir.join(entry.file_name()).with_extension("html");
            generate_page(&source, template, &dest)
                .with_context(|| format!("generating page from {}", source.display()))?;
        }
    }
    Ok(())
}

/// Renders one markdown source file to `dest`, substituting the
/// `{{ Title }}` and `{{ Content }}` tokens in the template.
pub fn generate_page(source: &Path, template: &str, dest: &Path) -> Result<()> {
    log::info!(
        "generating page {} -> {}",
        source.display(),
        dest.display()
    );

    let markdown = fs::read_to_string(source)
        .with_context(|| format!("reading {}", source.display()))?;

    let title = extract_title(&markdown)?;
    let content = render_document(&markdown)?;

    let page = template
        .replace(TITLE_TOKEN, &title)
        .replace(CONTENT_TOKEN, &content);

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    fs::write(dest, page).with_context(|| format!("writing {}", dest.display()))
}
