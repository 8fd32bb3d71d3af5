use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::errors::WikiError;
use crate::types::Page;
use crate::utils::{escape_attr, escape_html};

const TITLE_PLACEHOLDER: &str = "{{TITLE}}";
const BODY_PLACEHOLDER: &str = "{{BODY}}";

/// Service rendering pages through the HTML templates
///
/// Both templates are read and checked once at process start, so a missing
/// or malformed template file is a startup failure rather than a
/// per-request 500. The loaded set is shared read-only for the life of the
/// process.
pub struct TemplateService {
    view: String,
    edit: String,
}

impl TemplateService {
    /// Load the view and edit templates from `views_dir`
    pub fn load(views_dir: &Path) -> Result<Self, WikiError> {
        let view = read_template(views_dir, "view.html")?;
        let edit = read_template(views_dir, "edit.html")?;
        info!("Loaded templates from {:?}", views_dir);
        Ok(Self { view, edit })
    }

    /// Render the view template for a page
    pub fn render_view(&self, page: &Page) -> String {
        render(&self.view, page)
    }

    /// Render the edit form for a page
    pub fn render_edit(&self, page: &Page) -> String {
        render(&self.edit, page)
    }
}

fn read_template(views_dir: &Path, name: &str) -> Result<String, WikiError> {
    let path = views_dir.join(name);
    debug!("Loading template: {:?}", path);

    let template = fs::read_to_string(&path)
        .map_err(|e| WikiError::Template(format!("failed to load {}: {}", path.display(), e)))?;

    for placeholder in [TITLE_PLACEHOLDER, BODY_PLACEHOLDER] {
        if !template.contains(placeholder) {
            return Err(WikiError::Template(format!(
                "{} is missing the {} placeholder",
                path.display(),
                placeholder
            )));
        }
    }
    Ok(template)
}

/// Substitute the escaped page title and body into a template
fn render(template: &str, page: &Page) -> String {
    template
        .replace(TITLE_PLACEHOLDER, &escape_attr(&page.title))
        .replace(BODY_PLACEHOLDER, &escape_html(&page.body_str()))
}
