use std::fs;
use std::path::Path;

use crate::errors::WikiError;
use crate::types::Page;
use crate::utils::{escape_attr, escape_html};

/// The three page templates, read once at startup. Each is checked for its
/// required placeholders when loaded, so the process never starts with a
/// broken template and the render calls below cannot fail.
#[derive(Debug)]
pub struct TemplateSet {
    view: String,
    edit: String,
    home: String,
}

impl TemplateSet {
    /// Load `view.html`, `edit.html`, and `home.html` from the template
    /// directory.
    pub fn load(dir: &Path) -> Result<Self, WikiError> {
        let view = load_template(dir, "view.html", &["{{TITLE}}", "{{BODY}}"])?;
        let edit = load_template(dir, "edit.html", &["{{TITLE}}", "{{BODY}}"])?;
        let home = load_template(dir, "home.html", &["{{PAGES}}"])?;
        Ok(Self { view, edit, home })
    }

    /// Render the read-only view of a page.
    pub fn render_view(&self, page: &Page) -> String {
        self.view
            .replace("{{TITLE}}", &escape_html(&page.title))
            .replace("{{BODY}}", &escape_html(&page.body_text()))
    }

    /// Render the edit form, with the current body inside the textarea.
    pub fn render_edit(&self, page: &Page) -> String {
        self.edit
            .replace("{{TITLE}}", &escape_html(&page.title))
            .replace("{{BODY}}", &escape_html(&page.body_text()))
    }

    /// Render the home screen. Only the title list takes part in the home
    /// render context; the rest of the page is ignored.
    pub fn render_home(&self, page: &Page) -> String {
        self.home.replace("{{PAGES}}", &page_list_html(&page.list))
    }
}

fn load_template(dir: &Path, name: &str, required: &[&str]) -> Result<String, WikiError> {
    let path = dir.join(name);
    let tpl = fs::read_to_string(&path)
        .map_err(|e| WikiError::Template(format!("cannot read {}: {}", path.display(), e)))?;
    for placeholder in required {
        if !tpl.contains(placeholder) {
            return Err(WikiError::Template(format!(
                "{} is missing the {} placeholder",
                path.display(),
                placeholder
            )));
        }
    }
    Ok(tpl)
}

/// Build the linked list of known pages for the home screen.
fn page_list_html(titles: &[String]) -> String {
    if titles.is_empty() {
        return "<p class=\"empty\">No pages yet.</p>".to_string();
    }

    let mut html = String::from("<ul class=\"pages\">\n");
    for title in titles {
        html.push_str(&format!(
            "  <li><a href=\"/view/{}\">{}</a></li>\n",
            escape_attr(title),
            escape_html(title)
        ));
    }
    html.push_str("</ul>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_minimal_templates(dir: &Path) {
        fs::write(dir.join("view.html"), "<h1>{{TITLE}}</h1><pre>{{BODY}}</pre>").unwrap();
        fs::write(
            dir.join("edit.html"),
            "<form action=\"/save/{{TITLE}}\"><textarea name=\"body\">{{BODY}}</textarea></form>",
        )
        .unwrap();
        fs::write(dir.join("home.html"), "<h1>Pages</h1>{{PAGES}}").unwrap();
    }

    fn loaded_set() -> (tempfile::TempDir, TemplateSet) {
        let dir = tempfile::tempdir().unwrap();
        write_minimal_templates(dir.path());
        let set = TemplateSet::load(dir.path()).unwrap();
        (dir, set)
    }

    #[test]
    fn load_fails_on_missing_template_file() {
        let dir = tempfile::tempdir().unwrap();
        write_minimal_templates(dir.path());
        fs::remove_file(dir.path().join("edit.html")).unwrap();

        let err = TemplateSet::load(dir.path()).unwrap_err();
        assert!(matches!(err, WikiError::Template(ref msg) if msg.contains("edit.html")));
    }

    #[test]
    fn load_fails_on_missing_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        write_minimal_templates(dir.path());
        fs::write(dir.path().join("view.html"), "<h1>{{TITLE}}</h1>").unwrap();

        let err = TemplateSet::load(dir.path()).unwrap_err();
        assert!(matches!(err, WikiError::Template(ref msg) if msg.contains("{{BODY}}")));
    }

    #[test]
    fn view_escapes_body_markup() {
        let (_dir, set) = loaded_set();
        let page = Page {
            title: "Test".to_string(),
            body: b"<script>alert(1)</script>".to_vec(),
            list: Vec::new(),
        };
        let html = set.render_view(&page);
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn edit_fills_the_textarea_with_the_body() {
        let (_dir, set) = loaded_set();
        let page = Page {
            title: "Test".to_string(),
            body: b"current text".to_vec(),
            list: Vec::new(),
        };
        let html = set.render_edit(&page);
        assert!(html.contains("<textarea name=\"body\">current text</textarea>"));
        assert!(html.contains("/save/Test"));
    }

    #[test]
    fn home_links_every_title_and_nothing_else() {
        let (_dir, set) = loaded_set();
        let page = Page {
            title: "Home".to_string(),
            body: b"ignored body bytes".to_vec(),
            list: vec!["Alpha".to_string(), "My Page".to_string()],
        };
        let html = set.render_home(&page);
        assert!(html.contains("<a href=\"/view/Alpha\">Alpha</a>"));
        assert!(html.contains("<a href=\"/view/My Page\">My Page</a>"));
        assert!(!html.contains("ignored body bytes"));
    }

    #[test]
    fn home_with_no_pages_says_so() {
        let (_dir, set) = loaded_set();
        let html = set.render_home(&Page::empty("Home"));
        assert!(html.contains("No pages yet."));
    }
}
