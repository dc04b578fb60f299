//! HTML to Markdown rendering.
//!
//! Treated as a pure function by the rest of the engine: raw HTML in,
//! readable Markdown out. Navigation chrome is skipped the way the DevDocs
//! pages expect (sidebars and menus carry no documentation content).

use htmd::HtmlToMarkdown;

/// Converts raw documentation HTML into Markdown.
pub struct MarkdownRenderer {
    converter: HtmlToMarkdown,
}

impl std::fmt::Debug for MarkdownRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarkdownRenderer").finish()
    }
}

impl MarkdownRenderer {
    pub fn new() -> Self {
        Self {
            converter: HtmlToMarkdown::builder()
                .skip_tags(vec!["script", "style", "nav", "aside", "iframe"])
                .build(),
        }
    }

    /// Render HTML to Markdown. Errors carry only a reason string; the
    /// caller attaches the document path.
    pub fn render(&self, html: &str) -> Result<String, String> {
        self.converter.convert(html).map_err(|e| e.to_string())
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;

    #[test]
    fn renders_headings_and_paragraphs() {
        let renderer = MarkdownRenderer::new();
        let markdown = renderer
            .render("<html><body><h1>List</h1><p>Python list documentation.</p></body></html>")
            .unwrap();
        check!(markdown.contains("# List"));
        check!(markdown.contains("Python list documentation."));
    }

    #[test]
    fn strips_navigation_chrome() {
        let renderer = MarkdownRenderer::new();
        let markdown = renderer
            .render("<body><nav>Skip me</nav><aside>Me too</aside><p>Keep me</p></body>")
            .unwrap();
        check!(!markdown.contains("Skip me"));
        check!(!markdown.contains("Me too"));
        check!(markdown.contains("Keep me"));
    }
}
