//! Combined-document composition for the live preview.
//!
//! The three pane contents are interpolated literally: styling goes into a
//! `<style>` block in the head, script into a `<script>` block at the end of
//! the body, markup between them. There is no escaping or sandboxing - the
//! consumer view executes the script content with its own privilege, which
//! is the accepted trust boundary of this tool.

/// Anything that can receive the composed document.
///
/// Implemented by the in-app preview panel and by the snapshot store; a
/// future external renderer plugs in here.
pub trait RenderTarget {
    /// Replace the target's source with the latest composed document.
    fn set_source(&self, doc: &str);
}

/// Build the renderable document from the three pane contents.
///
/// Pure and deterministic: equal inputs produce byte-identical output.
pub fn combined_document(markup: &str, styling: &str, script: &str) -> String {
    format!(
        "<html>\n\
         <head>\n\
         <style>\n{styling}\n</style>\n\
         </head>\n\
         <body>\n\
         {markup}\n\
         <script>\n{script}\n</script>\n\
         </body>\n\
         </html>\n"
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn fragments_appear_verbatim_in_their_sections() {
        let doc = combined_document("<p>hi</p>", "p{color:red}", "console.log(1)");

        let style_open = doc.find("<style>").unwrap();
        let style_close = doc.find("</style>").unwrap();
        let styling_at = doc.find("p{color:red}").unwrap();
        assert!(style_open < styling_at && styling_at < style_close);

        let script_open = doc.find("<script>").unwrap();
        let script_close = doc.find("</script>").unwrap();
        let script_at = doc.find("console.log(1)").unwrap();
        assert!(script_open < script_at && script_at < script_close);

        let body_open = doc.find("<body>").unwrap();
        let markup_at = doc.find("<p>hi</p>").unwrap();
        assert!(body_open < markup_at && markup_at < script_open);

        // Head precedes body
        assert!(style_close < body_open);
    }

    #[test]
    fn composition_is_idempotent() {
        let a = combined_document("<div></div>", "div{}", "let x = 1;");
        let b = combined_document("<div></div>", "div{}", "let x = 1;");
        assert_eq!(a, b);
    }

    #[test]
    fn empty_panes_still_yield_a_document() {
        let doc = combined_document("", "", "");
        assert!(doc.starts_with("<html>"));
        assert!(doc.contains("<style>"));
        assert!(doc.contains("<script>"));
        assert!(doc.trim_end().ends_with("</html>"));
    }
}
