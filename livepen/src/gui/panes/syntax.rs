//! Syntax highlighting for the three pane languages

use std::borrow::Cow;

use floem::peniko::Color as PenikoColor;
use floem::text::{Attrs, AttrsList, FamilyOwned, Weight};
use floem::views::editor::EditorStyle;
use floem::views::editor::id::EditorId;
use floem::views::editor::text::Styling;
use livepen_core::LanguageKind;

use crate::gui::shared::Theme;

/// Token types for syntax highlighting
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TokenType {
    // Markup tokens
    Tag,        // <tagname>, </tagname>
    Attribute,  // attribute names
    AttrString, // attribute values in quotes
    Comment,    // <!-- -->, /* */, //
    Doctype,    // <!DOCTYPE html>

    // Styling tokens
    Selector,      // h1, .class, #id
    Property,      // color, margin
    PropertyValue, // red, 12px
    Brace,         // {}

    // Script tokens
    Keyword,      // const, function, return
    ScriptString, // "value", 'value', `value`
    Number,       // 123, 45.67

    // Common
    Plain,
}

/// A span of text with a specific token type
#[derive(Clone, Debug)]
pub struct TokenSpan {
    pub start: usize,
    pub end: usize,
    pub token_type: TokenType,
}

/// Colors for syntax highlighting, one set per theme
#[derive(Clone, Copy)]
pub struct SyntaxPalette {
    /// Stable identifier, used to tell palettes apart without comparing colors.
    pub id: &'static str,
    tag: PenikoColor,
    attribute: PenikoColor,
    string: PenikoColor,
    comment: PenikoColor,
    doctype: PenikoColor,
    selector: PenikoColor,
    property: PenikoColor,
    value: PenikoColor,
    brace: PenikoColor,
    keyword: PenikoColor,
    number: PenikoColor,
    plain: PenikoColor,
}

impl SyntaxPalette {
    pub const fn dark() -> Self {
        Self {
            id: "dark",
            tag: PenikoColor::rgba8(86, 156, 214, 255),        // Blue
            attribute: PenikoColor::rgba8(156, 220, 254, 255), // Light cyan
            string: PenikoColor::rgba8(206, 145, 120, 255),    // Orange/brown
            comment: PenikoColor::rgba8(106, 153, 85, 255),    // Green
            doctype: PenikoColor::rgba8(197, 134, 192, 255),   // Purple
            selector: PenikoColor::rgba8(215, 186, 125, 255),  // Gold
            property: PenikoColor::rgba8(156, 220, 254, 255),  // Light cyan
            value: PenikoColor::rgba8(206, 145, 120, 255),     // Orange/brown
            brace: PenikoColor::rgba8(212, 212, 212, 255),     // Light gray
            keyword: PenikoColor::rgba8(197, 134, 192, 255),   // Purple
            number: PenikoColor::rgba8(181, 206, 168, 255),    // Light green
            plain: PenikoColor::rgba8(212, 212, 212, 255),     // Light gray
        }
    }

    pub const fn light() -> Self {
        Self {
            id: "light",
            tag: PenikoColor::rgba8(0, 0, 255, 255),         // Blue
            attribute: PenikoColor::rgba8(255, 0, 0, 255),   // Red
            string: PenikoColor::rgba8(163, 21, 21, 255),    // Dark red
            comment: PenikoColor::rgba8(0, 128, 0, 255),     // Green
            doctype: PenikoColor::rgba8(128, 0, 128, 255),   // Purple
            selector: PenikoColor::rgba8(121, 94, 38, 255),  // Brown
            property: PenikoColor::rgba8(0, 16, 128, 255),   // Navy
            value: PenikoColor::rgba8(163, 21, 21, 255),     // Dark red
            brace: PenikoColor::rgba8(60, 60, 60, 255),      // Dark gray
            keyword: PenikoColor::rgba8(175, 0, 219, 255),   // Purple
            number: PenikoColor::rgba8(9, 134, 88, 255),     // Teal green
            plain: PenikoColor::rgba8(30, 30, 30, 255),      // Near black
        }
    }

    pub const fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self::dark(),
            Theme::Light => Self::light(),
        }
    }

    pub fn for_token(&self, token_type: TokenType) -> PenikoColor {
        match token_type {
            TokenType::Tag => self.tag,
            TokenType::Attribute => self.attribute,
            TokenType::AttrString => self.string,
            TokenType::Comment => self.comment,
            TokenType::Doctype => self.doctype,
            TokenType::Selector => self.selector,
            TokenType::Property => self.property,
            TokenType::PropertyValue => self.value,
            TokenType::Brace => self.brace,
            TokenType::Keyword => self.keyword,
            TokenType::ScriptString => self.string,
            TokenType::Number => self.number,
            TokenType::Plain => self.plain,
        }
    }
}

// Helper to safely compare a string slice at a byte position
fn safe_starts_with(text: &str, pos: usize, pattern: &str) -> bool {
    text.get(pos..)
        .map(|s| s.starts_with(pattern))
        .unwrap_or(false)
}

// Helper to find the end position of a byte pattern
fn find_pattern(bytes: &[u8], start: usize, pattern: &[u8]) -> Option<usize> {
    if pattern.is_empty() {
        return Some(start);
    }
    let mut pos = start;
    while pos + pattern.len() <= bytes.len() {
        if &bytes[pos..pos + pattern.len()] == pattern {
            return Some(pos);
        }
        pos += 1;
    }
    None
}

/// Tokenize markup content for syntax highlighting
pub fn tokenize_markup(text: &str) -> Vec<TokenSpan> {
    let mut tokens = Vec::new();
    let mut pos = 0;
    let bytes = text.as_bytes();
    let len = bytes.len();

    while pos < len {
        // Skip non-ASCII bytes (like BOM)
        if !bytes[pos].is_ascii() {
            pos += 1;
            continue;
        }

        // Check for comment: <!-- ... -->
        if safe_starts_with(text, pos, "<!--") {
            let start = pos;
            pos += 4;
            if let Some(end_pos) = find_pattern(bytes, pos, b"-->") {
                pos = end_pos + 3;
            } else {
                pos = len;
            }
            tokens.push(TokenSpan {
                start,
                end: pos,
                token_type: TokenType::Comment,
            });
            continue;
        }

        // Check for doctype or other declaration: <! ... >
        if safe_starts_with(text, pos, "<!") {
            let start = pos;
            pos += 2;
            while pos < len && bytes[pos] != b'>' {
                pos += 1;
            }
            if pos < len {
                pos += 1;
            }
            tokens.push(TokenSpan {
                start,
                end: pos,
                token_type: TokenType::Doctype,
            });
            continue;
        }

        // Check for tag: < ... >
        if bytes[pos] == b'<' {
            let tag_start = pos;
            pos += 1;

            // Skip whitespace
            while pos < len && (bytes[pos] == b' ' || bytes[pos] == b'\t') {
                pos += 1;
            }

            // Check for closing tag
            if pos < len && bytes[pos] == b'/' {
                pos += 1;
            }

            // Read tag name
            let name_start = pos;
            while pos < len
                && (bytes[pos].is_ascii_alphanumeric() || bytes[pos] == b'_' || bytes[pos] == b'-')
            {
                pos += 1;
            }
            let name_end = pos;

            // Add tag name token (including the < and optional /)
            if name_end > name_start {
                tokens.push(TokenSpan {
                    start: tag_start,
                    end: name_end,
                    token_type: TokenType::Tag,
                });
            }

            // Parse attributes until > or />
            while pos < len && bytes[pos] != b'>' {
                // Skip whitespace
                while pos < len && bytes[pos].is_ascii_whitespace() {
                    pos += 1;
                }

                if pos >= len || bytes[pos] == b'>' || bytes[pos] == b'/' {
                    break;
                }

                // Read attribute name
                let attr_start = pos;
                while pos < len
                    && (bytes[pos].is_ascii_alphanumeric()
                        || bytes[pos] == b'_'
                        || bytes[pos] == b'-')
                {
                    pos += 1;
                }

                if pos > attr_start {
                    tokens.push(TokenSpan {
                        start: attr_start,
                        end: pos,
                        token_type: TokenType::Attribute,
                    });
                } else {
                    // Not an attribute name; skip one byte to make progress
                    pos += 1;
                    continue;
                }

                // Skip whitespace and =
                while pos < len && (bytes[pos] == b' ' || bytes[pos] == b'\t' || bytes[pos] == b'=')
                {
                    pos += 1;
                }

                // Read attribute value (quoted string)
                if pos < len && (bytes[pos] == b'"' || bytes[pos] == b'\'') {
                    let quote = bytes[pos];
                    let value_start = pos;
                    pos += 1;
                    while pos < len && bytes[pos] != quote {
                        pos += 1;
                    }
                    if pos < len {
                        pos += 1; // Include closing quote
                    }
                    tokens.push(TokenSpan {
                        start: value_start,
                        end: pos,
                        token_type: TokenType::AttrString,
                    });
                }
            }

            // Handle /> or >
            if pos < len {
                let close_start = pos;
                if bytes[pos] == b'/' {
                    pos += 1;
                }
                if pos < len && bytes[pos] == b'>' {
                    pos += 1;
                }
                tokens.push(TokenSpan {
                    start: close_start,
                    end: pos,
                    token_type: TokenType::Tag,
                });
            }
            continue;
        }

        // Plain text - skip to next <
        let start = pos;
        while pos < len && bytes[pos] != b'<' {
            pos += 1;
        }
        if pos > start {
            tokens.push(TokenSpan {
                start,
                end: pos,
                token_type: TokenType::Plain,
            });
        }
    }

    tokens
}

/// Tokenize styling content for syntax highlighting
pub fn tokenize_styling(text: &str) -> Vec<TokenSpan> {
    let mut tokens = Vec::new();
    let mut pos = 0;
    let bytes = text.as_bytes();
    let len = bytes.len();

    // Outside braces we are reading selectors; inside, property then value.
    let mut in_block = false;
    let mut after_colon = false;

    while pos < len {
        let ch = bytes[pos];

        if ch.is_ascii_whitespace() || !ch.is_ascii() {
            pos += 1;
            continue;
        }

        // Comment: /* ... */
        if ch == b'/' && safe_starts_with(text, pos, "/*") {
            let start = pos;
            pos += 2;
            if let Some(end_pos) = find_pattern(bytes, pos, b"*/") {
                pos = end_pos + 2;
            } else {
                pos = len;
            }
            tokens.push(TokenSpan {
                start,
                end: pos,
                token_type: TokenType::Comment,
            });
            continue;
        }

        match ch {
            b'{' => {
                tokens.push(TokenSpan {
                    start: pos,
                    end: pos + 1,
                    token_type: TokenType::Brace,
                });
                in_block = true;
                after_colon = false;
                pos += 1;
            }
            b'}' => {
                tokens.push(TokenSpan {
                    start: pos,
                    end: pos + 1,
                    token_type: TokenType::Brace,
                });
                in_block = false;
                after_colon = false;
                pos += 1;
            }
            b':' => {
                if in_block {
                    after_colon = true;
                }
                pos += 1;
            }
            b';' => {
                after_colon = false;
                pos += 1;
            }
            _ => {
                // Run of selector, property or value text
                let start = pos;
                while pos < len
                    && !matches!(bytes[pos], b'{' | b'}' | b':' | b';')
                    && !(bytes[pos] == b'/' && safe_starts_with(text, pos, "/*"))
                {
                    pos += 1;
                }

                // Trim trailing whitespace from the span
                let mut end = pos;
                while end > start && bytes[end - 1].is_ascii_whitespace() {
                    end -= 1;
                }

                if end > start {
                    let token_type = if !in_block {
                        TokenType::Selector
                    } else if after_colon {
                        TokenType::PropertyValue
                    } else {
                        TokenType::Property
                    };
                    tokens.push(TokenSpan {
                        start,
                        end,
                        token_type,
                    });
                }
            }
        }
    }

    tokens
}

const SCRIPT_KEYWORDS: &[&str] = &[
    "async", "await", "break", "case", "catch", "class", "const", "continue", "default", "delete",
    "do", "else", "export", "extends", "false", "finally", "for", "function", "if", "import", "in",
    "instanceof", "let", "new", "null", "of", "return", "static", "super", "switch", "this",
    "throw", "true", "try", "typeof", "undefined", "var", "void", "while", "yield",
];

/// Tokenize script content for syntax highlighting
pub fn tokenize_script(text: &str) -> Vec<TokenSpan> {
    let mut tokens = Vec::new();
    let mut pos = 0;
    let bytes = text.as_bytes();
    let len = bytes.len();

    while pos < len {
        let ch = bytes[pos];

        if ch.is_ascii_whitespace() || !ch.is_ascii() {
            pos += 1;
            continue;
        }

        // Line comment: // ...
        if ch == b'/' && safe_starts_with(text, pos, "//") {
            let start = pos;
            while pos < len && bytes[pos] != b'\n' {
                pos += 1;
            }
            tokens.push(TokenSpan {
                start,
                end: pos,
                token_type: TokenType::Comment,
            });
            continue;
        }

        // Block comment: /* ... */
        if ch == b'/' && safe_starts_with(text, pos, "/*") {
            let start = pos;
            pos += 2;
            if let Some(end_pos) = find_pattern(bytes, pos, b"*/") {
                pos = end_pos + 2;
            } else {
                pos = len;
            }
            tokens.push(TokenSpan {
                start,
                end: pos,
                token_type: TokenType::Comment,
            });
            continue;
        }

        // String: "...", '...' or `...`
        if ch == b'"' || ch == b'\'' || ch == b'`' {
            let quote = ch;
            let start = pos;
            pos += 1;
            while pos < len {
                if bytes[pos] == b'\\' && pos + 1 < len {
                    pos += 2; // Skip escaped character
                } else if bytes[pos] == quote {
                    pos += 1;
                    break;
                } else {
                    pos += 1;
                }
            }
            tokens.push(TokenSpan {
                start,
                end: pos,
                token_type: TokenType::ScriptString,
            });
            continue;
        }

        // Numbers
        if ch.is_ascii_digit() {
            let start = pos;
            while pos < len && bytes[pos].is_ascii_digit() {
                pos += 1;
            }
            // Decimal part
            if pos < len && bytes[pos] == b'.' {
                pos += 1;
                while pos < len && bytes[pos].is_ascii_digit() {
                    pos += 1;
                }
            }
            // Exponent
            if pos < len && (bytes[pos] == b'e' || bytes[pos] == b'E') {
                pos += 1;
                if pos < len && (bytes[pos] == b'+' || bytes[pos] == b'-') {
                    pos += 1;
                }
                while pos < len && bytes[pos].is_ascii_digit() {
                    pos += 1;
                }
            }
            tokens.push(TokenSpan {
                start,
                end: pos,
                token_type: TokenType::Number,
            });
            continue;
        }

        // Identifier or keyword
        if ch.is_ascii_alphabetic() || ch == b'_' || ch == b'$' {
            let start = pos;
            while pos < len
                && (bytes[pos].is_ascii_alphanumeric() || bytes[pos] == b'_' || bytes[pos] == b'$')
            {
                pos += 1;
            }
            let word = &text[start..pos];
            if SCRIPT_KEYWORDS.contains(&word) {
                tokens.push(TokenSpan {
                    start,
                    end: pos,
                    token_type: TokenType::Keyword,
                });
            }
            continue;
        }

        // Punctuation or unknown character - skip
        pos += 1;
    }

    tokens
}

/// Custom styling for syntax highlighting
#[derive(Clone)]
pub struct SyntaxStyling {
    id: u64,
    tokens: Vec<TokenSpan>,
    line_offsets: Vec<usize>, // Byte offset where each line starts
    palette: SyntaxPalette,
    font_size: usize,
}

impl SyntaxStyling {
    pub fn new(text: &str, language: LanguageKind, theme: Theme) -> Self {
        let tokens = match language {
            LanguageKind::Markup => tokenize_markup(text),
            LanguageKind::Styling => tokenize_styling(text),
            LanguageKind::Script => tokenize_script(text),
        };

        // Compute line offsets
        let mut line_offsets = vec![0];
        for (i, ch) in text.char_indices() {
            if ch == '\n' {
                line_offsets.push(i + 1);
            }
        }

        let palette = SyntaxPalette::for_theme(theme);

        // Generate a unique id based on content, language and palette
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};
        let mut hasher = DefaultHasher::new();
        text.hash(&mut hasher);
        language.index().hash(&mut hasher);
        palette.id.hash(&mut hasher);
        let id = hasher.finish();

        Self {
            id,
            tokens,
            line_offsets,
            palette,
            font_size: 14,
        }
    }

    /// Get the byte offset for the start of a line
    fn line_start(&self, line: usize) -> usize {
        self.line_offsets.get(line).copied().unwrap_or(0)
    }
}

impl Styling for SyntaxStyling {
    fn id(&self) -> u64 {
        self.id
    }

    fn font_size(&self, _edid: EditorId, _line: usize) -> usize {
        self.font_size
    }

    fn line_height(&self, _edid: EditorId, _line: usize) -> f32 {
        let font_size = self.font_size as f32;
        (1.5 * font_size).round().max(font_size)
    }

    fn font_family(&self, _edid: EditorId, _line: usize) -> Cow<'_, [FamilyOwned]> {
        Cow::Owned(vec![FamilyOwned::Monospace])
    }

    fn weight(&self, _edid: EditorId, _line: usize) -> Weight {
        Weight::NORMAL
    }

    fn italic_style(&self, _edid: EditorId, _line: usize) -> floem::text::Style {
        floem::text::Style::Normal
    }

    fn apply_attr_styles(
        &self,
        _edid: EditorId,
        _style: &EditorStyle,
        line: usize,
        _default: Attrs,
        attrs: &mut AttrsList,
    ) {
        let line_start = self.line_start(line);
        // Get line end from next line offset, or use a large value
        let line_end = self
            .line_offsets
            .get(line + 1)
            .copied()
            .unwrap_or(usize::MAX);

        for span in &self.tokens {
            // Check if span overlaps with line
            if span.end <= line_start || span.start >= line_end {
                continue;
            }

            // Calculate the range within the line
            let span_start_in_line = span.start.saturating_sub(line_start);
            let span_end_in_line = (span.end - line_start).min(line_end - line_start);

            if span_start_in_line < span_end_in_line {
                let color = self.palette.for_token(span.token_type);
                attrs.add_span(
                    span_start_in_line..span_end_in_line,
                    Attrs::new().color(color),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans_of(tokens: &[TokenSpan], text: &str) -> Vec<(String, TokenType)> {
        tokens
            .iter()
            .map(|t| (text[t.start..t.end].to_string(), t.token_type))
            .collect()
    }

    #[test]
    fn markup_tags_attributes_and_strings_tokenize() {
        let text = "<a href=\"x\">hi</a>";
        let spans = spans_of(&tokenize_markup(text), text);
        assert!(spans.contains(&("<a".to_string(), TokenType::Tag)));
        assert!(spans.contains(&("href".to_string(), TokenType::Attribute)));
        assert!(spans.contains(&("\"x\"".to_string(), TokenType::AttrString)));
        assert!(spans.contains(&("hi".to_string(), TokenType::Plain)));
        assert!(spans.contains(&("</a".to_string(), TokenType::Tag)));
    }

    #[test]
    fn styling_rules_split_into_selector_property_value() {
        let text = "h1 {\n  color: red;\n}";
        let spans = spans_of(&tokenize_styling(text), text);
        assert!(spans.contains(&("h1".to_string(), TokenType::Selector)));
        assert!(spans.contains(&("color".to_string(), TokenType::Property)));
        assert!(spans.contains(&("red".to_string(), TokenType::PropertyValue)));
        assert!(spans.contains(&("{".to_string(), TokenType::Brace)));
        assert!(spans.contains(&("}".to_string(), TokenType::Brace)));
    }

    #[test]
    fn script_keywords_strings_and_numbers_tokenize() {
        let text = "const n = 42; // answer\nlet s = \"hi\";";
        let spans = spans_of(&tokenize_script(text), text);
        assert!(spans.contains(&("const".to_string(), TokenType::Keyword)));
        assert!(spans.contains(&("let".to_string(), TokenType::Keyword)));
        assert!(spans.contains(&("42".to_string(), TokenType::Number)));
        assert!(spans.contains(&("\"hi\"".to_string(), TokenType::ScriptString)));
        assert!(spans.contains(&("// answer".to_string(), TokenType::Comment)));
    }

    #[test]
    fn unterminated_constructs_do_not_hang_or_panic() {
        tokenize_markup("<div class=\"open");
        tokenize_styling("/* never closed");
        tokenize_script("`template without end");
    }

    #[test]
    fn palette_follows_the_theme_and_round_trips() {
        let dark = SyntaxPalette::for_theme(Theme::Dark);
        let light = SyntaxPalette::for_theme(Theme::Light);
        assert_ne!(dark.id, light.id);

        let round_trip = SyntaxPalette::for_theme(Theme::Dark.toggled().toggled());
        assert_eq!(round_trip.id, dark.id);
    }
}
