//! Naive line-based re-indenter.
//!
//! Not a real parser: a running indent level is adjusted from what the end
//! of each trimmed line looks like. Unbalanced or multi-token lines produce
//! cosmetically wrong but valid output. Always terminates and always keeps
//! the input's line count.

use crate::language::LanguageKind;

/// Spaces per indent level.
const INDENT_SIZE: usize = 2;

/// Re-indent `text` using bracket (and, for markup, tag) heuristics.
///
/// This function is the whole formatter surface - a real pretty-printer
/// could replace the body without the callers noticing.
pub fn reindent(text: &str, kind: LanguageKind) -> String {
    let mut indent_level: usize = 0;

    let formatted: Vec<String> = text
        .split('\n')
        .map(|raw| {
            let line = raw.trim();
            if line.is_empty() {
                return String::new();
            }

            if opens_block(line, kind) {
                let out = indented(line, indent_level);
                indent_level += 1;
                out
            } else if closes_block(line, kind) {
                indent_level = indent_level.saturating_sub(1);
                indented(line, indent_level)
            } else {
                indented(line, indent_level)
            }
        })
        .collect();

    formatted.join("\n")
}

fn indented(line: &str, level: usize) -> String {
    let mut out = " ".repeat(level * INDENT_SIZE);
    out.push_str(line);
    out
}

/// Lines after this one go one level deeper.
fn opens_block(line: &str, kind: LanguageKind) -> bool {
    if line.ends_with('{') || line.ends_with('[') || line.ends_with('(') {
        return true;
    }
    kind == LanguageKind::Markup && ends_with_opening_tag(line)
}

/// This line itself moves one level back out.
fn closes_block(line: &str, kind: LanguageKind) -> bool {
    if line.starts_with('}') || line.starts_with(']') || line.starts_with(')') {
        return true;
    }
    kind == LanguageKind::Markup && line.starts_with("</")
}

/// True if the line ends in an opening tag like `<div>` or `<ul class="x">`,
/// but not a closing tag (`</div>`) or a self-closing one (`<br/>`).
fn ends_with_opening_tag(line: &str) -> bool {
    if !line.ends_with('>') || line.ends_with("/>") {
        return false;
    }
    let Some(start) = line.rfind('<') else {
        return false;
    };
    let tag = &line[start..];
    if tag.starts_with("</") {
        return false;
    }
    tag[1..]
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn pre_trimmed_single_level_is_a_fixed_point() {
        let input = "div {\n  color:red;\n}";
        let once = reindent(input, LanguageKind::Styling);
        assert_eq!(once, input);
        let twice = reindent(&once, LanguageKind::Styling);
        assert_eq!(twice, once);
    }

    #[test]
    fn markup_children_indent_under_opening_tags() {
        let input = "<ul>\n<li>one</li>\n<li>two</li>\n</ul>";
        let expected = "<ul>\n  <li>one</li>\n  <li>two</li>\n</ul>";
        assert_eq!(reindent(input, LanguageKind::Markup), expected);
    }

    #[test]
    fn self_closing_and_complete_tags_do_not_open_blocks() {
        let input = "<br/>\n<p>done</p>\n<hr/>";
        assert_eq!(reindent(input, LanguageKind::Markup), input);
    }

    #[test]
    fn script_parens_and_brackets_nest() {
        let input = "register(\n\"name\",\n[\n1,\n2,\n]\n)";
        let expected = "register(\n  \"name\",\n  [\n    1,\n    2,\n  ]\n)";
        assert_eq!(reindent(input, LanguageKind::Script), expected);
    }

    #[test]
    fn unbalanced_input_keeps_line_count_and_floors_at_zero() {
        let input = "}\n}\n{\ntext";
        let out = reindent(input, LanguageKind::Script);
        assert_eq!(out.split('\n').count(), input.split('\n').count());
        // The stray closers floor at level zero instead of going negative.
        assert_eq!(out, "}\n}\n{\n  text");
    }

    #[test]
    fn trailing_newline_is_preserved() {
        let out = reindent("a {\n}\n", LanguageKind::Styling);
        assert_eq!(out, "a {\n}\n");
    }

    #[test]
    fn blank_lines_stay_empty() {
        let out = reindent("div {\n\ncolor:red;\n}", LanguageKind::Styling);
        assert_eq!(out, "div {\n\n  color:red;\n}");
    }

    #[test]
    fn tag_heuristics_only_apply_to_markup() {
        // A stray generic-looking line in script is not treated as a tag.
        let input = "let a = x <div>\nb";
        let out = reindent(input, LanguageKind::Script);
        assert_eq!(out, "let a = x <div>\nb");
    }
}
