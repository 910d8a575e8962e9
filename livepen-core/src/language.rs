//! Content languages for the three editor panes

/// The three content types a playground document is assembled from.
///
/// The order is fixed: markup, styling, script. Pane indices throughout the
/// GUI follow this order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LanguageKind {
    Markup,
    Styling,
    Script,
}

impl LanguageKind {
    /// All kinds in pane order.
    pub const ALL: [LanguageKind; 3] = [
        LanguageKind::Markup,
        LanguageKind::Styling,
        LanguageKind::Script,
    ];

    /// Short label shown on the pane tab.
    pub fn label(self) -> &'static str {
        match self {
            LanguageKind::Markup => "HTML",
            LanguageKind::Styling => "CSS",
            LanguageKind::Script => "JS",
        }
    }

    /// Glyph prefixed to the pane tab label.
    pub fn glyph(self) -> &'static str {
        match self {
            LanguageKind::Markup => "📄",
            LanguageKind::Styling => "🎨",
            LanguageKind::Script => "⚡",
        }
    }

    /// File-dialog filter for importing into a pane of this kind.
    pub fn dialog_filter(self) -> (&'static str, &'static [&'static str]) {
        match self {
            LanguageKind::Markup => ("HTML", &["html", "htm"]),
            LanguageKind::Styling => ("CSS", &["css"]),
            LanguageKind::Script => ("JavaScript", &["js", "mjs"]),
        }
    }

    /// Pane index of this kind (0, 1 or 2).
    pub fn index(self) -> usize {
        match self {
            LanguageKind::Markup => 0,
            LanguageKind::Styling => 1,
            LanguageKind::Script => 2,
        }
    }

    /// Kind at the given pane index, if in range.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trips() {
        for kind in LanguageKind::ALL {
            assert_eq!(LanguageKind::from_index(kind.index()), Some(kind));
        }
        assert_eq!(LanguageKind::from_index(3), None);
    }

    #[test]
    fn labels_are_distinct() {
        assert_eq!(LanguageKind::Markup.label(), "HTML");
        assert_eq!(LanguageKind::Styling.label(), "CSS");
        assert_eq!(LanguageKind::Script.label(), "JS");
    }
}
