//! Styled alert bodies
//!
//! A few alerts replace their plain message with a span list: bold ranges,
//! tappable link ranges, inline icon attachments. Tones are semantic so the
//! presenter maps them onto whatever palette it renders with.

/// Semantic tone of a text span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextTone {
    Body,
    Accent,
}

/// One span of a styled body.
#[derive(Debug, Clone, PartialEq)]
pub enum Span {
    Text {
        text: String,
        tone: TextTone,
        bold: bool,
        /// Link target opened when the span is activated
        link: Option<String>,
    },
    /// Inline image attachment
    Icon { name: String, w: f32, h: f32 },
}

/// Styled body text for custom alert presentations.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyledText {
    pub spans: Vec<Span>,
}

impl StyledText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plain(text: &str) -> Self {
        Self::new().text(text)
    }

    pub fn text(mut self, text: &str) -> Self {
        self.spans.push(Span::Text {
            text: text.to_string(),
            tone: TextTone::Body,
            bold: false,
            link: None,
        });
        self
    }

    pub fn bold_accent(mut self, text: &str) -> Self {
        self.spans.push(Span::Text {
            text: text.to_string(),
            tone: TextTone::Accent,
            bold: true,
            link: None,
        });
        self
    }

    pub fn link(mut self, text: &str, target: &str) -> Self {
        self.spans.push(Span::Text {
            text: text.to_string(),
            tone: TextTone::Accent,
            bold: false,
            link: Some(target.to_string()),
        });
        self
    }

    pub fn icon(mut self, name: &str, w: f32, h: f32) -> Self {
        self.spans.push(Span::Icon {
            name: name.to_string(),
            w,
            h,
        });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Flatten to a plain string, skipping attachments.
    pub fn to_plain_string(&self) -> String {
        self.spans
            .iter()
            .filter_map(|span| match span {
                Span::Text { text, .. } => Some(text.as_str()),
                Span::Icon { .. } => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_order() {
        let body = StyledText::new()
            .text("Route your ")
            .icon("p2p-white", 15.0, 12.0)
            .text(" traffic");

        assert_eq!(body.spans.len(), 3);
        assert!(matches!(&body.spans[1], Span::Icon { name, .. } if name == "p2p-white"));
    }

    #[test]
    fn test_plain_string_skips_icons() {
        let body = StyledText::new()
            .text("a")
            .icon("x", 1.0, 1.0)
            .bold_accent("b");
        assert_eq!(body.to_plain_string(), "ab");
    }

    #[test]
    fn test_link_span() {
        let body = StyledText::new().link("Preferences", "lumen-vpn://settings/connection");
        assert!(matches!(
            &body.spans[0],
            Span::Text { link: Some(target), .. } if target == "lumen-vpn://settings/connection"
        ));
    }
}
