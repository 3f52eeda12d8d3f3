use super::{
    kinds::{BlockQuote, Heading, LinkDefinition, OrderedItem, ThematicBreak, UnorderedItem},
    types::ElementKind,
};

/// One single-line classification rule.
///
/// Rules are evaluated in [`LINE_RULES`] order and the first match wins.
/// Code fences are not in this list: they span lines and are handled by the
/// builder before any rule is consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRule {
    Heading,
    HorizontalRule,
    LinkDefinition,
    BlockQuote,
    OrderedListItem,
    UnorderedListItem,
    Blank,
}

/// Priority order of the line rules. Headings, rules and link definitions
/// pre-empt list and paragraph classification.
pub const LINE_RULES: [LineRule; 7] = [
    LineRule::Heading,
    LineRule::HorizontalRule,
    LineRule::LinkDefinition,
    LineRule::BlockQuote,
    LineRule::OrderedListItem,
    LineRule::UnorderedListItem,
    LineRule::Blank,
];

impl LineRule {
    /// Applies this rule to a line, returning the element kind on a match.
    pub fn apply(self, line: &str) -> Option<ElementKind> {
        match self {
            LineRule::Heading => Heading::parse(line).map(|(level, text)| ElementKind::Heading {
                level,
                text: text.to_string(),
            }),
            LineRule::HorizontalRule => {
                ThematicBreak::matches(line).then_some(ElementKind::HorizontalRule)
            }
            LineRule::LinkDefinition => {
                LinkDefinition::parse(line).map(|(label, target)| ElementKind::LinkDefinition {
                    label: label.to_string(),
                    target: target.to_string(),
                })
            }
            LineRule::BlockQuote => BlockQuote::parse(line).map(|text| ElementKind::BlockQuote {
                text: text.to_string(),
            }),
            LineRule::OrderedListItem => {
                OrderedItem::parse(line).map(|(marker, text)| ElementKind::OrderedListItem {
                    marker: marker.to_string(),
                    text: text.to_string(),
                })
            }
            LineRule::UnorderedListItem => {
                UnorderedItem::parse(line).map(|(marker, text)| ElementKind::UnorderedListItem {
                    marker: marker.to_string(),
                    text: text.to_string(),
                })
            }
            LineRule::Blank => line.trim().is_empty().then_some(ElementKind::Blank),
        }
    }
}

/// Classifies individual non-fence lines.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line by the first matching rule, falling back to a
    /// paragraph.
    pub fn classify(&self, line: &str) -> ElementKind {
        LINE_RULES
            .iter()
            .find_map(|rule| rule.apply(line))
            .unwrap_or(ElementKind::Paragraph)
    }
}
