use std::fmt;

use serde::Serialize;

use crate::parsing::blocks::{DocumentElement, ElementKind};

/// Stable, human-readable summary of a parse.
#[derive(Debug, Serialize)]
pub struct Snap {
    pub elements: Vec<ElementSnap>,
}

#[derive(Debug, Serialize)]
pub struct ElementSnap {
    pub kind: String,
    pub span: (usize, usize),
    pub rewritable: bool,
    pub text: String,
}

pub fn normalize(elements: &[DocumentElement]) -> Snap {
    let elements = elements
        .iter()
        .map(|el| {
            let kind = match &el.kind {
                ElementKind::Heading { level, .. } => format!("Heading({level})"),
                ElementKind::CodeBlock { closed: true } => "CodeBlock".to_string(),
                ElementKind::CodeBlock { closed: false } => "CodeBlock(unclosed)".to_string(),
                ElementKind::HorizontalRule => "HorizontalRule".to_string(),
                ElementKind::LinkDefinition { label, .. } => format!("LinkDefinition({label})"),
                ElementKind::BlockQuote { .. } => "BlockQuote".to_string(),
                ElementKind::OrderedListItem { marker, .. } => format!("Ordered({marker})"),
                ElementKind::UnorderedListItem { marker, .. } => format!("Unordered({marker})"),
                ElementKind::Paragraph => "Paragraph".to_string(),
                ElementKind::Blank => "Blank".to_string(),
            };
            ElementSnap {
                kind,
                span: (el.span.start, el.span.end),
                rewritable: el.is_rewritable(),
                text: preview(&el.raw_text, 40),
            }
        })
        .collect();

    Snap { elements }
}

fn preview(s: &str, max: usize) -> String {
    let mut out: String = s.chars().take(max).collect();
    if s.chars().count() > max {
        out.push('…');
    }
    out
}

impl fmt::Display for Snap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, el) in self.elements.iter().enumerate() {
            let marker = if el.rewritable { "*" } else { " " };
            writeln!(
                f,
                "{i:02}{marker} {} {}..{} |{}|",
                el.kind,
                el.span.0,
                el.span.1,
                el.text.replace('\n', "\\n")
            )?;
        }
        Ok(())
    }
}
