use std::collections::HashMap;

use super::blocks::DocumentElement;

/// Rebuilds a document from its parsed elements and a position-keyed map of
/// rewritten payloads.
///
/// Elements without an entry are emitted byte-identically. The map may be
/// filled in any order; output order always follows `position`.
pub fn reconstruct(elements: &[DocumentElement], rewritten: &HashMap<usize, String>) -> String {
    let lines: Vec<String> = elements
        .iter()
        .map(|el| match rewritten.get(&el.position) {
            Some(text) => el.render_rewritten(text).unwrap_or_else(|| {
                log::debug!(
                    "Ignoring rewrite for non-rewritable {} at position {}",
                    el.kind.label(),
                    el.position
                );
                el.raw_text.clone()
            }),
            None => el.raw_text.clone(),
        })
        .collect();

    log::debug!(
        "Reassembled {} elements ({} rewritten)",
        elements.len(),
        rewritten.len()
    );
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::parse_document;
    use pretty_assertions::assert_eq;

    const DOC: &str = "# Title\n\nIntro line.\n- first item\n1. ordered\n> quoted text\n```\ncode\n```";

    #[test]
    fn empty_map_reproduces_source() {
        let doc = parse_document(DOC);
        assert_eq!(reconstruct(&doc.elements, &HashMap::new()), DOC);
    }

    #[test]
    fn rewritten_elements_keep_their_markers() {
        let doc = parse_document(DOC);
        let map = HashMap::from([
            (2, "New intro.".to_string()),
            (3, "changed item".to_string()),
            (4, "changed ordered".to_string()),
            (5, "changed quote".to_string()),
        ]);
        assert_eq!(
            reconstruct(&doc.elements, &map),
            "# Title\n\nNew intro.\n- changed item\n1. changed ordered\n> changed quote\n```\ncode\n```"
        );
    }

    #[test]
    fn stray_entries_for_structure_are_ignored() {
        let doc = parse_document(DOC);
        let map = HashMap::from([(0, "Hijacked".to_string()), (6, "nope".to_string())]);
        assert_eq!(reconstruct(&doc.elements, &map), DOC);
    }

    #[test]
    fn whitespace_is_preserved_on_untouched_lines() {
        let src = "  indented para  \n\t\n   ";
        let doc = parse_document(src);
        assert_eq!(reconstruct(&doc.elements, &HashMap::new()), src);
    }
}
