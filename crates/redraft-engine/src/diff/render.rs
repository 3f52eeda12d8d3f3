use serde::Serialize;

use super::{Comparison, OpTag};

const REMOVED_STYLE: &str =
    "color: #ffcccc; padding: 2px 4px; border-radius: 3px; text-decoration: line-through;";
const ADDED_STYLE: &str = "color: #ccffcc; padding: 2px 4px; border-radius: 3px; font-weight: 500;";

/// HTML markup of both sides of a comparison. Words are escaped; removed or
/// replaced words are struck through on the original side and added or
/// replacing words are emphasised on the rewritten side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HighlightedDiff {
    pub original: String,
    pub rewritten: String,
}

pub fn highlight(comparison: &Comparison) -> HighlightedDiff {
    let mut original = vec![];
    let mut rewritten = vec![];

    for op in &comparison.ops {
        let left = escape_join(&comparison.original_words[op.original.clone()]);
        let right = escape_join(&comparison.rewritten_words[op.rewritten.clone()]);
        match op.tag {
            OpTag::Equal => {
                original.push(left);
                rewritten.push(right);
            }
            OpTag::Replace => {
                original.push(styled(REMOVED_STYLE, &left));
                rewritten.push(styled(ADDED_STYLE, &right));
            }
            OpTag::Delete => original.push(styled(REMOVED_STYLE, &left)),
            OpTag::Insert => rewritten.push(styled(ADDED_STYLE, &right)),
        }
    }

    HighlightedDiff {
        original: original.join(" "),
        rewritten: rewritten.join(" "),
    }
}

fn escape_join(words: &[String]) -> String {
    html_escape::encode_text(&words.join(" ")).into_owned()
}

fn styled(style: &str, inner: &str) -> String {
    format!(r#"<span style="{style}">{inner}</span>"#)
}
