/// Code span inline type with owned delimiter constant.
///
/// Code spans are "raw zones": single-backtick delimited, non-empty, with no
/// backtick inside. Nothing inside them is scanned further.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';

    /// Placeholder token standing in for the `n`th code span of one
    /// extraction pass.
    pub fn placeholder(n: usize) -> String {
        format!("INLINECODE{n}PLACEHOLDER")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholders_do_not_prefix_each_other() {
        let one = CodeSpan::placeholder(1);
        let ten = CodeSpan::placeholder(10);
        assert!(!ten.contains(&one));
        assert!(!one.contains(&ten));
    }
}
