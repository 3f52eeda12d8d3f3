// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with `inline code` and a [link](https://example.com). It has two sentences.\n\n- Bullet point\n- Another item\n1. Ordered item\n> Quoted text here.\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n---\n[ref]: https://example.com\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_prose(sentences: usize) -> String {
    let pool = [
        "The model rewrites each sentence independently.",
        "Structure around the prose is kept exactly as written.",
        "Links and inline code survive the rewrite untouched.",
        "Word level statistics describe what changed.",
        "Repetition analysis flags stems used too often.",
    ];
    (0..sentences)
        .map(|i| pool[i % pool.len()])
        .collect::<Vec<_>>()
        .join(" ")
}

/// A light rewrite of `generate_prose`: every third word is swapped.
#[allow(dead_code)]
pub fn perturb(text: &str) -> String {
    text.split_whitespace()
        .enumerate()
        .map(|(i, w)| if i % 3 == 0 { "changed" } else { w })
        .collect::<Vec<_>>()
        .join(" ")
}
