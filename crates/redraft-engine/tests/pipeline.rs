use pretty_assertions::assert_eq;
use redraft_engine::{
    CsvLog, DocumentReport, IdentityRewriter, Mode, RefineSettings, Refiner, SurfaceOracle,
    Warning, read_markdown_file,
    rewrite::{RewriteError, RewriteRequest, Rewriter},
    save_markdown_file,
};

/// Swaps one word, leaving everything else (including anchors) intact.
struct Synonyms;

impl Rewriter for Synonyms {
    fn rewrite(&self, request: &RewriteRequest) -> Result<String, RewriteError> {
        Ok(request
            .text
            .split(' ')
            .map(|w| if w == "quick" { "fast" } else { w })
            .collect::<Vec<_>>()
            .join(" "))
    }
}

const DOC: &str = "# Notes\n\nThe quick fox reads [the docs](https://d.io). It runs `cargo test` quickly.\n\n- a quick item\n\n```\nquick code\n```\n";

#[test]
fn markdown_document_end_to_end() {
    let dir = tempfile::TempDir::new().unwrap();
    let input = dir.path().join("notes.md");
    std::fs::write(&input, DOC).unwrap();

    // Given a markdown file on disk
    let original = read_markdown_file(&input).unwrap();

    // When it is refined and reported
    let refiner = Refiner::new(&Synonyms, RefineSettings::default());
    let refined = refiner.refine_markdown(&original).unwrap();
    let report = DocumentReport::build(
        &original,
        &refined.text,
        &SurfaceOracle::default(),
        Mode::Paraphrase,
        refined.model.name,
    );

    // Then only prose changed, with links and code intact
    assert_eq!(
        refined.text,
        "# Notes\n\nThe fast fox reads [the docs](https://d.io). It runs `cargo test` quickly.\n\n- a fast item\n\n```\nquick code\n```\n"
    );
    assert!(refined.warnings.is_empty());
    assert_eq!(refined.units, 3);
    assert_eq!(report.statistics.changed, 2);
    assert_eq!(
        report.statistics.substitutions,
        vec![
            ("quick".to_string(), "fast".to_string()),
            ("quick".to_string(), "fast".to_string())
        ]
    );

    // And the results can be persisted
    let log = CsvLog::new(dir.path().join("results.csv"));
    log.append(&report.to_log_record()).unwrap();
    let saved = save_markdown_file(&refined.text, "notes.md", &dir.path().join("out")).unwrap();
    assert_eq!(std::fs::read_to_string(saved).unwrap(), refined.text);
    let rows = std::fs::read_to_string(log.path()).unwrap();
    assert_eq!(rows.lines().count(), 2);
    assert!(rows.contains(",Paraphrase,ChatGPT-Style-T5,"));
}

#[test]
fn plain_text_identity_has_no_changes_within_chunks() {
    let text = "One sentence. Two sentence. Three sentence.";
    let refined = Refiner::new(&IdentityRewriter, RefineSettings::default())
        .refine_text(text)
        .unwrap();
    assert_eq!(refined.text, text);

    let report = DocumentReport::build(
        text,
        &refined.text,
        &SurfaceOracle::default(),
        Mode::Paraphrase,
        refined.model.name,
    );
    assert_eq!(report.statistics.percentage_unchanged, 100.0);
    assert_eq!(report.similarity, 1.0);
}

#[test]
fn broken_fence_still_round_trips() {
    let doc = "Intro.\n```\nnever closed\n- not a list";
    let refined = Refiner::new(&Synonyms, RefineSettings::default())
        .refine_markdown(doc)
        .unwrap();
    assert_eq!(refined.text, doc);
    assert_eq!(refined.warnings, vec![Warning::UnclosedFence { position: 1 }]);
}
