use scanfold_core::{DocumentAccess, LexerRegistry, MemoryDocument, StyleRun, StyleTag};
use scanfold_props::{scan, ALLOW_INITIAL_SPACES, LANGUAGE_ID};

fn styled_doc(text: &str) -> MemoryDocument {
    let mut doc = MemoryDocument::from_text(text);
    let len = doc.char_count();
    scan(&mut doc, 0, len);
    doc
}

fn line_runs(doc: &MemoryDocument, line: usize) -> Vec<StyleRun> {
    let (start, end) = doc.line_range(line);
    doc.style_runs(start, end)
}

#[test]
fn test_full_document_styling() {
    let doc = styled_doc("[boot]\nkernel=vmlinuz ; default\n# notes\n@=auto\n");

    assert_eq!(
        line_runs(&doc, 0),
        vec![StyleRun::new(0, 6, StyleTag::Section)]
    );
    assert_eq!(
        line_runs(&doc, 1),
        vec![
            StyleRun::new(7, 13, StyleTag::Key),
            StyleRun::new(13, 14, StyleTag::Assignment),
            StyleRun::new(14, 22, StyleTag::Default),
            StyleRun::new(22, 31, StyleTag::Comment),
        ]
    );
    assert_eq!(
        line_runs(&doc, 2),
        vec![StyleRun::new(32, 39, StyleTag::Comment)]
    );
    assert_eq!(
        line_runs(&doc, 3),
        vec![
            StyleRun::new(40, 41, StyleTag::DefaultValueMarker),
            StyleRun::new(41, 42, StyleTag::Assignment),
            StyleRun::new(42, 46, StyleTag::Default),
        ]
    );
}

#[test]
fn test_terminators_are_styled_default() {
    let doc = styled_doc("[s]\nk=v\n");
    assert_eq!(doc.style_at(3), StyleTag::Default); // \n after the section
    assert_eq!(doc.style_at(7), StyleTag::Default); // \n after the value
}

#[test]
fn test_crlf_document() {
    let doc = styled_doc("[s]\r\nk=v\r\n");

    assert_eq!(
        line_runs(&doc, 0),
        vec![StyleRun::new(0, 3, StyleTag::Section)]
    );
    // Neither terminator character carries the section style.
    assert_eq!(doc.style_at(3), StyleTag::Default);
    assert_eq!(doc.style_at(4), StyleTag::Default);
    assert_eq!(
        line_runs(&doc, 1),
        vec![
            StyleRun::new(5, 6, StyleTag::Key),
            StyleRun::new(6, 7, StyleTag::Assignment),
            StyleRun::new(7, 8, StyleTag::Default),
        ]
    );
}

#[test]
fn test_bare_cr_line_boundary() {
    let doc = styled_doc("[a]\rk=v");

    assert_eq!(
        line_runs(&doc, 0),
        vec![StyleRun::new(0, 3, StyleTag::Section)]
    );
    assert_eq!(
        line_runs(&doc, 1),
        vec![
            StyleRun::new(4, 5, StyleTag::Key),
            StyleRun::new(5, 6, StyleTag::Assignment),
            StyleRun::new(6, 7, StyleTag::Default),
        ]
    );
}

#[test]
fn test_final_partial_line_uses_range_end() {
    let doc = styled_doc("[unterminated");
    assert_eq!(
        line_runs(&doc, 0),
        vec![StyleRun::new(0, 13, StyleTag::Section)]
    );
}

#[test]
fn test_chunked_scan_matches_full_scan() {
    let text = "[one]\nalpha=1\n\n[two]\nbeta = 2 ; note\n# tail\n";

    let full = styled_doc(text);

    let mut chunked = MemoryDocument::from_text(text);
    let len = chunked.char_count();
    // Split at a line start, as the re-scan contract requires.
    let split = chunked.line_start(3);
    scan(&mut chunked, 0, split);
    scan(&mut chunked, split, len - split);

    assert_eq!(full.style_runs(0, len), chunked.style_runs(0, len));
}

#[test]
fn test_rescan_of_middle_line_is_idempotent() {
    let text = "[one]\nalpha=1\n[two]\n";
    let mut doc = styled_doc(text);
    let before = doc.style_runs(0, doc.char_count());

    let (start, _) = doc.line_range(1);
    let next_start = doc.line_start(2);
    scan(&mut doc, start, next_start - start);

    assert_eq!(before, doc.style_runs(0, doc.char_count()));
}

#[test]
fn test_initial_spaces_config_disqualifies_indented_lines() {
    let mut doc = MemoryDocument::from_text("  key=value\n");
    doc.set_config(ALLOW_INITIAL_SPACES, 0);
    let len = doc.char_count();
    scan(&mut doc, 0, len);

    assert_eq!(
        line_runs(&doc, 0),
        vec![StyleRun::new(0, 11, StyleTag::Default)]
    );
}

#[test]
fn test_empty_range_is_a_noop() {
    let mut doc = MemoryDocument::from_text("k=v\n");
    scan(&mut doc, 0, 0);
    assert_eq!(doc.style_at(0), StyleTag::Default);
}

#[test]
fn test_lexer_through_registry() {
    let mut registry = LexerRegistry::new();
    scanfold_props::register(&mut registry).unwrap();
    let lexer = registry.get(LANGUAGE_ID).expect("props lexer registered");

    let mut doc = MemoryDocument::from_text("[s]\nk=v\n");
    let len = doc.char_count();
    lexer.scan(&mut doc, 0, len);
    lexer.fold(&mut doc, 0, len);

    assert_eq!(doc.style_at(0), StyleTag::Section);
    assert!(doc.fold_level(0).is_header);
    assert!(!doc.fold_level(1).is_header);
}

#[test]
fn test_duplicate_registration_fails() {
    let mut registry = LexerRegistry::new();
    scanfold_props::register(&mut registry).unwrap();
    assert!(scanfold_props::register(&mut registry).is_err());
}
