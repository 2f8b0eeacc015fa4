use scanfold_core::{DocumentAccess, LexerRegistry, MemoryDocument};
use scanfold_props::LANGUAGE_ID;

fn main() {
    env_logger::init();

    let text = "\
[Version]
Signature = \"$Example$\" ; platform marker
Class=System

[Strings]
@=fallback
SvcDesc = \"Example service\"

[Install]
CopyFiles = SvcFiles
";

    let mut registry = LexerRegistry::new();
    scanfold_props::register(&mut registry).unwrap();
    let lexer = registry.get(LANGUAGE_ID).unwrap();

    let mut doc = MemoryDocument::from_text(text);
    let len = doc.char_count();
    lexer.scan(&mut doc, 0, len);
    lexer.fold(&mut doc, 0, len);

    for line in 0..doc.line_count() {
        let (start, end) = doc.line_range(line);
        let level = doc.fold_level(line);
        let marker = if level.is_header { '+' } else { ' ' };
        let runs: Vec<String> = doc
            .style_runs(start, end)
            .into_iter()
            .map(|run| format!("{:?}[{}..{})", run.tag, run.start, run.end))
            .collect();
        println!("{marker} L{line:2} level {} | {}", level.number, runs.join(" "));
    }
}
