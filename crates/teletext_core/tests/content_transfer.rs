use teletext_core::{render_page_plain, ImportOutcome, PortfolioSession, TransferError, PAGES};

const WIDTH: usize = 80;

fn render_all(session: &mut PortfolioSession) -> Vec<String> {
    let mut pages = Vec::new();
    for page in PAGES {
        session.navigate(page.code());
        let view = session.render_page().unwrap();
        pages.push(render_page_plain(&view, WIDTH));
    }
    pages
}

#[test]
fn export_then_import_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let source = PortfolioSession::with_builtin_content().unwrap();
    let path = source.export_to_dir(dir.path()).unwrap();
    assert_eq!(path.file_name().unwrap(), "gunneremre-content.json");
    let exported = std::fs::read_to_string(&path).unwrap();

    let mut target = PortfolioSession::with_builtin_content().unwrap();
    target.import_json(r#"{"now": "Elsewhere."}"#).unwrap();
    let outcome = target.import_file(&path).unwrap();
    match outcome {
        ImportOutcome::Merged(report) => {
            assert_eq!(report.overwritten.len(), 7);
            assert!(report.added.is_empty());
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert_eq!(target.export_json().unwrap(), exported);
}

#[test]
fn roundtrip_keeps_every_page_rendering_the_same() {
    let dir = tempfile::tempdir().unwrap();
    let mut source = PortfolioSession::with_builtin_content().unwrap();
    let before = render_all(&mut source);
    let path = source.export_to_dir(dir.path()).unwrap();

    let mut target = PortfolioSession::with_builtin_content().unwrap();
    target.import_file(&path).unwrap();
    assert_eq!(render_all(&mut target), before);
}

#[test]
fn invalid_json_changes_nothing() {
    let mut session = PortfolioSession::with_builtin_content().unwrap();
    let before = render_all(&mut session);
    let exported = session.export_json().unwrap();

    let err = session.import_json("{ \"now\": ").unwrap_err();
    assert!(matches!(err, TransferError::InvalidJson(_)));
    assert!(err.to_string().starts_with("Invalid JSON:"));

    assert_eq!(session.export_json().unwrap(), exported);
    assert_eq!(render_all(&mut session), before);
}

#[test]
fn partial_import_only_replaces_given_sections() {
    let mut session = PortfolioSession::with_builtin_content().unwrap();
    let before = render_all(&mut session);

    session.import_json(r#"{"now": "Resting."}"#).unwrap();
    let after = render_all(&mut session);

    assert!(after[0].contains("Resting."));
    assert!(!before[0].contains("Resting."));
    assert_eq!(after[1..], before[1..]);
}

#[test]
fn import_preserves_unknown_keys_in_the_next_export() {
    let mut session = PortfolioSession::with_builtin_content().unwrap();
    session.import_json(r#"{"guestbook": ["hi"]}"#).unwrap();
    let exported = session.export_json().unwrap();
    assert!(exported.trim_end().ends_with("\"guestbook\": [\n    \"hi\"\n  ]\n}"));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = PortfolioSession::with_builtin_content().unwrap();
    let err = session
        .import_file(&dir.path().join("absent.json"))
        .unwrap_err();
    assert!(matches!(err, TransferError::Io { .. }));
}
