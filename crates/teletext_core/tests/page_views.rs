use chrono::NaiveDate;
use teletext_core::view::blog::SELECT_A_POST;
use teletext_core::{render_page_plain, render_screen_plain, Key, Page, PortfolioSession};

const WIDTH: usize = 100;

fn page_text(session: &PortfolioSession) -> String {
    render_page_plain(&session.render_page().unwrap(), WIDTH)
}

#[test]
fn contact_hides_empty_socials() {
    let mut session = PortfolioSession::with_builtin_content().unwrap();
    session
        .import_json(
            r#"{"owner": {
                "name": "A", "domain": "Ex", "tagline": "t",
                "email": "a@ex.test", "instagramHandle": "",
                "socials": {"instagram": "", "website": "https://x"}
            }}"#,
        )
        .unwrap();
    session.navigate("199");

    let text = page_text(&session);
    assert!(text.contains("a@ex.test <mailto:a@ex.test>"));
    assert!(text.contains("website <https://x>"));
    assert!(!text.contains("instagram"));
}

#[test]
fn blog_with_zero_posts_shows_placeholder() {
    let mut session = PortfolioSession::with_builtin_content().unwrap();
    session.import_json(r#"{"blog": []}"#).unwrap();
    session.navigate("101");

    assert_eq!(session.selected_post(), None);
    assert!(page_text(&session).contains(SELECT_A_POST));
}

#[test]
fn selecting_a_post_shows_its_detail() {
    let mut session = PortfolioSession::with_builtin_content().unwrap();
    session.navigate("101");
    assert!(page_text(&session).contains("■ WELCOME TO THE GUNNEREMRE TELETEXT"));

    assert!(session.select_post("ai-outreach"));
    let text = page_text(&session);
    assert!(text.contains("■ AI OUTREACH: FROM DEMO-FIRST TO TRUST-FIRST"));
    assert!(text.contains("▶ AI outreach"));
    assert!(!text.contains("Read external"));
}

#[test]
fn reimported_blog_leaves_stale_selection_on_placeholder() {
    let mut session = PortfolioSession::with_builtin_content().unwrap();
    session.navigate("101");
    session.select_post("ai-outreach");
    session.import_json(r#"{"blog": []}"#).unwrap();

    assert_eq!(session.selected_post(), Some("ai-outreach"));
    assert!(page_text(&session).contains(SELECT_A_POST));
}

#[test]
fn external_post_link_is_rendered() {
    let mut session = PortfolioSession::with_builtin_content().unwrap();
    session
        .import_json(
            r#"{"blog": [{
                "id": "ext", "date": "2025-09-01", "title": "Out there",
                "tags": [], "summary": "s", "content": "line one\nline two",
                "externalUrl": "https://example.test/post"
            }]}"#,
        )
        .unwrap();
    session.navigate("101");

    let text = page_text(&session);
    assert!(text.contains("line one\nline two"));
    assert!(text.contains("Read external <https://example.test/post>"));
}

#[test]
fn ideas_keep_unknown_statuses() {
    let mut session = PortfolioSession::with_builtin_content().unwrap();
    session
        .import_json(r#"{"ideas": [{"title": "Odd", "status": "parked", "note": "n"}]}"#)
        .unwrap();
    session.navigate("102");
    assert!(page_text(&session).contains("[PARKED]"));
}

#[test]
fn full_screen_shows_chrome_around_the_page() {
    let mut session = PortfolioSession::with_builtin_content().unwrap();
    session.handle_keys(&Key::typed("103"));
    assert_eq!(session.current_page(), Page::Experiments);

    let now = NaiveDate::from_ymd_opt(2025, 8, 24)
        .unwrap()
        .and_hms_opt(9, 5, 7)
        .unwrap();
    let screen = session.render(now).unwrap();
    let text = render_screen_plain(&screen, WIDTH);

    assert!(text.contains("Sun 09:05:07"));
    assert!(text.contains("[*103 EXPERIMENTS]"));
    assert!(text.contains("Teletext vs. Modern Landing"));
    assert!(text.contains("© 2025 GunnerEmre. Built in a Teletext style. All rights reserved."));
    assert!(text.ends_with("\n"));
}

#[test]
fn ticker_scrolls_with_the_offset() {
    let mut session = PortfolioSession::with_builtin_content().unwrap();
    let now = NaiveDate::from_ymd_opt(2025, 8, 24)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let first = session.render(now).unwrap();
    session.advance_ticker(3);
    let second = session.render(now).unwrap();

    assert_eq!(first.ticker, second.ticker);
    assert_eq!(second.ticker_offset, first.ticker_offset + 3);
    assert!(first.ticker.starts_with("GunnerEmre // "));
}
