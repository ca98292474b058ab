//! Built-in default content loaded at start-up.

use chrono::NaiveDate;

use super::content::{ContentModel, OwnerProfile};
use super::entries::{BlogPost, DocPage, DocSection, Experiment, Idea, UpdateItem};
use super::socials::SocialLinks;

fn day(year: i32, month: u32, date: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, date).unwrap_or_default()
}

fn text(value: &str) -> String {
    value.to_string()
}

fn section(heading: &str, paragraph: &str) -> DocSection {
    DocSection {
        heading: text(heading),
        paragraph: text(paragraph),
    }
}

impl ContentModel {
    /// Hand-authored content shipped with the viewer.
    pub fn builtin() -> Self {
        let socials: SocialLinks = [
            ("instagram", Some(text("https://instagram.com/mrgunner.ai"))),
            ("github", Some(text("https://github.com/"))),
            ("x", Some(text("https://x.com/"))),
            ("website", Some(text("https://gunneremre.com/"))),
        ]
        .into_iter()
        .collect();

        Self {
            owner: OwnerProfile {
                name: text("Emre Gunner"),
                domain: text("GunnerEmre"),
                tagline: text("Build • Test • Learn"),
                email: Some(text("contact@gunneremre.com")),
                instagram_handle: Some(text("mrgunner.ai")),
                socials,
            },
            now: text(
                "Shipping AI marketing experiments for real-estate agencies across TR/AE. \
                 Documenting results and playbooks.",
            ),
            updates: vec![
                UpdateItem {
                    date: day(2025, 8, 24),
                    kind: text("experiment"),
                    text: text(
                        "Cold outreach: Teletext landing vs. standard modern landing — \
                         CTR +23% on Teletext.",
                    ),
                    url: Some(text("#")),
                },
                UpdateItem {
                    date: day(2025, 8, 22),
                    kind: text("blog"),
                    text: text("Why retro UX converts: constraint as a brand moat."),
                    url: Some(text("#")),
                },
            ],
            blog: vec![
                BlogPost {
                    id: text("welcome-teletext"),
                    date: day(2025, 8, 20),
                    title: text("Welcome to the GunnerEmre Teletext"),
                    tags: vec![text("meta"), text("design"), text("retro")],
                    summary: text(
                        "How Teletext UX helps clarity, speed, and signal in a noisy web.",
                    ),
                    content: text(
                        "Teletext strips away everything except information and intent. \
                         This site is my living lab: simple, fast, keyboard-first. \
                         Expect ideas, experiments, and shipping notes.",
                    ),
                    external_url: Some(String::new()),
                },
                BlogPost {
                    id: text("ai-outreach"),
                    date: day(2025, 8, 18),
                    title: text("AI outreach: from demo-first to trust-first"),
                    tags: vec![text("ai"), text("outreach"), text("real-estate")],
                    summary: text("Lessons from running 100+ personalized outreach Looms."),
                    content: text(
                        "Trust compounds when the first touch is useful. Free, relevant \
                         assets (mini-site, competitor insights) set the tone better than \
                         any pitch.",
                    ),
                    external_url: Some(String::new()),
                },
            ],
            ideas: vec![
                Idea {
                    title: text("Teletext Job Board"),
                    status: text("new"),
                    note: text("Ultra-fast board for niche AI/marketing roles. Keyboard nav only."),
                },
                Idea {
                    title: text("Ad-Intel Tuner"),
                    status: text("prototyping"),
                    note: text(
                        "Tune variables (ICP, hook, angle) and auto-generate creatives \
                         from competitor patterns.",
                    ),
                },
                Idea {
                    title: text("24/7 Concierge Bot"),
                    status: text("done"),
                    note: text(
                        "Multilingual WhatsApp bot that qualifies buyers and routes hot leads.",
                    ),
                },
            ],
            experiments: vec![
                Experiment {
                    title: text("Teletext vs. Modern Landing"),
                    date: day(2025, 8, 21),
                    hypothesis: text("Retro clarity reduces bounce and increases CTA CTR"),
                    method: text("A/B test 1,000 paid clicks (META/IN) — identical offer & copy"),
                    result: text("CTR +23%, bounce −12%, time-on-page +16% on Teletext."),
                    link: Some(text("#")),
                },
                Experiment {
                    title: text("Instagram DM First vs. Email First"),
                    date: day(2025, 8, 17),
                    hypothesis: text("Warm DM before email lifts reply rate"),
                    method: text("50/50 split across 100 agencies"),
                    result: text("+9.4% initial replies; +5.1% qualified calls via DM-first."),
                    link: Some(text("#")),
                },
            ],
            docs: vec![
                DocPage {
                    title: text("Operating System"),
                    sections: vec![
                        section(
                            "Principles",
                            "Ship daily. Prove before you pitch. Measure what matters.",
                        ),
                        section(
                            "Stack",
                            "Next.js, n8n, Meta Ads, Sheets, custom scrapers, GPT agents.",
                        ),
                    ],
                },
                DocPage {
                    title: text("Real Estate Offer — v1"),
                    sections: vec![
                        section(
                            "Lead Magnet",
                            "Free TR/EN/AR site mirroring listings + AI concierge.",
                        ),
                        section("Proof", "Instant value pack: site, leads, competitor insights."),
                        section(
                            "Pricing",
                            "₺1K / ₺3K / ₺5K packages; risk-reversal via milestones.",
                        ),
                    ],
                },
            ],
        }
    }
}
