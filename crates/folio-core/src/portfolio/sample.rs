//! Built-in sample document, shown when no portfolio file is configured.

use super::models::*;

pub(super) fn sample_document() -> Portfolio {
    Portfolio {
        title: "Ben S. Baird".into(),
        tagline: "Systems engineer who cares about the last frame".into(),
        hero: Hero {
            heading: "Ben S. Baird".into(),
            subheading: "Building fast, quiet infrastructure".into(),
            intro_lines: vec![
                "Ten years of making servers boring and terminals fun.".into(),
                "Currently deep in storage engines and scheduler internals.".into(),
                "Press Tab to jump between sections, or just scroll.".into(),
            ],
            stats: vec![
                Stat { label: "Projects shipped".into(), target: 150.0 },
                Stat { label: "Uptime %".into(), target: 98.6 },
                Stat { label: "Years".into(), target: 10.0 },
            ],
            code_sample: concat!(
                "<cmt>// what I do all day</cmt>\n",
                "<kw>fn</kw> <fn>ship</fn>(it: <kw>impl</kw> Useful) {\n",
                "    <kw>while</kw> it.worth_doing() {\n",
                "        it.simplify();\n",
                "        it.measure();\n",
                "    }\n",
                "}\n",
            )
            .into(),
        },
        about: About {
            lines: vec![
                "I build the plumbing other people stand on: storage layers,".into(),
                "schedulers, protocol bridges, and the occasional terminal toy".into(),
                "like this one. I like systems that fail loudly and recover".into(),
                "quietly.".into(),
            ],
            highlights: vec![
                Card {
                    title: "Performance".into(),
                    body: "Profiling before guessing, flamegraphs before coffee.".into(),
                },
                Card {
                    title: "Reliability".into(),
                    body: "If it can't be restarted mid-write, it isn't finished.".into(),
                },
                Card {
                    title: "Craft".into(),
                    body: "Small tools, sharp edges, no lorem ipsum.".into(),
                },
            ],
        },
        skills: vec![
            SkillCategory {
                name: "Languages".into(),
                tags: vec!["Rust".into(), "Go".into(), "C".into(), "SQL".into()],
            },
            SkillCategory {
                name: "Systems".into(),
                tags: vec![
                    "Linux".into(),
                    "eBPF".into(),
                    "io_uring".into(),
                    "KVM".into(),
                ],
            },
            SkillCategory {
                name: "Data".into(),
                tags: vec![
                    "Postgres".into(),
                    "RocksDB".into(),
                    "Kafka".into(),
                    "S3".into(),
                ],
            },
            SkillCategory {
                name: "Practices".into(),
                tags: vec![
                    "Chaos testing".into(),
                    "SLOs".into(),
                    "Incident review".into(),
                ],
            },
        ],
        timeline: vec![
            TimelineItem {
                period: "2022 — now".into(),
                role: "Staff Engineer".into(),
                org: "Quiet Systems Co".into(),
                summary: "Own the storage layer for a fleet of 4k nodes.".into(),
            },
            TimelineItem {
                period: "2018 — 2022".into(),
                role: "Senior SRE".into(),
                org: "Bitstream".into(),
                summary: "Cut p99 latency by 70% and pager volume by more.".into(),
            },
            TimelineItem {
                period: "2015 — 2018".into(),
                role: "Backend Engineer".into(),
                org: "Crateworks".into(),
                summary: "First hire on the platform team; built the job queue.".into(),
            },
        ],
        projects: vec![
            Project {
                name: "driftwood".into(),
                blurb: "Append-only log store with tiered compaction.".into(),
                tech: vec!["Rust".into(), "io_uring".into()],
            },
            Project {
                name: "hushd".into(),
                blurb: "Alert deduplicator that made on-call humane again.".into(),
                tech: vec!["Go".into(), "Postgres".into()],
            },
            Project {
                name: "folio".into(),
                blurb: "This viewer. A portfolio that lives where I do.".into(),
                tech: vec!["Rust".into(), "ratatui".into()],
            },
        ],
        certs: vec![
            Cert {
                name: "CKA".into(),
                issuer: "CNCF".into(),
                year: "2021".into(),
            },
            Cert {
                name: "AWS SA Pro".into(),
                issuer: "AWS".into(),
                year: "2020".into(),
            },
        ],
        contact: Contact {
            lines: vec![
                "Always happy to talk storage, schedulers, or terminals.".into(),
            ],
            links: vec![
                ContactLink { label: "email".into(), value: "ben@example.dev".into() },
                ContactLink { label: "github".into(), value: "github.com/bsbaird".into() },
                ContactLink { label: "rss".into(), value: "example.dev/feed.xml".into() },
            ],
        },
    }
}
