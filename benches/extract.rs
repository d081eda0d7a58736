use criterion::{black_box, criterion_group, criterion_main, Criterion};

use smm_ranking::{ranking::Snapshot, runner, specs::leaderboard};

/// A full 100-card page, roughly the size of the live leaderboard.
fn sample_page() -> String {
    let mut body = String::new();
    for i in 0..100u32 {
        let wins = 5000 - i * 37;
        let sprites: String = wins
            .to_string()
            .chars()
            .map(|d| format!(r#"<div class="typography typography-{d}"></div>"#))
            .collect();
        body.push_str(&format!(
            r#"<div class="creator-card"><div class="creator-info"><a class="name">creator{i}</a></div><div class="mario100-point">{sprites}</div></div>"#
        ));
    }
    format!(r#"<html><body><div class="creator-ranking">{body}</div></body></html>"#)
}

fn bench_extract(c: &mut Criterion) {
    let doc = sample_page();
    let prior = Snapshot::matched(leaderboard::parse_doc(&doc), &Snapshot::default());

    c.bench_function("parse_doc", |b| {
        b.iter(|| black_box(leaderboard::parse_doc(black_box(&doc))).len())
    });

    c.bench_function("evaluate", |b| {
        b.iter(|| {
            let (snap, changed) = runner::evaluate(black_box(&doc), black_box(&prior));
            black_box((snap.len(), changed))
        })
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
