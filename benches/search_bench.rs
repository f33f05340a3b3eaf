use criterion::{criterion_group, criterion_main, Criterion};
use monster_leap::config::JumpSettings;
use monster_leap::position::Position;
use monster_leap::search::{locate, SearchConstraint, SearchPattern};
use monster_leap::test_utils::FixtureBuffer;
use monster_leap::viewport::Viewport;
use std::hint::black_box;

fn viewport_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewport_scan");

    let setup_buffer = || {
        let mut lines = Vec::new();
        for i in 0..2000 {
            lines.push(format!("fn handler_{i}(ctx: &mut Context) -> Result<(), Error> {{"));
            lines.push("    let value = ctx.lookup(key).unwrap_or_default();".to_string());
        }
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        FixtureBuffer::new(&refs)
    };

    let settings = JumpSettings::new();
    let buffer = setup_buffer();
    let mut viewport = Viewport::new(60, 120);
    viewport.set_scroll(1800, 0);
    let anchor = Position::new(1830, 10);

    group.bench_function("literal_char_visible", |b| {
        b.iter(|| {
            black_box(
                locate(
                    &buffer,
                    &viewport,
                    anchor,
                    &SearchPattern::Literal("e".to_string()),
                    SearchConstraint::Unconstrained,
                    &settings,
                )
                .unwrap(),
            )
        })
    });

    group.bench_function("word_starts_forward", |b| {
        b.iter(|| {
            black_box(
                locate(
                    &buffer,
                    &viewport,
                    anchor,
                    &SearchPattern::WordStarts,
                    SearchConstraint::AfterAnchor,
                    &settings,
                )
                .unwrap(),
            )
        })
    });

    group.bench_function("line_starts_backward", |b| {
        b.iter(|| {
            black_box(
                locate(
                    &buffer,
                    &viewport,
                    anchor,
                    &SearchPattern::LineStarts,
                    SearchConstraint::BeforeAnchor,
                    &settings,
                )
                .unwrap(),
            )
        })
    });

    group.finish();
}

criterion_group!(benches, viewport_scan);
criterion_main!(benches);
