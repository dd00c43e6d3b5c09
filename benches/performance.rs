use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ratatui::{buffer::Buffer, layout::Rect};
use sportstream::commands::matches::format_matches;
use sportstream::config::{DisplayConfig, TimeZoneSetting};
use sportstream::fixtures::create_sample_matches;
use sportstream::model::Match;
use sportstream::store::StaticMatchStore;
use sportstream::tui::app::App;
use sportstream::tui::renderer::render;
use sportstream::tui::widgets::{MatchCardWidget, RenderableWidget};
use sportstream::view::{MatchCard, MatchView};

/// A full matchday: the sample matches repeated with fresh ids
fn create_matchday(count: usize) -> Vec<Match> {
    let samples = create_sample_matches();
    (0..count)
        .map(|i| {
            let mut m = samples[i % samples.len()].clone();
            m.id = i as u32;
            m
        })
        .collect()
}

fn create_view(count: usize) -> MatchView {
    MatchView::new(
        Box::new(StaticMatchStore::new(create_matchday(count))),
        TimeZoneSetting::Utc,
    )
}

/// Benchmark deriving display cards from stored matches
fn bench_view_derivation(c: &mut Criterion) {
    let small = create_view(2);
    let large = create_view(50);

    let mut group = c.benchmark_group("view");

    group.bench_function("cards_2_matches", |b| b.iter(|| black_box(&small).cards()));

    group.bench_function("cards_50_matches", |b| b.iter(|| black_box(&large).cards()));

    group.finish();
}

/// Benchmark rendering cards to text and to a terminal buffer
fn bench_rendering(c: &mut Criterion) {
    let display = DisplayConfig::default();
    let cards: Vec<MatchCard> = create_view(10).cards();

    let mut group = c.benchmark_group("rendering");

    group.bench_function("format_matches_text", |b| {
        b.iter(|| format_matches(black_box(&cards), black_box(80), &display))
    });

    group.bench_function("match_card_widget", |b| {
        let widget = MatchCardWidget::new(&cards[0]).with_selected(true);
        let area = Rect::new(0, 0, 80, widget.height(80));
        b.iter(|| {
            let mut buf = Buffer::empty(area);
            widget.render(area, &mut buf, &display);
            buf
        })
    });

    group.bench_function("full_dashboard_frame", |b| {
        let app = App::new(cards.len());
        let area = Rect::new(0, 0, 100, 40);
        b.iter(|| {
            let mut buf = Buffer::empty(area);
            render(area, &mut buf, black_box(&app), &cards, &display);
            buf
        })
    });

    group.finish();
}

criterion_group!(benches, bench_view_derivation, bench_rendering);
criterion_main!(benches);
