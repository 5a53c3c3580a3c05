use criterion::{criterion_group, criterion_main, Criterion};
use reviewdesk_core::{NoteDraft, NoteField, NoteStore};
use std::hint::black_box;

const CATEGORIES: [&str; 6] = ["Engineering", "Marketing", "Sales", "Ops", "Finance", "Legal"];
const OWNERS: [&str; 5] = ["Jane", "Sam", "Team Alpha", "Priya", "Luis"];

fn populated_store(count: usize) -> NoteStore {
    let mut store = NoteStore::new();
    for i in 0..count {
        let draft = NoteDraft::new()
            .with(NoteField::Category, CATEGORIES[i % CATEGORIES.len()])
            .with(NoteField::Owner, OWNERS[i % OWNERS.len()])
            .with(NoteField::Title, format!("note {}", i))
            .with(NoteField::Content, "observed during review");
        store.add_note(&draft).expect("valid draft");
    }
    store
}

fn bench_distinct_projections(c: &mut Criterion) {
    let store = populated_store(300);

    c.bench_function("store/distinct_categories_300", |b| {
        b.iter(|| black_box(store.distinct_categories()));
    });
    c.bench_function("store/distinct_owners_300", |b| {
        b.iter(|| black_box(store.distinct_owners()));
    });
}

fn bench_add_note(c: &mut Criterion) {
    let draft = NoteDraft::new()
        .with(NoteField::Category, "Engineering")
        .with(NoteField::Owner, "Jane")
        .with(NoteField::Title, "Latency")
        .with(NoteField::Content, "p99 regressed");

    c.bench_function("store/add_note_to_100", |b| {
        b.iter_batched(
            || populated_store(100),
            |mut store| {
                store.add_note(black_box(&draft)).expect("valid draft");
                black_box(store.len());
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_distinct_projections, bench_add_note);
criterion_main!(benches);
