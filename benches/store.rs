use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use contact_directory::prelude::{ContactFields, ContactStore, MemStore};

// Helper to create a MemStore prepopulated with `n` contacts.
fn make_store_with_n(n: usize) -> MemStore {
    let mut storage = MemStore::new();
    for i in 0..n {
        let fields = ContactFields {
            email: Some(format!("user{i}@yahoo.com")),
            company: Some(if i % 2 == 0 { "Acme" } else { "Globex" }.to_string()),
            ..ContactFields::named(&format!("User{i}"), "Bench")
        };
        storage.create(fields).expect("bench contact rejected");
    }
    storage
}

// Add-benchmark: measure creating one contact on top of 5k.
fn bench_create(c: &mut Criterion) {
    c.bench_function("Creating contact in 5k store", |b| {
        b.iter_batched(
            || make_store_with_n(5_000),
            |mut storage| {
                let contact = storage
                    .create(ContactFields::named("Zoe", "Alba"))
                    .expect("create failed");
                black_box(contact);
            },
            BatchSize::SmallInput,
        );
    });
}

// List-benchmark: snapshot of the whole collection.
fn bench_list(c: &mut Criterion) {
    c.bench_function("Listing 5k contacts (snapshot)", |b| {
        let storage = make_store_with_n(5_000);
        b.iter(|| black_box(storage.list()));
    });
}

// Edit-benchmark: patch a contact near the end of the collection.
fn bench_update(c: &mut Criterion) {
    c.bench_function("Updating contact in 5k store", |b| {
        let mut storage = make_store_with_n(5_000);
        b.iter(|| {
            let fields = ContactFields {
                phone: Some("08885499529".to_string()),
                ..Default::default()
            };
            black_box(storage.update(4_900, fields).expect("update failed"));
        });
    });
}

// Delete-benchmark: remove a single contact from the middle.
fn bench_delete(c: &mut Criterion) {
    c.bench_function("Deleting from 5k contacts", |b| {
        b.iter_batched(
            || make_store_with_n(5_000),
            |mut storage| {
                storage.delete(2_500).expect("delete failed");
                black_box(storage.len());
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_create, bench_list, bench_update, bench_delete);
criterion_main!(benches);
