use criterion::{black_box, criterion_group, criterion_main, Criterion};
use shamir16::{combine, split};

fn bench_split_combine(c: &mut Criterion) {
    // A 32-byte secret, the size of a symmetric key.
    let secret: Vec<u8> = (0..32u8).collect();

    for parts in [10usize, 100, 500] {
        let threshold = parts / 2;

        c.bench_function(&format!("split {parts} parts"), |b| {
            b.iter(|| split(black_box(&secret), parts, threshold).expect("split failed"));
        });

        let shares = split(&secret, parts, threshold).expect("split failed");
        c.bench_function(&format!("combine {threshold} of {parts} parts"), |b| {
            b.iter(|| combine(black_box(&shares[..threshold])).expect("combine failed"));
        });
    }
}

criterion_group!(benches, bench_split_combine);
criterion_main!(benches);
