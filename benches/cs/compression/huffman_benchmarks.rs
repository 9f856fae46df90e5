use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use pwcodec::randomized::{generate_password, DEFAULT_ALPHABET};
use pwcodec::CodecSession;

fn sample_inputs() -> Vec<String> {
    let alphabet: Vec<char> = DEFAULT_ALPHABET.chars().collect();
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    [8, 20, 256, 4096]
        .iter()
        .map(|&len| generate_password(len, &alphabet, &mut rng).unwrap())
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("huffman_build");
    for input in sample_inputs() {
        group.bench_with_input(
            BenchmarkId::from_parameter(input.len()),
            &input,
            |b, input| b.iter(|| CodecSession::build(black_box(input)).unwrap()),
        );
    }
    group.finish();
}

fn bench_encode_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("huffman_round_trip");
    for input in sample_inputs() {
        let session = CodecSession::build(&input).unwrap();
        let bits = session.encode(&input).unwrap();
        group.bench_with_input(BenchmarkId::new("encode", input.len()), &input, |b, input| {
            b.iter(|| session.encode(black_box(input)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("decode", input.len()), &bits, |b, bits| {
            b.iter(|| session.decode(black_box(bits)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build, bench_encode_decode);
criterion_main!(benches);
