use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rscodec::{CodecConfig, ReedSolomon};

struct Lcg(u64);

impl Lcg {
    fn next_u8(&mut self) -> u8 {
        self.0 = self.0.wrapping_mul(0xDA942042E4DD58B5).wrapping_add(1);
        (self.0 >> 56) as u8
    }
}

fn message(len: usize) -> Vec<u8> {
    let mut lcg = Lcg(0x123456789ABCDEF0);
    (0..len).map(|_| lcg.next_u8()).collect()
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    for ecc_symbols in [8, 32] {
        let rs = ReedSolomon::new(CodecConfig::new(ecc_symbols)).unwrap();
        let data = message(rs.max_message_len());
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(ecc_symbols), &data, |b, data| {
            b.iter(|| rs.encode(black_box(data)).unwrap())
        });
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    for ecc_symbols in [8, 32] {
        let rs = ReedSolomon::new(CodecConfig::new(ecc_symbols)).unwrap();
        let clean = rs.encode(&message(rs.max_message_len())).unwrap();
        let mut damaged = clean.clone();
        for i in 0..ecc_symbols / 2 {
            damaged[i * 7] ^= 0x5a;
        }
        group.throughput(Throughput::Bytes(clean.len() as u64));
        group.bench_with_input(BenchmarkId::new("clean", ecc_symbols), &clean, |b, cw| {
            b.iter(|| rs.decode(black_box(cw)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("max_errors", ecc_symbols), &damaged, |b, cw| {
            b.iter(|| rs.decode(black_box(cw)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
