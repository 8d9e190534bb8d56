use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use ude::{detect, CharsetDetector};

fn detection_throughput(c: &mut Criterion) {
    let ascii = b"The quick brown fox jumps over the lazy dog. ".repeat(256);
    let russian = "Москва является столицей России, город федерального значения. ".repeat(64);
    let (cp1251, _, _) = encoding_rs::WINDOWS_1251.encode(&russian);
    let japanese = "ウィキペディアはオープンコンテントの百科事典です。".repeat(64);
    let (sjis, _, _) = encoding_rs::SHIFT_JIS.encode(&japanese);

    let mut group = c.benchmark_group("detect");
    for (name, bytes) in [
        ("ascii", &ascii[..]),
        ("windows_1251", &cp1251[..]),
        ("shift_jis", &sjis[..]),
        ("utf8", japanese.as_bytes()),
    ] {
        group.throughput(Throughput::Bytes(bytes.len() as u64));
        group.bench_function(name, |b| b.iter(|| detect(black_box(bytes))));
    }
    group.finish();

    let mut detector = CharsetDetector::new();
    c.bench_function("reset_and_feed_windows_1251", |b| {
        b.iter(|| {
            detector.reset();
            detector.feed(black_box(&cp1251));
            detector.finalize();
            detector.charset()
        })
    });
}

criterion_group!(benches, detection_throughput);
criterion_main!(benches);
