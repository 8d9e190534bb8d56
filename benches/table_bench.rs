use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ude::codec::{CodingStateMachine, MultiByteKind};

fn table_lookup(c: &mut Criterion) {
    let text = "百科事典の記事を編集する。".repeat(32);
    let (sjis, _, _) = encoding_rs::SHIFT_JIS.encode(&text);

    c.bench_function("shift_jis_state_machine", |b| {
        let mut sm = CodingStateMachine::new(MultiByteKind::ShiftJis.model());
        b.iter(|| {
            sm.reset();
            for &byte in black_box(&sjis[..]) {
                black_box(sm.next(byte));
            }
        })
    });
}

criterion_group!(benches, table_lookup);
criterion_main!(benches);
