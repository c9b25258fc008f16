use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ledger_types::{
    codec, PackedTransaction, SignedBlock, TransactionKind, TransactionReceipt, TransactionStatus,
};

fn sample_receipts(count: usize) -> Vec<TransactionReceipt> {
    (0..count)
        .map(|i| {
            let body = format!("transfer:{i}").into_bytes();
            let status = if i % 7 == 0 {
                TransactionStatus::SoftFail
            } else {
                TransactionStatus::Executed
            };
            TransactionReceipt::new(status, TransactionKind::Input, PackedTransaction::unsigned(body))
        })
        .collect()
}

fn bench_receipt_digest(c: &mut Criterion) {
    let receipt = &sample_receipts(1)[0];
    c.bench_function("receipt_digest", |b| b.iter(|| black_box(receipt).digest()));
}

fn bench_block_mroot(c: &mut Criterion) {
    let block = SignedBlock::<u32>::from_parts(0, sample_receipts(1_000), Vec::new());
    c.bench_function("transaction_mroot_1000", |b| {
        b.iter(|| black_box(&block).transaction_mroot())
    });
    c.bench_function("encode_block_1000", |b| {
        b.iter(|| codec::encode(black_box(&block)))
    });
}

criterion_group!(benches, bench_receipt_digest, bench_block_mroot);
criterion_main!(benches);
