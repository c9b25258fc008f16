use ledger_types::{
    codec, AccountName, BlockHeader, Extension, PackedDigest, PackedTransaction, ReceiptHeader,
    RecordError, SignedBlock, SignedBlockHeader, TransactionKind, TransactionReceipt,
    TransactionStatus,
};
use proptest::prelude::*;

// Property-based tests for the canonical record encoding and receipt digests

fn arbitrary_status() -> impl Strategy<Value = TransactionStatus> {
    prop::sample::select(TransactionStatus::ALL.to_vec())
}

fn arbitrary_kind() -> impl Strategy<Value = TransactionKind> {
    prop::sample::select(TransactionKind::ALL.to_vec())
}

fn arbitrary_trx() -> impl Strategy<Value = PackedTransaction> {
    prop::collection::vec(any::<u8>(), 0..64).prop_map(PackedTransaction::unsigned)
}

fn arbitrary_receipt() -> impl Strategy<Value = TransactionReceipt> {
    (arbitrary_status(), arbitrary_kind(), arbitrary_trx())
        .prop_map(|(status, kind, trx)| TransactionReceipt::new(status, kind, trx))
}

fn arbitrary_extension() -> impl Strategy<Value = Extension> {
    (any::<u16>(), prop::collection::vec(any::<u8>(), 0..32))
        .prop_map(|(tag, data)| Extension::new(tag, data))
}

fn empty_block() -> SignedBlock {
    let header = BlockHeader::new([0u8; 32], 0, AccountName::new("bp").unwrap());
    SignedBlock::new(SignedBlockHeader::unsigned(header))
}

proptest! {
    #[test]
    fn outcome_header_roundtrips(status in arbitrary_status(), kind in arbitrary_kind()) {
        let header = ReceiptHeader::new(status, kind);
        let bytes = codec::encode(&header).unwrap();
        prop_assert_eq!(bytes.len(), 2);
        let decoded: ReceiptHeader = codec::decode(&bytes).unwrap();
        prop_assert_eq!(decoded, header);
    }
}

proptest! {
    #[test]
    fn undefined_discriminants_never_decode(status in 4u8..=u8::MAX, kind in 2u8..=u8::MAX) {
        let bad_status = codec::decode::<ReceiptHeader>(&[status, 0]);
        prop_assert!(matches!(bad_status, Err(RecordError::MalformedRecord(_))));
        let bad_kind = codec::decode::<ReceiptHeader>(&[0, kind]);
        prop_assert!(matches!(bad_kind, Err(RecordError::MalformedRecord(_))));
    }
}

proptest! {
    #[test]
    fn receipt_digest_is_stable_across_roundtrip(receipt in arbitrary_receipt()) {
        let bytes = codec::encode(&receipt).unwrap();
        let decoded: TransactionReceipt = codec::decode(&bytes).unwrap();
        prop_assert_eq!(decoded.digest(), receipt.digest());
        prop_assert_eq!(&decoded, &receipt);
    }
}

proptest! {
    #[test]
    fn executed_constructor_ignores_payload(trx in arbitrary_trx()) {
        let receipt = TransactionReceipt::executed(trx);
        prop_assert_eq!(receipt.status(), TransactionStatus::Executed);
        prop_assert_eq!(receipt.kind(), TransactionKind::Input);
    }
}

proptest! {
    #[test]
    fn any_payload_bit_flip_changes_digest(
        body in prop::collection::vec(any::<u8>(), 1..64),
        index in any::<prop::sample::Index>(),
        bit in 0u8..8,
        status in arbitrary_status(),
        kind in arbitrary_kind(),
    ) {
        let mut flipped = body.clone();
        let i = index.index(flipped.len());
        flipped[i] ^= 1 << bit;

        let original = TransactionReceipt::new(status, kind, PackedTransaction::unsigned(body));
        let changed = TransactionReceipt::new(status, kind, PackedTransaction::unsigned(flipped));
        prop_assert_ne!(original.trx().packed_digest(), changed.trx().packed_digest());
        prop_assert_ne!(original.digest(), changed.digest());
    }
}

proptest! {
    #[test]
    fn outcome_change_changes_digest(
        trx in arbitrary_trx(),
        a in (arbitrary_status(), arbitrary_kind()),
        b in (arbitrary_status(), arbitrary_kind()),
    ) {
        prop_assume!(a != b);
        let ra = TransactionReceipt::new(a.0, a.1, trx.clone());
        let rb = TransactionReceipt::new(b.0, b.1, trx);
        prop_assert_ne!(ra.digest(), rb.digest());
    }
}

proptest! {
    #[test]
    fn appended_receipts_read_back_in_order(
        receipts in prop::collection::vec(arbitrary_receipt(), 0..16),
    ) {
        let mut block = empty_block();
        for receipt in &receipts {
            block.push_receipt(receipt.clone());
        }
        prop_assert_eq!(block.receipts(), receipts.as_slice());

        let decoded: SignedBlock = codec::decode(&codec::encode(&block).unwrap()).unwrap();
        prop_assert_eq!(decoded.receipts(), receipts.as_slice());
    }
}

proptest! {
    #[test]
    fn extensions_survive_roundtrip_byte_for_byte(
        extensions in prop::collection::vec(arbitrary_extension(), 0..8),
    ) {
        let mut block = empty_block();
        for extension in &extensions {
            block.push_extension(extension.clone());
        }
        let bytes = codec::encode(&block).unwrap();
        let decoded: SignedBlock = codec::decode(&bytes).unwrap();
        prop_assert_eq!(decoded.extensions(), extensions.as_slice());
        prop_assert_eq!(codec::encode(&decoded).unwrap(), bytes);
    }
}
