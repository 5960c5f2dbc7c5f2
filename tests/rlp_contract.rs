//! Purpose: Lock the integer wire contract with known encoding vectors.
//! Exports: Integration tests only (no runtime exports).
//! Role: Catch drift between the codec and the canonical encoding rules.
//! Invariants: Accepted vectors keep decoding to the same values.
//! Invariants: Non-canonical and non-integer inputs stay rejected.

use peerkit::api::{ErrorKind, cmd_id, decode_uint, encode_uint};

#[test]
fn known_encodings_decode_to_their_values() {
    let vectors: &[(&[u8], u64)] = &[
        (&[0x80], 0),
        (&[0x01], 1),
        (&[0x10], 16),
        (&[0x7f], 127),
        (&[0x81, 0x80], 128),
        (&[0x81, 0xff], 255),
        (&[0x82, 0x01, 0x00], 256),
        (&[0x82, 0x04, 0x00], 1024),
        (&[0x83, 0x01, 0x00, 0x00], 65536),
        (
            &[0x88, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff],
            u64::MAX,
        ),
    ];

    for (bytes, expected) in vectors {
        let decoded = decode_uint(bytes).expect("canonical vector should decode");
        assert_eq!(decoded, *expected, "input {bytes:02x?}");
    }
}

#[test]
fn canonical_encodings_are_stable() {
    assert_eq!(encode_uint(0), [0x80]);
    assert_eq!(encode_uint(1), [0x01]);
    assert_eq!(encode_uint(16), [0x10]);
    assert_eq!(encode_uint(127), [0x7f]);
    assert_eq!(encode_uint(128), [0x81, 0x80]);
    assert_eq!(encode_uint(1024), [0x82, 0x04, 0x00]);
    assert_eq!(
        encode_uint(u64::MAX),
        [0x88, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff]
    );
}

#[test]
fn decode_inverts_encode_across_boundaries() {
    let boundaries = [
        0,
        1,
        127,
        128,
        255,
        256,
        65535,
        65536,
        u64::from(u32::MAX),
        u64::from(u32::MAX) + 1,
        u64::MAX,
    ];
    for value in boundaries {
        let encoded = encode_uint(value);
        assert_eq!(
            decode_uint(&encoded).expect("round trip"),
            value,
            "encoding {encoded:02x?}"
        );
    }
}

#[test]
fn non_canonical_and_non_integer_inputs_are_rejected() {
    let rejects: &[(&[u8], &str)] = &[
        (&[], "empty input"),
        (&[0x00], "raw zero byte"),
        (&[0x81], "missing payload"),
        (&[0x82, 0x04], "truncated payload"),
        (&[0x81, 0x05], "needless length prefix"),
        (&[0x82, 0x00, 0x10], "leading zero in payload"),
        (
            &[0x89, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01],
            "payload wider than u64",
        ),
        (&[0xb8], "truncated long-form length"),
        (&[0xb9, 0x00, 0x40], "leading zero in long-form length"),
        (&[0xb8, 0x02, 0x01, 0x02], "long form for a short payload"),
        (&[0xc0], "empty list"),
        (&[0xc2, 0x01, 0x02], "list of integers"),
    ];

    for (bytes, label) in rejects {
        match decode_uint(bytes) {
            Err(err) => assert_eq!(err.kind(), ErrorKind::Corrupt, "{label}: {bytes:02x?}"),
            Ok(value) => panic!("{label}: {bytes:02x?} unexpectedly decoded to {value}"),
        }
    }
}

#[test]
fn cmd_id_reads_the_leading_field_of_a_framed_message() {
    // A body follows the id on the wire; it must not disturb extraction.
    let mut msg = encode_uint(0x10);
    msg.extend_from_slice(&[0xc6, 0x85, b'h', b'e', b'l', b'l', b'o']);
    assert_eq!(cmd_id(&msg).expect("cmd_id"), 0x10);

    let mut hello = encode_uint(0);
    hello.extend_from_slice(&[0xc0]);
    assert_eq!(cmd_id(&hello).expect("cmd_id"), 0);
}
