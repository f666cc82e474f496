//! Snapshot tests to ensure that keys derived from a sequence remain stable
//! across crate updates, and that the wire format's shape does too.

use insta::assert_yaml_snapshot;
use serde::Serialize;

use sskg::Seq;

#[derive(Debug, Serialize)]
struct KeysAtOffsets {
    offsets: Vec<OffsetKeys>,
}

#[derive(Debug, Serialize)]
struct OffsetKeys {
    n: u64,
    key_16: String,
    key_32: String,
    key_64: String,
}

fn keys_after_seek(seed: &[u8], max_keys: u64, offsets: &[u64]) -> KeysAtOffsets {
    KeysAtOffsets {
        offsets: offsets
            .iter()
            .map(|&n| {
                let mut seq = Seq::new(seed, max_keys);
                seq.seek(n);
                OffsetKeys {
                    n,
                    key_16: hex::encode(seq.key(16)),
                    key_32: hex::encode(seq.key(32)),
                    key_64: hex::encode(seq.key(64)),
                }
            })
            .collect(),
    }
}

#[test]
fn key_derivation_snapshot() {
    let output = keys_after_seek(&[0_u8; 32], 1 << 20, &[0, 1, 2, 1000]);
    assert_yaml_snapshot!("key-derivation", output, @r#"
    offsets:
      - n: 0
        key_16: f9b2029fb655a86863d3fdcff0a32c22
        key_32: f9b2029fb655a86863d3fdcff0a32c22dc8aed55c912d5e3be9c9acb91711464
        key_64: f9b2029fb655a86863d3fdcff0a32c22dc8aed55c912d5e3be9c9acb917114649193bbc5e628b3900f853bb74e01e0adafce6110047bcbcb59c3f70d0b5c83c9
      - n: 1
        key_16: a5627084540a9bcbe02d27f5d9b28e2a
        key_32: a5627084540a9bcbe02d27f5d9b28e2a86c2efaf6b7cf7acd600de944048b68c
        key_64: a5627084540a9bcbe02d27f5d9b28e2a86c2efaf6b7cf7acd600de944048b68cdb914a8ec92e5de7fe6f8369acfd8b7824277903efa6e843f70e6f2f6221d62e
      - n: 2
        key_16: 57bd7ea714aa6f85aee716055bf913f9
        key_32: 57bd7ea714aa6f85aee716055bf913f91445ccc17360fd862c92b4aac7a635e1
        key_64: 57bd7ea714aa6f85aee716055bf913f91445ccc17360fd862c92b4aac7a635e13ef750e6df5cc975e817e85927c920d428a05992489423b7b55a8544453dd2c0
      - n: 1000
        key_16: 68e25b4b10b1cbd1fb898b9c5ae17618
        key_32: 68e25b4b10b1cbd1fb898b9c5ae176181555b5a9291dceeff5468f5dfd36ab83
        key_64: 68e25b4b10b1cbd1fb898b9c5ae176181555b5a9291dceeff5468f5dfd36ab83f6f1e75742a9e862f23e456766ffb39b0558d094bfdad601c02d923efcc162b8
    "#);
}

#[test]
fn wire_format_shape_snapshot() {
    let mut seq = Seq::new(&[0_u8; 32], 1 << 32);
    seq.seek(10_000);
    let parsed: serde_json::Value = serde_json::from_str(&seq.marshal()).unwrap();
    let heights: Vec<u64> = parsed["nodes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["h"].as_u64().unwrap())
        .collect();
    assert_yaml_snapshot!("wire-format-heights", heights, @r#"
    - 32
    - 31
    - 30
    - 29
    - 28
    - 27
    - 26
    - 25
    - 24
    - 23
    - 22
    - 21
    - 20
    - 19
    - 18
    - 17
    - 16
    - 15
    - 14
    - 12
    - 11
    - 8
    - 2
    - 1
    - 1
    "#);
}
