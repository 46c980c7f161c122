//! Integration tests for the read-response decoding pipeline.

use chrono::{DateTime, TimeZone, Utc};
use mrtpass::history::{
    BLOCK_LEN, DecodeError, HEADER_LEN, TransactionRecord, latest_balance, parse_block,
    parse_history,
};
use rstest::rstest;

fn scan_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 17, 12, 0, 0).unwrap()
}

fn build_block(minutes: u16, from: u8, to: u8, balance: u32) -> [u8; BLOCK_LEN] {
    let mut block = [0u8; BLOCK_LEN];
    block[0..4].copy_from_slice(&[0x08, 0x52, 0x00, 0x00]);
    block[4..6].copy_from_slice(&minutes.to_le_bytes());
    block[6..8].copy_from_slice(&[0x20, 0x00]);
    block[8] = from;
    block[10] = to;
    block[11..14].copy_from_slice(&balance.to_le_bytes()[0..3]);
    block[14..16].copy_from_slice(&[0x00, 0x00]);
    block
}

fn build_response(blocks: &[[u8; BLOCK_LEN]]) -> Vec<u8> {
    let mut buf = vec![0u8; HEADER_LEN];
    buf[12] = blocks.len() as u8;
    for block in blocks {
        buf.extend_from_slice(block);
    }
    buf
}

#[test]
fn decodes_single_block() {
    let response = build_response(&[build_block(60, 65, 10, 100)]);
    let records = parse_history(&response, scan_time()).unwrap();
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.from_station_code, 65);
    assert_eq!(record.from_station, "Mirpur 10");
    assert_eq!(record.to_station_code, 10);
    assert_eq!(record.to_station, "Motijheel");
    assert_eq!(record.balance, 100);
    assert_eq!(record.timestamp, "2024-05-17 11:00");
    assert_eq!(record.fixed_header, "08 52 00 00");
    assert_eq!(record.transaction_type, "20 00");
    assert_eq!(record.trailing, "00 00");
}

#[test]
fn preserves_physical_block_order() {
    let response = build_response(&[
        build_block(10, 65, 10, 300),
        build_block(200, 50, 90, 360),
        build_block(4000, 10, 25, 420),
    ]);
    let records = parse_history(&response, scan_time()).unwrap();
    let balances: Vec<u32> = records.iter().map(|r| r.balance).collect();
    assert_eq!(balances, vec![300, 360, 420]);
    let froms: Vec<u8> = records.iter().map(|r| r.from_station_code).collect();
    assert_eq!(froms, vec![65, 50, 10]);
}

#[test]
fn zero_blocks_decode_to_empty_history() {
    let response = build_response(&[]);
    let records = parse_history(&response, scan_time()).unwrap();
    assert!(records.is_empty());
    assert_eq!(latest_balance(&records), None);
}

#[rstest]
#[case(0)]
#[case(5)]
#[case(12)]
fn short_response_is_rejected(#[case] len: usize) {
    let err = parse_history(&vec![0u8; len], scan_time()).unwrap_err();
    assert_eq!(err, DecodeError::ResponseTooShort(len));
}

#[rstest]
#[case(0x01, 0x00)]
#[case(0x00, 0xA4)]
#[case(0xFF, 0xFF)]
fn non_zero_status_flags_are_rejected(#[case] flag1: u8, #[case] flag2: u8) {
    let mut response = vec![0u8; HEADER_LEN];
    response[10] = flag1;
    response[11] = flag2;
    let err = parse_history(&response, scan_time()).unwrap_err();
    assert_eq!(err, DecodeError::CardStatus { flag1, flag2 });
}

#[test]
fn declared_count_beyond_payload_is_rejected() {
    let mut response = build_response(&[build_block(60, 65, 10, 100)]);
    response[12] = 2;
    let err = parse_history(&response, scan_time()).unwrap_err();
    assert_eq!(
        err,
        DecodeError::IncompleteBlockData {
            declared: 2 * BLOCK_LEN,
            available: BLOCK_LEN,
        }
    );
}

#[test]
fn trailing_bytes_beyond_declared_blocks_are_ignored() {
    let mut response = build_response(&[build_block(60, 65, 10, 100)]);
    response.extend_from_slice(&[0xDE, 0xAD]);
    let records = parse_history(&response, scan_time()).unwrap();
    assert_eq!(records.len(), 1);
}

#[test]
fn decoding_is_deterministic() {
    let response = build_response(&[build_block(60, 65, 10, 100), build_block(90, 10, 90, 40)]);
    let first = parse_history(&response, scan_time()).unwrap();
    let second = parse_history(&response, scan_time()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn latest_balance_comes_from_first_record() {
    let response = build_response(&[build_block(10, 65, 10, 300), build_block(200, 50, 90, 360)]);
    let records = parse_history(&response, scan_time()).unwrap();
    assert_eq!(latest_balance(&records), Some(300));
}

#[rstest]
#[case(10, "Motijheel")]
#[case(20, "Bangladesh Secretariat")]
#[case(25, "Dhaka University")]
#[case(30, "Shahbagh")]
#[case(35, "Karwan Bazar")]
#[case(40, "Farmgate")]
#[case(45, "Bijoy Sarani")]
#[case(50, "Agargaon")]
#[case(55, "Shewrapara")]
#[case(60, "Kazipara")]
#[case(65, "Mirpur 10")]
#[case(70, "Mirpur 11")]
#[case(75, "Pallabi")]
#[case(80, "Uttara South")]
#[case(85, "Uttara Center")]
#[case(90, "Uttara North")]
#[case(77, "Unknown Station (77)")]
fn station_codes_resolve_through_full_decode(#[case] code: u8, #[case] name: &str) {
    let response = build_response(&[build_block(60, code, code, 100)]);
    let records = parse_history(&response, scan_time()).unwrap();
    assert_eq!(records[0].from_station, name);
    assert_eq!(records[0].to_station, name);
}

#[test]
fn block_parse_requires_exact_length() {
    let short = parse_block(&[0u8; BLOCK_LEN - 1], scan_time()).unwrap_err();
    assert_eq!(short, DecodeError::InvalidBlockSize(BLOCK_LEN - 1));
    let long = parse_block(&[0u8; BLOCK_LEN + 1], scan_time()).unwrap_err();
    assert_eq!(long, DecodeError::InvalidBlockSize(BLOCK_LEN + 1));
}

#[test]
fn records_serialise_for_the_presentation_layer() {
    let response = build_response(&[build_block(60, 65, 10, 100)]);
    let records = parse_history(&response, scan_time()).unwrap();
    let value = serde_json::to_value(&records[0]).unwrap();
    assert_eq!(value["from_station"], "Mirpur 10");
    assert_eq!(value["to_station"], "Motijheel");
    assert_eq!(value["balance"], 100);
    assert_eq!(value["timestamp"], "2024-05-17 11:00");
    let round_tripped: TransactionRecord = serde_json::from_value(value).unwrap();
    assert_eq!(round_tripped, records[0]);
}
