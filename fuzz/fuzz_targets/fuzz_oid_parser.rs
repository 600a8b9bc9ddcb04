#![no_main]

use libfuzzer_sys::fuzz_target;

use snmp_packet::oid::{Oid, parse_oid};

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };

    // Strict success implies lenient success with the same arcs
    let lenient = match (Oid::parse(s), parse_oid(s)) {
        (Ok(strict), Ok(lenient)) => {
            assert_eq!(strict.arcs(), lenient.arcs());
            lenient
        }
        (Ok(strict), Err(e)) => panic!("strict accepted {strict} but lenient failed: {e}"),
        (Err(_), Ok(lenient)) => lenient,
        (Err(_), Err(_)) => return,
    };

    // Lenient parse keeps only numeric arcs, in order
    assert!(lenient.len() <= s.split('.').count());

    // Validated OIDs always encode
    if lenient.validate().is_ok() {
        let _ = lenient.to_ber_checked().unwrap();
    }
});
