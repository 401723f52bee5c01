#![no_main]

use libfuzzer_sys::fuzz_target;
use uasniff::ua::Classification;

fuzz_target!(|agent: &str| {
    let ua = Classification::new(agent);
    let xml = ua.to_xml_element().to_string();
    assert!(!xml.chars().any(|c| c < ' '));
});
