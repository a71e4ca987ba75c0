#![no_main]
#[macro_use] extern crate libfuzzer_sys;
extern crate dms2dec;

use std::str;

fuzz_target!(|data: &[u8]| {
    if let Ok(token) = str::from_utf8(data) {
        let _ = dms2dec::parse(token);
    }
});
