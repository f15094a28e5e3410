#![no_main]
#[macro_use] extern crate libfuzzer_sys;
extern crate chrono;
extern crate gga_ecef;

use chrono::NaiveDate;
use std::io::Cursor;
use gga_ecef::LineSource;

fuzz_target!(|data: &[u8]| {
    let today = match NaiveDate::from_ymd_opt(2018, 6, 1) {
        Some(d) => d,
        None => return,
    };

    for line in LineSource::new(Cursor::new(data)) {
        match line {
            Ok(line) => {
                let _ = gga_ecef::parse(&line, today);
            }
            Err(_) => break,
        }
    }
});
