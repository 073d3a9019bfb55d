#![no_main]

use billcraft::input::SheetDefaults;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Must not panic — errors are fine, panics are bugs.
    if let Ok(invoice) = billcraft::input::from_csv_reader(data, &SheetDefaults::default()) {
        let _ = billcraft::core::validate_invoice(&invoice);
    }
});
