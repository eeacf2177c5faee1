#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(raw) = std::str::from_utf8(data) {
        let name = lumin::canonicalize(raw);
        assert!(!name.as_str().contains('-'));
        let (stem, _weight) = lumin::naming::parse_file_name(raw);
        let _ = lumin::canonicalize(&stem);
    }
});
