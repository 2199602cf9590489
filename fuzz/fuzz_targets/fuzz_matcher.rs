#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (&[u8], &[u8])| {
    // Compare the failure-table scan against a brute-force window search
    let (text, pattern) = input;
    let found = wordloc::utils::find_all(text, pattern);

    let expected: Vec<usize> = if pattern.is_empty() || pattern.len() > text.len() {
        Vec::new()
    } else {
        text.windows(pattern.len())
            .enumerate()
            .filter(|(_, w)| *w == pattern)
            .map(|(i, _)| i)
            .collect()
    };

    assert_eq!(found, expected);
});
