#![no_main]

use libfuzzer_sys::fuzz_target;
use sfx_index::index::suffix_array::{lcp, radix};

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes, no terminator: the order must still be lexicographic
    let Ok(suftab) = radix::sort(data) else {
        return;
    };
    for w in suftab.windows(2) {
        assert!(data[w[0] as usize..] < data[w[1] as usize..]);
    }

    let (_, lcptab) = lcp::build_lcp(data, &suftab);
    for i in 1..suftab.len() {
        let a = &data[suftab[i - 1] as usize..];
        let b = &data[suftab[i] as usize..];
        let common = a.iter().zip(b).take_while(|(x, y)| x == y).count();
        assert_eq!(lcptab[i] as usize, common);
    }
});
