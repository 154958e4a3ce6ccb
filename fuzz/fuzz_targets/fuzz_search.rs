#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sfx_index::index::{IndexConfig, SuffixIndex};

#[derive(Debug, Arbitrary)]
struct Input {
    fragments: Vec<Vec<u8>>,
    query: Vec<u8>,
    min_len: u8,
    min_group_size: u8,
}

fuzz_target!(|input: Input| {
    // Fold arbitrary bytes into the alphabet; the query keeps sentinels
    let fragments: Vec<Vec<u8>> = input
        .fragments
        .iter()
        .map(|f| f.iter().map(|b| b % 4).collect())
        .collect();
    let query: Vec<u8> = input.query.iter().map(|b| b % 6).collect();

    let config = IndexConfig {
        min_group_size: (input.min_group_size as usize % 16).max(1),
        max_group_size: 32,
        ..IndexConfig::default()
    };
    let Ok(index) = SuffixIndex::from_fragments(&fragments, &config) else {
        return;
    };

    let min_len = (input.min_len as usize % 8).max(1);
    let records = index.search(&query, min_len).expect("search on a built index");
    let symbols = index.symbols();
    for r in &records {
        let q = r.query_position as usize;
        let s = r.source_position as usize;
        let len = r.length as usize;
        assert!(len >= min_len);
        assert_eq!(&query[q..q + len], &symbols[s..s + len]);
    }

    for group in index.element_groups() {
        assert!(group.chain.iter().all(|&s| s < 4));
    }
});
