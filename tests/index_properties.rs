//! Property tests for index construction and search against brute-force
//! oracles on seeded random inputs.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sfx_index::index::suffix_array::{lcp, radix};
use sfx_index::index::{IndexConfig, SuffixIndex, SymbolBuffer};
use sfx_index::query::MatchRecord;
use sfx_index::utils::{ALPHABET_SIZE, encode};

fn random_seq(rng: &mut StdRng, len: usize, alphabet: u8) -> Vec<u8> {
    (0..len).map(|_| rng.gen_range(0..alphabet)).collect()
}

/// Fragments over a small alphabet so repeats are frequent
fn random_fragments(seed: u64) -> Vec<Vec<u8>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let count = rng.gen_range(1..5);
    let alphabet = rng.gen_range(2..=ALPHABET_SIZE);
    (0..count)
        .map(|_| {
            let len = rng.gen_range(0..60);
            random_seq(&mut rng, len, alphabet)
        })
        .collect()
}

fn common_prefix(a: &[u8], b: &[u8]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

fn naive_suffix_array(buffer: &[u8]) -> Vec<u32> {
    let mut sa: Vec<u32> = (0..buffer.len() as u32).collect();
    sa.sort_by(|&a, &b| buffer[a as usize..].cmp(&buffer[b as usize..]));
    sa
}

/// Every occurrence the searcher must report, computed by comparing the
/// query against every buffer position
fn naive_search(buffer: &[u8], query: &[u8], min_len: usize) -> Vec<MatchRecord> {
    let mut records = Vec::new();
    for q in 0..query.len() {
        let lengths: Vec<usize> = (0..buffer.len())
            .map(|s| common_prefix(&query[q..], &buffer[s..]))
            .collect();
        let longest = lengths.iter().copied().max().unwrap_or(0);
        if longest < min_len {
            continue;
        }
        for (s, &len) in lengths.iter().enumerate() {
            if len >= min_len {
                records.push(MatchRecord {
                    query_position: q as u32,
                    source_position: s as u32,
                    length: len as u32,
                });
            }
        }
    }
    records.sort_by(MatchRecord::search_order);
    records
}

#[test]
fn test_atat_round_trip() {
    let buffer = [0u8, 1, 0, 1, 4];
    let suftab = radix::sort(&buffer).unwrap();
    let (_, lcptab) = lcp::build_lcp(&buffer, &suftab);
    assert_eq!(suftab, vec![0, 2, 1, 3, 4]);
    assert_eq!(lcptab, vec![0, 2, 0, 1, 0]);
}

#[test]
fn test_atat_search_finds_both_copies() {
    let index = SuffixIndex::from_fragments(&[[0u8, 1, 0, 1]], &IndexConfig::default()).unwrap();
    let records = index.search(&[0, 1], 2).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!((records[0].source_position, records[0].length), (0, 2));
    assert_eq!((records[1].source_position, records[1].length), (2, 2));
}

#[test]
fn test_no_repeats_no_groups() {
    let buffer = [0u8, 1, 2, 3, 4];
    let suftab = radix::sort(&buffer).unwrap();
    let (_, lcptab) = lcp::build_lcp(&buffer, &suftab);
    assert_eq!(lcptab, vec![0; 5]);

    for min in 1..5 {
        let config = IndexConfig::with_min_group_size(min);
        let index = SuffixIndex::from_fragments(&[[0u8, 1, 2, 3]], &config).unwrap();
        assert!(index.element_groups().is_empty());
    }
}

#[test]
fn test_suffix_array_and_lcp_match_naive() {
    for seed in 0..200 {
        let fragments = random_fragments(seed);
        let buffer = SymbolBuffer::from_fragments(&fragments).unwrap();
        let index = SuffixIndex::build(buffer.clone(), &IndexConfig::default()).unwrap();
        let symbols = buffer.symbols();

        assert_eq!(index.suftab(), naive_suffix_array(symbols), "seed {}", seed);
        for i in 1..index.len() {
            let a = &symbols[index.suftab()[i - 1] as usize..];
            let b = &symbols[index.suftab()[i] as usize..];
            assert_eq!(index.lcptab()[i] as usize, common_prefix(a, b), "seed {}", seed);
        }
        assert_eq!(index.lcptab()[0], 0);
    }
}

#[test]
fn test_sorter_without_terminator() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..100 {
        let len = rng.gen_range(1..80);
        let buffer = random_seq(&mut rng, len, 3);
        assert_eq!(radix::sort(&buffer).unwrap(), naive_suffix_array(&buffer));
    }
}

#[test]
fn test_search_matches_brute_force() {
    for seed in 0..150 {
        let fragments = random_fragments(seed);
        let index = SuffixIndex::from_fragments(&fragments, &IndexConfig::default()).unwrap();

        let mut rng = StdRng::seed_from_u64(seed + 10_000);
        let query_len = rng.gen_range(0..30);
        let query = random_seq(&mut rng, query_len, ALPHABET_SIZE);
        let min_len = rng.gen_range(1..6);

        let expected = naive_search(index.symbols(), &query, min_len);
        let actual = index.search(&query, min_len).unwrap();
        assert_eq!(actual, expected, "seed {} min_len {}", seed, min_len);
    }
}

#[test]
fn test_search_with_query_from_buffer() {
    // Queries cut out of the indexed text always have long matches
    for seed in 0..50 {
        let fragments = random_fragments(seed);
        let Some(source) = fragments.iter().find(|f| f.len() >= 12) else {
            continue;
        };
        let index = SuffixIndex::from_fragments(&fragments, &IndexConfig::default()).unwrap();
        let query = &source[2..12];

        let records = index.search(query, 10).unwrap();
        assert!(records.iter().any(|r| r.query_position == 0 && r.length == 10));
        assert_eq!(records, naive_search(index.symbols(), query, 10));
    }
}

#[test]
fn test_matching_statistics_match_brute_force() {
    for seed in 0..100 {
        let fragments = random_fragments(seed);
        let index = SuffixIndex::from_fragments(&fragments, &IndexConfig::default()).unwrap();
        let mut rng = StdRng::seed_from_u64(seed + 20_000);
        let query = random_seq(&mut rng, 25, ALPHABET_SIZE);

        let stats = index.searcher().matching_statistics(&query).unwrap();
        let symbols = index.symbols();
        for (q, &len) in stats.iter().enumerate() {
            let longest = (0..symbols.len())
                .map(|s| common_prefix(&query[q..], &symbols[s..]))
                .max()
                .unwrap_or(0);
            assert_eq!(len as usize, longest, "seed {} position {}", seed, q);
        }
    }
}

#[test]
fn test_count_matches_brute_force() {
    for seed in 0..100 {
        let fragments = random_fragments(seed);
        let index = SuffixIndex::from_fragments(&fragments, &IndexConfig::default()).unwrap();
        let mut rng = StdRng::seed_from_u64(seed + 30_000);
        let len = rng.gen_range(1..5);
        let pattern = random_seq(&mut rng, len, ALPHABET_SIZE);

        let symbols = index.symbols();
        let expected: Vec<u32> = (0..symbols.len())
            .filter(|&s| symbols[s..].starts_with(&pattern))
            .map(|s| s as u32)
            .collect();
        assert_eq!(index.count(&pattern), expected.len());
        assert_eq!(index.positions(&pattern), expected);
    }
}

#[test]
fn test_nothing_crosses_a_sentinel() {
    for seed in 0..100 {
        let mut fragments = random_fragments(seed);
        // At least two fragments, ending and starting alike
        fragments.push(vec![0, 1, 2, 3, 0, 1, 2, 3, 0, 1, 2]);
        fragments.push(vec![3, 0, 1, 2, 3, 0, 1, 2, 3, 0, 1]);

        let config = IndexConfig {
            min_group_size: 2,
            max_group_size: 40,
            ..IndexConfig::default()
        };
        let index = SuffixIndex::from_fragments(&fragments, &config).unwrap();
        let symbols = index.symbols();

        let query: Vec<u8> = fragments.concat();
        for r in index.search(&query, 2).unwrap() {
            let s = r.source_position as usize;
            let span = &symbols[s..s + r.length as usize];
            assert!(span.iter().all(|&c| c < ALPHABET_SIZE), "seed {}", seed);
        }
        for group in index.element_groups() {
            assert!(group.chain.iter().all(|&c| c < ALPHABET_SIZE), "seed {}", seed);
            for &p in &group.positions {
                let p = p as usize;
                assert_eq!(&symbols[p..p + group.len()], group.chain.as_slice());
            }
        }
    }
}

#[test]
fn test_rebuild_is_deterministic() {
    for seed in 0..30 {
        let fragments = random_fragments(seed);
        let config = IndexConfig::with_min_group_size(3);
        let a = SuffixIndex::from_fragments(&fragments, &config).unwrap();
        let b = SuffixIndex::from_fragments(&fragments, &config).unwrap();

        assert_eq!(a.suftab(), b.suftab());
        assert_eq!(a.lcptab(), b.lcptab());
        assert_eq!(a.element_groups(), b.element_groups());
        assert_eq!(a.stats(), b.stats());
    }
}

#[test]
fn test_homopolymer_never_grouped() {
    let run = encode(b"CCCCCCCCCCCCCC").unwrap();
    let index =
        SuffixIndex::from_fragments(&[run.clone(), run.clone(), run], &IndexConfig::default())
            .unwrap();
    assert!(index.element_groups().is_empty());
}

#[test]
fn test_planted_repeat_becomes_group() {
    let repeat = encode(b"ACGTTGCATGCAAGT").unwrap();
    let mut rng = StdRng::seed_from_u64(5);
    let fragments: Vec<Vec<u8>> = (0..3)
        .map(|_| {
            let mut f = random_seq(&mut rng, 30, ALPHABET_SIZE);
            f.extend_from_slice(&repeat);
            f.extend(random_seq(&mut rng, 30, ALPHABET_SIZE));
            f
        })
        .collect();

    let index = SuffixIndex::from_fragments(&fragments, &IndexConfig::default()).unwrap();
    let groups = index.element_groups();
    assert!(
        groups
            .iter()
            .any(|g| g.count() == 3 && g.chain.windows(repeat.len()).any(|w| w == repeat)),
        "groups: {:?}",
        groups
    );
    for g in groups {
        assert!(g.len() >= 10 && g.len() <= 100);
        assert!(g.positions.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn test_terminator_stays_unique_maximum() {
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..50 {
        let count = rng.gen_range(1..30);
        let fragments: Vec<Vec<u8>> = (0..count)
            .map(|_| {
                let len = rng.gen_range(0..8);
                random_seq(&mut rng, len, ALPHABET_SIZE)
            })
            .collect();
        let buffer = SymbolBuffer::from_fragments(&fragments).unwrap();
        let symbols = buffer.symbols();
        let (last, rest) = symbols.split_last().unwrap();
        assert!(rest.iter().all(|s| s < last));
    }
}

#[test]
fn test_concurrent_searchers_match_sequential() {
    let mut rng = StdRng::seed_from_u64(77);
    let fragments: Vec<Vec<u8>> = (0..6).map(|_| random_seq(&mut rng, 400, 3)).collect();
    let index = SuffixIndex::from_fragments(&fragments, &IndexConfig::default()).unwrap();
    let queries: Vec<Vec<u8>> = (0..8).map(|_| random_seq(&mut rng, 120, 3)).collect();

    let sequential: Vec<_> = queries
        .iter()
        .map(|q| {
            let mut searcher = index.searcher();
            (searcher.search(q, 6).unwrap(), searcher.matching_statistics(q).unwrap())
        })
        .collect();

    // One shared index, one searcher per thread
    let parallel: Vec<_> = std::thread::scope(|s| {
        let handles: Vec<_> = queries
            .iter()
            .map(|q| {
                let index = &index;
                s.spawn(move || {
                    let mut searcher = index.searcher();
                    (searcher.search(q, 6).unwrap(), searcher.matching_statistics(q).unwrap())
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(parallel, sequential);
    assert!(sequential.iter().any(|(records, _)| !records.is_empty()));
}
