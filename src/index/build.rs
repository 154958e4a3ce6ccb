use crate::error::{IndexError, Result};
use crate::index::suffix_index::SuffixIndex;
use crate::index::types::IndexConfig;
use crate::utils::progress;
use rayon::prelude::*;

/// Build one independent index per fragment set
///
/// Sets are indexed in parallel on a pool of `config.workers` threads. The
/// result keeps the order of `fragment_sets`; if any set fails, the whole
/// batch fails with that error.
pub fn build_many<F>(fragment_sets: &[Vec<F>], config: &IndexConfig) -> Result<Vec<SuffixIndex>>
where
    F: AsRef<[u8]> + Sync,
{
    build_many_with_progress(fragment_sets, config, false)
}

/// Build one index per fragment set, optionally drawing a progress bar
pub fn build_many_with_progress<F>(
    fragment_sets: &[Vec<F>],
    config: &IndexConfig,
    show_progress: bool,
) -> Result<Vec<SuffixIndex>>
where
    F: AsRef<[u8]> + Sync,
{
    config.validate()?;

    // 0 lets rayon pick one thread per core
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.workers)
        .build()
        .map_err(|e| {
            IndexError::invalid(format!("cannot start {} workers: {}", config.workers, e))
        })?;

    let progress_bar =
        show_progress.then(|| progress::bar(fragment_sets.len() as u64, "Building indexes..."));

    let results: Vec<Result<SuffixIndex>> = pool.install(|| {
        fragment_sets
            .par_iter()
            .map(|fragments| {
                let result = SuffixIndex::from_fragments(fragments, config);
                if let Some(ref pb) = progress_bar {
                    pb.inc(1);
                }
                result
            })
            .collect()
    });

    if let Some(pb) = progress_bar {
        pb.finish_with_message(format!("Built {} indexes", results.len()));
    }

    results.into_iter().collect()
}
