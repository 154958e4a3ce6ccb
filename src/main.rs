use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use serde::Serialize;
use sfx_index::index::build::build_many_with_progress;
use sfx_index::index::{IndexConfig, IndexStats, SuffixIndex};
use sfx_index::output::{self, LocatedMatch};
use sfx_index::utils::{encode, progress};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "sfx")]
#[command(about = "Maximal-match search and repeat mining over nucleotide fragments")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with index configuration (flags override it)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Colorize terminal output
    #[arg(long, global = true)]
    color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build an index over the fragments and print its statistics
    Stats {
        /// Fragment files (one fragment per line)
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the element groups mined while indexing
    Groups {
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Shortest repeat to report
        #[arg(long)]
        min_group_size: Option<usize>,

        /// Longest repeat to report
        #[arg(long)]
        max_group_size: Option<usize>,

        #[arg(long)]
        json: bool,
    },
    /// Find every match of the query at least --min-length long
    Search {
        /// Query as nucleotide letters
        query: String,

        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Minimum match length
        #[arg(short = 'm', long, default_value_t = 10)]
        min_length: usize,

        #[arg(long)]
        json: bool,
    },
    /// Build one index per file in parallel and print each one's statistics
    Batch {
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Worker threads (0 = one per core)
        #[arg(short, long)]
        workers: Option<usize>,

        #[arg(long)]
        json: bool,
    },
}

/// Statistics of one input file in `batch` output
#[derive(Serialize)]
struct FileStats {
    file: String,
    #[serde(flatten)]
    stats: IndexStats,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Stats { files, json } => {
            let index = build_from_files(&files, &config, !json)?;
            let stats = index.stats();
            if json {
                output::print_json(&mut std::io::stdout(), &stats)?;
            } else {
                let name = display_names(&files);
                output::print_stats(&mut output::stdout(cli.color), &name, &stats)?;
            }
        }
        Commands::Groups {
            files,
            min_group_size,
            max_group_size,
            json,
        } => {
            if let Some(min) = min_group_size {
                config.min_group_size = min;
            }
            if let Some(max) = max_group_size {
                config.max_group_size = max;
            }
            config.mine_groups = true;

            let index = build_from_files(&files, &config, !json)?;
            let groups = index.element_groups();
            if json {
                output::print_json(&mut std::io::stdout(), groups)?;
            } else {
                output::print_groups(&mut output::stdout(cli.color), groups)?;
                eprintln!("sfx: {} element groups", groups.len());
            }
        }
        Commands::Search {
            query,
            files,
            min_length,
            json,
        } => {
            if min_length == 0 {
                bail!("--min-length must be at least 1");
            }
            let query = encode(query.as_bytes()).context("Invalid query")?;

            // Groups are not needed to answer a search
            config.mine_groups = false;
            let index = build_from_files(&files, &config, !json)?;

            let records = index.search(&query, min_length)?;
            let matches: Vec<LocatedMatch> = records
                .into_iter()
                .map(|r| LocatedMatch::resolve(&index, r))
                .collect();

            if json {
                output::print_json(&mut std::io::stdout(), &matches)?;
            } else {
                let mut stdout = output::stdout(cli.color);
                output::print_matches(&mut stdout, &matches)?;
                stdout.flush()?;
                eprintln!("sfx: {} matches", matches.len());
            }
        }
        Commands::Batch {
            files,
            workers,
            json,
        } => {
            if let Some(workers) = workers {
                config.workers = workers;
            }

            let sets = files
                .iter()
                .map(|f| read_fragments(f))
                .collect::<Result<Vec<_>>>()?;
            let indexes = build_many_with_progress(&sets, &config, !json)?;

            let all: Vec<FileStats> = files
                .iter()
                .zip(&indexes)
                .map(|(file, index)| FileStats {
                    file: file.display().to_string(),
                    stats: index.stats(),
                })
                .collect();

            if json {
                output::print_json(&mut std::io::stdout(), &all)?;
            } else {
                let mut stdout = output::stdout(cli.color);
                for (i, entry) in all.iter().enumerate() {
                    if i > 0 {
                        writeln!(stdout)?;
                    }
                    output::print_stats(&mut stdout, &entry.file, &entry.stats)?;
                }
            }
        }
    }

    Ok(())
}

/// Read the JSON config file, or fall back to defaults
fn load_config(path: Option<&Path>) -> Result<IndexConfig> {
    let Some(path) = path else {
        return Ok(IndexConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Invalid config {}", path.display()))
}

/// Each non-empty line is one fragment; `>` and `;` lines are headers and
/// comments
fn read_fragments(path: &Path) -> Result<Vec<Vec<u8>>> {
    let content =
        fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;

    let mut fragments = Vec::new();
    for (line_no, line) in content.split(|&b| b == b'\n').enumerate() {
        let line = line.trim_ascii();
        if line.is_empty() || line.starts_with(b">") || line.starts_with(b";") {
            continue;
        }
        let codes = encode(line)
            .with_context(|| format!("{}:{}: invalid fragment", path.display(), line_no + 1))?;
        if !codes.is_empty() {
            fragments.push(codes);
        }
    }
    Ok(fragments)
}

/// Build a single index over the fragments of every file
fn build_from_files(
    files: &[PathBuf],
    config: &IndexConfig,
    show_progress: bool,
) -> Result<SuffixIndex> {
    let mut fragments = Vec::new();
    for file in files {
        fragments.extend(read_fragments(file)?);
    }
    if fragments.is_empty() {
        bail!("No fragments found in {}", display_names(files));
    }

    let spinner = show_progress.then(|| progress::spinner("Building index..."));
    let index = SuffixIndex::from_fragments(&fragments, config);
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    index.context("Failed to build index")
}

fn display_names(files: &[PathBuf]) -> String {
    files
        .iter()
        .map(|f| f.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
