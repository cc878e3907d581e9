use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use genome_matcher::index::{MatcherOpt, DEFAULT_MIN_SEARCH_LENGTH};
use genome_matcher::search::{self, OutputFormat, RelatedOpt, SearchOpt};

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[derive(Parser, Debug)]
#[command(name = "genome-matcher", author, version, about = "Fuzzy DNA fragment search over a k-mer trie", arg_required_else_help = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Find library genomes containing each fragment
    Search {
        /// Genome library file
        library: String,
        /// DNA fragments to search for
        #[arg(required = true)]
        fragments: Vec<String>,
        /// Minimum search length (k-mer size of the index)
        #[arg(short = 'k', long = "min-search-length", default_value_t = DEFAULT_MIN_SEARCH_LENGTH)]
        min_search_length: usize,
        /// Minimum reported match length (defaults to k)
        #[arg(short = 'm', long = "min-length")]
        min_length: Option<usize>,
        /// Disallow substitutions
        #[arg(long)]
        exact: bool,
        /// Also index the last k-mer of every genome
        #[arg(long)]
        index_final_window: bool,
        /// Output path (stdout if omitted)
        #[arg(short, long)]
        out: Option<String>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Tsv)]
        format: OutputFormat,
    },
    /// Estimate which library genomes are related to each query genome
    Related {
        /// Genome library file
        library: String,
        /// Query genome file
        queries: String,
        #[arg(short = 'k', long = "min-search-length", default_value_t = DEFAULT_MIN_SEARCH_LENGTH)]
        min_search_length: usize,
        /// Chunk length (defaults to k)
        #[arg(short = 'l', long = "fragment-length")]
        fragment_length: Option<usize>,
        /// Minimum percent of matching chunks
        #[arg(short = 'p', long = "threshold", default_value_t = 20.0)]
        threshold: f64,
        #[arg(long)]
        exact: bool,
        #[arg(long)]
        index_final_window: bool,
        #[arg(short = 't', long = "threads", default_value_t = 1)]
        threads: usize,
        #[arg(short, long)]
        out: Option<String>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Tsv)]
        format: OutputFormat,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("genome_matcher=debug,info")
        } else {
            EnvFilter::new("genome_matcher=warn")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        Commands::Search {
            library,
            fragments,
            min_search_length,
            min_length,
            exact,
            index_final_window,
            out,
            format,
        } => {
            let mopt = MatcherOpt { min_search_length, index_final_window };
            let opt = SearchOpt {
                minimum_length: min_length.unwrap_or(min_search_length),
                exact_only: exact,
                format,
            };
            search::search_fragments(&library, &fragments, mopt, opt, out.as_deref())
        }
        Commands::Related {
            library,
            queries,
            min_search_length,
            fragment_length,
            threshold,
            exact,
            index_final_window,
            threads,
            out,
            format,
        } => {
            let mopt = MatcherOpt { min_search_length, index_final_window };
            let opt = RelatedOpt {
                fragment_length: fragment_length.unwrap_or(min_search_length),
                exact_only: exact,
                threshold,
                threads,
                format,
            };
            search::relate_genomes(&library, &queries, mopt, opt, out.as_deref())
        }
    }
}
