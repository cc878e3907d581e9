pub mod extend;
pub mod fragment;
pub mod related;

pub use extend::{extend_exact, extend_one_mismatch};
pub use fragment::DnaMatch;
pub use related::{rank_related, GenomeMatch};

use anyhow::{anyhow, Result};
use rayon::prelude::*;
use serde::Serialize;
use std::io::Write;
use tracing::{info, warn};

use crate::index::matcher::{GenomeMatcher, MatcherOpt};
use crate::io::genome_file;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Tsv,
    Json,
}

#[derive(Clone, Copy, Debug)]
pub struct SearchOpt {
    pub minimum_length: usize,
    pub exact_only: bool,
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug)]
pub struct RelatedOpt {
    pub fragment_length: usize,
    pub exact_only: bool,
    /// 百分比阈值（0–100）
    pub threshold: f64,
    pub threads: usize,
    pub format: OutputFormat,
}

#[derive(Serialize)]
struct FragmentRow<'a> {
    fragment: &'a str,
    #[serde(flatten)]
    hit: &'a DnaMatch,
}

#[derive(Serialize)]
struct RelatedRow<'a> {
    query: &'a str,
    #[serde(flatten)]
    hit: &'a GenomeMatch,
}

/// 加载基因组库并建立索引。
pub fn build_matcher(library_path: &str, opt: MatcherOpt) -> Result<GenomeMatcher> {
    let genomes = genome_file::load_genomes_from_path(library_path)
        .map_err(|e| anyhow!("cannot load genome library '{}': {}", library_path, e))?;
    let mut matcher = GenomeMatcher::with_opt(opt)?;
    let total_len: usize = genomes.iter().map(|g| g.len()).sum();
    let n_genomes = genomes.len();
    matcher.add_genomes(genomes);
    info!(
        library = library_path,
        genomes = n_genomes,
        total_len,
        kmers = matcher.kmer_count(),
        k = matcher.minimum_search_length(),
        "genome library indexed"
    );
    Ok(matcher)
}

fn open_output(out_path: Option<&str>) -> Result<Box<dyn Write>> {
    let out: Box<dyn Write> = if let Some(p) = out_path {
        let fh = std::fs::File::create(p).map_err(|e| anyhow!("cannot create output '{}': {}", p, e))?;
        Box::new(std::io::BufWriter::new(fh))
    } else {
        Box::new(std::io::BufWriter::new(std::io::stdout()))
    };
    Ok(out)
}

/// 在库中查找每个片段，写出每条基因组的最佳匹配。
pub fn search_fragments(
    library_path: &str,
    fragments: &[String],
    matcher_opt: MatcherOpt,
    opt: SearchOpt,
    out_path: Option<&str>,
) -> Result<()> {
    let matcher = build_matcher(library_path, matcher_opt)?;

    let mut rows: Vec<(String, DnaMatch)> = Vec::new();
    for raw in fragments {
        let fragment = raw.to_ascii_uppercase();
        match matcher.find_genomes_with_this_dna(&fragment, opt.minimum_length, opt.exact_only) {
            Ok(hits) => {
                if hits.is_empty() {
                    info!(fragment = %fragment, "no match");
                }
                rows.extend(hits.into_iter().map(|h| (fragment.clone(), h)));
            }
            Err(e) => warn!(fragment = %fragment, "skipped: {}", e),
        }
    }

    let mut out = open_output(out_path)?;
    match opt.format {
        OutputFormat::Tsv => {
            writeln!(out, "fragment\tgenome\tposition\tlength")?;
            for (fragment, h) in &rows {
                writeln!(out, "{}\t{}\t{}\t{}", fragment, h.genome_name, h.position, h.length)?;
            }
        }
        OutputFormat::Json => {
            let json: Vec<FragmentRow> = rows.iter().map(|(f, h)| FragmentRow { fragment: f, hit: h }).collect();
            serde_json::to_writer_pretty(&mut out, &json)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

/// 对查询文件中的每条基因组估计相关库基因组。
/// 查询之间在 rayon 线程池中并行，单个查询内部保持顺序执行。
pub fn relate_genomes(
    library_path: &str,
    queries_path: &str,
    matcher_opt: MatcherOpt,
    opt: RelatedOpt,
    out_path: Option<&str>,
) -> Result<()> {
    let matcher = build_matcher(library_path, matcher_opt)?;
    let queries = genome_file::load_genomes_from_path(queries_path)
        .map_err(|e| anyhow!("cannot load query genomes '{}': {}", queries_path, e))?;
    info!(queries = queries.len(), threads = opt.threads, "relatedness search");

    let pool = rayon::ThreadPoolBuilder::new().num_threads(opt.threads.max(1)).build()?;
    let results = pool.install(|| {
        queries
            .par_iter()
            .map(|q| matcher.find_related_genomes(q, opt.fragment_length, opt.exact_only, opt.threshold))
            .collect::<Vec<_>>()
    });

    let mut rows: Vec<(&str, GenomeMatch)> = Vec::new();
    for (q, res) in queries.iter().zip(results) {
        let hits = res?;
        if hits.is_empty() {
            info!(query = q.name(), "no related genomes");
        }
        rows.extend(hits.into_iter().map(|h| (q.name(), h)));
    }

    let mut out = open_output(out_path)?;
    match opt.format {
        OutputFormat::Tsv => {
            writeln!(out, "query\tgenome\tpercent")?;
            for (q, h) in &rows {
                writeln!(out, "{}\t{}\t{:.2}", q, h.genome_name, h.percent_match)?;
            }
        }
        OutputFormat::Json => {
            let json: Vec<RelatedRow> = rows.iter().map(|(q, h)| RelatedRow { query: q, hit: h }).collect();
            serde_json::to_writer_pretty(&mut out, &json)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}
