use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use tracing::debug;

use crate::error::MatchError;
use crate::genome::Genome;
use crate::index::matcher::GenomeMatcher;

/// 与查询基因组相关的库基因组及其命中百分比。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenomeMatch {
    pub genome_name: String,
    /// 命中的分块占全部分块的百分比（0–100）
    pub percent_match: f64,
}

impl GenomeMatcher {
    /// 估计与 `query` 相关的库基因组。
    ///
    /// 查询被切成 `len / fragment_match_length` 个互不重叠的整块（余数丢弃），
    /// 每块以 `minimum_length = fragment_match_length` 做一次片段查找。
    /// 同一块内同名基因组只计一次。结果按百分比降序、名称升序排列；
    /// 查询不足一块时返回空 Vec。
    pub fn find_related_genomes(
        &self,
        query: &Genome,
        fragment_match_length: usize,
        exact_only: bool,
        match_percent_threshold: f64,
    ) -> Result<Vec<GenomeMatch>, MatchError> {
        if fragment_match_length < self.k {
            return Err(MatchError::ChunkBelowSearchLength { chunk: fragment_match_length, k: self.k });
        }
        let n_chunks = query.len() / fragment_match_length;
        if n_chunks == 0 {
            debug!(query = query.name(), len = query.len(), "query shorter than one chunk");
            return Ok(Vec::new());
        }

        let mut hits: BTreeMap<String, usize> = BTreeMap::new();
        for i in 0..n_chunks {
            let Some(chunk) = query.extract(i * fragment_match_length, fragment_match_length) else {
                continue;
            };
            let matched = self.find_genomes_with_this_dna(chunk, fragment_match_length, exact_only)?;
            // 同名基因组在一块内只计一次
            let names: BTreeSet<String> = matched.into_iter().map(|m| m.genome_name).collect();
            for name in names {
                *hits.entry(name).or_insert(0) += 1;
            }
        }

        let mut results: Vec<GenomeMatch> = hits
            .into_iter()
            .map(|(name, h)| GenomeMatch {
                genome_name: name,
                percent_match: 100.0 * h as f64 / n_chunks as f64,
            })
            .filter(|g| g.percent_match >= match_percent_threshold)
            .collect();
        rank_related(&mut results);

        debug!(query = query.name(), chunks = n_chunks, related = results.len(), "relatedness search");
        Ok(results)
    }
}

/// 百分比降序，相同百分比按名称升序。
pub fn rank_related(results: &mut [GenomeMatch]) {
    results.sort_by(|a, b| {
        b.percent_match
            .total_cmp(&a.percent_match)
            .then_with(|| a.genome_name.cmp(&b.genome_name))
    });
}
