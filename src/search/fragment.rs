use serde::Serialize;
use tracing::debug;

use crate::error::MatchError;
use crate::index::matcher::{GenomeMatcher, Location};
use crate::search::extend::{extend_exact, extend_one_mismatch};

/// 某条基因组中片段的最佳匹配。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DnaMatch {
    pub genome_name: String,
    /// 最佳匹配在基因组中的起点（0-based）
    pub position: usize,
    /// 匹配长度，不小于请求的最短长度
    pub length: usize,
}

impl GenomeMatcher {
    /// 查找包含 `fragment` 的基因组，每条基因组只报告最长的一处匹配。
    ///
    /// 先以片段前 k 个碱基查 trie（`exact_only == false` 时允许一个替换），
    /// 再对每个候选位置向右延伸；非精确模式下延伸另有一次替换额度。
    /// 长度相同时保留偏移最小的位置。结果按基因组在库中的顺序排列；
    /// 无匹配时返回空 Vec。
    pub fn find_genomes_with_this_dna(
        &self,
        fragment: &str,
        minimum_length: usize,
        exact_only: bool,
    ) -> Result<Vec<DnaMatch>, MatchError> {
        let frag = fragment.as_bytes();
        if minimum_length < self.k {
            return Err(MatchError::MinimumBelowSearchLength { minimum: minimum_length, k: self.k });
        }
        if frag.len() < minimum_length {
            return Err(MatchError::FragmentTooShort { fragment: frag.len(), minimum: minimum_length });
        }

        let mut locs = self.trie.find(&frag[..self.k], exact_only);
        if locs.is_empty() {
            debug!(len = frag.len(), exact_only, "no seed hit");
            return Ok(Vec::new());
        }
        // 按 (genome, offset) 排序：同一基因组内先出现的偏移优先
        locs.sort_unstable();
        let n_hits = locs.len();

        let mut matches = Vec::new();
        let mut best: Option<(usize, Location)> = None;
        for loc in locs {
            if let Some((len, b)) = best {
                if b.genome != loc.genome {
                    matches.push(self.to_dna_match(b, len));
                    best = None;
                }
            }
            let len = self.match_length(loc, frag, exact_only);
            if len >= minimum_length && best.map_or(true, |(l, _)| len > l) {
                best = Some((len, loc));
            }
        }
        if let Some((len, b)) = best {
            matches.push(self.to_dna_match(b, len));
        }

        debug!(len = frag.len(), seed_hits = n_hits, genomes = matches.len(), "fragment search");
        Ok(matches)
    }

    fn match_length(&self, loc: Location, frag: &[u8], exact_only: bool) -> usize {
        let seq = self.library[loc.genome].as_str().as_bytes();
        if exact_only {
            extend_exact(seq, loc.offset, frag, self.k)
        } else {
            extend_one_mismatch(seq, loc.offset, frag, self.k)
        }
    }

    fn to_dna_match(&self, loc: Location, length: usize) -> DnaMatch {
        DnaMatch {
            genome_name: self.library[loc.genome].name().to_string(),
            position: loc.offset,
            length,
        }
    }
}
