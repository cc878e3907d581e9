use tracing::{debug, warn};

use crate::error::MatchError;
use crate::genome::Genome;
use crate::index::trie::Trie;

/// 默认最短检索长度（k）。
pub const DEFAULT_MIN_SEARCH_LENGTH: usize = 10;

/// k-mer 出现位置：库中第 `genome` 条基因组、起点 `offset`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Location {
    pub genome: usize,
    pub offset: usize,
}

#[derive(Clone, Copy, Debug)]
pub struct MatcherOpt {
    /// k：trie 键长，同时是所有查询允许的最短匹配长度
    pub min_search_length: usize,
    /// 为 true 时额外索引起点为 `n - k` 的最后一个窗口
    pub index_final_window: bool,
}

impl Default for MatcherOpt {
    fn default() -> Self {
        Self { min_search_length: DEFAULT_MIN_SEARCH_LENGTH, index_final_window: false }
    }
}

/// 基因组库 + k-mer trie。只追加，不删除。
#[derive(Debug)]
pub struct GenomeMatcher {
    pub(crate) k: usize,
    pub(crate) index_final_window: bool,
    pub(crate) library: Vec<Genome>,
    pub(crate) trie: Trie<Location>,
}

impl GenomeMatcher {
    pub fn new(min_search_length: usize) -> Result<Self, MatchError> {
        Self::with_opt(MatcherOpt { min_search_length, ..MatcherOpt::default() })
    }

    pub fn with_opt(opt: MatcherOpt) -> Result<Self, MatchError> {
        if opt.min_search_length == 0 {
            return Err(MatchError::InvalidSearchLength);
        }
        Ok(Self {
            k: opt.min_search_length,
            index_final_window: opt.index_final_window,
            library: Vec::new(),
            trie: Trie::new(),
        })
    }

    pub fn minimum_search_length(&self) -> usize {
        self.k
    }

    pub fn genomes(&self) -> &[Genome] {
        &self.library
    }

    pub fn genome_count(&self) -> usize {
        self.library.len()
    }

    /// trie 中的 k-mer 条目总数。
    pub fn kmer_count(&self) -> usize {
        self.trie.len()
    }

    /// 追加一条基因组并索引其所有 k-mer 窗口。
    ///
    /// 默认窗口起点为 `0 ≤ i < n - k`（半开，最后一个完整窗口 `n - k` 不索引），
    /// 因此长度不超过 k 的基因组不产生任何条目。
    pub fn add_genome(&mut self, genome: Genome) {
        let gi = self.library.len();
        let n = genome.len();
        let end = if self.index_final_window {
            (n + 1).saturating_sub(self.k)
        } else {
            n.saturating_sub(self.k)
        };

        if end == 0 {
            warn!(genome = genome.name(), len = n, k = self.k, "genome too short to index");
        }
        for i in 0..end {
            // i + k <= n 恒成立
            if let Some(kmer) = genome.extract(i, self.k) {
                self.trie.insert(kmer, Location { genome: gi, offset: i });
            }
        }
        debug!(genome = genome.name(), index = gi, kmers = end, "indexed genome");
        self.library.push(genome);
    }

    pub fn add_genomes(&mut self, genomes: impl IntoIterator<Item = Genome>) {
        for g in genomes {
            self.add_genome(g);
        }
    }
}
