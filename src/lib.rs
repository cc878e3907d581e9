//! # genome-matcher
//!
//! 基于 k-mer trie 的 DNA 片段模糊检索与基因组相关性估计。
//!
//! 本 crate 提供：
//!
//! - **索引构建**：将每条基因组的全部 k-mer 窗口插入字符分支 trie，值为 (基因组, 偏移)
//! - **片段检索**：种子查找允许至多一个替换，之后独立地带一次替换额度向右延伸
//! - **相关性估计**：把查询基因组切成定长分块，统计每条库基因组命中的分块比例
//!
//! ## 快速示例
//!
//! ```rust
//! use genome_matcher::genome::Genome;
//! use genome_matcher::index::GenomeMatcher;
//!
//! let mut matcher = GenomeMatcher::new(4).unwrap();
//! matcher.add_genome(Genome::new("seq1", "ACGTACGT").unwrap());
//! matcher.add_genome(Genome::new("seq2", "TTTTACGA").unwrap());
//!
//! let hits = matcher.find_genomes_with_this_dna("ACGT", 4, true).unwrap();
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].genome_name, "seq1");
//! assert_eq!(hits[0].position, 0);
//! ```
//!
//! ## 模块说明
//!
//! - [`genome`] — 命名 DNA 序列及其子串提取
//! - [`io`] — 严格格式的多记录基因组文件加载
//! - [`index`] — 通用 trie 与 k-mer 索引（`GenomeMatcher`）
//! - [`search`] — 种子延伸、片段检索、相关性估计及命令行驱动
//! - [`util`] — 碱基字母表校验与规范化
//! - [`error`] — 错误类型

pub mod error;
pub mod genome;
pub mod index;
pub mod io;
pub mod search;
pub mod util;
