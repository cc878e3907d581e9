//! 演示如何在 library 模式下使用 genome-matcher 进行片段检索与相关性估计。
//!
//! 运行方式：
//! ```bash
//! cargo run --example simple_search
//! ```

use std::io::Cursor;

use genome_matcher::genome::Genome;
use genome_matcher::index::GenomeMatcher;
use genome_matcher::io::load_genomes;

const LIBRARY: &str = "\
>Halobacterium jilantaiense
AAATATTAACTGACGGTACGTTGCCAGTATAGACAGCACGACTACCACAGCGTTTTGGAGAAGACGAAGGCCCTACCCAAC
AGGTTTAAGAACCTAATGTTCTAGATTGATTTCACCGTGACCTGTCACCAGCCCCAACACCCCTAAGCATTAGGCCCCAAA
>Halorubrum chaoviator
CTCTCTCTTCCCCGCGGGACGAACAGACAACCCGAGCTTCCGATAGACCACCATCAAAGGAAACTCTCAGGCACTCCCGG
GGCCCGCAAAGCGAGTTACCACCACCTACCTACGTACGTACGTACGTATTGACGCCCGTGACCCAGCCTCCAGCGGTCACC
>Halobacterium salinarum
AAATATTAACTGACGGTACGTTGCCAGTATAGACAGCACGACTACCACAGCGTTTTGGAGAAGACGAAGGCCCTACCCAAC
CTCTCTCTTCCCCGCGGGACGAACAGACAACCCGAGCTTCCGATAGACCACCATCAAAGGAAACTCTCAGGCACTCCCGG
";

fn main() {
    // 1. 加载基因组库
    let genomes = match load_genomes(Cursor::new(LIBRARY)) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("加载失败: {}", e);
            return;
        }
    };
    println!("基因组数: {}", genomes.len());

    // 2. 建立 k=10 的索引
    let Ok(mut matcher) = GenomeMatcher::new(10) else { return };
    matcher.add_genomes(genomes);
    println!("k-mer 条目: {}", matcher.kmer_count());

    // 3. 精确与容错片段检索
    let fragment = "GAAGACGAAGGCCCTACC";
    let variant = "GAAGACGTAGGCCCTACC"; // 带一个错配
    for (label, frag, exact) in [("精确", fragment, true), ("精确", variant, true), ("容错", variant, false)] {
        match matcher.find_genomes_with_this_dna(frag, 15, exact) {
            Ok(hits) if hits.is_empty() => println!("\n{}检索 '{}': 无匹配", label, frag),
            Ok(hits) => {
                println!("\n{}检索 '{}': {} 条基因组", label, frag, hits.len());
                for h in &hits {
                    println!("  {}: position={}, length={}", h.genome_name, h.position, h.length);
                }
            }
            Err(e) => println!("\n{}检索 '{}': {}", label, frag, e),
        }
    }

    // 4. 相关性估计
    let Ok(query) = Genome::new(
        "query",
        "AAATATTAACTGACGGTACGTTGCCAGTATAGACAGCACGACTACCACAGCGTTTTGGAGAAGACGAAGGCCCTACCCAAC",
    ) else {
        return;
    };
    match matcher.find_related_genomes(&query, 16, false, 10.0) {
        Ok(related) => {
            println!("\n相关基因组（分块长度 16，阈值 10%）:");
            for g in &related {
                println!("  {}: {:.2}%", g.genome_name, g.percent_match);
            }
        }
        Err(e) => println!("\n相关性估计失败: {}", e),
    }

    println!("\n完成！");
}
