//! 种子之后的右向延伸。
//!
//! 两种策略各自独立：精确延伸在第一个错配处停止；容错延伸自带一次替换额度，
//! 与 trie 查找阶段是否已用掉替换无关。两者在基因组末尾都会停止。

/// 精确延伸：返回从 `offset` 起的总匹配长度（含 `seed_len` 长的种子）。
pub fn extend_exact(genome: &[u8], offset: usize, fragment: &[u8], seed_len: usize) -> usize {
    let tail = fragment.get(seed_len..).unwrap_or(&[]);
    let ref_tail = genome.get(offset + seed_len..).unwrap_or(&[]);
    let common = tail.iter().zip(ref_tail).take_while(|(a, b)| a == b).count();
    seed_len + common
}

/// 容错延伸：允许尾部出现一个替换，遇到第二个错配前停止。
/// 被容忍的那个错配位置计入长度。
pub fn extend_one_mismatch(genome: &[u8], offset: usize, fragment: &[u8], seed_len: usize) -> usize {
    let mut budget = 1u8;
    let mut len = seed_len;
    while len < fragment.len() {
        let Some(&b) = genome.get(offset + len) else { break };
        if b != fragment[len] {
            if budget == 0 {
                break;
            }
            budget -= 1;
        }
        len += 1;
    }
    len
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_stops_at_first_mismatch() {
        let g = b"ACGTACGTTT";
        assert_eq!(extend_exact(g, 0, b"ACGTACGA", 4), 7);
        assert_eq!(extend_exact(g, 0, b"ACGTACGTTT", 4), 10);
        assert_eq!(extend_exact(g, 0, b"ACGT", 4), 4);
        assert_eq!(extend_exact(g, 0, b"ACGTC", 4), 4);
    }

    #[test]
    fn exact_stops_at_genome_end() {
        let g = b"AAACGT";
        assert_eq!(extend_exact(g, 2, b"ACGTGGGG", 4), 4);
        assert_eq!(extend_exact(g, 0, b"AAACGTAA", 4), 6);
    }

    #[test]
    fn one_mismatch_counts_tolerated_position() {
        let g = b"ACGTACGTTT";
        // 第 8 位 A/T 错配被容忍，之后全部匹配
        assert_eq!(extend_one_mismatch(g, 0, b"ACGTACGATT", 4), 10);
        // 第二个错配处停止
        assert_eq!(extend_one_mismatch(g, 0, b"ACGTACGAAT", 4), 8);
        assert_eq!(extend_one_mismatch(g, 0, b"ACGTCCGATT", 4), 7);
    }

    #[test]
    fn one_mismatch_ignores_seed_mismatches() {
        // 种子内部的差异不占用延伸额度
        let g = b"TCGTAAAA";
        assert_eq!(extend_one_mismatch(g, 0, b"ACGTACAA", 4), 8);
        assert_eq!(extend_exact(g, 0, b"ACGTACAA", 4), 5);
    }

    #[test]
    fn one_mismatch_stops_at_genome_end() {
        assert_eq!(extend_one_mismatch(b"ACGTA", 0, b"ACGTTTTT", 4), 5);
        assert_eq!(extend_one_mismatch(b"ACGT", 0, b"ACGTTTTT", 4), 4);
    }

    #[test]
    fn one_mismatch_never_shorter_than_exact() {
        let g = b"ACGTACGTACGTAGGT";
        for frag in [&b"ACGTACGTTCGTAGGT"[..], b"ACGTTTTT", b"ACGTACGTACGTAGGT", b"ACGT"] {
            assert!(extend_one_mismatch(g, 0, frag, 4) >= extend_exact(g, 0, frag, 4));
        }
    }
}
