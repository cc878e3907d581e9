use crate::error::GenomeError;
use crate::util::dna;

/// 一条命名的 DNA 序列。构造后不可变，碱基已统一为大写 `A/C/G/T/N`。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Genome {
    name: String,
    seq: String,
}

impl Genome {
    pub fn new(name: impl Into<String>, sequence: impl AsRef<[u8]>) -> Result<Self, GenomeError> {
        let name = name.into();
        let raw = sequence.as_ref();
        if raw.is_empty() {
            return Err(GenomeError::EmptySequence { name });
        }
        if let Some((position, b)) = dna::first_invalid(raw) {
            return Err(GenomeError::InvalidBase { name, position, base: b as char });
        }
        // 只含 ASCII 碱基，转换不会失败
        let seq = String::from_utf8_lossy(&dna::normalize_seq(raw)).into_owned();
        Ok(Self { name, seq })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.seq.len()
    }

    /// 构造保证非空，始终返回 false。
    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.seq
    }

    /// 取出 `[position, position + length)` 子串。
    /// `length == 0`、起点越界或区间超出序列末尾时返回 None。
    pub fn extract(&self, position: usize, length: usize) -> Option<&str> {
        if length == 0 || position >= self.seq.len() {
            return None;
        }
        let end = position.checked_add(length)?;
        if end > self.seq.len() {
            return None;
        }
        Some(&self.seq[position..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_normalizes_case() {
        let g = Genome::new("chr1", "acgTn").unwrap();
        assert_eq!(g.name(), "chr1");
        assert_eq!(g.as_str(), "ACGTN");
        assert_eq!(g.len(), 5);
        assert!(!g.is_empty());
    }

    #[test]
    fn new_rejects_bad_input() {
        assert_eq!(
            Genome::new("e", "").unwrap_err(),
            GenomeError::EmptySequence { name: "e".to_string() }
        );
        assert_eq!(
            Genome::new("x", "ACGU").unwrap_err(),
            GenomeError::InvalidBase { name: "x".to_string(), position: 3, base: 'U' }
        );
    }

    #[test]
    fn extract_bounds() {
        let g = Genome::new("g", "ACGTACGT").unwrap();
        assert_eq!(g.extract(0, 4), Some("ACGT"));
        assert_eq!(g.extract(4, 4), Some("ACGT"));
        assert_eq!(g.extract(7, 1), Some("T"));
        assert_eq!(g.extract(0, 0), None);
        assert_eq!(g.extract(8, 1), None);
        assert_eq!(g.extract(5, 4), None);
        assert_eq!(g.extract(1, usize::MAX), None);
    }
}
