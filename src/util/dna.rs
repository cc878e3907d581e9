/// 基因组允许的碱基符号（大写规范形式）。
pub const ALPHABET: [u8; 5] = [b'A', b'C', b'G', b'T', b'N'];

#[inline]
pub fn is_base(b: u8) -> bool {
    matches!(b.to_ascii_uppercase(), b'A' | b'C' | b'G' | b'T' | b'N')
}

/// 返回第一个非法碱基的位置（0-based）与该字节；全部合法时返回 None。
pub fn first_invalid(seq: &[u8]) -> Option<(usize, u8)> {
    seq.iter().enumerate().find(|(_, &b)| !is_base(b)).map(|(i, &b)| (i, b))
}

/// 大写规范化。调用方需先用 [`first_invalid`] 校验。
pub fn normalize_seq(seq: &[u8]) -> Vec<u8> {
    seq.iter().map(u8::to_ascii_uppercase).collect()
}
