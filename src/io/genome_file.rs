use std::io::BufRead;
use std::path::Path;

use crate::error::LoadError;
use crate::genome::Genome;
use crate::util::dna;

/// 严格模式的多记录基因组读取器。
///
/// 格式：`>name` 标记行后跟一行或多行 `ACGTN`（大小写不敏感）。
/// 与普通 FASTA 读取不同，空行、非法字符、连续标记、末尾孤立标记都视为错误。
pub struct GenomeReader<R: BufRead> {
    reader: R,
    buf: String,
    line_no: usize,
    started: bool,
    done: bool,
    /// 已读到但尚未消费的下一条记录头：(行号, 名称)
    peek_header: Option<(usize, String)>,
}

impl<R: BufRead> GenomeReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: String::new(),
            line_no: 0,
            started: false,
            done: false,
            peek_header: None,
        }
    }

    /// 读取一行，去掉行尾 `\n` / `\r\n`；EOF 时返回 None。
    fn read_line(&mut self) -> Result<Option<String>, LoadError> {
        self.buf.clear();
        let n = self.reader.read_line(&mut self.buf)?;
        if n == 0 {
            return Ok(None);
        }
        self.line_no += 1;
        let line = self.buf.strip_suffix('\n').unwrap_or(self.buf.as_str());
        let line = line.strip_suffix('\r').unwrap_or(line);
        Ok(Some(line.to_string()))
    }

    pub fn next_record(&mut self) -> Result<Option<Genome>, LoadError> {
        if self.done {
            return Ok(None);
        }

        let (header_line, name) = if !self.started {
            self.started = true;
            let Some(first) = self.read_line()? else {
                self.done = true;
                return Err(LoadError::Empty);
            };
            if first.is_empty() {
                return Err(LoadError::EmptyLine { line: self.line_no });
            }
            match first.strip_prefix('>') {
                Some(nm) => (self.line_no, nm.to_string()),
                None => return Err(LoadError::MissingHeader { line: self.line_no }),
            }
        } else {
            match self.peek_header.take() {
                Some(h) => h,
                None => {
                    self.done = true;
                    return Ok(None);
                }
            }
        };

        let mut seq: Vec<u8> = Vec::new();
        loop {
            let Some(line) = self.read_line()? else {
                self.done = true;
                break;
            };
            if line.is_empty() {
                return Err(LoadError::EmptyLine { line: self.line_no });
            }
            if let Some(next) = line.strip_prefix('>') {
                self.peek_header = Some((self.line_no, next.to_string()));
                break;
            }
            if name.is_empty() {
                return Err(LoadError::EmptyName { line: self.line_no });
            }
            if let Some((i, b)) = dna::first_invalid(line.as_bytes()) {
                return Err(LoadError::InvalidBase {
                    line: self.line_no,
                    column: i + 1,
                    base: b as char,
                });
            }
            seq.extend_from_slice(line.as_bytes());
        }

        if seq.is_empty() {
            return Err(LoadError::EmptyRecord { line: header_line, name });
        }
        Ok(Some(Genome::new(name, seq)?))
    }
}

/// 读取全部记录。任一记录非法则整体失败，不返回部分结果。
pub fn load_genomes<R: BufRead>(reader: R) -> Result<Vec<Genome>, LoadError> {
    let mut r = GenomeReader::new(reader);
    let mut genomes = Vec::new();
    while let Some(g) = r.next_record()? {
        genomes.push(g);
    }
    Ok(genomes)
}

pub fn load_genomes_from_path(path: impl AsRef<Path>) -> Result<Vec<Genome>, LoadError> {
    let fh = std::fs::File::open(path)?;
    load_genomes(std::io::BufReader::new(fh))
}
