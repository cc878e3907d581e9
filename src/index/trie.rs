/// 字符分支树节点：子边按插入顺序保存，值为在此处结束的键所携带的多重集。
#[derive(Debug)]
struct TrieNode<V> {
    children: Vec<(u8, TrieNode<V>)>,
    values: Vec<V>,
}

impl<V> TrieNode<V> {
    fn new() -> Self {
        Self { children: Vec::new(), values: Vec::new() }
    }

    #[inline]
    fn child(&self, ch: u8) -> Option<&TrieNode<V>> {
        self.children.iter().find(|(c, _)| *c == ch).map(|(_, n)| n)
    }
}

/// 键为字节串、值为多重集的 trie。
///
/// - 重复键不去重，`insert` 总是追加。
/// - `find` 支持精确匹配或至多一个替换的容错匹配。
/// - 节点构成严格的父→子所有权树，无共享、无回指。
#[derive(Debug)]
pub struct Trie<V> {
    root: TrieNode<V>,
    n_values: usize,
}

impl<V> Default for Trie<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Trie<V> {
    pub fn new() -> Self {
        Self { root: TrieNode::new(), n_values: 0 }
    }

    /// 已插入的值总数（含重复）。
    pub fn len(&self) -> usize {
        self.n_values
    }

    pub fn is_empty(&self) -> bool {
        self.n_values == 0
    }

    /// 丢弃根以下所有节点。
    pub fn reset(&mut self) {
        self.root = TrieNode::new();
        self.n_values = 0;
    }

    pub fn insert(&mut self, key: impl AsRef<[u8]>, value: V) {
        let mut cur = &mut self.root;
        for &ch in key.as_ref() {
            let pos = match cur.children.iter().position(|(c, _)| *c == ch) {
                Some(p) => p,
                None => {
                    cur.children.push((ch, TrieNode::new()));
                    cur.children.len() - 1
                }
            };
            cur = &mut cur.children[pos].1;
        }
        cur.values.push(value);
        self.n_values += 1;
    }
}

impl<V: Clone> Trie<V> {
    /// 查找与 `key` 匹配的全部值。
    ///
    /// `exact_only == true` 时不允许替换；否则允许整条路径上至多一个替换，
    /// 即返回精确匹配以及所有单点替换变体的并集。空键返回空结果。
    pub fn find(&self, key: impl AsRef<[u8]>, exact_only: bool) -> Vec<V> {
        let key = key.as_ref();
        let mut out = Vec::new();
        if key.is_empty() {
            return out;
        }
        let budget = if exact_only { 0 } else { 1 };
        collect(&self.root, key, budget, &mut out);
        out
    }
}

/// 深度优先收集；`budget` 为剩余可用的替换次数。
fn collect<V: Clone>(node: &TrieNode<V>, key: &[u8], budget: u8, out: &mut Vec<V>) {
    let Some((&ch, rest)) = key.split_first() else {
        out.extend(node.values.iter().cloned());
        return;
    };
    if budget == 0 {
        if let Some(child) = node.child(ch) {
            collect(child, rest, 0, out);
        }
        return;
    }
    for (c, child) in &node.children {
        if *c == ch {
            collect(child, rest, budget, out);
        } else {
            collect(child, rest, budget - 1, out);
        }
    }
}
