//! Lexicographic enumeration of fixed-size index subsets.

enum SubsetIterState {
    New,
    Subset(Vec<usize>),
    Stopped,
}

/// Iterates over all `size`-element subsets of `0..n` in lexicographic
/// order, e.g. `[0,1,2,3], [0,1,2,4], …`. Yields nothing if `n < size`.
pub struct SubsetIter {
    size: usize,
    n: usize,
    state: SubsetIterState,
}

impl SubsetIter {
    pub fn new(n: usize, size: usize) -> SubsetIter {
        SubsetIter {
            size,
            n,
            state: if size <= n { SubsetIterState::New } else { SubsetIterState::Stopped },
        }
    }
}

impl std::fmt::Debug for SubsetIter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let current = match self.state {
            SubsetIterState::Subset(ref v) => Some(v),
            _ => None,
        };
        f.debug_struct("SubsetIter")
            .field("size", &self.size)
            .field("n", &self.n)
            .field("current", &current)
            .finish()
    }
}

impl Iterator for SubsetIter {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.state {
            SubsetIterState::Stopped => return None,
            SubsetIterState::New => {
                let v: Vec<usize> = (0..self.size).collect();
                let first = v.clone();
                self.state = SubsetIterState::Subset(v);
                return Some(first);
            }
            SubsetIterState::Subset(ref mut v) => {
                let len = v.len();
                for i in (0..len).rev() {
                    if v[i] == self.n - len + i {
                        continue; // maxed out
                    }
                    v[i] += 1;
                    for j in i + 1..len {
                        v[j] = v[j - 1] + 1;
                    }
                    return Some(v.clone());
                }
            }
        }
        // only reached on the transition from Subset(v) to Stopped
        self.state = SubsetIterState::Stopped;
        None
    }
}

impl std::iter::FusedIterator for SubsetIter {}

/// `n` choose `k`, saturating at `u64::MAX`.
pub fn binomial(n: usize, k: usize) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k) as u64;
    let n = n as u64;
    let mut acc: u64 = 1;
    for i in 0..k {
        // acc * (n - i) is divisible by (i + 1)
        acc = match acc.checked_mul(n - i) {
            Some(v) => v / (i + 1),
            None => return u64::MAX,
        };
    }
    acc
}
