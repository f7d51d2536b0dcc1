/// Lookup of `floor(log2(k))` for `1 <= k <= n`.
#[derive(Debug, Clone)]
pub struct LogTable {
    /// `log[k] = floor(log2(k))`. `log[0]` is unused and left at 0.
    log: Vec<u32>,
}

impl LogTable {
    pub fn new(n: usize) -> Self {
        let mut log = vec![0; n + 1];
        for k in 2..=n {
            log[k] = log[k / 2] + 1;
        }
        Self { log }
    }

    /// The largest argument this table answers for.
    pub fn len(&self) -> usize {
        self.log.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `floor(log2(k))`, for `1 <= k <= self.len()`.
    #[inline]
    pub fn floor_log2(&self, k: usize) -> usize {
        debug_assert!(k >= 1, "log2 of 0 is undefined");
        self.log[k] as usize
    }
}
