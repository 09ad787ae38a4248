//! Append-only record of accepted submissions.

use crate::geom2::DiskPoint;

/// One accepted submission: the word as typed and where it landed.
#[derive(Clone, Debug, PartialEq)]
pub struct HistoryEntry {
    pub word: String,
    pub point: DiskPoint,
}

/// Ordered game history. Duplicates keep their own slot; nothing is ever removed.
#[derive(Clone, Debug, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn append(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// Points in submission order.
    pub fn points(&self) -> Vec<DiskPoint> {
        self.entries.iter().map(|e| e.point).collect()
    }

    #[inline]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn keeps_order_and_duplicates() {
        let mut h = History::new();
        for (w, p) in [
            ("cat", vector![0.5, 0.6]),
            ("dog", vector![0.0, 0.0]),
            ("cat", vector![0.5, 0.6]),
        ] {
            h.append(HistoryEntry {
                word: w.into(),
                point: p,
            });
        }
        assert_eq!(h.len(), 3);
        assert_eq!(
            h.points(),
            vec![vector![0.5, 0.6], vector![0.0, 0.0], vector![0.5, 0.6]]
        );
        let words: Vec<_> = h.entries().iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, ["cat", "dog", "cat"]);
    }
}
