use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

// ---------------------------------------------------------------------------
// Operation – which set operation a dataset times
// ---------------------------------------------------------------------------

/// The four timed set operations, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Operation {
    Add,
    Union,
    Intersection,
    Difference,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Union,
        Operation::Intersection,
        Operation::Difference,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Union => "union",
            Operation::Intersection => "intersection",
            Operation::Difference => "difference",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Record – one row of a dataset
// ---------------------------------------------------------------------------

/// A single measurement: input size, elapsed microseconds, implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub n: i128,
    /// Elapsed time in microseconds.
    pub t: i128,
    pub algorithm: String,
}

// ---------------------------------------------------------------------------
// Dataset – all records for one operation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    pub operation: Operation,
    pub records: Vec<Record>,
}

impl Dataset {
    /// Column names of the tabular view.
    pub const COLUMNS: [&'static str; 3] = ["n", "t(usec)", "algorithm"];

    pub fn new(operation: Operation) -> Self {
        Dataset {
            operation,
            records: Vec::new(),
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sorted set of algorithm labels present in this dataset.
    pub fn algorithms(&self) -> BTreeSet<String> {
        self.records.iter().map(|r| r.algorithm.clone()).collect()
    }

    /// Plot points `[n, t]` for one algorithm, sorted by `n`.
    ///
    /// Repeated measurements of the same `n` collapse into their mean so the
    /// curve stays a function of `n`.
    pub fn series(&self, algorithm: &str) -> Vec<[f64; 2]> {
        let mut by_n: BTreeMap<i128, (f64, usize)> = BTreeMap::new();
        for r in self.records.iter().filter(|r| r.algorithm == algorithm) {
            let entry = by_n.entry(r.n).or_insert((0.0, 0));
            entry.0 += r.t as f64;
            entry.1 += 1;
        }
        by_n.into_iter()
            .map(|(n, (sum, count))| [n as f64, sum / count as f64])
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Datasets – the complete parse result
// ---------------------------------------------------------------------------

/// The four datasets produced by one parse. Every input line contributes
/// exactly one record to each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Datasets {
    pub add: Dataset,
    pub union: Dataset,
    pub intersection: Dataset,
    pub difference: Dataset,
}

impl Default for Datasets {
    fn default() -> Self {
        Self {
            add: Dataset::new(Operation::Add),
            union: Dataset::new(Operation::Union),
            intersection: Dataset::new(Operation::Intersection),
            difference: Dataset::new(Operation::Difference),
        }
    }
}

impl Datasets {
    pub fn get(&self, operation: Operation) -> &Dataset {
        match operation {
            Operation::Add => &self.add,
            Operation::Union => &self.union,
            Operation::Intersection => &self.intersection,
            Operation::Difference => &self.difference,
        }
    }

    /// All four datasets in [`Operation::ALL`] order.
    pub fn all(&self) -> [&Dataset; 4] {
        Operation::ALL.map(|op| self.get(op))
    }

    /// Algorithms present in any dataset.
    pub fn algorithms(&self) -> BTreeSet<String> {
        self.all().iter().flat_map(|ds| ds.algorithms()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(n: i128, t: i128, algorithm: &str) -> Record {
        Record {
            n,
            t,
            algorithm: algorithm.to_string(),
        }
    }

    #[test]
    fn series_is_sorted_and_averages_repeated_sizes() {
        let mut ds = Dataset::new(Operation::Union);
        ds.records = vec![
            record(64, 10, "array"),
            record(16, 4, "array"),
            record(64, 20, "array"),
            record(16, 99, "list"),
        ];

        assert_eq!(ds.series("array"), vec![[16.0, 4.0], [64.0, 15.0]]);
        assert_eq!(ds.series("list"), vec![[16.0, 99.0]]);
        assert!(ds.series("missing").is_empty());
    }

    #[test]
    fn algorithms_are_unique_and_sorted() {
        let mut sets = Datasets::default();
        sets.add.records = vec![record(1, 1, "list"), record(1, 1, "array")];
        sets.difference.records = vec![record(1, 1, "list_simple")];

        let algs: Vec<String> = sets.algorithms().into_iter().collect();
        assert_eq!(algs, ["array", "list", "list_simple"]);
        assert_eq!(sets.add.algorithms().len(), 2);
    }

    #[test]
    fn all_follows_operation_order() {
        let sets = Datasets::default();
        let ops: Vec<Operation> = sets.all().iter().map(|ds| ds.operation).collect();
        assert_eq!(ops, Operation::ALL);
    }
}
