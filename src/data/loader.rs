use std::fs;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord};

use super::error::ParseError;
use super::model::{Datasets, Record};

/// Minimum number of fields a benchmark row must carry.
pub const MIN_FIELDS: usize = 6;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Parse every benchmark file in order into the four operation datasets.
///
/// Rows are space separated with at least [`MIN_FIELDS`] integer fields,
/// addressed by index only. The benchmark writes
/// `size_a t_add_a size_b t_add_b t_union t_intersection t_difference`, but
/// the fields are read the way the plotting script these files were made for
/// reads them, which does not follow those names:
/// * `n`            – fields 0 and 2 concatenated as text, halved
/// * add            – fields 1 and 3 concatenated as text, halved
/// * union          – field 3
/// * intersection   – field 4
/// * difference     – same value as intersection
///
/// The algorithm label is the file name up to its first `.`.
pub fn parse_data<P: AsRef<Path>>(paths: &[P]) -> Result<Datasets, ParseError> {
    let mut datasets = Datasets::default();
    for path in paths {
        let path = path.as_ref();
        let before = datasets.add.len();
        parse_file(path, &mut datasets)?;
        log::debug!("{}: {} rows", path.display(), datasets.add.len() - before);
    }
    Ok(datasets)
}

/// Algorithm label for a benchmark file: its file name up to the first `.`.
pub fn algorithm_label(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    name.split('.').next().unwrap_or_default().to_string()
}

// ---------------------------------------------------------------------------
// Row handling
// ---------------------------------------------------------------------------

fn parse_file(path: &Path, datasets: &mut Datasets) -> Result<(), ParseError> {
    let bytes = fs::read(path).map_err(|source| ParseError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    // The reader drops empty lines, but an empty line is a row without fields.
    if let Some(line) = first_empty_line(&bytes) {
        return Err(ParseError::TooFewFields {
            path: path.to_path_buf(),
            line,
            expected: MIN_FIELDS,
            found: 0,
        });
    }
    let mut reader = ReaderBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes.as_slice());

    let algorithm = algorithm_label(path);

    for result in reader.records() {
        let row = result.map_err(|source| ParseError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let fields = RowFields::new(path, &row)?;

        let n = fields.concat_halved(0, 2)?;
        let t_add = fields.concat_halved(1, 3)?;
        let t_union = fields.integer(3)?;
        let t_intersection = fields.integer(4)?;
        let t_difference = t_intersection;

        let push = |dataset: &mut Vec<Record>, t: i128| {
            dataset.push(Record {
                n,
                t,
                algorithm: algorithm.clone(),
            });
        };
        push(&mut datasets.add.records, t_add);
        push(&mut datasets.union.records, t_union);
        push(&mut datasets.intersection.records, t_intersection);
        push(&mut datasets.difference.records, t_difference);
    }

    Ok(())
}

/// 1-based number of the first empty line, if any. A single final line
/// terminator does not open another line.
fn first_empty_line(bytes: &[u8]) -> Option<u64> {
    if bytes.is_empty() {
        return None;
    }
    let body = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    body.split(|&b| b == b'\n')
        .position(|line| line.strip_suffix(b"\r").unwrap_or(line).is_empty())
        .map(|idx| idx as u64 + 1)
}

/// A validated row: at least [`MIN_FIELDS`] fields, with its origin kept for
/// error messages.
struct RowFields<'a> {
    path: &'a Path,
    line: u64,
    row: &'a StringRecord,
}

impl<'a> RowFields<'a> {
    fn new(path: &'a Path, row: &'a StringRecord) -> Result<Self, ParseError> {
        let line = row.position().map_or(0, |p| p.line());
        if row.len() < MIN_FIELDS {
            return Err(ParseError::TooFewFields {
                path: path.to_path_buf(),
                line,
                expected: MIN_FIELDS,
                found: row.len(),
            });
        }
        Ok(RowFields { path, line, row })
    }

    fn field(&self, idx: usize) -> &'a str {
        // Bounds are guaranteed by `new`.
        &self.row[idx]
    }

    fn integer(&self, idx: usize) -> Result<i128, ParseError> {
        self.parse(self.field(idx))
    }

    /// Concatenate two fields as text, parse, and floor-divide by two.
    fn concat_halved(&self, first: usize, second: usize) -> Result<i128, ParseError> {
        let joined = format!("{}{}", self.field(first), self.field(second));
        Ok(self.parse(&joined)?.div_euclid(2))
    }

    fn parse(&self, text: &str) -> Result<i128, ParseError> {
        text.trim().parse::<i128>().map_err(|_| ParseError::NotNumeric {
            path: self.path.to_path_buf(),
            line: self.line,
            value: text.to_string(),
        })
    }
}

/// Paths read when none are given on the command line.
pub fn default_paths() -> Vec<PathBuf> {
    ["array.data", "list.data", "list_simple.data"]
        .iter()
        .map(PathBuf::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Operation;

    /// Per-test scratch directory under the system temp dir.
    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("setplot-{}-{name}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn write(dir: &Path, file: &str, contents: &str) -> PathBuf {
        let path = dir.join(file);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn fields_are_concatenated_then_halved() {
        let dir = scratch_dir("concat");
        let path = write(&dir, "array.data", "10 20 30 40 50 60\n");

        let sets = parse_data(&[path]).unwrap();

        let expect = |op: Operation, t: i128| {
            assert_eq!(
                sets.get(op).records,
                vec![Record {
                    n: 515,
                    t,
                    algorithm: "array".to_string(),
                }],
                "{op}"
            );
        };
        expect(Operation::Add, 1020);
        expect(Operation::Union, 40);
        expect(Operation::Intersection, 50);
        expect(Operation::Difference, 50);
    }

    #[test]
    fn seventh_field_is_ignored() {
        let dir = scratch_dir("seven");
        let path = write(&dir, "list.data", "16 3 16 2 5 4 9\n");
        let other = scratch_dir("seven-other");
        let other = write(&other, "list.data", "16 3 16 2 5 4 12345\n");

        let sets = parse_data(&[path]).unwrap();
        assert_eq!(sets.add.records[0].n, 1616 / 2);
        assert_eq!(sets.add.records[0].t, 32 / 2);
        assert_eq!(sets.union.records[0].t, 2);
        assert_eq!(sets.intersection.records[0].t, 5);
        assert_eq!(sets.difference.records[0].t, 5);
        assert_eq!(sets, parse_data(&[other]).unwrap());
    }

    #[test]
    fn long_timings_are_concatenated_without_overflow() {
        let dir = scratch_dir("wide");
        let path = write(&dir, "array.data", "16 1234567890 16 1234567890 5 6\n");

        let sets = parse_data(&[path]).unwrap();
        assert_eq!(sets.add.records[0].t, 6_172_839_450_617_283_945);
        assert_eq!(sets.add.records[0].n, 808);
    }

    #[test]
    fn every_row_lands_in_every_dataset() {
        let dir = scratch_dir("counts");
        let a = write(&dir, "array.data", "1 2 3 4 5 6\n7 8 9 10 11 12\n");
        let b = write(&dir, "list.data", "1 2 3 4 5 6\n");

        let sets = parse_data(&[a, b]).unwrap();
        for ds in sets.all() {
            assert_eq!(ds.len(), 3, "{}", ds.operation);
        }
        for i in 0..3 {
            let n = sets.add.records[i].n;
            for ds in sets.all() {
                assert_eq!(ds.records[i].n, n);
            }
        }
    }

    #[test]
    fn parsing_twice_gives_identical_datasets() {
        let dir = scratch_dir("idempotent");
        let path = write(&dir, "array.data", "16 5 16 6 7 8 9\n32 1 32 1 1 1 1\n");

        assert_eq!(parse_data(&[&path]).unwrap(), parse_data(&[&path]).unwrap());
    }

    #[test]
    fn label_comes_from_file_name_only() {
        let dir = scratch_dir("labels");
        let row = "10 20 30 40 50 60\n";
        let a = write(&dir, "array.data", row);
        let b = write(&dir, "list_simple.sorted.data", row);

        let sets = parse_data(&[a, b]).unwrap();
        let (ra, rb) = (&sets.union.records[0], &sets.union.records[1]);
        assert_eq!(ra.algorithm, "array");
        assert_eq!(rb.algorithm, "list_simple");
        assert_eq!((ra.n, ra.t), (rb.n, rb.t));
    }

    #[test]
    fn algorithm_label_ignores_directories() {
        assert_eq!(algorithm_label(Path::new("./data/list.data")), "list");
        assert_eq!(algorithm_label(Path::new("noext")), "noext");
    }

    #[test]
    fn short_row_is_fatal() {
        let dir = scratch_dir("short");
        let path = write(&dir, "array.data", "1 2 3 4 5 6\n1 2 3 4 5\n");

        match parse_data(&[path]) {
            Err(ParseError::TooFewFields { line, found, .. }) => {
                assert_eq!(line, 2);
                assert_eq!(found, 5);
            }
            other => panic!("expected TooFewFields, got {other:?}"),
        }
    }

    #[test]
    fn non_numeric_field_is_fatal() {
        let dir = scratch_dir("nan");
        let path = write(&dir, "array.data", "1 2 3 x 5 6\n");

        match parse_data(&[path]) {
            Err(ParseError::NotNumeric { value, .. }) => assert_eq!(value, "2x"),
            other => panic!("expected NotNumeric, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = scratch_dir("missing");
        let good = write(&dir, "array.data", "1 2 3 4 5 6\n");

        let err = parse_data(&[good, dir.join("list.data")]).unwrap_err();
        assert!(err.is_not_found(), "{err}");
    }

    #[test]
    fn negative_concatenation_floors() {
        let dir = scratch_dir("negative");
        let path = write(&dir, "array.data", "-5 2 3 4 5 6\n");

        let sets = parse_data(&[path]).unwrap();
        assert_eq!(sets.add.records[0].n, -27);
    }

    #[test]
    fn blank_line_is_fatal() {
        let dir = scratch_dir("blank");
        let path = write(&dir, "array.data", "1 2 3 4 5 6\n\n1 2 3 4 5 6\n");

        match parse_data(&[path]) {
            Err(ParseError::TooFewFields { line, found, .. }) => {
                assert_eq!(line, 2);
                assert_eq!(found, 0);
            }
            other => panic!("expected TooFewFields, got {other:?}"),
        }
    }

    #[test]
    fn trailing_blank_line_is_fatal() {
        let dir = scratch_dir("trailing");
        let path = write(&dir, "array.data", "1 2 3 4 5 6\n\n");

        match parse_data(&[path]) {
            Err(ParseError::TooFewFields { line, found, .. }) => {
                assert_eq!(line, 2);
                assert_eq!(found, 0);
            }
            other => panic!("expected TooFewFields, got {other:?}"),
        }
    }

    #[test]
    fn crlf_line_ends_are_accepted() {
        let dir = scratch_dir("crlf");
        let path = write(&dir, "array.data", "1 2 3 4 5 6\r\n7 8 9 10 11 12\r\n");

        assert_eq!(parse_data(&[path]).unwrap().add.len(), 2);
    }

    #[test]
    fn empty_file_has_no_rows() {
        let dir = scratch_dir("empty");
        let path = write(&dir, "array.data", "");

        assert!(parse_data(&[path]).unwrap().add.is_empty());
    }

    #[test]
    fn final_newline_is_not_a_row() {
        let dir = scratch_dir("final");
        let with = write(&dir, "array.data", "1 2 3 4 5 6\n");
        let without = write(&dir, "list.data", "1 2 3 4 5 6");

        assert_eq!(parse_data(&[with, without]).unwrap().add.len(), 2);
    }
}
