use std::cmp::Ordering;
use std::collections::LinkedList;

// ---------------------------------------------------------------------------
// Common interface
// ---------------------------------------------------------------------------

/// An integer set whose operations are timed by the generator.
pub trait IntSet: Sized {
    /// File stem the measurements are written under.
    const NAME: &'static str;

    fn new() -> Self;
    fn add(&mut self, value: i32);
    fn contains(&self, value: i32) -> bool;
    fn len(&self) -> usize;
    fn iter(&self) -> Box<dyn Iterator<Item = i32> + '_>;

    fn union(&self, other: &Self) -> Self;
    fn intersection(&self, other: &Self) -> Self;
    fn difference(&self, other: &Self) -> Self;
}

#[derive(Clone, Copy)]
enum Merge {
    Union,
    Intersection,
    Difference,
}

/// Single pass over two ascending sequences.
fn merge_sorted<A, B>(a: A, b: B, merge: Merge) -> Vec<i32>
where
    A: Iterator<Item = i32>,
    B: Iterator<Item = i32>,
{
    let (mut a, mut b) = (a.peekable(), b.peekable());
    let mut out = Vec::new();
    loop {
        let ord = match (a.peek(), b.peek()) {
            (Some(x), Some(y)) => x.cmp(y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => break,
        };
        match ord {
            Ordering::Less => {
                let x = a.next().unwrap_or_default();
                if matches!(merge, Merge::Union | Merge::Difference) {
                    out.push(x);
                }
            }
            Ordering::Greater => {
                let y = b.next().unwrap_or_default();
                if matches!(merge, Merge::Union) {
                    out.push(y);
                }
            }
            Ordering::Equal => {
                let x = a.next().unwrap_or_default();
                b.next();
                if matches!(merge, Merge::Union | Merge::Intersection) {
                    out.push(x);
                }
            }
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Sorted array
// ---------------------------------------------------------------------------

/// Sorted, growable array; membership by binary search.
#[derive(Debug, Default)]
pub struct ArraySet {
    items: Vec<i32>,
}

impl IntSet for ArraySet {
    const NAME: &'static str = "array";

    fn new() -> Self {
        Self::default()
    }

    fn add(&mut self, value: i32) {
        if let Err(pos) = self.items.binary_search(&value) {
            self.items.insert(pos, value);
        }
    }

    fn contains(&self, value: i32) -> bool {
        self.items.binary_search(&value).is_ok()
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn iter(&self) -> Box<dyn Iterator<Item = i32> + '_> {
        Box::new(self.items.iter().copied())
    }

    fn union(&self, other: &Self) -> Self {
        Self {
            items: merge_sorted(self.iter(), other.iter(), Merge::Union),
        }
    }

    fn intersection(&self, other: &Self) -> Self {
        Self {
            items: merge_sorted(self.iter(), other.iter(), Merge::Intersection),
        }
    }

    fn difference(&self, other: &Self) -> Self {
        Self {
            items: merge_sorted(self.iter(), other.iter(), Merge::Difference),
        }
    }
}

// ---------------------------------------------------------------------------
// Sorted linked list
// ---------------------------------------------------------------------------

/// Linked list kept in ascending order; set operations merge in one pass.
#[derive(Debug, Default)]
pub struct ListSet {
    items: LinkedList<i32>,
}

impl ListSet {
    fn from_sorted(items: Vec<i32>) -> Self {
        Self {
            items: items.into_iter().collect(),
        }
    }
}

impl IntSet for ListSet {
    const NAME: &'static str = "list";

    fn new() -> Self {
        Self::default()
    }

    fn add(&mut self, value: i32) {
        let pos = self.items.iter().take_while(|&&x| x < value).count();
        if self.items.iter().nth(pos) == Some(&value) {
            return;
        }
        let mut tail = self.items.split_off(pos);
        self.items.push_back(value);
        self.items.append(&mut tail);
    }

    fn contains(&self, value: i32) -> bool {
        self.items
            .iter()
            .take_while(|&&x| x <= value)
            .any(|&x| x == value)
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn iter(&self) -> Box<dyn Iterator<Item = i32> + '_> {
        Box::new(self.items.iter().copied())
    }

    fn union(&self, other: &Self) -> Self {
        Self::from_sorted(merge_sorted(self.iter(), other.iter(), Merge::Union))
    }

    fn intersection(&self, other: &Self) -> Self {
        Self::from_sorted(merge_sorted(self.iter(), other.iter(), Merge::Intersection))
    }

    fn difference(&self, other: &Self) -> Self {
        Self::from_sorted(merge_sorted(self.iter(), other.iter(), Merge::Difference))
    }
}

// ---------------------------------------------------------------------------
// Unsorted linked list
// ---------------------------------------------------------------------------

/// Unordered linked list; every operation falls back to linear membership
/// checks.
#[derive(Debug, Default)]
pub struct SimpleListSet {
    items: LinkedList<i32>,
}

impl SimpleListSet {
    fn filtered(&self, keep: impl Fn(i32) -> bool) -> Self {
        Self {
            items: self.items.iter().copied().filter(|&x| keep(x)).collect(),
        }
    }
}

impl IntSet for SimpleListSet {
    const NAME: &'static str = "list_simple";

    fn new() -> Self {
        Self::default()
    }

    fn add(&mut self, value: i32) {
        if !self.contains(value) {
            self.items.push_front(value);
        }
    }

    fn contains(&self, value: i32) -> bool {
        self.items.contains(&value)
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn iter(&self) -> Box<dyn Iterator<Item = i32> + '_> {
        Box::new(self.items.iter().copied())
    }

    fn union(&self, other: &Self) -> Self {
        let mut out = Self {
            items: self.items.clone(),
        };
        for x in other.iter() {
            out.add(x);
        }
        out
    }

    fn intersection(&self, other: &Self) -> Self {
        self.filtered(|x| other.contains(x))
    }

    fn difference(&self, other: &Self) -> Self {
        self.filtered(|x| !other.contains(x))
    }
}
