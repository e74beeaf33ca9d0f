use std::collections::{HashMap, HashSet};

pub type Member = Vec<u8>;
pub type Members = HashSet<Member>;

/// How several keyed sets are folded into one.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Combine {
    Inter,
    Union,
    Diff,
}

impl Combine {
    pub fn name(self) -> &'static str {
        match self {
            Combine::Inter => "SINTER",
            Combine::Union => "SUNION",
            Combine::Diff => "SDIFF",
        }
    }
}

pub struct DataModel {}

impl DataModel {
    /// Fold the sets stored under `keys` left to right. Absent keys count as
    /// empty sets, so an intersection touching one is empty and a difference
    /// ignores it.
    pub fn combine(data: &HashMap<Member, Members>, op: Combine, keys: &[&[u8]]) -> Members {
        let empty = Members::new();
        let mut sets = keys.iter().map(|k| data.get(*k).unwrap_or(&empty));

        let Some(first) = sets.next() else {
            return Members::new();
        };
        let mut acc = first.clone();

        for set in sets {
            match op {
                Combine::Inter => {
                    acc.retain(|m| set.contains(m));
                    if acc.is_empty() {
                        break;
                    }
                }
                Combine::Union => acc.extend(set.iter().cloned()),
                Combine::Diff => acc.retain(|m| !set.contains(m)),
            }
        }

        acc
    }
}
