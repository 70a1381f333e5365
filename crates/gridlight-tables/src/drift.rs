use std::collections::BTreeMap;
use std::fmt;

use gridlight_enums::TableKind;

use crate::tables::{ConstantTables, Table};

/// One difference between a loaded snapshot and the compiled tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Drift {
    MissingTable {
        table: TableKind,
    },
    UnknownTable {
        name: String,
    },
    MissingMember {
        table: TableKind,
        name: &'static str,
        expected: u8,
    },
    UnknownMember {
        table: TableKind,
        name: String,
        value: i64,
    },
    ValueMismatch {
        table: TableKind,
        name: &'static str,
        expected: u8,
        found: i64,
    },
    /// Two or more names share a value inside one loaded table.
    DuplicateValue {
        table: TableKind,
        value: i64,
        names: Vec<String>,
    },
}

impl Drift {
    /// Table the drift belongs to; `None` for sections with no known table.
    pub fn table(&self) -> Option<TableKind> {
        match self {
            Drift::UnknownTable { .. } => None,
            Drift::MissingTable { table }
            | Drift::MissingMember { table, .. }
            | Drift::UnknownMember { table, .. }
            | Drift::ValueMismatch { table, .. }
            | Drift::DuplicateValue { table, .. } => Some(*table),
        }
    }
}

impl fmt::Display for Drift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Drift::MissingTable { table } => write!(f, "{}: table missing", table),
            Drift::UnknownTable { name } => write!(f, "unknown table `{}`", name),
            Drift::MissingMember {
                table,
                name,
                expected,
            } => write!(f, "{}: missing {} (expected {})", table, name, expected),
            Drift::UnknownMember { table, name, value } => {
                write!(f, "{}: unknown member {} = {}", table, name, value)
            }
            Drift::ValueMismatch {
                table,
                name,
                expected,
                found,
            } => write!(f, "{}: {} is {}, expected {}", table, name, found, expected),
            Drift::DuplicateValue {
                table,
                value,
                names,
            } => write!(
                f,
                "{}: value {} shared by {}",
                table,
                value,
                names.join(", ")
            ),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DriftReport {
    drifts: Vec<Drift>,
}

impl DriftReport {
    #[inline]
    pub fn is_clean(&self) -> bool {
        self.drifts.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.drifts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.drifts.is_empty()
    }

    pub fn drifts(&self) -> &[Drift] {
        &self.drifts
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Drift> {
        self.drifts.iter()
    }

    pub fn for_table(&self, kind: TableKind) -> impl Iterator<Item = &Drift> {
        self.drifts.iter().filter(move |d| d.table() == Some(kind))
    }
}

impl<'a> IntoIterator for &'a DriftReport {
    type Item = &'a Drift;
    type IntoIter = std::slice::Iter<'a, Drift>;

    fn into_iter(self) -> Self::IntoIter {
        self.drifts.iter()
    }
}

impl IntoIterator for DriftReport {
    type Item = Drift;
    type IntoIter = std::vec::IntoIter<Drift>;

    fn into_iter(self) -> Self::IntoIter {
        self.drifts.into_iter()
    }
}

pub(crate) fn verify(tables: &ConstantTables) -> DriftReport {
    let mut drifts = Vec::new();
    for kind in TableKind::ALL {
        match tables.table(kind) {
            Some(found) => check_table(kind, found, &mut drifts),
            None => drifts.push(Drift::MissingTable { table: kind }),
        }
    }
    for name in tables.unknown.keys() {
        drifts.push(Drift::UnknownTable { name: name.clone() });
    }

    if drifts.is_empty() {
        log::info!("constant tables match ({} tables)", TableKind::ALL.len());
    } else {
        for d in &drifts {
            log::warn!("{}", d);
        }
    }
    DriftReport { drifts }
}

// Appends the drifts of one table, ordered by member name.
fn check_table(kind: TableKind, found: &Table, out: &mut Vec<Drift>) {
    let expected = kind.members();
    let mut local: Vec<(String, Drift)> = Vec::new();

    for &(name, value) in &expected {
        match found.get(name) {
            None => local.push((
                name.to_string(),
                Drift::MissingMember {
                    table: kind,
                    name,
                    expected: value,
                },
            )),
            Some(&v) if v != i64::from(value) => local.push((
                name.to_string(),
                Drift::ValueMismatch {
                    table: kind,
                    name,
                    expected: value,
                    found: v,
                },
            )),
            Some(_) => {}
        }
    }

    for (name, &value) in found {
        if !expected.iter().any(|(n, _)| n == name) {
            local.push((
                name.clone(),
                Drift::UnknownMember {
                    table: kind,
                    name: name.clone(),
                    value,
                },
            ));
        }
    }

    let mut by_value: BTreeMap<i64, Vec<String>> = BTreeMap::new();
    for (name, &value) in found {
        by_value.entry(value).or_default().push(name.clone());
    }
    for (value, names) in by_value {
        if names.len() > 1 {
            local.push((
                names[0].clone(),
                Drift::DuplicateValue {
                    table: kind,
                    value,
                    names,
                },
            ));
        }
    }

    local.sort_by(|a, b| a.0.cmp(&b.0));
    out.extend(local.into_iter().map(|(_, d)| d));
}
