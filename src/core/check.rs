use crate::errors::ModelError;
use crate::models::{LessonCardEntry, LessonCardRecord, LessonDate, ReplacementPolicy, WireRecord};
use std::collections::BTreeMap;

/// A row that could not become a [`LessonCardEntry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowFailure {
    /// 1-based position in the input file
    pub index: usize,
    pub error: ModelError,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome<D: LessonDate> {
    /// Converted rows with their 1-based index
    pub entries: Vec<(usize, LessonCardEntry<D>)>,
    pub failures: Vec<RowFailure>,
}

impl<D: LessonDate> CheckOutcome<D> {
    pub fn total(&self) -> usize {
        self.entries.len() + self.failures.len()
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Number of cells per status label.
    pub fn tally(&self) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        for (_, entry) in &self.entries {
            *counts.entry(entry.status().label()).or_insert(0) += 1;
        }
        counts
    }
}

pub struct CheckLogic;

impl CheckLogic {
    pub fn convert_row<D: LessonDate>(
        row: WireRecord,
        policy: ReplacementPolicy,
    ) -> Result<LessonCardEntry<D>, ModelError> {
        LessonCardRecord::<D>::try_from(row)?.normalize(policy)
    }

    /// Convert every row, collecting failures instead of stopping at the first.
    pub fn check_rows<D: LessonDate>(
        rows: Vec<WireRecord>,
        policy: ReplacementPolicy,
    ) -> CheckOutcome<D> {
        let mut entries = Vec::new();
        let mut failures = Vec::new();

        for (i, row) in rows.into_iter().enumerate() {
            let index = i + 1;
            match Self::convert_row::<D>(row, policy) {
                Ok(entry) => entries.push((index, entry)),
                Err(error) => {
                    log::debug!("row {index} rejected: {error}");
                    failures.push(RowFailure { index, error });
                }
            }
        }

        CheckOutcome { entries, failures }
    }
}
