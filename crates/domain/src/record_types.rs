use crate::{DomainError, RecordType};
use std::collections::HashMap;

/// The set of record types a resolver will ask for, keyed by mnemonic.
///
/// Built once from an explicit list and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordTypes {
    by_name: HashMap<&'static str, RecordType>,
}

impl RecordTypes {
    pub fn new(types: impl IntoIterator<Item = RecordType>) -> Self {
        Self {
            by_name: types.into_iter().map(|t| (t.as_str(), t)).collect(),
        }
    }

    /// Builds the allow-list from mnemonics such as `["A", "aaaa"]`.
    pub fn from_names<S: AsRef<str>>(
        names: impl IntoIterator<Item = S>,
    ) -> Result<Self, DomainError> {
        let types = names
            .into_iter()
            .map(|name| name.as_ref().parse::<RecordType>())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(types))
    }

    pub fn is_allowed(&self, name: &str) -> bool {
        self.by_name.contains_key(name.to_uppercase().as_str())
    }

    pub fn get(&self, name: &str) -> Result<RecordType, DomainError> {
        self.by_name
            .get(name.to_uppercase().as_str())
            .copied()
            .ok_or_else(|| DomainError::UnknownRecordType(name.to_string()))
    }

    pub fn contains(&self, record_type: RecordType) -> bool {
        self.by_name.contains_key(record_type.as_str())
    }

    /// Mnemonic of `record_type` if it is allowed.
    pub fn name_of(&self, record_type: RecordType) -> Option<&'static str> {
        self.by_name
            .get_key_value(record_type.as_str())
            .map(|(name, _)| *name)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Allowed types in type-code order.
    pub fn types(&self) -> Vec<RecordType> {
        let mut types: Vec<RecordType> = self.by_name.values().copied().collect();
        types.sort_by_key(|t| t.to_u16());
        types
    }
}

impl Default for RecordTypes {
    fn default() -> Self {
        Self::new(RecordType::ALL)
    }
}
