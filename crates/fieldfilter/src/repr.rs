use crate::{
    node::Field,
    resolve::{Resolved, resolve},
    traits::FilterFields,
};
use derive_more::{Deref, IntoIterator};

///
/// Entry
///
/// One root field of the representation: its resolved name and the
/// resolved names of its nested record fields (empty for scalar fields
/// and collections of non-records).
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Entry {
    pub name: &'static str,
    pub nested: Vec<&'static str>,
}

///
/// StructureRepr
///
/// Ordered mapping from resolved root field names to nested name
/// sequences; order mirrors the record's field declaration order. Built
/// fresh per conversion call and discarded after assembly.
///

#[derive(Clone, Debug, Default, Deref, IntoIterator)]
pub struct StructureRepr {
    #[into_iterator(owned, ref)]
    entries: Vec<Entry>,
}

impl StructureRepr {
    #[must_use]
    pub fn of<T: FilterFields>() -> Self {
        Self::from_fields(T::FIELDS)
    }

    /// Walk a field table, collecting one level of nested names.
    ///
    /// Skipped fields contribute nothing, and neither do fields whose
    /// resolved name is empty. Nesting is capped at exactly one level:
    /// a nested record's own nested structure is discarded.
    #[must_use]
    pub fn from_fields(fields: &'static [Field]) -> Self {
        let mut entries = Vec::with_capacity(fields.len());

        for field in fields {
            let Resolved::Name(name) = resolve(field) else {
                continue;
            };
            if name.is_empty() {
                continue;
            }

            let nested = match field.kind.nested_fields() {
                Some(inner) => collect_names(inner),
                None => Vec::new(),
            };

            entries.push(Entry { name, nested });
        }

        Self { entries }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.name == name)
    }
}

// Names only: a nested field's own Record/RecordList kind is ignored.
fn collect_names(fields: &'static [Field]) -> Vec<&'static str> {
    fields
        .iter()
        .filter_map(|field| match resolve(field) {
            Resolved::Name(name) if !name.is_empty() => Some(name),
            _ => None,
        })
        .collect()
}

///
/// TESTS
///
