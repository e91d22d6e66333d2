use serde::Serialize;

///
/// Field
///
/// One entry in a record's static field table. Carries everything name
/// resolution needs: the declared name, the naming override (kept even
/// when it is the empty string), the omission marker, visibility, and the
/// field's shape.
///

#[derive(Clone, Copy, Debug, Serialize)]
pub struct Field {
    pub ident: &'static str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rename: Option<&'static str>,

    pub omit: bool,
    pub exported: bool,
    pub kind: FieldKind,
}

///
/// FieldKind
///
/// Shape of the field's value type. `Record` and `RecordList` hold the
/// nested record's own field table; the walker reads one level of names
/// from it and never descends further.
///

#[derive(Clone, Copy, Debug, Serialize)]
pub enum FieldKind {
    Scalar,
    Record(&'static [Field]),
    RecordList(&'static [Field]),
}

impl FieldKind {
    #[must_use]
    pub const fn nested_fields(&self) -> Option<&'static [Field]> {
        match self {
            Self::Scalar => None,
            Self::Record(fields) | Self::RecordList(fields) => Some(fields),
        }
    }
}

///
/// TESTS
///
