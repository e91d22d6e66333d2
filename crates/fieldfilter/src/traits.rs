use crate::node::Field;

///
/// FilterFields
///
/// The static field-description table for a record type, in declaration
/// order. Normally produced by `#[derive(FilterFields)]`; a hand-authored
/// table behaves identically.
///

pub trait FilterFields {
    const FIELDS: &'static [Field];
}
