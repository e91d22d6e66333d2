use crate::node::Field;

///
/// Resolved
///
/// Outcome of name resolution for a single field. An empty override
/// resolves to `Name("")`, never `Skip`; only visibility and the omission
/// marker produce `Skip`. The two signals stay distinct so callers can
/// tell "renamed to nothing" from "excluded".
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Resolved {
    Name(&'static str),
    Skip,
}

/// Resolve the output name for one field.
///
/// Precedence: unexported fields are skipped before anything else, then
/// the omission marker (which beats a rename on the same field), then the
/// rename verbatim, then the declared name.
#[must_use]
pub const fn resolve(field: &Field) -> Resolved {
    if !field.exported {
        return Resolved::Skip;
    }

    if field.omit {
        return Resolved::Skip;
    }

    match field.rename {
        Some(name) => Resolved::Name(name),
        None => Resolved::Name(field.ident),
    }
}

///
/// TESTS
///
