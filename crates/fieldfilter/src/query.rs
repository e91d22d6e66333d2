use crate::{repr::StructureRepr, traits::FilterFields};

/// Defaults for anything left unset when building [`Options`].
pub const DEFAULT_PARAM_KEY: &str = "filter";
pub const DEFAULT_DELIMITER: &str = ",";
pub const DEFAULT_FIELD_DELIMITER: &str = "*";

///
/// Options
///
/// The three strings a query parameter is assembled from: the parameter
/// key, the delimiter between distinct fields, and the delimiter between
/// a field and one of its nested sub-field names.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Options {
    pub param_key: String,
    pub delimiter: String,
    pub field_delimiter: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            param_key: DEFAULT_PARAM_KEY.to_string(),
            delimiter: DEFAULT_DELIMITER.to_string(),
            field_delimiter: DEFAULT_FIELD_DELIMITER.to_string(),
        }
    }
}

///
/// Builder
///
/// Immutable after construction; one builder can be reused across any
/// number of conversion calls, each of which allocates its own
/// representation and output buffer.
///

#[derive(Clone, Debug)]
pub struct Builder {
    options: Options,
}

impl Builder {
    /// Create a new query parameter builder with the given options.
    ///
    /// Any option left as the empty string is replaced with its default;
    /// non-empty values are used verbatim, including values equal to a
    /// default.
    #[must_use]
    pub fn new(mut options: Options) -> Self {
        if options.param_key.is_empty() {
            options.param_key = DEFAULT_PARAM_KEY.to_string();
        }

        if options.delimiter.is_empty() {
            options.delimiter = DEFAULT_DELIMITER.to_string();
        }

        if options.field_delimiter.is_empty() {
            options.field_delimiter = DEFAULT_FIELD_DELIMITER.to_string();
        }

        Self { options }
    }

    #[must_use]
    pub const fn options(&self) -> &Options {
        &self.options
    }

    /// Build the query string for a record type.
    ///
    /// Returns `""` when the record has no resolvable fields.
    #[must_use]
    pub fn query_string<T: FilterFields>(&self) -> String {
        self.assemble(&StructureRepr::of::<T>())
    }

    /// Value-taking form of [`Self::query_string`]; only the type of the
    /// record matters.
    #[must_use]
    pub fn query_string_from_record<T: FilterFields>(&self, _record: &T) -> String {
        self.query_string::<T>()
    }

    fn assemble(&self, repr: &StructureRepr) -> String {
        let mut out = String::new();
        out.push_str(&self.options.param_key);
        out.push('=');

        let total = repr.len();

        for (pos, entry) in repr.iter().enumerate() {
            let cnt = pos + 1;

            if entry.nested.is_empty() {
                out.push_str(entry.name);
                if cnt < total {
                    out.push_str(&self.options.delimiter);
                }
            } else {
                for (i, nested) in entry.nested.iter().enumerate() {
                    out.push_str(entry.name);
                    out.push_str(&self.options.field_delimiter);
                    out.push_str(nested);

                    if cnt < total {
                        out.push_str(&self.options.delimiter);
                    }

                    // The last key's own sub-fields still need separating.
                    if cnt == total && i < entry.nested.len() - 1 {
                        out.push_str(&self.options.delimiter);
                    }
                }
            }
        }

        // Nothing beyond "key=" means there were no fields to select.
        if out.len() == self.options.param_key.len() + 1 {
            return String::new();
        }

        out
    }
}

///
/// TESTS
///
