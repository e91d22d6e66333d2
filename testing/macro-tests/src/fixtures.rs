use fieldfilter::FilterFields;

///
/// ObjectField
///
/// Nested record exercising every resolution rule below the root: an
/// empty rename, a real rename, and a plain collection field.
///

#[derive(FilterFields)]
pub struct ObjectField {
    #[filter(rename = "")]
    pub prop1: String,
    #[filter(rename = "specialName")]
    pub prop2: String,
    pub prop3: Vec<String>,
}

///
/// ComplicatedResource
///
/// Root record mixing scalars, renames, omissions, a non-pub field, a
/// nested record, and a nested record list.
///

#[derive(FilterFields)]
pub struct ComplicatedResource {
    pub name: String,
    #[filter(rename = "measurement")]
    pub measure: f64,
    pub exported: String,
    #[allow(dead_code)]
    hidden: String,
    pub field1: i32,
    #[filter(omit, nested)]
    pub field2: ObjectField,
    #[filter(rename = "field_3", omit, nested)]
    pub field3: ObjectField,
    #[filter(nested)]
    pub field4: ObjectField,
    #[filter(nested)]
    pub field5: Vec<ObjectField>,
}

impl ComplicatedResource {
    #[must_use]
    pub fn sample() -> Self {
        Self {
            name: "resource".to_string(),
            measure: 1.5,
            exported: String::new(),
            hidden: String::new(),
            field1: 0,
            field2: ObjectField::sample(),
            field3: ObjectField::sample(),
            field4: ObjectField::sample(),
            field5: Vec::new(),
        }
    }
}

impl ObjectField {
    #[must_use]
    pub fn sample() -> Self {
        Self {
            prop1: String::new(),
            prop2: String::new(),
            prop3: Vec::new(),
        }
    }
}
