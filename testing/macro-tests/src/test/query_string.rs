use crate::fixtures::ComplicatedResource;
use fieldfilter::{Builder, FilterFields, Options};

#[test]
fn empty_options_are_replaced_with_defaults() {
    let builder = Builder::new(Options {
        param_key: String::new(),
        delimiter: String::new(),
        field_delimiter: String::new(),
    });

    assert_eq!(
        builder.query_string::<ComplicatedResource>(),
        "filter=name,measurement,exported,field1,\
         field4*specialName,field4*prop3,field5*specialName,field5*prop3",
    );
}

#[test]
fn explicit_options_are_used_verbatim() {
    let builder = Builder::new(Options {
        param_key: "halleluiah".to_string(),
        delimiter: ";".to_string(),
        field_delimiter: "$".to_string(),
    });

    assert_eq!(
        builder.query_string::<ComplicatedResource>(),
        "halleluiah=name;measurement;exported;field1;\
         field4$specialName;field4$prop3;field5$specialName;field5$prop3",
    );
}

#[test]
fn field_set_matches_regardless_of_order() {
    let builder = Builder::new(Options::default());
    let got = builder.query_string::<ComplicatedResource>();

    let (key, rest) = got.split_once('=').unwrap();
    assert_eq!(key, "filter");

    let mut fields: Vec<&str> = rest.split(',').collect();
    fields.sort_unstable();

    let mut expected = vec![
        "name",
        "measurement",
        "exported",
        "field1",
        "field4*specialName",
        "field4*prop3",
        "field5*specialName",
        "field5*prop3",
    ];
    expected.sort_unstable();

    assert_eq!(fields, expected);
}

#[test]
fn record_value_entry_point_matches_the_type_driven_one() {
    let builder = Builder::new(Options::default());
    let resource = ComplicatedResource::sample();

    assert_eq!(
        builder.query_string_from_record(&resource),
        builder.query_string::<ComplicatedResource>(),
    );
}

#[test]
fn record_with_no_resolvable_fields_yields_an_empty_string() {
    #[derive(FilterFields)]
    struct Inner {
        pub some_field: Vec<String>,
    }

    #[derive(FilterFields)]
    struct EmptyResponse {
        #[filter(rename = "", nested)]
        pub some_field_too: Vec<Inner>,
        #[allow(dead_code)]
        hidden: String,
    }

    let builder = Builder::new(Options::default());

    assert_eq!(builder.query_string::<EmptyResponse>(), "");
}

#[test]
fn no_stray_delimiters_in_a_non_empty_result() {
    let builder = Builder::new(Options::default());
    let got = builder.query_string::<ComplicatedResource>();
    let rest = got.strip_prefix("filter=").unwrap();

    assert!(!rest.starts_with(','));
    assert!(!rest.ends_with(','));
    assert!(!rest.contains(",,"));
}
