use crate::fixtures::{ComplicatedResource, ObjectField};
use fieldfilter::{FilterFields, node::FieldKind};

#[test]
fn table_mirrors_declaration_order() {
    let idents: Vec<&str> = ComplicatedResource::FIELDS
        .iter()
        .map(|field| field.ident)
        .collect();

    assert_eq!(
        idents,
        [
            "name", "measure", "exported", "hidden", "field1", "field2", "field3", "field4",
            "field5",
        ],
    );
}

#[test]
fn visibility_is_captured_from_the_declaration() {
    let hidden = field(3);

    assert!(!hidden.exported);
    assert!(ComplicatedResource::FIELDS[..3].iter().all(|f| f.exported));
}

#[test]
fn rename_and_omit_coexist_in_the_table() {
    let field3 = field(6);

    assert_eq!(field3.rename, Some("field_3"));
    assert!(field3.omit);
}

#[test]
fn empty_rename_survives_as_some() {
    let prop1 = ObjectField::FIELDS[0];

    assert_eq!(prop1.rename, Some(""));
    assert!(!prop1.omit);
}

#[test]
fn nested_kinds_carry_the_element_table() {
    let FieldKind::Record(table) = field(7).kind else {
        panic!("field4 should be a record");
    };
    assert_eq!(idents(table), idents(ObjectField::FIELDS));

    let FieldKind::RecordList(table) = field(8).kind else {
        panic!("field5 should be a record list");
    };
    assert_eq!(idents(table), idents(ObjectField::FIELDS));
}

#[test]
fn plain_collections_stay_scalar() {
    // prop3 is a Vec without the nested marker.
    assert!(matches!(ObjectField::FIELDS[2].kind, FieldKind::Scalar));
}

fn field(index: usize) -> fieldfilter::node::Field {
    ComplicatedResource::FIELDS[index]
}

fn idents(table: &[fieldfilter::node::Field]) -> Vec<&str> {
    table.iter().map(|field| field.ident).collect()
}
