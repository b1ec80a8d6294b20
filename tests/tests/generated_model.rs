use rowkit::{Constraint, FieldType, Model, Value};
use tests::models::*;

use pretty_assertions::assert_eq;

#[test]
fn table_names() {
    assert_eq!(User::default().table_name(), "users");
    assert_eq!(Team::default().table_name(), "teams");
    assert_eq!(Member::default().table_name(), "members");
    assert_eq!(Model::table_name(&User::default()), "users");

    // hand-written, not regenerated
    assert_eq!(Tag::default().table_name(), "labels");
    assert_eq!(Model::table_name(&Tag::default()), "labels");
}

#[test]
fn schema_values_and_pointers_line_up() {
    let mut user = User {
        id: 3,
        email: "ada@example.com".into(),
        name: "Ada".into(),
        session: Some("secret".into()),
        active: true,
    };

    let schema = user.schema();
    let values = user.values();
    assert_eq!(user.columns(), ["id", "email", "name", "active"]);
    assert_eq!(
        values,
        [
            Value::Int64(3),
            Value::from("ada@example.com"),
            Value::from("Ada"),
            Value::Bool(true),
        ]
    );

    let pointers = user.pointers();
    assert_eq!(pointers.len(), schema.len());
    assert_eq!(schema.len(), values.len());

    for (pointer, value) in pointers.into_iter().zip(&values) {
        assert_eq!(&pointer.to_value(), value);
    }
}

#[test]
fn field_descriptors() {
    let schema = User::default().schema();

    assert_eq!(schema[0].ty, FieldType::Int64);
    assert_eq!(
        schema[0].constraints,
        Constraint::PRIMARY_KEY | Constraint::AUTO_INCREMENT
    );
    assert_eq!(
        schema[1].constraints,
        Constraint::UNIQUE | Constraint::NOT_NULL
    );
    assert_eq!(schema[2].constraints, Constraint::NONE);
    assert_eq!(schema[3].ty, FieldType::Bool);

    let schema = Member::default().schema();
    let team_id = schema.iter().find(|f| f.name == "team_id").unwrap();
    assert_eq!(team_id.references, Some("teams"));
    assert_eq!(team_id.ref_column, None);

    let avatar = schema.iter().find(|f| f.name == "picture").unwrap();
    assert_eq!(avatar.ty, FieldType::Blob);
}

#[test]
fn collections_are_not_columns() {
    assert_eq!(Team::default().columns(), ["id", "name"]);
}

#[test]
fn metadata_descriptor() {
    assert_eq!(USER_META.table_name, "users");
    assert_eq!(USER_META.email, "email");
    assert_eq!(MEMBER_META.avatar, "picture");
    assert_eq!(TAG_META.table_name, "labels");
    assert_eq!(TAG_META.r#type, "type");
}

#[test]
fn pointers_write_through() {
    let mut member = Member::default();
    member
        .set_values(vec![
            Value::Int64(9),
            Value::from("t1"),
            Value::Float64(2.5),
            Value::Blob(vec![0xff]),
        ])
        .unwrap();

    assert_eq!(
        member,
        Member {
            id: 9,
            team_id: "t1".into(),
            score: 2.5,
            avatar: vec![0xff],
        }
    );
}
