use rowkit::{Condition, Query, Value};
use tests::models::*;
use tests::{MemoryDb, MemoryReader};

use pretty_assertions::assert_eq;

fn member(id: i64, team_id: &str) -> Member {
    Member {
        id,
        team_id: team_id.into(),
        score: id as f64,
        avatar: vec![],
    }
}

#[test]
fn read_one_fills_the_given_record() {
    let mut db = MemoryDb::new();
    let ada = User {
        id: 1,
        email: "ada@example.com".into(),
        name: "Ada".into(),
        session: None,
        active: true,
    };
    db.insert(&ada);

    let mut user = User {
        session: Some("kept".into()),
        ..User::default()
    };
    let reader = rowkit::Db::query(&db, Query::new("users"));
    let read = read_one_user(reader, &mut user).unwrap();
    assert_eq!(read.name, "Ada");

    // excluded fields are left alone
    assert_eq!(user.session.as_deref(), Some("kept"));
    assert_eq!(user.email, ada.email);
}

#[test]
fn read_one_without_rows_fails() {
    let mut user = User::default();
    let err = read_one_user(MemoryReader::new("users", vec![]), &mut user).unwrap_err();
    assert_eq!(err.to_string(), "no rows in `users`");
}

#[test]
fn read_all_builds_one_record_per_row() {
    let mut db = MemoryDb::new();
    db.insert(&member(1, "a"));
    db.insert(&member(2, "b"));

    let reader = rowkit::Db::query(&db, Query::new("members"));
    let members = read_all_member(reader).unwrap();
    assert_eq!(members, [member(1, "a"), member(2, "b")]);
}

#[test]
fn loader_queries_child_table_by_foreign_key() {
    let mut db = MemoryDb::new();
    db.insert(&member(1, "a"));
    db.insert(&member(2, "b"));
    db.insert(&member(3, "a"));

    let members = read_all_member_by_team_id(&db, "a".to_string()).unwrap();
    assert_eq!(members, [member(1, "a"), member(3, "a")]);

    assert_eq!(
        db.query_log(),
        [Query {
            table: "members",
            conditions: vec![Condition::Eq {
                column: "team_id",
                value: Value::from("a"),
            }],
        }]
    );
}

#[test]
fn read_fields_with_keyword_names() {
    let mut db = MemoryDb::new();
    db.insert(&Tag {
        id: 4,
        r#type: "topic".into(),
    });

    let tags = read_all_tag(rowkit::Db::query(&db, Query::new("labels"))).unwrap();
    assert_eq!(tags[0].r#type, "topic");
}
