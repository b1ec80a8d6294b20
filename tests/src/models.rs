//! Fixture records. `build.rs` runs the generator over this file and the
//! result is included at the bottom.

use rowkit::Model;

#[derive(Debug, Default, Clone, PartialEq, Model)]
pub struct User {
    #[db("pk,autoincrement")]
    pub id: i64,

    #[db("unique,not_null")]
    pub email: String,

    pub name: String,

    #[db("-")]
    pub session: Option<String>,

    pub active: bool,
}

#[derive(Debug, Default, Clone, PartialEq, Model)]
pub struct Team {
    pub id: String,
    pub name: String,
    pub members: Vec<Member>,
}

#[derive(Debug, Default, Clone, PartialEq, Model)]
pub struct Member {
    pub id: i64,

    #[db("ref=teams")]
    pub team_id: String,

    pub score: f64,

    #[db("column=picture")]
    pub avatar: Vec<u8>,
}

#[derive(Debug, Default, Clone, PartialEq, Model)]
pub struct Tag {
    pub id: u32,
    pub r#type: String,
}

impl Tag {
    pub fn table_name(&self) -> &'static str {
        "labels"
    }
}

include!(concat!(env!("OUT_DIR"), "/models_rowkit.rs"));
