#[derive(Default, rowkit::Model)]
pub struct User {
    #[db("pk,autoincrement")]
    pub id: i64,

    #[db = "unique, not_null"]
    #[db("column=mail")]
    pub email: String,

    #[db("-")]
    pub cache: Option<String>,

    pub roles: Vec<Role>,
}

#[derive(Default, rowkit::Model)]
pub struct Role {
    pub id: i64,

    #[db("ref=users")]
    pub user_id: i64,
}

fn main() {
    let _ = User::default();
    let _ = Role::default();
}
