#[test]
fn derive_accepts_db_attributes() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui-pass/*.rs");
}
