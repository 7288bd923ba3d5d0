#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddAuthor {
    pub name: String,
    pub age: i32,
    pub email: Option<String>,
}
