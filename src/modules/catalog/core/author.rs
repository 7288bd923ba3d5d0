#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Author {
    pub id: String,
    pub name: String,
    pub age: i32,
    pub email: Option<String>,
}
