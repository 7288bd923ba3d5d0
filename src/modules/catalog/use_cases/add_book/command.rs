#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddBook {
    pub title: String,
    pub author_id: String,
}
