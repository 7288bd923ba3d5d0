// Shared test fixture for the AddAuthor command. Compiled into the crate
// only during tests via the `tests` module in `src/lib.rs`.

use crate::modules::catalog::use_cases::add_author::command::AddAuthor;

pub struct AddAuthorBuilder {
    inner: AddAuthor,
}

impl Default for AddAuthorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl AddAuthorBuilder {
    pub fn new() -> Self {
        Self {
            inner: AddAuthor {
                name: "Ada".to_string(),
                age: 30,
                email: None,
            },
        }
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn age(mut self, v: i32) -> Self {
        self.inner.age = v;
        self
    }

    pub fn email(mut self, v: Option<impl Into<String>>) -> Self {
        self.inner.email = v.map(Into::into);
        self
    }

    pub fn build(self) -> AddAuthor {
        self.inner
    }
}

#[cfg(test)]
mod add_author_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_build_the_canonical_command_by_default() {
        let built = AddAuthorBuilder::default().build();
        assert_eq!(built.name, "Ada");
        assert_eq!(built.age, 30);
        assert_eq!(built.email, None);
    }

    #[rstest]
    fn it_should_override_fields_through_the_setters() {
        let built = AddAuthorBuilder::new()
            .name("Grace")
            .age(45)
            .email(Some("grace@example.com"))
            .build();

        assert_eq!(built.name, "Grace");
        assert_eq!(built.age, 45);
        assert_eq!(built.email.as_deref(), Some("grace@example.com"));
    }
}
