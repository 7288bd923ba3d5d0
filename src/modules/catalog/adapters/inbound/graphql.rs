use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::catalog::core::author::Author;
use crate::modules::catalog::use_cases::add_author::command::AddAuthor;
use crate::modules::catalog::use_cases::add_book::command::AddBook;
use crate::modules::catalog::use_cases::browse_catalog::view::BookView;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
#[graphql(name = "Author")]
pub struct GqlAuthor {
    pub id: String,
    pub name: String,
    pub age: i32,
    pub email: Option<String>,
}

impl From<Author> for GqlAuthor {
    fn from(author: Author) -> Self {
        Self {
            id: author.id,
            name: author.name,
            age: author.age,
            email: author.email,
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
#[graphql(name = "Book")]
pub struct GqlBook {
    pub id: String,
    pub title: String,
    pub author: GqlAuthor,
}

impl From<BookView> for GqlBook {
    fn from(view: BookView) -> Self {
        Self {
            id: view.id,
            title: view.title,
            author: view.author.into(),
        }
    }
}

#[derive(async_graphql::InputObject)]
pub struct AuthorInput {
    pub name: String,
    pub age: i32,
    pub email: Option<String>,
}

#[derive(async_graphql::InputObject)]
pub struct BookInput {
    pub title: String,
    pub author_id: String,
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn book(&self, context: &Context<'_>, id: String) -> GqlResult<Option<GqlBook>> {
        let state = context.data_unchecked::<AppState>();
        let view = state
            .queries
            .book_by_id(&id)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(view.map(Into::into))
    }

    async fn books(&self, context: &Context<'_>) -> GqlResult<Vec<GqlBook>> {
        let state = context.data_unchecked::<AppState>();
        let views = state
            .queries
            .list_books()
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(views.into_iter().map(Into::into).collect())
    }

    async fn author(&self, context: &Context<'_>, id: String) -> GqlResult<Option<GqlAuthor>> {
        let state = context.data_unchecked::<AppState>();
        let author = state
            .queries
            .author_by_id(&id)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(author.map(Into::into))
    }

    async fn authors(&self, context: &Context<'_>) -> GqlResult<Vec<GqlAuthor>> {
        let state = context.data_unchecked::<AppState>();
        let authors = state
            .queries
            .list_authors()
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(authors.into_iter().map(Into::into).collect())
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn add_author(&self, context: &Context<'_>, data: AuthorInput) -> GqlResult<GqlAuthor> {
        let state = context.data_unchecked::<AppState>();

        let command = AddAuthor {
            name: data.name,
            age: data.age,
            email: data.email,
        };

        let created = state
            .add_author_handler
            .handle(command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(created.into())
    }

    async fn add_book(&self, context: &Context<'_>, data: BookInput) -> GqlResult<GqlBook> {
        let state = context.data_unchecked::<AppState>();

        let command = AddBook {
            title: data.title,
            author_id: data.author_id,
        };

        let created = state
            .add_book_handler
            .handle(command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        // Re-read through the queries port so the response carries the
        // composed author, the schema's non-null `Book.author`.
        let view = state
            .queries
            .book_by_id(&created.id)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?
            .ok_or_else(|| {
                async_graphql::Error::new(format!("book {} missing after insert", created.id))
            })?;

        Ok(view.into())
    }
}
