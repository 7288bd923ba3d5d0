use crate::modules::catalog::adapters::outbound::store_in_memory::InMemoryEntityStore;
use crate::modules::catalog::use_cases::add_author::handler::AddAuthorHandler;
use crate::modules::catalog::use_cases::add_book::command::AddBook;
use crate::modules::catalog::use_cases::add_book::handler::{AddBookError, AddBookHandler};
use crate::modules::catalog::use_cases::browse_catalog::handler::CatalogQueryHandler;
use crate::modules::catalog::use_cases::browse_catalog::queries_port::CatalogQueries;
use crate::tests::fixtures::commands::add_author::AddAuthorBuilder;
use crate::tests::fixtures::commands::add_book::AddBookBuilder;
use std::sync::Arc;

struct Catalog {
    queries: CatalogQueryHandler<InMemoryEntityStore>,
    add_author: AddAuthorHandler<InMemoryEntityStore>,
    add_book: AddBookHandler<InMemoryEntityStore>,
}

fn wire_catalog() -> Catalog {
    let store = Arc::new(InMemoryEntityStore::new());
    Catalog {
        queries: CatalogQueryHandler::new(store.clone()),
        add_author: AddAuthorHandler::new(store.clone()),
        add_book: AddBookHandler::new(store),
    }
}

#[tokio::test]
async fn composes_a_created_book_with_its_author() {
    let catalog = wire_catalog();

    let ada = catalog
        .add_author
        .handle(AddAuthorBuilder::new().build())
        .await
        .unwrap();
    let notes = catalog
        .add_book
        .handle(AddBook {
            title: "Notes".to_string(),
            author_id: ada.id.clone(),
        })
        .await
        .unwrap();

    let view = catalog.queries.book_by_id(&notes.id).await.unwrap().unwrap();

    assert_eq!(view.id, notes.id);
    assert_eq!(view.title, "Notes");
    assert_eq!(view.author, ada);
    assert_eq!(view.author.name, "Ada");
    assert_eq!(view.author.age, 30);
}

#[tokio::test]
async fn lists_authors_in_call_order_with_unique_ids() {
    let catalog = wire_catalog();

    let names = ["Ada", "Grace", "Barbara"];
    for name in names {
        catalog
            .add_author
            .handle(AddAuthorBuilder::new().name(name).build())
            .await
            .unwrap();
    }

    let listed = catalog.queries.list_authors().await.unwrap();

    let listed_names: Vec<&str> = listed.iter().map(|author| author.name.as_str()).collect();
    assert_eq!(listed_names, names);

    let mut ids: Vec<&str> = listed.iter().map(|author| author.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), names.len());
}

#[tokio::test]
async fn rejects_a_book_for_an_unknown_author_and_changes_nothing() {
    let catalog = wire_catalog();
    catalog
        .add_author
        .handle(AddAuthorBuilder::new().build())
        .await
        .unwrap();

    let result = catalog
        .add_book
        .handle(AddBookBuilder::new().title("Ghost").author_id("missing").build())
        .await;

    assert!(matches!(
        result,
        Err(AddBookError::UnknownAuthor { ref author_id }) if author_id == "missing"
    ));
    assert!(catalog.queries.list_books().await.unwrap().is_empty());
    assert_eq!(catalog.queries.list_authors().await.unwrap().len(), 1);
}

#[tokio::test]
async fn returns_absent_for_ids_never_inserted() {
    let catalog = wire_catalog();

    assert_eq!(catalog.queries.book_by_id("nope").await.unwrap(), None);
    assert_eq!(catalog.queries.author_by_id("nope").await.unwrap(), None);
}

#[tokio::test]
async fn repeated_listings_without_mutation_are_identical() {
    let catalog = wire_catalog();

    let ada = catalog
        .add_author
        .handle(AddAuthorBuilder::new().build())
        .await
        .unwrap();
    for title in ["First", "Second", "Third"] {
        catalog
            .add_book
            .handle(AddBook {
                title: title.to_string(),
                author_id: ada.id.clone(),
            })
            .await
            .unwrap();
    }

    let first_pass = catalog.queries.list_books().await.unwrap();
    let second_pass = catalog.queries.list_books().await.unwrap();

    assert_eq!(first_pass, second_pass);
    let titles: Vec<&str> = first_pass.iter().map(|view| view.title.as_str()).collect();
    assert_eq!(titles, vec!["First", "Second", "Third"]);
}
