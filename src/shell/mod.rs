// Composition root for the catalog bounded context.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate the in memory entity store once per process.
// - Wire the store into the query and mutation handlers.
// - Expose the HTTP router and the GraphQL schema to the binary.

pub mod graphql;
pub mod http;
pub mod state;
