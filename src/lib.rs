pub mod config;

pub mod modules {
    pub mod catalog {
        pub mod core {
            pub mod author;
            pub mod book;
            pub mod identity;
            pub mod resolve;
        }
        pub mod use_cases {
            pub mod add_author {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod add_book {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod browse_catalog {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
                pub mod queries_port;
                pub mod view;
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
            }
            pub mod outbound {
                pub mod store;
                pub mod store_in_memory;
            }
        }
    }
}

pub mod shell;
