pub mod application {
    pub mod item {
        pub mod delete;
        pub mod get_all;
        pub mod get_by_id;
        pub mod save;
    }
    pub mod recipe {
        pub mod accept_share;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_id;
        pub mod list_shared;
        pub mod save;
        pub mod set_like;
        pub mod share;
    }
    pub mod user {
        pub mod get_current;
        pub mod sign_in;
        pub mod sign_out;
        pub mod sign_up;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod theme;
    pub mod shared {
        pub mod scope;
        pub mod session;
        pub mod value_objects;
    }
    pub mod item {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod delete;
            pub mod get_all;
            pub mod get_by_id;
            pub mod save;
        }
    }
    pub mod recipe {
        pub mod diff;
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod social;
        pub mod use_cases {
            pub mod accept_share;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_id;
            pub mod list_shared;
            pub mod save;
            pub mod set_like;
            pub mod share;
        }
    }
    pub mod user {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod use_cases {
            pub mod get_current;
            pub mod sign_in;
            pub mod sign_out;
            pub mod sign_up;
        }
    }
}
