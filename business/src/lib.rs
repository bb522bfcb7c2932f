pub mod application {
    pub mod food {
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_id;
        pub mod update;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod cart {
        pub mod model;
        pub mod session;
        pub mod signal;
        pub mod store;
    }
    pub mod food {
        pub mod errors;
        pub mod model;
        pub mod policy;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_id;
            pub mod update;
        }
    }
    pub mod shared {
        pub mod value_objects;
    }
}
