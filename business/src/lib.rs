pub mod application {
    pub mod chat {
        pub mod relay;
    }
    pub mod receipt {
        pub mod itemise;
    }
}

pub mod domain {
    pub mod logger;
    pub mod chat {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod relay;
        }
    }
    pub mod receipt {
        pub mod decoder;
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod value_objects;
        pub mod use_cases {
            pub mod itemise;
        }
    }
}
