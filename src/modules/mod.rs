pub mod user {
    pub mod schema;
    pub mod model;
    pub mod repository;
    pub mod repository_memory;
    pub mod handle;
    pub mod service;
    pub mod route;
}

pub mod film {
    pub mod schema;
    pub mod model;
    pub mod repository;
    pub mod repository_memory;
    pub mod handle;
    pub mod service;
    pub mod route;
}
