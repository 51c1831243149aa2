pub mod db;
pub mod item {
    pub mod entity;
    pub mod repository;
}
pub mod recipe {
    pub mod entity;
    pub mod repository;
}
pub mod social {
    pub mod entity;
    pub mod repository;
}
pub mod user {
    pub mod entity;
    pub mod repository;
}
