use sqlx::{Pool, Sqlite};

/// Store access handed to every repository and usecase.
pub trait Context: Sync + Send {
    fn db(&self) -> &Pool<Sqlite>;
}
