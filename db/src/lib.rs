#[macro_use]
extern crate diesel;
#[macro_use]
extern crate diesel_migrations;
#[macro_use]
extern crate log;

use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};
use diesel::sqlite::SqliteConnection;

use errors::Error;

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type Connection = PooledConnection<ConnectionManager<SqliteConnection>>;
pub mod models;
pub mod schema;

pub const MEMORY_DATABASE: &str = ":memory:";

embed_migrations!("migrations");

pub fn get_conn(pool: &DbPool) -> Result<Connection, Error> {
    pool.get().map_err(|err| {
        error!("Failed to get connection - {}", err.to_string());
        err.into()
    })
}

/// Builds the connection pool and brings the schema up to date.
///
/// Every connection to `:memory:` opens a database of its own, so that url gets
/// a single connection which the pool never recycles.
pub fn new_pool(database_url: &str) -> Result<DbPool, Error> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);

    let builder = Pool::builder();
    let builder = if database_url == MEMORY_DATABASE {
        builder.max_size(1).idle_timeout(None).max_lifetime(None)
    } else {
        builder
    };

    let pool = builder.build(manager).map_err(|err| {
        error!("Failed to create db pool - {}", err.to_string());
        Error::from(err)
    })?;

    {
        let conn = get_conn(&pool)?;
        run_migrations(&conn)?;
    }

    Ok(pool)
}

/// Applies the migrations under `db/migrations` that the database has not recorded yet.
pub fn run_migrations(conn: &SqliteConnection) -> Result<(), Error> {
    embedded_migrations::run(conn).map_err(|err| {
        error!("Failed to run migrations - {}", err.to_string());
        Error::InternalServerError("Failed to run migrations".into())
    })
}
