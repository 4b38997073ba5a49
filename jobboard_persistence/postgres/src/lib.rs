use std::{collections::HashSet, fmt::Write, time::Duration};

use anyhow::{anyhow, Context};
use bb8::{Pool, PooledConnection};
use bb8_postgres::{
    tokio_postgres::{self, NoTls},
    PostgresConnectionManager,
};
use jobboard_persistence_contracts::{Database, Transaction};
use jobboard_utils::trace_instrument;
use ouroboros::self_referencing;
use tracing::trace;

pub mod jobs;

type PgManager = PostgresConnectionManager<NoTls>;
type PgClient = tokio_postgres::Client;
type PgPooledConnection = PooledConnection<'static, PgManager>;
type PgTransaction<'a> = tokio_postgres::Transaction<'a>;

/// The job store, backed by a pool of postgres connections.
#[derive(Debug, Clone)]
pub struct PostgresDatabase {
    pool: Pool<PgManager>,
}

#[derive(Debug)]
pub struct PostgresDatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout: Duration,
    pub idle_timeout: Option<Duration>,
    pub max_lifetime: Option<Duration>,
}

impl PostgresDatabase {
    pub async fn connect(config: &PostgresDatabaseConfig) -> anyhow::Result<Self> {
        let manager = PgManager::new(
            config.url.parse().context("Invalid database url")?,
            NoTls,
        );
        let pool = Pool::builder()
            .max_size(config.max_connections)
            .min_idle(Some(config.min_connections))
            .connection_timeout(config.acquire_timeout)
            .idle_timeout(config.idle_timeout)
            .max_lifetime(config.max_lifetime)
            .build(manager)
            .await
            .context("Failed to create database connection pool")?;

        Ok(Self { pool })
    }

    async fn connection(&self) -> anyhow::Result<PooledConnection<'_, PgManager>> {
        self.pool
            .get()
            .await
            .context("Failed to acquire database connection")
    }

    pub async fn list_migrations(&self) -> anyhow::Result<Vec<MigrationStatus>> {
        let conn = self.connection().await?;
        create_migrations_table(&conn).await?;
        list_migrations(&conn).await
    }

    /// Applies up to `cnt` pending migrations (all of them if `None`) and
    /// returns the names of the applied migrations.
    pub async fn run_migrations(&self, cnt: Option<usize>) -> anyhow::Result<Vec<&'static str>> {
        self.migrate(Direction::Up, cnt).await
    }

    /// Reverts up to `cnt` applied migrations, newest first, and returns the
    /// names of the reverted migrations.
    pub async fn revert_migrations(&self, cnt: Option<usize>) -> anyhow::Result<Vec<&'static str>> {
        self.migrate(Direction::Down, cnt).await
    }

    async fn migrate(
        &self,
        direction: Direction,
        cnt: Option<usize>,
    ) -> anyhow::Result<Vec<&'static str>> {
        let mut conn = self.connection().await?;
        create_migrations_table(&conn).await?;

        let mut statuses = list_migrations(&conn).await?;
        if direction == Direction::Down {
            statuses.reverse();
        }
        let todo = statuses
            .into_iter()
            .filter(|status| status.applied == (direction == Direction::Down))
            .map(|status| status.migration)
            .take(cnt.unwrap_or(usize::MAX))
            .collect::<Vec<_>>();

        let mut done = Vec::with_capacity(todo.len());
        for migration in todo {
            let (script, bookkeeping) = match direction {
                Direction::Up => (migration.up, "insert into _migrations (name) values ($1)"),
                Direction::Down => (migration.down, "delete from _migrations where name = $1"),
            };

            let txn = conn
                .transaction()
                .await
                .context("Failed to begin transaction")?;
            txn.batch_execute(script)
                .await
                .with_context(|| format!("Failed to {direction} migration {}", migration.name))?;
            txn.execute(bookkeeping, &[&migration.name])
                .await
                .with_context(|| format!("Failed to record migration {}", migration.name))?;
            txn.commit().await.context("Failed to commit transaction")?;

            done.push(migration.name);
        }

        Ok(done)
    }

    /// Drops every table, including the migration bookkeeping.
    pub async fn reset(&self) -> anyhow::Result<()> {
        self.execute("drop schema public cascade; create schema public;")
            .await
            .context("Failed to drop and recreate schema public")
    }

    pub async fn execute(&self, query: &str) -> anyhow::Result<()> {
        self.connection()
            .await?
            .batch_execute(query)
            .await
            .context("Failed to execute query")
    }
}

impl Database for PostgresDatabase {
    type Transaction = PostgresTransaction;

    async fn begin_transaction(&self) -> anyhow::Result<Self::Transaction> {
        trace!("Begin transaction");

        let conn = self
            .pool
            .get_owned()
            .await
            .context("Failed to acquire database connection")?;

        PostgresTransactionAsyncSendTryBuilder {
            conn,
            txn_builder: |conn| Box::pin(async move { conn.transaction().await.map(Some) }),
        }
        .try_build()
        .await
        .context("Failed to begin transaction")
    }

    #[trace_instrument(skip(self))]
    async fn ping(&self) -> anyhow::Result<()> {
        let conn = self.connection().await?;
        let res: i32 = conn
            .query_one("select 1", &[])
            .await
            .context("Failed to ping database")?
            .get(0);

        (res == 1)
            .then_some(())
            .ok_or_else(|| anyhow!("Expected a result of 1, got {res} instead"))
    }
}

/// A transaction that owns its pooled connection.
///
/// The connection returns to the pool when the transaction is dropped,
/// whether or not it was committed.
#[self_referencing]
pub struct PostgresTransaction {
    conn: PgPooledConnection,
    #[borrows(mut conn)]
    #[covariant]
    txn: Option<PgTransaction<'this>>,
}

impl PostgresTransaction {
    fn txn(&self) -> anyhow::Result<&PgTransaction<'_>> {
        self.borrow_txn()
            .as_ref()
            .ok_or_else(|| anyhow!("Transaction has already been finished"))
    }

    fn finish(&mut self) -> anyhow::Result<PgTransaction<'_>> {
        self.with_txn_mut(|txn| txn.take())
            .ok_or_else(|| anyhow!("Transaction has already been finished"))
    }
}

impl Transaction for PostgresTransaction {
    async fn commit(mut self) -> anyhow::Result<()> {
        trace!("Commit transaction");

        self.finish()?
            .commit()
            .await
            .context("Failed to commit transaction")
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Migration {
    pub name: &'static str,
    pub up: &'static str,
    pub down: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct MigrationStatus {
    pub migration: Migration,
    pub applied: bool,
}

// generated by `build.rs`
pub const MIGRATIONS: &[Migration] = include!(env!("MIGRATIONS"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Up,
    Down,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Up => "apply",
            Self::Down => "revert",
        })
    }
}

async fn create_migrations_table(conn: &PgClient) -> anyhow::Result<()> {
    conn.execute(
        "create table if not exists _migrations (name text primary key);",
        &[],
    )
    .await
    .context("Failed to create migrations table")?;
    Ok(())
}

async fn list_migrations(conn: &PgClient) -> anyhow::Result<Vec<MigrationStatus>> {
    let applied = conn
        .query("select name from _migrations;", &[])
        .await
        .context("Failed to list migrations")?
        .into_iter()
        .map(|row| row.get(0))
        .collect::<HashSet<String>>();

    Ok(MIGRATIONS
        .iter()
        .map(|&migration| MigrationStatus {
            migration,
            applied: applied.contains(migration.name),
        })
        .collect())
}

macro_rules! columns {
    ($vis:vis $ident:ident as $alias:literal: $fst:literal $(, $col:literal)* $(,)?) => {
        ::paste::paste! {
            #[allow(unused, reason = "usually not needed for views")]
            $vis const [< $ident:snake:upper _CNT >]: usize = [ $fst $(, $col)* ].len();
            $vis const [< $ident:snake:upper _COLS >]: &str = ::core::concat!( '"', $alias, "\".\"", $fst, '"' $(, ", \"" , $alias, "\".\"", $col, '"' )* );
            #[allow(unused, reason = "usually not needed for views")]
            $vis const [< $ident:snake:upper _COL_NAMES >]: &str = ::core::concat!( '"', $fst, '"' $(, ", \"", $col, '"' )* );
        }
    };
}
use columns;

/// Renders `$1, $2, ...` for the given parameter indices.
fn arg_indices(indices: impl IntoIterator<Item = usize>) -> String {
    indices
        .into_iter()
        .fold(String::new(), |mut out, idx| {
            if !out.is_empty() {
                out.push_str(", ");
            }
            let _ = write!(out, "${idx}");
            out
        })
}

#[derive(Debug, Default)]
struct ColumnCounter(usize);
impl ColumnCounter {
    fn idx(&mut self) -> usize {
        let idx = self.0;
        self.0 += 1;
        idx
    }
}
