use super::DbPool;
use crate::errors::{IntoCore, StorageError};
use advisor_core::errors::{DatabaseError, Error, Result};
use diesel::SqliteConnection;
use log::debug;
use std::any::Any;
use tokio::sync::{mpsc, oneshot};

type Job<T> = Box<dyn FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static>;
type AnyBox = Box<dyn Any + Send + 'static>;
type Envelope = (Job<AnyBox>, oneshot::Sender<Result<AnyBox>>);

/// Handle for sending jobs to the writer actor.
#[derive(Clone)]
pub struct WriteHandle {
    tx: mpsc::Sender<Envelope>,
}

fn writer_gone() -> Error {
    Error::Database(DatabaseError::ConnectionFailed(
        "Database writer is no longer running".to_string(),
    ))
}

impl WriteHandle {
    /// Executes a database job on the writer actor's dedicated connection,
    /// inside an immediate transaction. Any error rolls the job back.
    pub async fn exec<F, T>(&self, job: F) -> Result<T>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static,
        T: Send + 'static + Any,
    {
        let (ret_tx, ret_rx) = oneshot::channel();

        self.tx
            .send((
                Box::new(move |c| job(c).map(|v| Box::new(v) as AnyBox)),
                ret_tx,
            ))
            .await
            .map_err(|_| writer_gone())?;

        let boxed = ret_rx.await.map_err(|_| writer_gone())??;
        boxed
            .downcast::<T>()
            .map(|v| *v)
            .map_err(|_| Error::Unexpected("Writer returned a value of the wrong type".to_string()))
    }
}

/// Spawns a background Tokio task that acts as the single writer to the database.
///
/// The actor owns one connection from the pool for its whole lifetime and
/// processes jobs serially. It stops once every [`WriteHandle`] is dropped.
pub fn spawn_writer(pool: DbPool) -> Result<WriteHandle> {
    let mut conn = pool.get().into_core()?;
    let (tx, mut rx) = mpsc::channel::<Envelope>(1024);

    tokio::spawn(async move {
        while let Some((job, reply_tx)) = rx.recv().await {
            let result: Result<AnyBox> = conn
                .immediate_transaction::<_, StorageError, _>(|c| job(c).map_err(StorageError::from))
                .map_err(Error::from);

            if let Err(e) = &result {
                debug!("Write job rolled back: {}", e);
            }
            // The requester may have gone away (timeout, cancellation).
            let _ = reply_tx.send(result);
        }
        debug!("Database writer stopped");
    });

    Ok(WriteHandle { tx })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, init, run_migrations};
    use advisor_core::ErrorKind;
    use diesel::connection::SimpleConnection;

    fn pool() -> (tempfile::TempDir, DbPool) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("writer.db");
        let path = path.to_str().unwrap();
        init(path).unwrap();
        let pool = create_pool(path).unwrap();
        run_migrations(&pool).unwrap();
        (dir, pool.as_ref().clone())
    }

    #[tokio::test]
    async fn exec_returns_job_value() {
        let (_dir, pool) = pool();
        let writer = spawn_writer(pool).unwrap();

        let value = writer.exec(|_conn| Ok(42_u32)).await.unwrap();
        assert_eq!(value, 42);
    }

    #[tokio::test]
    async fn failing_job_keeps_its_error_kind_and_rolls_back() {
        let (_dir, pool) = pool();
        let writer = spawn_writer(pool.clone()).unwrap();

        let err = writer
            .exec(|conn| -> Result<()> {
                conn.batch_execute(
                    "INSERT INTO advisor_profiles VALUES ('a', 'A', '123456789', NULL, NULL, 'Green')",
                )
                .map_err(StorageError::from)?;
                Err(Error::NotFound("gone".to_string()))
            })
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);

        let rows = writer
            .exec(|conn| -> Result<i64> {
                use crate::schema::advisor_profiles::dsl::*;
                use diesel::prelude::*;
                advisor_profiles.count().get_result(conn).into_core()
            })
            .await
            .unwrap();
        assert_eq!(rows, 0);
    }
}
