//! MySQL sink: literal-valued batched INSERTs over mysql_async.

use async_trait::async_trait;
use mysql_async::prelude::*;
use mysql_async::Pool;
use rowforge_importer::{ImportError, Sink};

pub struct MySqlSink {
    pool: Pool,
}

impl MySqlSink {
    /// Open a pool for the DSN and ping once so connection problems
    /// surface before any generation work happens.
    pub async fn connect(dsn: &str) -> anyhow::Result<Self> {
        let pool = Pool::from_url(dsn)?;
        let mut conn = pool.get_conn().await?;
        conn.ping().await?;
        drop(conn);
        Ok(Self { pool })
    }

    /// Suspend foreign-key enforcement for the load.
    pub async fn disable_fk_checks(&self) -> anyhow::Result<()> {
        tracing::info!("disabling FK checks");
        let mut conn = self.pool.get_conn().await?;
        conn.query_drop("SET FOREIGN_KEY_CHECKS=0").await?;
        Ok(())
    }

    pub async fn enable_fk_checks(&self) -> anyhow::Result<()> {
        tracing::info!("enabling FK checks");
        let mut conn = self.pool.get_conn().await?;
        conn.query_drop("SET FOREIGN_KEY_CHECKS=1").await?;
        Ok(())
    }

    pub async fn disconnect(self) -> anyhow::Result<()> {
        self.pool.disconnect().await?;
        Ok(())
    }
}

#[async_trait]
impl Sink for MySqlSink {
    async fn insert_batch(
        &mut self,
        table: &str,
        columns: &[String],
        rows: &[String],
    ) -> Result<(), ImportError> {
        let sql = format!(
            "INSERT INTO {} ({}) VALUES {}",
            table,
            columns.join(","),
            rows.join(",")
        );
        let mut conn = self
            .pool
            .get_conn()
            .await
            .map_err(|e| ImportError::Sink(e.to_string()))?;
        conn.query_drop(sql)
            .await
            .map_err(|e| ImportError::Sink(e.to_string()))?;
        Ok(())
    }
}
