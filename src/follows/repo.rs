use anyhow::Context;
use async_trait::async_trait;
use sqlx::PgPool;

use crate::follows::repo_types::Follow;

#[async_trait]
pub trait FollowStore: Send + Sync {
    /// `false` when the pair already existed; the stored row is left as is.
    async fn create(&self, follow: &Follow) -> anyhow::Result<bool>;
    async fn find_by_id(&self, id: &str) -> anyhow::Result<Option<Follow>>;
    async fn delete(&self, follower_id: &str, following_id: &str) -> anyhow::Result<u64>;
}

#[derive(Clone)]
pub struct PgFollowStore {
    db: PgPool,
}

impl PgFollowStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FollowStore for PgFollowStore {
    async fn create(&self, follow: &Follow) -> anyhow::Result<bool> {
        let mut conn = self.db.acquire().await.context("acquire connection")?;
        let res = sqlx::query(
            r#"
            INSERT INTO Follow (id, follower_id, following_id)
            VALUES ($1, $2, $3)
            ON CONFLICT (follower_id, following_id) DO NOTHING
            "#,
        )
        .bind(&follow.id)
        .bind(&follow.follower_id)
        .bind(&follow.following_id)
        .execute(&mut *conn)
        .await
        .context("insert follow")?;
        Ok(res.rows_affected() == 1)
    }

    async fn find_by_id(&self, id: &str) -> anyhow::Result<Option<Follow>> {
        let mut conn = self.db.acquire().await.context("acquire connection")?;
        let follow = sqlx::query_as::<_, Follow>(
            r#"SELECT id, follower_id, following_id FROM Follow WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .context("select follow by id")?;
        Ok(follow)
    }

    async fn delete(&self, follower_id: &str, following_id: &str) -> anyhow::Result<u64> {
        let mut conn = self.db.acquire().await.context("acquire connection")?;
        let res = sqlx::query(
            r#"
            DELETE FROM Follow
            WHERE follower_id = $1 AND following_id = $2
            "#,
        )
        .bind(follower_id)
        .bind(following_id)
        .execute(&mut *conn)
        .await
        .context("delete follow")?;
        Ok(res.rows_affected())
    }
}
