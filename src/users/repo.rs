use anyhow::Context;
use async_trait::async_trait;
use sqlx::PgPool;

use crate::users::repo_types::User;

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn create(&self, user: &User) -> anyhow::Result<()>;
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>>;
    async fn find_by_id(&self, id: &str) -> anyhow::Result<Option<User>>;
    /// Returns how many rows went away; 0 for an unknown id.
    async fn delete_by_id(&self, id: &str) -> anyhow::Result<u64>;
}

#[derive(Clone)]
pub struct PgUserStore {
    db: PgPool,
}

impl PgUserStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn create(&self, user: &User) -> anyhow::Result<()> {
        let mut conn = self.db.acquire().await.context("acquire connection")?;
        sqlx::query(
            r#"
            INSERT INTO UserCook (id, name, email, password, role)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(&user.id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password)
        .bind(user.role)
        .execute(&mut *conn)
        .await
        .context("insert user")?;
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>> {
        let mut conn = self.db.acquire().await.context("acquire connection")?;
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password, role
            FROM UserCook
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&mut *conn)
        .await
        .context("select user by email")?;
        Ok(user)
    }

    async fn find_by_id(&self, id: &str) -> anyhow::Result<Option<User>> {
        let mut conn = self.db.acquire().await.context("acquire connection")?;
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password, role
            FROM UserCook
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .context("select user by id")?;
        Ok(user)
    }

    async fn delete_by_id(&self, id: &str) -> anyhow::Result<u64> {
        let mut conn = self.db.acquire().await.context("acquire connection")?;
        let res = sqlx::query(r#"DELETE FROM UserCook WHERE id = $1"#)
            .bind(id)
            .execute(&mut *conn)
            .await
            .context("delete user")?;
        Ok(res.rows_affected())
    }
}
