use std::collections::BTreeMap;

use sqlx::postgres::{PgArguments, PgRow};
use sqlx::types::Json;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::catalog::{BindValue, PageWindow, ProductFilter, SortSpec};
use crate::database::manager::DatabaseError;
use crate::database::models::{NewProduct, Product, ProductImage, ProductPatch, Rating};

pub struct ProductRepository {
    pool: PgPool,
}

impl ProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetch one page of matching products together with the total match
    /// count. The page query and the count query run concurrently and are
    /// joined before returning.
    pub async fn list(
        &self,
        filter: &ProductFilter,
        sort: &SortSpec,
        window: &PageWindow,
    ) -> Result<(Vec<Product>, i64), DatabaseError> {
        let (where_sql, binds) = filter.to_where_sql(0);
        let order_sql = sort
            .to_order_sql()
            .map_err(|e| DatabaseError::QueryError(e.to_string()))?;

        let select_sql = format!(
            "SELECT * FROM products WHERE {} {} LIMIT {} OFFSET {}",
            where_sql,
            order_sql,
            window.limit,
            window.offset()
        );
        let count_sql = format!("SELECT COUNT(*) AS count FROM products WHERE {}", where_sql);

        let select_fut = async {
            let q = bind_values_as(sqlx::query_as::<_, Product>(&select_sql), &binds);
            q.fetch_all(&self.pool).await
        };
        let count_fut = async {
            let q = bind_values(sqlx::query(&count_sql), &binds);
            let row = q.fetch_one(&self.pool).await?;
            row.try_get::<i64, _>("count")
        };

        let (products, total) = tokio::join!(select_fut, count_fut);
        Ok((products?, total?))
    }

    /// Fetch by id regardless of the soft-delete flag; callers decide how
    /// to present inactive rows.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, DatabaseError> {
        let product = sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(product)
    }

    pub async fn sku_exists(&self, sku: &str) -> Result<bool, DatabaseError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM products WHERE sku = $1)")
                .bind(sku.to_uppercase())
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    pub async fn insert(&self, new: NewProduct) -> Result<Product, DatabaseError> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (
                id, name, description, price, category, brand, sku, stock,
                images, specifications, rating, is_active, weight, dimensions, tags,
                created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, TRUE, $12, $13, $14, now(), now())
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(new.name.trim().to_string())
        .bind(new.description)
        .bind(new.price)
        .bind(new.category)
        .bind(new.brand.map(|b| b.trim().to_string()))
        .bind(new.sku.to_uppercase())
        .bind(new.stock)
        .bind(Json(Vec::<ProductImage>::new()))
        .bind(Json(BTreeMap::<String, String>::new()))
        .bind(Json(Rating::default()))
        .bind(new.weight)
        .bind(new.dimensions.map(Json))
        .bind(new.tags)
        .fetch_one(&self.pool)
        .await?;
        Ok(product)
    }

    /// Partial update; absent fields keep their stored value. Matches rows
    /// regardless of is_active, as the original update path did.
    pub async fn update(
        &self,
        id: Uuid,
        patch: ProductPatch,
    ) -> Result<Option<Product>, DatabaseError> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            UPDATE products SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                price = COALESCE($4, price),
                category = COALESCE($5, category),
                brand = COALESCE($6, brand),
                sku = COALESCE($7, sku),
                stock = COALESCE($8, stock),
                weight = COALESCE($9, weight),
                dimensions = COALESCE($10, dimensions),
                tags = COALESCE($11, tags),
                updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(patch.name.map(|n| n.trim().to_string()))
        .bind(patch.description)
        .bind(patch.price)
        .bind(patch.category)
        .bind(patch.brand.map(|b| b.trim().to_string()))
        .bind(patch.sku.map(|s| s.to_uppercase()))
        .bind(patch.stock)
        .bind(patch.weight)
        .bind(patch.dimensions.map(Json))
        .bind(patch.tags)
        .fetch_optional(&self.pool)
        .await?;
        Ok(product)
    }

    pub async fn soft_delete(&self, id: Uuid) -> Result<Option<Product>, DatabaseError> {
        let product = sqlx::query_as::<_, Product>(
            "UPDATE products SET is_active = FALSE, updated_at = now() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(product)
    }
}

fn bind_values<'q>(
    mut q: sqlx::query::Query<'q, sqlx::Postgres, PgArguments>,
    values: &'q [BindValue],
) -> sqlx::query::Query<'q, sqlx::Postgres, PgArguments> {
    for v in values {
        q = match v {
            BindValue::Text(s) => q.bind(s.as_str()),
            BindValue::Number(d) => q.bind(*d),
        };
    }
    q
}

fn bind_values_as<'q, O>(
    mut q: sqlx::query::QueryAs<'q, sqlx::Postgres, O, PgArguments>,
    values: &'q [BindValue],
) -> sqlx::query::QueryAs<'q, sqlx::Postgres, O, PgArguments>
where
    O: for<'r> sqlx::FromRow<'r, PgRow>,
{
    for v in values {
        q = match v {
            BindValue::Text(s) => q.bind(s.as_str()),
            BindValue::Number(d) => q.bind(*d),
        };
    }
    q
}
