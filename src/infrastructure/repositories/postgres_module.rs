// src/infrastructure/repositories/postgres_module.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::module::{
    Module, ModuleDeletion, ModuleDescription, ModuleId, ModuleName, ModulePlacement,
    ModuleReadRepository, ModuleUpdate, ModuleWriteRepository, NewModule,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder, Transaction};

const MODULE_COLUMNS: &str =
    "id, name, description, parent_id, sort_order, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresModuleWriteRepository {
    pool: PgPool,
}

impl PostgresModuleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresModuleReadRepository {
    pool: PgPool,
}

impl PostgresModuleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ModuleRow {
    id: i64,
    name: String,
    description: Option<String>,
    parent_id: Option<i64>,
    sort_order: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ModuleRow> for Module {
    type Error = DomainError;

    fn try_from(row: ModuleRow) -> Result<Self, Self::Error> {
        Ok(Module {
            id: ModuleId::new(row.id)?,
            name: ModuleName::new(row.name)?,
            description: ModuleDescription::parse(row.description),
            parent_id: row.parent_id.map(ModuleId::new).transpose()?,
            order: row.sort_order,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

async fn write_placement(
    tx: &mut Transaction<'_, Postgres>,
    placement: &ModulePlacement,
) -> DomainResult<()> {
    let result = sqlx::query("UPDATE modules SET parent_id = $1, sort_order = $2 WHERE id = $3")
        .bind(placement.parent_id.map(i64::from))
        .bind(placement.order)
        .bind(i64::from(placement.id))
        .execute(&mut **tx)
        .await
        .map_err(map_sqlx)?;

    if result.rows_affected() == 0 {
        return Err(DomainError::NotFound(format!(
            "module {} not found",
            placement.id
        )));
    }
    Ok(())
}

#[async_trait]
impl ModuleWriteRepository for PostgresModuleWriteRepository {
    async fn insert(&self, module: NewModule) -> DomainResult<Module> {
        let NewModule {
            name,
            description,
            parent_id,
            order,
            created_at,
            updated_at,
        } = module;

        let row = sqlx::query_as::<_, ModuleRow>(&format!(
            "INSERT INTO modules (name, description, parent_id, sort_order, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {MODULE_COLUMNS}"
        ))
        .bind(name.as_str())
        .bind(description.map(ModuleDescription::into_inner))
        .bind(parent_id.map(i64::from))
        .bind(order)
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Module::try_from(row)
    }

    async fn update(&self, update: ModuleUpdate) -> DomainResult<Module> {
        let ModuleUpdate {
            id,
            name,
            description,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE modules SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(name) = name {
            builder.push(", name = ");
            builder.push_bind(name.into_inner());
        }

        if let Some(description) = description {
            builder.push(", description = ");
            builder.push_bind(description.map(ModuleDescription::into_inner));
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" RETURNING ");
        builder.push(MODULE_COLUMNS);

        let row = builder
            .build_query_as::<ModuleRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("module not found".into()))?;

        Module::try_from(row)
    }

    async fn apply_placements(&self, placements: Vec<ModulePlacement>) -> DomainResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;
        for placement in &placements {
            write_placement(&mut tx, placement).await?;
        }
        tx.commit().await.map_err(map_sqlx)
    }

    async fn delete(&self, deletion: ModuleDeletion) -> DomainResult<()> {
        let ModuleDeletion {
            removed,
            reparented,
        } = deletion;
        let removed_ids: Vec<i64> = removed.iter().copied().map(i64::from).collect();

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        for placement in &reparented {
            write_placement(&mut tx, placement).await?;
        }

        sqlx::query("DELETE FROM articles WHERE module_id = ANY($1)")
            .bind(&removed_ids)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        let result = sqlx::query("DELETE FROM modules WHERE id = ANY($1)")
            .bind(&removed_ids)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() != removed_ids.len() as u64 {
            return Err(DomainError::NotFound("module not found".into()));
        }

        tx.commit().await.map_err(map_sqlx)
    }
}

#[async_trait]
impl ModuleReadRepository for PostgresModuleReadRepository {
    async fn find_by_id(&self, id: ModuleId) -> DomainResult<Option<Module>> {
        let row = sqlx::query_as::<_, ModuleRow>(&format!(
            "SELECT {MODULE_COLUMNS} FROM modules WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Module::try_from).transpose()
    }

    async fn list_children(&self, parent: Option<ModuleId>) -> DomainResult<Vec<Module>> {
        let rows = sqlx::query_as::<_, ModuleRow>(&format!(
            "SELECT {MODULE_COLUMNS} FROM modules
             WHERE parent_id IS NOT DISTINCT FROM $1
             ORDER BY sort_order ASC, id ASC"
        ))
        .bind(parent.map(i64::from))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Module::try_from).collect()
    }

    async fn list_all(&self) -> DomainResult<Vec<Module>> {
        let rows = sqlx::query_as::<_, ModuleRow>(&format!(
            "SELECT {MODULE_COLUMNS} FROM modules ORDER BY sort_order ASC, id ASC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Module::try_from).collect()
    }
}
