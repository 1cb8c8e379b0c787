//! `PostgreSQL` repository implementation for categories.

use super::{
    models::{CategoryRow, DeletionChangeset, NewCategoryRow},
    schema::categories,
};
use crate::category::{
    domain::{Category, CategoryId, CategoryName, PersistedCategoryData},
    ports::{CategoryRepository, CategoryRepositoryError, CategoryRepositoryResult},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by category adapters.
pub type CategoryPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed category repository.
#[derive(Debug, Clone)]
pub struct PostgresCategoryRepository {
    pool: CategoryPgPool,
}

/// Which rows a listing query returns.
#[derive(Debug, Clone, Copy)]
enum Scope {
    Active,
    Deleted,
    All,
}

impl PostgresCategoryRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: CategoryPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> CategoryRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> CategoryRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(CategoryRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(CategoryRepositoryError::persistence)?
    }

    async fn list(&self, scope: Scope) -> CategoryRepositoryResult<Vec<Category>> {
        self.run_blocking(move |connection| {
            let mut query = categories::table
                .select(CategoryRow::as_select())
                .order((categories::created_at.asc(), categories::id.asc()))
                .into_boxed();
            query = match scope {
                Scope::Active => query.filter(categories::is_deleted.eq(false)),
                Scope::Deleted => query.filter(categories::is_deleted.eq(true)),
                Scope::All => query,
            };
            let rows = query
                .load::<CategoryRow>(connection)
                .map_err(CategoryRepositoryError::persistence)?;
            rows.into_iter().map(row_to_category).collect()
        })
        .await
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn store(&self, category: &Category) -> CategoryRepositoryResult<()> {
        let category_id = category.id();
        let name = category.name().clone();
        let new_row = to_new_row(category);

        self.run_blocking(move |connection| {
            diesel::insert_into(categories::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| map_write_error(err, category_id, &name))?;
            Ok(())
        })
        .await
    }

    async fn update(&self, category: &Category) -> CategoryRepositoryResult<()> {
        let category_id = category.id();
        let name = category.name().clone();
        let updated_at = category.updated_at();

        self.run_blocking(move |connection| {
            let updated_count = diesel::update(
                categories::table.filter(categories::id.eq(category_id.into_inner())),
            )
            .set((
                categories::name.eq(name.as_str()),
                categories::updated_at.eq(updated_at),
            ))
            .execute(connection)
            .map_err(|err| map_write_error(err, category_id, &name))?;

            if updated_count == 0 {
                return Err(CategoryRepositoryError::NotFound(category_id));
            }
            Ok(())
        })
        .await
    }

    async fn set_deleted_at(
        &self,
        id: CategoryId,
        deleted_at: Option<DateTime<Utc>>,
    ) -> CategoryRepositoryResult<()> {
        let changeset = DeletionChangeset {
            is_deleted: deleted_at.is_some(),
            deleted_at,
        };
        self.run_blocking(move |connection| {
            let updated_count =
                diesel::update(categories::table.filter(categories::id.eq(id.into_inner())))
                    .set(&changeset)
                    .execute(connection)
                    .map_err(CategoryRepositoryError::persistence)?;
            if updated_count == 0 {
                return Err(CategoryRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn find_active(&self, id: CategoryId) -> CategoryRepositoryResult<Option<Category>> {
        self.run_blocking(move |connection| {
            let row = categories::table
                .filter(categories::id.eq(id.into_inner()))
                .filter(categories::is_deleted.eq(false))
                .select(CategoryRow::as_select())
                .first::<CategoryRow>(connection)
                .optional()
                .map_err(CategoryRepositoryError::persistence)?;
            row.map(row_to_category).transpose()
        })
        .await
    }

    async fn find_any(&self, id: CategoryId) -> CategoryRepositoryResult<Option<Category>> {
        self.run_blocking(move |connection| {
            let row = categories::table
                .filter(categories::id.eq(id.into_inner()))
                .select(CategoryRow::as_select())
                .first::<CategoryRow>(connection)
                .optional()
                .map_err(CategoryRepositoryError::persistence)?;
            row.map(row_to_category).transpose()
        })
        .await
    }

    async fn find_by_name_any(
        &self,
        name: &CategoryName,
    ) -> CategoryRepositoryResult<Option<Category>> {
        let lookup = name.as_str().to_owned();
        self.run_blocking(move |connection| {
            let row = categories::table
                .filter(categories::name.eq(&lookup))
                .select(CategoryRow::as_select())
                .first::<CategoryRow>(connection)
                .optional()
                .map_err(CategoryRepositoryError::persistence)?;
            row.map(row_to_category).transpose()
        })
        .await
    }

    async fn list_active(&self) -> CategoryRepositoryResult<Vec<Category>> {
        self.list(Scope::Active).await
    }

    async fn list_deleted(&self) -> CategoryRepositoryResult<Vec<Category>> {
        self.list(Scope::Deleted).await
    }

    async fn list_all(&self) -> CategoryRepositoryResult<Vec<Category>> {
        self.list(Scope::All).await
    }

    async fn hard_delete(&self, id: CategoryId) -> CategoryRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let deleted_count =
                diesel::delete(categories::table.filter(categories::id.eq(id.into_inner())))
                    .execute(connection)
                    .map_err(CategoryRepositoryError::persistence)?;
            if deleted_count == 0 {
                return Err(CategoryRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }
}

fn map_write_error(
    err: DieselError,
    category_id: CategoryId,
    name: &CategoryName,
) -> CategoryRepositoryError {
    match err {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, ref info)
            if is_name_unique_violation(info.as_ref()) =>
        {
            CategoryRepositoryError::DuplicateCategoryName(name.clone())
        }
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            CategoryRepositoryError::DuplicateCategory(category_id)
        }
        _ => CategoryRepositoryError::persistence(err),
    }
}

fn to_new_row(category: &Category) -> NewCategoryRow {
    NewCategoryRow {
        id: category.id().into_inner(),
        name: category.name().as_str().to_owned(),
        is_deleted: category.is_deleted(),
        deleted_at: category.deleted_at(),
        created_at: category.created_at(),
        updated_at: category.updated_at(),
    }
}

fn row_to_category(row: CategoryRow) -> CategoryRepositoryResult<Category> {
    let CategoryRow {
        id,
        name,
        is_deleted,
        deleted_at,
        created_at,
        updated_at,
    } = row;

    if is_deleted != deleted_at.is_some() {
        return Err(CategoryRepositoryError::persistence(std::io::Error::other(
            format!("category {id} has inconsistent deletion columns"),
        )));
    }

    let data = PersistedCategoryData {
        id: CategoryId::from_uuid(id),
        name: CategoryName::new(name).map_err(CategoryRepositoryError::persistence)?,
        deleted_at,
        created_at,
        updated_at,
    };
    Ok(Category::from_persisted(data))
}

fn is_name_unique_violation(info: &dyn DatabaseErrorInformation) -> bool {
    info.constraint_name()
        .is_some_and(|name| name == "idx_categories_name_unique")
}
