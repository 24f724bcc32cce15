//! Repositories for the `(id, title)` tables.
//!
//! States and the three category tables share one shape, so their
//! repositories are generated from a single definition.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::{AppError, AppResult, ServiceResult};
use crate::models::{Category, NewCategory, NewState, State};
use crate::repositories::mapper::{TitleRow, prefix_pattern};

/// Generate a repository over a table with `id` and `title` columns.
///
/// The generated type exposes the full repository surface:
/// `insert`, `get_all`, `get_by_id`, `get_by_title_prefix`, `update`,
/// `delete` and `delete_all`. Every public method classifies its failure
/// into a [`ServiceResult`].
macro_rules! title_repository {
    (
        $(#[$meta:meta])*
        $repo:ident {
            table: $table:ident,
            entity: $entity:ty,
            new: $new:ty,
            label: $label:literal $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone)]
        pub struct $repo {
            pool: AsyncDbPool,
        }

        impl $repo {
            pub fn new(pool: AsyncDbPool) -> Self {
                Self { pool }
            }

            pub async fn insert(&self, new: $new) -> ServiceResult<$entity> {
                ServiceResult::from_app_result(self.try_insert(new).await, concat!("insert ", $label))
            }

            /// Lists every row ordered by id.
            pub async fn get_all(&self) -> ServiceResult<Vec<$entity>> {
                ServiceResult::from_app_result(self.try_get_all().await, concat!("list ", $label))
            }

            pub async fn get_by_id(&self, id: i32) -> ServiceResult<Option<$entity>> {
                ServiceResult::from_app_result(
                    self.try_get_by_id(id).await,
                    concat!("get ", $label, " by id"),
                )
            }

            pub async fn get_by_title_prefix(&self, prefix: &str) -> ServiceResult<Vec<$entity>> {
                ServiceResult::from_app_result(
                    self.try_get_by_title_prefix(prefix).await,
                    concat!("get ", $label, " by title prefix"),
                )
            }

            pub async fn update(&self, id: i32, new: $new) -> ServiceResult<$entity> {
                ServiceResult::from_app_result(self.try_update(id, new).await, concat!("update ", $label))
            }

            pub async fn delete(&self, id: i32) -> ServiceResult<usize> {
                ServiceResult::from_app_result(self.try_delete(id).await, concat!("delete ", $label))
            }

            pub async fn delete_all(&self) -> ServiceResult<usize> {
                ServiceResult::from_app_result(self.try_delete_all().await, concat!("delete all ", $label))
            }

            async fn try_insert(&self, new: $new) -> AppResult<$entity> {
                use crate::schema::$table;
                let mut conn = self.pool.get().await?;

                let row: TitleRow = diesel::insert_into($table::table)
                    .values($table::title.eq(new.title))
                    .returning(($table::id, $table::title))
                    .get_result(&mut conn)
                    .await?;

                Ok(row.into())
            }

            async fn try_get_all(&self) -> AppResult<Vec<$entity>> {
                use crate::schema::$table;
                let mut conn = self.pool.get().await?;

                let rows: Vec<TitleRow> = $table::table
                    .select(($table::id, $table::title))
                    .order($table::id.asc())
                    .load(&mut conn)
                    .await?;

                Ok(rows.into_iter().map(<$entity>::from).collect())
            }

            async fn try_get_by_id(&self, id: i32) -> AppResult<Option<$entity>> {
                use crate::schema::$table;
                let mut conn = self.pool.get().await?;

                let row: Option<TitleRow> = $table::table
                    .find(id)
                    .select(($table::id, $table::title))
                    .first(&mut conn)
                    .await
                    .optional()?;

                Ok(row.map(<$entity>::from))
            }

            async fn try_get_by_title_prefix(&self, prefix: &str) -> AppResult<Vec<$entity>> {
                use crate::schema::$table;
                let pattern = prefix_pattern("title", prefix)?;
                let mut conn = self.pool.get().await?;

                let rows: Vec<TitleRow> = $table::table
                    .filter($table::title.like(pattern))
                    .select(($table::id, $table::title))
                    .order($table::id.asc())
                    .load(&mut conn)
                    .await?;

                Ok(rows.into_iter().map(<$entity>::from).collect())
            }

            async fn try_update(&self, id: i32, new: $new) -> AppResult<$entity> {
                use crate::schema::$table;
                let mut conn = self.pool.get().await?;

                let row: Option<TitleRow> = diesel::update($table::table.find(id))
                    .set($table::title.eq(new.title))
                    .returning(($table::id, $table::title))
                    .get_result(&mut conn)
                    .await
                    .optional()?;

                row.map(<$entity>::from)
                    .ok_or_else(|| AppError::not_found($label, id))
            }

            async fn try_delete(&self, id: i32) -> AppResult<usize> {
                use crate::schema::$table;
                let mut conn = self.pool.get().await?;

                let deleted = diesel::delete($table::table.find(id))
                    .execute(&mut conn)
                    .await?;
                Ok(deleted)
            }

            async fn try_delete_all(&self) -> AppResult<usize> {
                use crate::schema::$table;
                let mut conn = self.pool.get().await?;

                let deleted = diesel::delete($table::table).execute(&mut conn).await?;
                Ok(deleted)
            }
        }
    };
}

title_repository! {
    /// State repository. States are the root of the location hierarchy.
    StateRepository {
        table: states,
        entity: State,
        new: NewState,
        label: "state",
    }
}

title_repository! {
    SellerCategoryRepository {
        table: seller_categories,
        entity: Category,
        new: NewCategory,
        label: "seller category",
    }
}

title_repository! {
    ResultCategoryRepository {
        table: result_categories,
        entity: Category,
        new: NewCategory,
        label: "result category",
    }
}

title_repository! {
    FoodCategoryRepository {
        table: food_categories,
        entity: Category,
        new: NewCategory,
        label: "food category",
    }
}
