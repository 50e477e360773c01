//! Narrow persistence interface for custom gradebook column data.
//!
//! Handlers and services never build datum queries themselves; they go through
//! `find_by_column_and_user`, `page_for_users`, `upsert` and `delete`.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    ModelTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use util::paginate::Pagination;

use crate::models::custom_gradebook_column_datum::{ActiveModel, Column, Entity, Model};

pub struct ColumnDatumRepository;

impl ColumnDatumRepository {
    pub async fn find_by_column_and_user(
        db: &DatabaseConnection,
        column_id: i64,
        user_id: i64,
    ) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::CustomGradebookColumnId.eq(column_id))
            .filter(Column::UserId.eq(user_id))
            .one(db)
            .await
    }

    /// One page of a column's data, restricted to `user_ids` and ordered by
    /// user. Returns the page together with the total number of matching rows.
    pub async fn page_for_users(
        db: &DatabaseConnection,
        column_id: i64,
        user_ids: &[i64],
        pagination: Pagination,
    ) -> Result<(Vec<Model>, u64), DbErr> {
        let paginator = Entity::find()
            .filter(Column::CustomGradebookColumnId.eq(column_id))
            .filter(Column::UserId.is_in(user_ids.iter().copied()))
            .order_by_asc(Column::UserId)
            .paginate(db, pagination.per_page);

        let total = paginator.num_items().await?;
        if pagination.page_index().saturating_mul(pagination.per_page) >= total {
            return Ok((Vec::new(), total));
        }

        let rows = paginator.fetch_page(pagination.page_index()).await?;
        Ok((rows, total))
    }

    /// Writes `content` for `(column_id, user_id)`.
    ///
    /// `existing` is the row previously returned by `find_by_column_and_user`;
    /// when it is `None` a new row is inserted, which fails on the unique index
    /// if a concurrent request inserted first.
    pub async fn upsert(
        db: &DatabaseConnection,
        existing: Option<Model>,
        column_id: i64,
        user_id: i64,
        content: &str,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        match existing {
            Some(datum) => {
                let mut active = datum.into_active_model();
                active.content = Set(content.to_owned());
                active.updated_at = Set(now);
                active.update(db).await
            }
            None => {
                ActiveModel {
                    custom_gradebook_column_id: Set(column_id),
                    user_id: Set(user_id),
                    content: Set(content.to_owned()),
                    created_at: Set(now),
                    updated_at: Set(now),
                    ..Default::default()
                }
                .insert(db)
                .await
            }
        }
    }

    pub async fn delete(db: &DatabaseConnection, datum: Model) -> Result<(), DbErr> {
        datum.delete(db).await.map(|_| ())
    }

    pub async fn count_for_column(db: &DatabaseConnection, column_id: i64) -> Result<u64, DbErr> {
        Entity::find()
            .filter(Column::CustomGradebookColumnId.eq(column_id))
            .count(db)
            .await
    }
}
