use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::{QueryOrder, TransactionTrait};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::attendance_log;

/// A registered attendee, as stored in the `attendees` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "attendees")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub name: String,
    pub email: String,
    pub phone: String,
    pub gender: Gender,
    pub region: String,

    /// Set on the first check-in and never cleared.
    pub is_checked_in: bool,
    /// Set on the first check-out and never cleared.
    pub is_checked_out: bool,
    pub check_in_time: Option<DateTime<Utc>>,
    pub check_out_time: Option<DateTime<Utc>>,

    pub created_at: DateTime<Utc>,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    EnumIter,
    DeriveActiveEnum,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Gender {
    #[sea_orm(string_value = "male")]
    Male,

    #[sea_orm(string_value = "female")]
    Female,

    #[sea_orm(string_value = "other")]
    Other,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::attendance_log::Entity")]
    Logs,
}

impl Related<super::attendance_log::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Logs.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(
        db: &DbConn,
        name: &str,
        email: &str,
        phone: &str,
        gender: Gender,
        region: &str,
    ) -> Result<Model, DbErr> {
        let attendee = ActiveModel {
            name: Set(name.to_owned()),
            email: Set(email.to_owned()),
            phone: Set(phone.to_owned()),
            gender: Set(gender),
            region: Set(region.to_owned()),
            is_checked_in: Set(false),
            is_checked_out: Set(false),
            check_in_time: Set(None),
            check_out_time: Set(None),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        attendee.insert(db).await
    }

    pub async fn find_all(db: &DbConn) -> Result<Vec<Model>, DbErr> {
        Entity::find().order_by_asc(Column::Id).all(db).await
    }

    pub async fn find_by_id(db: &DbConn, id: i64) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    /// Flags the attendee as checked in at `at`. Check-out fields are untouched.
    ///
    /// Returns `None` if no attendee has this id.
    pub async fn mark_checked_in(
        db: &DbConn,
        id: i64,
        at: DateTime<Utc>,
    ) -> Result<Option<Model>, DbErr> {
        let Some(existing) = Self::find_by_id(db, id).await? else {
            return Ok(None);
        };

        let mut active: ActiveModel = existing.into();
        active.is_checked_in = Set(true);
        active.check_in_time = Set(Some(at));

        active.update(db).await.map(Some)
    }

    /// Flags the attendee as checked out at `at`. Check-in fields are untouched.
    ///
    /// Returns `None` if no attendee has this id.
    pub async fn mark_checked_out(
        db: &DbConn,
        id: i64,
        at: DateTime<Utc>,
    ) -> Result<Option<Model>, DbErr> {
        let Some(existing) = Self::find_by_id(db, id).await? else {
            return Ok(None);
        };

        let mut active: ActiveModel = existing.into();
        active.is_checked_out = Set(true);
        active.check_out_time = Set(Some(at));

        active.update(db).await.map(Some)
    }

    /// Deletes the attendee's log rows, then the attendee row, in one transaction.
    ///
    /// Returns `false` when no attendee row matched.
    pub async fn delete_with_logs(db: &DbConn, id: i64) -> Result<bool, DbErr> {
        let txn = db.begin().await?;

        attendance_log::Entity::delete_many()
            .filter(attendance_log::Column::AttendeeId.eq(id))
            .exec(&txn)
            .await?;
        let res = Entity::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;
        Ok(res.rows_affected > 0)
    }

    /// Clears both tables, logs first. Returns the number of attendees removed.
    pub async fn delete_all(db: &DbConn) -> Result<u64, DbErr> {
        let txn = db.begin().await?;

        attendance_log::Entity::delete_many().exec(&txn).await?;
        let res = Entity::delete_many().exec(&txn).await?;

        txn.commit().await?;
        Ok(res.rows_affected)
    }
}
