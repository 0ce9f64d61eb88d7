use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::QueryOrder;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// One check-in or check-out event, as stored in the `attendance_logs` table.
/// Rows are append-only.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "attendance_logs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub attendee_id: i64,
    /// Attendee name at the time the entry was written.
    pub attendee_name: String,
    pub action: LogAction,
    pub timestamp: DateTime<Utc>,
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
#[serde(rename_all = "snake_case")]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum LogAction {
    #[sea_orm(string_value = "check_in")]
    CheckIn,

    #[sea_orm(string_value = "check_out")]
    CheckOut,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::attendee::Entity",
        from = "Column::AttendeeId",
        to = "super::attendee::Column::Id",
        on_delete = "Cascade"
    )]
    Attendee,
}

impl Related<super::attendee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Attendee.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(
        db: &DbConn,
        attendee_id: i64,
        attendee_name: &str,
        action: LogAction,
        timestamp: DateTime<Utc>,
    ) -> Result<Model, DbErr> {
        let log = ActiveModel {
            attendee_id: Set(attendee_id),
            attendee_name: Set(attendee_name.to_owned()),
            action: Set(action),
            timestamp: Set(timestamp),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        log.insert(db).await
    }

    /// All entries, newest first.
    pub async fn find_all(db: &DbConn) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .order_by_desc(Column::Timestamp)
            .order_by_desc(Column::Id)
            .all(db)
            .await
    }

    /// Entries for one attendee, newest first.
    pub async fn find_by_attendee(db: &DbConn, attendee_id: i64) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::AttendeeId.eq(attendee_id))
            .order_by_desc(Column::Timestamp)
            .order_by_desc(Column::Id)
            .all(db)
            .await
    }
}
