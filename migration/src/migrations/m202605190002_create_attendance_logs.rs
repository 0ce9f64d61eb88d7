use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202605190002_create_attendance_logs"
    }
}

impl Migration {
    /// Timestamps are zone-aware so `DateTime<Utc>` decodes on every backend.
    pub fn table() -> TableCreateStatement {
        Table::create()
            .table(Alias::new("attendance_logs"))
            .if_not_exists()
            .col(
                ColumnDef::new(Alias::new("id"))
                    .big_integer()
                    .not_null()
                    .auto_increment()
                    .primary_key(),
            )
            .col(
                ColumnDef::new(Alias::new("attendee_id"))
                    .big_integer()
                    .not_null(),
            )
            .col(
                ColumnDef::new(Alias::new("attendee_name"))
                    .string()
                    .not_null(),
            )
            .col(ColumnDef::new(Alias::new("action")).string().not_null())
            .col(
                ColumnDef::new(Alias::new("timestamp"))
                    .timestamp_with_time_zone()
                    .not_null(),
            )
            .col(
                ColumnDef::new(Alias::new("created_at"))
                    .timestamp_with_time_zone()
                    .not_null()
                    .default(Expr::cust("CURRENT_TIMESTAMP")),
            )
            .foreign_key(
                ForeignKey::create()
                    .name("fk_att_log_attendee")
                    .from(Alias::new("attendance_logs"), Alias::new("attendee_id"))
                    .to(Alias::new("attendees"), Alias::new("id"))
                    .on_delete(ForeignKeyAction::Cascade)
                    .on_update(ForeignKeyAction::Cascade),
            )
            .to_owned()
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(Self::table())
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_att_log_attendee")
                    .table(Alias::new("attendance_logs"))
                    .col(Alias::new("attendee_id"))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alias::new("attendance_logs")).to_owned())
            .await
    }
}
