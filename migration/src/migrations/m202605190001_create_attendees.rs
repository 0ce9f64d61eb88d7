use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202605190001_create_attendees"
    }
}

impl Migration {
    /// Timestamps are zone-aware so `DateTime<Utc>` decodes on every backend.
    pub fn table() -> TableCreateStatement {
        Table::create()
            .table(Alias::new("attendees"))
            .if_not_exists()
            .col(
                ColumnDef::new(Alias::new("id"))
                    .big_integer()
                    .not_null()
                    .auto_increment()
                    .primary_key(),
            )
            .col(ColumnDef::new(Alias::new("name")).string().not_null())
            .col(ColumnDef::new(Alias::new("email")).string().not_null())
            .col(
                ColumnDef::new(Alias::new("phone"))
                    .string()
                    .not_null()
                    .default(""),
            )
            .col(
                ColumnDef::new(Alias::new("gender"))
                    .string()
                    .not_null()
                    .default("other"),
            )
            .col(ColumnDef::new(Alias::new("region")).string().not_null())
            .col(
                ColumnDef::new(Alias::new("is_checked_in"))
                    .boolean()
                    .not_null()
                    .default(false),
            )
            .col(
                ColumnDef::new(Alias::new("is_checked_out"))
                    .boolean()
                    .not_null()
                    .default(false),
            )
            .col(
                ColumnDef::new(Alias::new("check_in_time"))
                    .timestamp_with_time_zone()
                    .null(),
            )
            .col(
                ColumnDef::new(Alias::new("check_out_time"))
                    .timestamp_with_time_zone()
                    .null(),
            )
            .col(
                ColumnDef::new(Alias::new("created_at"))
                    .timestamp_with_time_zone()
                    .not_null()
                    .default(Expr::cust("CURRENT_TIMESTAMP")),
            )
            .to_owned()
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(Self::table())
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alias::new("attendees")).to_owned())
            .await
    }
}
