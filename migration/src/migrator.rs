use sea_orm_migration::prelude::*;

use crate::migrations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(migrations::m202605190001_create_attendees::Migration),
            Box::new(migrations::m202605190002_create_attendance_logs::Migration),
        ]
    }
}
