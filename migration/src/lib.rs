pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_user_table;
mod m20250301_000002_create_session_table;
mod m20250302_000001_create_notice_table;
mod m20250315_000001_create_consultation_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_user_table::Migration),
            Box::new(m20250301_000002_create_session_table::Migration),
            Box::new(m20250302_000001_create_notice_table::Migration),
            Box::new(m20250315_000001_create_consultation_table::Migration),
        ]
    }
}
