use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Consultation {
    Table,
    Id,
    Source,
    ParentName,
    ChildName,
    ChildAge,
    Phone,
    Email,
    Program,
    Message,
    Handled,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(Consultation::Table)
                .if_not_exists()
                .col(ColumnDef::new(Consultation::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(Consultation::Source).string().not_null())
                .col(ColumnDef::new(Consultation::ParentName).string().not_null())
                .col(ColumnDef::new(Consultation::ChildName).string().null())
                .col(ColumnDef::new(Consultation::ChildAge).string().null())
                .col(ColumnDef::new(Consultation::Phone).string().not_null())
                .col(ColumnDef::new(Consultation::Email).string().null())
                .col(ColumnDef::new(Consultation::Program).string().null())
                .col(ColumnDef::new(Consultation::Message).text().null())
                .col(ColumnDef::new(Consultation::Handled).boolean().not_null().default(false))
                .col(ColumnDef::new(Consultation::CreatedAt).timestamp_with_time_zone().not_null())
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_consultation_created_at")
                .table(Consultation::Table)
                .col(Consultation::CreatedAt)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(Consultation::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}
