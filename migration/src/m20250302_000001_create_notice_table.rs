use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Notice {
    Table,
    Id,
    Title,
    Content,
    Category,
    Date,
    AuthorId,
    AuthorName,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(Notice::Table)
                .if_not_exists()
                .col(ColumnDef::new(Notice::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(Notice::Title).string().not_null())
                .col(ColumnDef::new(Notice::Content).text().not_null())
                .col(ColumnDef::new(Notice::Category).string().not_null())
                .col(ColumnDef::new(Notice::Date).string_len(10).not_null())
                .col(ColumnDef::new(Notice::AuthorId).uuid().not_null())
                .col(ColumnDef::new(Notice::AuthorName).string().not_null())
                .col(ColumnDef::new(Notice::CreatedAt).timestamp_with_time_zone().not_null())
                .col(ColumnDef::new(Notice::UpdatedAt).timestamp_with_time_zone().not_null())
                .to_owned(),
        ).await?;

        // Board listing: newest day first, optionally per category.
        m.create_index(
            Index::create()
                .name("idx_notice_category_date")
                .table(Notice::Table)
                .col(Notice::Category)
                .col(Notice::Date)
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_notice_date")
                .table(Notice::Table)
                .col(Notice::Date)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(Notice::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}
