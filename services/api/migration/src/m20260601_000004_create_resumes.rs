use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Resumes::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Resumes::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Resumes::UserId).uuid().not_null())
                    .col(ColumnDef::new(Resumes::Title).string().not_null())
                    .col(ColumnDef::new(Resumes::Summary).text().not_null())
                    .col(
                        ColumnDef::new(Resumes::Status)
                            .string()
                            .not_null()
                            .default("APPLY"),
                    )
                    .col(
                        ColumnDef::new(Resumes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Resumes::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Resumes::Table, Resumes::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_resumes_user_id")
                    .table(Resumes::Table)
                    .col(Resumes::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Resumes::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Resumes {
    Table,
    Id,
    UserId,
    Title,
    Summary,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
