use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ResumeHistories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ResumeHistories::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ResumeHistories::ResumeId).uuid().not_null())
                    .col(ColumnDef::new(ResumeHistories::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(ResumeHistories::OldValue)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ResumeHistories::NewValue)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ResumeHistories::Reason).text().not_null())
                    .col(
                        ColumnDef::new(ResumeHistories::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ResumeHistories::Table, ResumeHistories::ResumeId)
                            .to(Resumes::Table, Resumes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ResumeHistories::Table, ResumeHistories::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_resume_histories_resume_id")
                    .table(ResumeHistories::Table)
                    .col(ResumeHistories::ResumeId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ResumeHistories::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum ResumeHistories {
    Table,
    Id,
    ResumeId,
    UserId,
    OldValue,
    NewValue,
    Reason,
    CreatedAt,
}

#[derive(Iden)]
enum Resumes {
    Table,
    Id,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
