use sea_orm::entity::prelude::*;

/// Resume record. `status` holds the wire string of a pipeline state
/// (APPLY, INTERVIEW1, ...); it is only ever changed through the status
/// engine, which also appends to `resume_histories`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "resumes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub summary: String,
    pub status: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
    #[sea_orm(has_many = "super::resume_histories::Entity")]
    ResumeHistories,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::resume_histories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ResumeHistories.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
