use sea_orm::entity::prelude::*;

/// Account credential record: unique email plus bcrypt password hash.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::user_profiles::Entity")]
    UserProfile,
    #[sea_orm(has_one = "super::refresh_sessions::Entity")]
    RefreshSession,
    #[sea_orm(has_many = "super::resumes::Entity")]
    Resumes,
    #[sea_orm(has_many = "super::resume_histories::Entity")]
    ResumeHistories,
}

impl Related<super::user_profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserProfile.def()
    }
}

impl Related<super::refresh_sessions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RefreshSession.def()
    }
}

impl Related<super::resumes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Resumes.def()
    }
}

impl Related<super::resume_histories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ResumeHistories.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
