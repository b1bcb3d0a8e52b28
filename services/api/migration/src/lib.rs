use sea_orm_migration::prelude::*;

mod m20260601_000001_create_users;
mod m20260601_000002_create_user_profiles;
mod m20260601_000003_create_refresh_sessions;
mod m20260601_000004_create_resumes;
mod m20260601_000005_create_resume_histories;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260601_000001_create_users::Migration),
            Box::new(m20260601_000002_create_user_profiles::Migration),
            Box::new(m20260601_000003_create_refresh_sessions::Migration),
            Box::new(m20260601_000004_create_resumes::Migration),
            Box::new(m20260601_000005_create_resume_histories::Migration),
        ]
    }
}
