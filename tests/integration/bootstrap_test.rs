// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::setup_services;
use argon2::password_hash::{PasswordHash, PasswordVerifier};
use argon2::Argon2;
use chrono::Utc;
use newsdesk::domain::models::user::{AdminCredentials, UserRole};
use newsdesk::domain::repositories::rss_source_repository::SourceSeedOutcome;
use newsdesk::domain::repositories::user_repository::{AdminSeedOutcome, UserRepository};
use newsdesk::domain::services::bootstrap_service::BootstrapError;
use newsdesk::infrastructure::database::entities::user as user_entity;
use newsdesk::infrastructure::repositories::user_repo_impl::UserRepositoryImpl;
use newsdesk::utils::validators::ValidationError;
use sea_orm::{ActiveModelTrait, EntityTrait, NotSet, PaginatorTrait, Set};

fn verify_password(password: &str, hash: &str) -> bool {
    let parsed = PasswordHash::new(hash).unwrap();
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

fn credentials() -> AdminCredentials {
    AdminCredentials {
        email: "admin@easypeek.com".to_string(),
        username: "admin".to_string(),
        password: "admin123456".to_string(),
    }
}

#[tokio::test]
async fn test_admin_bootstrap_runs_once() {
    let ctx = setup_services().await;

    let first = ctx.bootstrap.seed_initial_admin(&credentials()).await.unwrap();
    let admin = match first {
        AdminSeedOutcome::Created(admin) => admin,
        other => panic!("expected a new admin, got {:?}", other),
    };
    assert_eq!(admin.role, UserRole::Admin);
    assert!(verify_password("admin123456", &admin.password_hash));

    let second = ctx.bootstrap.seed_initial_admin(&credentials()).await.unwrap();
    assert!(matches!(
        second,
        AdminSeedOutcome::Skipped { existing_admins: 1 }
    ));

    let accounts = user_entity::Entity::find()
        .count(ctx.db.db.as_ref())
        .await
        .unwrap();
    assert_eq!(accounts, 1);

    let users = UserRepositoryImpl::new(ctx.db.db.clone());
    let stored = users.find_by_username("admin").await.unwrap().unwrap();
    assert_eq!(stored.email, "admin@easypeek.com");
    assert!(verify_password("admin123456", &stored.password_hash));
    assert!(!verify_password("wrong-password1", &stored.password_hash));
    assert_eq!(users.count_by_role(UserRole::Admin).await.unwrap(), 1);
}

#[tokio::test]
async fn test_invalid_credentials_create_nothing() {
    let ctx = setup_services().await;

    let mut bad_email = credentials();
    bad_email.email = "not-an-email".to_string();
    let result = ctx.bootstrap.seed_initial_admin(&bad_email).await;
    assert!(matches!(
        result,
        Err(BootstrapError::Validation(ValidationError::InvalidEmail))
    ));

    let mut weak = credentials();
    weak.password = "onlyletters".to_string();
    assert!(matches!(
        ctx.bootstrap.seed_initial_admin(&weak).await,
        Err(BootstrapError::Validation(ValidationError::WeakPassword))
    ));

    let mut bad_name = credentials();
    bad_name.username = "no spaces allowed".to_string();
    assert!(matches!(
        ctx.bootstrap.seed_initial_admin(&bad_name).await,
        Err(BootstrapError::Validation(ValidationError::InvalidUsername))
    ));

    let accounts = user_entity::Entity::find()
        .count(ctx.db.db.as_ref())
        .await
        .unwrap();
    assert_eq!(accounts, 0);
}

#[tokio::test]
async fn test_taken_email_is_a_conflict() {
    let ctx = setup_services().await;
    let now = Utc::now().fixed_offset();
    user_entity::ActiveModel {
        id: NotSet,
        username: Set("reader".to_string()),
        email: Set("admin@easypeek.com".to_string()),
        password_hash: Set("x".to_string()),
        role: Set("user".to_string()),
        status: Set("active".to_string()),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(ctx.db.db.as_ref())
    .await
    .unwrap();

    let result = ctx.bootstrap.seed_initial_admin(&credentials()).await;

    assert!(matches!(result, Err(BootstrapError::Conflict(_))));
    let accounts = user_entity::Entity::find()
        .count(ctx.db.db.as_ref())
        .await
        .unwrap();
    assert_eq!(accounts, 1);
}

#[tokio::test]
async fn test_default_sources_seeded_once() {
    let ctx = setup_services().await;

    let report = ctx
        .bootstrap
        .seed_default_data(&credentials(), true)
        .await
        .unwrap();
    assert!(matches!(report.admin, AdminSeedOutcome::Created(_)));
    match report.sources {
        Some(SourceSeedOutcome::Created(sources)) => assert_eq!(sources.len(), 2),
        other => panic!("expected default sources, got {:?}", other),
    }

    let again = ctx.bootstrap.seed_rss_sources().await.unwrap();
    assert!(matches!(again, SourceSeedOutcome::Skipped { existing: 2 }));

    let sources = ctx.bootstrap.list_sources().await.unwrap();
    assert_eq!(sources.len(), 2);
    assert!(sources.iter().all(|s| s.is_active && s.update_freq == 60));
}
