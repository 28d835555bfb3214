mod common;

use std::sync::Arc;

use auth::PasswordHasher;
use session_service::domain::auth::errors::AuthError;
use session_service::domain::auth::models::AuthSettings;
use session_service::domain::auth::service::AuthService;
use session_service::domain::user::models::EmailAddress;
use session_service::domain::user::models::User;
use session_service::domain::user::models::UserId;
use session_service::outbound::repositories::InMemoryCredentialStore;
use session_service::AuthServicePort;
use session_service::CredentialStore;

async fn seeded_service() -> (AuthService<InMemoryCredentialStore>, User) {
    let store = InMemoryCredentialStore::new();
    let user = User {
        id: UserId::new(),
        email: EmailAddress::new("a@x.com".to_string()).unwrap(),
        password_hash: PasswordHasher::new().hash("secret").unwrap(),
    };
    store.insert_user(user.clone()).await;

    let service = AuthService::new(Arc::new(store), common::codec(), AuthSettings::default());
    (service, user)
}

#[tokio::test]
async fn test_login_resolve_revoke_resolve() {
    let (service, user) = seeded_service().await;

    let token = service.login("a@x.com", "secret").await.unwrap();
    assert!(!token.access_token.is_empty());
    assert_eq!(token.token_type, "bearer");

    assert_eq!(
        service.login("a@x.com", "wrong").await,
        Err(AuthError::InvalidCredentials)
    );

    let resolved = service.resolve(&token.access_token).await.unwrap();
    assert_eq!(resolved, user);

    service.revoke(&token.access_token, &resolved).await.unwrap();

    assert_eq!(
        service.resolve(&token.access_token).await,
        Err(AuthError::ExpiredToken)
    );
}

#[tokio::test]
async fn test_revoke_twice_is_harmless() {
    let (service, user) = seeded_service().await;
    let token = service.login("a@x.com", "secret").await.unwrap();

    assert_eq!(service.revoke(&token.access_token, &user).await, Ok(()));
    assert_eq!(service.revoke(&token.access_token, &user).await, Ok(()));

    assert_eq!(
        service.resolve(&token.access_token).await,
        Err(AuthError::ExpiredToken)
    );
}

#[tokio::test]
async fn test_revoke_for_unknown_user() {
    let (service, _) = seeded_service().await;
    let stranger = User {
        id: UserId::new(),
        email: EmailAddress::new("stranger@x.com".to_string()).unwrap(),
        password_hash: String::new(),
    };

    let result = service.revoke("some.token.value", &stranger).await;

    assert!(matches!(result, Err(AuthError::NotFound(_))));
}

#[tokio::test]
async fn test_concurrent_logins_resolve_independently() {
    let (service, user) = seeded_service().await;
    let service = Arc::new(service);

    let mut handles = Vec::new();
    for _ in 0..8 {
        let service = Arc::clone(&service);
        handles.push(tokio::spawn(async move {
            let token = service.login("a@x.com", "secret").await?;
            service.resolve(&token.access_token).await
        }));
    }

    for handle in handles {
        assert_eq!(handle.await.unwrap(), Ok(user.clone()));
    }
}

#[tokio::test]
async fn test_legacy_hash_is_replaced_after_login() {
    let store = InMemoryCredentialStore::new();
    store
        .insert_user(User {
            id: UserId::new(),
            email: EmailAddress::new("old@x.com".to_string()).unwrap(),
            password_hash: bcrypt::hash("secret", 4).unwrap(),
        })
        .await;

    let service = AuthService::new(
        Arc::new(store.clone()),
        common::codec(),
        AuthSettings::default(),
    );

    service.login("old@x.com", "secret").await.unwrap();

    let stored = store.find_user_by_email("old@x.com").await.unwrap().unwrap();
    assert!(stored.password_hash.starts_with("$argon2id$"));

    // The upgraded hash still accepts the same password
    service.login("old@x.com", "secret").await.unwrap();
}
