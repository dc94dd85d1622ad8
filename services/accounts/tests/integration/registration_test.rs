use parley_accounts::error::AccountsServiceError;
use parley_accounts::usecase::user::{
    DEFAULT_ROLE, RegisterUserInput, RegisterUserUseCase, verify_password,
};

use crate::helpers::{MockRoleRepo, MockUserRepo, test_role, test_user};

fn valid_input() -> RegisterUserInput {
    RegisterUserInput {
        login: "alice_99".to_owned(),
        password: "Secret1".to_owned(),
        confirm_password: "Secret1".to_owned(),
        firstname: "Alice".to_owned(),
        lastname: "Smith".to_owned(),
        email: "alice@example.com".to_owned(),
    }
}

#[tokio::test]
async fn should_register_user_with_default_role_and_hashed_password() {
    let users = MockUserRepo::empty();
    let roles = MockRoleRepo::new(vec![test_role(DEFAULT_ROLE)]);
    let usecase = RegisterUserUseCase {
        users: users.clone(),
        roles,
    };

    let registered = usecase.execute(valid_input()).await.unwrap();

    assert_eq!(registered.user.login, "alice_99");
    assert_eq!(registered.roles, vec![DEFAULT_ROLE.to_owned()]);
    assert!(registered.user.password_hash.starts_with("$argon2"));
    assert!(verify_password("Secret1", &registered.user.password_hash).unwrap());

    let stored = users.stored();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, registered.user.id);
}

#[tokio::test]
async fn should_reject_taken_login_and_write_nothing() {
    let existing = test_user("alice_99", "taken@example.com", "Other1");
    let users = MockUserRepo::new(vec![existing], vec![]);
    let usecase = RegisterUserUseCase {
        users: users.clone(),
        roles: MockRoleRepo::new(vec![test_role(DEFAULT_ROLE)]),
    };

    let result = usecase.execute(valid_input()).await;

    match result {
        Err(AccountsServiceError::Registration { source }) => {
            assert!(matches!(*source, AccountsServiceError::LoginAlreadyExists));
        }
        other => panic!("expected Registration(LoginAlreadyExists), got {other:?}"),
    }
    assert_eq!(users.stored().len(), 1, "no new row may be written");
}

#[tokio::test]
async fn should_reject_taken_email_and_write_nothing() {
    let existing = test_user("someone_else", "alice@example.com", "Other1");
    let users = MockUserRepo::new(vec![existing], vec![]);
    let usecase = RegisterUserUseCase {
        users: users.clone(),
        roles: MockRoleRepo::new(vec![test_role(DEFAULT_ROLE)]),
    };

    let result = usecase.execute(valid_input()).await;

    match result {
        Err(AccountsServiceError::Registration { source }) => {
            assert!(matches!(*source, AccountsServiceError::EmailAlreadyExists));
        }
        other => panic!("expected Registration(EmailAlreadyExists), got {other:?}"),
    }
    assert_eq!(users.stored().len(), 1);
}

#[tokio::test]
async fn should_reject_password_confirmation_mismatch() {
    let users = MockUserRepo::empty();
    let usecase = RegisterUserUseCase {
        users: users.clone(),
        roles: MockRoleRepo::new(vec![test_role(DEFAULT_ROLE)]),
    };

    let result = usecase
        .execute(RegisterUserInput {
            confirm_password: "Secret2".to_owned(),
            ..valid_input()
        })
        .await;

    match result {
        Err(AccountsServiceError::Registration { source }) => {
            assert!(matches!(
                *source,
                AccountsServiceError::PasswordsNotMatch(_)
            ));
        }
        other => panic!("expected Registration(PasswordsNotMatch), got {other:?}"),
    }
    assert!(users.stored().is_empty());
}

#[tokio::test]
async fn should_reject_invalid_fields_before_any_uniqueness_check() {
    let users = MockUserRepo::empty();
    let usecase = RegisterUserUseCase {
        users: users.clone(),
        roles: MockRoleRepo::new(vec![test_role(DEFAULT_ROLE)]),
    };

    // Login too short, firstname with a digit, email without a domain.
    let result = usecase
        .execute(RegisterUserInput {
            login: "ab".to_owned(),
            firstname: "A1ice".to_owned(),
            email: "alice@".to_owned(),
            ..valid_input()
        })
        .await;

    match result {
        Err(AccountsServiceError::Registration { source }) => match *source {
            AccountsServiceError::Validation(errors) => {
                assert!(errors.iter().any(|e| e.field == "login"));
                assert!(errors.iter().any(|e| e.field == "firstname"));
                assert!(errors.iter().any(|e| e.field == "email"));
            }
            other => panic!("expected Validation cause, got {other:?}"),
        },
        other => panic!("expected Registration(Validation), got {other:?}"),
    }
    assert!(users.stored().is_empty());
}

#[tokio::test]
async fn should_allow_login_of_soft_deleted_account() {
    use parley_accounts::domain::types::Status;

    let mut deleted = test_user("alice_99", "gone@example.com", "Other1");
    deleted.status = Status::Deleted;
    let users = MockUserRepo::new(vec![deleted], vec![]);
    let usecase = RegisterUserUseCase {
        users: users.clone(),
        roles: MockRoleRepo::new(vec![test_role(DEFAULT_ROLE)]),
    };

    let registered = usecase.execute(valid_input()).await.unwrap();

    assert_eq!(registered.user.login, "alice_99");
    assert_eq!(users.stored().len(), 2);
}

#[tokio::test]
async fn should_treat_missing_default_role_as_internal_error() {
    let users = MockUserRepo::empty();
    let usecase = RegisterUserUseCase {
        users: users.clone(),
        roles: MockRoleRepo::empty(),
    };

    // An unseeded database is a deployment fault, not a client mistake.
    let result = usecase.execute(valid_input()).await;
    assert!(matches!(result, Err(AccountsServiceError::Internal(_))));
    assert!(users.stored().is_empty());
}
