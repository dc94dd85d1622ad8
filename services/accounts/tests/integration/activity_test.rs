use uuid::Uuid;

use parley_accounts::domain::types::ActivityType;
use parley_accounts::error::AccountsServiceError;
use parley_accounts::usecase::activity_log::{
    CreateActivityLogUseCase, DeleteActivityLogUseCase, GetActivityLogUseCase,
    ListActivityLogsUseCase,
};

use crate::helpers::{MockActivityLogRepo, MockUserRepo, test_user};

#[tokio::test]
async fn should_record_activity_for_existing_user() {
    let alice = test_user("alice_99", "alice@example.com", "Secret1");
    let activity = MockActivityLogRepo::empty();
    let usecase = CreateActivityLogUseCase {
        activity: activity.clone(),
        users: MockUserRepo::new(vec![alice.clone()], vec![]),
    };

    let log = usecase.execute(alice.id, ActivityType::Login).await.unwrap();

    assert_eq!(log.user_id, alice.id);
    assert_eq!(log.activity_type, ActivityType::Login);
    assert_eq!(activity.stored().len(), 1);
}

#[tokio::test]
async fn should_reject_activity_for_unknown_user() {
    let activity = MockActivityLogRepo::empty();
    let usecase = CreateActivityLogUseCase {
        activity: activity.clone(),
        users: MockUserRepo::empty(),
    };

    let result = usecase.execute(Uuid::now_v7(), ActivityType::Login).await;

    assert!(matches!(
        result,
        Err(AccountsServiceError::ActivityLogMissingData)
    ));
    assert!(activity.stored().is_empty());
}

#[tokio::test]
async fn should_get_activity_entry_by_id() {
    let alice = test_user("alice_99", "alice@example.com", "Secret1");
    let activity = MockActivityLogRepo::empty();
    let create = CreateActivityLogUseCase {
        activity: activity.clone(),
        users: MockUserRepo::new(vec![alice.clone()], vec![]),
    };
    let log = create
        .execute(alice.id, ActivityType::ProfileUpdate)
        .await
        .unwrap();

    let get = GetActivityLogUseCase { activity };
    let found = get.execute(log.id).await.unwrap();
    assert_eq!(found.activity_type, ActivityType::ProfileUpdate);

    let result = get.execute(Uuid::now_v7()).await;
    assert!(matches!(
        result,
        Err(AccountsServiceError::ActivityLogNotFound)
    ));
}

#[tokio::test]
async fn should_delete_activity_entry_once() {
    let alice = test_user("alice_99", "alice@example.com", "Secret1");
    let activity = MockActivityLogRepo::empty();
    let create = CreateActivityLogUseCase {
        activity: activity.clone(),
        users: MockUserRepo::new(vec![alice.clone()], vec![]),
    };
    let log = create.execute(alice.id, ActivityType::Logout).await.unwrap();

    let delete = DeleteActivityLogUseCase {
        activity: activity.clone(),
    };
    delete.execute(log.id).await.unwrap();
    assert!(activity.stored().is_empty());

    let result = delete.execute(log.id).await;
    assert!(matches!(
        result,
        Err(AccountsServiceError::ActivityLogNotFound)
    ));
}

#[tokio::test]
async fn should_list_empty_history_without_error() {
    let alice = test_user("alice_99", "alice@example.com", "Secret1");
    let usecase = ListActivityLogsUseCase {
        activity: MockActivityLogRepo::empty(),
        users: MockUserRepo::new(vec![alice.clone()], vec![]),
    };

    let logs = usecase.execute(alice.id).await.unwrap();
    assert!(logs.is_empty());
}

#[tokio::test]
async fn should_fail_listing_history_of_unknown_user() {
    let usecase = ListActivityLogsUseCase {
        activity: MockActivityLogRepo::empty(),
        users: MockUserRepo::empty(),
    };
    let result = usecase.execute(Uuid::now_v7()).await;
    assert!(matches!(result, Err(AccountsServiceError::UserNotFound)));
}
