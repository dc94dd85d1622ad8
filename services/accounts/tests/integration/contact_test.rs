use uuid::Uuid;

use parley_accounts::domain::types::ActivityType;
use parley_accounts::error::AccountsServiceError;
use parley_accounts::usecase::contact::{
    ContactExistsUseCase, CreateContactUseCase, DeleteContactUseCase, ListContactsUseCase,
};

use crate::helpers::{MockActivityLogRepo, MockContactRepo, MockUserRepo, test_contact, test_user};

#[tokio::test]
async fn should_create_contact_and_log_activity() {
    let alice = test_user("alice_99", "alice@example.com", "Secret1");
    let bob = test_user("bob_01", "bob@example.com", "Secret2");
    let contacts = MockContactRepo::empty();
    let activity = MockActivityLogRepo::empty();
    let usecase = CreateContactUseCase {
        contacts: contacts.clone(),
        users: MockUserRepo::new(vec![alice.clone(), bob.clone()], vec![]),
        activity: activity.clone(),
    };

    let contact = usecase.execute(alice.id, bob.id).await.unwrap();

    assert_eq!(contact.user_id, alice.id);
    assert_eq!(contact.contact_user_id, bob.id);
    assert_eq!(contacts.stored().len(), 1);

    let logs = activity.stored();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].user_id, alice.id);
    assert_eq!(logs[0].activity_type, ActivityType::ContactCreation);
}

#[tokio::test]
async fn should_reject_duplicate_contact_pair() {
    let alice = test_user("alice_99", "alice@example.com", "Secret1");
    let bob = test_user("bob_01", "bob@example.com", "Secret2");
    let contacts = MockContactRepo::empty();
    let activity = MockActivityLogRepo::empty();
    let usecase = CreateContactUseCase {
        contacts: contacts.clone(),
        users: MockUserRepo::new(vec![alice.clone(), bob.clone()], vec![]),
        activity: activity.clone(),
    };

    usecase.execute(alice.id, bob.id).await.unwrap();
    let result = usecase.execute(alice.id, bob.id).await;

    assert!(matches!(
        result,
        Err(AccountsServiceError::ContactAlreadyExists)
    ));
    assert_eq!(contacts.stored().len(), 1);
    assert_eq!(activity.stored().len(), 1, "no second activity entry");
}

#[tokio::test]
async fn should_reject_contact_with_unknown_user() {
    let alice = test_user("alice_99", "alice@example.com", "Secret1");
    let usecase = CreateContactUseCase {
        contacts: MockContactRepo::empty(),
        users: MockUserRepo::new(vec![alice.clone()], vec![]),
        activity: MockActivityLogRepo::empty(),
    };

    let result = usecase.execute(alice.id, Uuid::now_v7()).await;
    assert!(matches!(result, Err(AccountsServiceError::UserNotFound)));
}

#[tokio::test]
async fn should_delete_contact_by_pair_and_log_activity() {
    let alice_id = Uuid::now_v7();
    let bob_id = Uuid::now_v7();
    let contacts = MockContactRepo::new(vec![test_contact(alice_id, bob_id)]);
    let activity = MockActivityLogRepo::empty();
    let usecase = DeleteContactUseCase {
        contacts: contacts.clone(),
        activity: activity.clone(),
    };

    usecase.by_users(alice_id, bob_id).await.unwrap();

    assert!(contacts.stored().is_empty());
    let logs = activity.stored();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].activity_type, ActivityType::ContactDeletion);

    // A second deletion of the same pair has nothing left to resolve.
    let result = usecase.by_users(alice_id, bob_id).await;
    assert!(matches!(result, Err(AccountsServiceError::ContactNotFound)));
}

#[tokio::test]
async fn should_fail_deleting_unknown_contact_id() {
    let usecase = DeleteContactUseCase {
        contacts: MockContactRepo::empty(),
        activity: MockActivityLogRepo::empty(),
    };
    let result = usecase.by_id(Uuid::now_v7()).await;
    assert!(matches!(result, Err(AccountsServiceError::ContactNotFound)));
}

#[tokio::test]
async fn should_report_contact_existence() {
    let alice_id = Uuid::now_v7();
    let bob_id = Uuid::now_v7();
    let usecase = ContactExistsUseCase {
        contacts: MockContactRepo::new(vec![test_contact(alice_id, bob_id)]),
    };

    assert!(usecase.execute(alice_id, bob_id).await.unwrap());
    // The edge is directional.
    assert!(!usecase.execute(bob_id, alice_id).await.unwrap());
}

#[tokio::test]
async fn should_list_only_own_contacts() {
    let alice = test_user("alice_99", "alice@example.com", "Secret1");
    let bob_id = Uuid::now_v7();
    let carol_id = Uuid::now_v7();
    let usecase = ListContactsUseCase {
        contacts: MockContactRepo::new(vec![
            test_contact(alice.id, bob_id),
            test_contact(alice.id, carol_id),
            test_contact(bob_id, alice.id),
        ]),
        users: MockUserRepo::new(vec![alice.clone()], vec![]),
    };

    let listed = usecase.execute(alice.id).await.unwrap();
    assert_eq!(listed.len(), 2);
    assert!(listed.iter().all(|c| c.user_id == alice.id));
}
