//! Unit tests for the delete command

use std::sync::Arc;

use mockall::predicate::*;

use codebreaker_runtime::ServiceError;
use codebreaker_runtime::deps::{CodebreakerService, MessageStyle, UserInterface};

use crate::commands::delete::*;
use crate::test_helpers::*;

fn deps(
    ui: &Arc<TestUserInterface>,
    service: MockCodebreakerServiceMock,
) -> Arc<DeleteDependencies> {
    Arc::new(DeleteDependencies {
        ui: ui.clone() as Arc<dyn UserInterface>,
        service: Arc::new(service) as Arc<dyn CodebreakerService>,
    })
}

#[tokio::test]
async fn test_delete_success() {
    let ui = Arc::new(TestUserInterface::new());
    let mut service = MockCodebreakerServiceMock::new();
    service
        .expect_delete_game()
        .with(eq("g-1"))
        .times(1)
        .returning(|_| Ok(()));

    execute_with_deps("g-1", deps(&ui, service)).await.unwrap();

    assert_eq!(
        ui.get_styled_output(),
        vec![("✓ Deleted game g-1".to_string(), MessageStyle::Success)]
    );
}

#[tokio::test]
async fn test_delete_missing_game() {
    let ui = Arc::new(TestUserInterface::new());
    let mut service = MockCodebreakerServiceMock::new();
    service
        .expect_delete_game()
        .times(1)
        .returning(|id| Err(ServiceError::NotFound(format!("game {id}"))));

    let error = execute_with_deps("gone", deps(&ui, service)).await.unwrap_err();

    assert_eq!(error.to_string(), "Failed to delete game gone");
    assert!(
        error
            .downcast_ref::<ServiceError>()
            .is_some_and(ServiceError::is_not_found)
    );
    assert!(ui.get_output().is_empty());
}
