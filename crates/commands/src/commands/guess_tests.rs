//! Unit tests for the guess command

use std::sync::Arc;

use mockall::predicate::*;

use codebreaker_runtime::ServiceError;
use codebreaker_runtime::api_client::types;
use codebreaker_runtime::deps::{CodebreakerService, MessageStyle, UserInterface};

use crate::commands::guess::*;
use crate::palette::CodePointInfo;
use crate::test_helpers::*;

fn deps(
    ui: &Arc<TestUserInterface>,
    service: MockCodebreakerServiceMock,
) -> Arc<GuessDependencies> {
    Arc::new(GuessDependencies {
        ui: ui.clone() as Arc<dyn UserInterface>,
        service: Arc::new(service) as Arc<dyn CodebreakerService>,
        info: CodePointInfo::default(),
    })
}

#[tokio::test]
async fn test_wrong_guess_prints_score_and_board() {
    let ui = Arc::new(TestUserInterface::new());
    let mut service = MockCodebreakerServiceMock::new();
    service
        .expect_get_game()
        .with(eq("g-1"))
        .times(1)
        .returning(|_| Ok(test_game("g-1", "ABCD", 3, &[])));
    service
        .expect_submit_guess()
        .withf(|_, guess: &types::Guess| guess.text == "ABD")
        .times(1)
        .returning(|_, _| Ok(test_guess("q-1", "ABD", 1, 1, false)));

    execute_with_deps("g-1", "ABD", deps(&ui, service)).await.unwrap();

    let output = ui.plain_output();
    assert_eq!(output[0], "A B D   exact: 1  near: 1");
    assert!(ui.contains("1 guess"));
    assert!(ui.contains("[A] [B] [D]"));
    assert!(!ui.contains("Code broken"));
}

#[tokio::test]
async fn test_solution_reports_success() {
    let ui = Arc::new(TestUserInterface::new());
    let solution = test_guess("q-1", "CAB", 3, 0, true);
    let solved = test_game("g-1", "ABCD", 3, &[solution.clone()]);
    let mut service = MockCodebreakerServiceMock::new();
    let mut sequence = mockall::Sequence::new();
    service
        .expect_get_game()
        .times(1)
        .in_sequence(&mut sequence)
        .returning(|_| Ok(test_game("g-1", "ABCD", 3, &[])));
    service
        .expect_submit_guess()
        .times(1)
        .in_sequence(&mut sequence)
        .returning(move |_, _| Ok(solution.clone()));
    service
        .expect_get_game()
        .times(1)
        .in_sequence(&mut sequence)
        .returning(move |_| Ok(solved.clone()));

    execute_with_deps("g-1", "CAB", deps(&ui, service)).await.unwrap();

    assert!(ui.contains("(solved)"));
    assert!(
        ui.get_styled_output()
            .contains(&("✓ Code broken!".to_string(), MessageStyle::Success))
    );
}

#[tokio::test]
async fn test_invalid_guess_is_rejected_locally() {
    let ui = Arc::new(TestUserInterface::new());
    let mut service = MockCodebreakerServiceMock::new();
    service
        .expect_get_game()
        .times(1)
        .returning(|_| Ok(test_game("g-1", "ABCD", 3, &[])));

    let error = execute_with_deps("g-1", "XYZ", deps(&ui, service))
        .await
        .unwrap_err();

    assert_eq!(error.to_string(), "Failed to submit guess XYZ");
    assert_eq!(
        error.downcast_ref::<ServiceError>(),
        Some(&ServiceError::InvalidGuess("'X' is not one of ABCD".to_string()))
    );
}

#[tokio::test]
async fn test_unknown_game() {
    let ui = Arc::new(TestUserInterface::new());
    let mut service = MockCodebreakerServiceMock::new();
    service
        .expect_get_game()
        .times(1)
        .returning(|id| Err(ServiceError::NotFound(format!("game {id}"))));

    let error = execute_with_deps("g-9", "ABC", deps(&ui, service))
        .await
        .unwrap_err();

    assert_eq!(error.to_string(), "Failed to load game g-9");
}
