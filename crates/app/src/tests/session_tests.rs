// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{FailingSave, create_test_session, fill_valid_form};
use crate::{AppError, DELETED_MESSAGE, Screen, Session, SessionConfig};
use registro::{CoreError, SAVE_FAILED_MESSAGE, SAVED_MESSAGE, VALIDATION_FAILED_MESSAGE};
use registro_domain::{Field, Lugar, StoredRecord, Tipo};
use registro_notice::{NoticeLog, Severity};
use registro_registry::{DeletionPrompt, RecordsView, RegistryError};

#[test]
fn test_session_seeds_samples_by_default() {
    let (session, log) = create_test_session(true);

    assert_eq!(session.screen(), Screen::Home);
    assert_eq!(session.records_view().total, 3);
    assert!(log.is_empty());
}

#[test]
fn test_session_without_samples_starts_empty() {
    let (session, _log) = create_test_session(false);

    let view: RecordsView = session.records_view();
    assert_eq!(view.total, 0);
    assert!(view.empty_state().is_some());
}

#[tokio::test(start_paused = true)]
async fn test_submit_appends_to_records() {
    let (mut session, log) = create_test_session(true);
    fill_valid_form(&mut session);
    session.select_tipo(Tipo::Agua).unwrap();
    session.select_lugar(Lugar::Afuera).unwrap();

    let stored: StoredRecord = session.submit().await.unwrap();

    assert_eq!(stored.id, 4);
    assert_eq!(stored.nombres, "Luis Paredes");
    assert_eq!(stored.cantidad, 5);
    assert_eq!(stored.tipo, Tipo::Agua);
    assert_eq!(stored.lugar, Lugar::Afuera);
    assert_eq!(session.records_view().total, 4);
    assert_eq!(session.engine().record().dni, "");
    assert_eq!(log.last().unwrap().message, SAVED_MESSAGE);
}

#[tokio::test(start_paused = true)]
async fn test_invalid_submit_adds_nothing() {
    let (mut session, log) = create_test_session(true);
    session.set_field(Field::Dni, "123").unwrap();

    let result: Result<StoredRecord, AppError> = session.submit().await;

    assert!(matches!(
        result,
        Err(AppError::Form(CoreError::ValidationFailed { .. }))
    ));
    assert_eq!(session.records_view().total, 3);
    assert_eq!(log.last().unwrap().message, VALIDATION_FAILED_MESSAGE);
}

#[tokio::test(start_paused = true)]
async fn test_failed_save_keeps_draft_and_list() {
    let log: NoticeLog = NoticeLog::new();
    let mut session: Session<NoticeLog, FailingSave> =
        Session::with_backend(SessionConfig::default(), log.clone(), FailingSave);
    fill_valid_form(&mut session);

    let result: Result<StoredRecord, AppError> = session.submit().await;

    assert!(matches!(
        result,
        Err(AppError::Form(CoreError::SaveFailed(_)))
    ));
    assert_eq!(session.records_view().total, 3);
    assert_eq!(session.engine().record().dni, "87654321");
    assert_eq!(log.last().unwrap().message, SAVE_FAILED_MESSAGE);
}

#[test]
fn test_form_actions_require_home_screen() {
    let (mut session, _log) = create_test_session(true);
    session.navigate(Screen::Registros);

    let result: Result<(), AppError> = session.set_field(Field::Dni, "12345678");

    assert_eq!(
        result,
        Err(AppError::WrongScreen {
            action: "set",
            required: Screen::Home,
            current: Screen::Registros,
        })
    );
    assert!(session.select_tipo(Tipo::Agua).is_err());
    assert!(session.select_lugar(Lugar::Afuera).is_err());
}

#[test]
fn test_draft_survives_navigation() {
    let (mut session, _log) = create_test_session(true);
    session.set_field(Field::Nombres, "Ana").unwrap();

    session.navigate(Screen::Registros);
    assert!(session.go_back());

    assert_eq!(session.screen(), Screen::Home);
    assert_eq!(session.engine().record().nombres, "Ana");
}

#[test]
fn test_deletion_flow_on_records_screen() {
    let (mut session, log) = create_test_session(true);
    session.navigate(Screen::Registros);

    let prompt: DeletionPrompt = session.request_deletion(1).unwrap();
    assert_eq!(
        prompt.message,
        "Are you sure you want to delete the record of Juan Pérez?"
    );
    assert!(log.is_empty());

    let removed: StoredRecord = session.confirm_deletion().unwrap();

    assert_eq!(removed.id, 1);
    assert_eq!(session.records_view().total, 2);
    let last = log.last().unwrap();
    assert_eq!(last.message, DELETED_MESSAGE);
    assert_eq!(last.severity, Severity::Success);
}

#[test]
fn test_cancelled_deletion_emits_nothing() {
    let (mut session, log) = create_test_session(true);
    session.navigate(Screen::Registros);
    session.request_deletion(2).unwrap();

    session.cancel_deletion().unwrap();

    assert_eq!(session.records_view().total, 3);
    assert!(log.is_empty());
    assert_eq!(
        session.confirm_deletion(),
        Err(AppError::Records(RegistryError::NoPendingDeletion))
    );
}

#[test]
fn test_deletion_requires_records_screen() {
    let (mut session, _log) = create_test_session(true);

    let result: Result<DeletionPrompt, AppError> = session.request_deletion(1);

    assert!(matches!(
        result,
        Err(AppError::WrongScreen {
            required: Screen::Registros,
            ..
        })
    ));
}

#[test]
fn test_wrong_screen_message() {
    let err: AppError = AppError::WrongScreen {
        action: "delete",
        required: Screen::Registros,
        current: Screen::Home,
    };

    assert_eq!(
        err.to_string(),
        "'delete' is only available on the Registros screen (current: Home)"
    );
}

#[test]
fn test_leaving_records_screen_dismisses_prompt() {
    let (mut session, log) = create_test_session(true);
    session.navigate(Screen::Registros);
    session.request_deletion(1).unwrap();

    session.navigate(Screen::Home);
    session.set_field(Field::Nombres, "Ana").unwrap();
    session.navigate(Screen::Registros);

    assert_eq!(session.registry().pending_deletion(), None);
    assert_eq!(
        session.confirm_deletion(),
        Err(AppError::Records(RegistryError::NoPendingDeletion))
    );
    assert_eq!(session.records_view().total, 3);
    assert!(log.is_empty());
}

#[test]
fn test_going_back_dismisses_prompt() {
    let (mut session, _log) = create_test_session(true);
    session.navigate(Screen::Registros);
    session.request_deletion(2).unwrap();

    assert!(session.go_back());

    assert_eq!(session.registry().pending_deletion(), None);
}

#[test]
fn test_staying_on_records_screen_keeps_prompt() {
    let (mut session, _log) = create_test_session(true);
    session.navigate(Screen::Registros);
    session.request_deletion(2).unwrap();

    session.navigate(Screen::Registros);

    assert_eq!(session.registry().pending_deletion(), Some(2));
}

#[tokio::test(start_paused = true)]
async fn test_submit_after_deleting_last_sample_gets_new_id() {
    let (mut session, _log) = create_test_session(true);
    session.navigate(Screen::Registros);
    session.request_deletion(3).unwrap();
    session.confirm_deletion().unwrap();
    session.navigate(Screen::Home);
    fill_valid_form(&mut session);

    let stored: StoredRecord = session.submit().await.unwrap();

    assert_eq!(stored.id, 4);
}
