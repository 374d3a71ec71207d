// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{now, pending_interview, scheduled_interview, usa_policy};
use crate::{
    ApplicationId, CancellationReason, DomainError, EmbassyId, Interview, InterviewId,
    InterviewManager,
};

fn manager() -> InterviewManager {
    InterviewManager::new(ApplicationId::new("APP-1"), EmbassyId::new("USA"))
}

#[test]
fn test_empty_manager_has_no_active_interview() {
    let manager: InterviewManager = manager();

    assert!(!manager.has_active_interview());
    assert!(manager.current().is_none());
    assert_eq!(manager.next_interview_id(), InterviewId::new("APP-1-1"));
}

#[test]
fn test_install_and_archive() {
    let installed: InterviewManager = manager().install(scheduled_interview(10)).unwrap();
    assert!(installed.has_active_interview());
    assert_eq!(installed.next_interview_id(), InterviewId::new("APP-1-2"));

    let archived: InterviewManager = installed.archive_current();
    assert!(archived.current().is_none());
    assert_eq!(archived.history().len(), 1);
    assert_eq!(archived.history()[0], scheduled_interview(10));
    assert_eq!(archived.next_interview_id(), InterviewId::new("APP-1-2"));
}

#[test]
fn test_archive_without_current_is_noop() {
    let archived: InterviewManager = manager().archive_current();

    assert!(archived.history().is_empty());
}

#[test]
fn test_install_over_current_is_rejected() {
    let installed: InterviewManager = manager().install(scheduled_interview(10)).unwrap();

    assert!(matches!(
        installed.install(pending_interview()),
        Err(DomainError::InvalidTransition { .. })
    ));
}

#[test]
fn test_install_rejects_foreign_interview() {
    let foreign: Interview = Interview::new(
        InterviewId::new("APP-2-1"),
        ApplicationId::new("APP-2"),
        EmbassyId::new("USA"),
        now(),
    );

    assert!(matches!(
        manager().install(foreign),
        Err(DomainError::ApplicationMismatch { .. })
    ));
}

#[test]
fn test_terminal_current_is_not_active() {
    let cancelled: Interview = scheduled_interview(10)
        .cancel(CancellationReason::ApplicantRequest, "", &usa_policy(), now())
        .unwrap();

    let installed: InterviewManager = manager().install(cancelled).unwrap();

    assert!(installed.current().is_some());
    assert!(!installed.has_active_interview());
}

#[test]
fn test_refresh_current_only_touches_matching_interview() {
    let installed: InterviewManager = manager().install(scheduled_interview(10)).unwrap();
    let confirmed: Interview = scheduled_interview(10).confirm(now()).unwrap();

    let refreshed: InterviewManager = installed.refresh_current(&confirmed);
    assert_eq!(refreshed.current(), Some(&confirmed));

    let other: Interview = Interview::new(
        InterviewId::new("APP-1-9"),
        ApplicationId::new("APP-1"),
        EmbassyId::new("USA"),
        now(),
    );
    assert_eq!(installed.refresh_current(&other), installed);
}

#[test]
fn test_refresh_current_never_goes_back_a_version() {
    let newer: Interview = scheduled_interview(10)
        .confirm(now())
        .unwrap()
        .with_version(3);
    let installed: InterviewManager = manager().install(newer.clone()).unwrap();
    let older: Interview = scheduled_interview(10).with_version(2);

    assert_eq!(installed.refresh_current(&older).current(), Some(&newer));
}

#[test]
fn test_manager_version_survives_transitions() {
    let stored: InterviewManager = manager().with_version(5);

    let installed: InterviewManager = stored.install(scheduled_interview(10)).unwrap();

    assert_eq!(installed.version(), 5);
    assert_eq!(installed.archive_current().version(), 5);
}
