// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{now, slot_in_days};
use crate::{EmbassyResponseRepository, InMemoryEmbassyResponseRepository};
use chrono::Duration;
use embassy_interview_domain::{ApplicationId, EmbassyId, EmbassyResponse, ResponseKind};

#[test]
fn test_find_latest_returns_most_recent() {
    let repo: InMemoryEmbassyResponseRepository = InMemoryEmbassyResponseRepository::new();
    let rejection: EmbassyResponse = EmbassyResponse::rejected(
        ApplicationId::new("APP-1"),
        EmbassyId::new("USA"),
        String::from("Missing bank statement"),
        true,
        now(),
    );
    let approval: EmbassyResponse = EmbassyResponse::approved_fixed(
        ApplicationId::new("APP-1"),
        EmbassyId::new("USA"),
        slot_in_days(20),
        None,
        now() + Duration::days(3),
    );
    repo.save(&approval).unwrap();
    repo.save(&rejection).unwrap();

    let latest: Option<EmbassyResponse> =
        repo.find_latest(&ApplicationId::new("APP-1")).unwrap();
    let all: Vec<EmbassyResponse> = repo
        .find_by_application(&ApplicationId::new("APP-1"))
        .unwrap();

    assert_eq!(latest.map(|r| r.kind()), Some(ResponseKind::Approved));
    assert_eq!(all.len(), 2);
}

#[test]
fn test_unknown_application_has_no_responses() {
    let repo: InMemoryEmbassyResponseRepository = InMemoryEmbassyResponseRepository::new();

    assert!(repo
        .find_by_application(&ApplicationId::new("APP-9"))
        .unwrap()
        .is_empty());
    assert_eq!(repo.find_latest(&ApplicationId::new("APP-9")).unwrap(), None);
}
