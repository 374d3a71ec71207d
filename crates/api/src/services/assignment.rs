// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::context::{ServiceContext, finish};
use crate::error::{ErrorKind, ServiceError};
use crate::result::{OperationResult, Transition};
use embassy_interview::{Command, TransitionResult};
use embassy_interview_audit::{Actor, Cause};
use embassy_interview_domain::{
    DomainError, Interview, InterviewId, InterviewState, OfferId, Slot, SlotOffer,
};
use tracing::warn;

/// Assigns slots to interviews awaiting one.
#[derive(Clone)]
pub struct AssignmentService {
    ctx: ServiceContext,
}

impl AssignmentService {
    #[must_use]
    pub const fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }

    /// Assigns a slot chosen by the embassy.
    #[must_use]
    pub fn assign_fixed_date(
        &self,
        interview_id: &InterviewId,
        slot: Slot,
        location: Option<String>,
        actor: Actor,
        cause: Cause,
    ) -> OperationResult<Transition> {
        let result: Result<Transition, ServiceError> = self.ctx.execute(
            interview_id,
            Command::AssignFixedDate { slot, location },
            actor,
            cause,
        );
        finish("assign_fixed_date", interview_id, result)
    }

    /// Publishes slot options and registers them for reservation.
    #[must_use]
    pub fn offer_slots(
        &self,
        interview_id: &InterviewId,
        offers: Vec<SlotOffer>,
        location: Option<String>,
        actor: Actor,
        cause: Cause,
    ) -> OperationResult<Transition> {
        let result: Result<Transition, ServiceError> =
            self.offer_slots_inner(interview_id, offers, location, actor, cause);
        finish("offer_slots", interview_id, result)
    }

    /// Selects an offer on behalf of the applicant.
    ///
    /// The seat is taken from the offer ledger first; if anything after
    /// that fails, the seat is given back.
    #[must_use]
    pub fn select_offer(
        &self,
        interview_id: &InterviewId,
        offer_id: &OfferId,
        actor: Actor,
        cause: Cause,
    ) -> OperationResult<Transition> {
        let result: Result<Transition, ServiceError> =
            self.select_offer_inner(interview_id, offer_id, actor, cause);
        finish("select_offer", interview_id, result)
    }

    fn offer_slots_inner(
        &self,
        interview_id: &InterviewId,
        offers: Vec<SlotOffer>,
        location: Option<String>,
        actor: Actor,
        cause: Cause,
    ) -> Result<Transition, ServiceError> {
        let interview: Interview = self.ctx.load(interview_id)?;
        let transition: TransitionResult = self.ctx.apply(
            &interview,
            Command::OfferSlots { offers, location },
            actor,
            cause,
        )?;
        self.ctx
            .offers
            .register(transition.new_interview.offered_slots())?;
        self.ctx.commit(transition)
    }

    fn select_offer_inner(
        &self,
        interview_id: &InterviewId,
        offer_id: &OfferId,
        actor: Actor,
        cause: Cause,
    ) -> Result<Transition, ServiceError> {
        let interview: Interview = self.ctx.load(interview_id)?;
        if interview.state() != InterviewState::OptionsOffered {
            return Err(DomainError::InvalidTransition {
                from: interview.state(),
                operation: "select a slot option",
            }
            .into());
        }
        if interview.offer(offer_id).is_none() {
            return Err(DomainError::OfferNotFound(offer_id.clone()).into());
        }

        let reserved: SlotOffer = self.ctx.offers.try_reserve(offer_id)?;
        let committed: Result<Transition, ServiceError> = self
            .ctx
            .apply(
                &interview,
                Command::ClaimReservedOffer { offer: reserved },
                actor,
                cause,
            )
            .and_then(|transition| self.ctx.commit(transition));

        if let Err(err) = &committed
            && let Err(release_err) = self.ctx.offers.release(offer_id)
        {
            warn!(
                offer_id = %offer_id,
                error = %release_err,
                "Could not return offer seat after failed selection"
            );
            return Err(ServiceError::new(
                ErrorKind::Internal,
                format!("{}; the reserved seat could not be returned", err.message),
            ));
        }
        committed
    }
}
