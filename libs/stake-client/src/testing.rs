//! Test doubles shared by the unit tests.

use std::cell::RefCell;
use std::rc::Rc;

use anchor_client::solana_sdk::signature::Signature;
use anchor_lang::{prelude::Pubkey, solana_program::instruction::Instruction};

use crate::{
    busy::BusyFlag,
    client::{ProgramClient, ProgramGateway},
    error::ExternalError,
};

/// Records every instruction it is asked to send and replies with a
/// scripted outcome
#[derive(Debug, Default)]
pub struct RecordingGateway {
    sent: RefCell<Vec<Instruction>>,
    busy_during_send: RefCell<Vec<bool>>,
    observed: RefCell<Option<BusyFlag>>,
    failure: Option<ExternalError>,
}

impl RecordingGateway {
    pub fn succeeding() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn failing(failure: ExternalError) -> Rc<Self> {
        Rc::new(Self {
            failure: Some(failure),
            ..Self::default()
        })
    }

    /// Record the state of `flag` each time an instruction is sent
    pub fn observe(&self, flag: BusyFlag) {
        *self.observed.borrow_mut() = Some(flag);
    }

    pub fn calls(&self) -> usize {
        self.sent.borrow().len()
    }

    pub fn sent(&self) -> Vec<Instruction> {
        self.sent.borrow().clone()
    }

    pub fn last(&self) -> Instruction {
        self.sent.borrow().last().cloned().expect("no instruction sent")
    }

    pub fn busy_during_send(&self) -> Vec<bool> {
        self.busy_during_send.borrow().clone()
    }
}

impl ProgramGateway for RecordingGateway {
    fn send(&self, instruction: Instruction) -> Result<Signature, ExternalError> {
        if let Some(flag) = self.observed.borrow().as_ref() {
            self.busy_during_send.borrow_mut().push(flag.is_busy());
        }
        self.sent.borrow_mut().push(instruction);

        match &self.failure {
            Some(failure) => Err(failure.clone()),
            None => Ok(Signature::default()),
        }
    }
}

/// A client for a fresh program id and wallet
pub fn client_with(gateway: &Rc<RecordingGateway>) -> ProgramClient<Rc<RecordingGateway>> {
    ProgramClient::new(Pubkey::new_unique(), Pubkey::new_unique(), Rc::clone(gateway))
}
