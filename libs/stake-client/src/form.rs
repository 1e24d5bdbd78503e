use std::fmt;

use anchor_lang::prelude::Pubkey;
use log::{debug, info};

use crate::{
    actions::{self, Action, ActionOutcome, StakeInput},
    busy::BusyFlag,
    client::{ProgramClient, ProgramGateway},
    constants::{FORM_TITLE, PROCESSING_LABEL},
    state::LockupTier,
};

/// View state of the staking screen
/// Holds only what the user typed, the selected tier, the busy flag and the
/// last message. Derived addresses and results are never kept.
pub struct StakeForm<G> {
    client: Option<ProgramClient<G>>,
    mint_address: String,
    amount: String,
    lockup_tier: LockupTier,
    busy: BusyFlag,
    message: Option<String>,
}

impl<G> Default for StakeForm<G> {
    fn default() -> Self {
        Self {
            client: None,
            mint_address: String::new(),
            amount: String::new(),
            lockup_tier: LockupTier::default(),
            busy: BusyFlag::new(),
            message: None,
        }
    }
}

impl<G: ProgramGateway> StakeForm<G> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a connected wallet
    pub fn connect(&mut self, client: ProgramClient<G>) {
        info!("Wallet connected: {}", client.wallet());
        self.client = Some(client);
    }

    /// Detach the wallet, returning its client
    pub fn disconnect(&mut self) -> Option<ProgramClient<G>> {
        let client = self.client.take();
        if let Some(client) = &client {
            info!("Wallet disconnected: {}", client.wallet());
        }
        client
    }

    pub fn is_connected(&self) -> bool {
        self.client.is_some()
    }

    pub fn wallet(&self) -> Option<&Pubkey> {
        self.client.as_ref().map(|client| client.wallet())
    }

    pub fn client(&self) -> Option<&ProgramClient<G>> {
        self.client.as_ref()
    }

    pub fn set_mint_address(&mut self, value: impl Into<String>) {
        self.mint_address = value.into();
    }

    pub fn set_amount(&mut self, value: impl Into<String>) {
        self.amount = value.into();
    }

    /// Select a tier by its selector name, e.g. "threeMonths"
    /// An unknown name leaves the selection unchanged and shows a message.
    pub fn select_lockup_tier(&mut self, value: &str) -> bool {
        match value.parse::<LockupTier>() {
            Ok(tier) => {
                self.lockup_tier = tier;
                true
            }
            Err(err) => {
                self.message = Some(err.to_string());
                false
            }
        }
    }

    pub fn mint_address(&self) -> &str {
        &self.mint_address
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn lockup_tier(&self) -> LockupTier {
        self.lockup_tier
    }

    pub fn is_busy(&self) -> bool {
        self.busy.is_busy()
    }

    /// Shared handle on the busy flag for renderers
    pub fn busy_flag(&self) -> BusyFlag {
        self.busy.clone()
    }

    /// Last outcome message
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// "Initialize Pool" button
    pub fn initialize_pool(&mut self) -> Option<ActionOutcome> {
        if self.ignore_click(Action::InitializePool) {
            return None;
        }
        let outcome = actions::initialize_pool(self.client.as_ref(), &self.busy, &self.mint_address);
        Some(self.show(outcome))
    }

    /// "Stake" button
    pub fn stake(&mut self) -> Option<ActionOutcome> {
        if self.ignore_click(Action::Stake) {
            return None;
        }
        let input = StakeInput {
            mint_address: &self.mint_address,
            amount: &self.amount,
            lockup_tier: self.lockup_tier,
        };
        let outcome = actions::stake(self.client.as_ref(), &self.busy, input);
        Some(self.show(outcome))
    }

    /// "Unstake" button
    pub fn unstake(&mut self) -> Option<ActionOutcome> {
        if self.ignore_click(Action::Unstake) {
            return None;
        }
        let outcome = actions::unstake(self.client.as_ref(), &self.busy, &self.mint_address);
        Some(self.show(outcome))
    }

    /// Buttons are disabled while a request is in flight
    fn ignore_click(&self, action: Action) -> bool {
        if self.busy.is_busy() {
            debug!("Ignoring {} while a request is in flight", action.label());
            return true;
        }
        false
    }

    fn show(&mut self, outcome: ActionOutcome) -> ActionOutcome {
        self.message = Some(outcome.message());
        outcome
    }

    /// Snapshot of everything a renderer draws
    pub fn view(&self) -> FormView {
        let busy = self.busy.is_busy();
        let button = |action: Action| ButtonView {
            action,
            label: if busy {
                PROCESSING_LABEL.to_string()
            } else {
                action.label().to_string()
            },
            enabled: !busy,
        };

        FormView {
            title: FORM_TITLE.to_string(),
            wallet: self.wallet().map(|wallet| wallet.to_string()),
            mint_address: self.mint_address.clone(),
            amount: self.amount.clone(),
            lockup_options: LockupTier::ALL
                .iter()
                .map(|tier| TierOption {
                    value: tier.wire_name(),
                    label: tier.label(),
                    selected: *tier == self.lockup_tier,
                })
                .collect(),
            initialize_pool: button(Action::InitializePool),
            stake: button(Action::Stake),
            unstake: button(Action::Unstake),
            message: self.message.clone(),
        }
    }
}

/// One entry of the lockup tier selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierOption {
    pub value: &'static str,
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonView {
    pub action: Action,
    pub label: String,
    pub enabled: bool,
}

/// Rendered state of the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub title: String,
    /// Connected wallet address, if any
    pub wallet: Option<String>,
    pub mint_address: String,
    pub amount: String,
    pub lockup_options: Vec<TierOption>,
    pub initialize_pool: ButtonView,
    pub stake: ButtonView,
    pub unstake: ButtonView,
    pub message: Option<String>,
}

impl FormView {
    pub fn buttons(&self) -> [&ButtonView; 3] {
        [&self.initialize_pool, &self.stake, &self.unstake]
    }
}

impl fmt::Display for ButtonView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.enabled {
            write!(f, "[ {} ]", self.label)
        } else {
            write!(f, "[ {} ] (disabled)", self.label)
        }
    }
}

impl fmt::Display for FormView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        match &self.wallet {
            Some(wallet) => writeln!(f, "Wallet: {}", wallet)?,
            None => writeln!(f, "Wallet: not connected")?,
        }

        writeln!(f)?;
        writeln!(f, "Initialize Pool")?;
        writeln!(f, "  Token Mint Address: {}", self.mint_address)?;
        writeln!(f, "  {}", self.initialize_pool)?;

        writeln!(f)?;
        writeln!(f, "Stake Tokens")?;
        writeln!(f, "  Amount to stake: {}", self.amount)?;
        for option in &self.lockup_options {
            let marker = if option.selected { "(x)" } else { "( )" };
            writeln!(f, "  {} {}", marker, option.label)?;
        }
        writeln!(f, "  {}", self.stake)?;

        writeln!(f)?;
        writeln!(f, "Unstake Tokens")?;
        writeln!(f, "  {}", self.unstake)?;

        if let Some(message) = &self.message {
            writeln!(f)?;
            writeln!(f, "{}", message)?;
        }
        Ok(())
    }
}
