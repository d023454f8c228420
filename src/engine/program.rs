//! Order placement against the on-chain program.
//!
//! No program interface is deployed for this build, so placement always ends in
//! [`ProgramError::Unimplemented`] once the ticket itself has been checked.

use serde::Serialize;
use thiserror::Error;

use crate::config::TradeDirection;

#[derive(Debug, Error, PartialEq)]
pub enum ProgramError {
    #[error("no wallet connected")]
    NoWallet,
    #[error("order price must be greater than zero")]
    InvalidPrice,
    #[error("order amount must be greater than zero")]
    InvalidAmount,
    #[error("on-chain order placement is not implemented")]
    Unimplemented,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrderTicket {
    pub side: TradeDirection,
    pub price: f64,
    pub amount: f64,
}

impl OrderTicket {
    pub fn validate(&self) -> Result<(), ProgramError> {
        if !(self.price > 0.0 && self.price.is_finite()) {
            return Err(ProgramError::InvalidPrice);
        }
        if !(self.amount > 0.0 && self.amount.is_finite()) {
            return Err(ProgramError::InvalidAmount);
        }
        Ok(())
    }
}

/// Returns the transaction signature on success.
pub fn place_order(wallet: Option<&str>, ticket: &OrderTicket) -> Result<String, ProgramError> {
    if wallet.is_none() {
        return Err(ProgramError::NoWallet);
    }
    ticket.validate()?;
    log::warn!(
        "place_order({} {} @ {}) requested but no program is wired up",
        ticket.side,
        ticket.amount,
        ticket.price
    );
    Err(ProgramError::Unimplemented)
}
