//! Connected-account gate. The wallet SDK is an outside collaborator; all the app needs is
//! "is there an address" plus connect/disconnect.

use thiserror::Error;
use uuid::Uuid;

use crate::config::DEMO;

#[derive(Debug, Error, PartialEq)]
pub enum WalletError {
    #[error("wallet address is empty")]
    EmptyAddress,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WalletSession {
    address: Option<String>,
}

impl WalletSession {
    pub fn connect(&mut self, address: impl Into<String>) -> Result<(), WalletError> {
        let address = address.into().trim().to_string();
        if address.is_empty() {
            return Err(WalletError::EmptyAddress);
        }
        self.address = Some(address);
        Ok(())
    }

    /// Connects a deterministic demo account derived from `nonce`.
    pub fn connect_demo(&mut self, nonce: u64) -> &str {
        let address = demo_address(nonce);
        self.address.insert(address)
    }

    /// Returns the address that was connected, if any.
    pub fn disconnect(&mut self) -> Option<String> {
        self.address.take()
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn is_connected(&self) -> bool {
        self.address.is_some()
    }

    /// "0x1234...abcd" style abbreviation for headers.
    pub fn short_address(&self) -> Option<String> {
        self.address().map(abbreviate)
    }
}

pub fn demo_address(nonce: u64) -> String {
    let name = format!("{}:{}", DEMO.wallet_seed, nonce);
    format!(
        "0x{}",
        Uuid::new_v5(&Uuid::NAMESPACE_OID, name.as_bytes()).simple()
    )
}

fn abbreviate(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 10 {
        return address.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}
