//! Token listing request captured by the "List Your Coin" form.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum ListingField {
    #[strum(to_string = "Token Name")]
    Name,
    #[strum(to_string = "Token Symbol")]
    Symbol,
    #[strum(to_string = "Project Website")]
    WebsiteUrl,
    #[strum(to_string = "Description")]
    Description,
    #[strum(to_string = "Contract Address")]
    ContractAddress,
}

#[derive(Debug, Error, PartialEq)]
pub enum ListingError {
    #[error("{0} is required")]
    MissingField(ListingField),
}

/// Validated only for presence; nothing is sent anywhere.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingRequest {
    pub name: String,
    pub symbol: String,
    #[serde(rename = "websiteURL")]
    pub website_url: String,
    pub description: String,
    pub contract_address: String,
}

impl ListingRequest {
    pub fn field(&self, field: ListingField) -> &str {
        match field {
            ListingField::Name => &self.name,
            ListingField::Symbol => &self.symbol,
            ListingField::WebsiteUrl => &self.website_url,
            ListingField::Description => &self.description,
            ListingField::ContractAddress => &self.contract_address,
        }
    }

    pub fn field_mut(&mut self, field: ListingField) -> &mut String {
        match field {
            ListingField::Name => &mut self.name,
            ListingField::Symbol => &mut self.symbol,
            ListingField::WebsiteUrl => &mut self.website_url,
            ListingField::Description => &mut self.description,
            ListingField::ContractAddress => &mut self.contract_address,
        }
    }

    /// Fails on the first blank field, in form order.
    pub fn validate(&self) -> Result<(), ListingError> {
        use strum::IntoEnumIterator;
        match ListingField::iter().find(|f| self.field(*f).trim().is_empty()) {
            Some(missing) => Err(ListingError::MissingField(missing)),
            None => Ok(()),
        }
    }
}
