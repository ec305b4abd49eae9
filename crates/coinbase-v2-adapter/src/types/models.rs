/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{TradeStatus, TransactionStatus};

/// An amount/currency pair, the unit every monetary field is expressed in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoneyAmount {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: String,
}

/// Stub reference to another API resource
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceRef {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub resource: String,
    #[serde(default)]
    pub resource_path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub primary: bool,
    #[serde(rename = "type", default)]
    pub account_type: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub balance: Option<MoneyAmount>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub resource: String,
    #[serde(default)]
    pub resource_path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub id: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub network: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub resource: String,
    #[serde(default)]
    pub resource_path: String,
}

/// Buys and sells share one shape on the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub id: String,
    #[serde(default)]
    pub status: Option<TradeStatus>,
    #[serde(default)]
    pub payment_method: Option<ResourceRef>,
    #[serde(default)]
    pub transaction: Option<ResourceRef>,
    #[serde(default)]
    pub amount: Option<MoneyAmount>,
    #[serde(default)]
    pub total: Option<MoneyAmount>,
    #[serde(default)]
    pub subtotal: Option<MoneyAmount>,
    #[serde(default)]
    pub fee: Option<MoneyAmount>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub payout_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub resource: String,
    #[serde(default)]
    pub resource_path: String,
    #[serde(default)]
    pub committed: bool,
    #[serde(default)]
    pub instant: bool,
}

/// Deposits and withdrawals share one shape on the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transfer {
    pub id: String,
    #[serde(rename = "type", default)]
    pub transfer_type: Option<String>,
    #[serde(default)]
    pub status: Option<TradeStatus>,
    #[serde(default)]
    pub payment_method: Option<ResourceRef>,
    #[serde(default)]
    pub transaction: Option<ResourceRef>,
    #[serde(default)]
    pub amount: Option<MoneyAmount>,
    #[serde(default)]
    pub subtotal: Option<MoneyAmount>,
    #[serde(default)]
    pub fee: Option<MoneyAmount>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub payout_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub resource: String,
    #[serde(default)]
    pub resource_path: String,
    #[serde(default)]
    pub committed: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Network {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Counterparty of a transaction
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Party {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub resource: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    /// Open set on the wire (send, request, transfer, buy, sell,
    /// fiat_deposit, exchange_withdrawal, ...), so left untyped
    #[serde(rename = "type", default)]
    pub transaction_type: Option<String>,
    #[serde(default)]
    pub status: Option<TransactionStatus>,
    #[serde(default)]
    pub amount: Option<MoneyAmount>,
    #[serde(default)]
    pub native_amount: Option<MoneyAmount>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub resource: String,
    #[serde(default)]
    pub resource_path: String,
    #[serde(default)]
    pub network: Option<Network>,
    #[serde(default)]
    pub from: Option<Party>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub id: String,
    #[serde(rename = "type", default)]
    pub method_type: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub primary_buy: bool,
    #[serde(default)]
    pub primary_sell: bool,
    #[serde(default)]
    pub allow_buy: bool,
    #[serde(default)]
    pub allow_sell: bool,
    #[serde(default)]
    pub instant_buy: bool,
    #[serde(default)]
    pub instant_sell: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub resource: String,
    #[serde(default)]
    pub resource_path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Currency {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub min_size: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRates {
    pub currency: String,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_map",
        serialize_with = "serde_helpers::serialize_decimal_map"
    )]
    pub rates: BTreeMap<String, Decimal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerTime {
    pub iso: DateTime<Utc>,
    #[serde(default)]
    pub epoch: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub profile_location: Option<String>,
    #[serde(default)]
    pub profile_bio: Option<String>,
    #[serde(default)]
    pub profile_url: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub resource: String,
    #[serde(default)]
    pub resource_path: String,
    #[serde(default)]
    pub sends_disabled: bool,
}

mod serde_helpers {
    use super::{BTreeMap, Decimal};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;

    pub fn deserialize_decimal_map<'de, D>(
        deserializer: D,
    ) -> Result<BTreeMap<String, Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: BTreeMap<String, String> = BTreeMap::deserialize(deserializer)?;
        raw.into_iter()
            .map(|(currency, rate)| {
                Decimal::from_str(&rate)
                    .map(|rate| (currency, rate))
                    .map_err(serde::de::Error::custom)
            })
            .collect()
    }

    pub fn serialize_decimal_map<S>(
        values: &BTreeMap<String, Decimal>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let strings: BTreeMap<&String, String> = values
            .iter()
            .map(|(currency, rate)| (currency, rate.to_string()))
            .collect();
        strings.serialize(serializer)
    }
}
