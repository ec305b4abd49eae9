/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateAddress {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Body for POST .../buys; one of `amount` or `total` must be set
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaceBuy {
    #[serde(default, with = "rust_decimal::serde::str_option")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<Decimal>,
    pub currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub agree_btc_amount_varies: bool,
    #[serde(default)]
    pub commit: bool,
    #[serde(default)]
    pub quote: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaceSell {
    #[serde(default, with = "rust_decimal::serde::str_option")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<Decimal>,
    pub currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub agree_btc_amount_varies: bool,
    #[serde(default)]
    pub commit: bool,
    #[serde(default)]
    pub quote: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepositFunds {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub commit: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WithdrawFunds {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
}

/// Body for POST .../transactions with `type: "send"`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendMoney {
    #[serde(rename = "type")]
    pub transaction_type: String,
    pub to: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub skip_notifications: bool,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idem: Option<String>,
    #[serde(default)]
    pub to_financial_institution: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub financial_institution_website: Option<String>,
}

/// Body for POST .../transactions with `type: "transfer"`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferMoney {
    #[serde(rename = "type")]
    pub transaction_type: String,
    pub to: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Body for POST .../transactions with `type: "request"`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestMoney {
    #[serde(rename = "type")]
    pub transaction_type: String,
    pub to: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateAccount {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateCurrentUser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub native_currency: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_buy_omits_unset_fields() {
        let buy = PlaceBuy {
            amount: Some("0.5".parse().expect("amount")),
            currency: "BTC".to_string(),
            commit: true,
            ..PlaceBuy::default()
        };

        let json = serde_json::to_value(&buy).expect("serialize");
        assert_eq!(json["amount"], "0.5");
        assert_eq!(json["currency"], "BTC");
        assert_eq!(json["commit"], true);
        assert!(json.get("total").is_none());
        assert!(json.get("payment_method").is_none());
    }

    #[test]
    fn test_send_money_amount_serializes_as_string() {
        let send = SendMoney {
            transaction_type: "send".to_string(),
            to: "bc1qexample".to_string(),
            amount: "0.0001".parse().expect("amount"),
            currency: "BTC".to_string(),
            description: None,
            skip_notifications: false,
            fee: None,
            idem: Some("dedupe-key-1".to_string()),
            to_financial_institution: false,
            financial_institution_website: None,
        };

        let json = serde_json::to_value(&send).expect("serialize");
        assert_eq!(json["type"], "send");
        assert_eq!(json["amount"], "0.0001");
        assert!(json.get("description").is_none());
    }
}
