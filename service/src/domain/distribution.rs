//! Distribution program definitions.

use common::{unit, DateTimeOf, Money, Percent};
use derive_more::Debug;
use serde::{Deserialize, Serialize};

use super::{affiliate::CommissionStatus, user::Phone};

/// Distribution program status of the current customer.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Status {
    /// Indicator whether the customer is an approved distributor.
    #[serde(default)]
    pub is_distributor: bool,

    /// [`ApplicationStatus`] of the latest [`Application`], if any.
    #[serde(default, deserialize_with = "super::non_empty")]
    pub application_status: Option<ApplicationStatus>,

    /// Distributor level name.
    #[serde(default, deserialize_with = "super::non_empty")]
    pub level: Option<String>,

    /// Commission rate of the distributor.
    #[serde(default)]
    pub commission_rate: Option<Percent>,
}

common::define_kind! {
    #[doc = "Review status of an [`Application`]."]
    enum ApplicationStatus {
        #[doc = "Awaiting review."]
        Pending = "pending",

        #[doc = "Approved, the customer is a distributor."]
        Approved = "approved",

        #[doc = "Rejected by the store."]
        Rejected = "rejected",
    }
}

/// Application for joining the distribution program.
#[derive(Clone, Debug, Serialize)]
pub struct Application {
    /// Legal name of the applicant.
    pub name: String,

    /// [`Phone`] of the applicant.
    pub phone: Phone,

    /// Identity card number of the applicant.
    #[debug(skip)]
    pub id_card: String,

    /// Bank account for commission payouts.
    #[debug(skip)]
    pub bank_account: String,

    /// Name of the bank holding the account.
    pub bank_name: String,
}

/// Order placed through the distributor.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Order {
    /// ID of this [`Order`].
    pub id: u64,

    /// Human-readable number of the order.
    pub order_no: String,

    /// Amount of the order.
    #[serde(alias = "total_amount")]
    pub amount: Money,

    /// Commission earned for the order.
    #[serde(alias = "commission_amount")]
    pub commission: Money,

    /// Settlement status of the commission.
    pub status: CommissionStatus,

    /// Moment the order was placed.
    #[serde(default)]
    pub created_at: Option<DateTimeOf<(Order, unit::Creation)>>,
}

/// Entry of the distributor commission ledger.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Commission {
    /// ID of this [`Commission`] entry.
    pub id: u64,

    /// Amount of this [`Commission`] entry.
    pub amount: Money,

    /// Kind of this [`Commission`] entry, as named by the backend.
    #[serde(default, rename = "type")]
    pub kind: Option<String>,

    /// Settlement status of this [`Commission`] entry.
    pub status: CommissionStatus,

    /// Moment this [`Commission`] entry was recorded.
    #[serde(default)]
    pub created_at: Option<DateTimeOf<(Commission, unit::Creation)>>,
}

#[cfg(test)]
mod spec {
    use super::{Application, Status};
    use crate::domain::user::Phone;

    #[test]
    fn hides_sensitive_application_fields() {
        let application = Application {
            name: "Li Lei".into(),
            phone: Phone::new("13812345678").unwrap(),
            id_card: "110101199003077777".into(),
            bank_account: "6222020200112233445".into(),
            bank_name: "ICBC".into(),
        };

        let debug = format!("{application:?}");
        assert!(!debug.contains("110101199003077777"));
        assert!(!debug.contains("6222020200112233445"));
        assert!(debug.contains("ICBC"));
    }

    #[test]
    fn tolerates_empty_status() {
        let status: Status =
            serde_json::from_str(r#"{"application_status": ""}"#).unwrap();
        assert_eq!(status, Status::default());
    }
}
