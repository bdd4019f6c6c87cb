//! [`Endpoint`]s requesting and cancelling [`Withdrawal`]s.

use serde::de::IgnoredAny;

use crate::{
    domain::{
        withdrawal::{self, Draft},
        Withdrawal,
    },
    infra::{api::Method, Endpoint},
};

/// Requests a new [`Withdrawal`] of the earned commissions.
#[derive(Clone, Debug)]
pub struct CreateWithdrawal(pub Draft);

impl Endpoint for CreateWithdrawal {
    type Output = Withdrawal;

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> String {
        "withdrawals/".into()
    }

    fn body(&self) -> Result<Option<serde_json::Value>, serde_json::Error> {
        serde_json::to_value(&self.0).map(Some)
    }
}

/// Cancels a pending [`Withdrawal`].
#[derive(Clone, Copy, Debug)]
pub struct CancelWithdrawal(pub withdrawal::Id);

impl Endpoint for CancelWithdrawal {
    type Output = IgnoredAny;

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> String {
        format!("withdrawals/{}/cancel/", self.0)
    }
}
