//! [`Order`] definitions.

use common::{unit, DateTimeOf, Money};
use derive_more::{Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};

#[cfg(doc)]
use common::DateTime;

use super::{address, cart::Count, coupon, product};

/// Order placed by a customer.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Order {
    /// ID of this [`Order`].
    pub id: Id,

    /// Human-readable number of this [`Order`].
    pub order_no: String,

    /// [`Status`] of this [`Order`].
    pub status: Status,

    /// Ordered [`Item`]s.
    #[serde(default)]
    pub items: Vec<Item>,

    /// [`ShippingAddress`] of this [`Order`].
    #[serde(default)]
    pub address: Option<ShippingAddress>,

    /// Total price of the [`Item`]s.
    pub total_amount: Money,

    /// Shipping fee.
    #[serde(default)]
    pub shipping_fee: Option<Money>,

    /// Discount applied by a coupon.
    #[serde(default)]
    pub discount_amount: Option<Money>,

    /// Amount actually paid.
    #[serde(default)]
    pub paid_amount: Option<Money>,

    /// [`PaymentMethod`] used to pay for this [`Order`].
    #[serde(default, deserialize_with = "super::non_empty")]
    pub payment_method: Option<PaymentMethod>,

    /// [`DateTime`] when this [`Order`] was placed.
    #[serde(default)]
    pub created_at: Option<DateTimeOf<(Order, unit::Creation)>>,

    /// [`DateTime`] when this [`Order`] was paid.
    #[serde(default)]
    pub paid_at: Option<DateTimeOf<(Order, unit::Payment)>>,

    /// [`DateTime`] when this [`Order`] was shipped.
    #[serde(default)]
    pub shipped_at: Option<DateTimeOf<(Order, unit::Shipment)>>,

    /// [`DateTime`] when this [`Order`] was completed.
    #[serde(default)]
    pub completed_at: Option<DateTimeOf<(Order, unit::Completion)>>,
}

/// ID of an [`Order`].
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
#[serde(transparent)]
pub struct Id(u64);

common::define_kind! {
    #[doc = "Lifecycle status of an [`Order`]."]
    enum Status {
        #[doc = "Placed, awaiting payment."]
        Pending = "pending",

        #[doc = "Paid, awaiting shipment."]
        Paid = "paid",

        #[doc = "Shipped, awaiting receipt confirmation."]
        Shipped = "shipped",

        #[doc = "Received by the customer."]
        Completed = "completed",

        #[doc = "Cancelled before payment."]
        Cancelled = "cancelled",
    }
}

common::define_kind! {
    #[doc = "Method of paying for an [`Order`]."]
    enum PaymentMethod {
        #[doc = "WeChat Pay."]
        Wechat = "wechat",

        #[doc = "Alipay."]
        Alipay = "alipay",

        #[doc = "Store account balance."]
        Balance = "balance",
    }
}

/// Line of an [`Order`].
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Item {
    /// ID of this [`Item`].
    pub id: u64,

    /// ID of the ordered [`Product`].
    ///
    /// [`Product`]: product::Product
    #[serde(default)]
    pub product_id: Option<product::Id>,

    /// Name of the ordered product at the moment of purchase.
    #[serde(default)]
    pub name: Option<String>,

    /// Unit price at the moment of purchase.
    pub price: Money,

    /// Number of ordered units.
    pub quantity: u32,
}

/// Address an [`Order`] is shipped to.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ShippingAddress {
    /// Name of the recipient.
    pub name: String,

    /// Phone of the recipient.
    pub phone: String,

    /// Preformatted address.
    #[serde(default, deserialize_with = "super::non_empty")]
    pub full_address: Option<String>,

    /// Province part of the address.
    #[serde(default)]
    pub province: String,

    /// City part of the address.
    #[serde(default)]
    pub city: String,

    /// District part of the address.
    #[serde(default)]
    pub district: String,

    /// Street part of the address.
    #[serde(default)]
    pub detail: String,
}

impl ShippingAddress {
    /// Returns the address as a single line.
    #[must_use]
    pub fn line(&self) -> String {
        self.full_address.clone().unwrap_or_else(|| {
            [&self.province, &self.city, &self.district, &self.detail]
                .into_iter()
                .filter(|part| !part.is_empty())
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(" ")
        })
    }
}

/// Shipment tracking of an [`Order`].
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Logistics {
    /// Name of the carrier.
    #[serde(default, alias = "company")]
    pub carrier: Option<String>,

    /// Tracking number issued by the carrier.
    #[serde(default, alias = "tracking_no")]
    pub tracking_number: Option<String>,

    /// Tracking events, newest first.
    #[serde(default)]
    pub traces: Vec<Trace>,
}

/// Single tracking event of [`Logistics`].
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Trace {
    /// Time of the event, as reported by the carrier.
    pub time: String,

    /// Description of the event.
    #[serde(alias = "content")]
    pub description: String,
}

/// New [`Order`] to place.
#[derive(Clone, Debug, Serialize)]
pub struct Draft {
    /// [`Address`] to ship the [`Order`] to.
    ///
    /// [`Address`]: super::Address
    pub address_id: address::Id,

    /// Ordered [`Line`]s.
    pub items: Vec<Line>,

    /// [`Coupon`] to apply.
    ///
    /// [`Coupon`]: super::Coupon
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon_id: Option<coupon::Id>,
}

/// Ordered product of a [`Draft`].
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Line {
    /// ID of the ordered product.
    pub product_id: product::Id,

    /// Number of ordered units.
    pub quantity: Count,
}

/// Payment of a pending [`Order`].
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Payment {
    /// [`PaymentMethod`] to pay with.
    pub payment_method: PaymentMethod,

    /// [`Coupon`] to apply.
    ///
    /// [`Coupon`]: super::Coupon
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon_id: Option<coupon::Id>,
}

#[cfg(test)]
mod spec {
    use super::{Order, PaymentMethod, Status};

    #[test]
    fn deserializes_order() {
        let order: Order = serde_json::from_str(
            r#"{
                "id": 5,
                "order_no": "SO202405010001",
                "status": "shipped",
                "items": [{"id": 1, "product_id": 9, "name": "Tea",
                           "price": "19.90", "quantity": 2}],
                "address": {"name": "Li", "phone": "13812345678",
                            "province": "Zhejiang", "city": "Hangzhou",
                            "district": "", "detail": "1 West Lake Rd"},
                "total_amount": 39.8,
                "payment_method": "",
                "created_at": "2024-05-01T08:00:00Z",
                "shipped_at": "2024-05-02T08:00:00Z"
            }"#,
        )
        .unwrap();

        assert_eq!(order.status, Status::Shipped);
        assert_eq!(order.payment_method, None);
        assert_eq!(order.total_amount.to_string(), "39.80");
        assert_eq!(
            order.address.unwrap().line(),
            "Zhejiang Hangzhou 1 West Lake Rd",
        );
        assert!(order.paid_at.is_none());
    }

    #[test]
    fn uses_wire_names() {
        assert_eq!(Status::Cancelled.as_str(), "cancelled");
        assert_eq!(
            serde_json::to_string(&PaymentMethod::Alipay).unwrap(),
            "\"alipay\"",
        );
    }
}
