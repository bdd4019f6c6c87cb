//! [`User`] definitions.

pub mod session;

use std::{str::FromStr, sync::LazyLock};

#[cfg(doc)]
use common::DateTime;
use common::{unit, DateTimeOf, Money};
use derive_more::{AsRef, Display, From, Into};
use regex::Regex;
use secrecy::{zeroize::Zeroize, CloneableSecret};
use serde::{Deserialize, Serialize};

pub use self::session::Session;

/// Identity of a storefront user, as reported by the backend.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct User {
    /// ID of this [`User`].
    pub id: Id,

    /// [`Username`] of this [`User`].
    pub username: Username,

    /// Display name of this [`User`].
    #[serde(default, deserialize_with = "super::non_empty")]
    pub nickname: Option<String>,

    /// URL of the avatar image of this [`User`].
    #[serde(default, deserialize_with = "super::non_empty")]
    pub avatar: Option<String>,

    /// [`Email`] of this [`User`].
    #[serde(default, deserialize_with = "super::non_empty")]
    pub email: Option<Email>,

    /// [`Phone`] of this [`User`].
    #[serde(default, deserialize_with = "super::non_empty")]
    pub phone: Option<Phone>,

    /// [`Role`] of this [`User`].
    #[serde(default)]
    pub role: Role,

    /// Account balance of this [`User`].
    #[serde(default)]
    pub balance: Option<Money>,

    /// Loyalty points of this [`User`].
    #[serde(default)]
    pub points: Option<u64>,

    /// [`DateTime`] when this [`User`] was created.
    #[serde(default)]
    pub created_at: Option<CreationDateTime>,

    /// [`DateTime`] when this [`User`] was last modified.
    #[serde(default)]
    pub updated_at: Option<ModificationDateTime>,
}

impl User {
    /// Returns the name this [`User`] should be greeted with.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.nickname.as_deref().unwrap_or(self.username.as_str())
    }

    /// Returns [`Permission`]s granted to this [`User`].
    #[must_use]
    pub fn permissions(&self) -> Vec<Permission> {
        self.role.permissions()
    }
}

/// ID of a [`User`].
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    Eq,
    From,
    derive_more::FromStr,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
#[serde(transparent)]
pub struct Id(u64);

/// Username of a [`User`].
///
/// Values received from the backend are accepted as is.
#[derive(AsRef, Clone, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
#[as_ref(str, String)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    /// Returns this [`Username`] as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Creates a new [`Username`] if the given `name` is valid.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        Self::check(&name).then_some(Self(name))
    }

    /// Checks whether the given `name` is a valid [`Username`].
    fn check(name: impl AsRef<str>) -> bool {
        /// Regular expression checking [`Username`] invariants:
        /// - Must be between 3 and 150 characters long;
        /// - Must contain only letters, digits and `.@+-_` characters.
        static REGEX: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"^[\w.@+-]{3,150}$").expect("valid regex")
        });

        REGEX.is_match(name.as_ref())
    }
}

impl FromStr for Username {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Username`")
    }
}

/// Password of a [`User`].
///
/// Deliberately has no [`Display`] implementation.
#[derive(AsRef, Clone, Eq, PartialEq, Serialize)]
#[as_ref(str)]
#[serde(transparent)]
pub struct Password(String);

impl Password {
    /// Creates a new [`Password`] if the given `password` is valid.
    #[must_use]
    pub fn new(password: impl Into<String>) -> Option<Self> {
        let password = password.into();
        Self::check(&password).then_some(Self(password))
    }

    /// Checks whether the given `password` is a valid [`Password`].
    fn check(password: impl AsRef<str>) -> bool {
        let password = password.as_ref();
        !password.is_empty() && password.chars().count() <= 128
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password(***)")
    }
}

impl FromStr for Password {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Password`")
    }
}

impl CloneableSecret for Password {}
impl Zeroize for Password {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

/// Email address of a [`User`].
#[derive(AsRef, Clone, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
#[as_ref(str, String)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Creates a new [`Email`] if the given `address` is valid.
    #[must_use]
    pub fn new(address: impl Into<String>) -> Option<Self> {
        let address = address.into();
        Self::check(&address).then_some(Self(address))
    }

    /// Checks whether the given `address` is a valid [`Email`].
    fn check(address: impl AsRef<str>) -> bool {
        /// Regular expression checking [`Email`] format.
        static REGEX: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"^[^@\s]+@[^@\s.]+(\.[^@\s.]+)+$")
                .expect("valid regex")
        });

        let address = address.as_ref();
        address.len() <= 254 && REGEX.is_match(address)
    }
}

impl FromStr for Email {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Email`")
    }
}

/// Phone number of a [`User`].
#[derive(AsRef, Clone, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
#[as_ref(str, String)]
#[serde(transparent)]
pub struct Phone(String);

impl Phone {
    /// Creates a new [`Phone`] if the given `number` is valid.
    #[must_use]
    pub fn new(number: impl Into<String>) -> Option<Self> {
        let number = number.into();
        Self::check(&number).then_some(Self(number))
    }

    /// Checks whether the given `number` is a valid [`Phone`].
    fn check(number: impl AsRef<str>) -> bool {
        /// Regular expression checking [`Phone`] format.
        static REGEX: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"^\+?\d[\d\s-]{5,18}\d$").expect("valid regex")
        });

        REGEX.is_match(number.as_ref())
    }
}

impl FromStr for Phone {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Phone`")
    }
}

common::define_kind! {
    #[doc = "Role of a [`User`]."]
    enum Role {
        #[doc = "Regular customer."]
        User = "user",

        #[doc = "Store administrator."]
        Admin = "admin",

        #[doc = "Customer approved for the distribution program."]
        Distributor = "distributor",
    }
}

impl Default for Role {
    fn default() -> Self {
        Self::User
    }
}

impl Role {
    /// Returns [`Permission`]s granted by this [`Role`].
    #[must_use]
    pub fn permissions(self) -> Vec<Permission> {
        let mut granted = Permission::BASELINE.to_vec();
        match self {
            Self::User => {}
            Self::Admin => granted.push(Permission::Admin),
            Self::Distributor => granted.push(Permission::Distributor),
        }
        granted
    }
}

common::define_kind! {
    #[doc = "Permission to perform a storefront action."]
    enum Permission {
        #[doc = "Viewing product details."]
        ViewProduct = "view_product",

        #[doc = "Adding products to the cart."]
        AddToCart = "add_to_cart",

        #[doc = "Placing orders."]
        PlaceOrder = "place_order",

        #[doc = "Using the distribution program."]
        Distributor = "distributor",

        #[doc = "Administering the store."]
        Admin = "admin",
    }
}

impl Permission {
    /// [`Permission`]s every authenticated [`User`] holds.
    pub const BASELINE: [Self; 3] =
        [Self::ViewProduct, Self::AddToCart, Self::PlaceOrder];
}

/// Partial update of the [`User`] profile.
///
/// Only the provided fields are sent to the backend.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Patch {
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,

    /// New avatar URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,

    /// New [`Email`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<Email>,

    /// New [`Phone`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<Phone>,
}

impl Patch {
    /// Indicates whether this [`Patch`] changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nickname.is_none()
            && self.avatar.is_none()
            && self.email.is_none()
            && self.phone.is_none()
    }
}

/// [`DateTime`] when a [`User`] was created.
pub type CreationDateTime = DateTimeOf<(User, unit::Creation)>;

/// [`DateTime`] when a [`User`] was last modified.
pub type ModificationDateTime = DateTimeOf<(User, unit::Modification)>;

#[cfg(test)]
mod spec {
    use super::{Email, Password, Permission, Phone, Role, User, Username};

    #[test]
    fn validates_credentials() {
        assert!(Username::new("alice_01").is_some());
        assert!(Username::new("al").is_none());
        assert!(Username::new("alice smith").is_none());

        assert!(Password::new("").is_none());
        assert!(Password::new("s3cret").is_some());
        assert_eq!(
            format!("{:?}", Password::new("s3cret").unwrap()),
            "Password(***)",
        );

        assert!(Email::new("alice@example.com").is_some());
        assert!(Email::new("alice@localhost").is_none());
        assert!(Email::new("alice example.com").is_none());

        assert!(Phone::new("13812345678").is_some());
        assert!(Phone::new("+86 138-1234-5678").is_some());
        assert!(Phone::new("call me").is_none());
    }

    #[test]
    fn deserializes_sparse_backend_user() {
        let user: User = serde_json::from_str(
            r#"{"id": 7, "username": "alice", "email": "", "phone": "",
                "avatar": "", "balance": "12.50", "points": 30}"#,
        )
        .unwrap();

        assert_eq!(user.role, Role::User);
        assert_eq!(user.email, None);
        assert_eq!(user.phone, None);
        assert_eq!(user.avatar, None);
        assert_eq!(user.display_name(), "alice");
        assert_eq!(user.balance.unwrap().to_string(), "12.50");
    }

    #[test]
    fn grants_permissions_by_role() {
        assert_eq!(Role::User.permissions(), Permission::BASELINE.to_vec());
        assert!(Role::Distributor
            .permissions()
            .contains(&Permission::Distributor));
        assert!(!Role::Distributor.permissions().contains(&Permission::Admin));
        assert!(Role::Admin.permissions().contains(&Permission::Admin));
    }
}
