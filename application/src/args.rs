//! [`Args`] definitions.

use clap::{Parser, Subcommand};

/// Terminal client of the storefront.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,

    /// Action to perform.
    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    /// Parses command line arguments.
    ///
    /// # Errors
    ///
    /// Errors if failed to parse command line arguments.
    pub fn parse() -> Result<Self, clap::Error> {
        <Self as Parser>::try_parse()
    }
}

/// Action of the terminal client.
#[derive(Clone, Debug, Subcommand)]
pub enum Command {
    /// Logs in with a username and a password.
    Login {
        /// Username to log in with.
        username: String,

        /// Password to log in with.
        #[arg(short, long)]
        password: String,
    },

    /// Registers a new account.
    Register {
        /// Username of the new account.
        username: String,

        /// Password of the new account.
        #[arg(short, long)]
        password: String,

        /// Email of the new account.
        #[arg(short, long)]
        email: String,
    },

    /// Ends the current session.
    Logout,

    /// Shows the current user.
    Whoami {
        /// Fetch the user from the backend instead of the local session.
        #[arg(long)]
        refresh: bool,
    },

    /// Checks whether a storefront page can be opened.
    Navigate {
        /// Path of the page, with an optional query.
        path: String,
    },

    /// Lists or searches products.
    Products {
        /// Keyword to search for.
        #[arg(short, long)]
        search: Option<String>,

        /// Category to list.
        #[arg(short, long)]
        category: Option<u64>,

        /// Page to show.
        #[arg(long, default_value_t = 1)]
        page: u32,
    },

    /// Shows a product.
    Product {
        /// ID of the product.
        id: u64,
    },

    /// Lists product categories.
    Categories,

    /// Manages the shopping cart.
    #[command(subcommand)]
    Cart(Cart),

    /// Manages orders.
    #[command(subcommand)]
    Orders(Orders),

    /// Lists shipping addresses.
    Addresses,

    /// Lists coupons.
    Coupons {
        /// List only coupons applicable right now.
        #[arg(long)]
        available: bool,
    },

    /// Shows the affiliate program.
    #[command(subcommand)]
    Affiliate(Affiliate),

    /// Lists withdrawals of earned commissions.
    Withdrawals,

    /// Logs in through a third-party platform.
    #[command(subcommand)]
    Oauth(OAuth),
}

/// Shopping cart action.
#[derive(Clone, Debug, Subcommand)]
pub enum Cart {
    /// Lists the cart items.
    List,

    /// Adds a product to the cart.
    Add {
        /// ID of the product.
        product_id: u64,

        /// Number of units.
        #[arg(default_value_t = 1)]
        quantity: u32,
    },

    /// Sets the quantity of a cart item.
    Update {
        /// ID of the cart item.
        id: u64,

        /// New number of units.
        quantity: u32,
    },

    /// Removes a cart item.
    Remove {
        /// ID of the cart item.
        id: u64,
    },

    /// Removes every cart item.
    Clear,
}

/// Order action.
#[derive(Clone, Debug, Subcommand)]
pub enum Orders {
    /// Lists orders.
    List {
        /// Status to filter by.
        #[arg(short, long)]
        status: Option<String>,

        /// Page to show.
        #[arg(long, default_value_t = 1)]
        page: u32,
    },

    /// Shows an order with its logistics.
    Show {
        /// ID of the order.
        id: u64,
    },

    /// Places an order.
    Create {
        /// ID of the shipping address.
        #[arg(short, long)]
        address: u64,

        /// Ordered products as `<product_id>[x<quantity>]`.
        #[arg(required = true)]
        items: Vec<String>,

        /// ID of the coupon to apply.
        #[arg(long)]
        coupon: Option<u64>,
    },

    /// Cancels a pending order.
    Cancel {
        /// ID of the order.
        id: u64,
    },

    /// Pays a pending order.
    Pay {
        /// ID of the order.
        id: u64,

        /// Payment method: `wechat`, `alipay` or `balance`.
        #[arg(short, long, default_value = "balance")]
        method: String,
    },

    /// Confirms receipt of a shipped order.
    Confirm {
        /// ID of the order.
        id: u64,
    },
}

/// Affiliate program action.
#[derive(Clone, Debug, Subcommand)]
pub enum Affiliate {
    /// Shows the affiliate statistics.
    Stats,

    /// Lists generated affiliate links.
    Links,

    /// Builds a shareable link for an affiliate code.
    Share {
        /// Affiliate code.
        code: String,
    },
}

/// Third-party login action.
#[derive(Clone, Debug, Subcommand)]
pub enum OAuth {
    /// Prints the authorization URL to open.
    Authorize {
        /// Platform: `wechat` or `douyin`.
        platform: String,
    },

    /// Completes the authorization with the code the platform returned.
    Callback {
        /// Platform: `wechat` or `douyin`.
        platform: String,

        /// Authorization code.
        code: String,

        /// Echoed `state` parameter.
        #[arg(short, long)]
        state: Option<String>,
    },
}

#[cfg(test)]
mod spec {
    use clap::Parser as _;

    use super::{Args, Cart, Command, Orders};

    #[test]
    fn parses_nested_subcommands() {
        let args =
            Args::try_parse_from(["shop", "cart", "add", "5"]).unwrap();
        assert_eq!(args.config, "config.toml");
        assert!(matches!(
            args.command,
            Command::Cart(Cart::Add {
                product_id: 5,
                quantity: 1,
            }),
        ));

        let args = Args::try_parse_from([
            "shop", "-c", "prod.toml", "orders", "create", "-a", "3", "1x2",
            "7",
        ])
        .unwrap();
        assert_eq!(args.config, "prod.toml");
        let Command::Orders(Orders::Create {
            address,
            items,
            coupon,
        }) = args.command
        else {
            panic!("unexpected command");
        };
        assert_eq!(address, 3);
        assert_eq!(items, ["1x2", "7"]);
        assert_eq!(coupon, None);
    }

    #[test]
    fn requires_password_to_log_in() {
        assert!(Args::try_parse_from(["shop", "login", "alice"]).is_err());
    }
}
