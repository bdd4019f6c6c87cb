//! Execution of the terminal client [`Command`]s.

use std::{
    fmt,
    io::{self, Write},
};

use common::pagination;
use secrecy::SecretBox;
use serde::Serialize;
use service::{
    command::{
        self, oauth::Platform, AuthorizeOAuth, Login, Logout, OAuthLogin,
        RefreshUser, Register,
    },
    domain::{
        cart::Count,
        order::{self, Line, Payment, PaymentMethod},
        user::{Email, Password, Username},
    },
    query::{self, affiliate::ShareLink},
    Command as _, Navigation,
};
use tracing as log;

use crate::{
    args::{Affiliate, Cart, Command, OAuth, Orders},
    define_error, Context, Error, Notifier,
};

define_error! {
    enum ShellError {
        #[code = "LOGIN_REQUIRED"]
        #[level = Warning]
        #[message = "Please log in first"]
        LoginRequired,

        #[code = "INVALID_USERNAME"]
        #[level = Warning]
        #[message = "Username must be 3 to 150 letters, digits or `@.+-_`"]
        InvalidUsername,

        #[code = "INVALID_PASSWORD"]
        #[level = Warning]
        #[message = "Password must be 1 to 128 characters long"]
        InvalidPassword,

        #[code = "INVALID_EMAIL"]
        #[level = Warning]
        #[message = "Email address is malformed"]
        InvalidEmail,

        #[code = "INVALID_QUANTITY"]
        #[level = Warning]
        #[message = "Quantity must be positive"]
        InvalidQuantity,

        #[code = "INVALID_ORDER_ITEM"]
        #[level = Warning]
        #[message = "Ordered items must look like `<product_id>[x<quantity>]`"]
        InvalidOrderItem,

        #[code = "INVALID_ORDER_STATUS"]
        #[level = Warning]
        #[message = "Unknown order status"]
        InvalidOrderStatus,

        #[code = "INVALID_PAYMENT_METHOD"]
        #[level = Warning]
        #[message = "Unknown payment method"]
        InvalidPaymentMethod,

        #[code = "INVALID_PLATFORM"]
        #[level = Warning]
        #[message = "Unknown OAuth platform"]
        InvalidPlatform,

        #[code = "INVALID_PAGE"]
        #[level = Warning]
        #[message = "Page numbers start from 1"]
        InvalidPage,
    }
}

/// Executes the provided [`Command`], writing its results to `out`.
///
/// # Errors
///
/// If the [`Command`] fails. The failure has already been notified through
/// the [`Context`] by then.
pub async fn execute<N: Notifier>(
    ctx: &Context<N>,
    cmd: Command,
    out: &mut impl Write,
) -> Result<(), Error> {
    let res = dispatch(ctx, cmd, out).await;
    if res.is_err() {
        let location = ctx.service().router().location();
        if location.path() == service::router::LOGIN_PATH {
            log::info!("redirected to `{location}`");
        }
    }
    res
}

#[expect(clippy::too_many_lines, reason = "flat dispatch table")]
async fn dispatch<N: Notifier>(
    ctx: &Context<N>,
    cmd: Command,
    out: &mut impl Write,
) -> Result<(), Error> {
    let service = ctx.service();

    match cmd {
        Command::Login { username, password } => {
            open_login(ctx)?;
            let cmd = Login {
                username: required(
                    ctx,
                    Username::new(username),
                    ShellError::InvalidUsername,
                )?,
                password: secret(required(
                    ctx,
                    Password::new(password),
                    ShellError::InvalidPassword,
                )?),
            };
            let user = ctx.run(service.execute(cmd)).await?;
            let target = service.router().return_target();
            say(
                ctx,
                out,
                format_args!("Logged in as {}", user.display_name()),
            )?;
            say(ctx, out, format_args!("Continue at {target}"))
        }
        Command::Register {
            username,
            password,
            email,
        } => {
            open(ctx, "/register")?;
            let cmd = Register {
                username: required(
                    ctx,
                    Username::new(username),
                    ShellError::InvalidUsername,
                )?,
                password: secret(required(
                    ctx,
                    Password::new(password),
                    ShellError::InvalidPassword,
                )?),
                email: required(
                    ctx,
                    Email::new(email),
                    ShellError::InvalidEmail,
                )?,
            };
            let registered = ctx.run(service.execute(cmd)).await?;
            if registered.logged_in {
                say(
                    ctx,
                    out,
                    format_args!(
                        "Registered and logged in as {}",
                        registered.user.display_name(),
                    ),
                )
            } else {
                say(ctx, out, "Registered, please log in")
            }
        }
        Command::Logout => {
            if ctx.run(service.execute(Logout)).await? {
                say(ctx, out, "Logged out")
            } else {
                say(ctx, out, "No active session")
            }
        }
        Command::Whoami { refresh } => {
            open(ctx, "/profile")?;
            let user = if refresh {
                Some(ctx.run(service.execute(RefreshUser)).await?)
            } else {
                service.credentials().user()
            };
            match user {
                Some(user) => show(ctx, out, &user),
                None => say(
                    ctx,
                    out,
                    "Session restored, run with `--refresh` to fetch the user",
                ),
            }
        }
        Command::Navigate { path } => match service.navigate(&path) {
            Navigation::Proceed(location) => {
                say(ctx, out, format_args!("Proceed to {location}"))
            }
            Navigation::Redirect { from, to } => {
                say(ctx, out, format_args!("Redirect from {from} to {to}"))
            }
        },
        Command::Products {
            search,
            category,
            page,
        } => {
            let page = paging(ctx, page)?;
            let products = if let Some(keyword) = search {
                open(ctx, "/search")?;
                ctx.run(service.execute(query::product::Search {
                    keyword,
                    page,
                    sort: None,
                }))
                .await?
            } else {
                open(ctx, "/")?;
                ctx.run(service.execute(query::product::List {
                    page,
                    category: category.map(Into::into),
                    search: None,
                    sort: None,
                }))
                .await?
            };
            show(ctx, out, &products)
        }
        Command::Product { id } => {
            open(ctx, &format!("/product/{id}"))?;
            let product = ctx
                .run(service.execute(query::product::ById(id.into())))
                .await?;
            show(ctx, out, &product)
        }
        Command::Categories => {
            open(ctx, "/")?;
            let categories =
                ctx.run(service.execute(query::product::Categories)).await?;
            show(ctx, out, &categories)
        }
        Command::Cart(action) => {
            open(ctx, "/cart")?;
            cart(ctx, action, out).await
        }
        Command::Orders(action) => orders(ctx, action, out).await,
        Command::Addresses => {
            open(ctx, "/address")?;
            let addresses =
                ctx.run(service.execute(query::address::List)).await?;
            show(ctx, out, &addresses)
        }
        Command::Coupons { available } => {
            open(ctx, "/coupons")?;
            if available {
                let coupons =
                    ctx.run(service.execute(query::coupon::Available)).await?;
                show(ctx, out, &coupons)
            } else {
                let coupons = ctx
                    .run(service.execute(query::coupon::List {
                        page: pagination::Arguments::default(),
                        status: None,
                    }))
                    .await?;
                show(ctx, out, &coupons)
            }
        }
        Command::Affiliate(action) => {
            open(ctx, "/affiliate")?;
            match action {
                Affiliate::Stats => {
                    let stats = ctx
                        .run(service.execute(query::affiliate::StatsOf))
                        .await?;
                    show(ctx, out, &stats)
                }
                Affiliate::Links => {
                    let links = ctx
                        .run(service.execute(query::affiliate::Links {
                            page: pagination::Arguments::default(),
                            product: None,
                        }))
                        .await?;
                    show(ctx, out, &links)
                }
                Affiliate::Share { code } => {
                    let url =
                        ctx.run(service.execute(ShareLink { code })).await?;
                    say(ctx, out, url)
                }
            }
        }
        Command::Withdrawals => {
            open(ctx, "/distribution/withdrawal")?;
            let withdrawals = ctx
                .run(service.execute(query::withdrawal::List {
                    page: pagination::Arguments::default(),
                    status: None,
                }))
                .await?;
            show(ctx, out, &withdrawals)
        }
        Command::Oauth(OAuth::Authorize { platform }) => {
            open_login(ctx)?;
            let platform = platform_of(ctx, &platform)?;
            let url = ctx
                .run(service.execute(AuthorizeOAuth { platform }))
                .await?;
            say(ctx, out, url)
        }
        Command::Oauth(OAuth::Callback {
            platform,
            code,
            state,
        }) => {
            let platform = platform_of(ctx, &platform)?;
            open(ctx, &format!("/auth/callback/{platform}"))?;
            let output = ctx
                .run(service.execute(OAuthLogin {
                    platform,
                    code,
                    state,
                }))
                .await?;
            let greeting = if output.is_new_user {
                "Welcome"
            } else {
                "Logged in as"
            };
            say(
                ctx,
                out,
                format_args!("{greeting} {}", output.user.display_name()),
            )
        }
    }
}

/// Executes the provided [`Cart`] action.
async fn cart<N: Notifier>(
    ctx: &Context<N>,
    action: Cart,
    out: &mut impl Write,
) -> Result<(), Error> {
    use command::cart::{AddToCart, ClearCart, RemoveFromCart, UpdateCartItem};

    let service = ctx.service();
    match action {
        Cart::List => {
            let items = ctx.run(service.execute(query::cart::Items)).await?;
            show(ctx, out, &items)
        }
        Cart::Add {
            product_id,
            quantity,
        } => {
            let item = ctx
                .run(service.execute(AddToCart {
                    product_id: product_id.into(),
                    quantity: quantity_of(ctx, quantity)?,
                }))
                .await?;
            show(ctx, out, &item)
        }
        Cart::Update { id, quantity } => {
            let item = ctx
                .run(service.execute(UpdateCartItem {
                    id: id.into(),
                    quantity: quantity_of(ctx, quantity)?,
                }))
                .await?;
            show(ctx, out, &item)
        }
        Cart::Remove { id } => {
            _ = ctx.run(service.execute(RemoveFromCart(id.into()))).await?;
            say(ctx, out, "Removed")
        }
        Cart::Clear => {
            _ = ctx.run(service.execute(ClearCart)).await?;
            say(ctx, out, "Cart cleared")
        }
    }
}

/// Executes the provided [`Orders`] action.
async fn orders<N: Notifier>(
    ctx: &Context<N>,
    action: Orders,
    out: &mut impl Write,
) -> Result<(), Error> {
    use command::order::{CancelOrder, ConfirmOrder, CreateOrder, PayOrder};

    let service = ctx.service();
    match action {
        Orders::List { status, page } => {
            open(ctx, "/orders")?;
            let status = status
                .map(|s| {
                    s.parse::<order::Status>()
                        .map_err(|_| ctx.fail(ShellError::InvalidOrderStatus))
                })
                .transpose()?;
            let page = paging(ctx, page)?;
            let orders = ctx
                .run(service.execute(query::order::List { page, status }))
                .await?;
            show(ctx, out, &orders)
        }
        Orders::Show { id } => {
            open(ctx, &format!("/order/{id}"))?;
            let order = ctx
                .run(service.execute(query::order::ById(id.into())))
                .await?;
            show(ctx, out, &order)?;
            if matches!(
                order.status,
                order::Status::Shipped | order::Status::Completed,
            ) {
                let logistics = ctx
                    .run(service.execute(query::order::LogisticsOf(order.id)))
                    .await?;
                show(ctx, out, &logistics)?;
            }
            Ok(())
        }
        Orders::Create {
            address,
            items,
            coupon,
        } => {
            open(ctx, "/checkout")?;
            let items = items
                .iter()
                .map(|raw| {
                    required(ctx, line_of(raw), ShellError::InvalidOrderItem)
                })
                .collect::<Result<Vec<_>, _>>()?;
            let order = ctx
                .run(service.execute(CreateOrder(order::Draft {
                    address_id: address.into(),
                    items,
                    coupon_id: coupon.map(Into::into),
                })))
                .await?;
            show(ctx, out, &order)
        }
        Orders::Cancel { id } => {
            open(ctx, &format!("/order/{id}"))?;
            _ = ctx.run(service.execute(CancelOrder(id.into()))).await?;
            say(ctx, out, "Order cancelled")
        }
        Orders::Pay { id, method } => {
            open(ctx, &format!("/payment/{id}"))?;
            let payment_method = method
                .parse::<PaymentMethod>()
                .map_err(|_| ctx.fail(ShellError::InvalidPaymentMethod))?;
            let payload = ctx
                .run(service.execute(PayOrder {
                    id: id.into(),
                    payment: Payment {
                        payment_method,
                        coupon_id: None,
                    },
                }))
                .await?;
            show(ctx, out, &payload)
        }
        Orders::Confirm { id } => {
            open(ctx, &format!("/order/{id}"))?;
            _ = ctx.run(service.execute(ConfirmOrder(id.into()))).await?;
            say(ctx, out, "Receipt confirmed")
        }
    }
}

/// Navigates to the page at the provided `path`, failing if the route guard
/// redirects to the login entry point.
fn open<N: Notifier>(ctx: &Context<N>, path: &str) -> Result<(), Error> {
    match ctx.service().navigate(path) {
        Navigation::Proceed(_) => Ok(()),
        Navigation::Redirect { to, .. } => {
            log::debug!("`{path}` requires a session, redirected to `{to}`");
            Err(ctx.fail(ShellError::LoginRequired))
        }
    }
}

/// Opens the login page, keeping the current one if it is the login page
/// already, so its `redirect` target survives.
fn open_login<N: Notifier>(ctx: &Context<N>) -> Result<(), Error> {
    let location = ctx.service().router().location();
    if location.path() == service::router::LOGIN_PATH {
        return Ok(());
    }
    open(ctx, service::router::LOGIN_PATH)
}

fn required<N: Notifier, T>(
    ctx: &Context<N>,
    value: Option<T>,
    err: ShellError,
) -> Result<T, Error> {
    value.ok_or_else(|| ctx.fail(err))
}

fn secret(password: Password) -> SecretBox<Password> {
    SecretBox::new(Box::new(password))
}

fn paging<N: Notifier>(
    ctx: &Context<N>,
    page: u32,
) -> Result<pagination::Arguments, Error> {
    required(
        ctx,
        pagination::Arguments::new(
            page,
            pagination::Arguments::DEFAULT_PAGE_SIZE,
        ),
        ShellError::InvalidPage,
    )
}

fn quantity_of<N: Notifier>(
    ctx: &Context<N>,
    quantity: u32,
) -> Result<Count, Error> {
    required(ctx, Count::new(quantity), ShellError::InvalidQuantity)
}

fn platform_of<N: Notifier>(
    ctx: &Context<N>,
    platform: &str,
) -> Result<Platform, Error> {
    platform
        .parse()
        .map_err(|_| ctx.fail(ShellError::InvalidPlatform))
}

/// Parses an ordered [`Line`] formatted as `<product_id>[x<quantity>]`.
fn line_of(raw: &str) -> Option<Line> {
    let (product_id, quantity) = raw.split_once('x').unwrap_or((raw, "1"));
    Some(Line {
        product_id: product_id.trim().parse::<u64>().ok()?.into(),
        quantity: Count::new(quantity.trim().parse().ok()?)?,
    })
}

fn say<N: Notifier>(
    ctx: &Context<N>,
    out: &mut impl Write,
    message: impl fmt::Display,
) -> Result<(), Error> {
    writeln!(out, "{message}").map_err(|e| ctx.fail(e))
}

fn show<N: Notifier>(
    ctx: &Context<N>,
    out: &mut impl Write,
    value: &impl Serialize,
) -> Result<(), Error> {
    serde_json::to_writer_pretty(&mut *out, value).map_err(|e| ctx.fail(e))?;
    writeln!(out).map_err(|e: io::Error| ctx.fail(e))
}

#[cfg(test)]
mod spec {
    use std::{cell::RefCell, path::Path, time::Duration};

    use serde_json::json;
    use service::domain::user::session::Token;
    use wiremock::{
        matchers::{method, path},
        Mock, MockServer, ResponseTemplate,
    };

    use crate::{
        args::{Cart, Command, Orders},
        build_service,
        config::{self, Config},
        error::Level,
        Context, Notifier,
    };

    #[derive(Debug, Default)]
    struct Recorder(RefCell<Vec<(Level, String)>>);

    impl Notifier for Recorder {
        fn notify(&self, level: Level, message: &str) {
            self.0.borrow_mut().push((level, message.to_owned()));
        }
    }

    impl Recorder {
        fn take(&self) -> Vec<(Level, String)> {
            self.0.take()
        }
    }

    fn config(server: &MockServer, dir: &Path) -> Config {
        Config {
            api: config::Api {
                base_url: format!("{}/api/", server.uri()).parse().unwrap(),
                timeout: Duration::from_millis(500),
            },
            storage: config::Storage {
                path: dir.to_owned(),
            },
            ..Config::default()
        }
    }

    async fn context(server: &MockServer, dir: &Path) -> Context<Recorder> {
        let service = build_service(&config(server, dir)).unwrap();
        _ = service.start().await;
        Context::new(service, Recorder::default())
    }

    async fn log_in(ctx: &Context<Recorder>) {
        ctx.service()
            .credentials()
            .set_session(
                Token::new("abc").unwrap(),
                serde_json::from_value(json!({"id": 1, "username": "alice"}))
                    .unwrap(),
            )
            .await;
    }

    async fn run(
        ctx: &Context<Recorder>,
        cmd: Command,
    ) -> (Result<(), crate::Error>, String) {
        let mut out = Vec::new();
        let res = super::execute(ctx, cmd, &mut out).await;
        (res, String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn redirects_anonymous_user_from_guarded_page() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(&server, dir.path()).await;

        let (res, out) = run(&ctx, Command::Cart(Cart::List)).await;

        assert_eq!(res.unwrap_err().code, "LOGIN_REQUIRED");
        assert_eq!(out, "");
        assert_eq!(
            ctx.notifier().take(),
            [(Level::Warning, "Please log in first".to_owned())],
        );
        assert_eq!(
            ctx.service().router().location().to_string(),
            "/login?redirect=%2Fcart",
        );
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn notifies_session_expiry_once() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/orders/cart/"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(&server, dir.path()).await;
        log_in(&ctx).await;

        let (res, _) = run(&ctx, Command::Cart(Cart::List)).await;

        assert_eq!(res.unwrap_err().code, "SESSION_EXPIRED");
        assert_eq!(
            ctx.notifier().take(),
            [(
                Level::Warning,
                "Session expired, please log in again".to_owned(),
            )],
        );
        assert!(!ctx.service().credentials().is_authenticated());
        assert_eq!(
            ctx.service().router().location().to_string(),
            "/login?redirect=%2Fcart",
        );

        let restarted = context(&server, dir.path()).await;
        assert!(!restarted.service().credentials().is_authenticated());
    }

    #[tokio::test]
    async fn keeps_session_on_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/orders/cart/"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(&server, dir.path()).await;
        log_in(&ctx).await;

        let (res, _) = run(&ctx, Command::Cart(Cart::List)).await;

        assert_eq!(res.unwrap_err().code, "SERVER_ERROR");
        assert_eq!(ctx.notifier().take().len(), 1);
        assert!(ctx.service().credentials().is_authenticated());
        assert_eq!(ctx.service().router().location().to_string(), "/cart");
    }

    #[tokio::test]
    async fn restores_login_after_restart_without_network() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/login/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "token": "abc",
                "user": {"id": 1, "username": "alice", "nickname": "Alice"},
            })))
            .expect(1)
            .mount(&server)
            .await;
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(&server, dir.path()).await;

        let (res, out) = run(
            &ctx,
            Command::Login {
                username: "alice".into(),
                password: "s3cret".into(),
            },
        )
        .await;

        res.unwrap();
        assert_eq!(out, "Logged in as Alice\nContinue at /\n");
        assert!(ctx.notifier().take().is_empty());

        let restarted = context(&server, dir.path()).await;
        let credentials = restarted.service().credentials();
        assert!(credentials.is_authenticated());
        assert_eq!(credentials.token().unwrap().as_str(), "abc");
        assert_eq!(server.received_requests().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn continues_at_redirect_target_after_login() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/login/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "token": "abc",
                "user": {"id": 1, "username": "alice"},
            })))
            .mount(&server)
            .await;
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(&server, dir.path()).await;

        let (res, _) = run(&ctx, Command::Cart(Cart::List)).await;
        assert_eq!(res.unwrap_err().code, "LOGIN_REQUIRED");
        let (res, out) = run(
            &ctx,
            Command::Login {
                username: "alice".into(),
                password: "s3cret".into(),
            },
        )
        .await;

        res.unwrap();
        assert_eq!(out, "Logged in as alice\nContinue at /cart\n");
        assert_eq!(
            ctx.service().router().location().to_string(),
            "/login?redirect=%2Fcart",
        );
    }

    #[tokio::test]
    async fn notifies_each_rejection_once() {
        let server = MockServer::start().await;
        for (status, route) in
            [(403_u16, "/api/orders/"), (404, "/api/addresses/")]
        {
            Mock::given(method("GET"))
                .and(path(route))
                .respond_with(ResponseTemplate::new(status))
                .mount(&server)
                .await;
        }
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(&server, dir.path()).await;
        log_in(&ctx).await;

        let (res, _) = run(
            &ctx,
            Command::Orders(Orders::List {
                status: None,
                page: 1,
            }),
        )
        .await;
        assert_eq!(res.unwrap_err().code, "FORBIDDEN");
        assert_eq!(
            ctx.notifier().take(),
            [(Level::Error, "Access forbidden".to_owned())],
        );

        let (res, _) = run(&ctx, Command::Addresses).await;
        assert_eq!(res.unwrap_err().code, "NOT_FOUND");
        assert_eq!(
            ctx.notifier().take(),
            [(Level::Error, "Resource not found".to_owned())],
        );
        assert!(ctx.service().credentials().is_authenticated());
    }

    #[tokio::test]
    async fn notifies_network_failure_once() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/orders/cart/"))
            .respond_with(
                ResponseTemplate::new(200).set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(&server, dir.path()).await;
        log_in(&ctx).await;

        let (res, out) = run(&ctx, Command::Cart(Cart::List)).await;

        assert_eq!(res.unwrap_err().code, "NETWORK_ERROR");
        assert_eq!(out, "");
        assert_eq!(
            ctx.notifier().take(),
            [(
                Level::Error,
                "Network error, please check the connection".to_owned(),
            )],
        );
        assert!(ctx.service().credentials().is_authenticated());
    }

    #[tokio::test]
    async fn rejects_malformed_input_before_any_request() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(&server, dir.path()).await;

        let (res, _) = run(
            &ctx,
            Command::Login {
                username: "a".into(),
                password: "s3cret".into(),
            },
        )
        .await;

        assert_eq!(res.unwrap_err().code, "INVALID_USERNAME");
        assert_eq!(ctx.notifier().take().len(), 1);
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn reports_navigation_outcome() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(&server, dir.path()).await;

        let (_, anonymous) = run(
            &ctx,
            Command::Navigate {
                path: "/orders?status=paid".into(),
            },
        )
        .await;
        log_in(&ctx).await;
        let (_, authenticated) = run(
            &ctx,
            Command::Navigate {
                path: "/orders?status=paid".into(),
            },
        )
        .await;

        assert_eq!(
            anonymous,
            "Redirect from /orders?status=paid \
             to /login?redirect=%2Forders%3Fstatus%3Dpaid\n",
        );
        assert_eq!(authenticated, "Proceed to /orders?status=paid\n");
    }

    #[test]
    fn parses_order_lines() {
        let line = super::line_of("12x3").unwrap();
        assert_eq!(u64::from(line.product_id), 12);
        assert_eq!(u32::from(line.quantity), 3);

        assert_eq!(u32::from(super::line_of("7").unwrap().quantity), 1);
        assert!(super::line_of("7x0").is_none());
        assert!(super::line_of("x2").is_none());
    }
}
