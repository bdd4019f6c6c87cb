//! [`Handler`] abstractions.

use std::{future::Future, rc::Rc, sync::Arc};

/// Executable handler.
///
/// Every operation of the client is expressed as a [`Handler`] of its
/// arguments: backend calls, durable storage access, commands and queries.
pub trait Handler<Args = ()> {
    /// Type of successful [`Handler`] result.
    type Ok;

    /// Type of this [`Handler`] error.
    type Err;

    /// Executes this [`Handler`] with the provided arguments.
    fn execute(
        &self,
        args: Args,
    ) -> impl Future<Output = Result<Self::Ok, Self::Err>>;
}

impl<Args, H> Handler<Args> for &H
where
    H: Handler<Args> + ?Sized,
{
    type Ok = H::Ok;
    type Err = H::Err;

    fn execute(
        &self,
        args: Args,
    ) -> impl Future<Output = Result<Self::Ok, Self::Err>> {
        (**self).execute(args)
    }
}

impl<Args, H> Handler<Args> for Rc<H>
where
    H: Handler<Args> + ?Sized,
{
    type Ok = H::Ok;
    type Err = H::Err;

    fn execute(
        &self,
        args: Args,
    ) -> impl Future<Output = Result<Self::Ok, Self::Err>> {
        (**self).execute(args)
    }
}

impl<Args, H> Handler<Args> for Arc<H>
where
    H: Handler<Args> + ?Sized,
{
    type Ok = H::Ok;
    type Err = H::Err;

    fn execute(
        &self,
        args: Args,
    ) -> impl Future<Output = Result<Self::Ok, Self::Err>> {
        (**self).execute(args)
    }
}

#[cfg(test)]
mod spec {
    use std::{convert::Infallible, rc::Rc, sync::Arc};

    use super::Handler;

    struct Double;

    impl Handler<u8> for Double {
        type Ok = u16;
        type Err = Infallible;

        async fn execute(&self, n: u8) -> Result<Self::Ok, Self::Err> {
            Ok(u16::from(n) * 2)
        }
    }

    async fn run<H: Handler<u8, Ok = u16, Err = Infallible>>(h: H) -> u16 {
        h.execute(21).await.unwrap()
    }

    #[tokio::test]
    async fn forwards_through_shared_handles() {
        assert_eq!(run(&Double).await, 42);
        assert_eq!(run(Rc::new(Double)).await, 42);
        assert_eq!(run(Arc::new(Double)).await, 42);
    }
}
