//! Infrastructure layer.

pub mod api;
pub mod storage;

pub use self::{
    api::{Api, Endpoint, Http},
    storage::{Fs, Memory, Storage},
};
