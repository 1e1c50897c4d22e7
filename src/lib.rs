#![doc = include_str!("../README.md")]

mod common;
pub mod constants;
mod platform;
#[cfg(feature = "serde")]
mod serde_impl;
mod typed;
mod unix;
mod windows;

mod private {
    /// Used to mark traits as sealed to prevent implements from others outside of this crate
    pub trait Sealed {}
}

pub use common::*;
pub use platform::*;
pub use typed::*;
pub use unix::{UnixAbsolutePath, UnixDialect, UnixPath, UnixRelativePath};
pub use windows::{WindowsAbsolutePath, WindowsDialect, WindowsPath, WindowsRelativePath};
