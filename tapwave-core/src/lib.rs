//! `tapwave-core` is a crate that provides the timing-judgement and scoring engine of a simple
//! click-the-circles rhythm game.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![deny(unsafe_code)]

extern crate alloc;

mod macros;

pub mod config;
pub mod judgement;
pub mod map;
pub mod object;
pub mod score;
pub mod state;
pub mod timing;
