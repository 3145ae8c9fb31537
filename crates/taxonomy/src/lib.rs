#![allow(clippy::too_many_arguments)]

pub mod domain;
pub mod shared;
