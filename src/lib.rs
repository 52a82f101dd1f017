//! Core library functions for the sociogram analyzer

pub mod config;
pub mod data;
pub mod graph;
pub mod cluster;
pub mod analysis;
pub mod layout;
pub mod storage;
pub mod demo;

pub use anyhow::{Result, anyhow};
