//! Terminal browser for trading-card data served by a public REST API.
//!
//! Layers, leaf first: [`api`] (HTTP client and wire records),
//! [`repository`], [`usecase`], [`controller`], and the terminal [`ui`].

pub mod api;
pub mod args;
pub mod card;
pub mod config;
pub mod controller;
pub mod logging;
pub mod repository;
pub mod scope;
pub mod ui;
pub mod usecase;
