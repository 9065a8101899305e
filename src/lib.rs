//! Hotel Operations Engine
//!
//! This crate provides the two computations behind a hotel operations
//! dashboard: a day-by-day room capacity forecast that nets event and
//! room-only demand against inventory and maintenance holds, and a Ghana
//! PAYE payroll calculator with SSNIT and Tier 2/Tier 3 pension deductions.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
