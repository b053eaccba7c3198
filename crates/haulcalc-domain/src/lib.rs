//! Domain layer for haulcalc
//!
//! Pure models and calculation services: single-load estimation and
//! batch profitability analysis. No IO here; loaders and exporters live
//! in haulcalc-infra.

pub mod model;
pub mod service;
