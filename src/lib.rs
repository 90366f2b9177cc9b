//! DPR Analyzer - scoring engine for project status reports
//!
//! This crate turns free-text Detailed Project Report updates and a few
//! structured project facts into sentiment, completeness, compliance and risk
//! scores, a delay forecast, extracted entities, and recommended actions.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
