//! Burnout AI - Employee Wellness Prediction Service
//!
//! This crate implements a burnout risk assessment workflow: eight
//! workplace-behavior metrics are collected per submission, forwarded to a
//! prediction backend, and the returned score is classified into a
//! Low/Medium/High risk band.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
