//! Shared primitive types used across the advisor core.

/// A stable, unique identifier for one advisory session.
pub type SessionId = String;

/// Monetary amounts in whole currency units.
pub type Money = f64;
