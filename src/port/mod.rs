//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!   ┌───────────────┐      ┌──────────────────┐      ┌──────────────────┐
//!   │  CLI adapter  │ ───▶ │  SchemaBootstrap │ ◀─── │  SQLite adapter  │
//!   └───────────────┘      └──────────────────┘      └──────────────────┘
//! ```

pub mod outbound;

pub use outbound::bootstrap::SchemaBootstrap;
