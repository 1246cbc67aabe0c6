//! Canonical reference data for the lookup tables.
//!
//! Each row is keyed by its natural key (state abbreviation, role name,
//! tier name). Seeding is an upsert on that key, so these slices are the
//! complete, expected contents of their tables.

/// A US state: (abbreviation, name).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateSeed {
    pub abbreviation: &'static str,
    pub name: &'static str,
}

/// A role: (name, description).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleSeed {
    pub name: &'static str,
    pub description: &'static str,
}

/// A payment tier, identified by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentTierSeed {
    pub name: &'static str,
}

const fn state(abbreviation: &'static str, name: &'static str) -> StateSeed {
    StateSeed { abbreviation, name }
}

pub const STATES: &[StateSeed] = &[
    state("AL", "Alabama"),
    state("AK", "Alaska"),
    state("AZ", "Arizona"),
    state("AR", "Arkansas"),
    state("CA", "California"),
    state("CO", "Colorado"),
    state("CT", "Connecticut"),
    state("DE", "Delaware"),
    state("FL", "Florida"),
    state("GA", "Georgia"),
    state("HI", "Hawaii"),
    state("ID", "Idaho"),
    state("IL", "Illinois"),
    state("IN", "Indiana"),
    state("IA", "Iowa"),
    state("KS", "Kansas"),
    state("KY", "Kentucky"),
    state("LA", "Louisiana"),
    state("ME", "Maine"),
    state("MD", "Maryland"),
    state("MA", "Massachusetts"),
    state("MI", "Michigan"),
    state("MN", "Minnesota"),
    state("MS", "Mississippi"),
    state("MO", "Missouri"),
    state("MT", "Montana"),
    state("NE", "Nebraska"),
    state("NV", "Nevada"),
    state("NH", "New Hampshire"),
    state("NJ", "New Jersey"),
    state("NM", "New Mexico"),
    state("NY", "New York"),
    state("NC", "North Carolina"),
    state("ND", "North Dakota"),
    state("OH", "Ohio"),
    state("OK", "Oklahoma"),
    state("OR", "Oregon"),
    state("PA", "Pennsylvania"),
    state("RI", "Rhode Island"),
    state("SC", "South Carolina"),
    state("SD", "South Dakota"),
    state("TN", "Tennessee"),
    state("TX", "Texas"),
    state("UT", "Utah"),
    state("VT", "Vermont"),
    state("VA", "Virginia"),
    state("WA", "Washington"),
    state("WV", "West Virginia"),
    state("WI", "Wisconsin"),
    state("WY", "Wyoming"),
];

pub const ROLES: &[RoleSeed] = &[
    RoleSeed {
        name: "User",
        description: "Regular user account",
    },
    RoleSeed {
        name: "Employee",
        description: "Employee account with some elevated privileges and benefits",
    },
    RoleSeed {
        name: "Admin",
        description: "Admin account with all privilege",
    },
];

/// Tiers in seed order; the first one is the default for new users.
pub const PAYMENT_TIERS: &[PaymentTierSeed] = &[
    PaymentTierSeed { name: "Basic" },
    PaymentTierSeed { name: "Advanced" },
    PaymentTierSeed { name: "Premium" },
];
