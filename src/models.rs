//! Data models for coating and biogas estimates

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::InputError;

/// Declares a categorical input: known labels (plus aliases) and a
/// catch-all `Other` that keeps the raw label.
macro_rules! category {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident => $label:literal $(| $alias:literal)*),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($variant,)+
            Other(String),
        }

        impl $name {
            /// Every recognised variant, in display order.
            pub const KNOWN: &'static [$name] = &[$($name::$variant),+];

            /// Parse a label. Never fails; unknown labels become `Other`.
            pub fn parse(raw: &str) -> Self {
                let trimmed = raw.trim();
                match trimmed.to_lowercase().as_str() {
                    $($label $(| $alias)* => $name::$variant,)+
                    _ => $name::Other(trimmed.to_string()),
                }
            }

            pub fn label(&self) -> &str {
                match self {
                    $($name::$variant => $label,)+
                    $name::Other(raw) => raw,
                }
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                Self::parse(raw)
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                Self::parse(&raw)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.label().to_string()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(self.label())
            }
        }
    };
}

category! {
    /// Produce being coated
    ObjectKind {
        Apple => "apple" | "apel",
        Banana => "banana" | "pisang",
        Tomato => "tomato" | "tomat",
        Cheese => "cheese" | "keju",
    }
}

category! {
    /// Edible coating material
    CoatingKind {
        Pectin => "pectin" | "pektin",
        Chitosan => "chitosan" | "kitosan",
        Wax => "wax",
    }
}

category! {
    /// How the coating solution is applied
    ApplicationMethod {
        Spray => "spray",
        Dip => "dip",
        Brush => "brush",
    }
}

category! {
    /// Feedstock for anaerobic digestion
    WasteType {
        Food => "food",
        Manure => "manure",
        Green => "green",
    }
}

/// Inputs for a single coating run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoatingRequest {
    pub object: ObjectKind,
    pub coating: CoatingKind,
    pub method: ApplicationMethod,
    pub concentration_percent: f64,
    pub volume_ml: f64,
}

impl CoatingRequest {
    /// Optional strict check. The estimator itself accepts any values.
    pub fn validate(&self) -> Result<(), InputError> {
        if self.concentration_percent < 0.0 {
            return Err(InputError::NegativeConcentration(self.concentration_percent));
        }
        if self.volume_ml < 0.0 {
            return Err(InputError::NegativeVolume(self.volume_ml));
        }
        Ok(())
    }
}

/// Outcome of a coating run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoatingResult {
    pub object: ObjectKind,
    pub coating: CoatingKind,
    pub volume_ml: f64,
    pub solids_grams: f64,
    pub estimated_extension_days: u32,
    pub note: String,
}

/// Inputs for a biogas estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiogasRequest {
    pub waste_type: WasteType,
    pub mass_kg: f64,
    /// Recorded with the result but not used by any formula.
    #[serde(default)]
    pub retention_days: Option<f64>,
}

impl BiogasRequest {
    pub fn validate(&self) -> Result<(), InputError> {
        if self.mass_kg < 0.0 {
            return Err(InputError::NegativeMass(self.mass_kg));
        }
        match self.retention_days {
            Some(days) if days < 0.0 => Err(InputError::NegativeRetention(days)),
            _ => Ok(()),
        }
    }
}

/// Outcome of a biogas estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiogasResult {
    pub waste_type: WasteType,
    pub mass_kg: f64,
    pub total_volatile_solids_kg: f64,
    pub methane_m3: f64,
    pub biogas_m3: f64,
    pub theoretical_energy_kwh: f64,
}

/// A biogas result as kept in the session, with the retention time the
/// user entered alongside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiogasRecord {
    #[serde(flatten)]
    pub result: BiogasResult,
    pub retention_days: Option<f64>,
}
