use serde::{Deserialize, Serialize};

/// Sickness value of a particle that has never been infected.
pub const VULNERABLE: i32 = 0;
/// Sickness value assigned on infection; the counter climbs from here.
pub const INFECTED: i32 = 1;
/// Sickness value of a particle that can no longer be infected.
pub const IMMUNE: i32 = -1;

/// Health of a single particle.
///
/// Variants are declared in order of severity so the derived ordering can be
/// used for thresholding. Transitions only ever move forward:
/// `Susceptible -> Infected -> Immune`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum HealthState {
    #[default]
    Susceptible,
    /// `sickness` starts at [`INFECTED`] and grows by one per tick.
    Infected { sickness: i32 },
    Immune,
}

impl HealthState {
    /// Freshly contracted infection.
    pub const FRESH_INFECTION: HealthState = HealthState::Infected {
        sickness: INFECTED,
    };

    /// Integer band value of this state.
    #[must_use]
    pub fn sickness(&self) -> i32 {
        match self {
            HealthState::Susceptible => VULNERABLE,
            HealthState::Infected { sickness } => *sickness,
            HealthState::Immune => IMMUNE,
        }
    }

    /// Maps a raw sickness counter back onto its band.
    ///
    /// Returns `None` for values outside every band.
    #[must_use]
    pub fn from_sickness(sickness: i32, recovery_period: i32) -> Option<HealthState> {
        match sickness {
            VULNERABLE => Some(HealthState::Susceptible),
            IMMUNE => Some(HealthState::Immune),
            s if (INFECTED..=recovery_period).contains(&s) => {
                Some(HealthState::Infected { sickness: s })
            }
            _ => None,
        }
    }

    #[must_use]
    pub fn is_susceptible(&self) -> bool {
        matches!(self, HealthState::Susceptible)
    }

    #[must_use]
    pub fn is_infected(&self) -> bool {
        matches!(self, HealthState::Infected { .. })
    }

    #[must_use]
    pub fn is_immune(&self) -> bool {
        matches!(self, HealthState::Immune)
    }
}

/// Display colour of a particle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Gray,
    Green,
}

impl Color {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Gray => "gray",
            Color::Green => "green",
        }
    }

    /// 8-bit RGB: red `(220, 40, 40)`, gray `(128, 128, 128)`, green `(40, 180, 70)`.
    #[must_use]
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Color::Red => (220, 40, 40),
            Color::Gray => (128, 128, 128),
            Color::Green => (40, 180, 70),
        }
    }
}

impl From<HealthState> for Color {
    fn from(state: HealthState) -> Self {
        match state {
            HealthState::Infected { .. } => Color::Red,
            HealthState::Susceptible => Color::Gray,
            HealthState::Immune => Color::Green,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
