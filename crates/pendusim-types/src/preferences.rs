//! Pendulum preferences exchanged with the preference store.

use serde::{Deserialize, Serialize};

/// Session defaults for a pendulum, as the preference store keeps them.
///
/// The angle is stored in degrees, matching the control surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PendulumPreferences {
    /// String length in meters
    pub default_length: f64,

    /// Bob mass in kilograms
    pub default_mass: f64,

    /// Release angle in degrees
    pub default_angle: f64,
}

impl Default for PendulumPreferences {
    fn default() -> Self {
        Self {
            default_length: 1.0,
            default_mass: 0.5,
            default_angle: 45.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let prefs = PendulumPreferences::default();
        assert_eq!(prefs.default_length, 1.0);
        assert_eq!(prefs.default_mass, 0.5);
        assert_eq!(prefs.default_angle, 45.0);
    }

    #[test]
    fn test_store_field_names() {
        let prefs: PendulumPreferences =
            serde_json::from_str(r#"{ "defaultLength": 1.5, "defaultAngle": -30 }"#).unwrap();
        assert_eq!(prefs.default_length, 1.5);
        assert_eq!(prefs.default_mass, 0.5);
        assert_eq!(prefs.default_angle, -30.0);

        let json = serde_json::to_value(prefs).unwrap();
        assert_eq!(json["defaultMass"], 0.5);
    }
}
