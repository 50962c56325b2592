//! Places: search suggestions and overlay points of interest.

use super::point::GeoPoint;

/// A candidate place offered while the user types.
///
/// Lives only as long as the suggestion list that shows it.
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    /// Short label (first comma-delimited part of the full name)
    pub label: String,
    pub point: GeoPoint,
}

impl Suggestion {
    /// Build a suggestion from a provider's full display name.
    pub fn from_display_name(display_name: &str, point: GeoPoint) -> Self {
        Self {
            label: short_label(display_name).to_string(),
            point,
        }
    }
}

/// The first comma-delimited component of a place name.
///
/// ```
/// use trip_client::domain::short_label;
///
/// assert_eq!(short_label("Charminar, Hyderabad, Telangana, India"), "Charminar");
/// assert_eq!(short_label("Golconda"), "Golconda");
/// ```
pub fn short_label(display_name: &str) -> &str {
    display_name.split(',').next().unwrap_or(display_name).trim()
}

/// A transit station shown as an overlay marker.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    pub name: String,
    pub point: GeoPoint,
}

/// An EV charging point shown as an overlay marker.
#[derive(Debug, Clone, PartialEq)]
pub struct Charger {
    /// Charger type, when the backend knows it
    pub kind: Option<String>,
    pub point: GeoPoint,
}

impl Charger {
    /// The type shown in the popup, `Standard` when unknown.
    pub fn kind_label(&self) -> &str {
        self.kind
            .as_deref()
            .filter(|k| !k.is_empty())
            .unwrap_or("Standard")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_label_takes_first_component() {
        assert_eq!(short_label("Hitech City, Madhapur, Hyderabad"), "Hitech City");
        assert_eq!(short_label(""), "");
        assert_eq!(short_label(" Padded , rest"), "Padded");
    }

    #[test]
    fn suggestion_uses_short_label() {
        let p = GeoPoint::new(17.36, 78.47).unwrap();
        let s = Suggestion::from_display_name("Charminar, Ghansi Bazaar, Hyderabad", p);
        assert_eq!(s.label, "Charminar");
        assert_eq!(s.point, p);
    }

    #[test]
    fn charger_kind_defaults_to_standard() {
        let p = GeoPoint::new(17.4, 78.4).unwrap();
        let c = Charger { kind: None, point: p };
        assert_eq!(c.kind_label(), "Standard");
        let c = Charger {
            kind: Some(String::new()),
            point: p,
        };
        assert_eq!(c.kind_label(), "Standard");
        let c = Charger {
            kind: Some("CCS2".into()),
            point: p,
        };
        assert_eq!(c.kind_label(), "CCS2");
    }
}
