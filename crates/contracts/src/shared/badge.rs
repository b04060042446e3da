//! Badge tones for status / priority / role values

use serde::{Deserialize, Serialize};

/// Visual category of a badge (drives colour on the frontend).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Success,
    Warning,
    Danger,
    Info,
    #[default]
    Neutral,
    Primary,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Success => "success",
            Tone::Warning => "warning",
            Tone::Danger => "danger",
            Tone::Info => "info",
            Tone::Neutral => "neutral",
            Tone::Primary => "primary",
        }
    }

    /// CSS modifier class, e.g. `badge--success`
    pub fn css_class(&self) -> &'static str {
        match self {
            Tone::Success => "badge--success",
            Tone::Warning => "badge--warning",
            Tone::Danger => "badge--danger",
            Tone::Info => "badge--info",
            Tone::Neutral => "badge--neutral",
            Tone::Primary => "badge--primary",
        }
    }
}

/// Rendered badge: text plus tone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub label: String,
    pub tone: Tone,
}

impl Badge {
    pub fn new(label: impl Into<String>, tone: Tone) -> Self {
        Self {
            label: label.into(),
            tone,
        }
    }

    /// Neutral badge carrying the raw value as its label.
    pub fn neutral(raw: &str) -> Self {
        Self::new(raw, Tone::Neutral)
    }

    /// Resolve a raw string against a closed enum.
    ///
    /// Unknown values never fail: they come back as a neutral badge with the raw text.
    pub fn resolve<E: BadgeValue>(raw: &str) -> Self {
        let key = raw.trim().to_ascii_lowercase();
        match E::from_key(&key) {
            Some(value) => value.badge(),
            None => Self::neutral(raw),
        }
    }
}

/// Closed enum whose every value maps to a label and a tone.
pub trait BadgeValue: Sized + Copy + 'static {
    /// Wire key (`snake_case`)
    fn key(&self) -> &'static str;

    /// Human readable label
    fn label(&self) -> &'static str;

    fn tone(&self) -> Tone;

    /// All values in declaration order
    fn all() -> &'static [Self];

    fn from_key(key: &str) -> Option<Self> {
        Self::all().iter().copied().find(|v| v.key() == key)
    }

    fn badge(&self) -> Badge {
        Badge::new(self.label(), self.tone())
    }

    /// `(key, label)` pairs for filter dropdowns
    fn options() -> Vec<(&'static str, &'static str)> {
        Self::all().iter().map(|v| (v.key(), v.label())).collect()
    }
}

/// Declares a closed badge enum.
///
/// ```rust,ignore
/// badge_enum! {
///     pub enum OrderStatus {
///         Pending => ("pending", "Pending", Warning),
///         Completed => ("completed", "Completed", Success),
///     }
/// }
/// ```
#[macro_export]
macro_rules! badge_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $variant:ident => ($key:literal, $label:literal, $tone:ident) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                #[serde(rename = $key)]
                $variant,
            )+
        }

        impl $crate::shared::badge::BadgeValue for $name {
            fn key(&self) -> &'static str {
                match self {
                    $( $name::$variant => $key, )+
                }
            }

            fn label(&self) -> &'static str {
                match self {
                    $( $name::$variant => $label, )+
                }
            }

            fn tone(&self) -> $crate::shared::badge::Tone {
                match self {
                    $( $name::$variant => $crate::shared::badge::Tone::$tone, )+
                }
            }

            fn all() -> &'static [Self] {
                &[ $( $name::$variant, )+ ]
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::shared::badge::BadgeValue::key(self))
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$name as $crate::shared::badge::BadgeValue>::from_key(s)
                    .ok_or_else(|| format!("unknown {} value: {}", stringify!($name), s))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    badge_enum! {
        enum Sample {
            Good => ("good", "Good", Success),
            InReview => ("in_review", "In review", Info),
        }
    }

    #[test]
    fn test_known_key_resolves_to_tone() {
        let badge = Badge::resolve::<Sample>("in_review");
        assert_eq!(badge, Badge::new("In review", Tone::Info));
    }

    #[test]
    fn test_resolve_ignores_case_and_whitespace() {
        assert_eq!(Badge::resolve::<Sample>("  GOOD ").tone, Tone::Success);
    }

    #[test]
    fn test_unknown_value_falls_back_to_neutral() {
        let badge = Badge::resolve::<Sample>("Exploded");
        assert_eq!(badge.tone, Tone::Neutral);
        assert_eq!(badge.label, "Exploded");

        let empty = Badge::resolve::<Sample>("");
        assert_eq!(empty, Badge::neutral(""));
    }

    #[test]
    fn test_serde_uses_wire_key() {
        let json = serde_json::to_string(&Sample::InReview).unwrap();
        assert_eq!(json, "\"in_review\"");
        let back: Sample = serde_json::from_str("\"good\"").unwrap();
        assert_eq!(back, Sample::Good);
        assert_eq!(serde_json::to_string(&Tone::Danger).unwrap(), "\"danger\"");
    }

    #[test]
    fn test_from_str_and_options() {
        assert_eq!("good".parse::<Sample>(), Ok(Sample::Good));
        assert!("nope".parse::<Sample>().is_err());
        assert_eq!(
            Sample::options(),
            vec![("good", "Good"), ("in_review", "In review")]
        );
    }
}
