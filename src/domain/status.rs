//! Closed status enumerations for every record kind.
//!
//! Each enum carries its option table (label and badge color) and the subset
//! of values from which a completion workflow may be started.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::types::TypeConstraintError;

/// Badge palette used when rendering a status.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum StatusColor {
    Green,
    Red,
    Blue,
    Yellow,
    Orange,
    Purple,
    Gray,
}

/// Behaviour shared by every status enumeration.
pub trait Status: Copy + Eq + Display + FromStr<Err = TypeConstraintError> + 'static {
    /// All values in display order.
    const OPTIONS: &'static [Self];

    /// Human readable label, also the canonical string form.
    fn label(&self) -> &'static str;

    /// Badge color for the value.
    fn color(&self) -> StatusColor;

    /// Whether a completion workflow can be started from this value.
    fn is_completable(&self) -> bool {
        false
    }
}

macro_rules! status_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident => ($label:expr, $color:ident)),+ $(,)?
        }
        completable: [$($done:ident),*]
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub enum $name {
            $($variant),+
        }

        impl Status for $name {
            const OPTIONS: &'static [Self] = &[$($name::$variant),+];

            fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            fn color(&self) -> StatusColor {
                match self {
                    $($name::$variant => StatusColor::$color),+
                }
            }

            fn is_completable(&self) -> bool {
                false $(|| matches!(self, $name::$done))*
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.label())
            }
        }

        impl FromStr for $name {
            type Err = TypeConstraintError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                Self::OPTIONS
                    .iter()
                    .copied()
                    .find(|option| option.label() == trimmed)
                    .ok_or_else(|| TypeConstraintError::UnknownStatus(trimmed.to_string()))
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.label().to_string()
            }
        }
    };
}

status_enum! {
    /// Presence and condition of an animal in the herd.
    AnimalStatus {
        Active => ("Active", Green),
        Sick => ("Sick", Red),
        Quarantine => ("Quarantine", Orange),
        Sold => ("Sold", Blue),
    }
    completable: []
}

status_enum! {
    /// Lifecycle of a scheduled vaccination.
    VaccinationStatus {
        Scheduled => ("Scheduled", Blue),
        Due => ("Due", Yellow),
        Overdue => ("Overdue", Red),
        Completed => ("Completed", Green),
        Cancelled => ("Cancelled", Gray),
    }
    completable: [Scheduled, Due, Overdue]
}

status_enum! {
    /// Progress of a treatment.
    HealthStatus {
        UnderTreatment => ("Under Treatment", Orange),
        Recovered => ("Recovered", Green),
        Chronic => ("Chronic", Purple),
        Monitoring => ("Monitoring", Blue),
        Deceased => ("Deceased", Gray),
    }
    completable: [UnderTreatment]
}

status_enum! {
    /// Outcome of a breeding attempt.
    BreedingStatus {
        Breeding => ("Breeding", Blue),
        Pregnant => ("Pregnant", Purple),
        Confirmed => ("Confirmed", Green),
        Failed => ("Failed", Red),
        Calved => ("Calved", Gray),
    }
    completable: [Breeding, Pregnant]
}

status_enum! {
    /// Condition of a newborn calf.
    BirthStatus {
        Healthy => ("Healthy", Green),
        Weak => ("Weak", Yellow),
        Sick => ("Sick", Red),
        Deceased => ("Deceased", Gray),
    }
    completable: []
}

status_enum! {
    /// Direction of a financial transaction.
    TransactionKind {
        Income => ("Income", Green),
        Expense => ("Expense", Red),
    }
    completable: []
}

status_enum! {
    /// Grade assigned to a milk collection.
    MilkQuality {
        APlus => ("A+", Green),
        A => ("A", Blue),
        B => ("B", Yellow),
        C => ("C", Red),
    }
    completable: []
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_labels_exactly() {
        assert_eq!(
            "Under Treatment".parse::<HealthStatus>().unwrap(),
            HealthStatus::UnderTreatment
        );
        assert_eq!("A+".parse::<MilkQuality>().unwrap(), MilkQuality::APlus);
        assert_eq!(
            "pregnant".parse::<BreedingStatus>(),
            Err(TypeConstraintError::UnknownStatus("pregnant".to_string()))
        );
    }

    #[test]
    fn completable_sets_match_workflows() {
        let completable: Vec<_> = VaccinationStatus::OPTIONS
            .iter()
            .filter(|s| s.is_completable())
            .collect();
        assert_eq!(
            completable,
            vec![
                &VaccinationStatus::Scheduled,
                &VaccinationStatus::Due,
                &VaccinationStatus::Overdue
            ]
        );
        assert!(BreedingStatus::Pregnant.is_completable());
        assert!(!BreedingStatus::Confirmed.is_completable());
        assert!(!AnimalStatus::Sick.is_completable());
    }

    #[test]
    fn serializes_as_label() {
        let json = serde_json::to_string(&HealthStatus::UnderTreatment).unwrap();
        assert_eq!(json, "\"Under Treatment\"");
        let back: HealthStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, HealthStatus::UnderTreatment);
        assert!(serde_json::from_str::<AnimalStatus>("\"Lost\"").is_err());
    }

    #[test]
    fn colors_follow_option_table() {
        assert_eq!(VaccinationStatus::Overdue.color(), StatusColor::Red);
        assert_eq!(AnimalStatus::Quarantine.color(), StatusColor::Orange);
        assert_eq!(TransactionKind::Income.to_string(), "Income");
    }
}
