use rust_decimal::Decimal;

pub const FOOD_LABEL: &str = "-- food";
pub const GUILT_FREE_LABEL: &str = "-- guilt free";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Institution {
    Discover,
    Chase,
    Apple,
}

impl Institution {
    pub const ALL: [Institution; 3] = [Self::Discover, Self::Chase, Self::Apple];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Discover => "Discover",
            Self::Chase => "Chase",
            Self::Apple => "Apple",
        }
    }

    /// Statement exports are recognized by this file name prefix.
    pub fn file_prefix(&self) -> &'static str {
        self.name()
    }

    pub fn from_file_name(file_name: &str) -> Option<Institution> {
        Self::ALL
            .into_iter()
            .find(|i| file_name.starts_with(i.file_prefix()))
    }
}

/// Fields only some exports carry.
#[derive(Debug, Clone, PartialEq)]
pub enum Detail {
    Discover,
    Chase {
        kind: String,
        memo: String,
    },
    Apple {
        merchant: String,
        kind: String,
        purchased_by: String,
    },
}

/// One statement row after normalization. Spending is positive, credits and
/// payments are zero or negative.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub date: String,
    pub amount: Decimal,
    pub description: String,
    pub category: String,
    pub detail: Detail,
}

impl Transaction {
    pub fn institution(&self) -> Institution {
        match self.detail {
            Detail::Discover => Institution::Discover,
            Detail::Chase { .. } => Institution::Chase,
            Detail::Apple { .. } => Institution::Apple,
        }
    }

    pub fn merchant(&self) -> Option<&str> {
        match &self.detail {
            Detail::Apple { merchant, .. } => Some(merchant),
            _ => None,
        }
    }

    pub fn is_food(&self) -> bool {
        self.category == FOOD_LABEL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_institution_from_file_name() {
        assert_eq!(
            Institution::from_file_name("Discover-Statement-2024.csv"),
            Some(Institution::Discover)
        );
        assert_eq!(
            Institution::from_file_name("Chase1234_Activity.CSV"),
            Some(Institution::Chase)
        );
        assert_eq!(
            Institution::from_file_name("Apple Card Transactions - January.csv"),
            Some(Institution::Apple)
        );
        assert_eq!(Institution::from_file_name("apple.csv"), None);
        assert_eq!(Institution::from_file_name("budget.csv"), None);
    }

    #[test]
    fn test_institution_follows_detail() {
        let txn = Transaction {
            date: "03/02/2024".to_string(),
            amount: Decimal::new(500, 2),
            description: "COFFEE".to_string(),
            category: "Restaurants".to_string(),
            detail: Detail::Apple {
                merchant: "Blue Bottle".to_string(),
                kind: "Purchase".to_string(),
                purchased_by: "Sam".to_string(),
            },
        };
        assert_eq!(txn.institution(), Institution::Apple);
        assert_eq!(txn.merchant(), Some("Blue Bottle"));
        assert!(!txn.is_food());
    }
}
