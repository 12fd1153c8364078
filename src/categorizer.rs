//! Ordered recategorization rules, one list per institution.
//!
//! Every rule whose predicate holds applies its effect, in list order, so a
//! later rule overrides an earlier one. The zero-amount whitelist always runs
//! first; predicates that compare amounts see its result.

use rust_decimal::Decimal;

use crate::models::{Institution, Transaction, FOOD_LABEL, GUILT_FREE_LABEL};
use crate::whitelist::Whitelists;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    ZeroAmount,
    SetCategory(&'static str),
}

pub struct Rule {
    pub name: &'static str,
    pub applies: fn(&Transaction, &Whitelists) -> bool,
    pub effect: Effect,
}

impl Rule {
    fn apply(&self, txn: &mut Transaction) {
        match self.effect {
            Effect::ZeroAmount => txn.amount = Decimal::ZERO,
            Effect::SetCategory(label) => txn.category = label.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Predicates
// ---------------------------------------------------------------------------

fn in_zero_amounts(txn: &Transaction, lists: &Whitelists) -> bool {
    lists.zero_amounts.matches(txn)
}

fn in_guilt_free(txn: &Transaction, lists: &Whitelists) -> bool {
    lists.guilt_free.matches(txn)
}

fn is_discover_food(txn: &Transaction, _: &Whitelists) -> bool {
    if txn.category.starts_with("Payment") {
        return false;
    }
    txn.description.starts_with("TARGET")
        || txn.category.starts_with("Supermarket")
        || txn.description.starts_with("TST*HABANERO")
        || txn.description.starts_with("POTBELLY")
}

fn is_discover_direct_pay(txn: &Transaction, _: &Whitelists) -> bool {
    txn.description.starts_with("DIRECTPAY")
}

fn is_chase_autopay(txn: &Transaction, _: &Whitelists) -> bool {
    txn.description.starts_with("AUTOMATIC")
}

fn is_apple_payment(txn: &Transaction, _: &Whitelists) -> bool {
    txn.category == "Payment" || txn.merchant() == Some("Credit Adjustment")
}

// ---------------------------------------------------------------------------
// Rule lists
// ---------------------------------------------------------------------------

const ZERO_AMOUNT_OVERRIDE: Rule = Rule {
    name: "zero-amount whitelist",
    applies: in_zero_amounts,
    effect: Effect::ZeroAmount,
};

pub const DISCOVER_RULES: &[Rule] = &[
    ZERO_AMOUNT_OVERRIDE,
    Rule {
        name: "discover food merchants",
        applies: is_discover_food,
        effect: Effect::SetCategory(FOOD_LABEL),
    },
    Rule {
        name: "guilt-free whitelist",
        applies: in_guilt_free,
        effect: Effect::SetCategory(GUILT_FREE_LABEL),
    },
    Rule {
        name: "discover card payment",
        applies: is_discover_direct_pay,
        effect: Effect::ZeroAmount,
    },
];

pub const CHASE_RULES: &[Rule] = &[
    ZERO_AMOUNT_OVERRIDE,
    Rule {
        name: "chase autopay",
        applies: is_chase_autopay,
        effect: Effect::ZeroAmount,
    },
];

pub const APPLE_RULES: &[Rule] = &[
    ZERO_AMOUNT_OVERRIDE,
    Rule {
        name: "apple payment or adjustment",
        applies: is_apple_payment,
        effect: Effect::ZeroAmount,
    },
];

pub fn rules_for(institution: Institution) -> &'static [Rule] {
    match institution {
        Institution::Discover => DISCOVER_RULES,
        Institution::Chase => CHASE_RULES,
        Institution::Apple => APPLE_RULES,
    }
}

/// Run the institution's rules over a freshly parsed transaction.
pub fn categorize(txn: &mut Transaction, lists: &Whitelists) {
    for rule in rules_for(txn.institution()) {
        if (rule.applies)(txn, lists) {
            log::debug!(
                "rule '{}' matched {} {} {}",
                rule.name,
                txn.date,
                txn.amount,
                txn.description
            );
            rule.apply(txn);
        }
    }
}
