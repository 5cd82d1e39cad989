//! Settlement planning
//!
//! Greedy largest-first matching: the member who owes the most pays the
//! member who is owed the most, as much as either side allows, and the sweep
//! moves on once a side is paid off. This is deterministic but not
//! guaranteed to use the fewest possible transfers.

use rust_decimal::Decimal;

use crate::models::{round_cents, Balance, Member, Transfer};

/// Nets within this distance of zero count as settled (0.009)
pub const SETTLED_EPSILON: Decimal = Decimal::from_parts(9, 0, 0, false, 3);

/// Smallest amount still worth moving (0.01)
pub const MIN_TRANSFER: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// A member's outstanding amount during the sweep (always positive)
struct Position<'a> {
    member: &'a Member,
    outstanding: Decimal,
}

/// Produce the transfers that zero out `balances`, in emission order
///
/// Creditors are taken largest first, debtors most negative first; equal nets
/// keep their input order. A residual smaller than [`SETTLED_EPSILON`] may be
/// left unsettled.
pub fn plan(balances: &[Balance]) -> Vec<Transfer> {
    let mut creditors: Vec<Position<'_>> = balances
        .iter()
        .map(|b| (b, round_cents(b.net)))
        .filter(|(_, net)| *net > SETTLED_EPSILON)
        .map(|(b, net)| Position {
            member: &b.member,
            outstanding: net,
        })
        .collect();
    let mut debtors: Vec<Position<'_>> = balances
        .iter()
        .map(|b| (b, round_cents(b.net)))
        .filter(|(_, net)| *net < -SETTLED_EPSILON)
        .map(|(b, net)| Position {
            member: &b.member,
            outstanding: -net,
        })
        .collect();

    // Stable sorts, so ties stay in input order
    creditors.sort_by(|a, b| b.outstanding.cmp(&a.outstanding));
    debtors.sort_by(|a, b| b.outstanding.cmp(&a.outstanding));

    let mut transfers = Vec::with_capacity(creditors.len() + debtors.len());
    let (mut i, mut j) = (0, 0);

    while i < debtors.len() && j < creditors.len() {
        let debtor = &mut debtors[i];
        let creditor = &mut creditors[j];

        let amount = round_cents(debtor.outstanding.min(creditor.outstanding));
        transfers.push(Transfer {
            from: debtor.member.clone(),
            to: creditor.member.clone(),
            amount,
        });

        debtor.outstanding = round_cents(debtor.outstanding - amount);
        creditor.outstanding = round_cents(creditor.outstanding - amount);

        if debtor.outstanding < MIN_TRANSFER {
            i += 1;
        }
        if creditor.outstanding < MIN_TRANSFER {
            j += 1;
        }
    }

    transfers
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashMap;

    fn dec(cents: i64) -> Decimal {
        Decimal::new(cents, 2)
    }

    fn balances(nets: &[(&str, i64)]) -> Vec<Balance> {
        nets.iter()
            .map(|(name, cents)| {
                let member = Member::new(*name, format!("{}@example.com", name.to_lowercase()));
                Balance {
                    member,
                    paid: Decimal::ZERO,
                    owed: Decimal::ZERO,
                    net: dec(*cents),
                }
            })
            .collect()
    }

    fn summary(transfers: &[Transfer]) -> Vec<(String, String, Decimal)> {
        transfers
            .iter()
            .map(|t| (t.from.name.clone(), t.to.name.clone(), t.amount))
            .collect()
    }

    fn residuals(input: &[Balance], transfers: &[Transfer]) -> HashMap<String, Decimal> {
        let mut nets: HashMap<String, Decimal> = input
            .iter()
            .map(|b| (b.member.name.clone(), b.net))
            .collect();
        for t in transfers {
            *nets.get_mut(&t.from.name).unwrap() += t.amount;
            *nets.get_mut(&t.to.name).unwrap() -= t.amount;
        }
        nets
    }

    #[test]
    fn test_one_creditor_two_tied_debtors() {
        let input = balances(&[("A", 6000), ("B", -3000), ("C", -3000)]);
        let transfers = plan(&input);

        assert_eq!(
            summary(&transfers),
            vec![
                ("B".into(), "A".into(), dec(3000)),
                ("C".into(), "A".into(), dec(3000)),
            ]
        );
    }

    #[test]
    fn test_all_settled_produces_nothing() {
        assert!(plan(&balances(&[("A", 0), ("B", 0)])).is_empty());
        assert!(plan(&[]).is_empty());
    }

    #[test]
    fn test_rounding_noise_is_ignored() {
        let mut input = balances(&[("A", 0), ("B", 0), ("C", 0)]);
        input[0].net = Decimal::new(9, 3);
        input[1].net = Decimal::new(-9, 3);
        assert!(plan(&input).is_empty());
    }

    #[test]
    fn test_largest_magnitudes_are_paired_first() {
        let input = balances(&[
            ("A", 1000),
            ("B", 5000),
            ("C", -2000),
            ("D", -4000),
        ]);
        let transfers = plan(&input);

        assert_eq!(
            summary(&transfers),
            vec![
                ("D".into(), "B".into(), dec(4000)),
                ("C".into(), "B".into(), dec(1000)),
                ("C".into(), "A".into(), dec(1000)),
            ]
        );
    }

    #[test]
    fn test_both_sides_advance_on_exact_match() {
        let input = balances(&[("A", 2500), ("B", 1000), ("C", -2500), ("D", -1000)]);
        let transfers = plan(&input);

        assert_eq!(
            summary(&transfers),
            vec![
                ("C".into(), "A".into(), dec(2500)),
                ("D".into(), "B".into(), dec(1000)),
            ]
        );
    }

    #[test]
    fn test_residual_below_epsilon_is_left() {
        // Rounded nets of a three-way split: 66.67 / -33.33 / -33.33
        let input = balances(&[("A", 6667), ("B", -3333), ("C", -3333)]);
        let transfers = plan(&input);

        assert_eq!(transfers.len(), 2);
        let left = residuals(&input, &transfers);
        assert_eq!(left["A"], dec(1));
        assert!(left.values().all(|n| n.abs() <= dec(1)));
    }

    #[test]
    fn test_same_input_same_plan() {
        let input = balances(&[
            ("A", 1234),
            ("B", -500),
            ("C", 766),
            ("D", -1500),
            ("E", 0),
        ]);
        let first = plan(&input);
        let second = plan(&input);
        assert_eq!(first, second);
    }

    #[test]
    fn test_permuted_input_without_ties_same_plan() {
        let input = balances(&[("A", 1234), ("B", -500), ("C", 766), ("D", -1500)]);
        let mut permuted = input.clone();
        permuted.reverse();
        permuted.swap(0, 2);

        assert_eq!(plan(&input), plan(&permuted));
    }

    proptest! {
        #[test]
        fn plan_settles_everyone(
            raw in prop::collection::vec(-1_000_000i64..=1_000_000, 1..12),
        ) {
            // Make the nets sum to zero, as aggregation guarantees
            let mut cents = raw.clone();
            let sum: i64 = cents.iter().sum();
            cents.push(-sum);

            let names: Vec<String> = (0..cents.len()).map(|i| format!("M{}", i)).collect();
            let shape: Vec<(&str, i64)> = names
                .iter()
                .map(String::as_str)
                .zip(cents.iter().copied())
                .collect();
            let input = balances(&shape);

            let transfers = plan(&input);

            for t in &transfers {
                prop_assert_ne!(t.from.id, t.to.id);
                prop_assert!(t.amount >= MIN_TRANSFER);
            }
            for net in residuals(&input, &transfers).values() {
                prop_assert!(net.abs() <= SETTLED_EPSILON);
            }
            prop_assert!(transfers.len() < input.len());
            prop_assert_eq!(plan(&input), transfers);
        }
    }
}
