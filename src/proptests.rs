//! Property-based tests for exact fractions and row reduction.

#[cfg(test)]
mod tests {
    use num_bigint::BigInt;
    use num_integer::Integer;
    use num_traits::{One, Signed, Zero};
    use proptest::prelude::*;

    use crate::{reduce_many, Fraction, IntoFraction, Matrix};

    fn small_fraction() -> impl Strategy<Value = Fraction> {
        (-12i64..=12, 1i64..=6).prop_map(|(n, d)| Fraction::from_integers(n, d).unwrap())
    }

    fn non_zero_fraction() -> impl Strategy<Value = Fraction> {
        small_fraction().prop_filter("non-zero", |f| !f.is_zero())
    }

    // Mostly integers with some fractions and plenty of zeros, so rank
    // deficient inputs show up often.
    fn entry() -> impl Strategy<Value = Fraction> {
        prop_oneof![
            3 => (-5i64..=5).prop_map(Fraction::from),
            1 => Just(Fraction::zero()),
            1 => small_fraction(),
        ]
    }

    fn small_matrix() -> impl Strategy<Value = Matrix> {
        (1usize..=5, 1usize..=6)
            .prop_flat_map(|(rows, cols)| {
                prop::collection::vec(prop::collection::vec(entry(), cols), rows)
            })
            .prop_map(|rows| Matrix::from_rows(rows).unwrap())
    }

    proptest! {
        // Fraction field axioms

        #[test]
        fn fraction_add_commutative(a in small_fraction(), b in small_fraction()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn fraction_mul_associative(
            a in small_fraction(),
            b in small_fraction(),
            c in small_fraction()
        ) {
            prop_assert_eq!(a.multiply(&b).multiply(&c), a.multiply(&b.multiply(&c)));
        }

        #[test]
        fn fraction_distributive(
            a in small_fraction(),
            b in small_fraction(),
            c in small_fraction()
        ) {
            prop_assert_eq!(
                a.multiply(&b.add(&c)),
                a.multiply(&b).add(&a.multiply(&c))
            );
        }

        #[test]
        fn fraction_sub_self_is_zero(a in small_fraction()) {
            prop_assert!(a.subtract(&a).is_zero());
        }

        #[test]
        fn fraction_div_inverts_mul(a in small_fraction(), b in non_zero_fraction()) {
            prop_assert_eq!(a.multiply(&b).divide(&b).unwrap(), a.clone());
            prop_assert_eq!(b.multiply(&b.recip().unwrap()), Fraction::one());
        }

        #[test]
        fn fraction_is_normalized(n in -1000i64..1000, d in prop_oneof![(-1000i64..=-1), (1i64..=1000)]) {
            let f = Fraction::from_integers(n, d).unwrap();
            prop_assert!(f.denominator().is_positive());
            prop_assert!(f.numerator().gcd(f.denominator()).is_one());
            prop_assert_eq!(
                f.numerator() * BigInt::from(d),
                BigInt::from(n) * f.denominator()
            );
        }

        #[test]
        fn fraction_display_parses_back(a in small_fraction()) {
            prop_assert_eq!(Fraction::from_decimal_str(&a.to_string()).unwrap(), a);
        }

        #[test]
        fn float_input_keeps_decimal_meaning(n in -100_000i64..100_000, k in 0u32..5) {
            let scale = 10i64.pow(k);
            let value = n as f64 / scale as f64;
            prop_assert_eq!(
                value.into_fraction().unwrap(),
                Fraction::from_integers(n, scale).unwrap()
            );
        }

        // Row reduction

        #[test]
        fn rref_is_idempotent(m in small_matrix()) {
            let r = m.reduce_to_rref();
            prop_assert_eq!(r.reduce_to_rref(), r);
        }

        #[test]
        fn rref_is_deterministic(m in small_matrix()) {
            prop_assert_eq!(
                m.reduce_to_rref().to_canonical_string(),
                m.clone().reduce_to_rref().to_canonical_string()
            );
        }

        #[test]
        fn rref_satisfies_echelon_invariants(m in small_matrix()) {
            let r = m.reduce_to_rref();
            prop_assert!(r.is_rref(), "not in rref:\n{}", r);

            let pivots = r.pivot_columns();
            prop_assert!(pivots.windows(2).all(|w| w[0] < w[1]));
            prop_assert!(pivots.len() <= r.row_count().min(r.column_count()));
        }

        #[test]
        fn rref_preserves_dimensions(m in small_matrix()) {
            let r = m.reduce_to_rref();
            prop_assert_eq!(r.row_count(), m.row_count());
            prop_assert_eq!(r.column_count(), m.column_count());
        }

        #[test]
        fn rref_leaves_input_untouched(m in small_matrix()) {
            let before = m.to_canonical_string();
            let _ = m.reduce_to_rref();
            prop_assert_eq!(m.to_canonical_string(), before);
        }

        #[test]
        fn rref_ignores_row_scaling(m in small_matrix(), k in non_zero_fraction()) {
            let scaled = Matrix::from_row_vectors(
                m.rows().iter().map(|row| row.scale(&k)).collect()
            ).unwrap();
            prop_assert_eq!(scaled.reduce_to_rref(), m.reduce_to_rref());
        }

        #[test]
        fn reduce_many_matches_serial(ms in prop::collection::vec(small_matrix(), 0..6)) {
            let serial: Vec<Matrix> = ms.iter().map(Matrix::reduce_to_rref).collect();
            prop_assert_eq!(reduce_many(&ms), serial);
        }

        #[test]
        fn mismatched_rows_are_rejected(cols in 1usize..6, extra in 1usize..3) {
            let rows = vec![vec![1i64; cols], vec![2i64; cols + extra]];
            prop_assert!(Matrix::from_rows(rows).is_err());
        }
    }
}
