use crate::{Rational, RationalError, RationalErrorKind};
use hmath::{BigInt, Ratio};
use rand::Rng;

// `hmath::Ratio` is arbitrary-precision, so it never overflows.
// Every operation of `Rational` must either agree with it, or fail with
// `ArithmeticOverflow` exactly when the reduced result doesn't fit in i64.

fn to_hmath(n: &Rational) -> Ratio {
    Ratio::from_denom_and_numer(
        BigInt::from(n.denominator()),
        BigInt::from(n.numerator()),
    )
}

// `Rational` doesn't allow `i64::MIN`
fn fits(exact: &Ratio) -> bool {
    let fit = |s: String| match s.parse::<i64>() {
        Ok(n) => n != i64::MIN,
        Err(_) => false,
    };

    fit(exact.get_numer().to_string()) && fit(exact.get_denom().to_string())
}

fn check(result: Result<Rational, RationalError>, exact: Ratio, expr: &str) {
    match result {
        Ok(n) => {
            assert!(to_hmath(&n).eq_rat(&exact), "{expr} = {n}");
            assert!(fits(&exact), "{expr}");
        },
        Err(e) => {
            assert_eq!(e.kind(), &RationalErrorKind::ArithmeticOverflow, "{expr}");
            assert!(!fits(&exact), "{expr} overflowed, but the exact result fits");
        },
    }
}

// mixes tiny, medium and full-width operands, so that both overflowing and
// non-overflowing cases show up
fn random_operand() -> Rational {
    let mut rng = rand::thread_rng();

    loop {
        let (numer, denom) = match rng.gen_range(0..4) {
            0 => (rng.gen_range(-10..=10), rng.gen_range(-10..=10)),
            1 => (rng.gen::<i32>() as i64, rng.gen::<i32>() as i64),
            2 => (rng.gen::<i64>(), rng.gen_range(1..=1000)),
            _ => (rng.gen::<i64>(), rng.gen::<i64>()),
        };

        if let Ok(n) = Rational::new(numer, denom) {
            return n;
        }
    }
}

macro_rules! oracle_test {
    ($test_name: ident, $op: ident, $hmath_op: ident, $symbol: expr) => {
        #[test]
        fn $test_name() {
            for _ in 0..3000 {
                let a = random_operand();
                let b = random_operand();
                let expr = format!("({a}) {} ({b})", $symbol);

                if $symbol == "/" && b.is_zero() {
                    assert_eq!(a.$op(&b).unwrap_err().kind(), &RationalErrorKind::DivisionByZero);
                    continue;
                }

                check(
                    a.$op(&b),
                    to_hmath(&a).$hmath_op(&to_hmath(&b)),
                    &expr,
                );
            }
        }
    };
}

oracle_test!(plus_oracle_test, plus, add_rat, "+");
oracle_test!(minus_oracle_test, minus, sub_rat, "-");
oracle_test!(times_oracle_test, times, mul_rat, "*");
oracle_test!(divided_by_oracle_test, divided_by, div_rat, "/");

#[test]
fn pow_oracle_test() {
    let mut rng = rand::thread_rng();

    for _ in 0..1000 {
        let base = match rng.gen_range(0..2) {
            0 => Rational::new(rng.gen_range(-20..=20), rng.gen_range(1..=20)).unwrap(),
            _ => random_operand(),
        };
        let exp = rng.gen_range(-12..=12);
        let expr = format!("({base})^({exp})");

        if base.is_zero() && exp < 0 {
            assert_eq!(base.pow(exp).unwrap_err().kind(), &RationalErrorKind::InvalidOperation);
            continue;
        }

        let mut exact = Ratio::one();

        for _ in 0..exp.unsigned_abs() {
            exact = exact.mul_rat(&to_hmath(&base));
        }

        if exp < 0 {
            exact = Ratio::one().div_rat(&exact);
        }

        check(base.pow(exp), exact, &expr);
    }
}

#[test]
fn ordering_oracle_test() {
    for _ in 0..3000 {
        let a = random_operand();
        let b = random_operand();
        let (ha, hb) = (to_hmath(&a), to_hmath(&b));

        assert_eq!(a.greater_than(&b), ha.gt_rat(&hb), "{a} > {b}");
        assert_eq!(a.less_than(&b), ha.lt_rat(&hb), "{a} < {b}");
        assert_eq!(a == b, ha.eq_rat(&hb), "{a} == {b}");
    }
}

#[test]
fn reexport_test() {
    use crate::{F32_EPSILON, F64_EPSILON, Tolerance, gcd};

    assert_eq!(Tolerance::default(), Tolerance::new(F64_EPSILON, F32_EPSILON));
    assert_eq!(gcd(12, 8), 4);
    assert_eq!(Rational::new(10, -4).unwrap().to_string(), "-5/2");
}
