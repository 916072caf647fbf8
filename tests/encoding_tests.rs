// tests/encoding_tests.rs

// Import necessary types from the qirs crate
use qirs::{CodeParameters, Codeword, MessagePolynomial, QirsError};

#[test]
fn test_singleton_bound_default_inputs() -> Result<(), QirsError> {
    // The demo defaults: n = 7, k = 3 -> d = 5.
    let params = CodeParameters::new(7, 3)?;
    assert_eq!(params.n(), 7);
    assert_eq!(params.k(), 3);
    assert_eq!(params.minimum_distance(), 5);
    Ok(())
}

#[test]
fn test_singleton_bound_across_valid_range() -> Result<(), QirsError> {
    // d = n - k + 1 and d >= 1 for every valid (n, k) pair.
    for n in 2..=16 {
        for k in 1..n {
            let params = CodeParameters::new(n, k)?;
            let d = params.minimum_distance();
            assert_eq!(d, n - k + 1, "distance for ({}, {})", n, k);
            assert!(d >= 1);
        }
    }
    Ok(())
}

#[test]
fn test_invalid_code_parameters_are_rejected() {
    // k out of [1, n-1], or n below 2, must fail rather than produce a
    // nonsensical distance.
    for (n, k) in [(7, 0), (7, 7), (7, 9), (1, 1), (0, 0)] {
        match CodeParameters::new(n, k) {
            Err(QirsError::InvalidParameter { .. }) => {}
            other => panic!("expected InvalidParameter for ({}, {}), got {:?}", n, k, other),
        }
    }
}

#[test]
fn test_parse_default_message() -> Result<(), QirsError> {
    let message = MessagePolynomial::parse("3,5,2")?;
    assert_eq!(message.coefficients(), &[3, 5, 2]);
    assert_eq!(message.degree(), 2);
    Ok(())
}

#[test]
fn test_parse_trims_whitespace_and_accepts_negatives() -> Result<(), QirsError> {
    let message = MessagePolynomial::parse(" 3 ,  -5 ,2 ")?;
    assert_eq!(message.coefficients(), &[3, -5, 2]);

    let single = MessagePolynomial::parse("42")?;
    assert_eq!(single.coefficients(), &[42]);
    assert_eq!(single.degree(), 0);
    Ok(())
}

#[test]
fn test_parse_rejects_malformed_input() {
    // Every malformed token aborts the whole parse; nothing is silently
    // dropped and no codeword is produced.
    for input in ["a,b,c", "1,,2", "", "1.5,2", "3,five,2", ","] {
        match MessagePolynomial::parse(input) {
            Err(QirsError::ParseError { .. }) => {}
            other => panic!("expected ParseError for {:?}, got {:?}", input, other),
        }
    }
}

#[test]
fn test_codeword_for_default_message() -> Result<(), QirsError> {
    // m(x) = 3 + 5x + 2x^2 at x = 1..=5:
    // m(1)=10, m(2)=21, m(3)=36, m(4)=55, m(5)=78.
    let message = MessagePolynomial::parse("3,5,2")?;
    let codeword = Codeword::encode(&message);
    assert_eq!(codeword.points(), &[1, 2, 3, 4, 5]);
    assert_eq!(codeword.symbols(), &[10, 21, 36, 55, 78]);
    Ok(())
}

#[test]
fn test_codeword_carries_two_redundant_points() -> Result<(), QirsError> {
    // Evaluation point count always equals coefficient count + 2.
    for len in 1..=8 {
        let coefficients: Vec<i64> = (1..=len).collect();
        let message = MessagePolynomial::from_coefficients(coefficients)?;
        let codeword = Codeword::encode(&message);
        assert_eq!(codeword.len(), len as usize + 2);
        assert_eq!(codeword.points().first(), Some(&1));
        assert_eq!(codeword.points().last(), Some(&(len + 2)));
    }
    Ok(())
}

#[test]
fn test_codeword_symbols_match_direct_evaluation() -> Result<(), QirsError> {
    // codeword[x] = sum(a_i * x^i) exactly, in plain integer arithmetic.
    let message = MessagePolynomial::parse("7,0,-3,11")?;
    let codeword = Codeword::encode(&message);
    for (point, symbol) in codeword.points().iter().zip(codeword.symbols()) {
        let expected: i128 = message
            .coefficients()
            .iter()
            .enumerate()
            .map(|(i, &a)| a as i128 * (*point as i128).pow(i as u32))
            .sum();
        assert_eq!(*symbol, expected, "mismatch at x = {}", point);
    }
    Ok(())
}

#[test]
fn test_polynomial_rendering_keeps_constant_term() -> Result<(), QirsError> {
    // The symbolic form renders every term as "{a_i}x^{i}", constant
    // included.
    let message = MessagePolynomial::parse("3,5,2")?;
    assert_eq!(message.to_string(), "3x^0 + 5x^1 + 2x^2");

    let constant = MessagePolynomial::parse("-9")?;
    assert_eq!(constant.to_string(), "-9x^0");
    Ok(())
}
