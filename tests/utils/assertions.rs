//! Custom assertions for contract testing

/// Assert a `try_*` client call failed with a specific contract error
#[macro_export]
macro_rules! assert_contract_error {
    ($result:expr, $expected_error:expr) => {
        match $result {
            Err(Ok(code)) => assert_eq!(code, $expected_error, "Contract error code mismatch"),
            Err(Err(err)) => panic!("Expected contract error, host failed with {:?}", err),
            Ok(_) => panic!("Expected contract error but succeeded"),
        }
    };
}

/// Assert a token balance
#[macro_export]
macro_rules! assert_balance {
    ($token:expr, $holder:expr, $expected:expr) => {
        assert_eq!($token.balance($holder), $expected, "Balance mismatch")
    };
    ($token:expr, $holder:expr, $expected:expr, $($msg:tt)*) => {
        assert_eq!($token.balance($holder), $expected, $($msg)*)
    };
}
