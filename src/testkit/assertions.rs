//! Assertion macros for classification tests.
//!
//! - [`crate::assert_result_ok!`] - Assert Result is Ok and extract value
//! - [`crate::assert_result_err!`] - Assert Result is Err and extract error
//! - [`crate::assert_contains_error!`] - Assert error message contains pattern
//! - [`crate::assert_sorts!`] - Assert the exact sorts of a method in a pool

/// Assert that a Result is Ok and extract the value.
#[macro_export]
macro_rules! assert_result_ok {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!(
                "Expected Ok, got Err: {:?}\n  at {}:{}:{}",
                e,
                file!(),
                line!(),
                column!()
            ),
        }
    };
    ($result:expr, $($msg:tt)+) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!(
                "{}: Expected Ok, got Err: {:?}\n  at {}:{}:{}",
                format!($($msg)+),
                e,
                file!(),
                line!(),
                column!()
            ),
        }
    };
}

/// Assert that a Result is Err and extract the error.
#[macro_export]
macro_rules! assert_result_err {
    ($result:expr) => {
        match $result {
            Err(e) => e,
            Ok(value) => panic!(
                "Expected Err, got Ok: {:?}\n  at {}:{}:{}",
                value,
                file!(),
                line!(),
                column!()
            ),
        }
    };
}

/// Assert that a Result is Err and its message contains a pattern.
///
/// Returns the error if the assertion passes.
#[macro_export]
macro_rules! assert_contains_error {
    ($result:expr, $pattern:expr) => {{
        let err = $crate::assert_result_err!($result);
        let err_str = err.to_string();
        assert!(
            err_str.contains($pattern),
            "Error '{}' does not contain '{}'\n  at {}:{}:{}",
            err_str,
            $pattern,
            file!(),
            line!(),
            column!()
        );
        err
    }};
}

/// Assert the complete list of sorts of the method `signature` declared by
/// `type_name`, in `Sort::ALL` order.
///
/// ```rust
/// use methodsort::assert_sorts;
/// use methodsort::sort::Sort;
/// use methodsort::testkit::fixtures;
///
/// let pool = fixtures::package_private_base();
/// assert_sorts!(
///     pool,
///     "visibility.Sub",
///     "void foo()",
///     [Sort::Method, Sort::Overridable, Sort::VisibilityBridge]
/// );
/// ```
#[macro_export]
macro_rules! assert_sorts {
    ($pool:expr, $type_name:expr, $signature:expr, [$($sort:expr),* $(,)?]) => {{
        let method = match $pool.find_method($type_name, $signature) {
            Some(method) => method,
            None => panic!(
                "{} declares no method '{}'\n  at {}:{}:{}",
                $type_name,
                $signature,
                file!(),
                line!(),
                column!()
            ),
        };
        let expected: Vec<$crate::sort::Sort> = vec![$($sort),*];
        assert_eq!(
            $crate::sort::sorts_of(&method),
            expected,
            "sorts of {}",
            method
        );
    }};
}

#[cfg(test)]
mod tests {
    use crate::sort::Sort;
    use crate::testkit::fixtures;

    #[test]
    fn test_assert_result_ok_success() {
        let result: Result<i32, String> = Ok(42);
        let value = assert_result_ok!(result);
        assert_eq!(value, 42);
    }

    #[test]
    #[should_panic(expected = "Expected Ok, got Err")]
    fn test_assert_result_ok_failure() {
        let result: Result<i32, String> = Err("error".to_string());
        let _ = assert_result_ok!(result);
    }

    #[test]
    #[should_panic(expected = "Expected Err, got Ok")]
    fn test_assert_result_err_failure() {
        let result: Result<i32, String> = Ok(42);
        let _ = assert_result_err!(result);
    }

    #[test]
    fn test_assert_contains_error_success() {
        let result: Result<i32, String> = Err("Unknown type 'a.B'".to_string());
        let _ = assert_contains_error!(result, "a.B");
    }

    #[test]
    fn test_assert_sorts_success() {
        let pool = fixtures::overloaded_bridge();
        assert_sorts!(
            pool,
            "overload.Sub",
            "java.lang.Object get()",
            [Sort::Method, Sort::Overridable]
        );
    }

    #[test]
    #[should_panic(expected = "declares no method")]
    fn test_assert_sorts_missing_method() {
        let pool = fixtures::overloaded_bridge();
        assert_sorts!(pool, "overload.Sub", "void missing()", []);
    }
}
