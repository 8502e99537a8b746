/// Checks a precondition, logging and returning `Err($err)` when it does not hold.
///
/// Expects `log` and `ErrorCode` to be in scope at the call site.
#[macro_export]
macro_rules! validate {
    ($env:expr, $assert:expr, $err:expr) => {
        {
            if ($assert) {
                Ok(())
            } else {
                let error_code: ErrorCode = $err;
                log!($env, "Error {} thrown at line {}", error_code as u32, line!());
                Err(error_code)
            }
        }
    };
    (
        $env:expr,
        $assert:expr,
        $err:expr,
        $($arg:tt)+
    ) => {
        {
            if ($assert) {
                Ok(())
            } else {
                let error_code: ErrorCode = $err;
                log!($env, "Error {} thrown at line {}", error_code as u32, line!());
                log!($env, $($arg)+);
                Err(error_code)
            }
        }
    };
}

#[macro_export]
macro_rules! safe_increment {
    ($struct:expr, $value:expr) => {{
        $struct = $struct.checked_add($value).ok_or(ErrorCode::MathError)?
    }};
}

#[macro_export]
macro_rules! safe_decrement {
    ($struct:expr, $value:expr) => {{
        $struct = $struct.checked_sub($value).ok_or(ErrorCode::MathError)?
    }};
}
