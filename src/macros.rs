#[macro_export]
#[cfg(feature = "no_trace")]
macro_rules! trace_expr {
    ($expr:expr, $($arg:tt)*) => {
        $expr
    };
}

/// Evaluate an expression, logging the call and its result at trace level.
#[macro_export]
#[cfg(not(feature = "no_trace"))]
macro_rules! trace_expr {
    ($expr:expr, $($arg:tt)*) => {{
        log::trace!("{}", format_args!($($arg)*));

        let ret = $expr;

        log::trace!("{} = {:?}", format_args!($($arg)*), ret);

        ret
    }};
}
