// Logging shims: forward to the `log` crate when the feature is on,
// evaluate to nothing (while still type-checking the arguments) when off.

macro_rules! log {
    ($level: ident, $($t:tt)*) => {{
        #[cfg(feature = "log")]
        { log::$level!($($t)*) }
        #[cfg(not(feature = "log"))]
        { if false { let _ = ( $($t)* ); } }
    }}
}

macro_rules! trace {
    ($($t:tt)*) => {
        crate::macros::log!(trace, $($t)*)
    };
}

pub(crate) use log;
pub(crate) use trace;
