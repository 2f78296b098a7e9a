//! Internal macros shared by the containers.
//!
//! Both macros expand to nothing unless the `tracing` feature is enabled, so
//! the hot paths carry no logging cost in default builds.

/// Emit a `debug` event for an operation that failed and left the container
/// unchanged. Expands to nothing without the `tracing` feature.
#[macro_export]
#[doc(hidden)]
macro_rules! trace_rejected {
    ($container:expr, $operation:expr, $len:expr, $capacity:expr, $error:expr) => {
        #[cfg(feature = "tracing")]
        {
            $crate::tracing::debug!(
                container = $container,
                operation = $operation,
                len = $len,
                capacity = $capacity,
                error = %$error,
                "operation rejected"
            );
        }
    };
}

/// Enter a `tracing::CollectionTrace` span for the rest of the enclosing block.
/// Expands to nothing without the `tracing` feature.
#[macro_export]
#[doc(hidden)]
macro_rules! enter_span {
    ($span:expr) => {
        #[cfg(feature = "tracing")]
        let _guard = $span.entered();
    };
}
