//! Convenience macros for building item trees inline.

/// Builds an [`Item::Function`](crate::Item::Function) from a name and
/// arguments, converting each argument with [`Item::from`](crate::Item).
///
/// # Examples
///
/// ```rust
/// use datastring::function;
///
/// let call = function!("rgb", 255, 0, 0);
/// assert_eq!(call.to_string(), "rgb(255; 0; 0)");
///
/// let nested = function!("stroke", function!("rgb", 0, 0, 0), "solid");
/// assert_eq!(nested.to_string(), "stroke(rgb(0; 0; 0); 'solid')");
/// ```
#[macro_export]
macro_rules! function {
    ($name:expr $(, $arg:expr)* $(,)?) => {
        $crate::Item::function($name, vec![$($crate::Item::from($arg)),*])
    };
}

/// Builds an [`Item::MainContext`](crate::Item::MainContext) from a list of
/// items, converting each with [`Item::from`](crate::Item).
///
/// # Examples
///
/// ```rust
/// use datastring::{function, main_context};
///
/// let document = main_context![function!("move", 0, 0), function!("close")];
/// assert_eq!(document.to_string(), "move(0; 0); close()");
/// ```
#[macro_export]
macro_rules! main_context {
    ($($item:expr),* $(,)?) => {
        $crate::Item::MainContext(vec![$($crate::Item::from($item)),*])
    };
}
