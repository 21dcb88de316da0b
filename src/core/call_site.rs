//! Call-site metadata captured at each log invocation

use std::fmt;

/// Where a log call (or an error propagation point) happened.
///
/// Usually built with [`call_site!`](crate::call_site).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    pub path: &'static str,
    pub filename: &'static str,
    pub line: u32,
    pub function: &'static str,
}

impl CallSite {
    /// Build a call site; `filename` is the last component of `path`
    pub fn new(path: &'static str, line: u32, function: &'static str) -> Self {
        Self {
            path,
            filename: file_name(path),
            line,
            function,
        }
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.path, self.function, self.line)
    }
}

fn file_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

/// Name of the enclosing function, without its module path.
///
/// Closures report the function that defines them.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = type_name_of(f);
        let name = name.strip_suffix("::f").unwrap_or(name);
        let name = name.trim_end_matches("::{{closure}}");
        match name.rfind("::") {
            Some(pos) => &name[pos + 2..],
            None => name,
        }
    }};
}

/// Capture the current [`CallSite`].
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::core::CallSite::new(file!(), line!(), $crate::function_name!())
    };
}
