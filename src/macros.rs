#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

#[macro_export]
macro_rules! rule {
    (
        name: $name:expr,
        pattern: $pat:literal,
        prod: |$caps:ident| -> Option<YearSpan> $body:block
        $(,)?
    ) => {
        $crate::Rule {
            name: $name,
            pattern: $crate::regex!($pat),
            production: |$caps: &regex::Captures| -> Option<$crate::YearSpan> { $body },
        }
    };
}
