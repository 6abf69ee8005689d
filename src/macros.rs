/// Compile a literal pattern once and hand out a `&'static Regex`.
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> = once_cell::sync::Lazy::new(|| {
            regex::Regex::new($pat).unwrap_or_else(|err| panic!("invalid built-in pattern {:?}: {}", $pat, err))
        });
        &*RE
    }};
}
