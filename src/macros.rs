#[macro_export]
macro_rules! ensure_level {
    ($pattern:expr,$level:expr) => {
        if $level <= 100 {
            Ok(())
        } else {
            Err($crate::Error::InvalidLevel { pattern: $pattern.to_owned(), level: $level })
        }
    }
}
