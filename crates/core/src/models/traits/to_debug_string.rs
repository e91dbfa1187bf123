/// Captures the `Debug` rendering of an underlying error so it can be stored
/// in our own error variants as `underlying: String`.
///
/// ```diff
/// -.map_err(|e| KeyDecode { index, underlying: format!("{e:?}") })
/// +.map_err(|e| KeyDecode { index, underlying: e.to_debug_string() })
/// ```
pub trait ToDebugString {
    fn to_debug_string(&self) -> String;
}

impl<T: core::fmt::Debug> ToDebugString for T {
    fn to_debug_string(&self) -> String {
        format!("{self:?}")
    }
}
