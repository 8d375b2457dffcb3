use crate::common::error::PluggableScmError;

/// クレート全体で使用するResult型のエイリアス
///
/// # Examples
///
/// ```
/// use pluggable_scm::common::result::ScmResult;
/// use pluggable_scm::common::error::PluggableScmError;
///
/// fn example_function() -> ScmResult<String> {
///     Ok("success".to_string())
/// }
///
/// fn example_with_error() -> ScmResult<()> {
///     Err(PluggableScmError::not_found("github.pr"))
/// }
/// ```
pub type ScmResult<T> = Result<T, PluggableScmError>;

/// Optionのエラー変換ヘルパー
pub trait OptionExt<T> {
    /// 未登録のプラグインIDをNotFoundエラーに変換する
    ///
    /// # Examples
    ///
    /// ```
    /// use pluggable_scm::common::result::{ScmResult, OptionExt};
    ///
    /// let none_value: Option<&str> = None;
    /// let result: ScmResult<&str> = none_value.ok_or_not_found("github.pr");
    /// assert!(result.is_err());
    /// ```
    fn ok_or_not_found(self, id: impl Into<String>) -> ScmResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self, id: impl Into<String>) -> ScmResult<T> {
        self.ok_or_else(|| PluggableScmError::not_found(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_or_not_found() {
        let some_value = Some(42);
        assert_eq!(some_value.ok_or_not_found("p1").unwrap(), 42);

        let none_value: Option<i32> = None;
        let error = none_value.ok_or_not_found("p1").unwrap_err();
        assert!(matches!(error, PluggableScmError::NotFound { ref id } if id == "p1"));
    }
}
