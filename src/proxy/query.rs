/// Inbound query string, forwarded to the upstream byte-for-byte.
///
/// The raw percent-encoded form is kept, so order, duplicate keys, empty
/// values and escapes that are not valid UTF-8 all reach the upstream
/// unchanged. There is no allow-list: whatever the caller sends, the upstream
/// receives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Option<String>);

impl QueryParams {
    /// 保存原始查询字符串 (`a=1&b=2`), 空串视为无参数
    pub fn parse(raw: Option<&str>) -> Self {
        Self(raw.filter(|q| !q.is_empty()).map(str::to_owned))
    }

    pub fn as_raw(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }
}
