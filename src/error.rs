use thiserror::Error;

/// R-tree公共操作的错误类型
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RTreeError {
    /// 构造参数不满足 `2 <= min` 且 `max >= 2 * min`
    #[error("invalid parameters: min={min}, max={max} (must satisfy 2 <= min <= max/2)")]
    InvalidParameters { min: usize, max: usize },

    /// 删除时沿所有边界框相交的路径都没有找到ID匹配的条目
    #[error("entry not found: id={id}")]
    NotFound { id: String },
}
