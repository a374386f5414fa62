use crate::error::RTreeError;
use crate::node::{Entry, Node};
use crate::rectangle::Rectangle;
use serde::{Deserialize, Serialize};

/// 空间数据能力
///
/// 树对任何提供边界框和ID的数据类型泛型。两个方法都必须是纯函数：
/// 数据在树中期间 `bounding_box` 必须保持稳定；`id` 用于删除时的
/// 等值匹配，需要能唯一标识一条数据。
pub trait Spatial {
    /// 数据的最小边界矩形
    fn bounding_box(&self) -> Rectangle;

    /// 数据的标识符，按字符串相等比较
    fn id(&self) -> &str;
}

/// 默认最小条目数m
pub const DEFAULT_MIN_ENTRIES: usize = 2;
/// 默认最大条目数M
pub const DEFAULT_MAX_ENTRIES: usize = 4;

/// R-tree主结构
///
/// 新建的树以一个空的叶子节点作为根节点。所有公共操作都在调用者
/// 线程上同步完成，返回时树处于完全一致的状态。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RTree<T> {
    /// 根节点
    root: Box<Node<T>>,
    /// 最大条目数M
    max_entries: usize,
    /// 最小条目数m
    min_entries: usize,
}

impl<T: Spatial> RTree<T> {
    /// 使用默认参数创建R-tree（m=2, M=4）
    pub fn new() -> Self {
        RTree {
            root: Box::new(Node::new_leaf()),
            max_entries: DEFAULT_MAX_ENTRIES,
            min_entries: DEFAULT_MIN_ENTRIES,
        }
    }

    /// 使用指定的最小/最大条目数创建R-tree
    ///
    /// 参数必须满足 `2 <= min` 且 `max >= 2 * min`，否则返回
    /// [`RTreeError::InvalidParameters`]，不产生任何树。
    pub fn with_min_max(min: usize, max: usize) -> Result<Self, RTreeError> {
        if min < DEFAULT_MIN_ENTRIES || max < 2 * min {
            return Err(RTreeError::InvalidParameters { min, max });
        }

        let mut tree = Self::new();
        tree.min_entries = min;
        tree.max_entries = max;
        Ok(tree)
    }

    /// 获取最小条目数m
    pub fn min_entries(&self) -> usize {
        self.min_entries
    }

    /// 获取最大条目数M
    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// 获取树的深度，只有根叶子时为1
    pub fn depth(&self) -> usize {
        self.root.level + 1
    }

    /// 获取数据条目总数
    pub fn len(&self) -> usize {
        Self::count_entries(&self.root)
    }

    /// 检查R-tree是否为空
    pub fn is_empty(&self) -> bool {
        self.root.entries.is_empty()
    }

    /// 统计节点子树中的数据条目数量
    fn count_entries(node: &Node<T>) -> usize {
        if node.is_leaf() {
            node.entries.len()
        } else {
            node.entries
                .iter()
                .map(|entry| match entry {
                    Entry::Node { node, .. } => Self::count_entries(node),
                    Entry::Data { .. } => 1,
                })
                .sum()
        }
    }

    /// 内部方法：获取根节点的引用
    pub(crate) fn root_ref(&self) -> &Node<T> {
        &self.root
    }

    /// 内部方法：获取根节点的可变引用
    ///
    /// 返回Box以便根节点的生长和收缩直接替换
    pub(crate) fn root_mut(&mut self) -> &mut Box<Node<T>> {
        &mut self.root
    }
}

impl<T: Spatial> Default for RTree<T> {
    fn default() -> Self {
        Self::new()
    }
}
