use crate::rectangle::Rectangle;
use serde::{Deserialize, Serialize};

/// R-tree节点类型
///
/// 用于明确区分R-tree中的两种节点类型，避免概念混淆
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeType {
    /// 叶子节点：包含用户插入的真实数据条目
    Leaf,
    /// 索引节点：包含指向子节点的引用条目
    Index,
}

/// R-tree节点条目
///
/// 每个条目都包含一个MBR（最小边界矩形）和对应的内容：
/// - Data条目：持有用户数据，只出现在叶子节点中
/// - Node条目：持有子节点，只出现在索引节点中
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Entry<T> {
    /// 数据条目：存储用户插入的真实数据
    Data { mbr: Rectangle, data: T },

    /// 节点条目：存储指向子节点的引用
    ///
    /// mbr 是子节点全部条目的MBR副本，必须与 node.mbr 保持一致
    Node { mbr: Rectangle, node: Box<Node<T>> },
}

impl<T> Entry<T> {
    /// 获取条目的MBR（最小边界矩形）
    pub fn mbr(&self) -> &Rectangle {
        match self {
            Entry::Data { mbr, .. } => mbr,
            Entry::Node { mbr, .. } => mbr,
        }
    }

    /// 检查是否为数据条目
    pub fn is_data(&self) -> bool {
        matches!(self, Entry::Data { .. })
    }
}

/// R-tree节点
///
/// 叶子节点和索引节点共用同一个结构，由 node_type 区分
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node<T> {
    /// 节点的最小边界矩形，覆盖全部条目
    pub mbr: Rectangle,

    /// 节点包含的条目列表
    ///
    /// 叶子节点只包含Entry::Data条目，索引节点只包含Entry::Node条目
    pub entries: Vec<Entry<T>>,

    /// 节点类型
    pub node_type: NodeType,

    /// 节点在树中的层级，叶子层为0，向上递增
    pub level: usize,
}

impl<T> Node<T> {
    /// 创建新的叶子节点
    pub fn new_leaf() -> Self {
        Self::new(NodeType::Leaf, 0)
    }

    /// 创建新的索引节点
    ///
    /// # 参数
    /// * `level` - 节点在树中的层级，必须 > 0
    pub fn new_index(level: usize) -> Self {
        Self::new(NodeType::Index, level)
    }

    /// 创建指定类型和层级的节点
    pub fn new(node_type: NodeType, level: usize) -> Self {
        Node {
            mbr: Rectangle::default(),
            entries: Vec::new(),
            node_type,
            level,
        }
    }

    /// 检查是否为叶子节点
    pub fn is_leaf(&self) -> bool {
        matches!(self.node_type, NodeType::Leaf)
    }

    /// 检查是否为索引节点
    pub fn is_index(&self) -> bool {
        matches!(self.node_type, NodeType::Index)
    }

    /// 更新节点的MBR以包含所有条目
    ///
    /// 没有条目时退化为零值矩形
    pub fn update_mbr(&mut self) {
        let mut mbr = match self.entries.first() {
            Some(entry) => *entry.mbr(),
            None => Rectangle::default(),
        };

        for entry in self.entries.iter().skip(1) {
            mbr.expand(entry.mbr());
        }

        self.mbr = mbr;
    }

    /// 添加条目到节点，并更新节点的MBR
    ///
    /// 调用者保证条目类型与节点类型匹配：
    /// 叶子节点只能添加Entry::Data，索引节点只能添加Entry::Node
    pub fn add_entry(&mut self, entry: Entry<T>) {
        self.entries.push(entry);
        self.update_mbr();
    }

    /// 检查节点的条目数是否超过上限
    pub fn overflowing(&self, max_entries: usize) -> bool {
        self.entries.len() > max_entries
    }

    /// 检查节点的条目数是否低于下限
    pub fn underflowing(&self, min_entries: usize) -> bool {
        self.entries.len() < min_entries
    }
}
