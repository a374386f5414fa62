use serde::{Deserialize, Serialize};

use crate::node::{Entry, Node, NodeType};
use crate::rectangle::Rectangle;
use crate::rtree::{RTree, Spatial};

/// 用于JSON序列化的简化树结构
#[derive(Debug, Serialize, Deserialize)]
pub struct TreeVisualization {
    /// 根节点
    pub root: NodeVisualization,
    /// 树的配置参数
    pub config: TreeConfig,
}

/// 用于JSON序列化的树配置
#[derive(Debug, Serialize, Deserialize)]
pub struct TreeConfig {
    pub max_entries: usize,
    pub min_entries: usize,
}

/// 用于JSON序列化的节点结构
#[derive(Debug, Serialize, Deserialize)]
pub struct NodeVisualization {
    /// 节点的最小边界矩形
    pub mbr: Rectangle,
    /// 节点类型
    pub node_type: NodeType,
    /// 节点层级
    pub level: usize,
    /// 数据条目的ID（仅叶子节点）
    pub data_entries: Vec<DataEntryVisualization>,
    /// 子节点（仅索引节点）
    pub child_nodes: Vec<NodeVisualization>,
}

/// 用于JSON序列化的数据条目
#[derive(Debug, Serialize, Deserialize)]
pub struct DataEntryVisualization {
    pub mbr: Rectangle,
    pub id: String,
}

/// 调试与结构校验
impl<T: Spatial> RTree<T> {
    /// 校验树的结构不变量，返回第一处违反的描述
    ///
    /// 校验内容：层级记账（叶子为0，子节点层级恰好比父节点小1，
    /// 因此所有叶子同深）、每个节点的MBR等于其条目MBR的并集、
    /// 父节点条目里的MBR副本与子节点自身的MBR一致、非根节点的
    /// 条目数落在 [min_entries, max_entries] 内、叶子只含数据条目
    /// 而索引节点只含子节点条目。
    pub fn validate(&self) -> Result<(), String> {
        self.validate_node(self.root_ref(), true)
    }

    fn validate_node(&self, node: &Node<T>, is_root: bool) -> Result<(), String> {
        // 条目数约束，根节点豁免下限
        if !is_root && node.underflowing(self.min_entries()) {
            return Err(format!(
                "node at level {} has {} entries, below minimum {}",
                node.level,
                node.entries.len(),
                self.min_entries()
            ));
        }
        if node.overflowing(self.max_entries()) {
            return Err(format!(
                "node at level {} has {} entries, above maximum {}",
                node.level,
                node.entries.len(),
                self.max_entries()
            ));
        }

        // 节点MBR必须等于全部条目MBR的并集，空节点退化为零值矩形
        let mut expected = match node.entries.first() {
            Some(entry) => *entry.mbr(),
            None => Rectangle::default(),
        };
        for entry in node.entries.iter().skip(1) {
            expected.expand(entry.mbr());
        }
        if node.mbr != expected {
            return Err(format!(
                "node at level {} has mbr {:?}, expected {:?}",
                node.level, node.mbr, expected
            ));
        }

        match node.node_type {
            NodeType::Leaf => {
                if node.level != 0 {
                    return Err(format!("leaf node at non-zero level {}", node.level));
                }
                if !node.entries.iter().all(|entry| entry.is_data()) {
                    return Err("leaf node holds a non-data entry".to_string());
                }
            }
            NodeType::Index => {
                if node.level == 0 {
                    return Err("index node at level 0".to_string());
                }
                for entry in &node.entries {
                    let Entry::Node { mbr, node: child } = entry else {
                        return Err(format!(
                            "index node at level {} holds a data entry",
                            node.level
                        ));
                    };
                    if child.level + 1 != node.level {
                        return Err(format!(
                            "child at level {} under parent at level {}",
                            child.level, node.level
                        ));
                    }
                    if *mbr != child.mbr {
                        return Err(format!(
                            "parent entry mbr {:?} does not match child mbr {:?}",
                            mbr, child.mbr
                        ));
                    }
                    self.validate_node(child, false)?;
                }
            }
        }

        Ok(())
    }

    /// 导出树结构为JSON格式
    ///
    /// 返回包含完整树结构的JSON字符串，用于前端可视化。
    /// 数据条目只导出ID和MBR，payload本身留在树里。
    pub fn export_to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.visualization())
    }

    /// 创建用于可视化的树结构
    fn visualization(&self) -> TreeVisualization {
        TreeVisualization {
            root: Self::node_visualization(self.root_ref()),
            config: TreeConfig {
                max_entries: self.max_entries(),
                min_entries: self.min_entries(),
            },
        }
    }

    /// 递归创建节点的可视化结构
    fn node_visualization(node: &Node<T>) -> NodeVisualization {
        let mut data_entries = Vec::new();
        let mut child_nodes = Vec::new();

        for entry in &node.entries {
            match entry {
                Entry::Data { mbr, data } => {
                    data_entries.push(DataEntryVisualization {
                        mbr: *mbr,
                        id: data.id().to_string(),
                    });
                }
                Entry::Node { node: child, .. } => {
                    child_nodes.push(Self::node_visualization(child));
                }
            }
        }

        NodeVisualization {
            mbr: node.mbr,
            node_type: node.node_type,
            level: node.level,
            data_entries,
            child_nodes,
        }
    }
}
