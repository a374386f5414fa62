use crate::node::{Entry, Node};
use crate::rectangle::Rectangle;
use crate::rtree::{RTree, Spatial};

/// 搜索操作相关算法
impl<T: Spatial> RTree<T> {
    /// 窗口查询 - 返回边界框与查询矩形相交的所有数据 - 遵循论文Algorithm Search
    ///
    /// 用显式栈做深度优先遍历，避免倾斜树上的深层递归帧。
    /// 结果顺序不作保证，调用者不应依赖。
    pub fn query(&self, rect: &Rectangle) -> Vec<&T> {
        let mut results = Vec::new();
        let mut stack: Vec<&Node<T>> = vec![self.root_ref()];

        while let Some(node) = stack.pop() {
            // S1: 节点MBR与查询窗口不相交时整棵子树剪掉
            if !node.mbr.intersects(rect) {
                continue;
            }

            if node.is_leaf() {
                // S2: 叶子节点逐条目过滤
                for entry in &node.entries {
                    if let Entry::Data { mbr, data } = entry {
                        if mbr.intersects(rect) {
                            results.push(data);
                        }
                    }
                }
            } else {
                for entry in &node.entries {
                    if let Entry::Node { node: child, .. } = entry {
                        stack.push(child);
                    }
                }
            }
        }

        results
    }

    /// 遍历全部数据条目，顺序不作保证
    pub fn entries(&self) -> Vec<&T> {
        let mut items = Vec::new();
        let mut stack: Vec<&Node<T>> = vec![self.root_ref()];

        while let Some(node) = stack.pop() {
            if node.is_leaf() {
                for entry in &node.entries {
                    if let Entry::Data { data, .. } = entry {
                        items.push(data);
                    }
                }
            } else {
                for entry in &node.entries {
                    if let Entry::Node { node: child, .. } = entry {
                        stack.push(child);
                    }
                }
            }
        }

        items
    }
}
