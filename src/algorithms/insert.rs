use crate::node::Entry;
use crate::rectangle::Rectangle;
use crate::rtree::{RTree, Spatial};

/// 插入操作相关算法
impl<T: Spatial> RTree<T> {
    /// 插入新的数据条目 - 遵循论文Algorithm Insert
    ///
    /// 插入总是成功。树会获得数据的所有权，之后通过
    /// [`query`](RTree::query) / [`entries`](RTree::entries) 借出引用。
    pub fn insert(&mut self, item: T) {
        let mbr = item.bounding_box();
        let max_entries = self.max_entries();

        // I1: 选择叶子节点
        let leaf_path = self.choose_leaf_path(&mbr);

        // I2: 添加记录到叶子节点
        let leaf = self.node_mut(&leaf_path);
        leaf.add_entry(Entry::Data { mbr, data: item });

        // I3: 叶子溢出则分裂并向上传播，否则只向上更新MBR
        if leaf.overflowing(max_entries) {
            self.split_and_propagate(leaf_path);
        } else {
            self.adjust_tree_upward(leaf_path);
        }
    }

    /// 选择叶子节点路径 - 遵循论文ChooseLeaf算法
    ///
    /// 返回从根节点到目标叶子的子节点下标序列
    fn choose_leaf_path(&self, rect: &Rectangle) -> Vec<usize> {
        let mut path = Vec::new();
        let mut current = self.root_ref();

        // CL1/CL2: 从根节点开始下降，直到叶子
        while !current.is_leaf() {
            // CL3: 选择扩大面积最小的子树
            let best_index = Self::choose_subtree(&current.entries, rect);
            path.push(best_index);

            // CL4: 下降到子节点
            current = match &current.entries[best_index] {
                Entry::Node { node, .. } => node,
                Entry::Data { .. } => panic!("index node holds a data entry"),
            };
        }

        path
    }

    /// 选择子树 - 扩大面积最小者优先
    ///
    /// 扩大面积相同时取当前面积较小者，再相同取先遇到的
    fn choose_subtree(entries: &[Entry<T>], rect: &Rectangle) -> usize {
        let mut best_index = 0;
        let mut min_enlargement = f64::INFINITY;
        let mut min_area = f64::INFINITY;

        for (i, entry) in entries.iter().enumerate() {
            let mbr = entry.mbr();
            let enlargement = mbr.enlargement(rect);
            let area = mbr.area();

            if enlargement < min_enlargement || (enlargement == min_enlargement && area < min_area)
            {
                min_enlargement = enlargement;
                min_area = area;
                best_index = i;
            }
        }

        best_index
    }
}
