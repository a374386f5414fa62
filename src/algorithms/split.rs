use std::mem;

use tracing::debug;

use crate::node::{Entry, Node};
use crate::rectangle::Rectangle;
use crate::rtree::{RTree, Spatial};

/// 节点分裂算法 - 完整的二次分裂(Quadratic Split)及溢出向上传播
impl<T: Spatial> RTree<T> {
    /// 分裂路径末端的溢出节点并向上传播
    ///
    /// 原节点原地收缩为分组A，父节点中指向它的条目保持有效；
    /// 分组B作为新的兄弟节点挂入父节点。根节点分裂时创建新的
    /// 索引根节点，树长高一层。
    pub(crate) fn split_and_propagate(&mut self, mut path: Vec<usize>) {
        let max_entries = self.max_entries();
        let min_entries = self.min_entries();

        // 取出全部条目执行二次分裂
        let node = self.node_mut(&path);
        let entries = mem::take(&mut node.entries);
        let node_type = node.node_type;
        let level = node.level;

        let (group_a, group_b) = Self::quadratic_split(min_entries, entries);

        debug!(
            level,
            group_a = group_a.len(),
            group_b = group_b.len(),
            "node split"
        );

        // 原节点原地变为分组A
        let node = self.node_mut(&path);
        node.entries = group_a;
        node.update_mbr();
        let a_mbr = node.mbr;

        // 分组B构成新的兄弟节点
        let mut sibling = Node::new(node_type, level);
        sibling.entries = group_b;
        sibling.update_mbr();
        let sibling_entry = Entry::Node {
            mbr: sibling.mbr,
            node: Box::new(sibling),
        };

        match path.pop() {
            None => {
                // 根节点分裂 - 旧根和兄弟节点挂到新的索引根下
                let old_root =
                    mem::replace(self.root_mut(), Box::new(Node::new_index(level + 1)));
                let old_root_entry = Entry::Node {
                    mbr: old_root.mbr,
                    node: old_root,
                };

                let root = self.root_mut();
                root.add_entry(old_root_entry);
                root.add_entry(sibling_entry);

                debug!(depth = level + 2, "root split, tree grew");
            }
            Some(index) => {
                // 同步父节点中指向分组A的条目MBR，再挂入兄弟节点
                let parent = self.node_mut(&path);
                if let Some(Entry::Node { mbr, .. }) = parent.entries.get_mut(index) {
                    *mbr = a_mbr;
                }
                parent.add_entry(sibling_entry);

                // 父节点溢出则继续分裂，否则只向上更新MBR
                if parent.overflowing(max_entries) {
                    self.split_and_propagate(path);
                } else {
                    self.adjust_tree_upward(path);
                }
            }
        }
    }

    /// 二次分裂 - 遵循论文Algorithm QuadraticSplit
    ///
    /// 把溢出节点的条目拆成两组，返回给调用者重建节点
    fn quadratic_split(
        min_entries: usize,
        mut entries: Vec<Entry<T>>,
    ) -> (Vec<Entry<T>>, Vec<Entry<T>>) {
        // QS1: 选择种子 - 两两组合中扩大面积最大的一对
        let (seed_a, seed_b) = Self::pick_seeds(&entries);

        // 先移除下标大的，避免另一个下标失效
        let removed_first = entries.remove(seed_a.max(seed_b));
        let removed_second = entries.remove(seed_a.min(seed_b));
        let (entry_a, entry_b) = if seed_a > seed_b {
            (removed_first, removed_second)
        } else {
            (removed_second, removed_first)
        };

        let mut mbr_a = *entry_a.mbr();
        let mut mbr_b = *entry_b.mbr();
        let mut group_a = vec![entry_a];
        let mut group_b = vec![entry_b];

        // QS2/QS3: 每轮选出偏好最强的条目，分给合适的组
        while !entries.is_empty() {
            let index = Self::pick_next(&entries, &mbr_a, &mbr_b);
            let entry = entries.remove(index);

            let to_a = Self::prefers_group_a(
                &entry,
                min_entries,
                group_a.len(),
                &mbr_a,
                group_b.len(),
                &mbr_b,
            );

            if to_a {
                mbr_a.expand(entry.mbr());
                group_a.push(entry);
            } else {
                mbr_b.expand(entry.mbr());
                group_b.push(entry);
            }
        }

        (group_a, group_b)
    }

    /// PickSeeds - 在所有有序对中选择扩大面积最大的一对作为种子
    ///
    /// 严格大于才更新，先遇到的组合胜出。全部组合的扩大面积都
    /// 不为正时（条目矩形完全相同），退化为前两个条目。
    fn pick_seeds(entries: &[Entry<T>]) -> (usize, usize) {
        let mut best = (0, 1);
        let mut max_enlargement = f64::NEG_INFINITY;

        for i in 0..entries.len() {
            for j in 0..entries.len() {
                if i == j {
                    continue;
                }

                let enlargement = entries[i].mbr().enlargement(entries[j].mbr());
                if enlargement > max_enlargement {
                    max_enlargement = enlargement;
                    best = (i, j);
                }
            }
        }

        best
    }

    /// PickNext - 选择对两组扩大成本差异最大的条目
    fn pick_next(entries: &[Entry<T>], mbr_a: &Rectangle, mbr_b: &Rectangle) -> usize {
        let mut next = 0;
        let mut max_diff = -1.0;

        for (i, entry) in entries.iter().enumerate() {
            let d1 = mbr_a.enlargement(entry.mbr());
            let d2 = mbr_b.enlargement(entry.mbr());
            let diff = (d1 - d2).abs();

            if diff > max_diff {
                max_diff = diff;
                next = i;
            }
        }

        next
    }

    /// ChooseGroup - 决定条目归属的分组，返回true表示归A组
    ///
    /// 1. A组不足最小条目数时归A；2. B组不足时归B；
    /// 3. 否则取扩大面积较小的组；4. 再取当前面积较小的组；
    /// 5. 仍然相同归A。
    fn prefers_group_a(
        entry: &Entry<T>,
        min_entries: usize,
        len_a: usize,
        mbr_a: &Rectangle,
        len_b: usize,
        mbr_b: &Rectangle,
    ) -> bool {
        if len_a < min_entries {
            return true;
        }
        if len_b < min_entries {
            return false;
        }

        let enlarge_a = mbr_a.enlargement(entry.mbr());
        let enlarge_b = mbr_b.enlargement(entry.mbr());

        if enlarge_a < enlarge_b {
            return true;
        }
        if enlarge_b < enlarge_a {
            return false;
        }

        mbr_a.area() <= mbr_b.area()
    }
}
